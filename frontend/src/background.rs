//! Decorative fixed background: theme gradient plus two drifting orbs.
//! The orb keyframes live in the global stylesheet served by the backend.

use shared::theme::Theme;
use zoon::*;

use crate::style;

pub fn view(theme: Mutable<Theme>) -> impl Element {
    Stack::new()
        .s(Width::fill())
        .s(Height::fill())
        .update_raw_el({
            let theme = theme.clone();
            move |raw_el| {
                raw_el
                    .style("position", "fixed")
                    .style("inset", "0")
                    .style("z-index", "-1")
                    .style("pointer-events", "none")
                    .style("overflow", "hidden")
                    .style_signal("background", theme.signal().map(style::background_gradient))
            }
        })
        .layer(orb(theme.clone(), true, "bg-orb bg-orb-a"))
        .layer(orb(theme, false, "bg-orb bg-orb-b"))
}

fn orb(theme: Mutable<Theme>, warm: bool, class: &'static str) -> impl Element {
    El::new().update_raw_el(move |raw_el| {
        raw_el
            .attr("class", class)
            .style_signal("background", theme.signal().map(move |theme| style::orb_color(theme, warm)))
    })
}
