//! Page sections, in display order. Each section renders inside a
//! `region` wrapper that carries the DOM id the scroll-spy and palette
//! navigation target.

pub mod about;
pub mod contact;
pub mod experience;
pub mod hero;
pub mod projects;
pub mod skills;
pub mod timeline;

use shared::theme::Theme;
use zoon::*;

use crate::style;

fn region(section_id: &'static str, content: impl Element) -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Padding::new().top(84))
        .update_raw_el(move |raw_el| raw_el.attr("id", section_id))
        .child(content)
}

fn heading(theme: Mutable<Theme>, text: &'static str) -> impl Element {
    Row::new()
        .s(Align::new().center_y())
        .s(Gap::new().x(12))
        .s(Padding::new().bottom(18))
        .item(
            El::new()
                .s(Font::new()
                    .size(26)
                    .weight(FontWeight::SemiBold)
                    .color_signal(theme.signal().map(style::page_text)))
                .child(text),
        )
        .item(
            El::new()
                .s(Width::exact(46))
                .s(Height::exact(3))
                .s(RoundedCorners::all(2))
                .s(Background::new().color_signal(theme.signal().map(style::accent))),
        )
}

fn card(theme: Mutable<Theme>, content: impl Element) -> impl Element {
    El::new()
        .s(Width::fill())
        .s(RoundedCorners::all(16))
        .s(Background::new().color_signal(theme.signal().map(style::card_surface)))
        .s(Borders::all(
            Border::new().color(color!("rgba(128, 144, 176, 0.28)")).width(1),
        ))
        .s(Padding::all(22))
        .child(content)
}

fn chip(theme: Mutable<Theme>, label: &'static str) -> impl Element {
    El::new()
        .s(Padding::new().x(10).y(4))
        .s(RoundedCorners::all(10))
        .s(Background::new().color_signal(theme.signal().map(style::chip_background)))
        .s(Font::new()
            .size(12)
            .weight(FontWeight::Medium)
            .no_wrap()
            .color_signal(theme.signal().map(style::chip_text)))
        .child(label)
}
