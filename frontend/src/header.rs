//! Sticky navigation bar: section links with active highlighting, the
//! palette trigger, and the theme toggle.

use shared::content::{self, Section};
use zoon::{map_ref, *};

use crate::{style, PortfolioApp};

pub fn view(app: &PortfolioApp) -> impl Element + use<> {
    let theme = app.theme.clone();
    Row::new()
        .s(Width::fill())
        .s(Align::new().center_y())
        .s(Gap::new().x(10).y(6))
        .s(Padding::new().x(18).y(10))
        .s(RoundedCorners::all(16))
        .s(Background::new().color_signal(theme.signal().map(style::header_surface)))
        .s(Shadows::new([Shadow::new()
            .color(color!("rgba(10, 16, 30, 0.22)"))
            .y(10)
            .blur(28)
            .spread(-10)]))
        .multiline()
        .update_raw_el(|raw_el| {
            raw_el
                .style("position", "sticky")
                .style("top", "10px")
                .style("z-index", "40")
                .style("backdrop-filter", "blur(18px)")
        })
        .item(brand(app))
        .item(nav_links(app))
        .item(search_button(app))
        .item(theme_toggle(app))
}

fn brand(app: &PortfolioApp) -> impl Element + use<> {
    let theme = app.theme.clone();
    El::new()
        .s(Font::new()
            .size(16)
            .weight(FontWeight::SemiBold)
            .no_wrap()
            .color_signal(theme.signal().map(style::accent)))
        .s(Padding::new().right(8))
        .child(content::PROFILE.name)
}

fn nav_links(app: &PortfolioApp) -> impl Element + use<> {
    Row::new()
        .s(Width::fill())
        .s(Align::new().center_y())
        .s(Gap::new().x(2).y(4))
        .multiline()
        .items(content::SECTIONS.iter().map(|section| nav_button(app, *section)))
}

fn nav_button(app: &PortfolioApp, section: Section) -> impl Element + use<> {
    let hovered = Mutable::new(false);
    let theme = app.theme.clone();
    let active_section = app.active_section.clone();
    let navigator = app.navigator.clone();
    Button::new()
        .s(Padding::new().x(10).y(6))
        .s(RoundedCorners::all(10))
        .s(Font::new()
            .size(14)
            .weight(FontWeight::Medium)
            .no_wrap()
            .color_signal(map_ref! {
                let theme = theme.signal(),
                let active = active_section.signal(),
                let hovered = hovered.signal() =>
                style::nav_text(*theme, *active == section.id, *hovered)
            }))
        .label(section.label)
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .on_press(move || navigator.go_to_section(section.id))
}

fn search_button(app: &PortfolioApp) -> impl Element + use<> {
    let hovered = Mutable::new(false);
    let theme = app.theme.clone();
    let app_for_press = app.clone();
    Button::new()
        .s(Padding::new().x(12).y(6))
        .s(RoundedCorners::all(10))
        .s(Background::new().color_signal(map_ref! {
            let theme = theme.signal(),
            let hovered = hovered.signal() =>
            style::ghost_button_background(*theme, *hovered)
        }))
        .s(Font::new().size(13).no_wrap().color_signal(theme.signal().map(style::muted_text)))
        .label(
            Row::new()
                .s(Align::new().center_y())
                .s(Gap::new().x(8))
                .item(El::new().child("Search"))
                .item(
                    El::new()
                        .s(Padding::new().x(6).y(2))
                        .s(RoundedCorners::all(6))
                        .s(Background::new()
                            .color_signal(theme.signal().map(style::chip_background)))
                        .s(Font::new().size(11).no_wrap())
                        .child("Ctrl/⌘ K"),
                ),
        )
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .on_press(move || app_for_press.open_palette())
}

fn theme_toggle(app: &PortfolioApp) -> impl Element + use<> {
    let hovered = Mutable::new(false);
    let theme = app.theme.clone();
    let app_for_press = app.clone();
    Button::new()
        .s(Padding::new().x(12).y(6))
        .s(RoundedCorners::all(10))
        .s(Background::new().color_signal(map_ref! {
            let theme = theme.signal(),
            let hovered = hovered.signal() =>
            style::ghost_button_background(*theme, *hovered)
        }))
        .s(Font::new().size(13).no_wrap().color_signal(theme.signal().map(style::muted_text)))
        .label(El::new().child_signal(
            app.theme
                .signal()
                .map(|theme| if theme.is_dark() { "☀ Light" } else { "☾ Dark" }),
        ))
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .on_press(move || app_for_press.toggle_theme())
}
