use shared::content;
use zoon::{map_ref, *};

use crate::{style, PortfolioApp};

pub fn view(app: &PortfolioApp) -> impl Element + use<> {
    let theme = app.theme.clone();
    super::region(
        "home",
        Column::new()
            .s(Width::fill())
            .s(Padding::new().top(36))
            .s(Gap::new().y(18))
            .item(
                El::new()
                    .s(Font::new()
                        .size(46)
                        .weight(FontWeight::Bold)
                        .color_signal(theme.signal().map(style::page_text)))
                    .child(content::PROFILE.name),
            )
            .item(
                El::new()
                    .s(Font::new()
                        .size(20)
                        .color_signal(theme.signal().map(style::accent)))
                    .child(content::PROFILE.headline),
            )
            .item(
                El::new()
                    .s(Width::fill().max(640))
                    .s(Font::new()
                        .size(16)
                        .line_height(26)
                        .color_signal(theme.signal().map(style::muted_text)))
                    .child(content::PROFILE.bio),
            )
            .item(
                Row::new()
                    .s(Gap::new().x(12).y(8))
                    .s(Padding::new().top(8))
                    .multiline()
                    .item(resume_link(app))
                    .item(contact_button(app)),
            ),
    )
}

fn resume_link(app: &PortfolioApp) -> impl Element + use<> {
    let hovered = Mutable::new(false);
    let theme = app.theme.clone();
    Link::new()
        .s(Padding::new().x(16).y(9))
        .s(RoundedCorners::all(12))
        .s(Background::new().color_signal(map_ref! {
            let theme = theme.signal(),
            let hovered = hovered.signal() =>
            style::button_background(*theme, *hovered)
        }))
        .s(Font::new()
            .size(14)
            .weight(FontWeight::SemiBold)
            .no_wrap()
            .color_signal(theme.signal().map(style::accent_contrast_text)))
        .label("Download résumé")
        .to(content::PROFILE.resume_url)
        .new_tab(NewTab::new())
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
}

fn contact_button(app: &PortfolioApp) -> impl Element + use<> {
    let hovered = Mutable::new(false);
    let theme = app.theme.clone();
    let navigator = app.navigator.clone();
    Button::new()
        .s(Padding::new().x(16).y(9))
        .s(RoundedCorners::all(12))
        .s(Background::new().color_signal(map_ref! {
            let theme = theme.signal(),
            let hovered = hovered.signal() =>
            style::ghost_button_background(*theme, *hovered)
        }))
        .s(Font::new()
            .size(14)
            .weight(FontWeight::Medium)
            .no_wrap()
            .color_signal(theme.signal().map(style::page_text)))
        .label("Get in touch")
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .on_press(move || navigator.go_to_section("contact"))
}
