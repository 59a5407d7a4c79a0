use shared::content::{self, SocialLink};
use shared::theme::Theme;
use zoon::*;

use crate::{style, PortfolioApp};

pub fn view(app: &PortfolioApp) -> impl Element + use<> {
    let theme = app.theme.clone();
    super::region(
        "contact",
        Column::new()
            .s(Width::fill())
            .item(super::heading(theme.clone(), "Contact"))
            .item(super::card(
                theme.clone(),
                Column::new()
                    .s(Gap::new().y(14))
                    .item(
                        El::new()
                            .s(Font::new()
                                .size(15)
                                .color_signal(theme.signal().map(style::page_text)))
                            .child("Want to talk about a project, a role, or just Rust on the web? My inbox is open."),
                    )
                    .item(email_link(theme.clone()))
                    .item(
                        El::new()
                            .s(Font::new()
                                .size(14)
                                .color_signal(theme.signal().map(style::muted_text)))
                            .child(content::PROFILE.location),
                    )
                    .item(
                        Row::new()
                            .s(Gap::new().x(14).y(8))
                            .multiline()
                            .items(
                                content::PROFILE
                                    .socials
                                    .iter()
                                    .map(|social| social_link(theme.clone(), social)),
                            ),
                    ),
            ))
            .item(footer(theme)),
    )
}

fn email_link(theme: Mutable<Theme>) -> impl Element {
    Link::new()
        .s(Font::new()
            .size(16)
            .weight(FontWeight::SemiBold)
            .line(FontLine::new().underline().offset(3))
            .color_signal(theme.signal().map(style::accent)))
        .label(content::PROFILE.email)
        .to(format!("mailto:{}", content::PROFILE.email))
}

fn social_link(theme: Mutable<Theme>, social: &'static SocialLink) -> impl Element {
    Link::new()
        .s(Font::new()
            .size(14)
            .weight(FontWeight::Medium)
            .no_wrap()
            .line(FontLine::new().underline().offset(3))
            .color_signal(theme.signal().map(style::accent)))
        .label(social.label)
        .to(social.url)
        .new_tab(NewTab::new())
}

fn footer(theme: Mutable<Theme>) -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Padding::new().top(48))
        .s(Font::new()
            .size(13)
            .center()
            .color_signal(theme.signal().map(style::muted_text)))
        .child("© 2026 Jordan Reyes · Built with Rust, MoonZoon, and WebAssembly")
}
