use shared::content::{self, ExperienceEntry};
use shared::theme::Theme;
use zoon::*;

use crate::{style, PortfolioApp};

pub fn view(app: &PortfolioApp) -> impl Element + use<> {
    let theme = app.theme.clone();
    super::region(
        "experience",
        Column::new()
            .s(Width::fill())
            .item(super::heading(theme.clone(), "Experience"))
            .item(
                Column::new()
                    .s(Width::fill())
                    .s(Gap::new().y(16))
                    .items(
                        content::EXPERIENCE
                            .iter()
                            .map(|entry| entry_card(theme.clone(), entry)),
                    ),
            ),
    )
}

fn entry_card(theme: Mutable<Theme>, entry: &'static ExperienceEntry) -> impl Element {
    super::card(
        theme.clone(),
        Column::new()
            .s(Gap::new().y(10))
            .item(
                Row::new()
                    .s(Width::fill())
                    .s(Align::new().center_y())
                    .s(Gap::new().x(10).y(4))
                    .multiline()
                    .item(
                        El::new()
                            .s(Font::new()
                                .size(17)
                                .weight(FontWeight::SemiBold)
                                .color_signal(theme.signal().map(style::page_text)))
                            .child(entry.role),
                    )
                    .item(
                        El::new()
                            .s(Font::new().size(15).color_signal(theme.signal().map(style::accent)))
                            .child(entry.company),
                    )
                    .item(
                        El::new()
                            .s(Align::new().right())
                            .s(Font::new()
                                .size(13)
                                .no_wrap()
                                .color_signal(theme.signal().map(style::muted_text)))
                            .child(entry.period),
                    ),
            )
            .items(entry.highlights.iter().map(|highlight| {
                Row::new()
                    .s(Gap::new().x(8))
                    .s(Align::new().top())
                    .item(
                        El::new()
                            .s(Font::new().size(14).color_signal(theme.signal().map(style::accent)))
                            .child("•"),
                    )
                    .item(
                        El::new()
                            .s(Font::new()
                                .size(14)
                                .line_height(22)
                                .color_signal(theme.signal().map(style::muted_text)))
                            .child(*highlight),
                    )
            })),
    )
}
