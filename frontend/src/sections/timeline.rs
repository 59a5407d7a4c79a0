use shared::content::{self, TimelineEntry};
use shared::theme::Theme;
use zoon::*;

use crate::{style, PortfolioApp};

pub fn view(app: &PortfolioApp) -> impl Element + use<> {
    let theme = app.theme.clone();
    super::region(
        "timeline",
        Column::new()
            .s(Width::fill())
            .item(super::heading(theme.clone(), "Timeline"))
            .item(
                Column::new()
                    .s(Width::fill())
                    .s(Gap::new().y(14))
                    .items(
                        content::TIMELINE
                            .iter()
                            .map(|entry| entry_row(theme.clone(), entry)),
                    ),
            ),
    )
}

fn entry_row(theme: Mutable<Theme>, entry: &'static TimelineEntry) -> impl Element {
    Row::new()
        .s(Width::fill())
        .s(Gap::new().x(16))
        .s(Align::new().top())
        .item(
            El::new()
                .s(Width::exact(56))
                .s(Font::new()
                    .size(14)
                    .weight(FontWeight::SemiBold)
                    .no_wrap()
                    .color_signal(theme.signal().map(style::accent)))
                .child(entry.year),
        )
        .item(
            Column::new()
                .s(Width::fill())
                .s(Gap::new().y(4))
                .item(
                    El::new()
                        .s(Font::new()
                            .size(15)
                            .weight(FontWeight::Medium)
                            .color_signal(theme.signal().map(style::page_text)))
                        .child(entry.title),
                )
                .item(
                    El::new()
                        .s(Font::new()
                            .size(14)
                            .line_height(22)
                            .color_signal(theme.signal().map(style::muted_text)))
                        .child(entry.detail),
                ),
        )
}
