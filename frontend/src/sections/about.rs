use shared::content;
use zoon::*;

use crate::{style, PortfolioApp};

pub fn view(app: &PortfolioApp) -> impl Element + use<> {
    let theme = app.theme.clone();
    super::region(
        "about",
        Column::new()
            .s(Width::fill())
            .item(super::heading(theme.clone(), "About"))
            .item(super::card(
                theme.clone(),
                Column::new()
                    .s(Gap::new().y(14))
                    .item(
                        El::new()
                            .s(Font::new()
                                .size(15)
                                .line_height(25)
                                .color_signal(theme.signal().map(style::page_text)))
                            .child(content::PROFILE.bio),
                    )
                    .item(
                        El::new()
                            .s(Font::new()
                                .size(14)
                                .color_signal(theme.signal().map(style::muted_text)))
                            .child(content::PROFILE.location),
                    ),
            )),
    )
}
