use shared::content::{self, SkillGroup};
use shared::theme::Theme;
use zoon::*;

use crate::{style, PortfolioApp};

pub fn view(app: &PortfolioApp) -> impl Element + use<> {
    let theme = app.theme.clone();
    super::region(
        "skills",
        Column::new()
            .s(Width::fill())
            .item(super::heading(theme.clone(), "Skills"))
            .item(
                Row::new()
                    .s(Width::fill())
                    .s(Gap::new().x(16).y(16))
                    .s(Align::new().top())
                    .multiline()
                    .items(
                        content::SKILL_GROUPS
                            .iter()
                            .map(|group| group_card(theme.clone(), group)),
                    ),
            ),
    )
}

fn group_card(theme: Mutable<Theme>, group: &'static SkillGroup) -> impl Element {
    El::new()
        .s(Width::exact(250))
        .s(Align::new().top())
        .child(super::card(
            theme.clone(),
            Column::new()
                .s(Gap::new().y(12))
                .item(
                    El::new()
                        .s(Font::new()
                            .size(16)
                            .weight(FontWeight::SemiBold)
                            .color_signal(theme.signal().map(style::page_text)))
                        .child(group.name),
                )
                .item(
                    Row::new()
                        .s(Gap::new().x(8).y(8))
                        .multiline()
                        .items(group.skills.iter().map(|skill| super::chip(theme.clone(), *skill))),
                ),
        ))
}
