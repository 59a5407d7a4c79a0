//! Project card grid. Each card carries a stable DOM id so palette
//! selection can centre it after scrolling the section into view.

use shared::content::{self, Project};
use shared::theme::Theme;
use zoon::{map_ref, *};

use crate::{style, PortfolioApp};

pub fn view(app: &PortfolioApp) -> impl Element + use<> {
    let theme = app.theme.clone();
    super::region(
        content::PROJECTS_SECTION_ID,
        Column::new()
            .s(Width::fill())
            .item(super::heading(theme.clone(), "Projects"))
            .item(
                Row::new()
                    .s(Width::fill())
                    .s(Gap::new().x(16).y(16))
                    .s(Align::new().top())
                    .multiline()
                    .items(
                        content::PROJECTS
                            .iter()
                            .map(|project| project_card(theme.clone(), project)),
                    ),
            ),
    )
}

fn project_card(theme: Mutable<Theme>, project: &'static Project) -> impl Element {
    let hovered = Mutable::new(false);
    El::new()
        .s(Width::exact(320))
        .s(Align::new().top())
        .s(RoundedCorners::all(16))
        .s(Background::new().color_signal(map_ref! {
            let theme = theme.signal(),
            let hovered = hovered.signal() =>
            if *hovered {
                style::card_surface_hovered(*theme)
            } else {
                style::card_surface(*theme)
            }
        }))
        .s(Borders::all(
            Border::new().color(color!("rgba(128, 144, 176, 0.28)")).width(1),
        ))
        .s(Padding::all(22))
        .update_raw_el(move |raw_el| raw_el.attr("id", &content::project_card_dom_id(project.id)))
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .child(
            Column::new()
                .s(Gap::new().y(12))
                .item(
                    El::new()
                        .s(Font::new()
                            .size(18)
                            .weight(FontWeight::SemiBold)
                            .color_signal(theme.signal().map(style::page_text)))
                        .child(project.name),
                )
                .item(
                    El::new()
                        .s(Font::new()
                            .size(14)
                            .line_height(22)
                            .color_signal(theme.signal().map(style::muted_text)))
                        .child(project.summary),
                )
                .item(
                    Row::new()
                        .s(Gap::new().x(8).y(8))
                        .multiline()
                        .items(project.tech.iter().map(|tech| super::chip(theme.clone(), *tech))),
                )
                .item(link_row(theme.clone(), project)),
        )
}

fn link_row(theme: Mutable<Theme>, project: &'static Project) -> impl Element {
    let row = Row::new()
        .s(Gap::new().x(14))
        .s(Padding::new().top(4))
        .item(project_link(theme.clone(), "Repository", project.repo_url));
    match project.live_url {
        Some(url) => row.item(project_link(theme, "Live", url)),
        None => row,
    }
}

fn project_link(theme: Mutable<Theme>, label: &'static str, url: &'static str) -> impl Element {
    Link::new()
        .s(Font::new()
            .size(13)
            .weight(FontWeight::Medium)
            .no_wrap()
            .line(FontLine::new().underline().offset(3))
            .color_signal(theme.signal().map(style::accent)))
        .label(label)
        .to(url)
        .new_tab(NewTab::new())
}
