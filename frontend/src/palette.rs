//! Command palette overlay: backdrop, query input, and the bounded result
//! list. Opened via Ctrl/Cmd+K or the header button; closed by Escape,
//! backdrop click, the ✕ button, or a selection.

use shared::content;
use shared::search::{SearchHit, SearchTarget};
use zoon::{map_ref, *};

use crate::{style, PortfolioApp};

pub fn overlay(app: &PortfolioApp) -> impl Element + use<> {
    Stack::new()
        .s(Width::fill())
        .s(Height::fill())
        .update_raw_el(|raw_el| {
            raw_el
                .style("position", "fixed")
                .style("inset", "0")
                .style("z-index", "100")
        })
        .layer(backdrop(app))
        .layer(panel(app))
}

fn backdrop(app: &PortfolioApp) -> impl Element + use<> {
    let app_for_close = app.clone();
    El::new()
        .s(Width::fill())
        .s(Height::fill())
        .s(Background::new().color_signal(app.theme.signal().map(style::overlay_backdrop)))
        .on_pointer_up(move || app_for_close.close_palette())
}

fn panel(app: &PortfolioApp) -> impl Element + use<> {
    let theme = app.theme.clone();
    El::new()
        .s(Width::fill())
        .s(Align::new().top())
        .s(Padding::new().top(110).x(16))
        .pointer_handling(PointerHandling::none())
        .child(
            Column::new()
                .s(Width::fill().max(560))
                .s(Align::new().center_x())
                .s(RoundedCorners::all(18))
                .s(Clip::both())
                .s(Background::new().color_signal(theme.signal().map(style::panel_surface)))
                .s(Borders::all(
                    Border::new().color(color!("rgba(128, 144, 176, 0.25)")).width(1),
                ))
                .s(Shadows::new([Shadow::new()
                    .color(color!("rgba(8, 14, 30, 0.4)"))
                    .y(24)
                    .blur(60)
                    .spread(-12)]))
                .update_raw_el(|raw_el| raw_el.style("pointer-events", "auto"))
                .item(input_row(app))
                .item(results_list(app)),
        )
}

fn input_row(app: &PortfolioApp) -> impl Element + use<> {
    let theme = app.theme.clone();
    let app_for_change = app.clone();
    let app_for_keys = app.clone();
    Row::new()
        .s(Width::fill())
        .s(Align::new().center_y())
        .s(Gap::new().x(8))
        .s(Padding::new().x(14).y(12))
        .s(Borders::new().bottom(
            Border::new().color(color!("rgba(128, 144, 176, 0.2)")).width(1),
        ))
        .item(
            TextInput::new()
                .s(Width::fill())
                .s(Font::new().size(16).color_signal(theme.signal().map(style::page_text)))
                .s(Background::new().color(color!("rgba(0, 0, 0, 0)")))
                .update_raw_el(|raw_el| raw_el.style("outline", "none").style("border", "none"))
                .focus(true)
                .placeholder(Placeholder::new("Jump to a section or project…"))
                .text_signal(app.palette.signal_cloned().map(|model| model.query).dedupe_cloned())
                .on_change(move |query| app_for_change.palette.lock_mut().set_query(query))
                .on_key_down_event(move |event| match event.key() {
                    Key::Enter => app_for_keys.select_highlighted(),
                    Key::Escape => app_for_keys.close_palette(),
                    Key::Other(key) if key.as_str() == "ArrowDown" => {
                        app_for_keys.move_palette_highlight(1)
                    }
                    Key::Other(key) if key.as_str() == "ArrowUp" => {
                        app_for_keys.move_palette_highlight(-1)
                    }
                    _ => (),
                }),
        )
        .item(close_button(app))
}

fn close_button(app: &PortfolioApp) -> impl Element + use<> {
    let hovered = Mutable::new(false);
    let theme = app.theme.clone();
    let app_for_press = app.clone();
    Button::new()
        .s(Padding::new().x(8).y(4))
        .s(RoundedCorners::all(8))
        .s(Background::new().color_signal(map_ref! {
            let theme = theme.signal(),
            let hovered = hovered.signal() =>
            style::ghost_button_background(*theme, *hovered)
        }))
        .s(Font::new().size(13).color_signal(theme.signal().map(style::muted_text)))
        .label("✕")
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .on_press(move || app_for_press.close_palette())
}

fn results_list(app: &PortfolioApp) -> impl Element + use<> {
    let app_for_rows = app.clone();
    Column::new()
        .s(Width::fill())
        .s(Padding::new().y(6))
        .update_raw_el(|raw_el| {
            raw_el
                .style("max-height", "360px")
                .style("overflow-y", "auto")
        })
        .items_signal_vec(
            app.palette
                .signal_cloned()
                .map(move |model| {
                    let results = model.results(content::SECTIONS, content::PROJECTS);
                    if results.is_empty() {
                        vec![no_results_row(&app_for_rows).unify()]
                    } else {
                        results
                            .into_iter()
                            .enumerate()
                            .map(|(index, hit)| {
                                result_row(&app_for_rows, hit, index == model.highlighted).unify()
                            })
                            .collect()
                    }
                })
                .to_signal_vec(),
        )
}

fn result_row(app: &PortfolioApp, hit: SearchHit, highlighted: bool) -> impl Element + use<> {
    let hovered = Mutable::new(false);
    let theme = app.theme.clone();
    let app_for_press = app.clone();
    let kind = match hit.target {
        SearchTarget::Section(_) => "Section",
        SearchTarget::Project(_) => "Project",
    };
    Button::new()
        .s(Width::fill())
        .s(Padding::new().x(14).y(10))
        .s(Background::new().color_signal(map_ref! {
            let theme = theme.signal(),
            let hovered = hovered.signal() =>
            style::result_row_background(*theme, highlighted, *hovered)
        }))
        .label(
            Row::new()
                .s(Width::fill())
                .s(Align::new().center_y())
                .s(Gap::new().x(10))
                .item(
                    El::new()
                        .s(Font::new().size(14).color_signal(theme.signal().map(style::page_text)))
                        .child(hit.label),
                )
                .item(
                    El::new()
                        .s(Align::new().right())
                        .s(Padding::new().x(8).y(2))
                        .s(RoundedCorners::all(8))
                        .s(Background::new()
                            .color_signal(theme.signal().map(style::chip_background)))
                        .s(Font::new()
                            .size(11)
                            .no_wrap()
                            .color_signal(theme.signal().map(style::chip_text)))
                        .child(kind),
                ),
        )
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .on_press(move || app_for_press.select(hit))
}

fn no_results_row(app: &PortfolioApp) -> impl Element + use<> {
    El::new()
        .s(Padding::new().x(14).y(16))
        .s(Font::new().size(14).italic().color_signal(app.theme.signal().map(style::muted_text)))
        .child("No results")
}
