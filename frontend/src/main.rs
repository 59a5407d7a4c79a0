//! Application shell.
//!
//! `PortfolioApp` owns the client state (theme, active section, palette
//! model, and the two-step navigator), each field with a single writer.
//! Global keyboard and scroll subscriptions are registered on the root
//! element so they live exactly as long as the app.

use shared::content;
use shared::palette::PaletteModel;
use shared::search::{SearchHit, SearchTarget};
use shared::theme::Theme;
use zoon::*;

mod background;
mod dom;
mod header;
mod navigate;
mod palette;
mod scroll_spy;
mod sections;
mod style;
mod theme;

use navigate::Navigator;

fn main() {
    start_app("app", PortfolioApp::new);
}

#[derive(Clone)]
pub struct PortfolioApp {
    pub theme: Mutable<Theme>,
    pub active_section: Mutable<&'static str>,
    pub palette: Mutable<PaletteModel>,
    pub navigator: Navigator,
}

impl PortfolioApp {
    fn new() -> impl Element {
        let app = Self {
            theme: Mutable::new(theme::initial_theme()),
            active_section: Mutable::new(content::first_section().id),
            palette: Mutable::new(PaletteModel::default()),
            navigator: Navigator::default(),
        };

        // First evaluation once the sections are in the document.
        Task::start({
            let active_section = app.active_section.clone();
            async move { scroll_spy::recompute(&active_section) }
        });

        app.root()
    }

    fn root(&self) -> impl Element + use<> {
        Stack::new()
            .s(Width::fill())
            .layer(background::view(self.theme.clone()))
            .update_raw_el({
                let app = self.clone();
                move |raw_el| {
                    raw_el.global_event_handler_with_options(
                        EventOptions::new().preventable().parents_first(),
                        move |event: events::KeyDown| {
                            if event.repeat() {
                                return;
                            }
                            let key = event.key();
                            if (event.ctrl_key() || event.meta_key())
                                && key.eq_ignore_ascii_case("k")
                            {
                                event.prevent_default();
                                app.toggle_palette();
                            } else if key == "Escape" {
                                app.close_palette();
                            }
                        },
                    )
                }
            })
            .update_raw_el({
                let active_section = self.active_section.clone();
                move |raw_el| {
                    raw_el.global_event_handler(move |_: events::Scroll| {
                        scroll_spy::recompute(&active_section)
                    })
                }
            })
            .layer(self.page())
            .layer_signal(
                self.palette
                    .signal_ref(|model| model.is_open)
                    .dedupe()
                    .map_bool(
                        {
                            let app = self.clone();
                            move || Some(palette::overlay(&app))
                        },
                        || None,
                    ),
            )
    }

    fn page(&self) -> impl Element + use<> {
        Column::new()
            .s(Width::fill().max(1060))
            .s(Align::new().center_x())
            .s(Padding::new().x(20).bottom(60))
            .item(header::view(self))
            .item(sections::hero::view(self))
            .item(sections::about::view(self))
            .item(sections::skills::view(self))
            .item(sections::projects::view(self))
            .item(sections::experience::view(self))
            .item(sections::timeline::view(self))
            .item(sections::contact::view(self))
    }

    pub fn open_palette(&self) {
        self.palette.lock_mut().open();
    }

    pub fn close_palette(&self) {
        self.palette.lock_mut().close();
    }

    pub fn toggle_palette(&self) {
        self.palette.lock_mut().toggle();
    }

    pub fn toggle_theme(&self) {
        theme::toggle(&self.theme);
    }

    pub fn move_palette_highlight(&self, delta: isize) {
        let mut model = self.palette.lock_mut();
        let result_count = model.results(content::SECTIONS, content::PROJECTS).len();
        model.move_highlight(delta, result_count);
    }

    pub fn select_highlighted(&self) {
        let hit = {
            let model = self.palette.lock_ref();
            model
                .results(content::SECTIONS, content::PROJECTS)
                .into_iter()
                .nth(model.highlighted)
        };
        if let Some(hit) = hit {
            self.select(hit);
        }
    }

    /// Selection side effects: close the overlay, then navigate.
    pub fn select(&self, hit: SearchHit) {
        self.close_palette();
        match hit.target {
            SearchTarget::Section(section_id) => self.navigator.go_to_section(section_id),
            SearchTarget::Project(project_id) => self.navigator.go_to_project(project_id),
        }
    }
}
