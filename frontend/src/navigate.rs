//! Two-step navigation for project selections.
//!
//! Choosing a project in the palette first scrolls the projects section
//! into view, then centres the specific card once the first scroll has
//! settled. Settling is detected by a one-shot `scrollend` listener where
//! the browser supports it; elsewhere a fixed timer stands in. A
//! generation counter makes whichever signal fires second a no-op, so a
//! slow layout cannot double-scroll and a fast one does not wait out the
//! full fallback delay.

use shared::content;
use zoon::*;

use crate::dom;

/// Fallback settle delay for browsers without `scrollend`.
const SCROLL_SETTLE_MS: u32 = 600;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct NavState {
    generation: u64,
    pending_card: Option<&'static str>,
}

#[derive(Clone, Default)]
pub struct Navigator {
    state: Mutable<NavState>,
}

impl Navigator {
    /// Smooth-scroll straight to a section, cancelling any pending
    /// second-step card scroll.
    pub fn go_to_section(&self, section_id: &'static str) {
        {
            let mut state = self.state.lock_mut();
            state.generation += 1;
            state.pending_card = None;
        }
        dom::scroll_to_section(section_id);
    }

    /// Scroll to the projects section, then centre `project_id`'s card
    /// once that scroll settles.
    pub fn go_to_project(&self, project_id: &'static str) {
        let generation = {
            let mut state = self.state.lock_mut();
            state.generation += 1;
            state.pending_card = Some(project_id);
            state.generation
        };
        dom::scroll_to_section(content::PROJECTS_SECTION_ID);

        let complete = {
            let state = self.state.clone();
            move || Self::finish(&state, generation)
        };
        if dom::supports_scroll_end() {
            dom::on_next_scroll_end(complete.clone());
        }
        Task::start(async move {
            Timer::sleep(SCROLL_SETTLE_MS).await;
            complete();
        });
    }

    fn finish(state: &Mutable<NavState>, generation: u64) {
        let card = {
            let mut state = state.lock_mut();
            if state.generation != generation {
                return;
            }
            match state.pending_card.take() {
                Some(card) => card,
                None => return,
            }
        };
        dom::scroll_card_to_center(&content::project_card_dom_id(card));
    }
}
