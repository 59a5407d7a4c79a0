//! Command palette overlay model.
//!
//! Two states: closed and open. Opening always starts from a blank query;
//! closing has no side effects of its own (selection effects are the
//! frontend's job and only run on an explicit selection).

use crate::content::{Project, Section};
use crate::search::{search, SearchHit};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaletteModel {
    pub is_open: bool,
    pub query: String,
    pub highlighted: usize,
}

impl PaletteModel {
    /// Open the overlay. The query resets to empty on every closed → open
    /// transition, regardless of what was typed before the previous close.
    pub fn open(&mut self) {
        self.query.clear();
        self.highlighted = 0;
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.highlighted = 0;
    }

    /// Move the keyboard highlight by `delta`, clamped to the result list.
    pub fn move_highlight(&mut self, delta: isize, result_count: usize) {
        if result_count == 0 {
            self.highlighted = 0;
            return;
        }
        let last = result_count - 1;
        let moved = self.highlighted.saturating_add_signed(delta);
        self.highlighted = moved.min(last);
    }

    pub fn results(
        &self,
        sections: &'static [Section],
        projects: &'static [Project],
    ) -> Vec<SearchHit> {
        search(&self.query, sections, projects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_always_resets_the_query() {
        let mut palette = PaletteModel::default();
        palette.open();
        palette.set_query("queue".to_string());
        palette.close();
        assert_eq!(palette.query, "queue");

        palette.open();
        assert!(palette.is_open);
        assert_eq!(palette.query, "");
        assert_eq!(palette.highlighted, 0);
    }

    #[test]
    fn escape_close_changes_nothing_but_the_open_flag() {
        let mut palette = PaletteModel::default();
        palette.open();
        palette.set_query("tra".to_string());
        let before = palette.clone();

        palette.close();
        assert!(!palette.is_open);
        assert_eq!(palette.query, before.query);
        assert_eq!(palette.highlighted, before.highlighted);
    }

    #[test]
    fn toggle_round_trips_through_both_states() {
        let mut palette = PaletteModel::default();
        palette.toggle();
        assert!(palette.is_open);
        palette.toggle();
        assert!(!palette.is_open);
    }

    #[test]
    fn typing_resets_the_highlight() {
        let mut palette = PaletteModel::default();
        palette.open();
        palette.move_highlight(3, 5);
        assert_eq!(palette.highlighted, 3);
        palette.set_query("a".to_string());
        assert_eq!(palette.highlighted, 0);
    }

    #[test]
    fn highlight_clamps_to_the_result_list() {
        let mut palette = PaletteModel::default();
        palette.move_highlight(10, 4);
        assert_eq!(palette.highlighted, 3);
        palette.move_highlight(-1, 4);
        assert_eq!(palette.highlighted, 2);
        palette.move_highlight(-10, 4);
        assert_eq!(palette.highlighted, 0);
        palette.move_highlight(2, 0);
        assert_eq!(palette.highlighted, 0);
    }
}
