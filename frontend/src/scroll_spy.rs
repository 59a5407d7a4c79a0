//! Scroll-spy glue: measures the configured sections and feeds the pure
//! selection in `shared::scroll_spy`.
//!
//! The scroll handler owning this recomputation is the only writer of the
//! active-section state; `set_neq` keeps rapid scroll events idempotent.

use shared::content;
use shared::scroll_spy::{pick_active, ACTIVE_OFFSET_PX};
use zoon::*;

use crate::dom;

pub fn recompute(active_section: &Mutable<&'static str>) {
    let offsets: Vec<(&'static str, f64)> = content::SECTIONS
        .iter()
        .filter_map(|section| dom::element_top(section.id).map(|top| (section.id, top)))
        .collect();

    // No section past the activation line yet: keep the current state
    // (initialised to the first configured section).
    if let Some(id) = pick_active(&offsets, ACTIVE_OFFSET_PX) {
        active_section.set_neq(id);
    }
}
