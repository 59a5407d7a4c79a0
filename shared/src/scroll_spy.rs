//! Active-section selection.
//!
//! The frontend measures each configured section's top edge relative to the
//! viewport top and feeds the pairs here. A section qualifies once its top
//! edge is at or above the activation line; among qualifiers the lowest one
//! (largest top value) is the section the user is currently reading.

/// Activation line, in pixels from the viewport top.
pub const ACTIVE_OFFSET_PX: f64 = 120.0;

/// Pick the active section from `(section id, top edge px)` pairs.
///
/// Returns `None` when no section has crossed the threshold yet (top of
/// page); the caller keeps its previous state, which starts as the first
/// configured section. Sections without a measurable DOM element are
/// simply absent from `offsets`.
pub fn pick_active<'a>(offsets: &[(&'a str, f64)], threshold: f64) -> Option<&'a str> {
    offsets
        .iter()
        .filter(|(_, top)| *top <= threshold)
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(id, _)| *id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowest_crossed_section_wins() {
        // Both crossed the line; "skills" (top 30) is closer to it.
        let offsets = [("about", -50.0), ("skills", 30.0)];
        assert_eq!(pick_active(&offsets, 120.0), Some("skills"));
    }

    #[test]
    fn nothing_crossed_keeps_previous_state() {
        let offsets = [("about", 400.0), ("skills", 900.0)];
        assert_eq!(pick_active(&offsets, 120.0), None);
    }

    #[test]
    fn result_is_always_a_configured_section() {
        let offsets = [("home", -900.0), ("about", -300.0), ("contact", 80.0)];
        for threshold in [-1000.0, -500.0, 0.0, 120.0, 5000.0] {
            if let Some(id) = pick_active(&offsets, threshold) {
                assert!(offsets.iter().any(|(candidate, _)| *candidate == id));
            }
        }
    }

    #[test]
    fn unmeasurable_sections_are_skipped() {
        // "skills" has no DOM element, so it never appears in the input.
        let offsets = [("about", 10.0)];
        assert_eq!(pick_active(&offsets, 120.0), Some("about"));
    }

    #[test]
    fn section_exactly_on_the_line_qualifies() {
        let offsets = [("about", 120.0)];
        assert_eq!(pick_active(&offsets, 120.0), Some("about"));
    }
}
