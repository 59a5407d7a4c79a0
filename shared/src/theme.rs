//! Light/dark theme preference.
//!
//! Resolution order at startup: stored preference, then the platform's
//! reported colour scheme, then light. The store is a trait so the
//! frontend can back it with localStorage while tests use memory.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn flip(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn from_dark_flag(dark: bool) -> Self {
        if dark { Theme::Dark } else { Theme::Light }
    }
}

/// Durable single-slot preference storage.
///
/// `load` returning `None` means "no signal" (absent key or unavailable
/// API), never an error. `save` failures are the implementor's problem to
/// log; callers proceed regardless.
pub trait ThemeStore {
    fn load(&self) -> Option<bool>;
    fn save(&self, dark: bool);
}

/// Resolve the startup theme from the stored flag and the system hint.
pub fn resolve(stored: Option<bool>, system_prefers_dark: Option<bool>) -> Theme {
    Theme::from_dark_flag(stored.or(system_prefers_dark).unwrap_or(false))
}

/// Flip `current`, persist the new value, and return it.
pub fn toggle(current: Theme, store: &impl ThemeStore) -> Theme {
    let next = current.flip();
    store.save(next.is_dark());
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct MemoryStore {
        slot: Cell<Option<bool>>,
    }

    impl ThemeStore for MemoryStore {
        fn load(&self) -> Option<bool> {
            self.slot.get()
        }

        fn save(&self, dark: bool) {
            self.slot.set(Some(dark));
        }
    }

    #[test]
    fn stored_preference_wins_over_system() {
        assert_eq!(resolve(Some(false), Some(true)), Theme::Light);
        assert_eq!(resolve(Some(true), Some(false)), Theme::Dark);
    }

    #[test]
    fn system_preference_fills_in_when_nothing_stored() {
        assert_eq!(resolve(None, Some(true)), Theme::Dark);
        assert_eq!(resolve(None, Some(false)), Theme::Light);
    }

    #[test]
    fn default_is_light_when_no_signal_at_all() {
        assert_eq!(resolve(None, None), Theme::Light);
    }

    #[test]
    fn toggle_persists_across_a_simulated_reload() {
        let store = MemoryStore::default();
        let toggled = toggle(Theme::Light, &store);
        assert_eq!(toggled, Theme::Dark);

        // "Reload": resolve from the store with the system preferring the
        // opposite; the stored value must win without consulting it.
        assert_eq!(resolve(store.load(), Some(false)), Theme::Dark);
    }
}
