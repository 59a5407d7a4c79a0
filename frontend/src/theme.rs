//! Theme persistence over localStorage.

use shared::theme::{self, Theme, ThemeStore};
use zoon::{eprintln, *};

use crate::dom;

static THEME_STORAGE_KEY: &str = "portfolio-theme-dark";

pub struct LocalStorageThemeStore;

impl ThemeStore for LocalStorageThemeStore {
    fn load(&self) -> Option<bool> {
        local_storage().get::<bool>(THEME_STORAGE_KEY)?.ok()
    }

    fn save(&self, dark: bool) {
        if let Err(error) = local_storage().insert(THEME_STORAGE_KEY, &dark) {
            eprintln!("Failed to store theme preference: {error:#?}");
        }
    }
}

/// Startup resolution: stored flag, then system hint, then light.
pub fn initial_theme() -> Theme {
    theme::resolve(LocalStorageThemeStore.load(), dom::prefers_dark())
}

/// Flip the shared theme state and persist the new value.
pub fn toggle(current: &Mutable<Theme>) {
    let next = theme::toggle(current.get(), &LocalStorageThemeStore);
    current.set_neq(next);
}
