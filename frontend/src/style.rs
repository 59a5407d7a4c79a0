//! Per-theme colours and gradients.
//!
//! Every colour in the UI goes through one of these helpers with the
//! current theme, so flipping the theme restyles the whole document
//! through the signals that consume them.

use shared::theme::Theme;
use zoon::{color, Rgba};

pub fn background_gradient(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "linear-gradient(155deg, #101426 0%, #131b2e 48%, #0d2030 100%)",
        Theme::Light => "linear-gradient(155deg, #f4f6fc 0%, #eef1fa 48%, #e8f2f4 100%)",
    }
}

pub fn page_text(theme: Theme) -> Rgba {
    match theme {
        Theme::Dark => color!("#eef2ff"),
        Theme::Light => color!("#1d2434"),
    }
}

pub fn muted_text(theme: Theme) -> Rgba {
    match theme {
        Theme::Dark => color!("rgba(226, 232, 255, 0.68)"),
        Theme::Light => color!("rgba(29, 36, 52, 0.62)"),
    }
}

pub fn accent(theme: Theme) -> Rgba {
    match theme {
        Theme::Dark => color!("#8cc4ff"),
        Theme::Light => color!("#2563c4"),
    }
}

pub fn accent_contrast_text(theme: Theme) -> Rgba {
    match theme {
        Theme::Dark => color!("#052039"),
        Theme::Light => color!("#f6faff"),
    }
}

pub fn header_surface(theme: Theme) -> Rgba {
    match theme {
        Theme::Dark => color!("rgba(13, 18, 30, 0.82)"),
        Theme::Light => color!("rgba(250, 251, 255, 0.88)"),
    }
}

pub fn card_surface(theme: Theme) -> Rgba {
    match theme {
        Theme::Dark => color!("rgba(21, 27, 44, 0.92)"),
        Theme::Light => color!("rgba(255, 255, 255, 0.92)"),
    }
}

pub fn card_surface_hovered(theme: Theme) -> Rgba {
    match theme {
        Theme::Dark => color!("rgba(30, 39, 62, 0.95)"),
        Theme::Light => color!("rgba(244, 247, 255, 0.98)"),
    }
}

pub fn chip_background(theme: Theme) -> Rgba {
    match theme {
        Theme::Dark => color!("rgba(108, 162, 255, 0.16)"),
        Theme::Light => color!("rgba(37, 99, 196, 0.1)"),
    }
}

pub fn chip_text(theme: Theme) -> Rgba {
    match theme {
        Theme::Dark => color!("rgba(178, 208, 255, 0.92)"),
        Theme::Light => color!("rgba(30, 75, 150, 0.95)"),
    }
}

pub fn nav_text(theme: Theme, active: bool, hovered: bool) -> Rgba {
    if active {
        accent(theme)
    } else if hovered {
        page_text(theme)
    } else {
        muted_text(theme)
    }
}

pub fn button_background(theme: Theme, hovered: bool) -> Rgba {
    match (theme, hovered) {
        (Theme::Dark, true) => color!("rgba(140, 196, 255, 0.9)"),
        (Theme::Dark, false) => color!("rgba(108, 162, 255, 0.75)"),
        (Theme::Light, true) => color!("rgba(37, 99, 196, 0.92)"),
        (Theme::Light, false) => color!("rgba(37, 99, 196, 0.8)"),
    }
}

pub fn ghost_button_background(theme: Theme, hovered: bool) -> Rgba {
    match (theme, hovered) {
        (Theme::Dark, true) => color!("rgba(36, 48, 72, 0.6)"),
        (Theme::Dark, false) => color!("rgba(26, 36, 58, 0.4)"),
        (Theme::Light, true) => color!("rgba(29, 36, 52, 0.1)"),
        (Theme::Light, false) => color!("rgba(29, 36, 52, 0.05)"),
    }
}

pub fn overlay_backdrop(theme: Theme) -> Rgba {
    match theme {
        Theme::Dark => color!("rgba(4, 7, 14, 0.6)"),
        Theme::Light => color!("rgba(20, 28, 48, 0.35)"),
    }
}

pub fn panel_surface(theme: Theme) -> Rgba {
    match theme {
        Theme::Dark => color!("rgba(16, 22, 38, 0.98)"),
        Theme::Light => color!("rgba(252, 253, 255, 0.99)"),
    }
}

pub fn result_row_background(theme: Theme, highlighted: bool, hovered: bool) -> Rgba {
    match (theme, highlighted || hovered) {
        (Theme::Dark, true) => color!("rgba(108, 162, 255, 0.22)"),
        (Theme::Dark, false) => color!("rgba(108, 162, 255, 0)"),
        (Theme::Light, true) => color!("rgba(37, 99, 196, 0.12)"),
        (Theme::Light, false) => color!("rgba(37, 99, 196, 0)"),
    }
}

pub fn orb_color(theme: Theme, warm: bool) -> &'static str {
    match (theme, warm) {
        (Theme::Dark, true) => "radial-gradient(circle, rgba(124, 58, 237, 0.28) 0%, rgba(124, 58, 237, 0) 70%)",
        (Theme::Dark, false) => "radial-gradient(circle, rgba(14, 165, 233, 0.22) 0%, rgba(14, 165, 233, 0) 70%)",
        (Theme::Light, true) => "radial-gradient(circle, rgba(124, 58, 237, 0.14) 0%, rgba(124, 58, 237, 0) 70%)",
        (Theme::Light, false) => "radial-gradient(circle, rgba(14, 165, 233, 0.12) 0%, rgba(14, 165, 233, 0) 70%)",
    }
}
