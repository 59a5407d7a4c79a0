//! Content model and pure logic shared by the portfolio frontend.
//!
//! Everything in this crate is platform-free: static content records,
//! the active-section selection math, the palette search, the overlay
//! model, and theme resolution. The frontend supplies the browser
//! collaborators (DOM measurement, localStorage, keyboard events).

pub mod content;
pub mod palette;
pub mod scroll_spy;
pub mod search;
pub mod theme;
