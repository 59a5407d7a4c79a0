//! Browser collaborators: DOM measurement, smooth scrolling, and platform
//! capability probes. Every lookup degrades to `None`/no-op when the
//! target or API is missing.
//!
//! Scrolling goes through `window.scrollBy` with the document's
//! `scroll-behavior: smooth` doing the easing, so a missing element is
//! just a skipped scroll.

use zoon::{eprintln, *};
use zoon::wasm_bindgen::{closure::Closure, JsCast, JsValue};

/// Gap left above a scrolled-to section, clearing the sticky header and
/// keeping the section inside the scroll-spy activation line.
const SECTION_SCROLL_MARGIN_PX: f64 = 72.0;

fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

fn element_rect(id: &str) -> Option<web_sys::DomRect> {
    let element = document()?.get_element_by_id(id)?;
    Some(element.get_bounding_client_rect())
}

/// Top edge of the element with `id`, in pixels relative to the viewport
/// top. `None` when the element is not in the document.
pub fn element_top(id: &str) -> Option<f64> {
    element_rect(id).map(|rect| rect.top())
}

fn scroll_window_by(delta_y: f64) {
    if let Some(window) = web_sys::window() {
        window.scroll_by_with_x_and_y(0.0, delta_y);
    }
}

/// Smooth-scroll a section to just below the sticky header.
pub fn scroll_to_section(id: &str) {
    if let Some(top) = element_top(id) {
        scroll_window_by(top - SECTION_SCROLL_MARGIN_PX);
    }
}

/// Smooth-scroll a project card to the viewport centre.
pub fn scroll_card_to_center(dom_id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(rect) = element_rect(dom_id) else {
        return;
    };
    let Some(viewport_height) = window.inner_height().ok().and_then(|height| height.as_f64())
    else {
        return;
    };
    scroll_window_by(rect.top() - (viewport_height - rect.height()) / 2.0);
}

/// System colour-scheme hint via `matchMedia`, called reflectively so a
/// missing API is "no signal" rather than a failure.
pub fn prefers_dark() -> Option<bool> {
    let window = web_sys::window()?;
    let match_media = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("matchMedia"))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()?;
    let query_list = match_media
        .call1(
            window.as_ref(),
            &JsValue::from_str("(prefers-color-scheme: dark)"),
        )
        .ok()?;
    js_sys::Reflect::get(&query_list, &JsValue::from_str("matches"))
        .ok()?
        .as_bool()
}

/// Whether the browser fires `scrollend` (probed via the `onscrollend`
/// window property).
pub fn supports_scroll_end() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("onscrollend")).unwrap_or(false)
}

/// Run `callback` when the next `scrollend` fires. One-shot listener; the
/// browser drops it after the first event (`once: true`), which also lets
/// the closure free itself.
pub fn on_next_scroll_end(callback: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once_into_js(callback);
    let options = web_sys::AddEventListenerOptions::new();
    options.set_once(true);
    if window
        .add_event_listener_with_callback_and_add_event_listener_options(
            "scrollend",
            closure.unchecked_ref(),
            &options,
        )
        .is_err()
    {
        eprintln!("Failed to register scrollend listener");
    }
}
