//! Page-chrome lifecycle primitives: the intro-overlay timer, the scroll
//! listener behind the condensed nav style, and in-page section navigation.
//!
//! Each unit owns its browser-side registration and releases it on drop, so
//! a component effect can hold one and return `move || drop(it)` as cleanup.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

/// Whether a scroll offset counts as "past" the nav threshold. Strictly
/// greater than: sitting exactly on the threshold keeps the top style.
pub fn past_threshold(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// One-shot timer behind the intro overlay.
///
/// `on_ready` runs exactly once, `delay_ms` after `start`. Dropping the gate
/// first cancels the timer, so a consumer that has been torn down is never
/// called back.
pub struct LoadingGate {
    _timeout: Timeout,
}

impl LoadingGate {
    pub fn start<F>(delay_ms: u32, on_ready: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self {
            _timeout: Timeout::new(delay_ms, on_ready),
        }
    }
}

/// Window scroll listener that republishes `offset > threshold` on every
/// scroll event.
///
/// While the monitor is alive the document root scrolls smoothly; the prior
/// inline `scroll-behavior` value is put back when it is dropped, and the
/// listener is deregistered so no callback runs afterwards.
pub struct ScrollMonitor {
    window: web_sys::Window,
    root: HtmlElement,
    prior_behavior: String,
    handler: Closure<dyn FnMut()>,
}

impl ScrollMonitor {
    pub fn attach<F>(threshold_px: f64, on_change: F) -> Self
    where
        F: Fn(bool) + 'static,
    {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        let root: HtmlElement = document.document_element().unwrap().dyn_into().unwrap();

        let prior_behavior = root
            .style()
            .get_property_value("scroll-behavior")
            .unwrap_or_default();
        let _ = root.style().set_property("scroll-behavior", "smooth");

        let win = window.clone();
        let handler = Closure::wrap(Box::new(move || {
            let offset = win.scroll_y().unwrap_or(0.0);
            on_change(past_threshold(offset, threshold_px));
        }) as Box<dyn FnMut()>);

        window
            .add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref())
            .unwrap();

        Self {
            window,
            root,
            prior_behavior,
            handler,
        }
    }
}

impl Drop for ScrollMonitor {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.handler.as_ref().unchecked_ref());
        if self.prior_behavior.is_empty() {
            let _ = self.root.style().remove_property("scroll-behavior");
        } else {
            let _ = self
                .root
                .style()
                .set_property("scroll-behavior", &self.prior_behavior);
        }
    }
}

/// Scrolls the section rendered under `section_id` into view and reports
/// whether a matching region existed.
///
/// Ids with no rendered region are ignored on purpose: a stale menu anchor
/// must not take the page anywhere or surface an error. The smooth scroll is
/// fire-and-forget; nothing waits on its completion.
pub fn navigate_to_section(section_id: &str) -> bool {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return false,
    };
    match document.get_element_by_id(section_id) {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::past_threshold;

    #[test]
    fn threshold_is_strictly_greater_than() {
        assert!(!past_threshold(0.0, 50.0));
        assert!(!past_threshold(50.0, 50.0));
        assert!(past_threshold(50.1, 50.0));
        assert!(past_threshold(600.0, 50.0));
    }

    #[test]
    fn recomputation_is_idempotent() {
        for _ in 0..3 {
            assert!(past_threshold(120.0, 50.0));
            assert!(!past_threshold(12.0, 50.0));
        }
    }
}
