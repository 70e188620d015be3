//! Scroll offset monitoring for the navigation bar.
//!
//! [`ScrollGate`] is the DOM-free edge detector; [`ScrollMonitor`] wires it
//! to a passive `scroll` listener on `window` and releases the listener on
//! drop.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::AddEventListenerOptions;

/// Offset beyond which the navigation bar switches to its scrolled look.
/// Tuning value.
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

/// Edge detector over the raw scroll offset: only the boolean derived from a
/// sample is retained, and only a crossing produces a notification, so rapid
/// scrolling on one side of the threshold stays silent.
#[derive(Clone, Copy, Debug)]
pub struct ScrollGate {
    threshold_px: f64,
    is_scrolled: bool,
}

impl ScrollGate {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            is_scrolled: false,
        }
    }

    /// Feed one scroll sample. Returns the new value on a crossing, `None`
    /// otherwise.
    pub fn sample(&mut self, offset_y: f64) -> Option<bool> {
        let next = offset_y > self.threshold_px;
        if next == self.is_scrolled {
            return None;
        }
        self.is_scrolled = next;
        Some(next)
    }
}

/// Passive `scroll` listener on `window`. Dropping the monitor removes the
/// listener and flips the alive flag, so an already-queued event delivered
/// mid-teardown is a no-op.
pub struct ScrollMonitor {
    callback: Closure<dyn FnMut()>,
    alive: Rc<Cell<bool>>,
}

impl ScrollMonitor {
    /// Attach the listener and forward threshold crossings to `on_change`.
    /// Returns `None` outside a browser context.
    pub fn attach(mut on_change: impl FnMut(bool) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let alive = Rc::new(Cell::new(true));

        let flag = Rc::clone(&alive);
        let mut gate = ScrollGate::new(SCROLL_THRESHOLD_PX);
        let callback = Closure::wrap(Box::new(move || {
            if !flag.get() {
                return;
            }
            let Some(window) = web_sys::window() else {
                return;
            };
            let offset_y = window.scroll_y().unwrap_or(0.0);
            if let Some(is_scrolled) = gate.sample(offset_y) {
                on_change(is_scrolled);
            }
        }) as Box<dyn FnMut()>);

        // Passive: the listener can never stall the scrolling gesture.
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;

        Some(Self { callback, alive })
    }
}

impl Drop for ScrollMonitor {
    fn drop(&mut self) {
        self.alive.set(false);
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "scroll",
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SCROLL_THRESHOLD_PX, ScrollGate};

    #[test]
    fn below_or_at_threshold_is_not_scrolled() {
        let mut gate = ScrollGate::new(SCROLL_THRESHOLD_PX);
        assert_eq!(gate.sample(0.0), None);
        assert_eq!(gate.sample(SCROLL_THRESHOLD_PX), None);
    }

    #[test]
    fn crossing_fires_exactly_once() {
        let mut gate = ScrollGate::new(10.0);
        assert_eq!(gate.sample(11.0), Some(true));
        assert_eq!(gate.sample(120.0), None);
        assert_eq!(gate.sample(480.0), None);
        assert_eq!(gate.sample(3.0), Some(false));
        assert_eq!(gate.sample(0.0), None);
    }

    #[test]
    fn repeated_crossings_alternate() {
        let mut gate = ScrollGate::new(10.0);
        let notifications: Vec<_> = [5.0, 15.0, 25.0, 5.0, 2.0, 30.0]
            .into_iter()
            .filter_map(|offset| gate.sample(offset))
            .collect();
        assert_eq!(notifications, vec![true, false, true]);
    }
}
