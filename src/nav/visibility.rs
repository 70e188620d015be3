//! Section visibility tracking, one `IntersectionObserver` per region.
//!
//! A naive "any pixel visible" rule makes two adjacent regions report
//! visible near their shared boundary and the highlight flickers. The
//! observation root is therefore shrunk toward the upper third of the
//! viewport, and a region must clear a minimum visible fraction before it
//! counts.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::section::SECTIONS;

/// Margin shrinking the observation root: a region counts once it sits
/// between 20% down from the top and 60% up from the bottom. Tuning value,
/// not a contract.
pub const ROOT_MARGIN: &str = "-20% 0px -60% 0px";

/// Fraction of a region that must be inside the margin box to count.
/// Tuning value.
pub const INTERSECTION_THRESHOLD: f64 = 0.4;

/// Resolve one callback batch: the last entry still intersecting wins,
/// matching natural scroll order where the region being scrolled into
/// reports after the one being scrolled out. `None` means nothing in the
/// batch is visible and the previous active section is retained.
pub fn latest_intersecting<'a, I>(batch: I) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, bool)>,
{
    batch
        .into_iter()
        .filter(|(_, is_intersecting)| *is_intersecting)
        .map(|(id, _)| id)
        .last()
}

/// One observer plus the callback keeping it alive. Dropping the channel
/// disconnects the observer, so no drop path can leave a stray observer
/// behind.
struct ObservationChannel {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl Drop for ObservationChannel {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observation channels for every registered section, keyed by id. The set
/// is created whole at mount and released whole on drop; the shared alive
/// flag turns late deliveries into no-ops.
pub struct SectionVisibilityTracker {
    channels: HashMap<&'static str, ObservationChannel>,
    alive: Rc<Cell<bool>>,
}

impl SectionVisibilityTracker {
    /// Observe every registered section's anchor element, reporting the
    /// in-view section id to `on_visible`. Returns `None` outside a browser
    /// context or if an observer cannot be constructed.
    pub fn observe(on_visible: impl Fn(&'static str) + 'static) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let alive = Rc::new(Cell::new(true));
        let on_visible = Rc::new(on_visible);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(ROOT_MARGIN);
        options.set_threshold(&JsValue::from_f64(INTERSECTION_THRESHOLD));

        let mut channels = HashMap::with_capacity(SECTIONS.len());
        for section in SECTIONS {
            let Some(element) = document.get_element_by_id(section.id) else {
                log::warn!("section {:?} has no anchor element, not observing it", section.id);
                continue;
            };

            let id = section.id;
            let flag = Rc::clone(&alive);
            let notify = Rc::clone(&on_visible);
            let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
                if !flag.get() {
                    return;
                }
                let batch = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| (id, entry.is_intersecting()));
                if let Some(visible) = latest_intersecting(batch) {
                    notify(visible);
                }
            }) as Box<dyn FnMut(js_sys::Array)>);

            let observer =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                    .ok()?;
            observer.observe(&element);
            channels.insert(
                section.id,
                ObservationChannel {
                    observer,
                    _callback: callback,
                },
            );
        }

        log::info!("observing {} of {} sections", channels.len(), SECTIONS.len());
        Some(Self { channels, alive })
    }
}

impl Drop for SectionVisibilityTracker {
    fn drop(&mut self) {
        // Flag first: a callback queued behind the disconnects must not
        // write to dead state.
        self.alive.set(false);
        for channel in self.channels.values() {
            channel.observer.disconnect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::latest_intersecting;

    #[test]
    fn last_intersecting_entry_wins() {
        let batch = [("packages", true), ("amenities", true)];
        assert_eq!(latest_intersecting(batch), Some("amenities"));
    }

    #[test]
    fn leaving_entries_do_not_count() {
        let batch = [("packages", true), ("amenities", false)];
        assert_eq!(latest_intersecting(batch), Some("packages"));
    }

    #[test]
    fn empty_or_all_leaving_batch_retains_previous_state() {
        assert_eq!(latest_intersecting(Vec::<(&str, bool)>::new()), None);
        assert_eq!(
            latest_intersecting([("home", false), ("packages", false)]),
            None
        );
    }

    #[test]
    fn single_visible_region_scenario() {
        // "packages" intersecting at 45% visible, past the 40% threshold,
        // arrives as a one-entry batch.
        assert_eq!(latest_intersecting([("packages", true)]), Some("packages"));
    }
}
