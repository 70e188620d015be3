//! Navigation coordinator.
//!
//! Reconciles user scroll, click-initiated scroll and viewport intersection
//! into one authoritative `{active_section, is_scrolled, is_menu_open}`
//! value. The pure state machine lives in [`controller`]; [`scroll`] and
//! [`visibility`] adapt the browser's signals to it; [`Navigation`] is the
//! handle the view layer renders from and issues commands through.

mod controller;
mod scroll;
mod section;
mod visibility;

pub use controller::{NavigationController, NavigationState, UnknownSectionError};
pub use scroll::{SCROLL_THRESHOLD_PX, ScrollGate, ScrollMonitor};
pub use section::{SECTIONS, Section, find};
pub use visibility::{
    INTERSECTION_THRESHOLD, ROOT_MARGIN, SectionVisibilityTracker, latest_intersecting,
};

use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Copy handle over the single [`NavigationController`]. All updates funnel
/// through the one signal; views take snapshots with [`Navigation::state`].
#[derive(Clone, Copy)]
pub struct Navigation {
    controller: RwSignal<NavigationController>,
}

impl Navigation {
    pub fn new() -> Self {
        Self {
            controller: RwSignal::new(NavigationController::new()),
        }
    }

    /// Reactive snapshot of the current navigation state.
    pub fn state(&self) -> NavigationState {
        self.controller.get().state()
    }

    /// Validate and execute a navigation command: closes the drawer and
    /// hands the target to the browser's smooth-scroll primitive. The active
    /// section catches up when the scroll raises the target's intersection
    /// event.
    pub fn navigate_to(&self, id: &str) -> Result<(), UnknownSectionError> {
        let target = match self.controller.try_update(|c| c.navigate_to(id)) {
            Some(result) => result?,
            // Signal already disposed: the page is unmounting.
            None => return Ok(()),
        };
        scroll_into_view(target);
        Ok(())
    }

    /// Fire-and-forget variant for view handlers; an unknown id is logged
    /// and dropped.
    pub fn go(&self, id: &str) {
        if let Err(err) = self.navigate_to(id) {
            log::warn!("navigation rejected: {err}");
        }
    }

    pub fn toggle_menu(&self) {
        let _ = self.controller.try_update(|c| c.toggle_menu());
    }

    pub fn close_menu(&self) {
        let _ = self.controller.try_update(|c| c.close_menu());
    }

    fn section_visible(&self, id: &'static str) {
        let _ = self.controller.try_update(|c| c.section_visible(id));
    }

    fn scroll_state(&self, is_scrolled: bool) {
        let _ = self.controller.try_update(|c| c.scroll_state(is_scrolled));
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}

/// The live observers feeding a [`Navigation`] handle. Dropping the runtime
/// releases the scroll listener and every observation channel in one go.
pub struct NavRuntime {
    _monitor: Option<ScrollMonitor>,
    _tracker: Option<SectionVisibilityTracker>,
}

impl NavRuntime {
    fn start(nav: Navigation) -> Self {
        Self {
            _monitor: ScrollMonitor::attach(move |is_scrolled| nav.scroll_state(is_scrolled)),
            _tracker: SectionVisibilityTracker::observe(move |id| nav.section_visible(id)),
        }
    }
}

/// Create the page's [`Navigation`], put it in context for the section
/// components, and wire the observers once the DOM is mounted. The runtime
/// is parked in arena storage owned by the calling component, so disposing
/// that component tears everything down synchronously.
pub fn provide_navigation() {
    let nav = Navigation::new();
    provide_context(nav);

    let runtime = StoredValue::new_local(None::<NavRuntime>);
    Effect::new(move |_| {
        if runtime.with_value(|r| r.is_none()) {
            runtime.set_value(Some(NavRuntime::start(nav)));
        }
    });
}

/// Host smooth-scroll primitive. Fire-and-forget: the call returns
/// immediately and the resulting intersection events reconcile the active
/// section.
fn scroll_into_view(section: &Section) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(section.id) else {
        log::warn!("no anchor element for section {:?}", section.id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
