//! Single-writer state machine behind the navigation bar.
//!
//! Scroll samples, intersection events and click commands all converge here;
//! everything else reads snapshots. The controller is DOM-free so its
//! behavior under interleaved signals can be pinned down in native tests.

use thiserror::Error;

use super::section::{self, Section};

/// Navigation requested for an id that is not in the section registry. The
/// only domain error; the failed call performs no state change.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown section id {id:?}")]
pub struct UnknownSectionError {
    pub id: String,
}

/// Snapshot the render layer works from. There is exactly one writer (the
/// [`NavigationController`]); views only ever copy this out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationState {
    /// Id of the section currently representing the reading position.
    /// Always one of the registered ids.
    pub active_section: &'static str,
    /// Whether the page is scrolled past the navbar threshold.
    pub is_scrolled: bool,
    /// Whether the mobile drawer is open.
    pub is_menu_open: bool,
}

/// Sole mutator of [`NavigationState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationController {
    state: NavigationState,
}

impl NavigationController {
    pub fn new() -> Self {
        Self {
            state: NavigationState {
                active_section: section::first().id,
                is_scrolled: false,
                is_menu_open: false,
            },
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> NavigationState {
        self.state
    }

    /// Observer-driven update: a region reported itself in view. Within one
    /// event-processing tick the last reporter wins, which matches natural
    /// scroll order. Unknown ids (including anything delivered after
    /// teardown) are dropped.
    pub fn section_visible(&mut self, id: &str) {
        if let Some(target) = section::find(id) {
            self.state.active_section = target.id;
        }
    }

    /// Monitor-driven update: the scroll offset crossed the threshold. The
    /// monitor only notifies on a crossing, so this is a plain set.
    pub fn scroll_state(&mut self, is_scrolled: bool) {
        self.state.is_scrolled = is_scrolled;
    }

    /// Click-driven navigation. Validates the target against the registry
    /// and returns it as the scroll request for the host's smooth-scroll
    /// primitive. A navigation command always closes the drawer; the view
    /// never has to. `active_section` is deliberately not touched here —
    /// the scroll this triggers raises the target's own intersection event,
    /// keeping the tracker the only writer of that field.
    pub fn navigate_to(&mut self, id: &str) -> Result<&'static Section, UnknownSectionError> {
        let target = section::find(id).ok_or_else(|| UnknownSectionError { id: id.to_owned() })?;
        self.state.is_menu_open = false;
        Ok(target)
    }

    pub fn toggle_menu(&mut self) {
        self.state.is_menu_open = !self.state.is_menu_open;
    }

    pub fn close_menu(&mut self) {
        self.state.is_menu_open = false;
    }
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_at_first_section_with_everything_off() {
        let controller = NavigationController::new();
        assert_eq!(
            controller.state(),
            NavigationState {
                active_section: "home",
                is_scrolled: false,
                is_menu_open: false,
            }
        );
    }

    #[test]
    fn visibility_event_moves_the_active_section() {
        let mut controller = NavigationController::new();
        controller.section_visible("packages");
        assert_eq!(controller.state().active_section, "packages");
    }

    #[test]
    fn later_visibility_event_wins_within_a_tick() {
        let mut controller = NavigationController::new();
        controller.section_visible("packages");
        controller.section_visible("amenities");
        assert_eq!(controller.state().active_section, "amenities");
    }

    #[test]
    fn unknown_visibility_id_is_ignored() {
        let mut controller = NavigationController::new();
        controller.section_visible("packages");
        controller.section_visible("not-a-section");
        assert_eq!(controller.state().active_section, "packages");
    }

    #[test]
    fn active_section_is_always_a_registered_id() {
        let mut controller = NavigationController::new();
        for id in ["gallery", "bogus", "contact", "", "reviews"] {
            controller.section_visible(id);
            assert!(section::find(controller.state().active_section).is_some());
        }
    }

    #[test]
    fn scroll_state_is_a_plain_set() {
        let mut controller = NavigationController::new();
        controller.scroll_state(true);
        assert!(controller.state().is_scrolled);
        controller.scroll_state(false);
        assert!(!controller.state().is_scrolled);
    }

    #[test]
    fn navigate_returns_the_target_and_closes_the_menu() {
        let mut controller = NavigationController::new();
        controller.toggle_menu();
        assert!(controller.state().is_menu_open);

        let target = controller.navigate_to("contact").unwrap();
        assert_eq!(target.id, "contact");
        assert!(!controller.state().is_menu_open);
    }

    #[test]
    fn navigate_does_not_set_the_active_section_eagerly() {
        let mut controller = NavigationController::new();
        controller.navigate_to("contact").unwrap();
        assert_eq!(controller.state().active_section, "home");

        // The scroll eventually produces the target's intersection event.
        controller.section_visible("contact");
        assert_eq!(controller.state().active_section, "contact");
    }

    #[test]
    fn navigate_to_unknown_id_is_inert() {
        let mut controller = NavigationController::new();
        controller.toggle_menu();
        let before = controller.state();

        let err = controller.navigate_to("pricing").unwrap_err();
        assert_eq!(err, UnknownSectionError { id: "pricing".into() });
        assert_eq!(controller.state(), before);
    }

    #[test]
    fn toggling_the_menu_twice_restores_it() {
        let mut controller = NavigationController::new();
        let before = controller.state().is_menu_open;
        controller.toggle_menu();
        controller.toggle_menu();
        assert_eq!(controller.state().is_menu_open, before);
    }

    #[test]
    fn close_menu_is_idempotent() {
        let mut controller = NavigationController::new();
        controller.close_menu();
        controller.close_menu();
        assert!(!controller.state().is_menu_open);
    }

    #[test]
    fn menu_tap_scenario() {
        // Menu open, user taps "contact" in the drawer: the drawer closes at
        // once, the highlight moves only when the intersection fires.
        let mut controller = NavigationController::new();
        controller.toggle_menu();

        controller.navigate_to("contact").unwrap();
        assert!(!controller.state().is_menu_open);
        assert_eq!(controller.state().active_section, "home");

        controller.section_visible("contact");
        assert_eq!(controller.state().active_section, "contact");
    }
}
