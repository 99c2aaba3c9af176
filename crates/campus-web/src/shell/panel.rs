//! Sidebar visibility on narrow viewports.
//!
//! Two independent signals decide whether the sidebar is on screen: the
//! user-driven [`PanelState`] and the environment-driven [`Viewport`]. On wide
//! viewports the stylesheet pins the sidebar open no matter what the state says,
//! so the state only matters on narrow screens.

/// Whether the user has asked for the mobile drawer to be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    /// Mobile menu control activated.
    OpenRequested,
    /// Overlay tapped, close control activated, or a destination selected.
    CloseRequested,
}

impl PanelState {
    pub fn apply(self, event: PanelEvent) -> Self {
        match event {
            PanelEvent::OpenRequested => PanelState::Open,
            PanelEvent::CloseRequested => PanelState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == PanelState::Open
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Viewport {
    #[default]
    Narrow,
    Wide,
}

impl Viewport {
    pub fn from_wide(wide: bool) -> Self {
        if wide {
            Viewport::Wide
        } else {
            Viewport::Narrow
        }
    }
}

/// Whether the sidebar is visible to the user.
pub fn panel_presented(state: PanelState, viewport: Viewport) -> bool {
    viewport == Viewport::Wide || state.is_open()
}

/// The dimming overlay only exists while the drawer covers content.
pub fn overlay_visible(state: PanelState, viewport: Viewport) -> bool {
    viewport == Viewport::Narrow && state.is_open()
}

/// Sidebar classes. `lg:translate-x-0` is always present so wide viewports never
/// wait on the state (or on hydration) to show the panel.
pub fn panel_class(state: PanelState) -> String {
    format!(
        "fixed top-0 left-0 z-50 h-full w-64 bg-sidebar transform transition-transform duration-200 ease-in-out lg:translate-x-0 {}",
        if state.is_open() {
            "translate-x-0"
        } else {
            "-translate-x-full"
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_closed() {
        assert_eq!(PanelState::default(), PanelState::Closed);
        assert!(!PanelState::default().is_open());
    }

    #[test]
    fn test_transitions() {
        let open = PanelState::Closed.apply(PanelEvent::OpenRequested);
        assert_eq!(open, PanelState::Open);
        assert_eq!(open.apply(PanelEvent::CloseRequested), PanelState::Closed);

        // Both events are idempotent
        assert_eq!(open.apply(PanelEvent::OpenRequested), PanelState::Open);
        assert_eq!(
            PanelState::Closed.apply(PanelEvent::CloseRequested),
            PanelState::Closed
        );
    }

    #[test]
    fn test_wide_viewport_always_presents_panel() {
        for state in [PanelState::Closed, PanelState::Open] {
            assert!(panel_presented(state, Viewport::Wide));
            assert!(!overlay_visible(state, Viewport::Wide));
        }
    }

    #[test]
    fn test_narrow_viewport_follows_state() {
        assert!(!panel_presented(PanelState::Closed, Viewport::Narrow));
        assert!(panel_presented(PanelState::Open, Viewport::Narrow));
        assert!(!overlay_visible(PanelState::Closed, Viewport::Narrow));
        assert!(overlay_visible(PanelState::Open, Viewport::Narrow));
    }

    #[test]
    fn test_panel_class_keeps_wide_override() {
        let closed = panel_class(PanelState::Closed);
        let open = panel_class(PanelState::Open);

        assert!(closed.contains("lg:translate-x-0"));
        assert!(open.contains("lg:translate-x-0"));
        assert!(closed.ends_with("-translate-x-full"));
        assert!(open.ends_with(" translate-x-0"));
    }

    #[test]
    fn test_viewport_from_media_query() {
        assert_eq!(Viewport::from_wide(true), Viewport::Wide);
        assert_eq!(Viewport::from_wide(false), Viewport::Narrow);
        assert_eq!(Viewport::default(), Viewport::Narrow);
    }
}
