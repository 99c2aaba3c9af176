//! Navigation shell core
//!
//! Framework-independent logic behind the sidebar, mobile top bar and sign-out
//! button: the panel visibility state machine, the static destination table,
//! active-route derivation, display identity and the navigation/sign-out effects.
//! The Leptos components in [`crate::components`] only bind these to signals and
//! DOM events.

mod actions;
mod identity;
mod nav;
mod panel;

pub use actions::{select_destination, sign_out, Navigator, SignOutOutcome};
pub use identity::{derive_display_identity, DisplayIdentity};
pub use nav::{
    active_destination, destination_entries, nav_item_class, NavDestination, NavEntry, NavIcon,
    DESTINATIONS,
};
pub use panel::{overlay_visible, panel_class, panel_presented, PanelEvent, PanelState, Viewport};
