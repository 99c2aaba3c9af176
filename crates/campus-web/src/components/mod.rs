/// UI components for the campus web interface
///
/// The authenticated shell and the small building blocks it is made of.

pub mod button;
pub mod card;
pub mod header;
pub mod icons;
pub mod router;
pub mod shell;
pub mod sidebar;
pub mod viewport;
