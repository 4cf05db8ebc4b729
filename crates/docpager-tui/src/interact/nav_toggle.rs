//! Open/close toggle for the collapsed navigation panel.

use docpager_core::page::CLASS_ACTIVE;
use docpager_core::Navbar;

/// Toggles the nav panel's active state class on trigger and panel.
///
/// The open/closed state is derived entirely from class membership; there
/// is no separate state variable.
#[derive(Debug, Clone, Default)]
pub struct MobileNavToggle;

impl MobileNavToggle {
    /// Toggle the panel. Returns the new open state, or `None` when the
    /// page has no navbar or no menu trigger (in which case nothing
    /// happens).
    pub fn toggle(&self, navbar: Option<&mut Navbar>) -> Option<bool> {
        let navbar = navbar?;
        if !navbar.menu_trigger {
            return None;
        }
        navbar.trigger_classes.toggle(CLASS_ACTIVE);
        Some(navbar.panel_classes.toggle(CLASS_ACTIVE))
    }
}
