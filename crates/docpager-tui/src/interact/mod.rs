//! The interaction layer: five independent controllers wired to the event
//! loop at startup. Each owns a narrow slice of behavior and communicates
//! with the others only through shared page state (element classes and
//! inline styles), never through direct calls.

pub mod anchors;
pub mod clipboard;
pub mod nav_toggle;
pub mod navbar;
pub mod reveal;

pub use anchors::SmoothScrollRouter;
pub use clipboard::ClipboardCopier;
pub use nav_toggle::MobileNavToggle;
pub use navbar::{ScrollMode, ScrollStyler};
pub use reveal::RevealAnimator;
