//! Smooth scrolling for the page viewport.
//!
//! Scroll input never moves the viewport directly. Deltas and targets go
//! through [`ScrollAnimator`], which batches them and interpolates the
//! offset over time with a configurable easing curve. The anchor router
//! drives the same animator, so in-page navigation and plain scrolling
//! share one notion of the current offset.

pub mod animation;
pub mod config;
pub mod easing;
pub mod timing;

pub use animation::ScrollAnimator;
pub use config::{ScrollConfig, ScrollConfigExt};
pub use easing::{EasingType, EasingTypeExt};
