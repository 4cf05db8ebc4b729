//! Entrance animation for content blocks, driven by viewport visibility.
//!
//! Blocks with a content role (feature card, category card, step) start
//! hidden and are observed as the viewport scrolls. When at least the
//! configured fraction of a block enters the observed band, the block
//! transitions to its revealed style and is permanently unobserved: the
//! hidden→revealed transition happens at most once per block.

use std::time::{Duration, Instant};

use docpager_core::page::CLASS_ANIMATE_IN;
use docpager_core::{EasingType, Page, RevealConfig};

use crate::layout::PageLayout;
use crate::scroll::easing::EasingTypeExt;
use crate::scroll::timing::{is_complete, progress};

#[derive(Debug, Clone)]
struct Transition {
    block: usize,
    start: Instant,
}

/// Observes revealable blocks and runs their one-way entrance transition
#[derive(Debug, Clone)]
pub struct RevealAnimator {
    /// Blocks still observed, in document order
    pending: Vec<usize>,
    /// Transitions currently running
    active: Vec<Transition>,
    config: RevealConfig,
    easing: EasingType,
}

impl RevealAnimator {
    /// Register every revealable block and assign it the hidden style
    pub fn new(page: &mut Page, config: RevealConfig, easing: EasingType) -> Self {
        let mut pending = Vec::new();
        for (index, block) in page.blocks.iter_mut().enumerate() {
            if block.role.is_revealable() {
                block.style.opacity = 0.0;
                block.style.offset_rows = config.offset_rows;
                pending.push(index);
            }
        }
        Self {
            pending,
            active: Vec::new(),
            config,
            easing,
        }
    }

    /// Whether a block is still observed (not yet triggered)
    pub fn is_pending(&self, block: usize) -> bool {
        self.pending.contains(&block)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Whether any transition is running and wants a high frame rate
    pub fn needs_update(&self) -> bool {
        !self.active.is_empty()
    }

    /// Check visibility of all observed blocks against the threshold and
    /// start transitions for those that crossed it. Triggered blocks are
    /// removed from observation and never re-added.
    pub fn observe(&mut self, layout: &PageLayout, scroll: u16, viewport_height: u16) {
        let now = Instant::now();
        let mut i = 0;
        while i < self.pending.len() {
            let block = self.pending[i];
            let fraction = visible_fraction(
                layout.top(block),
                layout.height(block),
                scroll,
                viewport_height,
                self.config.bottom_margin,
            );
            if fraction >= self.config.threshold {
                self.pending.remove(i);
                self.active.push(Transition { block, start: now });
            } else {
                i += 1;
            }
        }
    }

    /// Advance running transitions, writing opacity and offset into the
    /// page's inline styles. Completed blocks gain the animate-in class.
    pub fn tick(&mut self, page: &mut Page) {
        let duration = Duration::from_millis(self.config.transition_ms);
        let offset_rows = self.config.offset_rows;
        let easing = self.easing;

        self.active.retain(|transition| {
            let Some(block) = page.blocks.get_mut(transition.block) else {
                return false;
            };
            if is_complete(transition.start, duration) {
                block.style.opacity = 1.0;
                block.style.offset_rows = 0;
                block.classes.add(CLASS_ANIMATE_IN);
                false
            } else {
                let eased = easing.apply(progress(transition.start, duration));
                block.style.opacity = eased;
                block.style.offset_rows = (offset_rows as f64 * (1.0 - eased)).round() as u16;
                true
            }
        });
    }
}

/// Fraction of a block's height inside the observed viewport band.
///
/// The band is inset `bottom_margin` rows from the viewport's bottom edge,
/// so a block triggers slightly before it fully clears that edge.
pub fn visible_fraction(
    top: u16,
    height: u16,
    scroll: u16,
    viewport_height: u16,
    bottom_margin: u16,
) -> f64 {
    if height == 0 {
        return 0.0;
    }
    let band_top = scroll as i32;
    let band_bottom = scroll as i32 + viewport_height.saturating_sub(bottom_margin) as i32;
    let block_top = top as i32;
    let block_bottom = block_top + height as i32;

    let overlap = (block_bottom.min(band_bottom) - block_top.max(band_top)).max(0);
    overlap as f64 / height as f64
}
