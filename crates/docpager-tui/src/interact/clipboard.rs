//! Copy-to-clipboard with timed visual feedback.
//!
//! The code text is snapshotted at activation time and written to the
//! system clipboard on a blocking task; the outcome comes back to the event
//! loop as a [`CopyResult`]. A successful write flips the control to its
//! confirmed state (check glyph, success accent) until a per-control revert
//! deadline passes. Re-activating a control before its deadline replaces
//! the deadline, restarting the feedback from full duration, so one
//! deadline governs each control's visible state at all times. Failures
//! are logged and produce no visual change.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use crate::event::CopyResult;

/// Owns the copy controls' feedback state
#[derive(Debug)]
pub struct ClipboardCopier {
    feedback: Duration,
    revert_at: HashMap<usize, Instant>,
}

impl ClipboardCopier {
    pub fn new(feedback_ms: u64) -> Self {
        Self {
            feedback: Duration::from_millis(feedback_ms),
            revert_at: HashMap::new(),
        }
    }

    /// Write a snapshot of a code block's text to the system clipboard.
    ///
    /// Runs off the event loop; the outcome is posted to `tx`.
    pub fn copy(&self, block: usize, snapshot: String, tx: UnboundedSender<CopyResult>) {
        debug!("Copying {} bytes from code block {}", snapshot.len(), block);
        let _ = tokio::task::spawn_blocking(move || {
            let outcome = match write_clipboard(&snapshot) {
                Ok(()) => CopyResult::Success { block },
                Err(error) => CopyResult::Failure { block, error },
            };
            // The receiver is gone only during shutdown
            let _ = tx.send(outcome);
        });
    }

    /// Apply a completed write's outcome. Success arms (or re-arms) the
    /// control's revert deadline; failure leaves the control untouched.
    pub fn on_result(&mut self, result: &CopyResult) {
        match result {
            CopyResult::Success { block } => self.arm(*block, Instant::now()),
            CopyResult::Failure { block, error } => {
                warn!("Failed to copy code block {}: {}", block, error);
            }
        }
    }

    fn arm(&mut self, block: usize, now: Instant) {
        self.revert_at.insert(block, now + self.feedback);
    }

    /// Drop confirmed state whose revert deadline has passed
    pub fn tick(&mut self) {
        self.expire(Instant::now());
    }

    fn expire(&mut self, now: Instant) {
        self.revert_at.retain(|_, at| *at > now);
    }

    /// Whether a control currently shows the confirmed state
    pub fn is_confirmed(&self, block: usize) -> bool {
        self.revert_at.contains_key(&block)
    }

    /// Whether any deadline is outstanding and needs tick processing
    pub fn needs_update(&self) -> bool {
        !self.revert_at.is_empty()
    }
}

fn write_clipboard(text: &str) -> Result<(), String> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
    clipboard.set_text(text.to_string()).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_arms_feedback() {
        let mut copier = ClipboardCopier::new(2000);
        copier.on_result(&CopyResult::Success { block: 3 });
        assert!(copier.is_confirmed(3));
        assert!(!copier.is_confirmed(4));
    }

    #[test]
    fn test_failure_leaves_state_unchanged() {
        let mut copier = ClipboardCopier::new(2000);
        copier.on_result(&CopyResult::Failure {
            block: 3,
            error: "permission denied".into(),
        });
        assert!(!copier.is_confirmed(3));
        assert!(!copier.needs_update());
    }

    #[test]
    fn test_revert_fires_at_deadline_and_not_before() {
        let mut copier = ClipboardCopier::new(2000);
        let t0 = Instant::now();
        copier.arm(7, t0);

        copier.expire(t0 + Duration::from_millis(1999));
        assert!(copier.is_confirmed(7));

        copier.expire(t0 + Duration::from_millis(2000));
        assert!(!copier.is_confirmed(7));
    }

    #[test]
    fn test_reactivation_restarts_from_full_duration() {
        let mut copier = ClipboardCopier::new(2000);
        let t0 = Instant::now();
        copier.arm(7, t0);
        // Second activation 1.5s in replaces the deadline
        copier.arm(7, t0 + Duration::from_millis(1500));

        copier.expire(t0 + Duration::from_millis(2000));
        assert!(copier.is_confirmed(7));
        copier.expire(t0 + Duration::from_millis(3500));
        assert!(!copier.is_confirmed(7));
    }

    #[test]
    fn test_controls_have_independent_deadlines() {
        let mut copier = ClipboardCopier::new(2000);
        let t0 = Instant::now();
        copier.arm(1, t0);
        copier.arm(2, t0 + Duration::from_millis(1000));

        copier.expire(t0 + Duration::from_millis(2500));
        assert!(!copier.is_confirmed(1));
        assert!(copier.is_confirmed(2));
    }
}
