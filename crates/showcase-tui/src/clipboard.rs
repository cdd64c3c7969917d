//! Clipboard copy with timed confirmation.
//!
//! Copying goes through the `ClipboardWrite` trait; the production
//! implementation emits an OSC 52 escape sequence so it works over SSH and
//! in any terminal that supports the protocol. A successful copy arms a
//! feedback window during which the copy button reads "Copied!"; a failed
//! copy is logged and the button never changes.

use std::io::Write;
use std::time::{Duration, Instant};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use showcase_core::{Error, Result};
use tracing::warn;

/// Clipboard write capability
pub trait ClipboardWrite {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard via the OSC 52 escape sequence
#[derive(Debug, Clone)]
pub struct Osc52Clipboard {
    max_payload: usize,
}

impl Osc52Clipboard {
    /// Common OSC 52 size limit (base64 payload bytes)
    pub const DEFAULT_MAX_PAYLOAD: usize = 74_994;

    pub fn new() -> Self {
        Self {
            max_payload: Self::DEFAULT_MAX_PAYLOAD,
        }
    }
}

impl Default for Osc52Clipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardWrite for Osc52Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let payload = STANDARD.encode(text.as_bytes());
        if payload.len() > self.max_payload {
            return Err(Error::Clipboard(format!(
                "payload of {} bytes exceeds the OSC 52 limit",
                payload.len()
            )));
        }
        let mut stdout = std::io::stdout();
        write!(stdout, "\x1b]52;c;{}\x07", payload)
            .and_then(|_| stdout.flush())
            .map_err(|e| Error::Clipboard(e.to_string()))
    }
}

/// Timed "Copied!" state for one copy button
#[derive(Debug, Clone)]
pub struct CopyFeedback {
    armed_at: Option<Instant>,
    window: Duration,
}

impl CopyFeedback {
    pub fn new(window: Duration) -> Self {
        Self {
            armed_at: None,
            window,
        }
    }

    /// Whether the button currently reads "Copied!"
    pub fn active(&self, now: Instant) -> bool {
        self.armed_at
            .is_some_and(|at| now.saturating_duration_since(at) < self.window)
    }

    /// Revert the label once the window elapses; call once per frame
    pub fn tick(&mut self, now: Instant) {
        if self.armed_at.is_some() && !self.active(now) {
            self.armed_at = None;
        }
    }

    fn arm(&mut self, now: Instant) {
        self.armed_at = Some(now);
    }
}

/// Copy `text` and arm the button's feedback on success. Failures are
/// logged and otherwise invisible: the label simply never flips.
pub fn copy_with_feedback(
    clipboard: &mut dyn ClipboardWrite,
    text: &str,
    feedback: &mut CopyFeedback,
    now: Instant,
) {
    match clipboard.write_text(text) {
        Ok(()) => feedback.arm(now),
        Err(e) => warn!("Failed to copy: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingClipboard {
        copied: Vec<String>,
    }

    impl ClipboardWrite for RecordingClipboard {
        fn write_text(&mut self, text: &str) -> Result<()> {
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    struct FailingClipboard;

    impl ClipboardWrite for FailingClipboard {
        fn write_text(&mut self, _text: &str) -> Result<()> {
            Err(Error::Clipboard("denied".to_string()))
        }
    }

    #[test]
    fn test_successful_copy_arms_feedback() {
        let now = Instant::now();
        let mut clipboard = RecordingClipboard { copied: Vec::new() };
        let mut feedback = CopyFeedback::new(Duration::from_millis(2000));

        copy_with_feedback(&mut clipboard, "npm install", &mut feedback, now);
        assert_eq!(clipboard.copied, vec!["npm install".to_string()]);
        assert!(feedback.active(now));
    }

    #[test]
    fn test_feedback_reverts_after_window() {
        let now = Instant::now();
        let mut clipboard = RecordingClipboard { copied: Vec::new() };
        let mut feedback = CopyFeedback::new(Duration::from_millis(2000));

        copy_with_feedback(&mut clipboard, "text", &mut feedback, now);
        let after = now + Duration::from_millis(2000);
        assert!(!feedback.active(after));
        feedback.tick(after);
        assert!(!feedback.active(after));
    }

    #[test]
    fn test_failed_copy_never_changes_label() {
        let now = Instant::now();
        let mut feedback = CopyFeedback::new(Duration::from_millis(2000));

        copy_with_feedback(&mut FailingClipboard, "text", &mut feedback, now);
        assert!(!feedback.active(now));
        // Still inactive after the window would have elapsed
        let after = now + Duration::from_millis(3000);
        feedback.tick(after);
        assert!(!feedback.active(after));
    }

    #[test]
    fn test_oversized_payload_is_rejected() {
        let mut clipboard = Osc52Clipboard {
            max_payload: 8,
        };
        let err = clipboard.write_text("definitely too long");
        assert!(err.is_err());
    }
}
