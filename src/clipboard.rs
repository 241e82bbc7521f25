//! Copying generated code to the system clipboard.

use copypasta_ext::copypasta::ClipboardProvider;
use copypasta_ext::x11_fork::ClipboardContext;
use std::time::{Duration, Instant};
use thiserror::Error;

/// How long the "Copied!" label stays up.
pub const COPIED_FEEDBACK: Duration = Duration::from_secs(2);

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

pub trait ClipboardService {
    fn put(&mut self, content: String) -> Result<(), ClipboardError>;
}

#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardService for SystemClipboard {
    fn put(&mut self, content: String) -> Result<(), ClipboardError> {
        let mut ctx =
            ClipboardContext::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        let len = content.len();
        ctx.set_contents(content)
            .map_err(|e| ClipboardError::Write(e.to_string()))?;
        log::debug!("copied {len} bytes to clipboard");
        Ok(())
    }
}

/// Remembers which block was copied last and when.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyFeedback {
    pub block: usize,
    pub copied_at: Instant,
}

impl CopyFeedback {
    pub fn new(block: usize, copied_at: Instant) -> Self {
        Self { block, copied_at }
    }

    /// Button label for `block` at time `now`.
    pub fn label(feedback: Option<&CopyFeedback>, block: usize, now: Instant) -> &'static str {
        match feedback {
            Some(f) if f.block == block && now.duration_since(f.copied_at) < COPIED_FEEDBACK => {
                "Copied!"
            }
            _ => "Copy",
        }
    }
}

/// Copy `content` and return the feedback to show for `block`.
pub fn copy_block<C: ClipboardService + ?Sized>(
    clipboard: &mut C,
    block: usize,
    content: &str,
) -> Result<CopyFeedback, ClipboardError> {
    clipboard.put(content.to_string())?;
    Ok(CopyFeedback::new(block, Instant::now()))
}


#[cfg(test)]
mod tests {
    use super::test_fixtures::TestClipboard;
    use super::*;

    #[test]
    fn copy_block_writes_verbatim() {
        let mut clipboard = TestClipboard::default();
        let feedback = copy_block(&mut clipboard, 1, "const x = 1;\n").unwrap();
        assert_eq!(clipboard.content, "const x = 1;\n");
        assert_eq!(feedback.block, 1);
    }

    #[test]
    fn label_reverts_after_two_seconds() {
        let start = Instant::now();
        let feedback = CopyFeedback::new(0, start);
        assert_eq!(CopyFeedback::label(Some(&feedback), 0, start), "Copied!");
        assert_eq!(
            CopyFeedback::label(Some(&feedback), 0, start + Duration::from_millis(1999)),
            "Copied!"
        );
        assert_eq!(
            CopyFeedback::label(Some(&feedback), 0, start + COPIED_FEEDBACK),
            "Copy"
        );
    }

    #[test]
    fn label_is_per_block() {
        let start = Instant::now();
        let feedback = CopyFeedback::new(0, start);
        assert_eq!(CopyFeedback::label(Some(&feedback), 1, start), "Copy");
        assert_eq!(CopyFeedback::label(None, 0, start), "Copy");
    }
}
