//! Helpers shared by the integration tests.

use std::cell::RefCell;

use clipboard::{Clipboard, ClipboardError};

/// Clipboard that remembers what it was given
#[derive(Default)]
pub struct RecordingClipboard {
    copied: RefCell<Vec<String>>,
    fail: bool,
}

impl RecordingClipboard {
    pub fn failing() -> Self {
        Self {
            copied: RefCell::new(Vec::new()),
            fail: true,
        }
    }

    pub fn copied(&self) -> Vec<String> {
        self.copied.borrow().clone()
    }
}

impl Clipboard for RecordingClipboard {
    fn name(&self) -> &str {
        "recording"
    }

    fn copy(&self, text: &str) -> clipboard::Result<()> {
        if self.fail {
            return Err(ClipboardError::Unavailable);
        }
        self.copied.borrow_mut().push(text.to_string());
        Ok(())
    }
}

/// Lines of a rendered table
pub fn lines(rendered: &str) -> Vec<&str> {
    rendered.split('\n').collect()
}

/// Lines that are borders rather than header or data rows
pub fn is_border(line: &str) -> bool {
    !line.is_empty()
        && line.chars().all(|c| matches!(c, '.' | '\'' | '|' | '-' | '+'))
        && line.contains('-')
}
