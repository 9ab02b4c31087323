use crate::error::{ClipboardError, Result};
use crate::Clipboard;

/// The OS clipboard through `arboard`; on Windows this is the global-memory
/// clipboard owned by the window station.
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeClipboard;

impl Clipboard for NativeClipboard {
    fn name(&self) -> &str {
        "windows"
    }

    fn copy(&self, text: &str) -> Result<()> {
        // arboard wants a fresh handle per operation
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ClipboardError::NativeError(e).with_context("Failed to open clipboard"))?;
        clipboard.set_text(text).map_err(|e| {
            ClipboardError::NativeError(e).with_context("Failed to set clipboard text")
        })
    }
}
