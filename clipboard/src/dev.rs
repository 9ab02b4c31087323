use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ClipboardError, Result};
use crate::Clipboard;

/// Cygwin exposes the Windows clipboard as this device file
pub const DEV_CLIPBOARD: &str = "/dev/clipboard";

/// A clipboard reached by writing to a device file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DevClipboard {
    path: PathBuf,
}

impl DevClipboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for DevClipboard {
    fn default() -> Self {
        Self::new(DEV_CLIPBOARD)
    }
}

impl Clipboard for DevClipboard {
    fn name(&self) -> &str {
        "cygwin"
    }

    fn copy(&self, text: &str) -> Result<()> {
        fs::write(&self.path, text).map_err(|e| {
            ClipboardError::IoError(e)
                .with_context(format!("Failed to write to {}", self.path.display()))
        })
    }
}
