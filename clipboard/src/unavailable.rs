use crate::error::{ClipboardError, Result};
use crate::Clipboard;

/// Stand-in used when no copy mechanism exists; every copy fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unavailable;

impl Clipboard for Unavailable {
    fn name(&self) -> &str {
        "none"
    }

    fn copy(&self, _text: &str) -> Result<()> {
        Err(ClipboardError::Unavailable)
    }

    fn is_available(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_always_fails() {
        assert!(matches!(Unavailable.copy("table"), Err(ClipboardError::Unavailable)));
        assert!(!Unavailable.is_available());
    }
}
