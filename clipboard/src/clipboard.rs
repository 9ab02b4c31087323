pub mod command;
pub mod detect;
pub mod dev;
pub mod error;
pub mod native;
pub mod unavailable;

pub use command::{CommandClipboard, Selection, TextInput};
pub use detect::{Backend, Os, Platform, detect};
pub use dev::{DEV_CLIPBOARD, DevClipboard};
pub use error::{ClipboardError, Result};
pub use native::NativeClipboard;
pub use unavailable::Unavailable;

/// Something that can put text on a clipboard.
///
/// A backend is chosen once at startup and handed to whoever needs to copy.
pub trait Clipboard {
    /// Short backend name for status output
    fn name(&self) -> &str;

    fn copy(&self, text: &str) -> Result<()>;

    fn is_available(&self) -> bool {
        true
    }
}
