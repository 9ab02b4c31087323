use thiserror::Error;

/// Clipboard error type, kept apart from anything the table renderer reports
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Native clipboard error: {0}")]
    NativeError(#[from] arboard::Error),

    #[error("{program} exited with {status}")]
    CommandFailed { program: String, status: String },

    #[error("No clipboard mechanism found for this system")]
    Unavailable,

    #[error("{0}: {1}")]
    WithContext(String, Box<ClipboardError>),
}

impl ClipboardError {
    /// Add context to an error
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        ClipboardError::WithContext(context.into(), Box::new(self))
    }

    /// Get a user-friendly message for command line display
    pub fn user_message(&self) -> String {
        match self {
            ClipboardError::IoError(e) => format!("I/O error: {}", e),
            ClipboardError::NativeError(e) => format!("Clipboard error: {}", e),
            ClipboardError::CommandFailed { program, status } => {
                format!("Clipboard command '{}' failed ({})", program, status)
            }
            ClipboardError::Unavailable => {
                "No copy mechanism found. On Linux install xsel or xclip, or klipper with qdbus"
                    .to_string()
            }
            ClipboardError::WithContext(ctx, err) => format!("{}: {}", ctx, err.user_message()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClipboardError>;
