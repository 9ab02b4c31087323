use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use crate::error::{ClipboardError, Result};
use crate::Clipboard;

/// Which X11 selection receives the text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Clipboard,
    Primary,
}

/// How the text reaches the external tool
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextInput {
    #[default]
    Stdin,
    /// Appended as the last command-line argument
    Argument,
}

/// A clipboard that hands text to an external tool
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandClipboard {
    name: &'static str,
    program: String,
    args: Vec<String>,
    input: TextInput,
}

impl CommandClipboard {
    pub fn new<I, S>(name: &'static str, program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name,
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            input: TextInput::Stdin,
        }
    }

    pub fn with_input(mut self, input: TextInput) -> Self {
        self.input = input;
        self
    }

    /// macOS system pasteboard
    pub fn pasteboard() -> Self {
        Self::new("pasteboard", "pbcopy", Vec::<String>::new())
    }

    pub fn xsel(selection: Selection) -> Self {
        let flag = match selection {
            Selection::Clipboard => "-b",
            Selection::Primary => "-p",
        };
        Self::new("xsel", "xsel", [flag, "-i"])
    }

    pub fn xclip(selection: Selection) -> Self {
        let target = match selection {
            Selection::Clipboard => "clipboard",
            Selection::Primary => "primary",
        };
        Self::new("xclip", "xclip", ["-selection", target])
    }

    /// Windows clipboard reached from inside WSL
    pub fn wsl() -> Self {
        Self::new("wsl", "clip.exe", Vec::<String>::new())
    }

    /// KDE clipboard over D-Bus
    pub fn klipper() -> Self {
        Self::new("klipper", "qdbus", ["org.kde.klipper", "/klipper", "setClipboardContents"])
            .with_input(TextInput::Argument)
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn input(&self) -> TextInput {
        self.input
    }
}

impl Clipboard for CommandClipboard {
    fn name(&self) -> &str {
        self.name
    }

    fn copy(&self, text: &str) -> Result<()> {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        // xclip keeps serving the selection in a forked child, so only stdin is piped
        match self.input {
            TextInput::Stdin => command.stdin(Stdio::piped()),
            TextInput::Argument => command.arg(text).stdin(Stdio::null()),
        };

        let mut child = command
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                ClipboardError::IoError(e).with_context(format!("Failed to start {}", self.program))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(text.as_bytes()) {
                Ok(()) => {}
                // the exit status below explains an early exit
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {}
                Err(e) => {
                    return Err(ClipboardError::IoError(e)
                        .with_context(format!("Failed to write to {}", self.program)));
                }
            }
        }

        let status = child.wait()?;
        if !status.success() {
            return Err(ClipboardError::CommandFailed {
                program: self.program.clone(),
                status: status.to_string(),
            });
        }

        Ok(())
    }
}
