use std::env;
use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;

use crate::command::{CommandClipboard, Selection};
use crate::dev::{DEV_CLIPBOARD, DevClipboard};
use crate::native::NativeClipboard;
use crate::unavailable::Unavailable;
use crate::Clipboard;

/// Tools probed on the `PATH` when a display is present, in preference order
const SELECTION_TOOLS: [&str; 4] = ["xsel", "xclip", "klipper", "qdbus"];

/// Clipboard variants a front end can ask for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Pick from the running platform
    #[default]
    Auto,
    Pasteboard,
    Xsel,
    Xclip,
    Windows,
    Wsl,
    /// KDE clipboard through `qdbus`
    Klipper,
    /// Cygwin's `/dev/clipboard` device
    Cygwin,
    None,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Os {
    Windows,
    MacOs,
    Linux,
    Cygwin,
    Other,
}

/// Facts about the host that decide which backend to use
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Platform {
    pub os: Os,
    pub wsl: bool,
    pub display: bool,
    /// `/dev/clipboard` exists
    pub dev_clipboard: bool,
    pub executables: Vec<String>,
}

impl Platform {
    /// Inspect the running system once
    pub fn current() -> Self {
        let os = match env::consts::OS {
            "windows" => Os::Windows,
            "macos" => Os::MacOs,
            "linux" => Os::Linux,
            "cygwin" => Os::Cygwin,
            _ => Os::Other,
        };

        let wsl = os == Os::Linux
            && fs::read_to_string("/proc/version")
                .map(|version| version.to_lowercase().contains("microsoft"))
                .unwrap_or(false);

        let display = env::var_os("DISPLAY").is_some_and(|value| !value.is_empty());
        let dev_clipboard = Path::new(DEV_CLIPBOARD).exists();

        let executables = SELECTION_TOOLS
            .iter()
            .filter(|tool| which::which(tool).is_ok())
            .map(|tool| tool.to_string())
            .collect();

        Self {
            os,
            wsl,
            display,
            dev_clipboard,
            executables,
        }
    }

    fn has(&self, executable: &str) -> bool {
        self.executables.iter().any(|name| name == executable)
    }
}

/// Choose the backend for `platform`
pub fn detect(platform: &Platform) -> Backend {
    match platform.os {
        Os::Cygwin if platform.dev_clipboard => Backend::Cygwin,
        Os::Windows => Backend::Windows,
        Os::Linux if platform.wsl => Backend::Wsl,
        Os::MacOs => Backend::Pasteboard,
        _ if platform.display => {
            if platform.has("xsel") {
                Backend::Xsel
            } else if platform.has("xclip") {
                Backend::Xclip
            } else if platform.has("klipper") && platform.has("qdbus") {
                Backend::Klipper
            } else {
                Backend::None
            }
        }
        _ => Backend::None,
    }
}

impl Backend {
    /// Resolve `Auto` against the platform, leaving explicit choices alone
    pub fn resolve(self, platform: &Platform) -> Backend {
        match self {
            Backend::Auto => detect(platform),
            other => other,
        }
    }

    /// Build the clipboard for this backend. `Auto` is resolved first.
    pub fn open(self, platform: &Platform, selection: Selection) -> Box<dyn Clipboard> {
        match self.resolve(platform) {
            Backend::Pasteboard => Box::new(CommandClipboard::pasteboard()),
            Backend::Xsel => Box::new(CommandClipboard::xsel(selection)),
            Backend::Xclip => Box::new(CommandClipboard::xclip(selection)),
            Backend::Windows => Box::new(NativeClipboard),
            Backend::Wsl => Box::new(CommandClipboard::wsl()),
            Backend::Klipper => Box::new(CommandClipboard::klipper()),
            Backend::Cygwin => Box::new(DevClipboard::default()),
            Backend::None | Backend::Auto => Box::new(Unavailable),
        }
    }
}
