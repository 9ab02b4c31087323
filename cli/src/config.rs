use std::fs;
use std::path::{Path, PathBuf};

use clipboard::{Backend, Selection};
use serde::Deserialize;
use table::{MissingCells, RenderOptions};

use crate::cli::SharedArgs;
use crate::error::{CliError, Result, ResultExt};

pub const LOCAL_CONFIG_FILE: &str = "boxtab.toml";

/// Contents of a `boxtab.toml` file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub min_width: Option<usize>,
    pub missing_cells: Option<MissingCells>,
    pub copy: Option<bool>,
    pub clipboard: Option<Backend>,
    pub primary_selection: Option<bool>,
}

impl FileConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Load the explicit file, or the first default location that exists
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(CliError::ConfigNotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        match default_locations().into_iter().find(|path| path.is_file()) {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }
}

fn default_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("boxtab").join("config.toml"));
    }
    locations
}

/// Effective settings: command-line flags over the file over defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub options: RenderOptions,
    pub copy: bool,
    pub backend: Backend,
    pub selection: Selection,
    pub verbose: bool,
}

impl Settings {
    pub fn resolve(args: &SharedArgs) -> Result<Self> {
        let file = FileConfig::discover(args.config.as_deref())?;
        Ok(Self::merge(args, &file))
    }

    pub fn merge(args: &SharedArgs, file: &FileConfig) -> Self {
        let defaults = RenderOptions::default();
        let options = RenderOptions {
            min_width: args.min_width.or(file.min_width).unwrap_or(defaults.min_width),
            missing_cells: args
                .missing_cells
                .or(file.missing_cells)
                .unwrap_or(MissingCells::Error),
        };

        let primary = args.primary || file.primary_selection.unwrap_or(false);

        Self {
            options,
            copy: args.copy || file.copy.unwrap_or(false),
            backend: args.clipboard.or(file.clipboard).unwrap_or_default(),
            selection: if primary {
                Selection::Primary
            } else {
                Selection::Clipboard
            },
            verbose: args.verbose,
        }
    }
}
