use std::{
    fs, io,
    path::{Path, PathBuf, absolute},
};

use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use crate::ConfigLayer;

/// Configuration file consulted first when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "pyproject.toml";

/// Configuration file consulted when [`DEFAULT_CONFIG_FILE`] does not exist.
pub const FALLBACK_CONFIG_FILE: &str = "package.json";

/// The format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// A `pyproject.toml` style file, read from the `[tool.chcss]` table.
    Toml,
    /// A `package.json` style file, read from the `"chcss"` entry.
    Json,
}

impl Format {
    /// Infers the format from the file extension.
    ///
    /// A `.json` extension (in any case) is JSON; anything else is TOML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension() {
            Some(extension) if extension.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }

    /// Parses the configuration layer out of file content.
    ///
    /// A file without a `chcss` section yields an entirely unset layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid for the format, or if a
    /// vocabulary is not a list of delimiter-free strings.
    pub fn parse(self, content: &str) -> Result<ConfigLayer, LoadError> {
        match self {
            Self::Toml => Ok(toml::from_str::<PyProject>(content)?.tool.chcss),
            Self::Json => Ok(serde_json::from_str::<PackageJson>(content)?.chcss),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PyProject {
    #[serde(default)]
    tool: Tool,
}

#[derive(Debug, Default, Deserialize)]
struct Tool {
    #[serde(default)]
    chcss: ConfigLayer,
}

#[derive(Debug, Deserialize)]
struct PackageJson {
    #[serde(default)]
    chcss: ConfigLayer,
}

/// Errors that can occur when loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The configuration file was not found.
    #[error("configuration file not found")]
    NotFound,
    /// An I/O error occurred.
    #[error("failed to read configuration file: {0}")]
    Io(#[from] io::Error),
    /// The TOML content could not be parsed.
    #[error("failed to parse TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),
    /// The JSON content could not be parsed.
    #[error("failed to parse JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Loads the configuration layer from a file, inferring its format from the
/// extension.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_layer(path: &Path) -> Result<ConfigLayer, LoadError> {
    let content = fs::read_to_string(path).map_err(|io_error| match io_error.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound,
        _ => LoadError::Io(io_error),
    })?;
    Format::from_path(path).parse(&content)
}

/// Loads the configuration layer from a file, degrading any failure to an
/// entirely unset layer.
#[instrument(level = "debug")]
pub fn load_layer_or_unset(path: &Path) -> ConfigLayer {
    load_layer(path).unwrap_or_else(|error| {
        warn!(
            "Unable to load configuration file {}, using defaults and command line options: {error}",
            path.display()
        );
        ConfigLayer::unset()
    })
}

/// Loads the configuration layer from the default files in `root`.
///
/// `pyproject.toml` is tried first, then `package.json` if it does not
/// exist. A file that exists but cannot be loaded is not skipped: the layer
/// degrades to unset. If neither file exists the layer is unset.
#[instrument(level = "debug")]
pub fn discover(root: &Path) -> ConfigLayer {
    let candidates: [PathBuf; 2] = [
        root.join(DEFAULT_CONFIG_FILE),
        root.join(FALLBACK_CONFIG_FILE),
    ];

    for path in &candidates {
        match load_layer(path) {
            Ok(layer) => {
                debug!("Loaded configuration from {}", path.display());
                return layer;
            }
            Err(LoadError::NotFound) => {
                debug!("No configuration file at {}", path.display());
            }
            Err(error) => {
                warn!(
                    "Unable to load configuration file {}, using defaults and command line options: {error}",
                    path.display()
                );
                return ConfigLayer::unset();
            }
        }
    }

    info!("No configuration file found, using defaults and command line options");
    ConfigLayer::unset()
}

/// Loads the project configuration layer.
///
/// An explicit path is loaded as-is, unless it names the default
/// `pyproject.toml` in `root`, in which case the same fallback to
/// `package.json` applies as when no path is given.
pub fn load_project_layer(root: &Path, explicit: Option<&Path>) -> ConfigLayer {
    match explicit {
        Some(path) if !is_default_path(root, path) => load_layer_or_unset(path),
        _ => discover(root),
    }
}

fn is_default_path(root: &Path, path: &Path) -> bool {
    match (absolute(path), absolute(root.join(DEFAULT_CONFIG_FILE))) {
        (Ok(path), Ok(default)) => path == default,
        _ => false,
    }
}
