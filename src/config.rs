//! # Config
//!
//! Loading of the JSON configuration file, which currently only holds color
//! overrides:
//!
//! ```json
//! { "colors": { "Red": "#f00", "Cyan": "teal" } }
//! ```

use crate::error::{Error, Result};
use crate::style::ColorOverrides;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;


/// The configuration file as written, before color keys are checked.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    colors: BTreeMap<String, String>,
}

/// # Summary
///
/// `Config` is a validated configuration: every color key it holds is known.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    colors: ColorOverrides,
}

impl Config {
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(text)?;
        Ok(Self {
            colors: ColorOverrides::try_from(raw.colors)?,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading configuration");
        Self::from_json(&text)
    }

    pub fn colors(&self) -> &ColorOverrides {
        &self.colors
    }
}
