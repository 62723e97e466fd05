// v23env: Vanadium build environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered settings loading.
//!
//! ```text
//! --ini FILE...        required TOML files, in order
//! ./v23env.toml        optional, skipped when absent
//! V23ENV_GLOBAL__TOOL  PREFIX_SECTION__KEY variables
//! CLI overrides        set()
//!        |
//!        v
//!    build() --> Settings   (later layers win)
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};

use super::Settings;
use crate::error::Result;

/// Where a layer of settings came from, as listed by `v23env inis`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsSource {
    /// A file given with `--ini`; must exist.
    File(PathBuf),
    /// A default file that was present when the loader was built.
    Optional(PathBuf),
    /// Inline TOML text.
    Inline,
}

impl fmt::Display for SettingsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "[file] {}", path.display()),
            Self::Optional(path) => write!(f, "[optional] {}", path.display()),
            Self::Inline => f.write_str("[inline]"),
        }
    }
}

/// Builder for loading settings from multiple sources.
pub struct SettingsLoader {
    builder: ConfigBuilder<DefaultState>,
    env_prefix: Option<String>,
    sources: Vec<SettingsSource>,
}

impl SettingsLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: Config::builder(),
            env_prefix: None,
            sources: Vec::new(),
        }
    }

    /// Adds a TOML file that must exist when `build()` runs.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(true));
        self.sources.push(SettingsSource::File(path.to_path_buf()));
        self
    }

    /// Adds a TOML file that is skipped when absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(false));
        if path.is_file() {
            self.sources.push(SettingsSource::Optional(path.to_path_buf()));
        }
        self
    }

    /// Backs [`Settings::parse`].
    #[must_use]
    pub(crate) fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.sources.push(SettingsSource::Inline);
        self
    }

    /// Reads `PREFIX_SECTION__KEY` variables, e.g. `V23ENV_GLOBAL__TOOL`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Overrides one dotted key, e.g. `global.tool`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be parsed.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merges every layer into [`Settings`].
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, a file is not valid
    /// TOML, or the merged tree does not match [`Settings`].
    pub fn build(self) -> Result<Settings> {
        let builder = match self.env_prefix {
            Some(prefix) => self.builder.add_source(
                Environment::with_prefix(&prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ),
            None => self.builder,
        };
        Ok(builder.build()?.try_deserialize()?)
    }

    #[must_use]
    pub fn sources(&self) -> &[SettingsSource] {
        &self.sources
    }

    /// Numbered source lines, in load order.
    #[must_use]
    pub fn describe_sources(&self) -> Vec<String> {
        self.sources
            .iter()
            .enumerate()
            .map(|(i, source)| format!("{}. {source}", i + 1))
            .collect()
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}
