// v23env: Vanadium build environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tool settings and the workspace configuration.
//!
//! # Settings Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. --ini files
//! 3. v23env.toml (cwd, optional)
//! 4. V23ENV_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! V23ENV_GLOBAL__TOOL=v23            → global.tool = "v23"
//! V23ENV_GLOBAL__ROOT_ENV=MY_ROOT    → global.root_env = "MY_ROOT"
//! V23ENV_TOOLS__V23__DATA=data       → tools.v23.data = "data"
//! ```
//!
//! # Registry
//!
//! ```toml
//! [projects.devtools]
//! path = "devtools"      # relative to the root
//!
//! [tools.v23]
//! project = "devtools"
//! data = "data"          # conf.json lives in <root>/devtools/data
//! ```

pub mod loader;
pub mod registry;
pub mod types;
pub mod workspace;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::Result;

use loader::SettingsLoader;
use registry::{ProjectEntry, ToolEntry};
use types::GlobalSettings;

/// Complete tool settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Global options.
    pub global: GlobalSettings,
    /// Project name → project location.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub projects: BTreeMap<String, ProjectEntry>,
    /// Tool name → owning project and data directory.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub tools: BTreeMap<String, ToolEntry>,
}

impl Settings {
    /// Create a new settings builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use v23env::config::Settings;
    ///
    /// let settings = Settings::builder()
    ///     .add_toml_file("v23env.toml")
    ///     .with_env_prefix("V23ENV")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> SettingsLoader {
        SettingsLoader::new()
    }

    /// Load settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Settings` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Format settings for display, one `key = value` line each, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();

        options.insert("global.root_env".to_string(), self.global.root_env.clone());
        options.insert("global.tool".to_string(), self.global.tool.clone());
        options.insert(
            "global.output_log_level".to_string(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".to_string(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".to_string(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );

        for (name, project) in &self.projects {
            options.insert(
                format!("projects.{name}.path"),
                project.path.display().to_string(),
            );
        }
        for (name, tool) in &self.tools {
            options.insert(format!("tools.{name}.project"), tool.project.clone());
            options.insert(format!("tools.{name}.data"), tool.data.display().to_string());
        }

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
