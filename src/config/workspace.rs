// v23env: Vanadium build environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Workspace configuration read from `<data-dir>/conf.json`.
//!
//! ```json
//! {
//!   "goWorkspaces": ["release/go", "roadmap/go"],
//!   "vdlWorkspaces": ["release/go/src"]
//! }
//! ```
//!
//! Keys other than the two workspace lists belong to other tools and are
//! ignored.

use serde::{Deserialize, Serialize};
use std::path::Path;

use tracing::debug;

use crate::error::{FsError, ParseError, V23Result};

/// File name of the workspace configuration inside a data directory.
pub const CONFIG_FILE: &str = "conf.json";

/// Root-relative workspaces contributing to the search paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkspaceConfig {
    go_workspaces: Vec<String>,
    vdl_workspaces: Vec<String>,
}

impl WorkspaceConfig {
    #[must_use]
    pub const fn new(go_workspaces: Vec<String>, vdl_workspaces: Vec<String>) -> Self {
        Self {
            go_workspaces,
            vdl_workspaces,
        }
    }

    /// Reads and parses `conf.json` from `data_dir`.
    ///
    /// # Errors
    ///
    /// - [`FsError::Read`] if the file cannot be read.
    /// - [`ParseError::Json`] if it is not valid JSON of the expected shape.
    pub fn load(data_dir: &Path) -> V23Result<Self> {
        let path = data_dir.join(CONFIG_FILE);
        let bytes = std::fs::read(&path).map_err(|source| FsError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = serde_json::from_slice(&bytes).map_err(|source| ParseError::Json {
            path: path.display().to_string(),
            source,
        })?;

        debug!(
            path = %path.display(),
            go_workspaces = config.go_workspaces.len(),
            vdl_workspaces = config.vdl_workspaces.len(),
            "loaded workspace config"
        );
        Ok(config)
    }

    /// Workspaces added to `GOPATH`.
    #[must_use]
    pub fn go_workspaces(&self) -> &[String] {
        &self.go_workspaces
    }

    /// Workspaces added to `VDLPATH`.
    #[must_use]
    pub fn vdl_workspaces(&self) -> &[String] {
        &self.vdl_workspaces
    }
}
