// v23env: Vanadium build environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Project/tool registry.
//!
//! ```text
//! tool "v23" --> { project: "devtools", data: "data" }
//!                          |
//!                          v
//! project "devtools" --> { path: "devtools" }
//!
//! data dir = <root>/devtools/data
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use tracing::debug;

use super::Settings;
use super::types::DEFAULT_TOOL;
use crate::error::{NotFoundError, V23Result};
use crate::layout::Root;

/// Location of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectEntry {
    /// Project directory, relative to the root unless absolute.
    pub path: PathBuf,
}

/// A tool and where its data lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolEntry {
    /// Name of the owning project.
    pub project: String,
    /// Data directory, relative to the project.
    pub data: PathBuf,
}

impl Settings {
    /// Returns the data directory of `tool`.
    ///
    /// An empty tool name means the default tool (`v23`).
    ///
    /// # Errors
    ///
    /// - [`NotFoundError::Tool`] if the tool is not registered.
    /// - [`NotFoundError::Project`] if its project is not registered.
    pub fn data_dir(&self, root: &Root, tool: &str) -> V23Result<PathBuf> {
        let tool = if tool.is_empty() { DEFAULT_TOOL } else { tool };

        let entry = self
            .tools
            .get(tool)
            .ok_or_else(|| NotFoundError::Tool(tool.to_string()))?;
        let project = self
            .projects
            .get(&entry.project)
            .ok_or_else(|| NotFoundError::Project {
                project: entry.project.clone(),
                tool: tool.to_string(),
            })?;

        let dir = root.join(&project.path).join(&entry.data);
        debug!(tool, project = %entry.project, data_dir = %dir.display(), "resolved data directory");
        Ok(dir)
    }
}
