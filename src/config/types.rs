// v23env: Vanadium build environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::layout::ROOT_ENV;
use crate::logging::LogLevel;

/// Tool used when none is configured.
pub const DEFAULT_TOOL: &str = "v23";

/// Global options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalSettings {
    /// Environment variable designating the root.
    pub root_env: String,
    /// Tool whose data directory holds `conf.json`.
    pub tool: String,
    /// Log level for stdout output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            root_env: ROOT_ENV.to_string(),
            tool: DEFAULT_TOOL.to_string(),
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}
