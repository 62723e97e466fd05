// v23env: Vanadium build environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resolution context.
//!
//! ```text
//! Context { env: Env (input snapshot), settings: Settings }
//!   root()                 --> Root            (env[settings.global.root_env])
//!   data_dir(tool)         --> <root>/<project>/<data>
//!   load_config()          --> WorkspaceConfig (<data dir>/conf.json)
//!   build_cop_rotation_path()
//!   local_manifest_file() / local_snapshot_dir() / manifest_dir()
//!   manifest_file(name) / remote_snapshot_dir() / resolve_manifest_path(name)
//!   environment(platform)  --> Env             (see environment.rs)
//! ```
//!
//! The ambient environment is an explicit input: every lookup reads the
//! snapshot held here, never the live process environment.

mod environment;

#[cfg(all(test, unix))]
mod tests;

use std::path::PathBuf;

use crate::config::Settings;
use crate::config::workspace::WorkspaceConfig;
use crate::core::env::container::Env;
use crate::core::env::current_env;
use crate::error::V23Result;
use crate::layout::Root;

/// File holding the build cop rotation inside the tool data directory.
pub const BUILD_COP_FILE: &str = "buildcop.xml";

/// Inputs of a resolution: the ambient environment and the tool settings.
#[derive(Debug, Clone)]
pub struct Context {
    env: Env,
    settings: Settings,
}

impl Context {
    #[must_use]
    pub const fn new(env: Env, settings: Settings) -> Self {
        Self { env, settings }
    }

    /// Context over a snapshot of the current process environment.
    #[must_use]
    pub fn from_process(settings: Settings) -> Self {
        Self::new(current_env(), settings)
    }

    /// The input environment snapshot.
    #[must_use]
    pub const fn env(&self) -> &Env {
        &self.env
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Resolves the root from the configured variable.
    ///
    /// # Errors
    ///
    /// See [`Root::from_env`].
    pub fn root(&self) -> V23Result<Root> {
        Root::from_env(&self.env, &self.settings.global.root_env)
    }

    /// Data directory of `tool`, or of the configured tool when `None`.
    ///
    /// # Errors
    ///
    /// Fails if the root cannot be resolved or the tool or its project is not
    /// registered.
    pub fn data_dir(&self, tool: Option<&str>) -> V23Result<PathBuf> {
        let root = self.root()?;
        self.settings
            .data_dir(&root, tool.unwrap_or(&self.settings.global.tool))
    }

    /// Loads `conf.json` of the configured tool.
    ///
    /// # Errors
    ///
    /// Fails if the data directory cannot be resolved or the file cannot be
    /// read or parsed.
    pub fn load_config(&self) -> V23Result<WorkspaceConfig> {
        WorkspaceConfig::load(&self.data_dir(None)?)
    }

    /// Path to the build cop rotation file.
    ///
    /// # Errors
    ///
    /// Fails if the data directory cannot be resolved.
    pub fn build_cop_rotation_path(&self) -> V23Result<PathBuf> {
        Ok(self.data_dir(None)?.join(BUILD_COP_FILE))
    }

    /// # Errors
    ///
    /// Fails if the root cannot be resolved.
    pub fn local_manifest_file(&self) -> V23Result<PathBuf> {
        Ok(self.root()?.local_manifest_file())
    }

    /// # Errors
    ///
    /// Fails if the root cannot be resolved.
    pub fn local_snapshot_dir(&self) -> V23Result<PathBuf> {
        Ok(self.root()?.local_snapshot_dir())
    }

    /// # Errors
    ///
    /// Fails if the root cannot be resolved.
    pub fn manifest_dir(&self) -> V23Result<PathBuf> {
        Ok(self.root()?.manifest_dir())
    }

    /// # Errors
    ///
    /// Fails if the root cannot be resolved.
    pub fn manifest_file(&self, name: &str) -> V23Result<PathBuf> {
        Ok(self.root()?.manifest_file(name))
    }

    /// # Errors
    ///
    /// Fails if the root cannot be resolved.
    pub fn remote_snapshot_dir(&self) -> V23Result<PathBuf> {
        Ok(self.root()?.remote_snapshot_dir())
    }

    /// Resolves a manifest name, see [`Root::resolve_manifest_path`].
    ///
    /// Absolute names are returned without consulting the root.
    ///
    /// # Errors
    ///
    /// Fails if the root cannot be resolved or the local manifest cannot be
    /// checked.
    pub fn resolve_manifest_path(&self, name: Option<&str>) -> V23Result<PathBuf> {
        match name {
            Some(name) if std::path::Path::new(name).is_absolute() => Ok(PathBuf::from(name)),
            _ => self.root()?.resolve_manifest_path(name),
        }
    }
}
