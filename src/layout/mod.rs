// v23env: Vanadium build environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Root directory and the well-known paths below it.
//!
//! ```text
//! $V23_ROOT (canonical)/
//!   .local_manifest
//!   .snapshot/
//!   .manifest/v2/
//!     <name>        (named manifests, "default")
//!     snapshot/     (remote snapshots)
//!   third_party/
//!     cout/leveldb/           (syncbase cgo flags)
//!     cout/xgcc/cross_arm/    (arm/linux PATH)
//!     repos/go_arm/bin/       (arm/linux PATH)
//!   environment/android/go/bin/ (arm/android PATH)
//! ```

use std::io;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::core::env::container::Env;
use crate::error::{ConfigError, FsError, V23Result};

/// Default variable designating the root.
pub const ROOT_ENV: &str = "V23_ROOT";

/// Manifest resolved when no name is given and no local manifest exists.
pub const DEFAULT_MANIFEST: &str = "default";

/// Host serving the source repositories.
pub const GIT_REPO_HOST: &str = "https://vanadium.googlesource.com/";

/// The canonical root of a source tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Root {
    path: PathBuf,
}

impl Root {
    /// Reads the root from `var` in `env` and resolves symlinks.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::EnvNotSet`] if the variable is unset or empty.
    /// - [`FsError::Canonicalize`] if the path cannot be resolved.
    /// - [`FsError::NotADirectory`] if it resolves to something else.
    pub fn from_env(env: &Env, var: &str) -> V23Result<Self> {
        let raw = env
            .get(var)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ConfigError::EnvNotSet {
                var: var.to_string(),
            })?;

        let path = std::fs::canonicalize(raw).map_err(|source| FsError::Canonicalize {
            path: raw.to_string(),
            source,
        })?;
        if !path.is_dir() {
            return Err(FsError::NotADirectory(path.display().to_string()).into());
        }

        trace!(var, root = %path.display(), "resolved root");
        Ok(Self { path })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Joins `relative` onto the root; absolute paths are returned unchanged.
    #[must_use]
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.path.join(relative)
    }

    #[must_use]
    pub fn local_manifest_file(&self) -> PathBuf {
        self.path.join(".local_manifest")
    }

    #[must_use]
    pub fn local_snapshot_dir(&self) -> PathBuf {
        self.path.join(".snapshot")
    }

    #[must_use]
    pub fn manifest_dir(&self) -> PathBuf {
        self.path.join(".manifest").join("v2")
    }

    /// Path of the manifest `name`, relative to the manifest directory.
    #[must_use]
    pub fn manifest_file(&self, name: &str) -> PathBuf {
        self.manifest_dir().join(name)
    }

    #[must_use]
    pub fn remote_snapshot_dir(&self) -> PathBuf {
        self.manifest_dir().join("snapshot")
    }

    /// Resolves a manifest name to a path.
    ///
    /// Absolute names are returned as-is and relative names are looked up in
    /// the manifest directory. Without a name the local manifest wins if it
    /// exists, otherwise the [`DEFAULT_MANIFEST`] is used.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::Stat`] if the local manifest cannot be checked.
    pub fn resolve_manifest_path(&self, name: Option<&str>) -> V23Result<PathBuf> {
        match name.filter(|name| !name.is_empty()) {
            Some(name) if Path::new(name).is_absolute() => Ok(PathBuf::from(name)),
            Some(name) => Ok(self.manifest_file(name)),
            None => {
                let local = self.local_manifest_file();
                if exists(&local)? {
                    Ok(local)
                } else {
                    self.resolve_manifest_path(Some(DEFAULT_MANIFEST))
                }
            }
        }
    }

    pub(crate) fn leveldb_dir(&self) -> PathBuf {
        self.path.join("third_party").join("cout").join("leveldb")
    }

    pub(crate) fn arm_toolchain_dirs(&self) -> [PathBuf; 2] {
        let third_party = self.path.join("third_party");
        [
            third_party.join("cout").join("xgcc").join("cross_arm"),
            third_party.join("repos").join("go_arm").join("bin"),
        ]
    }

    pub(crate) fn android_toolchain_dir(&self) -> PathBuf {
        self.path
            .join("environment")
            .join("android")
            .join("go")
            .join("bin")
    }
}

/// Stats `path`, treating absence as `false`.
pub(crate) fn exists(path: &Path) -> V23Result<bool> {
    match std::fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(FsError::Stat {
            path: path.display().to_string(),
            source,
        }
        .into()),
    }
}
