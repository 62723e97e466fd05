// v23env: Vanadium build environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the `paths` and `manifest` commands.

use clap::Args;

/// Arguments for the `paths` command.
#[derive(Debug, Clone, Default, Args)]
pub struct PathsArgs {
    /// Only print the path with this name (e.g. `manifest-dir`).
    #[arg(value_name = "NAME")]
    pub name: Option<String>,
}

/// Arguments for the `manifest` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ManifestArgs {
    /// Manifest name; absolute paths are returned unchanged. Defaults to the
    /// local manifest, or `default` if there is none.
    #[arg(value_name = "NAME")]
    pub name: Option<String>,
}
