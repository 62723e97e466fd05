// v23env: Vanadium build environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `root`, `paths`, `manifest` and `repo-host` commands.

use std::path::PathBuf;

use anyhow::bail;

use crate::cli::paths::{ManifestArgs, PathsArgs};
use crate::config::workspace::CONFIG_FILE;
use crate::context::Context;
use crate::error::{Result, V23Result};
use crate::layout::GIT_REPO_HOST;

/// Names accepted by `v23env paths`, in display order.
pub const PATH_NAMES: &[&str] = &[
    "root",
    "local-manifest",
    "local-snapshot-dir",
    "manifest-dir",
    "remote-snapshot-dir",
    "data-dir",
    "config-file",
    "build-cop-rotation",
];

/// Resolves one of [`PATH_NAMES`]; `None` for an unknown name.
///
/// # Errors
///
/// Returns an error if the root or, for the data paths, the tool data
/// directory cannot be resolved.
pub fn resolve_named_path(ctx: &Context, name: &str) -> V23Result<Option<PathBuf>> {
    let path = match name {
        "root" => ctx.root()?.path().to_path_buf(),
        "local-manifest" => ctx.local_manifest_file()?,
        "local-snapshot-dir" => ctx.local_snapshot_dir()?,
        "manifest-dir" => ctx.manifest_dir()?,
        "remote-snapshot-dir" => ctx.remote_snapshot_dir()?,
        "data-dir" => ctx.data_dir(None)?,
        "config-file" => ctx.data_dir(None)?.join(CONFIG_FILE),
        "build-cop-rotation" => ctx.build_cop_rotation_path()?,
        _ => return Ok(None),
    };
    Ok(Some(path))
}

/// Prints the canonical root.
///
/// # Errors
///
/// Returns an error if the root cannot be resolved.
pub fn run_root_command(ctx: &Context) -> Result<()> {
    println!("{}", ctx.root()?.path().display());
    Ok(())
}

/// Main handler for the `paths` command.
///
/// # Errors
///
/// Returns an error for an unknown name or if a path cannot be resolved.
pub fn run_paths_command(args: &PathsArgs, ctx: &Context) -> Result<()> {
    if let Some(name) = &args.name {
        let Some(path) = resolve_named_path(ctx, name)? else {
            bail!("unknown path '{name}', expected one of: {}", PATH_NAMES.join(", "));
        };
        println!("{}", path.display());
        return Ok(());
    }

    let width = PATH_NAMES.iter().map(|n| n.len()).max().unwrap_or(0);
    for name in PATH_NAMES {
        if let Some(path) = resolve_named_path(ctx, name)? {
            println!("{name:<width$} {}", path.display());
        }
    }
    Ok(())
}

/// Main handler for the `manifest` command.
///
/// # Errors
///
/// Returns an error if the manifest path cannot be resolved.
pub fn run_manifest_command(args: &ManifestArgs, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_manifest_path(args.name.as_deref())?;
    println!("{}", path.display());
    Ok(())
}

/// Prints the URL hosting the source repositories.
pub fn run_repo_host_command() {
    println!("{GIT_REPO_HOST}");
}
