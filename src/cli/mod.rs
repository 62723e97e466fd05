// v23env: Vanadium build environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for v23env using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! v23env [global options] <command>
//! env [-p PLATFORM] [--all] [--format shell|json]
//! run [-p PLATFORM] -- CMD [ARGS...]
//! root | paths [NAME] | manifest [NAME] | repo-host
//! options | inis | version
//! ```

pub mod env;
pub mod global;
pub mod paths;


use crate::cli::env::{EnvArgs, RunArgs};
use crate::cli::global::GlobalOptions;
use crate::cli::paths::{ManifestArgs, PathsArgs};
use clap::{Parser, Subcommand};

/// Build environment resolver for Vanadium source trees.
#[derive(Debug, Parser)]
#[command(
    name = "v23env",
    author,
    version,
    about = "Vanadium build environment resolver",
    long_about = "v23env Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Computes the environment used to build a Vanadium source tree\n\
                  (GOPATH, VDLPATH, cgo flags and cross-compilation variables)\n\
                  and the well-known paths below its root. The root is read\n\
                  from $V23_ROOT unless --root is given.\n\n\
                  `v23env env -p armv7-linux` prints what changes for an ARM\n\
                  build; `v23env run -- go build ./...` runs a command in the\n\
                  resolved environment.",
    after_help = "SETTINGS FILES:\n\n\
                  Settings are read from the files given with --ini, then from\n\
                  `v23env.toml` in the current directory (unless\n\
                  --no-default-inis), then from V23ENV_SECTION__KEY environment\n\
                  variables. The [projects] and [tools] tables locate the data\n\
                  directory holding conf.json."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all settings and their values.
    Options,

    /// Lists the settings files used.
    Inis,

    /// Prints the canonical root directory.
    Root,

    /// Prints the well-known paths below the root.
    Paths(PathsArgs),

    /// Resolves a manifest name to a path.
    Manifest(ManifestArgs),

    /// Prints the build environment for a platform.
    Env(EnvArgs),

    /// Runs a command in the build environment.
    Run(RunArgs),

    /// Prints the URL hosting the source repositories.
    #[command(name = "repo-host")]
    RepoHost,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
