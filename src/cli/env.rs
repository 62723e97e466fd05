// v23env: Vanadium build environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the `env` and `run` commands.
//!
//! ```text
//! v23env env                       → changed variables, host platform
//! v23env env -p armv7-linux --all  → full environment for arm/linux
//! v23env env --format json         → JSON object
//! v23env run -p arm-android -- go build ./...
//! ```

use clap::{Args, ValueEnum};

use crate::core::platform::Platform;

/// Arguments for the `env` command.
#[derive(Debug, Clone, Args)]
pub struct EnvArgs {
    /// Target platform: `host` or `<arch>[v<N>]-<os>`, e.g. `armv7-linux`.
    #[arg(short = 'p', long = "platform", value_name = "PLATFORM", default_value = "host")]
    pub platform: Platform,

    /// Print every variable, not only the ones that changed.
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Output format.
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Shell)]
    pub format: OutputFormat,
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// Target platform: `host` or `<arch>[v<N>]-<os>`, e.g. `armv7-linux`.
    #[arg(short = 'p', long = "platform", value_name = "PLATFORM", default_value = "host")]
    pub platform: Platform,

    /// Command and its arguments.
    #[arg(value_name = "CMD", required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

/// How `env` prints variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `KEY=value` lines, quoted for POSIX shells.
    Shell,
    /// A JSON object.
    Json,
}
