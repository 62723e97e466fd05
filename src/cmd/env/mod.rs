// v23env: Vanadium build environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `env` and `run` commands.
//!
//! ```text
//! env:  Context::environment(platform)
//!         --> changes_from(input) | to_map()
//!         --> KEY=value lines | JSON
//!
//! run:  Context::environment(platform)
//!         --> which CMD on the resolved PATH
//!         --> spawn with the snapshot as its whole environment
//!         --> exit code of the child
//! ```

use std::collections::BTreeMap;
use std::process::{Command, ExitCode};

use anyhow::{Context as _, anyhow};
use tracing::{debug, info};

use crate::cli::env::{EnvArgs, OutputFormat, RunArgs};
use crate::context::Context;
use crate::core::env::container::Env;
use crate::error::Result;

/// Main handler for the `env` command.
///
/// # Errors
///
/// Returns an error if the environment cannot be resolved for the platform.
pub fn run_env_command(args: &EnvArgs, ctx: &Context) -> Result<()> {
    let env = ctx.environment(&args.platform)?;
    let vars = select_vars(&env, ctx.env(), args.all);
    print!("{}", format_vars(&vars, args.format)?);
    Ok(())
}

/// Main handler for the `run` command.
///
/// # Errors
///
/// Returns an error if the environment cannot be resolved, the command is not
/// found on the resolved `PATH`, or it cannot be spawned.
pub fn run_run_command(args: &RunArgs, ctx: &Context) -> Result<ExitCode> {
    let env = ctx.environment(&args.platform)?;
    let (program, rest) = args
        .command
        .split_first()
        .ok_or_else(|| anyhow!("no command given"))?;

    let cwd = std::env::current_dir().context("failed to read the current directory")?;
    let exe = which::which_in(program, env.get("PATH"), &cwd)
        .with_context(|| format!("'{program}' not found on the resolved PATH"))?;

    info!(platform = %args.platform, command = %exe.display(), "running");
    let mut command = Command::new(&exe);
    env.apply_to(&mut command).args(rest);

    let status = command
        .status()
        .with_context(|| format!("failed to spawn '{}'", exe.display()))?;
    debug!(%status, "command finished");

    Ok(status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .map_or(ExitCode::FAILURE, ExitCode::from))
}

/// Picks every variable of `env`, or only those that differ from `base`.
#[must_use]
pub fn select_vars(env: &Env, base: &Env, all: bool) -> BTreeMap<String, String> {
    if all {
        env.to_map()
    } else {
        env.changes_from(base)
    }
}

/// Renders variables in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_vars(vars: &BTreeMap<String, String>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(vars)? + "\n"),
        OutputFormat::Shell => Ok(vars
            .iter()
            .map(|(key, value)| format!("{key}={}\n", shell_quote(value)))
            .collect()),
    }
}

/// Quotes `value` for a POSIX shell, leaving plain words as they are.
#[must_use]
pub fn shell_quote(value: &str) -> String {
    let plain = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-./:,+=@%".contains(c));
    if plain {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', r"'\''"))
    }
}
