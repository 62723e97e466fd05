// v23env: Vanadium build environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Settings --> Logging --> Context --> Command Dispatch
//!   Version | Options | Inis | Root | Paths | Manifest | Env | Run | RepoHost
//! ```

use std::process::ExitCode;

use v23env::cli::global::GlobalOptions;
use v23env::cli::{self, Command};
use v23env::cmd::config::{run_inis_command, run_options_command};
use v23env::cmd::env::{run_env_command, run_run_command};
use v23env::cmd::paths::{
    run_manifest_command, run_paths_command, run_repo_host_command, run_root_command,
};
use v23env::config::Settings;
use v23env::config::loader::SettingsLoader;
use v23env::context::Context;
use v23env::core::env::current_env;
use v23env::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let settings = match load_settings(&cli.global) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load settings: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&build_log_config(&cli.global, &settings)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    let context = build_context(&cli.global, settings);
    match dispatch_command(&cli, &context) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_log_config(global: &GlobalOptions, settings: &Settings) -> LogConfig {
    LogConfig::builder()
        .with_console_level(settings.global.output_log_level)
        .with_file_level(settings.global.file_log_level)
        .maybe_with_log_file(settings.global.log_file.clone())
        .with_json_file(global.json_log)
        .build()
}

/// Captures the process environment; `--root` replaces the root variable in
/// the captured copy only.
fn build_context(global: &GlobalOptions, settings: Settings) -> Context {
    let Some(root) = &global.root else {
        return Context::from_process(settings);
    };
    let mut env = current_env();
    env.set(settings.global.root_env.clone(), root.display().to_string());
    Context::new(env, settings)
}

fn dispatch_command(cli: &cli::Cli, ctx: &Context) -> v23env::error::Result<ExitCode> {
    let done = |result: v23env::error::Result<()>| result.map(|()| ExitCode::SUCCESS);

    match &cli.command {
        Some(Command::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Options) => {
            run_options_command(ctx.settings());
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Inis) => {
            run_inis_command(&build_settings_loader(&cli.global).describe_sources());
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Root) => done(run_root_command(ctx)),
        Some(Command::Paths(args)) => done(run_paths_command(args, ctx)),
        Some(Command::Manifest(args)) => done(run_manifest_command(args, ctx)),
        Some(Command::Env(args)) => done(run_env_command(args, ctx)),
        Some(Command::Run(args)) => run_run_command(args, ctx),
        Some(Command::RepoHost) => {
            run_repo_host_command();
            Ok(ExitCode::SUCCESS)
        }
        None => Err(anyhow::anyhow!(
            "no command specified, use --help for usage information"
        )),
    }
}

fn build_settings_loader(global: &GlobalOptions) -> SettingsLoader {
    let mut loader = SettingsLoader::new();
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    if !global.no_default_inis {
        loader = loader.add_toml_file_optional("v23env.toml");
    }
    loader.with_env_prefix("V23ENV")
}

fn load_settings(global: &GlobalOptions) -> v23env::error::Result<Settings> {
    let mut loader = build_settings_loader(global);
    for (key, value) in global.to_settings_overrides() {
        loader = loader.set(key, value)?;
    }
    loader.build()
}
