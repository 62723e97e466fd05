// v23env: Vanadium build environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Settings;
use super::loader::SettingsSource;
use super::registry::{ProjectEntry, ToolEntry};
use super::workspace::WorkspaceConfig;
use crate::core::env::container::Env;
use crate::error::{FsError, NotFoundError, ParseError, V23Error};
use crate::layout::{ROOT_ENV, Root};
use crate::logging::LogLevel;
use std::path::PathBuf;

fn temp_root() -> (tempfile::TempDir, Root) {
    let dir = tempfile::tempdir().unwrap();
    let env: Env = [(ROOT_ENV, dir.path().display().to_string())]
        .into_iter()
        .collect();
    let root = Root::from_env(&env, ROOT_ENV).unwrap();
    (dir, root)
}

fn registry_settings() -> Settings {
    Settings::parse(
        r#"
[projects.devtools]
path = "devtools"

[tools.v23]
project = "devtools"
data = "data"

[tools.orphan]
project = "missing"
data = "data"
"#,
    )
    .unwrap()
}

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.global.root_env, "V23_ROOT");
    assert_eq!(settings.global.tool, "v23");
    assert_eq!(settings.global.output_log_level, LogLevel::INFO);
    assert!(settings.global.log_file.is_none());
    assert!(settings.projects.is_empty());
    assert!(settings.tools.is_empty());
}

#[test]
fn test_parse_registry() {
    let settings = registry_settings();
    assert_eq!(
        settings.projects.get("devtools"),
        Some(&ProjectEntry {
            path: PathBuf::from("devtools")
        })
    );
    assert_eq!(
        settings.tools.get("v23"),
        Some(&ToolEntry {
            project: "devtools".to_string(),
            data: PathBuf::from("data"),
        })
    );
}

#[test]
fn test_parse_rejects_unknown_global_key() {
    let result = Settings::parse(
        r"
[global]
no_such_key = true
",
    );
    assert!(result.is_err());
}

#[test]
fn test_parse_rejects_invalid_log_level() {
    let result = Settings::parse(
        r"
[global]
output_log_level = 9
",
    );
    assert!(result.is_err());
}

#[test]
fn test_loader_override() {
    let settings = Settings::builder()
        .add_toml_str("[global]\ntool = \"v23\"\n")
        .set("global.tool", "jiri")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(settings.global.tool, "jiri");
}

#[test]
fn test_loader_tracks_files() {
    let dir = tempfile::tempdir().unwrap();
    let present = dir.path().join("v23env.toml");
    std::fs::write(&present, "[global]\n").unwrap();

    let loader = Settings::builder()
        .add_toml_file_optional(&present)
        .add_toml_file_optional(dir.path().join("absent.toml"))
        .add_toml_str("");

    assert_eq!(
        loader.sources(),
        [SettingsSource::Optional(present), SettingsSource::Inline]
    );
    assert_eq!(loader.describe_sources()[1], "2. [inline]");
    assert!(loader.build().is_ok());
}

#[test]
fn test_required_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let loader = Settings::builder().add_toml_file(dir.path().join("absent.toml"));
    assert!(loader.build().is_err());
}

#[test]
fn test_format_options() {
    let options = registry_settings().format_options();
    assert!(options.iter().any(|l| l.starts_with("global.root_env") && l.ends_with("= V23_ROOT")));
    assert!(options.iter().any(|l| l.starts_with("projects.devtools.path") && l.ends_with("= devtools")));
    assert!(options.iter().any(|l| l.starts_with("tools.v23.data") && l.ends_with("= data")));

    let mut sorted = options.clone();
    sorted.sort();
    assert_eq!(options, sorted);
}

#[test]
fn test_data_dir() {
    let (_dir, root) = temp_root();
    let settings = registry_settings();
    assert_eq!(
        settings.data_dir(&root, "v23").unwrap(),
        root.path().join("devtools").join("data")
    );
}

#[test]
fn test_data_dir_empty_tool_means_v23() {
    let (_dir, root) = temp_root();
    let settings = registry_settings();
    assert_eq!(
        settings.data_dir(&root, "").unwrap(),
        settings.data_dir(&root, "v23").unwrap()
    );
}

#[test]
fn test_data_dir_absolute_project_path() {
    let (_dir, root) = temp_root();
    let elsewhere = tempfile::tempdir().unwrap();
    let mut settings = registry_settings();
    settings.projects.insert(
        "devtools".to_string(),
        ProjectEntry {
            path: elsewhere.path().to_path_buf(),
        },
    );
    assert_eq!(
        settings.data_dir(&root, "v23").unwrap(),
        elsewhere.path().join("data")
    );
}

#[test]
fn test_data_dir_unknown_tool() {
    let (_dir, root) = temp_root();
    let err = registry_settings().data_dir(&root, "nope").unwrap_err();
    assert!(matches!(err, V23Error::NotFound(ref e) if matches!(**e, NotFoundError::Tool(ref t) if t == "nope")));
}

#[test]
fn test_data_dir_unknown_project() {
    let (_dir, root) = temp_root();
    let err = registry_settings().data_dir(&root, "orphan").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"not found: project 'missing' (owner of tool 'orphan') not found in the manifest"
    );
}

#[test]
fn test_workspace_config_load() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("conf.json"),
        r#"{"goWorkspaces": ["release/go", "roadmap/go"], "vdlWorkspaces": ["release/go/src"], "testGroups": {}}"#,
    )
    .unwrap();

    let config = WorkspaceConfig::load(dir.path()).unwrap();
    assert_eq!(config.go_workspaces(), ["release/go", "roadmap/go"]);
    assert_eq!(config.vdl_workspaces(), ["release/go/src"]);
}

#[test]
fn test_workspace_config_missing_lists_default_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("conf.json"), "{}").unwrap();
    assert_eq!(WorkspaceConfig::load(dir.path()).unwrap(), WorkspaceConfig::default());
}

#[test]
fn test_workspace_config_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = WorkspaceConfig::load(dir.path()).unwrap_err();
    assert!(matches!(err, V23Error::Io(ref e) if matches!(**e, FsError::Read { .. })));
}

#[test]
fn test_workspace_config_malformed() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("conf.json"), "{\"goWorkspaces\": [").unwrap();
    let err = WorkspaceConfig::load(dir.path()).unwrap_err();
    assert!(matches!(err, V23Error::Parse(ref e) if matches!(**e, ParseError::Json { .. })));
}
