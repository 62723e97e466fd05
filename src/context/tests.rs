// v23env: Vanadium build environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Context;
use super::environment::set_syncbase_cgo_env;
use crate::config::Settings;
use crate::core::env::container::Env;
use crate::core::platform::Platform;
use crate::error::{ConfigError, FsError, V23Error};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

const SETTINGS: &str = r#"
[projects.devtools]
path = "devtools"

[tools.v23]
project = "devtools"
data = "data"
"#;

struct Fixture {
    _dir: tempfile::TempDir,
    root: PathBuf,
    context: Context,
}

fn fixture(conf: &str) -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let root = std::fs::canonicalize(dir.path()).unwrap();
    let data = root.join("devtools").join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("conf.json"), conf).unwrap();

    let env: Env = [
        ("V23_ROOT", root.display().to_string()),
        ("PATH", "/usr/bin:/bin".to_string()),
        ("GOPATH", "/home/me/go".to_string()),
    ]
    .into_iter()
    .collect();
    let context = Context::new(env, Settings::parse(SETTINGS).unwrap());

    Fixture {
        _dir: dir,
        root,
        context,
    }
}

fn default_fixture() -> Fixture {
    fixture(r#"{"goWorkspaces": ["release/go"], "vdlWorkspaces": ["release/go/src"]}"#)
}

fn changed_keys(fx: &Fixture, env: &Env) -> BTreeSet<String> {
    env.changes_from(fx.context.env()).into_keys().collect()
}

fn keys(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

fn disp(path: &Path) -> String {
    path.display().to_string()
}

#[test]
fn test_derived_paths_through_context() {
    let fx = default_fixture();
    let ctx = &fx.context;

    assert_eq!(ctx.root().unwrap().path(), fx.root);
    assert_eq!(ctx.local_manifest_file().unwrap(), fx.root.join(".local_manifest"));
    assert_eq!(ctx.local_snapshot_dir().unwrap(), fx.root.join(".snapshot"));
    assert_eq!(ctx.manifest_dir().unwrap(), fx.root.join(".manifest/v2"));
    assert_eq!(ctx.manifest_file("x").unwrap(), fx.root.join(".manifest/v2/x"));
    assert_eq!(
        ctx.remote_snapshot_dir().unwrap(),
        fx.root.join(".manifest/v2/snapshot")
    );
    assert_eq!(
        ctx.resolve_manifest_path(None).unwrap(),
        fx.root.join(".manifest/v2/default")
    );
    assert_eq!(
        ctx.data_dir(None).unwrap(),
        fx.root.join("devtools").join("data")
    );
    assert_eq!(
        ctx.build_cop_rotation_path().unwrap(),
        fx.root.join("devtools").join("data").join("buildcop.xml")
    );
}

#[test]
fn test_missing_root_is_config_error_everywhere() {
    let fx = default_fixture();
    let mut env = fx.context.env().clone();
    env.remove("V23_ROOT");
    let ctx = Context::new(env, fx.context.settings().clone());

    let is_env_not_set = |err: V23Error| {
        matches!(err, V23Error::Config(ref e) if matches!(**e, ConfigError::EnvNotSet { ref var } if var == "V23_ROOT"))
    };

    assert!(is_env_not_set(ctx.root().unwrap_err()));
    assert!(is_env_not_set(ctx.local_manifest_file().unwrap_err()));
    assert!(is_env_not_set(ctx.local_snapshot_dir().unwrap_err()));
    assert!(is_env_not_set(ctx.manifest_dir().unwrap_err()));
    assert!(is_env_not_set(ctx.manifest_file("default").unwrap_err()));
    assert!(is_env_not_set(ctx.remote_snapshot_dir().unwrap_err()));
    assert!(is_env_not_set(ctx.resolve_manifest_path(None).unwrap_err()));
    assert!(is_env_not_set(ctx.data_dir(None).unwrap_err()));
    assert!(is_env_not_set(ctx.load_config().unwrap_err()));
    assert!(is_env_not_set(ctx.build_cop_rotation_path().unwrap_err()));
    assert!(is_env_not_set(ctx.environment(&Platform::host()).unwrap_err()));
}

#[test]
fn test_absolute_manifest_is_idempotent_without_root() {
    let ctx = Context::new(Env::new(), Settings::default());
    let name = "/m/public";
    let first = ctx.resolve_manifest_path(Some(name)).unwrap();
    let second = ctx.resolve_manifest_path(first.to_str()).unwrap();
    assert_eq!(first, PathBuf::from(name));
    assert_eq!(first, second);
}

#[test]
fn test_host_environment() {
    let fx = default_fixture();
    let host = Platform::host();
    let env = fx.context.environment(&host).unwrap();

    assert_eq!(
        env.tokens("GOPATH", ':'),
        vec!["/home/me/go".to_string(), disp(&fx.root.join("release/go"))]
    );
    assert_eq!(env.tokens("VDLPATH", ':'), vec![disp(&fx.root.join("release/go/src"))]);
    assert_eq!(env.get("PATH"), Some("/usr/bin:/bin"));

    let mut expected = vec!["GOPATH", "VDLPATH"];
    if matches!(host.os.as_str(), "linux" | "darwin") {
        expected.extend(["CGO_ENABLED", "CGO_CFLAGS", "CGO_LDFLAGS"]);
    }
    assert_eq!(changed_keys(&fx, &env), keys(&expected));
}

#[test]
fn test_arm_linux_environment() {
    let fx = default_fixture();
    let platform = Platform::new("linux", "arm", Some("v7"));
    if platform.is_host() {
        return;
    }
    let env = fx.context.environment(&platform).unwrap();

    assert_eq!(env.get("GOARCH"), Some("arm"));
    assert_eq!(env.get("GOARM"), Some("7"));
    assert_eq!(env.get("GOOS"), Some("linux"));
    assert_eq!(env.get("CGO_ENABLED"), Some("1"));
    assert_eq!(
        env.tokens("PATH", ':'),
        vec![
            disp(&fx.root.join("third_party/cout/xgcc/cross_arm")),
            disp(&fx.root.join("third_party/repos/go_arm/bin")),
            "/usr/bin".to_string(),
            "/bin".to_string(),
        ]
    );
    assert_eq!(
        changed_keys(&fx, &env),
        keys(&[
            "GOPATH",
            "VDLPATH",
            "CGO_ENABLED",
            "CGO_CFLAGS",
            "CGO_LDFLAGS",
            "GOARCH",
            "GOARM",
            "GOOS",
            "PATH",
        ])
    );
}

#[test]
fn test_android_environment() {
    let fx = default_fixture();
    let platform = Platform::new("android", "arm", Some("v7"));
    let env = fx.context.environment(&platform).unwrap();

    assert_eq!(env.get("GOARM"), Some("7"));
    assert_eq!(env.get("CGO_ENABLED"), Some("1"));
    assert_eq!(env.get("GOOS"), Some("android"));
    assert_eq!(env.get("GOARCH"), Some("arm"));
    assert_eq!(
        env.tokens("PATH", ':'),
        vec![
            disp(&fx.root.join("environment/android/go/bin")),
            "/usr/bin".to_string(),
            "/bin".to_string(),
        ]
    );
    // android is not darwin/linux, so no leveldb flags
    assert_eq!(
        changed_keys(&fx, &env),
        keys(&["GOPATH", "VDLPATH", "CGO_ENABLED", "GOOS", "GOARCH", "GOARM", "PATH"])
    );
}

#[test]
fn test_nacl_environment() {
    let fx = default_fixture();
    for arch in ["386", "amd64p32"] {
        let env = fx
            .context
            .environment(&Platform::new("nacl", arch, None))
            .unwrap();
        assert_eq!(env.get("GOARCH"), Some(arch));
        assert_eq!(env.get("GOOS"), Some("nacl"));
        assert_eq!(
            changed_keys(&fx, &env),
            keys(&["GOPATH", "VDLPATH", "GOARCH", "GOOS"])
        );
    }
}

#[test]
fn test_unsupported_platform_leaves_snapshot_untouched() {
    let fx = default_fixture();
    let before = fx.context.env().clone();

    let err = fx
        .context
        .environment(&Platform::new("plan9", "mips", None))
        .unwrap_err();
    assert!(matches!(err, V23Error::UnsupportedPlatform(ref p) if &**p == "mips-plan9"));
    assert_eq!(fx.context.env(), &before);
}

#[test]
fn test_leveldb_flags_on_linux() {
    let fx = default_fixture();
    let leveldb = fx.root.join("third_party/cout/leveldb");
    std::fs::create_dir_all(&leveldb).unwrap();

    let mut env = fx.context.env().clone();
    env.set("CGO_CFLAGS", "-O2");
    let ctx = Context::new(env, fx.context.settings().clone());

    let platform = Platform::new("linux", "arm", Some("v6"));
    if platform.is_host() {
        return;
    }
    let env = ctx.environment(&platform).unwrap();
    assert_eq!(
        env.tokens("CGO_CFLAGS", ' '),
        vec!["-O2".to_string(), format!("-I{}", disp(&leveldb.join("include")))]
    );
    assert_eq!(
        env.tokens("CGO_LDFLAGS", ' '),
        vec![
            format!("-L{}", disp(&leveldb.join("lib"))),
            "-Wl,-rpath".to_string(),
            disp(&leveldb.join("lib")),
        ]
    );
    assert_eq!(env.get("GOARM"), Some("6"));
}

#[test]
fn test_without_leveldb_flags_are_empty() {
    let fx = default_fixture();
    let host = Platform::host();
    if !matches!(host.os.as_str(), "linux" | "darwin") {
        return;
    }
    let env = fx.context.environment(&host).unwrap();
    assert_eq!(env.get("CGO_ENABLED"), Some("1"));
    assert_eq!(env.get("CGO_CFLAGS"), Some(""));
    assert_eq!(env.get("CGO_LDFLAGS"), Some(""));
}

#[test]
fn test_missing_conf_json_is_io_error() {
    let fx = default_fixture();
    std::fs::remove_file(fx.root.join("devtools/data/conf.json")).unwrap();
    let err = fx.context.environment(&Platform::host()).unwrap_err();
    assert!(matches!(err, V23Error::Io(_)));
}

#[test]
fn test_malformed_conf_json_is_parse_error() {
    let fx = fixture("{ not json");
    let err = fx.context.environment(&Platform::host()).unwrap_err();
    assert!(matches!(err, V23Error::Parse(_)));
}

#[test]
fn test_unregistered_tool_is_not_found() {
    let fx = default_fixture();
    let mut settings = fx.context.settings().clone();
    settings.global.tool = "jiri".to_string();
    let ctx = Context::new(fx.context.env().clone(), settings);

    let err = ctx.environment(&Platform::host()).unwrap_err();
    assert!(matches!(err, V23Error::NotFound(_)));
}

#[test]
fn test_absolute_workspace_stays_below_root() {
    let fx = fixture(r#"{"goWorkspaces": ["/abs/ws", "./rel/ws"], "vdlWorkspaces": ["/abs/vdl"]}"#);
    let env = fx
        .context
        .environment(&Platform::new("nacl", "386", None))
        .unwrap();

    assert_eq!(
        env.tokens("GOPATH", ':'),
        vec![
            "/home/me/go".to_string(),
            disp(&fx.root.join("abs/ws")),
            disp(&fx.root.join("rel/ws")),
        ]
    );
    assert_eq!(env.tokens("VDLPATH", ':'), vec![disp(&fx.root.join("abs/vdl"))]);
}

#[test]
fn test_leveldb_stat_failure_is_io_error() {
    let fx = default_fixture();
    std::fs::write(fx.root.join("third_party"), "not a directory").unwrap();

    let platform = Platform::new("linux", "arm", Some("v7"));
    let before = fx.context.env().clone();
    let err = fx.context.environment(&platform).unwrap_err();

    assert!(matches!(err, V23Error::Io(ref e) if matches!(**e, FsError::Stat { .. })));
    assert_eq!(fx.context.env(), &before);
}

#[test]
fn test_darwin_leveldb_flags_skip_rpath() {
    let fx = default_fixture();
    let leveldb = fx.root.join("third_party/cout/leveldb");
    std::fs::create_dir_all(&leveldb).unwrap();

    let root = fx.context.root().unwrap();
    let mut env = Env::new();
    set_syncbase_cgo_env(&mut env, &root, "darwin").unwrap();

    assert_eq!(env.get("CGO_ENABLED"), Some("1"));
    assert_eq!(
        env.get("CGO_CFLAGS").map(str::to_string),
        Some(format!("-I{}", disp(&leveldb.join("include"))))
    );
    assert_eq!(
        env.get("CGO_LDFLAGS").map(str::to_string),
        Some(format!("-L{}", disp(&leveldb.join("lib"))))
    );
}
