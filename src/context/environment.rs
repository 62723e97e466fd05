// v23env: Vanadium build environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build environment construction.
//!
//! ```text
//! environment(platform)
//!   env = copy of input snapshot
//!   GOPATH   += <root>/<go workspace>...          (append)
//!   VDLPATH  += <root>/<vdl workspace>...         (append)
//!   darwin|linux: CGO_ENABLED=1, CGO_CFLAGS/LDFLAGS += leveldb (if present)
//!   match platform.target()
//!     Host       -> done
//!     ArmLinux   -> GOARCH GOARM GOOS, PATH = xgcc, go_arm, ...   (prepend)
//!     ArmAndroid -> CGO_ENABLED GOOS GOARCH GOARM, PATH = android go, ...
//!     Nacl       -> GOARCH GOOS
//! ```

use std::path::{Component, Path, PathBuf};

use tracing::{debug, trace};

use super::Context;
use crate::config::workspace::WorkspaceConfig;
use crate::core::env::container::Env;
use crate::core::env::types::{FLAG_SEPARATOR, LIST_SEPARATOR};
use crate::core::platform::{Platform, Target};
use crate::error::V23Result;
use crate::layout::{Root, exists};

impl Context {
    /// Builds the environment for compiling for `platform`.
    ///
    /// The result starts as a copy of the input snapshot; the snapshot held
    /// by the context is left untouched, also on failure.
    ///
    /// # Errors
    ///
    /// - `ConfigError` if the root variable is unset.
    /// - `IOError` if the root, `conf.json` or the leveldb directory cannot
    ///   be accessed.
    /// - `NotFoundError` if the configured tool is not registered.
    /// - `ParseError` if `conf.json` is malformed.
    /// - `UnsupportedPlatform` if `platform` is outside the supported set.
    pub fn environment(&self, platform: &Platform) -> V23Result<Env> {
        let mut env = self.env.clone();
        let root = self.root()?;
        let config = self.load_config()?;

        debug!(root = %root.path().display(), %platform, "building environment");

        set_go_path(&mut env, &root, &config);
        set_vdl_path(&mut env, &root, &config);
        if matches!(platform.os.as_str(), "darwin" | "linux") {
            set_syncbase_cgo_env(&mut env, &root, &platform.os)?;
        }

        match platform.target()? {
            Target::Host => debug!("host platform, no cross-compilation"),
            Target::ArmLinux => set_arm_env(&mut env, &root, platform),
            Target::ArmAndroid => set_android_env(&mut env, &root, platform),
            Target::Nacl => set_nacl_env(&mut env, platform),
        }

        Ok(env)
    }
}

fn set_go_path(env: &mut Env, root: &Root, config: &WorkspaceConfig) {
    append_workspaces(env, "GOPATH", root, config.go_workspaces());
}

fn set_vdl_path(env: &mut Env, root: &Root, config: &WorkspaceConfig) {
    append_workspaces(env, "VDLPATH", root, config.vdl_workspaces());
}

fn append_workspaces(env: &mut Env, key: &str, root: &Root, workspaces: &[String]) {
    let entries = workspaces
        .iter()
        .map(|workspace| path_string(&workspace_dir(root, workspace)));
    env.append_tokens(key, entries, LIST_SEPARATOR);
    trace!(key, value = env.get(key).unwrap_or_default(), "set search path");
}

/// `<root>/<workspace>`, keeping an absolute workspace below the root.
fn workspace_dir(root: &Root, workspace: &str) -> PathBuf {
    let mut dir = root.path().to_path_buf();
    dir.extend(
        Path::new(workspace)
            .components()
            .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_) | Component::CurDir)),
    );
    dir
}

/// Enables cgo and points it at the bundled leveldb, when it is installed.
pub(super) fn set_syncbase_cgo_env(env: &mut Env, root: &Root, os: &str) -> V23Result<()> {
    env.set("CGO_ENABLED", "1");

    let mut cflags = env.tokens("CGO_CFLAGS", FLAG_SEPARATOR);
    let mut ldflags = env.tokens("CGO_LDFLAGS", FLAG_SEPARATOR);

    let dir = root.leveldb_dir();
    if exists(&dir)? {
        let lib = path_string(&dir.join("lib"));
        cflags.push(format!("-I{}", path_string(&dir.join("include"))));
        ldflags.push(format!("-L{lib}"));
        if os == "linux" {
            ldflags.push("-Wl,-rpath".to_string());
            ldflags.push(lib);
        }
        debug!(leveldb = %dir.display(), "added leveldb cgo flags");
    }

    env.set_tokens("CGO_CFLAGS", cflags, FLAG_SEPARATOR);
    env.set_tokens("CGO_LDFLAGS", ldflags, FLAG_SEPARATOR);
    Ok(())
}

fn set_arm_env(env: &mut Env, root: &Root, platform: &Platform) {
    debug!(%platform, "setting up arm/linux cross-compilation");
    env.set("GOARCH", platform.arch.as_str())
        .set("GOARM", platform.goarm())
        .set("GOOS", platform.os.as_str());

    // the cross toolchain has to shadow the host one
    let toolchain = root.arm_toolchain_dirs();
    env.prepend_tokens("PATH", toolchain.iter().map(|dir| path_string(dir)), LIST_SEPARATOR);
}

fn set_android_env(env: &mut Env, root: &Root, platform: &Platform) {
    debug!(%platform, "setting up arm/android cross-compilation");
    env.set("CGO_ENABLED", "1")
        .set("GOOS", platform.os.as_str())
        .set("GOARCH", platform.arch.as_str())
        .set("GOARM", platform.goarm());

    let toolchain = path_string(&root.android_toolchain_dir());
    env.prepend_tokens("PATH", [toolchain], LIST_SEPARATOR);
}

fn set_nacl_env(env: &mut Env, platform: &Platform) {
    debug!(%platform, "setting up nacl cross-compilation");
    env.set("GOARCH", platform.arch.as_str())
        .set("GOOS", platform.os.as_str());
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
