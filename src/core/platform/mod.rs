// v23env: Vanadium build environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build target platforms.
//!
//! ```text
//! "armv7-linux"  --> Platform { arch: "arm", sub_arch: Some("v7"), os: "linux" }
//! "386-nacl"     --> Platform { arch: "386", sub_arch: None,       os: "nacl"  }
//! "" | "host"    --> Platform::host()
//!
//! Platform::target()
//!   host arch + host os   --> Target::Host
//!   arm / linux           --> Target::ArmLinux
//!   arm / android         --> Target::ArmAndroid
//!   386|amd64p32 / nacl   --> Target::Nacl
//!   _                     --> UnsupportedPlatform
//! ```
//!
//! Identifiers follow the Go toolchain (`GOOS`/`GOARCH`) since they end up in
//! those variables verbatim.

use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, V23Error, V23Result, unsupported_platform};

/// A build target: operating system, architecture and optional sub-architecture.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Platform {
    pub os: String,
    pub arch: String,
    /// Architecture revision such as `v7` for ARM.
    pub sub_arch: Option<String>,
}

/// The supported platform combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The machine running the resolver.
    Host,
    /// ARM Linux cross-compilation.
    ArmLinux,
    /// ARM Android cross-compilation.
    ArmAndroid,
    /// Native Client (`386` or `amd64p32`).
    Nacl,
}

impl Platform {
    #[must_use]
    pub fn new(os: impl Into<String>, arch: impl Into<String>, sub_arch: Option<&str>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
            sub_arch: sub_arch.map(str::to_owned),
        }
    }

    /// The platform of the running machine.
    #[must_use]
    pub fn host() -> Self {
        Self::new(host_os(), host_arch(), None)
    }

    /// Returns true if arch and OS match the running machine.
    #[must_use]
    pub fn is_host(&self) -> bool {
        self.arch == host_arch() && self.os == host_os()
    }

    /// Classifies the platform into one of the supported targets.
    ///
    /// # Errors
    ///
    /// Returns [`V23Error::UnsupportedPlatform`] for any other combination.
    pub fn target(&self) -> V23Result<Target> {
        if self.is_host() {
            return Ok(Target::Host);
        }
        match (self.arch.as_str(), self.os.as_str()) {
            ("arm", "linux") => Ok(Target::ArmLinux),
            ("arm", "android") => Ok(Target::ArmAndroid),
            ("386" | "amd64p32", "nacl") => Ok(Target::Nacl),
            _ => Err(unsupported_platform(self)),
        }
    }

    /// Value for `GOARM`: the sub-architecture with one leading `v` removed.
    #[must_use]
    pub fn goarm(&self) -> &str {
        let sub_arch = self.sub_arch.as_deref().unwrap_or_default();
        sub_arch.strip_prefix('v').unwrap_or(sub_arch)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}-{}",
            self.arch,
            self.sub_arch.as_deref().unwrap_or_default(),
            self.os
        )
    }
}

impl FromStr for Platform {
    type Err = V23Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() || input == "host" {
            return Ok(Self::host());
        }

        let malformed = |message: &str| ParseError::Platform {
            input: s.to_string(),
            message: message.to_string(),
        };

        let (arch, os) = input
            .split_once('-')
            .ok_or_else(|| malformed("expected <arch>-<os>"))?;
        if arch.is_empty() || os.is_empty() || os.contains('-') {
            return Err(malformed("expected <arch>-<os>").into());
        }

        // "armv7" carries the ARM revision in the architecture token
        let (arch, sub_arch) = match arch.strip_prefix("arm") {
            Some(rev) if rev.starts_with('v') && rev.len() > 1 => ("arm", Some(rev)),
            _ => (arch, None),
        };

        Ok(Self::new(os, arch, sub_arch))
    }
}

/// Go architecture name of the running machine.
#[must_use]
pub fn host_arch() -> &'static str {
    match std::env::consts::ARCH {
        "x86_64" => "amd64",
        "x86" => "386",
        "aarch64" => "arm64",
        "powerpc64" => "ppc64",
        "loongarch64" => "loong64",
        other => other,
    }
}

/// Go operating system name of the running machine.
#[must_use]
pub fn host_os() -> &'static str {
    match std::env::consts::OS {
        "macos" => "darwin",
        other => other,
    }
}
