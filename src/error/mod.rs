// v23env: Vanadium build environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!                 V23Error (~24 bytes)
//!                        |
//!   +--------+--------+--+-----+----------------+
//!   |        |        |        |                |
//!   v        v        v        v                v
//! Config    Io      Parse   NotFound   UnsupportedPlatform
//!  Box      Box      Box      Box           Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Config    EnvNotSet, InvalidValue
//!   Fs        Canonicalize, NotADirectory, Stat, Read
//!   Parse     Json, Platform
//!   NotFound  Tool, Project
//!
//! All variants boxed => V23Error fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`V23Error`].
pub type V23Result<T> = std::result::Result<T, V23Error>;

/// Top-level error type of the resolver.
///
/// Every failure aborts the current resolution and is handed to the caller
/// unchanged; nothing in this crate retries.
#[derive(Debug, Error)]
pub enum V23Error {
    /// A required input is missing or invalid.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Filesystem read, stat or symlink resolution failed.
    #[error("io error: {0}")]
    Io(#[from] Box<FsError>),

    /// Malformed configuration content.
    #[error("parse error: {0}")]
    Parse(#[from] Box<ParseError>),

    /// Referenced tool or project is absent from the registry.
    #[error("not found: {0}")]
    NotFound(#[from] Box<NotFoundError>),

    /// Platform combination outside the supported set.
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(Box<str>),
}

/// Create a [`V23Error::UnsupportedPlatform`] naming the rejected platform.
pub fn unsupported_platform(platform: impl std::fmt::Display) -> V23Error {
    V23Error::UnsupportedPlatform(platform.to_string().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for V23Error {
                fn from(err: $error) -> Self {
                    V23Error::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    FsError => Io,
    ParseError => Parse,
    NotFoundError => NotFound,
}

// --- Config Errors ---

/// Missing or invalid inputs.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The variable designating the root is unset or empty.
    #[error("{var} is not set")]
    EnvNotSet { var: String },

    /// Invalid settings value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Symlink resolution failed.
    #[error("failed to resolve symlinks in '{path}': {source}")]
    Canonicalize {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The root does not designate a directory.
    #[error("not a directory: {0}")]
    NotADirectory(String),

    /// Stat failed for a reason other than absence.
    #[error("failed to stat '{path}': {source}")]
    Stat {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Reading a file failed.
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Parse Errors ---

/// Malformed content.
#[derive(Debug, Error)]
pub enum ParseError {
    /// `conf.json` is not valid JSON or does not match the expected shape.
    #[error("failed to parse '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Platform string does not follow `<arch>[v<N>]-<os>`.
    #[error("invalid platform '{input}': {message}")]
    Platform { input: String, message: String },
}

// --- Registry lookup Errors ---

/// Registry lookup errors.
#[derive(Debug, Error)]
pub enum NotFoundError {
    /// Tool missing from the registry.
    #[error("tool '{0}' not found in the manifest")]
    Tool(String),

    /// Project owning a tool missing from the registry.
    #[error("project '{project}' (owner of tool '{tool}') not found in the manifest")]
    Project { project: String, tool: String },
}
