// v23env: Vanadium build environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! Env (BTreeMap<String, String> snapshot)
//! Sources: current_env(), Env::from_map(), collect()
//! Ops: set/get, tokens/set_tokens, prepend_tokens/append_tokens
//! ```
//!
//! - **Case-insensitive on Windows**
//! - **Snapshot-local**: the process environment is read once, never written

pub mod container;
pub mod types;


/// Captures the current process environment.
///
/// Variables whose name or value is not valid UTF-8 are skipped.
#[must_use]
pub fn current_env() -> container::Env {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}
