// v23env: Vanadium build environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment snapshot.
//!
//! # Architecture
//!
//! ```text
//! Env (owned BTreeMap<EnvKey, String>)
//!   scalar:  set / get / remove
//!   tokens:  tokens(key, sep) / set_tokens(key, list, sep)
//!            prepend_tokens / append_tokens
//!   output:  to_map / changes_from / apply_to(Command)
//! ```
//!
//! A snapshot is a private value; nothing here touches the process
//! environment.

use super::types::EnvKey;
use std::collections::BTreeMap;
use std::process::Command;

/// A snapshot of environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    vars: BTreeMap<EnvKey, String>,
}

impl Env {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Creates a snapshot from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        vars.into_iter().collect()
    }

    /// Sets a scalar variable, replacing any existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.vars.insert(EnvKey::new(key), value.into());
        self
    }

    /// Gets a variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(&EnvKey::new(key)).map(String::as_str)
    }

    /// Removes a variable.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.vars.remove(&EnvKey::new(key));
        self
    }

    /// Reads `key` as a list of tokens split on `separator`.
    ///
    /// An unset variable reads as an empty list and empty tokens are dropped,
    /// so `"a::b"` yields `["a", "b"]`.
    #[must_use]
    pub fn tokens(&self, key: &str, separator: char) -> Vec<String> {
        self.get(key)
            .map(|value| {
                value
                    .split(separator)
                    .filter(|token| !token.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Writes `tokens` to `key`, joined with `separator`.
    ///
    /// Empty tokens are dropped. An empty list still sets the variable, to
    /// the empty string.
    pub fn set_tokens<I, S>(&mut self, key: impl Into<String>, tokens: I, separator: char) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut joined = String::new();
        for token in tokens {
            let token = token.as_ref();
            if token.is_empty() {
                continue;
            }
            if !joined.is_empty() {
                joined.push(separator);
            }
            joined.push_str(token);
        }
        self.set(key, joined)
    }

    /// Inserts `tokens` ahead of the existing entries of `key`, keeping their order.
    pub fn prepend_tokens<I, S>(&mut self, key: &str, tokens: I, separator: char) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list: Vec<String> = tokens.into_iter().map(Into::into).collect();
        list.extend(self.tokens(key, separator));
        self.set_tokens(key, list, separator)
    }

    /// Adds `tokens` after the existing entries of `key`.
    pub fn append_tokens<I, S>(&mut self, key: &str, tokens: I, separator: char) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = self.tokens(key, separator);
        list.extend(tokens.into_iter().map(Into::into));
        self.set_tokens(key, list, separator)
    }

    /// Returns all variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }

    /// Returns the variables that are new or differ from `base`.
    ///
    /// Variables removed relative to `base` are not reported.
    #[must_use]
    pub fn changes_from(&self, base: &Self) -> BTreeMap<String, String> {
        self.iter()
            .filter(|(k, v)| base.get(k) != Some(*v))
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }

    /// Replaces the environment of `command` with this snapshot.
    pub fn apply_to<'c>(&self, command: &'c mut Command) -> &'c mut Command {
        command.env_clear().envs(self.iter())
    }

    /// Returns an iterator over variables, ordered by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Env {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (EnvKey::new(k), v.into()))
                .collect(),
        }
    }
}
