// v23env: Vanadium build environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for environment variable management.
//!
//! ```text
//! EnvKey: case-insensitive on Windows (PATH == Path), exact elsewhere
//! LIST_SEPARATOR: ':' on Unix, ';' on Windows (PATH, GOPATH, VDLPATH)
//! FLAG_SEPARATOR: ' ' (CGO_CFLAGS, CGO_LDFLAGS)
//! ```

/// Separator of path-like token lists.
///
/// Follows the host, so a Windows host joins `PATH` with `;`. Every cgo and
/// cross-compilation target runs on a `:` host.
pub const LIST_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

/// Separator of compiler/linker flag lists.
pub const FLAG_SEPARATOR: char = ' ';

/// An environment variable key, compared case-insensitively on Windows only.
#[derive(Debug, Clone, Eq)]
pub(super) struct EnvKey(String);

impl EnvKey {
    pub(super) fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub(super) fn as_str(&self) -> &str {
        &self.0
    }

    fn folded(&self) -> std::borrow::Cow<'_, str> {
        if cfg!(windows) {
            std::borrow::Cow::Owned(self.0.to_ascii_lowercase())
        } else {
            std::borrow::Cow::Borrowed(&self.0)
        }
    }
}

impl PartialEq for EnvKey {
    fn eq(&self, other: &Self) -> bool {
        self.folded() == other.folded()
    }
}

impl std::hash::Hash for EnvKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.folded().hash(state);
    }
}

impl PartialOrd for EnvKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EnvKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.folded().cmp(&other.folded())
    }
}
