// v23env: Vanadium build environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core value types.
//!
//! ```text
//!          core
//!           |
//!     +-----+------+
//!     v            v
//!    env        platform
//!     |            |
//!   Env        Platform, Target
//!   tokens     host_arch/host_os
//! ```

pub mod env;
pub mod platform;
