// v23env: Vanadium build environment resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |        env / run / paths / manifest
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          context          |
//!              |  input Env + Settings     |
//!              |  environment(platform)    |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!              config       layout   core
//!          settings TOML   Root +   env snapshot
//!          registry        paths    platform
//!          conf.json
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod layout;
pub mod logging;
