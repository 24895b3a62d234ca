// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Inserts status badges under the first heading of a repository README.
//!
//! The library is the engine of a GitHub Action that runs when a pull request
//! is closed: it fetches the README through the contents API, splices a row
//! of shields.io badges into the first level-one heading, and commits the
//! result only when the rendered content differs from what is stored. All
//! public APIs document their error semantics so the binary can report
//! failures to the Actions runner verbatim.

pub mod actions;
mod badge;
mod config;
mod encoding;
mod error;
mod fingerprint;
mod github;
mod pipeline;
mod readme;

pub use badge::{BadgeContext, BadgeKind, BadgeStyle, RepoCoordinates, build_badges, parse_badge_list};
pub use config::{ActionInputs, CLOSED_ACTION, EventContext, RunConfig};
pub use encoding::{decode as decode_content, encode as encode_content};
pub use error::{Error, event_error};
pub use fingerprint::blob_sha;
pub use github::{ContentApi, FileUpdate, OctocrabContentApi, RemoteReadme};
pub use pipeline::{COMMIT_MESSAGE, Outcome, run_pipeline};
pub use readme::{insert_badges, markdown_options};
