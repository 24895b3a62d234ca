// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The read, transform, and conditional write sequence of a single run.
use tracing::{debug, info};

use crate::{
    badge::build_badges,
    config::{EventContext, RunConfig},
    encoding,
    error::Error,
    fingerprint::blob_sha,
    github::{ContentApi, FileUpdate},
    readme::insert_badges
};

/// Commit message used when the README is rewritten.
pub const COMMIT_MESSAGE: &str = "chore: add badges :unicorn:";

/// What a run ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The event action was not `closed`; no API call was made.
    Skipped {
        /// The action tag that caused the skip.
        action: String
    },
    /// The rewritten README matches the stored one; nothing was written.
    Unchanged {
        /// Blob identifier of the stored README.
        sha: String
    },
    /// Content changed but the run was a dry run.
    DryRun {
        /// Blob identifier the README would have after the write.
        sha: String
    },
    /// The README was rewritten.
    Updated {
        /// Repository path that was written.
        path:         String,
        /// Blob identifier of the replaced content.
        previous_sha: String,
        /// Blob identifier of the new content.
        sha:          String
    }
}

/// Runs the badge pipeline once.
///
/// Reads the README, inserts the configured badges under its first heading,
/// and writes it back only when the locally computed blob identifier differs
/// from the stored one. The write carries the stored identifier so GitHub
/// rejects it if the README changed in the meantime.
///
/// # Errors
///
/// Propagates [`Error::Network`] from either API call, [`Error::Decode`] for
/// an undecodable README, and [`Error::MissingAnchor`] when the README has
/// no level-one heading. Nothing is written when an error occurs.
pub async fn run_pipeline<C>(
    config: &RunConfig,
    event: &EventContext,
    api: &C
) -> Result<Outcome, Error>
where
    C: ContentApi
{
    if !event.allows_run() {
        let action = event.action.clone().unwrap_or_default();
        info!("event action '{action}' is not 'closed', nothing to do");
        return Ok(Outcome::Skipped {
            action
        });
    }

    let repo = config.repo();
    info!("Reading README of {repo}");
    let remote = api.fetch_readme(repo).await?;
    debug!("README at {} has blob {}", remote.path, remote.sha);

    let current = encoding::decode(&remote.content)?;
    let badges = build_badges(&config.badges, &config.context, config.style);
    let updated = insert_badges(&current, &badges)?;
    let sha = blob_sha(updated.as_bytes());

    if sha == remote.sha {
        info!("README already up to date");
        return Ok(Outcome::Unchanged {
            sha
        });
    }

    if config.dry_run {
        info!("dry run: README at {} would change to blob {sha}", remote.path);
        return Ok(Outcome::DryRun {
            sha
        });
    }

    let update = FileUpdate {
        path:    remote.path,
        message: COMMIT_MESSAGE.to_owned(),
        content: encoding::encode(&updated),
        sha:     remote.sha
    };
    api.write_file(repo, &update).await?;
    info!("Updated {} ({} -> {sha})", update.path, update.sha);

    Ok(Outcome::Updated {
        path: update.path,
        previous_sha: update.sha,
        sha
    })
}
