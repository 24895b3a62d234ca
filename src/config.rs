// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Run configuration assembled from action inputs and the event context.
//!
//! The Actions runner exposes `with:` inputs as `INPUT_<NAME>` environment
//! variables (upper-cased, hyphens kept) and the repository context as
//! `GITHUB_*` variables. [`ActionInputs`] reads both through clap so every
//! value can also be supplied as a flag when running outside a workflow.

use std::{
    fs,
    path::{Path, PathBuf}
};

use clap::{ArgAction, Args};
use serde::Deserialize;
use tracing::debug;

use crate::{
    badge::{BadgeContext, BadgeStyle, RepoCoordinates, parse_badge_list},
    error::{self, Error}
};

/// Event action that allows the pipeline to run.
pub const CLOSED_ACTION: &str = "closed";

/// Raw inputs as provided by the workflow or the command line.
#[derive(Debug, Clone, Args)]
pub struct ActionInputs {
    /// Token used to authenticate GitHub API requests.
    #[arg(long = "token", env = "INPUT_GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Badge identifiers separated by commas, spaces, or newlines.
    #[arg(long = "badges", env = "INPUT_BADGES")]
    pub badges: String,

    /// Badge style: flat, flat-square, plastic, for-the-badge, or social.
    #[arg(long = "badge-style", env = "INPUT_BADGE-STYLE", default_value = "flat")]
    pub badge_style: String,

    /// Repository in owner/name form.
    #[arg(long = "repository", env = "GITHUB_REPOSITORY")]
    pub repository: String,

    /// Commit that triggered the workflow.
    #[arg(long = "sha", env = "GITHUB_SHA")]
    pub sha: Option<String>,

    /// Path to the JSON payload of the triggering event.
    #[arg(long = "event-path", env = "GITHUB_EVENT_PATH", value_name = "PATH")]
    pub event_path: Option<PathBuf>,

    /// Base URL of the GitHub REST API.
    #[arg(long = "api-url", env = "GITHUB_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Compute the updated README without committing it.
    #[arg(long = "dry-run", env = "INPUT_DRY-RUN", action = ArgAction::SetTrue)]
    pub dry_run: bool
}

/// Validated configuration for a single pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Credential for API calls.
    pub token:   String,
    /// Requested badge identifiers in display order.
    pub badges:  Vec<String>,
    /// Style applied to every badge.
    pub style:   BadgeStyle,
    /// Repository and commit used to parameterize badges and API routes.
    pub context: BadgeContext,
    /// Alternative API base URL, e.g. for GitHub Enterprise Server.
    pub api_url: Option<String>,
    /// Skip the write even when content changed.
    pub dry_run: bool
}

impl RunConfig {
    /// Validates raw inputs into a run configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when the token or badge list is blank,
    /// the style is unknown, or the repository is not in `owner/name` form.
    ///
    /// # Examples
    ///
    /// ```
    /// use readme_badges::{ActionInputs, BadgeStyle, RunConfig};
    ///
    /// let config = RunConfig::from_inputs(&ActionInputs {
    ///     token:       "ghp_token".to_owned(),
    ///     badges:      "stars, forks".to_owned(),
    ///     badge_style: "flat-square".to_owned(),
    ///     repository:  "octocat/hello-world".to_owned(),
    ///     sha:         None,
    ///     event_path:  None,
    ///     api_url:     None,
    ///     dry_run:     false,
    /// },)?;
    /// assert_eq!(config.badges, vec!["stars", "forks"]);
    /// assert_eq!(config.style, BadgeStyle::FlatSquare);
    /// # Ok::<(), readme_badges::Error>(())
    /// ```
    pub fn from_inputs(inputs: &ActionInputs) -> Result<Self, Error> {
        let token = inputs.token.trim();
        if token.is_empty() {
            return Err(Error::configuration("token input must not be empty"));
        }

        let badges = parse_badge_list(&inputs.badges);
        if badges.is_empty() {
            return Err(Error::configuration(
                "badges input must list at least one badge identifier"
            ));
        }

        let style = inputs.badge_style.parse::<BadgeStyle>()?;
        let repo = RepoCoordinates::parse(&inputs.repository)?;
        let context = BadgeContext::new(repo).with_commit(inputs.sha.clone());

        let api_url = inputs
            .api_url
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_owned);

        Ok(Self {
            token: token.to_owned(),
            badges,
            style,
            context,
            api_url,
            dry_run: inputs.dry_run
        })
    }

    /// Repository the run operates on.
    pub fn repo(&self) -> &RepoCoordinates {
        &self.context.repo
    }
}

/// Facts about the triggering event relevant to the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventContext {
    /// The payload's `action` tag, absent for events without one.
    pub action: Option<String>
}

#[derive(Debug, Deserialize)]
struct EventPayload {
    #[serde(default)]
    action: Option<String>
}

impl EventContext {
    /// Creates a context carrying the given action tag.
    pub fn with_action<A>(action: A) -> Self
    where
        A: Into<String>
    {
        Self {
            action: Some(action.into())
        }
    }

    /// Loads the event context from the payload file, if one is configured.
    ///
    /// A missing path or a payload without an `action` field yields a context
    /// with no action.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Event`] when the file cannot be read or is not a JSON
    /// object.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let Some(path) = path else {
            debug!("no event payload configured");
            return Ok(Self::default());
        };

        let raw = fs::read_to_string(path)
            .map_err(|source| error::event_error(path, source.to_string()))?;
        let payload: EventPayload = serde_json::from_str(&raw)
            .map_err(|source| error::event_error(path, source.to_string()))?;

        debug!("event payload action: {:?}", payload.action);
        Ok(Self {
            action: payload.action
        })
    }

    /// Whether the pipeline should run for this event.
    ///
    /// True when the action is `closed` or absent.
    pub fn allows_run(&self) -> bool {
        self.action
            .as_deref()
            .is_none_or(|action| action == CLOSED_ACTION)
    }
}
