// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// GitHub contents API access for the README.
///
/// Provides the [`ContentApi`] seam used by the pipeline and its
/// octocrab-backed implementation.
use std::future::Future;

use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{badge::RepoCoordinates, error::Error};

/// README metadata and body as returned by `GET /repos/{owner}/{repo}/readme`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize,)]
pub struct RemoteReadme
{
    /// Git blob identifier of the stored file.
    pub sha:     String,
    /// Repository path of the README, e.g. `README.md` or `docs/README.md`.
    pub path:    String,
    /// Base64 body, possibly wrapped with newlines.
    #[serde(default)]
    pub content: String,
}

/// Body of `PUT /repos/{owner}/{repo}/contents/{path}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct FileUpdate
{
    /// Target path, taken from the README that was read.
    #[serde(skip)]
    pub path:    String,
    /// Commit message.
    pub message: String,
    /// Base64 encoded new content.
    pub content: String,
    /// Blob identifier of the content being replaced.
    pub sha:     String,
}

/// Read and write access to repository files.
pub trait ContentApi
{
    /// Fetches the repository README.
    fn fetch_readme(
        &self,
        repo: &RepoCoordinates,
    ) -> impl Future<Output = Result<RemoteReadme, Error,>,> + Send;

    /// Replaces a file, guarded by the blob identifier in `update.sha`.
    fn write_file(
        &self,
        repo: &RepoCoordinates,
        update: &FileUpdate,
    ) -> impl Future<Output = Result<(), Error,>,> + Send;
}

/// [`ContentApi`] backed by an authenticated octocrab client.
#[derive(Debug, Clone,)]
pub struct OctocrabContentApi
{
    client: Octocrab,
}

impl OctocrabContentApi
{
    /// Builds a client authenticated with `token`.
    ///
    /// # Arguments
    ///
    /// * `token` - Token used for every request
    /// * `api_url` - Optional API base URL overriding `https://api.github.com`
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when the base URL is invalid and
    /// [`Error::Network`] when the client cannot be constructed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use readme_badges::{ContentApi, OctocrabContentApi, RepoCoordinates};
    ///
    /// # async fn example() -> Result<(), readme_badges::Error> {
    /// let api = OctocrabContentApi::new("ghp_token", None,)?;
    /// let readme = api.fetch_readme(&RepoCoordinates::new("octocat", "hello-world",),).await?;
    /// println!("{} at {}", readme.path, readme.sha);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(token: &str, api_url: Option<&str,>,) -> Result<Self, Error,>
    {
        let mut builder = Octocrab::builder().personal_token(token.to_owned(),);

        if let Some(url,) = api_url {
            builder = builder.base_uri(url,).map_err(|e| {
                Error::configuration(format!("invalid GitHub API URL '{url}': {e}"),)
            },)?;
        }

        let client = builder
            .build()
            .map_err(|e| Error::network(format!("failed to initialize GitHub client: {e}"),),)?;

        Ok(Self {
            client,
        },)
    }
}

impl ContentApi for OctocrabContentApi
{
    async fn fetch_readme(&self, repo: &RepoCoordinates,) -> Result<RemoteReadme, Error,>
    {
        let route = readme_route(repo,);
        debug!("GET {}", route);

        self.client
            .get(&route, None::<&(),>,)
            .await
            .map_err(|e| Error::network(format!("GET {route}: {e}"),),)
    }

    async fn write_file(&self, repo: &RepoCoordinates, update: &FileUpdate,) -> Result<(), Error,>
    {
        let route = contents_route(repo, &update.path,);
        debug!("PUT {}", route);

        let _: serde_json::Value = self
            .client
            .put(&route, Some(update,),)
            .await
            .map_err(|e| Error::network(format!("PUT {route}: {e}"),),)?;

        Ok((),)
    }
}

fn readme_route(repo: &RepoCoordinates,) -> String
{
    format!("/repos/{}/{}/readme", repo.owner, repo.name)
}

fn contents_route(repo: &RepoCoordinates, path: &str,) -> String
{
    format!("/repos/{}/{}/contents/{}", repo.owner, repo.name, path.trim_start_matches('/'))
}
