// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Badge markup generation.
//!
//! The module maps requested badge identifiers onto a fixed set of
//! shields.io endpoints and renders each one as an HTML image link. Nothing
//! here touches the network; the output is a plain markup string that the
//! README transformer splices into the first heading.

use std::{borrow::Cow, fmt, str::FromStr};

use tracing::{debug, warn};

use crate::error::Error;

const SHIELDS_BASE: &str = "https://img.shields.io";
const GITHUB_BASE: &str = "https://github.com";
const DEFAULT_BUILD_REF: &str = "HEAD";

/// Owner and repository name of the repository being decorated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoCoordinates {
    /// Account or organization owning the repository.
    pub owner: String,
    /// Repository name without the owner prefix.
    pub name:  String
}

impl RepoCoordinates {
    /// Creates coordinates from already validated parts.
    pub fn new<O, N>(owner: O, name: N) -> Self
    where
        O: Into<String>,
        N: Into<String>
    {
        Self {
            owner: owner.into(),
            name:  name.into()
        }
    }

    /// Parses the `owner/name` form used by `GITHUB_REPOSITORY`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when either part is blank or the value
    /// contains more than one separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use readme_badges::RepoCoordinates;
    ///
    /// let repo = RepoCoordinates::parse("octocat/hello-world",)?;
    /// assert_eq!(repo.owner, "octocat");
    /// assert_eq!(repo.name, "hello-world");
    /// # Ok::<(), readme_badges::Error>(())
    /// ```
    pub fn parse(value: &str) -> Result<Self, Error> {
        let trimmed = value.trim();
        let (owner, name) = trimmed.split_once('/').ok_or_else(|| {
            Error::configuration(format!("repository '{trimmed}' must use the owner/name form"))
        })?;

        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(Error::configuration(format!(
                "repository '{trimmed}' must use the owner/name form"
            )));
        }

        Ok(Self::new(owner, name))
    }
}

impl fmt::Display for RepoCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Everything a badge URL may be parameterized with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeContext {
    /// Repository the badges describe.
    pub repo:       RepoCoordinates,
    /// Commit that triggered the run, used by the build status badge.
    pub commit_sha: Option<String>
}

impl BadgeContext {
    /// Creates a context without commit information.
    pub fn new(repo: RepoCoordinates) -> Self {
        Self {
            repo,
            commit_sha: None
        }
    }

    /// Attaches the commit identifier reported by the event context.
    pub fn with_commit(mut self, sha: Option<String>) -> Self {
        self.commit_sha = sha.filter(|value| !value.trim().is_empty());
        self
    }
}

/// Rendering style applied uniformly to every badge of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BadgeStyle {
    /// Default shields.io look.
    #[default]
    Flat,
    /// Flat badge without rounded corners.
    FlatSquare,
    /// Glossy gradient badge.
    Plastic,
    /// Large uppercase badge.
    ForTheBadge,
    /// GitHub social button look.
    Social
}

impl BadgeStyle {
    /// Query value understood by shields.io.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::FlatSquare => "flat-square",
            Self::Plastic => "plastic",
            Self::ForTheBadge => "for-the-badge",
            Self::Social => "social"
        }
    }
}

impl FromStr for BadgeStyle {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize_token(value).as_str() {
            "" | "flat" => Ok(Self::Flat),
            "flat-square" => Ok(Self::FlatSquare),
            "plastic" => Ok(Self::Plastic),
            "for-the-badge" => Ok(Self::ForTheBadge),
            "social" => Ok(Self::Social),
            other => Err(Error::configuration(format!(
                "unsupported badge style '{other}', expected one of flat, flat-square, plastic, for-the-badge, social"
            )))
        }
    }
}

impl fmt::Display for BadgeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed set of badges the action knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeKind {
    /// Check-run status of the triggering commit.
    Build,
    /// Open issue count.
    Issues,
    /// Fork count.
    Forks,
    /// Star count.
    Stars,
    /// Detected license.
    License,
    /// Latest release version.
    Release,
    /// Total release asset downloads.
    Downloads,
    /// Date of the last commit.
    LastCommit,
    /// Contributor count.
    Contributors,
    /// Open pull request count.
    PullRequests,
    /// Repository size.
    RepoSize,
    /// Most used language.
    TopLanguage
}

impl BadgeKind {
    /// Resolves a user supplied identifier, returning `None` when unknown.
    ///
    /// Matching ignores case and treats `_` and `-` alike.
    ///
    /// # Examples
    ///
    /// ```
    /// use readme_badges::BadgeKind;
    ///
    /// assert_eq!(BadgeKind::from_identifier("Last_Commit"), Some(BadgeKind::LastCommit));
    /// assert_eq!(BadgeKind::from_identifier("coverage"), None);
    /// ```
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        let kind = match normalize_token(identifier).as_str() {
            "build" | "build-status" => Self::Build,
            "issues" => Self::Issues,
            "forks" => Self::Forks,
            "stars" => Self::Stars,
            "license" => Self::License,
            "release" | "version" => Self::Release,
            "downloads" => Self::Downloads,
            "last-commit" => Self::LastCommit,
            "contributors" => Self::Contributors,
            "pull-requests" | "prs" => Self::PullRequests,
            "repo-size" | "size" => Self::RepoSize,
            "top-language" | "language" => Self::TopLanguage,
            _ => return None
        };
        Some(kind)
    }

    fn alt_text(self) -> &'static str {
        match self {
            Self::Build => "Build status",
            Self::Issues => "GitHub issues",
            Self::Forks => "GitHub forks",
            Self::Stars => "GitHub stars",
            Self::License => "License",
            Self::Release => "Latest release",
            Self::Downloads => "Downloads",
            Self::LastCommit => "Last commit",
            Self::Contributors => "Contributors",
            Self::PullRequests => "Pull requests",
            Self::RepoSize => "Repository size",
            Self::TopLanguage => "Top language"
        }
    }

    fn image_url(self, context: &BadgeContext, style: BadgeStyle) -> String {
        let RepoCoordinates {
            owner,
            name
        } = &context.repo;
        let path = match self {
            Self::Build => {
                let reference = context.commit_sha.as_deref().unwrap_or(DEFAULT_BUILD_REF);
                format!("github/checks-status/{owner}/{name}/{reference}")
            }
            Self::Issues => format!("github/issues/{owner}/{name}"),
            Self::Forks => format!("github/forks/{owner}/{name}"),
            Self::Stars => format!("github/stars/{owner}/{name}"),
            Self::License => format!("github/license/{owner}/{name}"),
            Self::Release => format!("github/v/release/{owner}/{name}"),
            Self::Downloads => format!("github/downloads/{owner}/{name}/total"),
            Self::LastCommit => format!("github/last-commit/{owner}/{name}"),
            Self::Contributors => format!("github/contributors/{owner}/{name}"),
            Self::PullRequests => format!("github/issues-pr/{owner}/{name}"),
            Self::RepoSize => format!("github/repo-size/{owner}/{name}"),
            Self::TopLanguage => format!("github/languages/top/{owner}/{name}")
        };
        format!("{SHIELDS_BASE}/{path}?style={style}")
    }

    fn link_url(self, repo: &RepoCoordinates) -> String {
        let suffix = match self {
            Self::Build => "/actions",
            Self::Issues => "/issues",
            Self::Forks => "/network/members",
            Self::Stars => "/stargazers",
            Self::Release | Self::Downloads => "/releases",
            Self::LastCommit => "/commits",
            Self::Contributors => "/graphs/contributors",
            Self::PullRequests => "/pulls",
            Self::License | Self::RepoSize | Self::TopLanguage => ""
        };
        format!("{GITHUB_BASE}/{}/{}{suffix}", repo.owner, repo.name)
    }

    /// Renders the image link fragment for this badge.
    pub fn render(self, context: &BadgeContext, style: BadgeStyle) -> String {
        let link = self.link_url(&context.repo);
        let image = self.image_url(context, style);
        format!(
            "<a href=\"{}\"><img alt=\"{}\" src=\"{}\"></a>",
            escape_attribute(&link),
            escape_attribute(self.alt_text()),
            escape_attribute(&image)
        )
    }
}

/// Builds the badge markup for the requested identifiers.
///
/// Fragments follow the order of `requested` and are separated by a single
/// space. Identifiers without a known mapping are skipped with a warning so a
/// typo in one entry never blocks the others; blank entries are ignored.
///
/// # Examples
///
/// ```
/// use readme_badges::{BadgeContext, BadgeStyle, RepoCoordinates, build_badges};
///
/// let context = BadgeContext::new(RepoCoordinates::new("octocat", "hello-world",),);
/// let markup = build_badges(&["stars", "nope", "forks"], &context, BadgeStyle::FlatSquare,);
/// assert_eq!(markup.matches("<img").count(), 2);
/// assert!(markup.find("github/stars").unwrap() < markup.find("github/forks").unwrap());
///
/// assert!(build_badges::<&str>(&[], &context, BadgeStyle::Flat,).is_empty());
/// ```
pub fn build_badges<S>(requested: &[S], context: &BadgeContext, style: BadgeStyle) -> String
where
    S: AsRef<str>
{
    let mut fragments = Vec::with_capacity(requested.len());

    for identifier in requested {
        let identifier = identifier.as_ref().trim();
        if identifier.is_empty() {
            continue;
        }

        match BadgeKind::from_identifier(identifier) {
            Some(kind) => fragments.push(kind.render(context, style)),
            None => warn!("skipping unknown badge identifier '{identifier}'")
        }
    }

    debug!("built {} badge fragments for {}", fragments.len(), context.repo);
    fragments.join(" ")
}

/// Splits the raw `badges` action input into identifiers.
///
/// Entries may be separated by commas, whitespace, or newlines (the latter
/// is what multi-line YAML inputs produce).
///
/// # Examples
///
/// ```
/// use readme_badges::parse_badge_list;
///
/// assert_eq!(parse_badge_list("stars, forks\nlicense"), vec!["stars", "forks", "license"]);
/// ```
pub fn parse_badge_list(raw: &str) -> Vec<String> {
    raw.split(|character: char| character == ',' || character.is_whitespace())
        .filter(|entry| !entry.is_empty())
        .map(str::to_owned)
        .collect()
}

fn normalize_token(value: &str) -> String {
    value.trim().to_ascii_lowercase().replace('_', "-")
}

fn escape_attribute(value: &str) -> Cow<'_, str> {
    if value
        .chars()
        .any(|character| matches!(character, '&' | '<' | '>' | '\"' | '\''))
    {
        let mut escaped = String::with_capacity(value.len());
        for character in value.chars() {
            match character {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '\"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#x27;"),
                other => escaped.push(other)
            }
        }
        Cow::Owned(escaped)
    } else {
        Cow::Borrowed(value)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const KNOWN: &[&str] = &[
        "build",
        "issues",
        "forks",
        "stars",
        "license",
        "release",
        "downloads",
        "last-commit",
        "contributors",
        "pull-requests",
        "repo-size",
        "top-language"
    ];

    fn sample_context() -> BadgeContext {
        BadgeContext::new(RepoCoordinates::new("octocat", "hello-world"))
    }

    fn image_sources(markup: &str) -> Vec<String> {
        markup
            .split("src=\"")
            .skip(1)
            .map(|rest| rest.split('"').next().unwrap_or_default().to_owned())
            .collect()
    }

    #[test]
    fn empty_request_yields_empty_markup() {
        let markup = build_badges::<&str>(&[], &sample_context(), BadgeStyle::Flat);
        assert_eq!(markup, "");
    }

    #[test]
    fn single_badge_renders_image_link() {
        let markup = build_badges(&["stars"], &sample_context(), BadgeStyle::Flat);
        assert_eq!(
            markup,
            "<a href=\"https://github.com/octocat/hello-world/stargazers\"><img alt=\"GitHub stars\" src=\"https://img.shields.io/github/stars/octocat/hello-world?style=flat\"></a>"
        );
    }

    #[test]
    fn fragments_are_space_separated_in_request_order() {
        let markup = build_badges(&["license", "issues"], &sample_context(), BadgeStyle::Flat);
        let sources = image_sources(&markup);
        assert_eq!(sources.len(), 2);
        assert!(sources[0].contains("/github/license/"));
        assert!(sources[1].contains("/github/issues/"));
        assert!(markup.contains("</a> <a "));
    }

    #[test]
    fn unknown_identifier_is_skipped() {
        let markup = build_badges(
            &["forks", "coverage", "stars"],
            &sample_context(),
            BadgeStyle::Plastic
        );
        let sources = image_sources(&markup);
        assert_eq!(sources.len(), 2);
        assert!(sources[0].contains("/github/forks/"));
        assert!(sources[1].contains("/github/stars/"));
        assert!(!markup.contains("coverage"));
    }

    #[test]
    fn blank_identifiers_are_ignored() {
        let markup = build_badges(&["", "  ", "stars"], &sample_context(), BadgeStyle::Flat);
        assert_eq!(image_sources(&markup).len(), 1);
    }

    #[test]
    fn style_is_applied_to_every_badge() {
        let markup = build_badges(KNOWN, &sample_context(), BadgeStyle::ForTheBadge);
        let sources = image_sources(&markup);
        assert_eq!(sources.len(), KNOWN.len());
        assert!(sources.iter().all(|source| source.ends_with("?style=for-the-badge")));
    }

    #[test]
    fn build_badge_uses_commit_when_available() {
        let context = sample_context().with_commit(Some("abc123".to_owned()));
        let markup = build_badges(&["build-status"], &context, BadgeStyle::Flat);
        assert!(markup.contains("github/checks-status/octocat/hello-world/abc123"));

        let markup = build_badges(&["build"], &sample_context(), BadgeStyle::Flat);
        assert!(markup.contains("github/checks-status/octocat/hello-world/HEAD"));
    }

    #[test]
    fn blank_commit_is_treated_as_missing() {
        let context = sample_context().with_commit(Some("  ".to_owned()));
        assert_eq!(context.commit_sha, None);
    }

    #[test]
    fn identifiers_accept_aliases_and_case() {
        assert_eq!(BadgeKind::from_identifier("VERSION"), Some(BadgeKind::Release));
        assert_eq!(BadgeKind::from_identifier("prs"), Some(BadgeKind::PullRequests));
        assert_eq!(BadgeKind::from_identifier("repo_size"), Some(BadgeKind::RepoSize));
        assert_eq!(BadgeKind::from_identifier(" language "), Some(BadgeKind::TopLanguage));
        assert_eq!(BadgeKind::from_identifier("unknown"), None);
    }

    #[test]
    fn dynamic_values_are_escaped() {
        let context = BadgeContext::new(RepoCoordinates::new("a\"b", "c<d"));
        let markup = build_badges(&["issues"], &context, BadgeStyle::Flat);
        assert!(markup.contains("a&quot;b"));
        assert!(markup.contains("c&lt;d"));
        assert!(!markup.contains("a\"b"));
    }

    #[test]
    fn escape_attribute_returns_borrowed_when_no_escaping_needed() {
        match escape_attribute("plain text") {
            Cow::Borrowed(value) => assert_eq!(value, "plain text"),
            Cow::Owned(_) => panic!("expected borrowed variant")
        }
    }

    #[test]
    fn badge_style_parses_known_tokens() {
        assert_eq!("flat".parse::<BadgeStyle>().expect("flat"), BadgeStyle::Flat);
        assert_eq!("".parse::<BadgeStyle>().expect("empty"), BadgeStyle::Flat);
        assert_eq!(
            "Flat_Square".parse::<BadgeStyle>().expect("flat-square"),
            BadgeStyle::FlatSquare
        );
        assert_eq!(
            "for-the-badge".parse::<BadgeStyle>().expect("for-the-badge"),
            BadgeStyle::ForTheBadge
        );
        assert_eq!("social".parse::<BadgeStyle>().expect("social"), BadgeStyle::Social);
    }

    #[test]
    fn badge_style_rejects_unknown_token() {
        let error = "shiny".parse::<BadgeStyle>().expect_err("expected style error");
        match error {
            Error::Configuration {
                message
            } => assert!(message.contains("shiny")),
            other => panic!("unexpected error variant: {other:?}")
        }
    }

    #[test]
    fn repo_coordinates_parse_rejects_malformed_values() {
        for value in ["", "owner", "/repo", "owner/", "a/b/c"] {
            let error = RepoCoordinates::parse(value).expect_err("expected parse failure");
            assert!(matches!(error, Error::Configuration { .. }), "value: {value}");
        }
    }

    #[test]
    fn repo_coordinates_display_round_trips() {
        let repo = RepoCoordinates::parse(" octocat/hello-world ").expect("valid repository");
        assert_eq!(repo.to_string(), "octocat/hello-world");
    }

    #[test]
    fn parse_badge_list_splits_on_commas_and_whitespace() {
        assert_eq!(
            parse_badge_list(" stars,forks ,, license\n\tissues "),
            vec!["stars", "forks", "license", "issues"]
        );
        assert!(parse_badge_list(" , \n").is_empty());
    }

    proptest! {
        #[test]
        fn fragment_order_matches_request_order(
            picks in proptest::collection::vec(0..KNOWN.len(), 1..8)
        ) {
            let requested: Vec<&str> = picks.iter().map(|index| KNOWN[*index]).collect();
            let markup = build_badges(&requested, &sample_context(), BadgeStyle::Flat);
            let sources = image_sources(&markup);

            prop_assert_eq!(sources.len(), requested.len());
            for (identifier, source) in requested.iter().zip(&sources) {
                let kind = BadgeKind::from_identifier(identifier).expect("known identifier");
                prop_assert_eq!(source, &kind.image_url(&sample_context(), BadgeStyle::Flat));
            }
        }

        #[test]
        fn unknown_identifiers_drop_out_preserving_order(
            picks in proptest::collection::vec(0..KNOWN.len(), 0..6),
            unknown_at in 0usize..6
        ) {
            let known: Vec<&str> = picks.iter().map(|index| KNOWN[*index]).collect();
            let mut requested = known.clone();
            requested.insert(unknown_at.min(requested.len()), "not-a-badge");

            let with_unknown = build_badges(&requested, &sample_context(), BadgeStyle::Flat);
            let without = build_badges(&known, &sample_context(), BadgeStyle::Flat);
            prop_assert_eq!(with_unknown, without);
        }
    }
}
