#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the badge action crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free while still
//! exposing a thoroughly documented error surface for library consumers.

use std::path::{Path, PathBuf};

/// Unified error type returned by the badge pipeline and CLI.
///
/// Every failure bubbles up to the binary entry point, which reports the
/// [`Display`](std::fmt::Display) form to the Actions runner and exits with a
/// non-zero status. Unknown badge identifiers are deliberately absent: they
/// are skipped with a warning instead of failing the run.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Action inputs or repository coordinates are missing or malformed.
    #[error("invalid configuration: {message}")]
    Configuration {
        /// Human readable message describing the configuration problem.
        message: String
    },
    /// The README has no level-one heading to anchor the badges to.
    #[error("README has no level-one heading to insert badges under")]
    MissingAnchor,
    /// A GitHub API request failed.
    #[error("GitHub API request failed: {message}")]
    Network {
        /// Human readable message naming the failed route and cause.
        message: String
    },
    /// The README body could not be decoded from base64 or is not UTF-8.
    #[error("failed to decode README content: {message}")]
    Decode {
        /// Human readable message describing the decoding failure.
        message: String
    },
    /// The event payload file could not be read or parsed.
    #[error("failed to load event payload from {path:?}: {message}")]
    Event {
        /// Location of the event payload file.
        path:    PathBuf,
        /// Human readable message describing the failure.
        message: String
    },
    /// The transformed document could not be serialized back to markdown.
    #[error("failed to render markdown: {message}")]
    Markdown {
        /// Human readable message describing the rendering failure.
        message: String
    }
}

impl Error {
    /// Constructs a configuration error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the configuration failure.
    pub fn configuration<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Configuration {
            message: message.into()
        }
    }

    /// Constructs a network error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the failed request.
    pub fn network<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Network {
            message: message.into()
        }
    }

    /// Constructs a decode error from the provided displayable value.
    pub fn decode<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Decode {
            message: message.into()
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// This method is primarily intended for CLI contexts where the variant
    /// name does not add value to end users. The returned string matches the
    /// [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

/// Creates an [`Error::Event`] variant capturing the failing path and cause.
///
/// # Parameters
///
/// * `path` - Location of the event payload that triggered the error.
/// * `message` - Description of the read or parse failure.
pub fn event_error<M>(path: &Path, message: M) -> Error
where
    M: Into<String>
{
    Error::Event {
        path:    path.to_path_buf(),
        message: message.into()
    }
}
