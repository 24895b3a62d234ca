// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Content fingerprints compatible with the GitHub contents API.
//!
//! GitHub reports the git blob identifier of a file as its `sha`. Computing
//! the same identifier locally tells whether a rewritten README differs from
//! the stored one without asking the API.
use sha1::{Digest, Sha1};

/// Returns the lower-case hex git blob identifier of `content`.
///
/// The identifier is the SHA-1 of `blob <len>\0` followed by the bytes.
///
/// # Examples
///
/// ```
/// use readme_badges::blob_sha;
///
/// assert_eq!(blob_sha(b""), "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391");
/// ```
pub fn blob_sha(content: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(format!("blob {}\0", content.len()).as_bytes());
    hasher.update(content);
    hex::encode(hasher.finalize())
}
