// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Base64 helpers for README bodies exchanged with the contents API.
use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::error::Error;

/// Encodes README text as padded standard base64.
pub fn encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decodes a base64 README body into UTF-8 text.
///
/// GitHub wraps encoded file content with newlines, so ASCII whitespace is
/// stripped before decoding.
///
/// # Errors
///
/// Returns [`Error::Decode`] when the input is not valid base64 or the
/// decoded bytes are not UTF-8.
pub fn decode(encoded: &str) -> Result<String, Error> {
    let compact: String = encoded
        .chars()
        .filter(|character| !character.is_ascii_whitespace())
        .collect();

    let bytes = STANDARD
        .decode(compact.as_bytes())
        .map_err(|err| Error::decode(format!("invalid base64: {err}")))?;

    String::from_utf8(bytes).map_err(|err| Error::decode(format!("README is not UTF-8: {err}")))
}
