// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! GitHub Actions workflow commands.
//!
//! The runner scans stdout for `::command::message` lines. Messages must have
//! `%`, `\r`, and `\n` percent-encoded or multi-line text is truncated.
use std::io::{self, Write};

use tracing::warn;

/// Escapes a message for use as workflow command data.
///
/// # Examples
///
/// ```
/// use readme_badges::actions::escape_data;
///
/// assert_eq!(escape_data("50% done\nnext"), "50%25 done%0Anext");
/// ```
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Formats a workflow command line such as `::error::message`.
pub fn command(name: &str, message: &str) -> String {
    format!("::{name}::{}", escape_data(message))
}

/// Marks the step as failed with `message`.
///
/// The caller is expected to exit with a non-zero status afterwards.
pub fn set_failed(message: &str) {
    emit(&command("error", message));
}

/// Adds a notice annotation to the run summary.
pub fn notice(message: &str) {
    emit(&command("notice", message));
}

/// Writes a debug message, shown only when step debug logging is enabled.
pub fn debug(message: &str) {
    emit(&command("debug", message));
}

fn emit(line: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(err) = writeln!(handle, "{line}").and_then(|()| handle.flush()) {
        warn!(error = %err, "failed to write workflow command");
    }
}
