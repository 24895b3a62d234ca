// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Splices badge markup into the first level-one README heading.
//!
//! The document is parsed into a comrak AST, the badge markup is appended to
//! the anchor heading as raw inline HTML, and the whole tree is rendered back
//! to CommonMark. A raw HTML `<h1>` block is an anchor too; its literal gets
//! the markup before the closing tag. Re-rendering may normalize unrelated
//! parts of the document (list markers, emphasis delimiters, blank lines, an
//! `<!-- end list -->` comment between a list and a following code block);
//! the meaning is preserved.
use comrak::{
    Arena, Options, format_commonmark,
    nodes::{AstNode, NodeValue},
    parse_document
};
use tracing::debug;

use crate::error::Error;

/// Markdown options used for both parsing and rendering.
///
/// GitHub flavoured extensions are enabled so tables, task lists, and
/// footnotes common in READMEs survive the round trip.
pub fn markdown_options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;
    options
}

/// Inserts `badge_markup` after the text of the first level-one heading.
///
/// The anchor is the first direct child of the document that is either a
/// level-one markdown heading (ATX `#` or setext `===`) or a raw HTML block
/// opening with `<h1` and containing `</h1>`. Section headings and headings
/// nested in block quotes or list items never qualify. A markdown anchor
/// keeps its inline content and gets the markup after a single space; an
/// HTML anchor gets it right before `</h1>`. An empty `badge_markup` leaves
/// the anchor untouched.
///
/// Running the function on its own output appends a second copy of the
/// badges; callers that need idempotence must compare before writing.
///
/// # Errors
///
/// Returns [`Error::MissingAnchor`] when the document has no level-one
/// heading and [`Error::Markdown`] when rendering fails.
///
/// # Example
///
/// ```
/// use readme_badges::insert_badges;
///
/// let updated = insert_badges("# Title\n\nBody text.\n", "<img src=\"b.svg\">",)?;
/// assert!(updated.starts_with("# Title <img src=\"b.svg\">\n"));
///
/// let html = insert_badges("<h1 align=\"center\">Title</h1>\n", "<img src=\"b.svg\">",)?;
/// assert!(html.starts_with("<h1 align=\"center\">Title <img src=\"b.svg\"></h1>"));
/// # Ok::<(), readme_badges::Error>(())
/// ```
pub fn insert_badges(markdown: &str, badge_markup: &str) -> Result<String, Error> {
    let options = markdown_options();
    let arena = Arena::new();
    let root = parse_document(&arena, markdown, &options);

    let anchor = find_anchor(root).ok_or(Error::MissingAnchor)?;
    let addition = format!(" {badge_markup}");

    if badge_markup.is_empty() {
        debug!("no badge markup to insert, heading left untouched");
    } else if let NodeValue::HtmlBlock(block) = &mut anchor.data.borrow_mut().value {
        if let Some(close) = html_heading_close(&block.literal) {
            block.literal.insert_str(close, &addition);
        }
    } else {
        let badges = arena.alloc(NodeValue::HtmlInline(addition).into());
        anchor.append(badges);
    }

    let mut rendered = String::with_capacity(markdown.len() + badge_markup.len() + 1);
    format_commonmark(root, &options, &mut rendered).map_err(|err| Error::Markdown {
        message: err.to_string()
    })?;

    Ok(rendered)
}

fn find_anchor<'a>(root: &'a AstNode<'a>) -> Option<&'a AstNode<'a>> {
    root.children().find(|node| match &node.data.borrow().value {
        NodeValue::Heading(heading) => heading.level == 1,
        NodeValue::HtmlBlock(block) => html_heading_close(&block.literal).is_some(),
        _ => false
    })
}

/// Byte offset of `</h1>` in a raw HTML block that opens with an `<h1>` tag.
fn html_heading_close(literal: &str) -> Option<usize> {
    let opening = literal.trim_start();
    let tag = opening.get(..3)?;
    let after_tag = opening[3..].chars().next()?;
    if !tag.eq_ignore_ascii_case("<h1") || !(after_tag == '>' || after_tag.is_whitespace()) {
        return None;
    }

    literal.to_ascii_lowercase().find("</h1>")
}
