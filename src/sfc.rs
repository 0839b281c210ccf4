//! Style-block detection for single-file components.
//!
//! Component files (e.g. Vue SFCs) embed CSS-like rules between `<style>` and
//! `</style>` markers. Token suggestions are only valid inside that region, so
//! everything here is about deciding where the region is and what CSS property
//! is being authored at the cursor.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// Opening style-block marker. Matched without the closing `>` so that
/// attributes like `lang="scss"` or `scoped` don't matter.
const STYLE_OPEN: &str = "<style";

/// Closing style-block marker.
const STYLE_CLOSE: &str = "</style>";

/// Byte range of the first style block in a component file.
///
/// Only the first occurrence of each marker is considered; multiple or nested
/// style blocks are not handled. Returns None when either marker is missing.
pub fn style_block(source: &str) -> Option<Range<usize>> {
    let start = source.find(STYLE_OPEN)?;
    let end = source.find(STYLE_CLOSE)?;
    Some(start..end)
}

/// Whether a cursor offset falls inside the first style block.
///
/// The bounds are inclusive on both ends: the cursor sitting right on either
/// marker still counts as inside, matching how editors place the caret at the
/// start of `</style>` when typing the last rule.
pub fn in_style_block(source: &str, offset: usize) -> bool {
    match style_block(source) {
        Some(range) => offset >= range.start && offset <= range.end,
        None => false,
    }
}

/// Pattern for a CSS declaration being authored: a property-like name, a
/// colon, and an unterminated value region up to the next semicolon.
static CSS_DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-zA-Z-]+):\s*[^;]*").unwrap());

/// The CSS property being authored on a line, if any.
///
/// Matches the first declaration-like pattern on the line. A line with no
/// `property:` shape yields None, which never matches any policy entry.
pub fn css_property(line: &str) -> Option<&str> {
    CSS_DECLARATION
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Pattern for a design-token reference: `$` followed by an identifier.
static TOKEN_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$[a-zA-Z][a-zA-Z0-9-]*").unwrap());

/// The token reference on a line whose byte range contains `col`.
///
/// `col` is a byte offset relative to the start of the line. The range bounds
/// are inclusive of the position just past the reference, so a cursor at the
/// end of a just-typed token still resolves it.
pub fn token_ref_at(line: &str, col: usize) -> Option<(Range<usize>, &str)> {
    TOKEN_REF
        .find_iter(line)
        .find(|m| col >= m.start() && col <= m.end())
        .map(|m| (m.range(), m.as_str()))
}
