//! Transliteration of a single line of text

use crate::map::MappingTable;
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};
use tracing::trace;

/// A full line of the form `[tag:value]`, as used for LRC metadata (`[ar:...]`, `[ti:...]`)
static RE_TAG_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[[A-Za-z]+:.*\]$").expect("valid regex: RE_TAG_LINE"));

/// Is the line a metadata tag that should be left untouched?
///
/// The whole line needs to be the tag: an opening bracket, one or more ASCII letters, a colon,
/// anything, and a closing bracket. Surrounding whitespace or trailing content after the closing
/// bracket means the line is _not_ a tag. Timestamps like `[00:12.34]` aren't tags either, because
/// the name has to consist of letters.
pub fn is_tag_line(line: &str) -> bool {
    RE_TAG_LINE.is_match(line)
}

/// Transliterate one line using a [`MappingTable`]
///
/// Tag lines (see [`is_tag_line()`]) are returned as-is. Any other line is rewritten character
/// by character: characters with an entry in the table are replaced (possibly by nothing), all
/// others are copied over unchanged.
pub fn transliterate_line<'a>(line: &'a str, table: &MappingTable) -> Cow<'a, str> {
    if is_tag_line(line) {
        trace!(line, "Keeping tag line");
        return Cow::Borrowed(line);
    }

    let mut output = String::with_capacity(line.len() * 2);
    for ch in line.chars() {
        match table.get(ch) {
            Some(replacement) => output.push_str(replacement),
            None => output.push(ch),
        }
    }

    Cow::Owned(output)
}
