//! Table of contents planning and placeholder resolution
//!
//! Planning a table of contents inserts a pair of sentinel markers into the
//! document. The entries are only derived at render time, from every
//! heading recorded on the document, and spliced in between the markers.

use crate::error::MarkdownError;
use crate::line_feed::LineFeed;
use itertools::Itertools;

/// Marker placed before the table of contents
pub const TOC_MARKER_BEGIN: &str = "<!-- BEGIN_TOC -->";

/// Marker placed after the table of contents
pub const TOC_MARKER_END: &str = "<!-- END_TOC -->";

/// Shallowest heading depth (H1)
pub(crate) const MIN_DEPTH: u8 = 1;

/// Deepest heading depth (H6)
pub(crate) const MAX_DEPTH: u8 = 6;

/// A heading recorded on a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderEvent {
    /// Heading level, 1 for H1 through 6 for H6
    pub depth: u8,
    /// Heading text as passed by the caller
    pub label: String,
}

/// Inclusive range of heading depths listed in a table of contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TocRange {
    min: u8,
    max: u8,
}

impl TocRange {
    /// Validate a depth range
    ///
    /// Depth bounds are checked before the ordering of the range.
    pub fn new(min: u8, max: u8) -> Result<Self, MarkdownError> {
        check_depth("min_depth", min)?;
        check_depth("max_depth", max)?;
        if min > max {
            return Err(MarkdownError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Shallowest depth included
    pub fn min(self) -> u8 {
        self.min
    }

    /// Deepest depth included
    pub fn max(self) -> u8 {
        self.max
    }

    /// Check whether `depth` falls inside the range
    pub fn contains(self, depth: u8) -> bool {
        (self.min..=self.max).contains(&depth)
    }
}

/// Reject depths outside 1..=6
pub(crate) fn check_depth(name: &'static str, depth: u8) -> Result<u8, MarkdownError> {
    if (MIN_DEPTH..=MAX_DEPTH).contains(&depth) {
        Ok(depth)
    } else {
        Err(MarkdownError::InvalidDepth { name, depth })
    }
}

/// GitHub style anchor for a heading label
///
/// The label is lower-cased, spaces become hyphens, and then everything
/// except `a-z`, `0-9` and `-` is dropped. Punctuation between two spaces
/// therefore leaves a double hyphen: `"API & SDK"` gives `"api--sdk"`.
pub fn anchor(label: &str) -> String {
    label
        .to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// One list line per heading inside `range`, in document order
pub(crate) fn toc_lines(headers: &[HeaderEvent], range: TocRange) -> Vec<String> {
    headers
        .iter()
        .filter(|h| range.contains(h.depth))
        .map(|h| {
            let indent = "  ".repeat(usize::from(h.depth - range.min));
            format!("{}- [{}](#{})", indent, h.label, anchor(&h.label))
        })
        .collect()
}

/// Splice the table of contents between the markers of a rendered draft
///
/// Only the first adjacent marker pair is replaced. When no heading falls
/// inside the range the draft is returned untouched, leaving the markers
/// next to each other.
pub(crate) fn resolve(
    draft: String,
    headers: &[HeaderEvent],
    range: TocRange,
    line_feed: LineFeed,
) -> String {
    let lines = toc_lines(headers, range);
    if lines.is_empty() {
        return draft;
    }

    let lf = line_feed.as_str();
    let body = lines.iter().join(lf);
    let placeholder = format!("{}{}{}", TOC_MARKER_BEGIN, lf, TOC_MARKER_END);
    let replacement = format!("{}{}{}{}{}", TOC_MARKER_BEGIN, lf, body, lf, TOC_MARKER_END);

    draft.replacen(&placeholder, &replacement, 1)
}
