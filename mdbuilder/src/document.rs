//! The Markdown document builder
//!
//! Every builder method appends one or more fragments and returns the
//! builder so calls can be chained. Failures (a malformed table, a second
//! table of contents, an out of range depth) are recorded on the document
//! instead of interrupting the chain; they surface through
//! [`Markdown::error`] and [`Markdown::build`].

use crate::error::{BuildError, MarkdownError};
use crate::fragments::FragmentStore;
use crate::line_feed::LineFeed;
use crate::sink;
use crate::syntax::SyntaxHighlight;
use crate::table::TableSet;
use crate::toc::{self, HeaderEvent, TocRange, TOC_MARKER_BEGIN, TOC_MARKER_END};
use std::fmt;
use std::io::Write;

/// A checkbox list entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckBox {
    /// Whether the box is ticked
    pub checked: bool,
    /// Text after the box
    pub text: String,
}

impl CheckBox {
    /// Create a checkbox entry
    pub fn new(checked: bool, text: impl Into<String>) -> Self {
        Self {
            checked,
            text: text.into(),
        }
    }
}

/// Fluent Markdown builder writing to `W` on [`build`](Markdown::build)
///
/// The builder owns `W`; pass `&mut file` or `&mut Vec<u8>` to keep the
/// destination on the caller side.
pub struct Markdown<W> {
    /// Body fragments and the latent error
    store: FragmentStore,
    /// Output destination for the rendered body
    dest: W,
    /// Separator used to join fragments and inside multi-line fragments
    line_feed: LineFeed,
    /// Every heading added so far, in document order
    headers: Vec<HeaderEvent>,
    /// Depth range of the planned table of contents, once one is placed
    toc: Option<TocRange>,
}

impl<W: Write> Markdown<W> {
    /// Create an empty document using the platform line feed
    pub fn new(dest: W) -> Self {
        Self::with_line_feed(dest, LineFeed::native())
    }

    /// Create an empty document with an explicit line feed
    pub fn with_line_feed(dest: W, line_feed: LineFeed) -> Self {
        Self {
            store: FragmentStore::new(),
            dest,
            line_feed,
            headers: Vec::new(),
            toc: None,
        }
    }

    /// Render the document and write it to the destination
    ///
    /// # Returns
    /// * `Ok(())` - Written, and no error was recorded while building
    /// * `Err(BuildError::Write)` - The destination failed; any recorded error is attached
    /// * `Err(BuildError::Latent)` - Written, but an error was recorded while building
    pub fn build(&mut self) -> Result<(), BuildError> {
        let rendered = self.render();
        sink::write_rendered(&mut self.dest, &rendered, self.store.error())
    }
}

impl<W> Markdown<W> {
    /// Render the document to a string
    ///
    /// Rendering does not modify the document, so repeated calls return the
    /// same text.
    pub fn render(&self) -> String {
        let draft = self.store.render(self.line_feed);
        match self.toc {
            Some(range) if !self.headers.is_empty() => {
                toc::resolve(draft, &self.headers, range, self.line_feed)
            }
            _ => draft,
        }
    }

    /// The error recorded while building, if any
    pub fn error(&self) -> Option<&MarkdownError> {
        self.store.error()
    }

    /// Fragments appended so far
    pub fn fragments(&self) -> &[String] {
        self.store.fragments()
    }

    /// Headings added so far, in document order
    pub fn headings(&self) -> &[HeaderEvent] {
        &self.headers
    }

    /// Depth range of the table of contents, if one was placed
    pub fn toc_range(&self) -> Option<TocRange> {
        self.toc
    }

    /// Line feed used by this document
    pub fn line_feed(&self) -> LineFeed {
        self.line_feed
    }

    /// Append a fragment as is
    pub(crate) fn push(&mut self, fragment: impl Into<String>) -> &mut Self {
        self.store.append(fragment);
        self
    }

    /// Plain text
    pub fn plain_text(&mut self, text: impl fmt::Display) -> &mut Self {
        self.push(text.to_string())
    }

    /// Heading of the given level; records `InvalidDepth` outside 1..=6
    pub fn heading(&mut self, level: u8, text: impl fmt::Display) -> &mut Self {
        match toc::check_depth("heading level", level) {
            Ok(depth) => {
                let label = text.to_string();
                let hashes = "#".repeat(usize::from(depth));
                self.headers.push(HeaderEvent {
                    depth,
                    label: label.clone(),
                });
                self.push(format!("{} {}", hashes, label))
            }
            Err(e) => {
                self.store.record_error(e);
                self
            }
        }
    }

    /// `# text`
    pub fn h1(&mut self, text: impl fmt::Display) -> &mut Self {
        self.heading(1, text)
    }

    /// `## text`
    pub fn h2(&mut self, text: impl fmt::Display) -> &mut Self {
        self.heading(2, text)
    }

    /// `### text`
    pub fn h3(&mut self, text: impl fmt::Display) -> &mut Self {
        self.heading(3, text)
    }

    /// `#### text`
    pub fn h4(&mut self, text: impl fmt::Display) -> &mut Self {
        self.heading(4, text)
    }

    /// `##### text`
    pub fn h5(&mut self, text: impl fmt::Display) -> &mut Self {
        self.heading(5, text)
    }

    /// `###### text`
    pub fn h6(&mut self, text: impl fmt::Display) -> &mut Self {
        self.heading(6, text)
    }

    /// Place a table of contents listing headings from H1 down to `max_depth`
    pub fn table_of_contents(&mut self, max_depth: u8) -> &mut Self {
        self.table_of_contents_with_range(1, max_depth)
    }

    /// Place a table of contents listing headings from `min_depth` to `max_depth`
    ///
    /// The markers are inserted where the call happens; the entries are
    /// filled in at render time from every heading of the document, whether
    /// it was added before or after this call. Only one table of contents
    /// is allowed per document. A rejected call records the error and leaves
    /// the document unchanged.
    pub fn table_of_contents_with_range(&mut self, min_depth: u8, max_depth: u8) -> &mut Self {
        if self.toc.is_some() {
            self.store.record_error(MarkdownError::DuplicateToc);
            return self;
        }

        let range = match TocRange::new(min_depth, max_depth) {
            Ok(range) => range,
            Err(e) => {
                self.store.record_error(e);
                return self;
            }
        };

        log::debug!("Placing table of contents for H{}..=H{}", range.min(), range.max());
        self.toc = Some(range);
        self.push(TOC_MARKER_BEGIN).push(TOC_MARKER_END).push("")
    }

    /// Collapsible `<details>` block
    pub fn details(&mut self, summary: impl fmt::Display, text: impl fmt::Display) -> &mut Self {
        let lf = self.line_feed;
        self.push(format!(
            "<details><summary>{}</summary>{}{}{}</details>",
            summary, lf, text, lf
        ))
    }

    /// One `- item` fragment per item
    pub fn bullet_list<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        for item in items {
            self.push(format!("- {}", item));
        }
        self
    }

    /// One `n. item` fragment per item, numbered from 1
    pub fn ordered_list<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        for (i, item) in items.into_iter().enumerate() {
            self.push(format!("{}. {}", i + 1, item));
        }
        self
    }

    /// Task list with `- [x]` / `- [ ]` entries
    pub fn check_box(&mut self, items: &[CheckBox]) -> &mut Self {
        for item in items {
            let mark = if item.checked { "x" } else { " " };
            self.push(format!("- [{}] {}", mark, item.text));
        }
        self
    }

    /// Quote every line of `text`
    pub fn blockquote(&mut self, text: impl fmt::Display) -> &mut Self {
        let text = text.to_string();
        for line in text.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            self.push(format!("> {}", line));
        }
        self
    }

    /// Fenced code block
    pub fn code_blocks(&mut self, lang: SyntaxHighlight, text: impl fmt::Display) -> &mut Self {
        let lf = self.line_feed;
        self.push(format!("```{}{}{}{}```", lang, lf, text, lf))
    }

    /// `---`
    pub fn horizontal_rule(&mut self) -> &mut Self {
        self.push("---")
    }

    /// Pipe table; records `ColumnMismatch` and appends nothing when a row
    /// does not match the header
    pub fn table(&mut self, set: &TableSet) -> &mut Self {
        if let Err(e) = set.validate_columns() {
            self.store.record_error(e);
            return self;
        }
        match set.render(self.line_feed) {
            Some(table) => self.push(table),
            None => self,
        }
    }

    /// Markdown hard line break (two spaces)
    pub fn lf(&mut self) -> &mut Self {
        self.push("  ")
    }
}

impl<W> fmt::Display for Markdown<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<W> fmt::Debug for Markdown<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Markdown")
            .field("fragments", &self.store.fragments())
            .field("error", &self.store.error())
            .field("headers", &self.headers)
            .field("toc", &self.toc)
            .finish_non_exhaustive()
    }
}
