//! Ordered fragment storage shared by every builder

use crate::error::MarkdownError;
use crate::line_feed::LineFeed;

/// Append-only sequence of text fragments plus the latent error slot
///
/// A fragment may span several lines. Fragments are joined with the line
/// feed only when rendered.
#[derive(Debug, Clone, Default)]
pub(crate) struct FragmentStore {
    fragments: Vec<String>,
    latent: Option<MarkdownError>,
}

impl FragmentStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Store seeded with header lines (used by the diagram builders)
    pub(crate) fn with_fragments<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fragments: fragments.into_iter().map(Into::into).collect(),
            latent: None,
        }
    }

    pub(crate) fn append(&mut self, fragment: impl Into<String>) {
        self.fragments.push(fragment.into());
    }

    pub(crate) fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub(crate) fn render(&self, line_feed: LineFeed) -> String {
        self.fragments.join(line_feed.as_str())
    }

    /// Record a failure; an existing error is wrapped, not replaced
    pub(crate) fn record_error(&mut self, error: MarkdownError) {
        log::debug!("Recording builder error: {}", error);
        self.latent = Some(match self.latent.take() {
            Some(previous) => previous.chain(error),
            None => error,
        });
    }

    pub(crate) fn error(&self) -> Option<&MarkdownError> {
        self.latent.as_ref()
    }
}
