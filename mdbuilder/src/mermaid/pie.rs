//! Pie charts

use super::DiagramBody;
use crate::error::BuildError;
use crate::line_feed::LineFeed;
use std::fmt;
use std::io::Write;

const DEFAULT_TEXT_POSITION: f64 = 0.75;

/// Pie chart options
#[derive(Debug, Clone, PartialEq)]
pub struct PieConfig {
    /// Chart title; omitted when `None`
    pub title: Option<String>,
    /// Show the slice values next to the legend
    pub show_data: bool,
    /// Label position from the center (0.0) to the edge (1.0)
    pub text_position: f64,
}

impl Default for PieConfig {
    fn default() -> Self {
        Self {
            title: None,
            show_data: false,
            text_position: DEFAULT_TEXT_POSITION,
        }
    }
}

impl PieConfig {
    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Show slice values
    pub fn with_show_data(mut self, show_data: bool) -> Self {
        self.show_data = show_data;
        self
    }

    /// Set the label position; values outside 0.0..=1.0 fall back to 0.75
    pub fn with_text_position(mut self, position: f64) -> Self {
        self.text_position = position;
        self
    }

    fn effective_text_position(&self) -> f64 {
        if (0.0..=1.0).contains(&self.text_position) {
            self.text_position
        } else {
            DEFAULT_TEXT_POSITION
        }
    }
}

/// Mermaid pie chart builder
pub struct PieChart<W> {
    body: DiagramBody<W>,
}

impl<W: Write> PieChart<W> {
    /// Create a chart using the platform line feed
    pub fn new(dest: W, config: PieConfig) -> Self {
        Self::with_line_feed(dest, config, LineFeed::native())
    }

    /// Create a chart with an explicit line feed
    pub fn with_line_feed(dest: W, config: PieConfig, line_feed: LineFeed) -> Self {
        let mut header = vec![format!(
            "%%{{init: {{\"pie\": {{\"textPosition\": {:.2}}}, \"themeVariables\": {{\"pieOuterStrokeWidth\": \"5px\"}}}} }}%%",
            config.effective_text_position()
        )];
        header.push(if config.show_data {
            "pie showData".to_string()
        } else {
            "pie".to_string()
        });

        let mut body = DiagramBody::new(dest, line_feed, header);
        if let Some(title) = &config.title {
            body.statement(format!("title {}", title));
        }
        Self { body }
    }

    /// Render and write the chart to the destination
    pub fn build(&mut self) -> Result<(), BuildError> {
        let rendered = self.render();
        self.body.write(&rendered)
    }
}

impl<W> PieChart<W> {
    /// Render the chart source
    pub fn render(&self) -> String {
        self.body.render()
    }

    /// Lines appended so far, header included
    pub fn lines(&self) -> &[String] {
        self.body.lines()
    }

    /// `"label" : 42`
    pub fn label_and_int_value(&mut self, label: impl fmt::Display, value: u64) -> &mut Self {
        self.body.statement(format!("\"{}\" : {}", label, value));
        self
    }

    /// `"label" : 42.500000`
    pub fn label_and_float_value(&mut self, label: impl fmt::Display, value: f64) -> &mut Self {
        self.body.statement(format!("\"{}\" : {:.6}", label, value));
        self
    }
}

impl<W> fmt::Display for PieChart<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
