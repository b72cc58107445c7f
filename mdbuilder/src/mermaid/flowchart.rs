//! Flowchart diagrams

use super::DiagramBody;
use crate::error::BuildError;
use crate::line_feed::LineFeed;
use std::fmt;
use std::io::Write;

/// Direction in which the flowchart is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Top to bottom
    #[default]
    TopToBottom,
    /// Top down (same as top to bottom)
    TopDown,
    /// Bottom to top
    BottomToTop,
    /// Right to left
    RightToLeft,
    /// Left to right
    LeftToRight,
}

impl Orientation {
    /// Mermaid keyword for the orientation
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::TopToBottom => "TB",
            Orientation::TopDown => "TD",
            Orientation::BottomToTop => "BT",
            Orientation::RightToLeft => "RL",
            Orientation::LeftToRight => "LR",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flowchart options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowchartConfig {
    /// Title written as front matter; blank titles are omitted
    pub title: Option<String>,
    /// Layout direction
    pub orientation: Orientation,
}

impl FlowchartConfig {
    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the orientation
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }
}

/// Mermaid flowchart builder
pub struct Flowchart<W> {
    body: DiagramBody<W>,
}

impl<W: Write> Flowchart<W> {
    /// Create a flowchart using the platform line feed
    pub fn new(dest: W, config: FlowchartConfig) -> Self {
        Self::with_line_feed(dest, config, LineFeed::native())
    }

    /// Create a flowchart with an explicit line feed
    pub fn with_line_feed(dest: W, config: FlowchartConfig, line_feed: LineFeed) -> Self {
        let mut header = Vec::new();
        if let Some(title) = config.title.as_deref().filter(|t| !t.trim().is_empty()) {
            header.push("---".to_string());
            header.push(format!("title: {}", title));
            header.push("---".to_string());
        }
        header.push(format!("flowchart {}", config.orientation));

        Self {
            body: DiagramBody::new(dest, line_feed, header),
        }
    }

    /// Render and write the flowchart to the destination
    pub fn build(&mut self) -> Result<(), BuildError> {
        let rendered = self.render();
        self.body.write(&rendered)
    }
}

impl<W> Flowchart<W> {
    /// Render the flowchart source
    pub fn render(&self) -> String {
        self.body.render()
    }

    /// Lines appended so far, header included
    pub fn lines(&self) -> &[String] {
        self.body.lines()
    }

    fn push(&mut self, line: String) -> &mut Self {
        self.body.statement(line);
        self
    }

    fn shape(&mut self, name: &str, open: &str, text: impl fmt::Display, close: &str) -> &mut Self {
        self.push(format!("{}{}\"{}\"{}", name, open, text, close))
    }

    /// Node shown with its id
    pub fn node(&mut self, name: &str) -> &mut Self {
        self.push(name.to_string())
    }

    /// Rectangle node with text: `A["text"]`
    pub fn node_with_text(&mut self, name: &str, text: impl fmt::Display) -> &mut Self {
        self.shape(name, "[", text, "]")
    }

    /// Node whose text is rendered as Markdown: ``A["`**bold**`"]``
    pub fn node_with_markdown(&mut self, name: &str, markdown: impl fmt::Display) -> &mut Self {
        self.shape(name, "[", format_args!("`{}`", markdown), "]")
    }

    /// Node whose text keeps its line breaks
    pub fn node_with_new_lines(&mut self, name: &str, text: impl fmt::Display) -> &mut Self {
        self.node_with_markdown(name, text)
    }

    /// `A("text")`
    pub fn round_edges_node(&mut self, name: &str, text: impl fmt::Display) -> &mut Self {
        self.shape(name, "(", text, ")")
    }

    /// `A(["text"])`
    pub fn stadium_node(&mut self, name: &str, text: impl fmt::Display) -> &mut Self {
        self.shape(name, "([", text, "])")
    }

    /// `A[["text"]]`
    pub fn subroutine_node(&mut self, name: &str, text: impl fmt::Display) -> &mut Self {
        self.shape(name, "[[", text, "]]")
    }

    /// `A[("text")]`
    pub fn cylindrical_node(&mut self, name: &str, text: impl fmt::Display) -> &mut Self {
        self.shape(name, "[(", text, ")]")
    }

    /// Database node, drawn as a cylinder
    pub fn database_node(&mut self, name: &str, text: impl fmt::Display) -> &mut Self {
        self.cylindrical_node(name, text)
    }

    /// `A(("text"))`
    pub fn circle_node(&mut self, name: &str, text: impl fmt::Display) -> &mut Self {
        self.shape(name, "((", text, "))")
    }

    /// `A>"text"]`
    pub fn asymmetric_node(&mut self, name: &str, text: impl fmt::Display) -> &mut Self {
        self.shape(name, ">", text, "]")
    }

    /// `A{"text"}`
    pub fn rhombus_node(&mut self, name: &str, text: impl fmt::Display) -> &mut Self {
        self.shape(name, "{", text, "}")
    }

    /// `A{{"text"}}`
    pub fn hexagon_node(&mut self, name: &str, text: impl fmt::Display) -> &mut Self {
        self.shape(name, "{{", text, "}}")
    }

    /// `A[/"text"/]`
    pub fn parallelogram_node(&mut self, name: &str, text: impl fmt::Display) -> &mut Self {
        self.shape(name, "[/", text, "/]")
    }

    /// `A[\"text"\]`
    pub fn parallelogram_alt_node(&mut self, name: &str, text: impl fmt::Display) -> &mut Self {
        self.shape(name, "[\\", text, "\\]")
    }

    /// `A[/"text"\]`
    pub fn trapezoid_node(&mut self, name: &str, text: impl fmt::Display) -> &mut Self {
        self.shape(name, "[/", text, "\\]")
    }

    /// `A[\"text"/]`
    pub fn trapezoid_alt_node(&mut self, name: &str, text: impl fmt::Display) -> &mut Self {
        self.shape(name, "[\\", text, "/]")
    }

    /// `A((("text")))`
    pub fn double_circle_node(&mut self, name: &str, text: impl fmt::Display) -> &mut Self {
        self.shape(name, "(((", text, ")))")
    }

    /// `A-->B`
    pub fn link_with_arrow_head(&mut self, from: &str, to: &str) -> &mut Self {
        self.push(format!("{}-->{}", from, to))
    }

    /// `A-->|"text"|B`
    pub fn link_with_arrow_head_and_text(
        &mut self,
        from: &str,
        to: &str,
        text: impl fmt::Display,
    ) -> &mut Self {
        self.push(format!("{}-->|\"{}\"|{}", from, text, to))
    }

    /// `A --- B`
    pub fn open_link(&mut self, from: &str, to: &str) -> &mut Self {
        self.push(format!("{} --- {}", from, to))
    }

    /// `A---|"text"|B`
    pub fn open_link_with_text(&mut self, from: &str, to: &str, text: impl fmt::Display) -> &mut Self {
        self.push(format!("{}---|\"{}\"|{}", from, text, to))
    }

    /// `A-.->B`
    pub fn dotted_link(&mut self, from: &str, to: &str) -> &mut Self {
        self.push(format!("{}-.->{}", from, to))
    }

    /// `A-. "text" .-> B`
    pub fn dotted_link_with_text(&mut self, from: &str, to: &str, text: impl fmt::Display) -> &mut Self {
        self.push(format!("{}-. \"{}\" .-> {}", from, text, to))
    }

    /// `A ==> B`
    pub fn thick_link(&mut self, from: &str, to: &str) -> &mut Self {
        self.push(format!("{} ==> {}", from, to))
    }

    /// `A == "text" ==> B`
    pub fn thick_link_with_text(&mut self, from: &str, to: &str, text: impl fmt::Display) -> &mut Self {
        self.push(format!("{} == \"{}\" ==> {}", from, text, to))
    }

    /// `A ~~~ B`
    pub fn invisible_link(&mut self, from: &str, to: &str) -> &mut Self {
        self.push(format!("{} ~~~ {}", from, to))
    }
}

impl<W> fmt::Display for Flowchart<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
