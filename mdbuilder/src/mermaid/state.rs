//! State diagrams

use super::{DiagramBody, INDENT};
use crate::error::BuildError;
use crate::line_feed::LineFeed;
use std::fmt;
use std::io::Write;

/// Pseudo state used for start and end transitions
const TERMINAL: &str = "[*]";

/// State diagram options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateConfig {
    /// Title written as front matter; blank titles are omitted
    pub title: Option<String>,
}

impl StateConfig {
    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Layout direction of a state diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Left to right
    LeftToRight,
    /// Right to left
    RightToLeft,
    /// Top to bottom
    TopToBottom,
    /// Bottom to top
    BottomToTop,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::LeftToRight => "LR",
            Direction::RightToLeft => "RL",
            Direction::TopToBottom => "TB",
            Direction::BottomToTop => "BT",
        })
    }
}

/// Side of a state a note is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteSide {
    /// `note left of`
    Left,
    /// `note right of`
    Right,
}

impl fmt::Display for NoteSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NoteSide::Left => "left",
            NoteSide::Right => "right",
        })
    }
}

fn state_line(id: &str, description: impl fmt::Display) -> String {
    let description = description.to_string();
    if description.is_empty() {
        id.to_string()
    } else {
        format!("{} : {}", id, description)
    }
}

fn transition_line(from: &str, to: &str, note: Option<String>) -> String {
    match note {
        Some(note) => format!("{} --> {} : {}", from, to, note),
        None => format!("{} --> {}", from, to),
    }
}

/// Body of a composite state, filled in by [`StateDiagram::composite_state`]
///
/// Lines are indented one level deeper than the enclosing diagram.
#[derive(Debug, Default)]
pub struct CompositeState {
    lines: Vec<String>,
}

impl CompositeState {
    fn push(&mut self, line: String) -> &mut Self {
        self.lines.push(format!("{0}{0}{1}", INDENT, line));
        self
    }

    /// State shown with its id
    pub fn state(&mut self, id: &str) -> &mut Self {
        self.push(id.to_string())
    }

    /// `id : description`
    pub fn state_with_description(&mut self, id: &str, description: impl fmt::Display) -> &mut Self {
        self.push(state_line(id, description))
    }

    /// `from --> to`
    pub fn transition(&mut self, from: &str, to: &str) -> &mut Self {
        self.push(transition_line(from, to, None))
    }

    /// `from --> to : note`
    pub fn transition_with_note(&mut self, from: &str, to: &str, note: impl fmt::Display) -> &mut Self {
        self.push(transition_line(from, to, Some(note.to_string())))
    }

    /// `[*] --> to`
    pub fn start_transition(&mut self, to: &str) -> &mut Self {
        self.transition(TERMINAL, to)
    }

    /// `from --> [*]`
    pub fn end_transition(&mut self, from: &str) -> &mut Self {
        self.transition(from, TERMINAL)
    }
}

/// Mermaid state diagram builder (`stateDiagram-v2`)
pub struct StateDiagram<W> {
    body: DiagramBody<W>,
}

impl<W: Write> StateDiagram<W> {
    /// Create a diagram using the platform line feed
    pub fn new(dest: W, config: StateConfig) -> Self {
        Self::with_line_feed(dest, config, LineFeed::native())
    }

    /// Create a diagram with an explicit line feed
    pub fn with_line_feed(dest: W, config: StateConfig, line_feed: LineFeed) -> Self {
        let mut header = Vec::new();
        if let Some(title) = config.title.as_deref().filter(|t| !t.is_empty()) {
            header.push("---".to_string());
            header.push(format!("title: {}", title));
            header.push("---".to_string());
        }
        header.push("stateDiagram-v2".to_string());

        Self {
            body: DiagramBody::new(dest, line_feed, header),
        }
    }

    /// Render and write the diagram to the destination
    pub fn build(&mut self) -> Result<(), BuildError> {
        let rendered = self.render();
        self.body.write(&rendered)
    }
}

impl<W> StateDiagram<W> {
    /// Render the diagram source
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

    /// State shown with its id
    pub fn state(&mut self, id: &str) -> &mut Self {
        self.push(id.to_string())
    }

    /// `id : description`; an empty description leaves only the id
    pub fn state_with_description(&mut self, id: &str, description: impl fmt::Display) -> &mut Self {
        self.push(state_line(id, description))
    }

    /// `from --> to`
    pub fn transition(&mut self, from: &str, to: &str) -> &mut Self {
        self.push(transition_line(from, to, None))
    }

    /// `from --> to : note`
    pub fn transition_with_note(&mut self, from: &str, to: &str, note: impl fmt::Display) -> &mut Self {
        self.push(transition_line(from, to, Some(note.to_string())))
    }

    /// `[*] --> to`
    pub fn start_transition(&mut self, to: &str) -> &mut Self {
        self.transition(TERMINAL, to)
    }

    /// `[*] --> to : note`
    pub fn start_transition_with_note(&mut self, to: &str, note: impl fmt::Display) -> &mut Self {
        self.transition_with_note(TERMINAL, to, note)
    }

    /// `from --> [*]`
    pub fn end_transition(&mut self, from: &str) -> &mut Self {
        self.transition(from, TERMINAL)
    }

    /// `from --> [*] : note`
    pub fn end_transition_with_note(&mut self, from: &str, note: impl fmt::Display) -> &mut Self {
        self.transition_with_note(from, TERMINAL, note)
    }

    /// `note left of state : text`
    pub fn note(&mut self, side: NoteSide, state: &str, text: impl fmt::Display) -> &mut Self {
        self.push(format!("note {} of {} : {}", side, state, text))
    }

    /// Note block spanning several lines, closed by `end note`
    pub fn multiline_note<I>(&mut self, side: NoteSide, state: &str, lines: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        self.push(format!("note {} of {}", side, state));
        for line in lines {
            self.push(format!("{}{}", INDENT, line));
        }
        self.push("end note".to_string())
    }

    /// `state id { ... }`, with the body written by `fill`
    pub fn composite_state<F>(&mut self, id: &str, fill: F) -> &mut Self
    where
        F: FnOnce(&mut CompositeState),
    {
        let mut composite = CompositeState::default();
        fill(&mut composite);

        self.push(format!("state {} {{", id));
        for line in composite.lines {
            self.body.raw(line);
        }
        self.push("}".to_string())
    }

    /// `state id <<fork>>`
    pub fn fork(&mut self, id: &str) -> &mut Self {
        self.push(format!("state {} <<fork>>", id))
    }

    /// `state id <<join>>`
    pub fn join(&mut self, id: &str) -> &mut Self {
        self.push(format!("state {} <<join>>", id))
    }

    /// `state id <<choice>>`
    pub fn choice(&mut self, id: &str) -> &mut Self {
        self.push(format!("state {} <<choice>>", id))
    }

    /// `direction LR`
    pub fn direction(&mut self, direction: Direction) -> &mut Self {
        self.push(format!("direction {}", direction))
    }

    /// `---` separating concurrent regions
    pub fn concurrent(&mut self) -> &mut Self {
        self.push("---".to_string())
    }

    /// Empty line
    pub fn lf(&mut self) -> &mut Self {
        self.body.blank();
        self
    }
}

impl<W> fmt::Display for StateDiagram<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
