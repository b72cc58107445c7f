//! Sequence diagrams

use super::DiagramBody;
use crate::error::BuildError;
use crate::line_feed::LineFeed;
use itertools::Itertools;
use std::fmt;
use std::io::Write;

/// Mermaid sequence diagram builder
///
/// Block statements (`loop`, `alt`, `opt`, `par`, `critical`, `break`,
/// `box`) are opened and closed with separate calls; nesting is the
/// caller's responsibility.
pub struct SequenceDiagram<W> {
    body: DiagramBody<W>,
}

impl<W: Write> SequenceDiagram<W> {
    /// Create a diagram using the platform line feed
    pub fn new(dest: W) -> Self {
        Self::with_line_feed(dest, LineFeed::native())
    }

    /// Create a diagram with an explicit line feed
    pub fn with_line_feed(dest: W, line_feed: LineFeed) -> Self {
        Self {
            body: DiagramBody::new(dest, line_feed, ["sequenceDiagram"]),
        }
    }

    /// Render and write the diagram to the destination
    pub fn build(&mut self) -> Result<(), BuildError> {
        let rendered = self.render();
        self.body.write(&rendered)
    }
}

impl<W> SequenceDiagram<W> {
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

    fn message(&mut self, from: &str, arrow: &str, to: &str, message: impl fmt::Display) -> &mut Self {
        self.push(format!("{}{}{}: {}", from, arrow, to, message))
    }

    /// Empty line
    pub fn lf(&mut self) -> &mut Self {
        self.body.blank();
        self
    }

    /// `participant A`
    pub fn participant(&mut self, name: &str) -> &mut Self {
        self.push(format!("participant {}", name))
    }

    /// `actor A`
    pub fn actor(&mut self, name: &str) -> &mut Self {
        self.push(format!("actor {}", name))
    }

    /// `create participant A`
    pub fn create_participant(&mut self, name: &str) -> &mut Self {
        self.push(format!("create participant {}", name))
    }

    /// `create actor A`
    pub fn create_actor(&mut self, name: &str) -> &mut Self {
        self.push(format!("create actor {}", name))
    }

    /// `destroy A`
    pub fn destroy_participant(&mut self, name: &str) -> &mut Self {
        self.push(format!("destroy {}", name))
    }

    /// `destroy A`
    pub fn destroy_actor(&mut self, name: &str) -> &mut Self {
        self.destroy_participant(name)
    }

    /// `autonumber`
    pub fn autonumber(&mut self) -> &mut Self {
        self.push("autonumber".to_string())
    }

    /// `box A & B`
    pub fn box_start<I>(&mut self, participants: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let members = participants.into_iter().join(" & ");
        self.push(format!("box {}", members))
    }

    /// Close a `box`
    pub fn box_end(&mut self) -> &mut Self {
        self.end()
    }

    /// `A->>B: message`
    pub fn sync_request(&mut self, from: &str, to: &str, message: impl fmt::Display) -> &mut Self {
        self.message(from, "->>", to, message)
    }

    /// `A-->>B: message`
    pub fn sync_response(&mut self, from: &str, to: &str, message: impl fmt::Display) -> &mut Self {
        self.message(from, "-->>", to, message)
    }

    /// `A->>+B: message`, activating `B`
    pub fn sync_request_with_activation(
        &mut self,
        from: &str,
        to: &str,
        message: impl fmt::Display,
    ) -> &mut Self {
        self.message(from, "->>+", to, message)
    }

    /// `A-->>-B: message`, deactivating `A`
    pub fn sync_response_with_activation(
        &mut self,
        from: &str,
        to: &str,
        message: impl fmt::Display,
    ) -> &mut Self {
        self.message(from, "-->>-", to, message)
    }

    /// `A->)B: message`
    pub fn async_request(&mut self, from: &str, to: &str, message: impl fmt::Display) -> &mut Self {
        self.message(from, "->)", to, message)
    }

    /// `A--)B: message`
    pub fn async_response(&mut self, from: &str, to: &str, message: impl fmt::Display) -> &mut Self {
        self.message(from, "--)", to, message)
    }

    /// Asynchronous request with activation; Mermaid draws it like the synchronous one
    pub fn async_request_with_activation(
        &mut self,
        from: &str,
        to: &str,
        message: impl fmt::Display,
    ) -> &mut Self {
        self.sync_request_with_activation(from, to, message)
    }

    /// Asynchronous response with deactivation; Mermaid draws it like the synchronous one
    pub fn async_response_with_activation(
        &mut self,
        from: &str,
        to: &str,
        message: impl fmt::Display,
    ) -> &mut Self {
        self.sync_response_with_activation(from, to, message)
    }

    /// `A-xB: message`
    pub fn request_error(&mut self, from: &str, to: &str, message: impl fmt::Display) -> &mut Self {
        self.message(from, "-x", to, message)
    }

    /// `A--xB: message`
    pub fn response_error(&mut self, from: &str, to: &str, message: impl fmt::Display) -> &mut Self {
        self.message(from, "--x", to, message)
    }

    /// `activate A`
    pub fn activate(&mut self, participant: &str) -> &mut Self {
        self.push(format!("activate {}", participant))
    }

    /// `deactivate A`
    pub fn deactivate(&mut self, participant: &str) -> &mut Self {
        self.push(format!("deactivate {}", participant))
    }

    /// `note over A: message`
    pub fn note_over(&mut self, participant: &str, message: impl fmt::Display) -> &mut Self {
        self.push(format!("note over {}: {}", participant, message))
    }

    /// `note right of A: message`
    pub fn note_right_of(&mut self, participant: &str, message: impl fmt::Display) -> &mut Self {
        self.push(format!("note right of {}: {}", participant, message))
    }

    /// `note left of A: message`
    pub fn note_left_of(&mut self, participant: &str, message: impl fmt::Display) -> &mut Self {
        self.push(format!("note left of {}: {}", participant, message))
    }

    fn block(&mut self, keyword: &str, description: impl fmt::Display) -> &mut Self {
        self.push(format!("{} {}", keyword, description))
    }

    fn end(&mut self) -> &mut Self {
        self.push("end".to_string())
    }

    /// `loop description`
    pub fn loop_start(&mut self, description: impl fmt::Display) -> &mut Self {
        self.block("loop", description)
    }

    /// Close a `loop`
    pub fn loop_end(&mut self) -> &mut Self {
        self.end()
    }

    /// `alt description`
    pub fn alt_start(&mut self, description: impl fmt::Display) -> &mut Self {
        self.block("alt", description)
    }

    /// `else description` inside an `alt`
    pub fn alt_else(&mut self, description: impl fmt::Display) -> &mut Self {
        self.block("else", description)
    }

    /// Close an `alt`
    pub fn alt_end(&mut self) -> &mut Self {
        self.end()
    }

    /// `opt description`
    pub fn opt_start(&mut self, description: impl fmt::Display) -> &mut Self {
        self.block("opt", description)
    }

    /// Close an `opt`
    pub fn opt_end(&mut self) -> &mut Self {
        self.end()
    }

    /// `par description`
    pub fn parallel_start(&mut self, description: impl fmt::Display) -> &mut Self {
        self.block("par", description)
    }

    /// `and description` inside a `par`
    pub fn parallel_and(&mut self, description: impl fmt::Display) -> &mut Self {
        self.block("and", description)
    }

    /// Close a `par`
    pub fn parallel_end(&mut self) -> &mut Self {
        self.end()
    }

    /// `critical description`
    pub fn critical_start(&mut self, description: impl fmt::Display) -> &mut Self {
        self.block("critical", description)
    }

    /// `option description` inside a `critical`
    pub fn critical_option(&mut self, description: impl fmt::Display) -> &mut Self {
        self.block("option", description)
    }

    /// Close a `critical`
    pub fn critical_end(&mut self) -> &mut Self {
        self.end()
    }

    /// `break description`
    pub fn break_start(&mut self, description: impl fmt::Display) -> &mut Self {
        self.block("break", description)
    }

    /// Close a `break`
    pub fn break_end(&mut self) -> &mut Self {
        self.end()
    }
}

impl<W> fmt::Display for SequenceDiagram<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
