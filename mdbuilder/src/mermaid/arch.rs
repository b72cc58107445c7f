//! Architecture diagrams (`architecture-beta`)
//!
//! Mermaid still marks this diagram type as beta, so its syntax may move.

use super::DiagramBody;
use crate::error::BuildError;
use crate::line_feed::LineFeed;
use std::fmt;
use std::io::Write;

/// Built-in icon of a service or group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// `cloud`
    Cloud,
    /// `database`
    Database,
    /// `disk`
    Disk,
    /// `internet`
    Internet,
    /// `server`
    Server,
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Icon::Cloud => "cloud",
            Icon::Database => "database",
            Icon::Disk => "disk",
            Icon::Internet => "internet",
            Icon::Server => "server",
        })
    }
}

/// Side of a service an edge attaches to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// `L`
    Left,
    /// `R`
    Right,
    /// `T`
    Top,
    /// `B`
    Bottom,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Position::Left => "L",
            Position::Right => "R",
            Position::Top => "T",
            Position::Bottom => "B",
        })
    }
}

/// One end of an edge
///
/// `id` may name a service or a junction. With `arrow` set, the edge
/// points at this end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Service or junction id
    pub id: String,
    /// Side of the service the edge attaches to
    pub position: Position,
    /// Draw an arrow head at this end
    pub arrow: bool,
}

impl Edge {
    /// Edge end without an arrow head
    pub fn new(id: impl Into<String>, position: Position) -> Self {
        Self {
            id: id.into(),
            position,
            arrow: false,
        }
    }

    /// Draw an arrow head at this end
    pub fn with_arrow(mut self) -> Self {
        self.arrow = true;
        self
    }
}

/// Mermaid architecture diagram builder
pub struct ArchitectureDiagram<W> {
    body: DiagramBody<W>,
}

impl<W: Write> ArchitectureDiagram<W> {
    /// Create a diagram using the platform line feed
    pub fn new(dest: W) -> Self {
        Self::with_line_feed(dest, LineFeed::native())
    }

    /// Create a diagram with an explicit line feed
    pub fn with_line_feed(dest: W, line_feed: LineFeed) -> Self {
        Self {
            body: DiagramBody::new(dest, line_feed, ["architecture-beta"]),
        }
    }

    /// Render and write the diagram to the destination
    pub fn build(&mut self) -> Result<(), BuildError> {
        let rendered = self.render();
        self.body.write(&rendered)
    }
}

impl<W> ArchitectureDiagram<W> {
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

    /// `service id(icon)[title]`
    pub fn service(&mut self, id: &str, icon: Icon, title: impl fmt::Display) -> &mut Self {
        self.push(format!("service {}({})[{}]", id, icon, title))
    }

    /// `service id(icon)[title] in group`
    pub fn service_in_group(&mut self, id: &str, icon: Icon, title: impl fmt::Display, group: &str) -> &mut Self {
        self.push(format!("service {}({})[{}] in {}", id, icon, title, group))
    }

    /// `group id(icon)[title]`
    pub fn group(&mut self, id: &str, icon: Icon, title: impl fmt::Display) -> &mut Self {
        self.push(format!("group {}({})[{}]", id, icon, title))
    }

    /// `group id(icon)[title] in parent`
    pub fn group_in_parent(&mut self, id: &str, icon: Icon, title: impl fmt::Display, parent: &str) -> &mut Self {
        self.push(format!("group {}({})[{}] in {}", id, icon, title, parent))
    }

    /// `junction id`
    pub fn junction(&mut self, id: &str) -> &mut Self {
        self.push(format!("junction {}", id))
    }

    /// `junction id in parent`
    pub fn junction_in_parent(&mut self, id: &str, parent: &str) -> &mut Self {
        self.push(format!("junction {} in {}", id, parent))
    }

    fn connect(&mut self, from: &Edge, to: &Edge, modifier: &str) -> &mut Self {
        self.push(format!(
            "{}{}:{} {}--{} {}:{}{}",
            from.id,
            modifier,
            from.position,
            if from.arrow { "<" } else { "" },
            if to.arrow { ">" } else { "" },
            to.position,
            to.id,
            modifier,
        ))
    }

    /// `from:R -- L:to`, with `<`/`>` for ends that carry an arrow
    pub fn edge(&mut self, from: &Edge, to: &Edge) -> &mut Self {
        self.connect(from, to, "")
    }

    /// Edge between the groups that contain `from` and `to`:
    /// `from{group}:R -- L:to{group}`
    pub fn group_edge(&mut self, from: &Edge, to: &Edge) -> &mut Self {
        self.connect(from, to, "{group}")
    }

    /// Empty line
    pub fn lf(&mut self) -> &mut Self {
        self.body.blank();
        self
    }
}

impl<W> fmt::Display for ArchitectureDiagram<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
