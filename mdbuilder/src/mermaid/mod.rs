//! Mermaid diagram builders
//!
//! Each builder follows the same accumulate-then-render pattern as
//! [`Markdown`](crate::Markdown): chained calls append lines, `render()`
//! joins them, and `build()` writes the result to the destination.
//! Diagrams have nothing to reject while lines are added, so `build()`
//! only fails when the destination does. The rendered text is usually
//! embedded in a document with [`SyntaxHighlight::Mermaid`](crate::SyntaxHighlight::Mermaid):
//!
//! ```
//! use mdbuilder::mermaid::{Flowchart, FlowchartConfig};
//! use mdbuilder::{LineFeed, Markdown, SyntaxHighlight};
//! use std::io;
//!
//! let mut chart = Flowchart::with_line_feed(io::sink(), FlowchartConfig::default(), LineFeed::Lf);
//! chart.node_with_text("A", "Start").link_with_arrow_head("A", "B");
//!
//! let mut doc = Markdown::with_line_feed(io::sink(), LineFeed::Lf);
//! doc.code_blocks(SyntaxHighlight::Mermaid, chart.render());
//! assert!(doc.render().starts_with("```mermaid\nflowchart TB\n"));
//! ```

mod arch;
mod er;
mod flowchart;
mod gantt;
mod pie;
mod quadrant;
mod sequence;
mod state;

pub use arch::{ArchitectureDiagram, Edge, Icon, Position};
pub use er::{Attribute, Cardinality, Entity, EntityRelationshipDiagram, Identify};
pub use flowchart::{Flowchart, FlowchartConfig, Orientation};
pub use gantt::{GanttChart, GanttConfig, Task, TaskState};
pub use pie::{PieChart, PieConfig};
pub use quadrant::{PointStyle, Quadrant, QuadrantChart, QuadrantConfig};
pub use sequence::SequenceDiagram;
pub use state::{CompositeState, Direction, NoteSide, StateConfig, StateDiagram};

use crate::error::BuildError;
use crate::fragments::FragmentStore;
use crate::line_feed::LineFeed;
use crate::sink;
use std::io::Write;

/// Indentation of statements below the diagram keyword
const INDENT: &str = "    ";

/// Lines of a diagram together with its destination
struct DiagramBody<W> {
    store: FragmentStore,
    dest: W,
    line_feed: LineFeed,
}

impl<W> DiagramBody<W> {
    fn new<I, S>(dest: W, line_feed: LineFeed, header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            store: FragmentStore::with_fragments(header),
            dest,
            line_feed,
        }
    }

    /// Append an indented statement
    fn statement(&mut self, line: String) {
        self.store.append(format!("{}{}", INDENT, line));
    }

    /// Append a line as is
    fn raw(&mut self, line: String) {
        self.store.append(line);
    }

    fn blank(&mut self) {
        self.store.append("");
    }

    fn lines(&self) -> &[String] {
        self.store.fragments()
    }

    fn render(&self) -> String {
        self.store.render(self.line_feed)
    }
}

impl<W: Write> DiagramBody<W> {
    fn write(&mut self, rendered: &str) -> Result<(), BuildError> {
        sink::write_rendered(&mut self.dest, rendered, None)
    }
}
