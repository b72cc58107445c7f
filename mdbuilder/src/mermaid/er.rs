//! Entity relationship diagrams

use super::{DiagramBody, INDENT};
use crate::error::BuildError;
use crate::line_feed::LineFeed;
use itertools::Itertools;
use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;

/// How many instances of an entity take part in a relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Zero or one
    ZeroToOne,
    /// Exactly one
    ExactlyOne,
    /// Zero or more
    ZeroToMore,
    /// One or more
    OneToMore,
}

impl Cardinality {
    /// Crow's foot symbol, mirrored for the right hand side
    fn symbol(self, left: bool) -> &'static str {
        match (self, left) {
            (Cardinality::ZeroToOne, true) => "|o",
            (Cardinality::ZeroToOne, false) => "o|",
            (Cardinality::ExactlyOne, _) => "||",
            (Cardinality::ZeroToMore, true) => "}o",
            (Cardinality::ZeroToMore, false) => "o{",
            (Cardinality::OneToMore, true) => "}|",
            (Cardinality::OneToMore, false) => "|{",
        }
    }
}

/// Whether the child entity can exist without the parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identify {
    /// Solid line (`--`)
    Identifying,
    /// Dashed line (`..`)
    NonIdentifying,
}

impl Identify {
    fn symbol(self) -> &'static str {
        match self {
            Identify::Identifying => "--",
            Identify::NonIdentifying => "..",
        }
    }
}

/// Column of an entity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attribute {
    /// Column type, e.g. `string`
    pub kind: String,
    /// Column name
    pub name: String,
    /// Primary key
    pub primary_key: bool,
    /// Foreign key
    pub foreign_key: bool,
    /// Unique key
    pub unique_key: bool,
    /// Free text comment; omitted when empty
    pub comment: String,
}

impl Attribute {
    /// Create an attribute without keys or comment
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Mark as primary key
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Mark as foreign key
    pub fn foreign_key(mut self) -> Self {
        self.foreign_key = true;
        self
    }

    /// Mark as unique key
    pub fn unique_key(mut self) -> Self {
        self.unique_key = true;
        self
    }

    /// Set the comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    fn line(&self) -> String {
        let keys = [
            (self.primary_key, "PK"),
            (self.foreign_key, "FK"),
            (self.unique_key, "UK"),
        ]
        .iter()
        .filter(|(set, _)| *set)
        .map(|(_, key)| key)
        .join(",");

        let mut line = format!("{0}{0}{1} {2} {3}", INDENT, self.kind, self.name, keys);
        if !self.comment.is_empty() {
            line.push_str(&format!(" \"{}\"", self.comment));
        }
        line.trim_end().to_string()
    }
}

/// Table of an entity relationship diagram
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entity {
    /// Entity name, also its key in the diagram
    pub name: String,
    /// Columns, in display order
    pub attributes: Vec<Attribute>,
}

impl Entity {
    /// Create an entity
    pub fn new(name: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }

    fn block(&self, lf: LineFeed) -> String {
        let attributes = self.attributes.iter().map(Attribute::line).join(lf.as_str());
        format!("{0}{1} {{{2}{3}{2}{0}}}", INDENT, self.name, lf, attributes)
    }
}

/// Mermaid entity relationship diagram builder
///
/// Relationship lines are kept in call order. Entities are keyed by name,
/// so registering the same name again replaces the earlier definition, and
/// they render sorted by name after the relationships.
pub struct EntityRelationshipDiagram<W> {
    body: DiagramBody<W>,
    entities: BTreeMap<String, Entity>,
}

impl<W: Write> EntityRelationshipDiagram<W> {
    /// Create a diagram using the platform line feed
    pub fn new(dest: W) -> Self {
        Self::with_line_feed(dest, LineFeed::native())
    }

    /// Create a diagram with an explicit line feed
    pub fn with_line_feed(dest: W, line_feed: LineFeed) -> Self {
        Self {
            body: DiagramBody::new(dest, line_feed, ["erDiagram"]),
            entities: BTreeMap::new(),
        }
    }

    /// Render and write the diagram to the destination
    pub fn build(&mut self) -> Result<(), BuildError> {
        let rendered = self.render();
        self.body.write(&rendered)
    }
}

impl<W> EntityRelationshipDiagram<W> {
    /// Render the diagram source
    pub fn render(&self) -> String {
        let lf = self.body.line_feed;
        let mut output = self.body.render();
        output.push_str(lf.as_str());
        for entity in self.entities.values() {
            output.push_str(&entity.block(lf));
            output.push_str(lf.as_str());
        }
        output
    }

    /// Relationship lines appended so far, header included
    pub fn lines(&self) -> &[String] {
        self.body.lines()
    }

    /// Registered entities, sorted by name
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    fn register(&mut self, entity: &Entity) {
        self.entities.insert(entity.name.clone(), entity.clone());
    }

    /// Relationship between two entities; registers both
    pub fn relationship(
        &mut self,
        left: &Entity,
        right: &Entity,
        left_cardinality: Cardinality,
        right_cardinality: Cardinality,
        identify: Identify,
        comment: impl fmt::Display,
    ) -> &mut Self {
        self.body.statement(format!(
            "{} {}{}{} {} : \"{}\"",
            left.name,
            left_cardinality.symbol(true),
            identify.symbol(),
            right_cardinality.symbol(false),
            right.name,
            comment
        ));
        self.register(left);
        self.register(right);
        self
    }

    /// Register an entity without any relationship
    pub fn no_relationship(&mut self, entity: &Entity) -> &mut Self {
        self.register(entity);
        self
    }
}

impl<W> fmt::Display for EntityRelationshipDiagram<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
