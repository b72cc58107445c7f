//! mdbuilder - fluent Markdown and Mermaid document builder
//!
//! Documents are assembled by chaining calls on a [`Markdown`] builder.
//! Every call appends text fragments in order; nothing is written until
//! [`Markdown::build`] renders the whole document into its sink.
//!
//! A table of contents can be planned anywhere in the document. Its
//! content is derived from the headings at render time, so headings added
//! after the plan still show up in it.
//!
//! ```
//! use mdbuilder::{LineFeed, Markdown};
//!
//! let mut out = Vec::new();
//! Markdown::with_line_feed(&mut out, LineFeed::Lf)
//!     .h1("Title")
//!     .table_of_contents_with_range(2, 4)
//!     .h2("Intro")
//!     .h3("Detail")
//!     .build()
//!     .unwrap();
//!
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("- [Intro](#intro)"));
//! assert!(text.contains("  - [Detail](#detail)"));
//! ```

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::pedantic))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(missing_docs))]
// Allow some pedantic lints that are too strict for this project
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::return_self_not_must_use)]

mod alert;
mod badge;
mod document;
mod error;
mod fragments;
mod line_feed;
mod sink;
mod table;
mod toc;

pub mod index;
pub mod inline;
pub mod mermaid;
pub mod syntax;

pub use document::{CheckBox, Markdown};
pub use error::{BuildError, ErrorKind, MarkdownError};
pub use index::{generate_index, generate_index_to, IndexError, IndexOptions};
pub use line_feed::{line_feed, LineFeed};
pub use syntax::SyntaxHighlight;
pub use table::{TableAlignment, TableSet};
pub use toc::{anchor, HeaderEvent, TocRange, TOC_MARKER_BEGIN, TOC_MARKER_END};
