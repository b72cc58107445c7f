//! Index generation for a directory of Markdown files
//!
//! Walks a directory tree and writes an `index.md` that links every
//! Markdown file, grouped under one `###` heading per directory. Links
//! are labelled with the first H1 or H2 heading of each file, or with the
//! file name when it has none.

use crate::document::Markdown;
use crate::error::BuildError;
use crate::inline;
use crate::line_feed::LineFeed;
use itertools::Itertools;
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Name of the generated file
pub const INDEX_FILE: &str = "index.md";

/// Heading used for a directory without a base name (e.g. `.`)
const TOP_DIRECTORY: &str = "top";

/// Errors that can occur during index generation
#[derive(Error, Debug)]
pub enum IndexError {
    /// The target cannot be indexed
    #[error("failed to initialize markdown index for {}: {reason}", path.display())]
    Init {
        /// Directory that was requested
        path: PathBuf,
        /// What is wrong with it
        reason: String,
    },

    /// Walking the directory tree failed
    #[error("failed to create markdown index: {0}")]
    Walk(#[from] walkdir::Error),

    /// Writing the index failed
    #[error("failed to write markdown index: {0}")]
    Write(#[source] BuildError),
}

/// Options for index generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOptions {
    /// Written as `##` heading at the top of the index
    pub title: Option<String>,
    /// Lines written below the title, each followed by a hard break
    pub description: Vec<String>,
    /// Line feed of the generated document
    pub line_feed: LineFeed,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            title: None,
            description: Vec::new(),
            line_feed: LineFeed::native(),
        }
    }
}

/// A directory and the Markdown files directly inside it
#[derive(Debug)]
struct IndexedDir {
    path: PathBuf,
    files: Vec<PathBuf>,
}

/// Generate `{dir}/index.md`
///
/// The index is rendered in memory before the file is touched, so every
/// heading, including one of a previous `index.md`, is read intact.
///
/// # Returns
/// * `Ok(PathBuf)` - Path of the written index
/// * `Err(IndexError)` - The stage that failed
pub fn generate_index(dir: &Path, options: &IndexOptions) -> Result<PathBuf, IndexError> {
    let mut rendered = Vec::new();
    generate_index_to(dir, options, &mut rendered)?;

    let output = dir.join(INDEX_FILE);
    fs::write(&output, rendered).map_err(|source| {
        IndexError::Write(BuildError::Write {
            source,
            latent: None,
        })
    })?;

    log::info!("Wrote index: {}", output.display());
    Ok(output)
}

/// Generate the index of `dir` into `dest`
pub fn generate_index_to<W: Write>(
    dir: &Path,
    options: &IndexOptions,
    dest: W,
) -> Result<(), IndexError> {
    let dirs = collect(dir)?;
    write_index(dir, &dirs, options, dest).map_err(IndexError::Write)
}

fn collect(dir: &Path) -> Result<Vec<IndexedDir>, IndexError> {
    if !dir.is_dir() {
        return Err(IndexError::Init {
            path: dir.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }
    Ok(walk(dir)?)
}

/// Every directory under `root` in walk order, with its Markdown files
fn walk(root: &Path) -> Result<Vec<IndexedDir>, walkdir::Error> {
    let mut dirs: Vec<IndexedDir> = Vec::new();

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();

        if entry.file_type().is_dir() {
            log::debug!("Found directory: {}", path.display());
            dirs.push(IndexedDir {
                path: path.to_path_buf(),
                files: Vec::new(),
            });
            continue;
        }

        if path.extension().and_then(|s| s.to_str()) != Some("md") {
            continue;
        }

        let parent = path.parent();
        if let Some(dir) = dirs.iter_mut().find(|d| Some(d.path.as_path()) == parent) {
            log::debug!("Found markdown file: {}", path.display());
            dir.files.push(path.to_path_buf());
        }
    }

    Ok(dirs)
}

fn write_index<W: Write>(
    root: &Path,
    dirs: &[IndexedDir],
    options: &IndexOptions,
    dest: W,
) -> Result<(), BuildError> {
    let mut markdown = Markdown::with_line_feed(dest, options.line_feed);

    if let Some(title) = options.title.as_deref().filter(|t| !t.is_empty()) {
        markdown.h2(title);
    }
    for line in &options.description {
        markdown.plain_text(line).lf();
    }

    let root_index = root.join(INDEX_FILE);
    for dir in dirs {
        if dir.files.is_empty() || (dir.files.len() == 1 && dir.files[0] == root_index) {
            continue;
        }

        let name = dir
            .path
            .file_name()
            .map_or_else(|| TOP_DIRECTORY.to_string(), |n| n.to_string_lossy().into_owned());
        markdown.h3(name);

        for file in &dir.files {
            let label = first_heading(file).unwrap_or_else(|| file_name(file));
            markdown.bullet_list([inline::link(label, relative_link(root, file))]);
        }
        markdown.lf();
    }

    markdown.build()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Path of `file` relative to `root`, always with `/` separators
fn relative_link(root: &Path, file: &Path) -> String {
    let relative = file.strip_prefix(root).unwrap_or(file);
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .join("/")
}

fn first_heading(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => first_h1_or_h2(&content),
        Err(e) => {
            log::warn!("Failed to read heading from {}: {}", path.display(), e);
            None
        }
    }
}

/// Text of the first H1 or H2 heading, skipping headings in code blocks
pub(crate) fn first_h1_or_h2(content: &str) -> Option<String> {
    let mut current: Option<String> = None;

    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1 | HeadingLevel::H2,
                ..
            }) => current = Some(String::new()),
            Event::Text(text) | Event::Code(text) => {
                if let Some(heading) = current.as_mut() {
                    heading.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(heading) = current.take() {
                    let heading = heading.trim();
                    if !heading.is_empty() {
                        return Some(heading.to_string());
                    }
                }
            }
            _ => {}
        }
    }

    None
}
