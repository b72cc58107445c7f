//! Index generation against the fixture tree in tests/fixtures/docs

use mdbuilder::{generate_index, generate_index_to, IndexError, IndexOptions, LineFeed};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/docs")
}

fn options() -> IndexOptions {
    IndexOptions {
        title: Some("Fixture Docs".to_string()),
        description: vec!["Line one".to_string(), "Line two".to_string()],
        line_feed: LineFeed::Lf,
    }
}

/// Copy the fixture tree so tests that write `index.md` leave it untouched
fn copy_tree(from: &Path, to: &Path) {
    for entry in walkdir::WalkDir::new(from) {
        let entry = entry.unwrap();
        let target = to.join(entry.path().strip_prefix(from).unwrap());
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).unwrap();
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
}

const EXPECTED: &str = "## Fixture Docs\n\
Line one\n  \n\
Line two\n  \n\
### docs\n\
- [Project Overview](README.md)\n  \n\
### api\n\
- [API Reference](api/reference.md)\n  \n\
### guide\n\
- [Getting Started](guide/getting-started.md)\n\
- [install.md](guide/install.md)\n  ";

#[test]
fn test_index_of_fixture_tree() {
    let mut out = Vec::new();
    generate_index_to(&fixture_dir(), &options(), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), EXPECTED);
}

#[test]
fn test_index_without_title_or_description() {
    let mut out = Vec::new();
    let opts = IndexOptions {
        line_feed: LineFeed::Lf,
        ..IndexOptions::default()
    };
    generate_index_to(&fixture_dir(), &opts, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("### docs\n"));
    assert!(!text.contains("## Fixture Docs"));
}

#[test]
fn test_generate_index_writes_file() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("docs");
    copy_tree(&fixture_dir(), &root);

    let written = generate_index(&root, &options()).unwrap();
    assert_eq!(written, root.join("index.md"));
    assert_eq!(fs::read_to_string(&written).unwrap(), EXPECTED);
}

#[test]
fn test_regenerating_lists_previous_index() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("docs");
    copy_tree(&fixture_dir(), &root);

    generate_index(&root, &options()).unwrap();
    let written = generate_index(&root, &options()).unwrap();

    // The old index sits next to README.md, so it is listed with its title
    let text = fs::read_to_string(written).unwrap();
    assert!(text.contains("### docs\n- [Project Overview](README.md)\n- [Fixture Docs](index.md)\n"));
}

#[test]
fn test_crlf_index() {
    let mut out = Vec::new();
    let opts = IndexOptions {
        line_feed: LineFeed::CrLf,
        ..options()
    };
    generate_index_to(&fixture_dir(), &opts, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), EXPECTED.replace('\n', "\r\n"));
}

#[test]
fn test_file_target_is_rejected() {
    let err = generate_index_to(&fixture_dir().join("README.md"), &options(), Vec::new()).unwrap_err();
    assert!(matches!(err, IndexError::Init { .. }));
}
