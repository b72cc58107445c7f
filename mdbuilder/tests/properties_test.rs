//! Property tests for rendering and table of contents planning

use mdbuilder::{anchor, ErrorKind, LineFeed, Markdown, TocRange, TOC_MARKER_BEGIN, TOC_MARKER_END};
use proptest::prelude::*;
use std::io;

fn doc() -> Markdown<io::Sink> {
    Markdown::with_line_feed(io::sink(), LineFeed::Lf)
}

proptest! {
    #[test]
    fn rendered_text_is_fragments_in_call_order(texts in prop::collection::vec("[a-zA-Z0-9 .,]{0,20}", 0..20)) {
        let mut m = doc();
        for text in &texts {
            m.plain_text(text);
        }
        prop_assert_eq!(m.to_string(), texts.join("\n"));
    }

    #[test]
    fn toc_lists_headings_in_range_in_order(
        headings in prop::collection::vec((1u8..=6, "[A-Za-z][A-Za-z0-9 ]{0,12}"), 0..15),
        min in 1u8..=6,
        span in 0u8..6,
    ) {
        let max = (min + span).min(6);
        let mut m = doc();
        m.table_of_contents_with_range(min, max);
        for (depth, label) in &headings {
            m.heading(*depth, label);
        }

        let expected: Vec<String> = headings
            .iter()
            .filter(|(depth, _)| (min..=max).contains(depth))
            .map(|(depth, label)| {
                format!("{}- [{}](#{})", "  ".repeat(usize::from(depth - min)), label, anchor(label))
            })
            .collect();

        let rendered = m.to_string();
        let begin = rendered.find(TOC_MARKER_BEGIN).unwrap() + TOC_MARKER_BEGIN.len();
        let end = rendered.find(TOC_MARKER_END).unwrap();
        let body: Vec<&str> = rendered[begin..end].lines().filter(|l| !l.is_empty()).collect();
        prop_assert_eq!(body, expected);
        prop_assert!(m.error().is_none());
    }

    #[test]
    fn second_toc_is_always_rejected(first in 1u8..=6, second in 1u8..=6) {
        let mut m = doc();
        m.table_of_contents(first).h1("Top").table_of_contents(second);

        prop_assert_eq!(m.error().map(|e| e.kind()), Some(ErrorKind::DuplicateToc));
        let rendered = m.to_string();
        prop_assert_eq!(rendered.matches(TOC_MARKER_BEGIN).count(), 1);
        prop_assert_eq!(rendered.matches(TOC_MARKER_END).count(), 1);
    }

    #[test]
    fn toc_range_accepts_exactly_valid_ranges(min in 0u8..=8, max in 0u8..=8) {
        let valid = (1..=6).contains(&min) && (1..=6).contains(&max) && min <= max;
        prop_assert_eq!(TocRange::new(min, max).is_ok(), valid);
    }

    #[test]
    fn anchors_only_contain_slug_characters(label in "\\PC{0,30}") {
        let slug = anchor(&label);
        prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }

    #[test]
    fn render_is_idempotent(labels in prop::collection::vec("[a-z]{1,8}", 1..8)) {
        let mut m = doc();
        m.h1("Title").table_of_contents(3);
        for label in &labels {
            m.h2(label).plain_text(label);
        }
        let first = m.to_string();
        prop_assert_eq!(&first, &m.to_string());
        prop_assert_eq!(first, m.render());
    }
}
