//! Inline Markdown spans
//!
//! These return the formatted span instead of appending it, so they can be
//! nested inside any block operation:
//!
//! ```
//! use mdbuilder::inline::{bold, link};
//!
//! assert_eq!(bold(link("docs", "https://docs.rs")), "**[docs](https://docs.rs)**");
//! ```

use std::fmt::Display;

/// `[text](url)`
pub fn link(text: impl Display, url: impl Display) -> String {
    format!("[{}]({})", text, url)
}

/// `![text](url)`
pub fn image(text: impl Display, url: impl Display) -> String {
    format!("![{}]({})", text, url)
}

/// `~~text~~`
pub fn strikethrough(text: impl Display) -> String {
    format!("~~{}~~", text)
}

/// `**text**`
pub fn bold(text: impl Display) -> String {
    format!("**{}**", text)
}

/// `*text*`
pub fn italic(text: impl Display) -> String {
    format!("*{}*", text)
}

/// `***text***`
pub fn bold_italic(text: impl Display) -> String {
    format!("***{}***", text)
}

/// `` `text` ``
pub fn code(text: impl Display) -> String {
    format!("`{}`", text)
}

/// `==text==`
pub fn highlight(text: impl Display) -> String {
    format!("=={}==", text)
}
