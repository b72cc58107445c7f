//! shields.io badges

use crate::document::Markdown;
use std::fmt;

const BADGE_URL: &str = "https://img.shields.io/badge";

impl<W> Markdown<W> {
    fn badge(&mut self, text: impl fmt::Display, color: &str) -> &mut Self {
        self.push(format!("![Badge]({}/{}-{})", BADGE_URL, text, color))
    }

    /// Red badge
    pub fn red_badge(&mut self, text: impl fmt::Display) -> &mut Self {
        self.badge(text, "red")
    }

    /// Yellow badge
    pub fn yellow_badge(&mut self, text: impl fmt::Display) -> &mut Self {
        self.badge(text, "yellow")
    }

    /// Green badge
    pub fn green_badge(&mut self, text: impl fmt::Display) -> &mut Self {
        self.badge(text, "green")
    }
}

#[cfg(test)]
mod tests {
    use crate::{LineFeed, Markdown};
    use std::io;

    #[test]
    fn test_badges() {
        let mut m = Markdown::with_line_feed(io::sink(), LineFeed::Lf);
        m.red_badge("broken").yellow_badge("flaky").green_badge(format_args!("{}%", 100));
        assert_eq!(
            m.fragments(),
            [
                "![Badge](https://img.shields.io/badge/broken-red)",
                "![Badge](https://img.shields.io/badge/flaky-yellow)",
                "![Badge](https://img.shields.io/badge/100%-green)",
            ]
        );
    }
}
