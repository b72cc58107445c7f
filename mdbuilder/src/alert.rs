//! GitHub alert blocks (`> [!NOTE]` and friends)

use crate::document::Markdown;
use std::fmt;

/// Kind of GitHub alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Alert {
    Note,
    Tip,
    Important,
    Warning,
    Caution,
}

impl Alert {
    fn label(self) -> &'static str {
        match self {
            Alert::Note => "NOTE",
            Alert::Tip => "TIP",
            Alert::Important => "IMPORTANT",
            Alert::Warning => "WARNING",
            Alert::Caution => "CAUTION",
        }
    }
}

impl<W> Markdown<W> {
    fn alert(&mut self, kind: Alert, text: impl fmt::Display) -> &mut Self {
        let fragment = format!("> [!{}]  {}> {}", kind.label(), self.line_feed(), text);
        self.push(fragment)
    }

    /// `> [!NOTE]` alert
    pub fn note(&mut self, text: impl fmt::Display) -> &mut Self {
        self.alert(Alert::Note, text)
    }

    /// `> [!TIP]` alert
    pub fn tip(&mut self, text: impl fmt::Display) -> &mut Self {
        self.alert(Alert::Tip, text)
    }

    /// `> [!IMPORTANT]` alert
    pub fn important(&mut self, text: impl fmt::Display) -> &mut Self {
        self.alert(Alert::Important, text)
    }

    /// `> [!WARNING]` alert
    pub fn warning(&mut self, text: impl fmt::Display) -> &mut Self {
        self.alert(Alert::Warning, text)
    }

    /// `> [!CAUTION]` alert
    pub fn caution(&mut self, text: impl fmt::Display) -> &mut Self {
        self.alert(Alert::Caution, text)
    }
}
