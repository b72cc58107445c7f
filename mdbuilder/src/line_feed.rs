//! Line separator resolution

use std::fmt;

/// Line separator used when joining fragments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineFeed {
    /// Unix style `\n`
    #[default]
    Lf,
    /// Windows style `\r\n`
    CrLf,
}

impl LineFeed {
    /// The separator of the platform this crate was compiled for
    pub fn native() -> Self {
        if cfg!(windows) {
            LineFeed::CrLf
        } else {
            LineFeed::Lf
        }
    }

    /// The separator as text
    pub fn as_str(self) -> &'static str {
        match self {
            LineFeed::Lf => "\n",
            LineFeed::CrLf => "\r\n",
        }
    }
}

impl fmt::Display for LineFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line separator for the current platform as text
pub fn line_feed() -> &'static str {
    LineFeed::native().as_str()
}
