//! Render configuration types
//!
//! These types control how a diamond is laid out as text. They are
//! independent of the input token.

use std::fmt;
use std::str::FromStr;

/// How rows are padded to the diamond's width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Padding {
    /// Pad both sides so every row has the same width: `" a "`, `"b b"`, `" a "`
    #[default]
    Symmetric,
    /// Pad the left side only, leaving no trailing spaces: `" a"`, `"b b"`, `" a"`
    Leading,
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Padding::Symmetric => write!(f, "symmetric"),
            Padding::Leading => write!(f, "leading"),
        }
    }
}

impl FromStr for Padding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "symmetric" => Ok(Padding::Symmetric),
            "leading" => Ok(Padding::Leading),
            _ => Err(format!("Unknown padding: {}", s)),
        }
    }
}

/// Separator placed between rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum LineEnding {
    /// The platform separator: `\r\n` on Windows, `\n` elsewhere
    #[default]
    Native,
    /// Always `\n`
    Lf,
    /// Always `\r\n`
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Native => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineEnding::Native => write!(f, "native"),
            LineEnding::Lf => write!(f, "lf"),
            LineEnding::CrLf => write!(f, "crlf"),
        }
    }
}

/// Configuration for rendering a diamond as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct RenderConfig {
    pub padding: Padding,
    pub line_ending: LineEnding,
}

impl RenderConfig {
    pub fn new(padding: Padding, line_ending: LineEnding) -> Self {
        Self {
            padding,
            line_ending,
        }
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }
}
