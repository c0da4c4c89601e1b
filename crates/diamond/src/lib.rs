//! Diamond - Render letter and number diamonds as plain text
//!
//! Given a single letter, the diamond starts with `a`, widens one letter per
//! row up to the input letter, then narrows back to `a`. Given a non-negative
//! integer, it does the same from `0`. Uppercase input yields an uppercase
//! diamond.
//!
//! # Quick Start
//!
//! ```rust
//! use diamond::{render_with_config, LineEnding, RenderConfig};
//!
//! let config = RenderConfig::default().with_line_ending(LineEnding::Lf);
//! let text = render_with_config("c", config).unwrap();
//! assert_eq!(text, "  a  \n b b \nc   c\n b b \n  a  ");
//! ```
//!
//! # Advanced Usage
//!
//! ```rust
//! use diamond::prelude::*;
//!
//! let generator = DiamondGenerator::new();
//! let token = generator.validate(Some("12")).unwrap();
//! assert_eq!(token.symbol, Symbol::Numeral(12));
//!
//! let diamond = generator.build(&token);
//! assert_eq!(diamond.rows().len(), 25);
//! assert_eq!(diamond.width(), 25);
//! ```

pub mod core;
pub mod generator;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use crate::core::*;
pub use crate::generator::{Diamond, DiamondGenerator, Token};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        DiamondError, ErrorKind, Letter, LineEnding, Padding, RenderConfig, Symbol, SymbolKind,
    };
    pub use crate::generator::{Diamond, DiamondGenerator, InputParser, Row, Token};
}

/// Generate the diamond for `input` with the default configuration.
///
/// `None` stands for a missing input and is reported as
/// [`DiamondError::NullInput`]. Rows are joined with the platform line
/// separator.
///
/// # Example
/// ```rust
/// use diamond::{generate, ErrorKind};
///
/// assert_eq!(generate(Some("a")).unwrap(), "a");
/// assert_eq!(generate(None).unwrap_err().kind(), ErrorKind::NullInput);
/// assert_eq!(generate(Some("")).unwrap_err().kind(), ErrorKind::EmptyInput);
/// assert_eq!(generate(Some("ab")).unwrap_err().kind(), ErrorKind::InvalidInput);
/// ```
pub fn generate(input: Option<&str>) -> Result<String, DiamondError> {
    DiamondGenerator::new().generate(input)
}

/// Render the diamond for a present input with the default configuration
pub fn render(input: &str) -> Result<String, DiamondError> {
    generate(Some(input))
}

/// Render the diamond for `input` with a specific configuration
///
/// # Example
/// ```rust
/// use diamond::{render_with_config, LineEnding, Padding, RenderConfig};
///
/// let config = RenderConfig::new(Padding::Leading, LineEnding::Lf);
/// assert_eq!(render_with_config("B", config).unwrap(), " A\nB B\n A");
/// ```
pub fn render_with_config(input: &str, config: RenderConfig) -> Result<String, DiamondError> {
    DiamondGenerator::with_config(config).generate(Some(input))
}

/// Validate `input` without rendering
///
/// # Example
/// ```rust
/// use diamond::{parse, Symbol};
///
/// let token = parse("Z").unwrap();
/// assert_eq!(token.symbol, Symbol::letter('z').unwrap());
/// assert!(token.uppercase);
/// ```
pub fn parse(input: &str) -> Result<Token, DiamondError> {
    generator::InputParser::new().parse(input)
}
