//! Diamond generator
//!
//! Validation, layout and assembly, in that order. Validation short-circuits:
//! a rejected input never produces partial output.

mod assembly;
mod layout;
mod parser;

pub use assembly::*;
pub use layout::*;
pub use parser::*;

use tracing::{debug, info, span, Level};

use crate::core::{DiamondError, RenderConfig};

/// Builds diamonds from raw input tokens
///
/// The generator carries no state beyond its [`RenderConfig`]; every call is independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiamondGenerator {
    config: RenderConfig,
    parser: InputParser,
}

impl DiamondGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            config,
            parser: InputParser::new(),
        }
    }

    pub fn config(&self) -> RenderConfig {
        self.config
    }

    /// Check `input` in order: missing, empty, then malformed.
    pub fn validate(&self, input: Option<&str>) -> Result<Token, DiamondError> {
        let input = input.ok_or_else(|| {
            debug!("Missing input rejected");
            DiamondError::NullInput
        })?;
        self.parser.parse(input)
    }

    /// Lay out and assemble the diamond for an accepted token
    pub fn build(&self, token: &Token) -> Diamond {
        let (half, width) = half_diamond(token.symbol);
        Diamond::assemble(
            token.symbol,
            &half,
            width,
            self.config.padding,
            token.uppercase,
        )
    }

    /// Validate `input` and render its diamond as text
    pub fn generate(&self, input: Option<&str>) -> Result<String, DiamondError> {
        let generate_span = span!(
            Level::INFO,
            "generate_diamond",
            input = ?input,
            padding = %self.config.padding,
            line_ending = %self.config.line_ending
        );
        let _enter = generate_span.enter();

        let token = self.validate(input)?;
        debug!(
            symbol = %token.symbol,
            kind = %token.symbol.kind(),
            rank = token.symbol.rank(),
            uppercase = token.uppercase,
            "Accepted input"
        );

        let diamond = self.build(&token);
        let output = diamond.to_text(self.config.line_ending);

        info!(
            rows = diamond.rows().len(),
            width = diamond.width(),
            output_len = output.len(),
            "Diamond generated"
        );

        Ok(output)
    }
}
