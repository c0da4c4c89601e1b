//! Input token parser using chumsky
//!
//! Accepts exactly one ASCII letter or one non-negative decimal integer, and
//! nothing else: no sign, no surrounding whitespace, no leading zeros.

use chumsky::prelude::*;
use chumsky::text::int;
use tracing::{debug, trace};

use crate::core::{DiamondError, Symbol, MAX_NUMERAL};

/// A validated input token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Symbol at the widest row of the diamond
    pub symbol: Symbol,
    /// Whether the finished diamond should be uppercased
    pub uppercase: bool,
}

impl Token {
    pub fn new(symbol: Symbol, uppercase: bool) -> Self {
        Self { symbol, uppercase }
    }
}

/// Raw grammar output, before range checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken<'src> {
    Letter(char),
    Numeral(&'src str),
}

/// Chumsky-based input parser
#[derive(Debug, Clone, Copy, Default)]
pub struct InputParser;

impl InputParser {
    pub fn new() -> Self {
        Self
    }

    /// Validate `input` and turn it into a [`Token`].
    ///
    /// A missing input is the caller's concern; see
    /// [`DiamondGenerator::validate`](super::DiamondGenerator::validate).
    pub fn parse(&self, input: &str) -> Result<Token, DiamondError> {
        if input.is_empty() {
            debug!("Empty input rejected");
            return Err(DiamondError::EmptyInput);
        }

        let raw = Self::token_parser()
            .parse(input)
            .into_result()
            .map_err(|errors| {
                debug!(error_count = errors.len(), input = ?input, "Input rejected by grammar");
                DiamondError::invalid_input(input)
            })?;
        trace!(raw = ?raw, "Parsed raw token");

        match raw {
            RawToken::Letter(c) => {
                let symbol = Symbol::letter(c).ok_or_else(|| DiamondError::invalid_input(input))?;
                Ok(Token::new(symbol, c.is_ascii_uppercase()))
            }
            RawToken::Numeral(digits) => {
                let value = digits
                    .parse::<u32>()
                    .ok()
                    .filter(|value| *value <= MAX_NUMERAL)
                    .ok_or_else(|| {
                        debug!(digits, max = MAX_NUMERAL, "Numeral out of range");
                        DiamondError::invalid_input(input)
                    })?;
                Ok(Token::new(Symbol::numeral(value), false))
            }
        }
    }

    fn token_parser<'src>() -> impl Parser<'src, &'src str, RawToken<'src>> + Clone {
        let letter = any()
            .filter(|c: &char| c.is_ascii_alphabetic())
            .map(RawToken::Letter);
        let numeral = int(10).map(RawToken::Numeral);

        letter.or(numeral).then_ignore(end())
    }
}
