//! Full diamond assembly
//!
//! The half-diamond runs from the widest row down to rank 0. Mirroring it
//! (every row but the rank-0 row, reversed) gives the upper half, so the
//! finished rows read rank 0 up to the top rank and back down again.

use std::fmt;

use super::layout::Row;
use crate::core::{LineEnding, Padding, Symbol};

/// A rendered diamond, one string per row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diamond {
    symbol: Symbol,
    width: usize,
    rows: Vec<String>,
}

impl Diamond {
    /// Mirror a half-diamond into a full diamond.
    ///
    /// `half` must run from the top rank down to rank 0, as produced by
    /// [`half_diamond`](super::layout::half_diamond).
    pub fn assemble(
        symbol: Symbol,
        half: &[Row],
        width: usize,
        padding: Padding,
        uppercase: bool,
    ) -> Self {
        let bottom: Vec<String> = half.iter().map(|row| row.render(width, padding)).collect();
        let top = bottom.iter().skip(1).rev().cloned();

        let rows = top
            .chain(bottom.iter().cloned())
            .map(|row| {
                if uppercase {
                    row.to_ascii_uppercase()
                } else {
                    row
                }
            })
            .collect();

        Self {
            symbol,
            width,
            rows,
        }
    }

    /// The symbol at the widest row
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn rank(&self) -> usize {
        self.symbol.rank()
    }

    /// Width of the widest row in columns
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<String> {
        self.rows
    }

    /// Join the rows with `line_ending`; no separator follows the last row.
    pub fn to_text(&self, line_ending: LineEnding) -> String {
        self.rows.join(line_ending.as_str())
    }
}

impl fmt::Display for Diamond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(LineEnding::Lf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::layout::half_diamond;

    fn build(symbol: Symbol, padding: Padding, uppercase: bool) -> Diamond {
        let (half, width) = half_diamond(symbol);
        Diamond::assemble(symbol, &half, width, padding, uppercase)
    }

    #[test]
    fn test_single_row() {
        let diamond = build(Symbol::letter('a').unwrap(), Padding::Symmetric, false);
        assert_eq!(diamond.rows(), ["a"]);
        assert_eq!(diamond.to_string(), "a");
    }

    #[test]
    fn test_mirror_order() {
        let diamond = build(Symbol::letter('c').unwrap(), Padding::Symmetric, false);
        assert_eq!(
            diamond.rows(),
            ["  a  ", " b b ", "c   c", " b b ", "  a  "]
        );
    }

    #[test]
    fn test_leading_padding() {
        let diamond = build(Symbol::letter('b').unwrap(), Padding::Leading, false);
        assert_eq!(diamond.to_text(LineEnding::Lf), " a\nb b\n a");
    }

    #[test]
    fn test_uppercase() {
        let diamond = build(Symbol::letter('b').unwrap(), Padding::Symmetric, true);
        assert_eq!(diamond.to_text(LineEnding::Lf), " A \nB B\n A ");
    }

    #[test]
    fn test_crlf() {
        let diamond = build(Symbol::letter('b').unwrap(), Padding::Symmetric, false);
        assert_eq!(diamond.to_text(LineEnding::CrLf), " a \r\nb b\r\n a ");
    }

    #[test]
    fn test_accessors() {
        let diamond = build(Symbol::numeral(3), Padding::Symmetric, false);
        assert_eq!(diamond.symbol(), Symbol::numeral(3));
        assert_eq!(diamond.rank(), 3);
        assert_eq!(diamond.width(), 7);
        assert_eq!(diamond.into_rows().len(), 7);
    }
}
