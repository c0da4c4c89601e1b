//! Row layout for diamonds
//!
//! A row is a symbol plus the spacing needed to place it: the interior gap
//! between the two copies of the symbol, and the margin that centers the row
//! in the diamond's fixed width.

use tracing::{debug, span, trace, Level};

use crate::core::{digit_count, display_width, pad_line, Padding, Symbol};

/// One laid-out row of a diamond
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub symbol: Symbol,
    /// Spaces before the first symbol
    pub padding: usize,
    /// Spaces between the two symbols; `None` for the single-symbol row
    pub gap: Option<usize>,
}

impl Row {
    /// The row without its margins
    pub fn middle_line(&self) -> String {
        middle_line(self.symbol)
    }

    /// Render the row with its margin. Symmetric rows are filled out to
    /// `width` columns on the right as well.
    pub fn render(&self, width: usize, padding: Padding) -> String {
        let line = self.middle_line();
        let trailing = match padding {
            Padding::Symmetric => width.saturating_sub(self.padding + display_width(&line)),
            Padding::Leading => 0,
        };
        pad_line(&line, self.padding, trailing)
    }
}

/// Interior gap between the two copies of `symbol`, or `None` at rank 0.
///
/// Letters use `2(r-1)+1`. Numerals shrink the gap by the extra digits on
/// both sides, so every middle line is `2r+1` columns wide whatever the digit
/// count.
pub fn gap_width(symbol: Symbol) -> Option<usize> {
    let rank = symbol.rank();
    if rank == 0 {
        return None;
    }

    let gap = 2 * (rank - 1) + 1;
    Some(match symbol {
        Symbol::Letter(_) => gap,
        Symbol::Numeral(n) => gap.saturating_sub(2 * (digit_count(n) - 1)),
    })
}

/// Width of [`middle_line`] for `symbol`, without building it
pub fn line_width(symbol: Symbol) -> usize {
    match gap_width(symbol) {
        None => symbol.width(),
        Some(gap) => 2 * symbol.width() + gap,
    }
}

/// Build the unpadded line for `symbol`: `s` alone at rank 0, else `s`, gap, `s`.
pub fn middle_line(symbol: Symbol) -> String {
    let rendered = symbol.to_string();
    match gap_width(symbol) {
        None => rendered,
        Some(gap) => format!("{}{}{}", rendered, " ".repeat(gap), rendered),
    }
}

/// Lay out the rows from `top` down to rank 0, with the common row width.
///
/// The width is the widest middle line, i.e. the one for `top`.
pub fn half_diamond(top: Symbol) -> (Vec<Row>, usize) {
    let layout_span = span!(Level::DEBUG, "half_diamond", top = %top, rank = top.rank());
    let _enter = layout_span.enter();

    let symbols: Vec<Symbol> = (0..=top.rank())
        .filter_map(|step| top.step_down(step))
        .collect();

    let width = symbols.iter().copied().map(line_width).max().unwrap_or(0);

    let rows: Vec<Row> = symbols
        .into_iter()
        .map(|symbol| {
            let padding = (width - line_width(symbol)) / 2;
            let row = Row {
                symbol,
                padding,
                gap: gap_width(symbol),
            };
            trace!(symbol = %symbol, padding, gap = ?row.gap, "Laid out row");
            row
        })
        .collect();

    debug!(row_count = rows.len(), width, "Half diamond laid out");
    (rows, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_width_letters() {
        assert_eq!(gap_width(Symbol::letter('a').unwrap()), None);
        assert_eq!(gap_width(Symbol::letter('b').unwrap()), Some(1));
        assert_eq!(gap_width(Symbol::letter('c').unwrap()), Some(3));
        assert_eq!(gap_width(Symbol::letter('z').unwrap()), Some(49));
    }

    #[test]
    fn test_gap_width_numerals_compensates_for_digits() {
        assert_eq!(gap_width(Symbol::numeral(0)), None);
        assert_eq!(gap_width(Symbol::numeral(1)), Some(1));
        assert_eq!(gap_width(Symbol::numeral(9)), Some(17));
        assert_eq!(gap_width(Symbol::numeral(10)), Some(17));
        assert_eq!(gap_width(Symbol::numeral(12)), Some(21));
        assert_eq!(gap_width(Symbol::numeral(100)), Some(195));
    }

    #[test]
    fn test_middle_line() {
        assert_eq!(middle_line(Symbol::letter('a').unwrap()), "a");
        assert_eq!(middle_line(Symbol::letter('b').unwrap()), "b b");
        assert_eq!(middle_line(Symbol::letter('c').unwrap()), "c   c");
        assert_eq!(middle_line(Symbol::numeral(2)), "2   2");
    }

    #[test]
    fn test_numeral_middle_lines_are_two_rank_plus_one_wide() {
        for n in [1u32, 9, 10, 11, 99, 100, 101, 999, 1000, 4095] {
            let line = middle_line(Symbol::numeral(n));
            assert_eq!(line.len(), 2 * n as usize + 1, "numeral {}", n);
        }
    }

    #[test]
    fn test_half_diamond_letters() {
        let (rows, width) = half_diamond(Symbol::letter('c').unwrap());
        assert_eq!(width, 5);
        let symbols: Vec<Symbol> = rows.iter().map(|r| r.symbol).collect();
        let expected: Vec<Symbol> = "cba".chars().filter_map(Symbol::letter).collect();
        assert_eq!(symbols, expected);
        let paddings: Vec<usize> = rows.iter().map(|r| r.padding).collect();
        assert_eq!(paddings, vec![0, 1, 2]);
    }

    #[test]
    fn test_half_diamond_single_row() {
        let (rows, width) = half_diamond(Symbol::numeral(0));
        assert_eq!(width, 1);
        assert_eq!(
            rows,
            vec![Row {
                symbol: Symbol::numeral(0),
                padding: 0,
                gap: None
            }]
        );
    }

    #[test]
    fn test_row_render() {
        let row = Row {
            symbol: Symbol::letter('b').unwrap(),
            padding: 1,
            gap: Some(1),
        };
        assert_eq!(row.render(5, Padding::Symmetric), " b b ");
        assert_eq!(row.render(5, Padding::Leading), " b b");
    }

    #[test]
    fn test_row_render_uses_stored_padding() {
        let row = Row {
            symbol: Symbol::letter('a').unwrap(),
            padding: 3,
            gap: None,
        };
        assert_eq!(row.render(5, Padding::Symmetric), "   a ");
        assert_eq!(row.render(5, Padding::Leading), "   a");
    }

    #[test]
    fn test_line_width_matches_middle_line() {
        for symbol in [Symbol::letter('a').unwrap(), Symbol::letter('k').unwrap()] {
            assert_eq!(line_width(symbol), middle_line(symbol).len());
        }
        for n in [0u32, 1, 9, 10, 99, 100, 1000] {
            let symbol = Symbol::numeral(n);
            assert_eq!(line_width(symbol), middle_line(symbol).len(), "numeral {}", n);
        }
    }

    #[test]
    fn test_half_diamond_numerals_keep_edges_aligned() {
        let (rows, width) = half_diamond(Symbol::numeral(12));
        assert_eq!(width, 25);
        for row in &rows {
            let rendered = row.render(width, Padding::Symmetric);
            assert_eq!(rendered.len(), 25);
            // Left edge sits one column further in per rank step
            assert_eq!(row.padding, 12 - row.symbol.rank());
        }
    }
}
