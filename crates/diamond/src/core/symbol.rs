//! Symbols a diamond can be built from
//!
//! A diamond is drawn with one symbol per rank: letters walk the alphabet from
//! `a`, numerals count from `0`. Both kinds share the same three capabilities
//! (rank, stepping down towards rank 0, and rendering), so they are modelled
//! as a closed enum rather than a trait.

use std::fmt;

/// The kind of a [`Symbol`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Letter,
    Numeral,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolKind::Letter => write!(f, "letter"),
            SymbolKind::Numeral => write!(f, "numeral"),
        }
    }
}

/// An ASCII letter, held as its offset from `a`
///
/// Only [`Letter::new`] builds one, so the offset is always in `0..26`.
/// Case is a property of the input token, applied to the finished diamond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Returns `None` for anything that is not an ASCII letter.
    pub fn new(c: char) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then(|| Letter(c.to_ascii_lowercase() as u8 - b'a'))
    }

    /// The lowercase character
    pub fn as_char(&self) -> char {
        (b'a' + self.0) as char
    }

    pub fn rank(&self) -> usize {
        self.0 as usize
    }
}

/// A single diamond symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Letter(Letter),
    Numeral(u32),
}

impl Symbol {
    /// Create a letter symbol, folding it to lowercase.
    ///
    /// Returns `None` for anything that is not an ASCII letter.
    pub fn letter(c: char) -> Option<Self> {
        Letter::new(c).map(Symbol::Letter)
    }

    /// Create a numeral symbol
    pub fn numeral(value: u32) -> Self {
        Symbol::Numeral(value)
    }

    pub fn kind(&self) -> SymbolKind {
        match self {
            Symbol::Letter(_) => SymbolKind::Letter,
            Symbol::Numeral(_) => SymbolKind::Numeral,
        }
    }

    /// Zero-based position of the symbol in its ordering
    pub fn rank(&self) -> usize {
        match *self {
            Symbol::Letter(letter) => letter.rank(),
            Symbol::Numeral(n) => n as usize,
        }
    }

    /// The symbol `n` ranks below this one, or `None` past rank 0.
    pub fn step_down(&self, n: usize) -> Option<Self> {
        let rank = self.rank().checked_sub(n)?;
        Some(match self {
            Symbol::Letter(_) => Symbol::Letter(Letter(rank as u8)),
            Symbol::Numeral(_) => Symbol::Numeral(rank as u32),
        })
    }

    /// Number of characters the symbol occupies when rendered
    pub fn width(&self) -> usize {
        match *self {
            Symbol::Letter(_) => 1,
            Symbol::Numeral(n) => digit_count(n),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Letter(letter) => write!(f, "{}", letter.as_char()),
            Symbol::Numeral(n) => write!(f, "{}", n),
        }
    }
}

/// Count the decimal digits of `n`
pub fn digit_count(n: u32) -> usize {
    n.checked_ilog10().map_or(1, |log| log as usize + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Symbol {
        Symbol::letter(c).unwrap()
    }

    #[test]
    fn test_letter_folds_case() {
        assert_eq!(Symbol::letter('C'), Symbol::letter('c'));
        assert_eq!(Letter::new('C').unwrap().as_char(), 'c');
        assert_eq!(Symbol::letter('1'), None);
        assert_eq!(Symbol::letter('é'), None);
        assert_eq!(Symbol::letter('ß'), None);
    }

    #[test]
    fn test_uppercase_letter_rank() {
        assert_eq!(letter('A').rank(), 0);
        assert_eq!(letter('B').rank(), 1);
        assert_eq!(letter('Z').rank(), 25);
        assert_eq!(letter('B').step_down(1), Some(letter('a')));
    }

    #[test]
    fn test_letter_rank() {
        assert_eq!(letter('a').rank(), 0);
        assert_eq!(letter('b').rank(), 1);
        assert_eq!(letter('z').rank(), 25);
    }

    #[test]
    fn test_numeral_rank() {
        assert_eq!(Symbol::numeral(0).rank(), 0);
        assert_eq!(Symbol::numeral(42).rank(), 42);
    }

    #[test]
    fn test_step_down() {
        assert_eq!(letter('x').step_down(2), Some(letter('v')));
        assert_eq!(letter('x').step_down(23), Some(letter('a')));
        assert_eq!(letter('x').step_down(24), None);
        assert_eq!(Symbol::numeral(12).step_down(3), Some(Symbol::numeral(9)));
        assert_eq!(Symbol::numeral(0).step_down(0), Some(Symbol::numeral(0)));
        assert_eq!(Symbol::numeral(0).step_down(1), None);
    }

    #[test]
    fn test_width_and_display() {
        assert_eq!(letter('q').width(), 1);
        assert_eq!(Symbol::numeral(7).width(), 1);
        assert_eq!(Symbol::numeral(10).width(), 2);
        assert_eq!(Symbol::numeral(999).width(), 3);
        assert_eq!(Symbol::numeral(105).to_string(), "105");
        assert_eq!(letter('q').to_string(), "q");
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(99), 2);
        assert_eq!(digit_count(100), 3);
        assert_eq!(digit_count(u32::MAX), 10);
    }

    #[test]
    fn test_kind() {
        assert_eq!(letter('a').kind(), SymbolKind::Letter);
        assert_eq!(Symbol::numeral(1).kind(), SymbolKind::Numeral);
        assert_eq!(SymbolKind::Numeral.to_string(), "numeral");
    }
}
