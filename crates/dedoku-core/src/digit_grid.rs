//! The 9×9 value grid used for puzzle import and export.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Digit, Position};

/// An error produced when parsing a grid string.
///
/// Malformed input is rejected before any solving is attempted; a batch
/// caller skips the puzzle and continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The input did not contain exactly 81 cell characters.
    #[display("grid input should have 81 cells, found {found}")]
    WrongLength {
        /// Number of cell characters found.
        found: usize,
    },
    /// The input contained a character that is not a digit or blank marker.
    #[display("invalid character {found:?} in grid input")]
    InvalidCharacter {
        /// The offending character.
        found: char,
    },
}

/// A 9×9 grid of placed digits; empty cells are unfilled.
///
/// This is the import/export form of a puzzle. The canonical wire format is
/// an 81-character row-major string with `'0'` for blanks; the parser also
/// accepts `'.'` and `'_'` as blanks and ignores whitespace so fixtures can
/// be written as a readable 9-line block.
///
/// # Examples
///
/// ```
/// use dedoku_core::DigitGrid;
///
/// let grid: DigitGrid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// assert_eq!(grid.given_count(), 30);
/// # Ok::<(), dedoku_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at a position, if placed.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Places or clears the digit at a position.
    pub fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index()] = digit;
    }

    /// Returns the number of placed digits.
    #[must_use]
    pub fn given_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if all 81 cells are placed.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Renders the canonical 81-character row-major form, `'0'` for blanks.
    #[must_use]
    pub fn to_line_string(&self) -> String {
        self.cells
            .iter()
            .map(|cell| cell.map_or('0', Digit::to_char))
            .collect()
    }

    /// Renders a human-readable block with sector separators.
    #[must_use]
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        for y in 0..9 {
            if y == 3 || y == 6 {
                out.push_str("---+---+---\n");
            }
            for x in 0..9 {
                if x == 3 || x == 6 {
                    out.push('|');
                }
                let cell = self.get(Position::new(x, y));
                out.push(cell.map_or('.', Digit::to_char));
            }
            out.push('\n');
        }
        out
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, ParseGridError> {
        let mut cells = [None; 81];
        let mut count = 0usize;
        for c in s.chars() {
            if c.is_ascii_whitespace() {
                continue;
            }
            let cell = match c {
                '1'..='9' => Digit::from_char(c),
                '0' | '.' | '_' => None,
                _ => return Err(ParseGridError::InvalidCharacter { found: c }),
            };
            if count < 81 {
                cells[count] = cell;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongLength { found: count });
        }
        Ok(Self { cells })
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line_string())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const EASY: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    #[test]
    fn test_parse_line_string() {
        let grid: DigitGrid = EASY.parse().unwrap();
        assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
        assert_eq!(grid.get(Position::new(2, 0)), None);
        assert_eq!(grid.get(Position::new(8, 8)), Some(Digit::D9));
        assert_eq!(grid.given_count(), 30);
        assert!(!grid.is_filled());
    }

    #[test]
    fn test_display_round_trip() {
        let grid: DigitGrid = EASY.parse().unwrap();
        assert_eq!(grid.to_line_string(), EASY);
        assert_eq!(grid.to_line_string().parse::<DigitGrid>().unwrap(), grid);
    }

    #[test]
    fn test_parse_block_format() {
        let grid: DigitGrid = "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        "
        .parse()
        .unwrap();
        assert_eq!(grid.to_line_string(), EASY);
    }

    #[test]
    fn test_rejects_short_input() {
        let err = EASY[..80].parse::<DigitGrid>().unwrap_err();
        assert_eq!(err, ParseGridError::WrongLength { found: 80 });
    }

    #[test]
    fn test_rejects_long_input() {
        let long = format!("{EASY}0");
        let err = long.parse::<DigitGrid>().unwrap_err();
        assert_eq!(err, ParseGridError::WrongLength { found: 82 });
    }

    #[test]
    fn test_rejects_invalid_character() {
        let bad = format!("x{}", &EASY[1..]);
        let err = bad.parse::<DigitGrid>().unwrap_err();
        assert_eq!(err, ParseGridError::InvalidCharacter { found: 'x' });
    }

    #[test]
    fn test_pretty_has_sector_separators() {
        let grid: DigitGrid = EASY.parse().unwrap();
        let pretty = grid.pretty();
        assert!(pretty.starts_with("53.|.7.|..."));
        assert_eq!(pretty.matches("---+---+---").count(), 2);
    }

    proptest! {
        #[test]
        fn prop_parse_display_round_trip(cells in proptest::collection::vec(0u8..=9, 81)) {
            let line: String = cells.iter().map(|&v| (b'0' + v) as char).collect();
            let grid: DigitGrid = line.parse().unwrap();
            prop_assert_eq!(grid.to_line_string(), line);
        }
    }
}
