//! Cell coordinates on the 9×9 board.

use std::fmt::{self, Display};

/// A cell coordinate: `x` is the column (0-8), `y` the row (0-8).
///
/// Formats as the 1-based `r{row}c{column}` notation used by move
/// explanations, e.g. `r4c7`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// All positions of each row, indexed by row.
    pub const ROWS: [[Self; 9]; 9] = {
        let mut rows = [[Self { x: 0, y: 0 }; 9]; 9];
        let mut y = 0;
        #[expect(clippy::cast_possible_truncation)]
        while y < 9 {
            let mut x = 0;
            while x < 9 {
                rows[y][x] = Self {
                    x: x as u8,
                    y: y as u8,
                };
                x += 1;
            }
            y += 1;
        }
        rows
    };

    /// All positions of each column, indexed by column.
    pub const COLUMNS: [[Self; 9]; 9] = {
        let mut columns = [[Self { x: 0, y: 0 }; 9]; 9];
        let mut x = 0;
        #[expect(clippy::cast_possible_truncation)]
        while x < 9 {
            let mut y = 0;
            while y < 9 {
                columns[x][y] = Self {
                    x: x as u8,
                    y: y as u8,
                };
                y += 1;
            }
            x += 1;
        }
        columns
    };

    /// All positions of each 3×3 sector, indexed by sector (left to right,
    /// top to bottom).
    pub const SECTORS: [[Self; 9]; 9] = {
        let mut sectors = [[Self { x: 0, y: 0 }; 9]; 9];
        let mut sector = 0;
        #[expect(clippy::cast_possible_truncation)]
        while sector < 9 {
            let mut cell = 0;
            while cell < 9 {
                sectors[sector][cell] = Self::from_sector(sector as u8, cell as u8);
                cell += 1;
            }
            sector += 1;
        }
        sectors
    };

    /// Creates a position from column and row coordinates.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9, "position coordinate out of range");
        Self { x, y }
    }

    /// Creates a position from a sector index and a cell index within it.
    ///
    /// # Panics
    ///
    /// Panics if either index is not in the range 0-8.
    #[must_use]
    pub const fn from_sector(sector: u8, cell: u8) -> Self {
        assert!(sector < 9 && cell < 9, "sector index out of range");
        Self {
            x: (sector % 3) * 3 + cell % 3,
            y: (sector / 3) * 3 + cell / 3,
        }
    }

    /// Creates a position from a row-major cell index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is 81 or greater.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 81, "cell index out of range");
        #[expect(clippy::cast_possible_truncation)]
        let (x, y) = ((index % 9) as u8, (index / 9) as u8);
        Self { x, y }
    }

    /// Returns the column coordinate (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row coordinate (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major cell index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Returns the index of the 3×3 sector containing this position.
    #[must_use]
    pub const fn sector(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Returns the cell index of this position within its sector (0-8).
    #[must_use]
    pub const fn sector_cell(self) -> u8 {
        (self.y % 3) * 3 + self.x % 3
    }

    /// Returns `true` if the two positions share a row, column, or sector.
    #[must_use]
    pub const fn sees(self, other: Self) -> bool {
        (self.x == other.x || self.y == other.y || self.sector() == other.sector())
            && self.index() != other.index()
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.y + 1, self.x + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for index in 0..81 {
            let pos = Position::from_index(index);
            assert_eq!(pos.index(), index);
        }
    }

    #[test]
    fn test_sector_round_trip() {
        for pos in Position::SECTORS.iter().flatten() {
            assert_eq!(
                Position::from_sector(pos.sector(), pos.sector_cell()),
                *pos
            );
        }
    }

    #[test]
    fn test_sector_layout() {
        assert_eq!(Position::new(0, 0).sector(), 0);
        assert_eq!(Position::new(8, 0).sector(), 2);
        assert_eq!(Position::new(4, 4).sector(), 4);
        assert_eq!(Position::new(0, 8).sector(), 6);
        assert_eq!(Position::new(8, 8).sector(), 8);
    }

    #[test]
    fn test_sees() {
        let pos = Position::new(4, 4);
        assert!(pos.sees(Position::new(8, 4))); // same row
        assert!(pos.sees(Position::new(4, 0))); // same column
        assert!(pos.sees(Position::new(3, 5))); // same sector
        assert!(!pos.sees(Position::new(0, 0)));
        assert!(!pos.sees(pos));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Position::new(6, 3)), "r4c7");
        assert_eq!(format!("{}", Position::new(0, 0)), "r1c1");
    }

    #[test]
    #[should_panic(expected = "position coordinate out of range")]
    fn test_new_rejects_out_of_range() {
        let _ = Position::new(9, 0);
    }
}
