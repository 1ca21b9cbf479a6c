//! Units (rows, columns, sectors) and line geometry.

use std::fmt::{self, Display};

use crate::{CellSet, Position};

/// A constraint unit: one of the 9 rows, 9 columns, or 9 sectors.
///
/// Every digit must appear exactly once in every unit; techniques scan units
/// to find digits that are forced or excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 sector identified by its index (0-8, left to right, top to
    /// bottom).
    Sector {
        /// Sector index (0-8).
        index: u8,
    },
}

impl Unit {
    /// All rows (0-8).
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row { y: 0 }; 9];
        let mut y = 0;
        while y < 9 {
            rows[y as usize] = Self::Row { y };
            y += 1;
        }
        rows
    };

    /// All columns (0-8).
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column { x: 0 }; 9];
        let mut x = 0;
        while x < 9 {
            columns[x as usize] = Self::Column { x };
            x += 1;
        }
        columns
    };

    /// All sectors (0-8).
    pub const SECTORS: [Self; 9] = {
        let mut sectors = [Self::Sector { index: 0 }; 9];
        let mut index = 0;
        while index < 9 {
            sectors[index as usize] = Self::Sector { index };
            index += 1;
        }
        sectors
    };

    /// All 27 units in row, column, sector order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        while i < 9 {
            all[i as usize] = Self::Row { y: i };
            all[i as usize + 9] = Self::Column { x: i };
            all[i as usize + 18] = Self::Sector { index: i };
            i += 1;
        }
        all
    };

    /// Returns the mask of all cells contained in this unit.
    #[must_use]
    pub fn cells(self) -> CellSet {
        match self {
            Unit::Row { y } => CellSet::ROWS[y as usize],
            Unit::Column { x } => CellSet::COLUMNS[x as usize],
            Unit::Sector { index } => CellSet::SECTORS[index as usize],
        }
    }

    /// Converts a cell index within the unit (0-8) into a board [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    pub fn position(self, i: u8) -> Position {
        assert!(i < 9, "unit cell index out of range");
        match self {
            Unit::Row { y } => Position::new(i, y),
            Unit::Column { x } => Position::new(x, i),
            Unit::Sector { index } => Position::from_sector(index, i),
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Row { y } => write!(f, "row {}", y + 1),
            Unit::Column { x } => write!(f, "column {}", x + 1),
            Unit::Sector { index } => write!(f, "sector {}", index + 1),
        }
    }
}

/// A row or column.
///
/// Line-oriented techniques (conjugate pairs, X-Wing) run identical logic
/// along rows and along columns. Rather than transposing the grid with a
/// mutable orientation flag, the logic takes a `Line` and uses its accessors;
/// coordinates stay in board orientation throughout, so logged positions never
/// need un-transposing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
}

impl Line {
    /// All rows (0-8).
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row { y: 0 }; 9];
        let mut y = 0;
        while y < 9 {
            rows[y as usize] = Self::Row { y };
            y += 1;
        }
        rows
    };

    /// All columns (0-8).
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column { x: 0 }; 9];
        let mut x = 0;
        while x < 9 {
            columns[x as usize] = Self::Column { x };
            x += 1;
        }
        columns
    };

    /// Returns the mask of all cells on this line.
    #[must_use]
    pub fn cells(self) -> CellSet {
        self.unit().cells()
    }

    /// Converts an offset along the line (0-8) into a board [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    pub fn position(self, i: u8) -> Position {
        self.unit().position(i)
    }

    /// Returns the offset of `pos` along this line.
    #[must_use]
    pub fn offset_of(self, pos: Position) -> u8 {
        match self {
            Line::Row { .. } => pos.x(),
            Line::Column { .. } => pos.y(),
        }
    }

    /// Returns the perpendicular line crossing this one at offset `i`.
    #[must_use]
    pub fn orthogonal(self, i: u8) -> Self {
        assert!(i < 9, "line offset out of range");
        match self {
            Line::Row { .. } => Line::Column { x: i },
            Line::Column { .. } => Line::Row { y: i },
        }
    }

    /// Returns this line as a [`Unit`].
    #[must_use]
    pub fn unit(self) -> Unit {
        match self {
            Line::Row { y } => Unit::Row { y },
            Line::Column { x } => Unit::Column { x },
        }
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.unit(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_units_cover_board() {
        assert_eq!(Unit::ALL.len(), 27);
        for unit in Unit::ALL {
            assert_eq!(unit.cells().len(), 9);
        }
    }

    #[test]
    fn test_unit_positions_match_cells() {
        for unit in Unit::ALL {
            for i in 0..9 {
                assert!(unit.cells().contains(unit.position(i)));
            }
        }
    }

    #[test]
    fn test_line_orthogonal() {
        let row = Line::Row { y: 3 };
        assert_eq!(row.orthogonal(5), Line::Column { x: 5 });
        assert_eq!(row.position(5), Position::new(5, 3));
        assert_eq!(row.offset_of(Position::new(5, 3)), 5);

        let column = Line::Column { x: 7 };
        assert_eq!(column.orthogonal(2), Line::Row { y: 2 });
        assert_eq!(column.position(2), Position::new(7, 2));
        assert_eq!(column.offset_of(Position::new(7, 2)), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Unit::Row { y: 0 }), "row 1");
        assert_eq!(format!("{}", Unit::Column { x: 8 }), "column 9");
        assert_eq!(format!("{}", Unit::Sector { index: 4 }), "sector 5");
    }
}
