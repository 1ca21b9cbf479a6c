use dedoku_core::{CellSet, Digit, Line};

use crate::{
    SolveGrid, SolverError,
    technique::{BoxedTechnique, Technique},
};

const NAME: &str = "Box/Line Reduction";

/// Eliminates a digit inside a sector that a line is confined to.
///
/// The dual of pointing pairs: if every candidate for a digit on a row or
/// column falls inside one sector, the sector's remaining cells cannot hold
/// the digit. Rows are scanned before columns.
#[derive(Debug, Default, Clone, Copy)]
pub struct BoxLineReduction;

impl BoxLineReduction {
    /// Creates a new `BoxLineReduction` technique.
    #[must_use]
    pub const fn new() -> Self {
        BoxLineReduction
    }

    fn reduce_line(grid: &mut SolveGrid, line: Line) -> bool {
        let mut changed = false;
        for digit in Digit::ALL {
            let in_line = grid.candidate_cells(digit) & line.cells();
            let count = in_line.len();
            if count != 2 && count != 3 {
                continue;
            }
            let Some(first) = in_line.iter().next() else {
                continue;
            };
            let sector = CellSet::SECTORS[first.sector() as usize];
            if !in_line.is_subset(sector) {
                continue;
            }
            let inside = grid.candidate_cells(digit) & sector & !line.cells();
            for pos in inside {
                let before = grid.candidates_at(pos);
                grid.eliminate(pos, digit);
                let after = grid.candidates_at(pos);
                grid.note(|| {
                    format!("{NAME}: reduced {pos} from {before} to {after} using {line}")
                });
                changed = true;
            }
        }
        changed
    }
}

impl Technique for BoxLineReduction {
    fn name(&self) -> &'static str {
        NAME
    }

    fn weight(&self) -> u32 {
        5
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut SolveGrid) -> Result<bool, SolverError> {
        let mut changed = false;
        for line in Line::ROWS {
            changed |= Self::reduce_line(grid, line);
        }
        for line in Line::COLUMNS {
            changed |= Self::reduce_line(grid, line);
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use dedoku_core::{CandidateGrid, Position};

    use super::*;
    use crate::testing::TechniqueTester;

    #[test]
    fn test_row_confined_digit_clears_sector() {
        // Confine 7 on row 1 to the first sector.
        let mut grid = CandidateGrid::new();
        for pos in Position::ROWS[0] {
            if pos.x() > 2 {
                grid.eliminate(pos, Digit::D7);
            }
        }

        TechniqueTester::new(grid)
            .apply_once(&BoxLineReduction::new())
            .assert_removed_exact(Position::new(0, 1), [Digit::D7])
            .assert_removed_exact(Position::new(2, 2), [Digit::D7])
            // The confining row keeps its candidates.
            .assert_no_change(Position::new(0, 0))
            .assert_no_change(Position::new(2, 0));
    }

    #[test]
    fn test_column_confined_digit_clears_sector() {
        // Leave 3 on column 5 only at r4c6 and r6c6, both in sector 5.
        let mut grid = CandidateGrid::new();
        for pos in Position::COLUMNS[5] {
            if pos.y() != 3 && pos.y() != 5 {
                grid.eliminate(pos, Digit::D3);
            }
        }

        TechniqueTester::new(grid)
            .apply_once(&BoxLineReduction::new())
            .assert_removed_exact(Position::new(3, 4), [Digit::D3])
            .assert_removed_exact(Position::new(4, 3), [Digit::D3])
            .assert_no_change(Position::new(5, 3))
            .assert_no_change(Position::new(5, 5));
    }

    #[test]
    fn test_line_spanning_sectors_is_ignored() {
        // 4 on row 3 survives at columns 1 and 4: two different sectors.
        let mut grid = CandidateGrid::new();
        for pos in Position::ROWS[2] {
            if pos.x() != 0 && pos.x() != 3 {
                grid.eliminate(pos, Digit::D4);
            }
        }

        TechniqueTester::new(grid)
            .apply_once(&BoxLineReduction::new())
            .assert_no_change(Position::new(1, 0))
            .assert_no_change(Position::new(4, 0));
    }

    #[test]
    fn test_no_change_on_fresh_grid() {
        TechniqueTester::new(CandidateGrid::new())
            .apply_once(&BoxLineReduction::new())
            .assert_no_change(Position::new(0, 0))
            .assert_no_change(Position::new(8, 8));
    }
}
