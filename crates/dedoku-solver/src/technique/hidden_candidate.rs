use dedoku_core::{Digit, Unit};

use crate::{
    SolveGrid, SolverError,
    technique::{BoxedTechnique, Technique},
};

const NAME: &str = "Hidden Candidate";

/// Fixes a digit that fits only one cell of a row, column, or sector.
///
/// The cell itself may still hold several candidates; the digit is "hidden"
/// among them, forced by the unit rather than the cell (also known as a
/// hidden single).
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenCandidate;

impl HiddenCandidate {
    /// Creates a new `HiddenCandidate` technique.
    #[must_use]
    pub const fn new() -> Self {
        HiddenCandidate
    }
}

impl Technique for HiddenCandidate {
    fn name(&self) -> &'static str {
        NAME
    }

    fn weight(&self) -> u32 {
        2
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut SolveGrid) -> Result<bool, SolverError> {
        let mut changed = false;
        for digit in Digit::ALL {
            for unit in Unit::ALL {
                let cells = grid.candidate_cells(digit) & unit.cells();
                if let Some(pos) = cells.as_single() {
                    grid.place(pos, digit);
                    grid.note(|| format!("{NAME}: {digit} fits only {pos} in {unit}"));
                    changed = true;
                }
            }
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
    fn test_hidden_candidate_in_row() {
        let mut grid = CandidateGrid::new();
        for pos in Position::ROWS[0] {
            if pos.x() != 3 {
                grid.eliminate(pos, Digit::D5);
            }
        }

        TechniqueTester::new(grid)
            .apply_once(&HiddenCandidate::new())
            .assert_placed(Position::new(3, 0), Digit::D5);
    }

    #[test]
    fn test_hidden_candidate_in_column() {
        let mut grid = CandidateGrid::new();
        for pos in Position::COLUMNS[5] {
            if pos.y() != 4 {
                grid.eliminate(pos, Digit::D7);
            }
        }

        TechniqueTester::new(grid)
            .apply_once(&HiddenCandidate::new())
            .assert_placed(Position::new(5, 4), Digit::D7);
    }

    #[test]
    fn test_hidden_candidate_in_sector() {
        let mut grid = CandidateGrid::new();
        for pos in Position::SECTORS[4] {
            if pos != Position::new(4, 4) {
                grid.eliminate(pos, Digit::D9);
            }
        }

        TechniqueTester::new(grid)
            .apply_once(&HiddenCandidate::new())
            .assert_placed(Position::new(4, 4), Digit::D9);
    }

    #[test]
    fn test_no_change_without_hidden_candidates() {
        TechniqueTester::new(CandidateGrid::new())
            .apply_once(&HiddenCandidate::new())
            .assert_no_change(Position::new(0, 0))
            .assert_no_change(Position::new(8, 8));
    }
}
