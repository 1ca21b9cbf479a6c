use crate::{
    SolveGrid, SolverError,
    technique::{BoxedTechnique, Technique},
};

const NAME: &str = "Solo Candidate";

/// Fixes cells whose candidate set has shrunk to a single digit.
///
/// The simplest deduction there is (also known as a naked single). Fixing the
/// cell propagates the digit out of all peer candidate sets, which is what
/// unlocks further deductions.
///
/// # Examples
///
/// ```
/// use dedoku_solver::{SolveGrid, technique::{SoloCandidate, Technique}};
///
/// let mut grid = SolveGrid::new();
/// let changed = SoloCandidate::new().apply(&mut grid)?;
/// assert!(!changed);
/// # Ok::<(), dedoku_solver::SolverError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct SoloCandidate;

impl SoloCandidate {
    /// Creates a new `SoloCandidate` technique.
    #[must_use]
    pub const fn new() -> Self {
        SoloCandidate
    }
}

impl Technique for SoloCandidate {
    fn name(&self) -> &'static str {
        NAME
    }

    fn weight(&self) -> u32 {
        1
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut SolveGrid) -> Result<bool, SolverError> {
        let mut changed = false;
        for pos in grid.unfixed_cells() {
            if let Some(digit) = grid.candidates_at(pos).as_single() {
                grid.place(pos, digit);
                grid.note(|| format!("{NAME}: {pos} can only be {digit}"));
                changed = true;
            }
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use dedoku_core::{CandidateGrid, Digit, Position};

    use super::*;
    use crate::testing::TechniqueTester;

    #[test]
    fn test_places_solo_candidate() {
        let mut grid = CandidateGrid::new();
        let target = Position::new(4, 4);
        for digit in Digit::ALL {
            if digit != Digit::D5 {
                grid.eliminate(target, digit);
            }
        }

        TechniqueTester::new(grid)
            .apply_once(&SoloCandidate::new())
            .assert_placed(target, Digit::D5)
            // Placement propagates into the row, column, and sector.
            .assert_removed_includes(Position::new(0, 4), [Digit::D5])
            .assert_removed_includes(Position::new(4, 0), [Digit::D5])
            .assert_removed_includes(Position::new(3, 3), [Digit::D5]);
    }

    #[test]
    fn test_places_multiple_solo_candidates() {
        let mut grid = CandidateGrid::new();
        for digit in Digit::ALL {
            if digit != Digit::D3 {
                grid.eliminate(Position::new(0, 0), digit);
            }
            if digit != Digit::D7 {
                grid.eliminate(Position::new(8, 8), digit);
            }
        }

        TechniqueTester::new(grid)
            .apply_once(&SoloCandidate::new())
            .assert_placed(Position::new(0, 0), Digit::D3)
            .assert_placed(Position::new(8, 8), Digit::D7);
    }

    #[test]
    fn test_no_change_without_solo_candidates() {
        TechniqueTester::new(CandidateGrid::new())
            .apply_once(&SoloCandidate::new())
            .assert_no_change(Position::new(0, 0))
            .assert_no_change(Position::new(4, 4));
    }

    #[test]
    fn test_idempotent_after_success() {
        let mut grid = CandidateGrid::new();
        for digit in Digit::ALL {
            if digit != Digit::D1 {
                grid.eliminate(Position::new(2, 2), digit);
            }
        }

        TechniqueTester::new(grid)
            .apply_once(&SoloCandidate::new())
            .assert_stuck(&SoloCandidate::new());
    }
}
