//! Solver state for technique application.

use dedoku_core::{CandidateGrid, CellSet, ConsistencyError, Digit, DigitGrid, DigitSet, Position};

use crate::MoveLog;

/// The candidate grid plus the move log, as seen by techniques.
///
/// `SolveGrid` is the only surface techniques use to query and mutate
/// candidates, so every deduction flows through the same place/eliminate
/// operations and can be narrated into the log. Each solve exclusively owns
/// one `SolveGrid`; techniques never retain references into it.
///
/// # Examples
///
/// ```
/// use dedoku_core::{Digit, Position};
/// use dedoku_solver::SolveGrid;
///
/// let mut grid = SolveGrid::new();
/// grid.place(Position::new(0, 0), Digit::D5);
/// assert!(!grid.candidates_at(Position::new(5, 0)).contains(Digit::D5));
/// ```
#[derive(Debug, Clone)]
pub struct SolveGrid {
    candidates: CandidateGrid,
    log: MoveLog,
}

impl From<CandidateGrid> for SolveGrid {
    fn from(candidates: CandidateGrid) -> Self {
        Self {
            candidates,
            log: MoveLog::disabled(),
        }
    }
}

impl From<DigitGrid> for SolveGrid {
    fn from(grid: DigitGrid) -> Self {
        CandidateGrid::from_digit_grid(&grid).into()
    }
}

impl Default for SolveGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl SolveGrid {
    /// Creates an empty grid with all candidates available and logging off.
    #[must_use]
    pub fn new() -> Self {
        CandidateGrid::new().into()
    }

    /// Builds solver state for a puzzle, with or without move explanations.
    #[must_use]
    pub fn from_puzzle(puzzle: &DigitGrid, explain: bool) -> Self {
        Self {
            candidates: CandidateGrid::from_digit_grid(puzzle),
            log: if explain {
                MoveLog::enabled()
            } else {
                MoveLog::disabled()
            },
        }
    }

    /// Appends a move explanation; formatting is skipped when logging is off.
    pub fn note<F>(&mut self, format: F)
    where
        F: FnOnce() -> String,
    {
        self.log.record(format);
    }

    /// Returns the move log recorded so far.
    #[must_use]
    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    /// Consumes the grid, returning the candidate state and the move log.
    #[must_use]
    pub fn into_parts(self) -> (CandidateGrid, MoveLog) {
        (self.candidates, self.log)
    }

    /// Fixes a cell and propagates the elimination to its unfixed peers.
    ///
    /// This mirrors [`CandidateGrid::place`].
    #[inline]
    pub fn place(&mut self, pos: Position, digit: Digit) -> bool {
        self.candidates.place(pos, digit)
    }

    /// Removes a candidate from one cell.
    ///
    /// This mirrors [`CandidateGrid::eliminate`].
    #[inline]
    pub fn eliminate(&mut self, pos: Position, digit: Digit) -> bool {
        self.candidates.eliminate(pos, digit)
    }

    /// Removes a candidate from every unfixed cell in a mask.
    ///
    /// This mirrors [`CandidateGrid::eliminate_in`].
    #[inline]
    pub fn eliminate_in(&mut self, cells: CellSet, digit: Digit) -> bool {
        self.candidates.eliminate_in(cells, digit)
    }

    /// Returns the candidate set of an unfixed cell.
    ///
    /// This mirrors [`CandidateGrid::candidates_at`].
    #[inline]
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        self.candidates.candidates_at(pos)
    }

    /// Returns the cells where a digit remains a candidate.
    ///
    /// This mirrors [`CandidateGrid::candidate_cells`].
    #[inline]
    #[must_use]
    pub fn candidate_cells(&self, digit: Digit) -> CellSet {
        self.candidates.candidate_cells(digit)
    }

    /// Returns the fixed value of a cell, if any.
    ///
    /// This mirrors [`CandidateGrid::value_at`].
    #[inline]
    #[must_use]
    pub fn value_at(&self, pos: Position) -> Option<Digit> {
        self.candidates.value_at(pos)
    }

    /// Returns `true` if the cell's value is fixed.
    ///
    /// This mirrors [`CandidateGrid::is_fixed`].
    #[inline]
    #[must_use]
    pub fn is_fixed(&self, pos: Position) -> bool {
        self.candidates.is_fixed(pos)
    }

    /// Returns the mask of all unfixed cells.
    ///
    /// This mirrors [`CandidateGrid::unfixed_cells`].
    #[inline]
    #[must_use]
    pub fn unfixed_cells(&self) -> CellSet {
        self.candidates.unfixed_cells()
    }

    /// Returns `true` if every cell has a fixed value.
    ///
    /// This mirrors [`CandidateGrid::is_filled`].
    #[inline]
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.candidates.is_filled()
    }

    /// Validates units and candidate sets.
    ///
    /// This mirrors [`CandidateGrid::check_consistency`].
    ///
    /// # Errors
    ///
    /// Returns [`ConsistencyError`] if the grid contradicts itself.
    #[inline]
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        self.candidates.check_consistency()
    }

    /// Extracts the fixed values as a [`DigitGrid`].
    ///
    /// This mirrors [`CandidateGrid::to_digit_grid`].
    #[inline]
    #[must_use]
    pub fn to_digit_grid(&self) -> DigitGrid {
        self.candidates.to_digit_grid()
    }
}
