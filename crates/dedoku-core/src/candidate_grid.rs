//! The candidate store mutated by solving techniques.

use crate::{CellSet, Digit, DigitGrid, DigitSet, Position, Unit};

/// A contradiction found in the grid state.
///
/// Either outcome means the puzzle (or an earlier deduction) is wrong; the
/// solve stops and reports an error status rather than continuing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConsistencyError {
    /// A fixed digit appears more than once in a unit.
    #[display("digit {digit} appears more than once in {unit}")]
    DuplicateDigit {
        /// The duplicated digit.
        digit: Digit,
        /// The unit containing the duplicate.
        unit: Unit,
    },
    /// An unfixed cell has no remaining candidates.
    #[display("cell {position} has no remaining candidates")]
    EmptyCell {
        /// The cell with an empty candidate set.
        position: Position,
    },
}

/// Cell values and per-cell candidate sets for one solve.
///
/// Stored as nine per-digit bitboards plus a mask of fixed cells, so a
/// question like "where can 5 still go in row 3" is a single AND. The grid
/// exclusively owns all cell state; techniques receive `&mut CandidateGrid`
/// and never hold references to individual cells.
///
/// Propagation is push-only: [`place`](Self::place) removes the placed digit
/// from the candidate sets of all unfixed peers, and nothing else propagates
/// automatically. Deductions beyond that are the techniques' job.
///
/// # Examples
///
/// ```
/// use dedoku_core::{CandidateGrid, Digit, Position};
///
/// let mut grid = CandidateGrid::new();
/// grid.place(Position::new(0, 0), Digit::D5);
///
/// // 5 is no longer a candidate anywhere in row 1, column 1, or sector 1.
/// assert!(!grid.candidates_at(Position::new(8, 0)).contains(Digit::D5));
/// assert!(!grid.candidates_at(Position::new(0, 8)).contains(Digit::D5));
/// assert!(!grid.candidates_at(Position::new(2, 2)).contains(Digit::D5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateGrid {
    /// `digits[d]`: cells where digit `d+1` is still possible: a candidate
    /// in unfixed cells, the placed value in fixed ones.
    digits: [CellSet; 9],
    /// Cells whose value is fixed.
    fixed: CellSet,
}

impl CandidateGrid {
    /// Creates a grid with every digit possible in every cell.
    #[must_use]
    pub fn new() -> Self {
        Self {
            digits: [CellSet::FULL; 9],
            fixed: CellSet::EMPTY,
        }
    }

    /// Builds the candidate store for a puzzle: every given is placed (and
    /// propagated to its peers), every blank cell keeps the digits not yet
    /// excluded by its row, column, and sector.
    #[must_use]
    pub fn from_digit_grid(grid: &DigitGrid) -> Self {
        let mut candidates = Self::new();
        for index in 0..81 {
            let pos = Position::from_index(index);
            if let Some(digit) = grid.get(pos) {
                candidates.place(pos, digit);
            }
        }
        candidates
    }

    /// Returns `true` if the cell's value is fixed.
    #[must_use]
    pub fn is_fixed(&self, pos: Position) -> bool {
        self.fixed.contains(pos)
    }

    /// Returns the fixed value of a cell, if any.
    #[must_use]
    pub fn value_at(&self, pos: Position) -> Option<Digit> {
        if !self.fixed.contains(pos) {
            return None;
        }
        Digit::ALL
            .into_iter()
            .find(|digit| self.digits[digit.index()].contains(pos))
    }

    /// Returns the candidate set of an unfixed cell.
    ///
    /// Fixed cells have no candidate set; this returns the empty set for
    /// them, so callers that care must check [`is_fixed`](Self::is_fixed)
    /// first.
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        if self.fixed.contains(pos) {
            return DigitSet::EMPTY;
        }
        Digit::ALL
            .into_iter()
            .filter(|digit| self.digits[digit.index()].contains(pos))
            .collect()
    }

    /// Returns the cells where `digit` remains a candidate (fixed cells
    /// excluded).
    #[must_use]
    pub fn candidate_cells(&self, digit: Digit) -> CellSet {
        self.digits[digit.index()] & !self.fixed
    }

    /// Returns the cells fixed to `digit`.
    #[must_use]
    pub fn fixed_cells_of(&self, digit: Digit) -> CellSet {
        self.digits[digit.index()] & self.fixed
    }

    /// Returns the mask of all fixed cells.
    #[must_use]
    pub fn fixed_cells(&self) -> CellSet {
        self.fixed
    }

    /// Returns the mask of all unfixed cells.
    #[must_use]
    pub fn unfixed_cells(&self) -> CellSet {
        !self.fixed
    }

    /// Fixes a cell to `digit`, clears its other candidates, and removes the
    /// digit from the candidate sets of all unfixed peers. This is the sole
    /// propagation mechanism.
    ///
    /// Returns `false` without touching anything if the cell is already
    /// fixed.
    pub fn place(&mut self, pos: Position, digit: Digit) -> bool {
        if self.fixed.contains(pos) {
            return false;
        }
        for other in Digit::ALL {
            if other != digit {
                self.digits[other.index()].remove(pos);
            }
        }
        self.digits[digit.index()].insert(pos);
        self.fixed.insert(pos);

        let peers = CellSet::peers(pos) & !self.fixed;
        self.digits[digit.index()] &= !peers;
        true
    }

    /// Removes `digit` from the candidates of an unfixed cell.
    ///
    /// Returns `true` if the candidate was present.
    pub fn eliminate(&mut self, pos: Position, digit: Digit) -> bool {
        if self.fixed.contains(pos) {
            return false;
        }
        self.digits[digit.index()].remove(pos)
    }

    /// Removes `digit` from the candidates of every unfixed cell in `cells`.
    ///
    /// Returns `true` if any candidate was removed.
    pub fn eliminate_in(&mut self, cells: CellSet, digit: Digit) -> bool {
        let targets = cells & self.candidate_cells(digit);
        self.digits[digit.index()] &= !targets;
        !targets.is_empty()
    }

    /// Returns `true` if every cell has a fixed value.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.fixed == CellSet::FULL
    }

    /// Validates that no unit holds a duplicate fixed digit and no unfixed
    /// cell has run out of candidates.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConsistencyError`] found.
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        for digit in Digit::ALL {
            let fixed = self.fixed_cells_of(digit);
            if fixed.len() < 2 {
                continue;
            }
            for unit in Unit::ALL {
                if (fixed & unit.cells()).len() > 1 {
                    return Err(ConsistencyError::DuplicateDigit { digit, unit });
                }
            }
        }

        let mut covered = self.fixed;
        for digit in Digit::ALL {
            covered |= self.candidate_cells(digit);
        }
        if let Some(position) = (!covered).iter().next() {
            return Err(ConsistencyError::EmptyCell { position });
        }
        Ok(())
    }

    /// Extracts the fixed values as a [`DigitGrid`]; unfixed cells are blank.
    #[must_use]
    pub fn to_digit_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in self.fixed {
            grid.set(pos, self.value_at(pos));
        }
        grid
    }
}

impl Default for CandidateGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&DigitGrid> for CandidateGrid {
    fn from(grid: &DigitGrid) -> Self {
        Self::from_digit_grid(grid)
    }
}
