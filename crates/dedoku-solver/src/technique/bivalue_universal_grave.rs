use dedoku_core::{CellSet, Position};

use crate::{
    SolveGrid, SolverError,
    technique::{BoxedTechnique, Technique},
};

const NAME: &str = "Bivalue Universal Grave";

/// Resolves the BUG+1 uniqueness pattern.
///
/// If every unsolved cell held exactly two candidates and every candidate
/// appeared exactly twice per unit, the remaining deductions would be a
/// perfect two-way symmetry: the grid would have two solutions. A well-posed
/// puzzle cannot reach that state, so when all unsolved cells are bivalue
/// except a single trivalue cell, the extra candidate (the one occurring
/// three times in each of the cell's units) must be the placed value.
///
/// Only fires on an exact BUG+1 shape; anything else reports no progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct BivalueUniversalGrave;

impl BivalueUniversalGrave {
    /// Creates a new `BivalueUniversalGrave` technique.
    #[must_use]
    pub const fn new() -> Self {
        BivalueUniversalGrave
    }

    /// Finds the sole trivalue cell of a would-be BUG grid.
    fn trivalue_cell(grid: &SolveGrid) -> Option<Position> {
        let mut trivalue = None;
        for pos in grid.unfixed_cells() {
            match grid.candidates_at(pos).len() {
                2 => {}
                3 if trivalue.is_none() => trivalue = Some(pos),
                _ => return None,
            }
        }
        trivalue
    }
}

impl Technique for BivalueUniversalGrave {
    fn name(&self) -> &'static str {
        NAME
    }

    fn weight(&self) -> u32 {
        15
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut SolveGrid) -> Result<bool, SolverError> {
        let Some(pos) = Self::trivalue_cell(grid) else {
            return Ok(false);
        };

        let row = CellSet::ROWS[pos.y() as usize];
        let column = CellSet::COLUMNS[pos.x() as usize];
        let sector = CellSet::SECTORS[pos.sector() as usize];
        for digit in grid.candidates_at(pos) {
            let cells = grid.candidate_cells(digit);
            if (cells & row).len() == 3
                && (cells & column).len() == 3
                && (cells & sector).len() == 3
            {
                grid.place(pos, digit);
                grid.note(|| {
                    format!(
                        "{NAME}: {pos} must be {digit}, any other value would leave the grid without a unique solution"
                    )
                });
                return Ok(true);
            }
        }
        Ok(false)
    }
}
