//! Core grid and candidate-tracking primitives for the dedoku solver.
//!
//! This crate provides the data model shared by the solving techniques:
//! type-safe digits, bitset-backed candidate sets, cell coordinates and
//! cell-set masks, unit (row/column/sector) geometry, the value grid used for
//! puzzle import/export, and the candidate grid that techniques mutate.

pub use self::{
    candidate_grid::{CandidateGrid, ConsistencyError},
    cell_set::CellSet,
    digit::Digit,
    digit_grid::{DigitGrid, ParseGridError},
    digit_set::DigitSet,
    position::Position,
    unit::{Line, Unit},
};

mod candidate_grid;
mod cell_set;
mod digit;
mod digit_grid;
mod digit_set;
mod position;
mod unit;
