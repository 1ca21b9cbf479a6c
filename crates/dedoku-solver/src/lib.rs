//! Deductive solving engine for 9×9 sudoku.
//!
//! The engine mimics human logical solving: an ordered list of technique
//! functions (solo/hidden candidates through X-Wing, chains, and uniqueness
//! deductions) inspects and mutates a shared candidate grid, driven by a
//! strict-priority loop that restarts from the cheapest technique after every
//! successful deduction. There is no guessing and no backtracking; puzzles
//! beyond the implemented techniques are reported as exhausted rather than
//! brute-forced.

pub use self::{
    error::SolverError,
    move_log::MoveLog,
    solve_grid::SolveGrid,
    solver::{SolveReport, SolveStatus, StrategicSolver},
    stats::{SolveStats, TechniqueUsage},
};

mod conjugate;
mod error;
mod move_log;
mod solve_grid;
mod solver;
mod stats;
pub mod technique;
pub mod testing;
