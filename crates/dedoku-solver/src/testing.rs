//! Test utilities for technique implementations.
//!
//! [`TechniqueTester`] tracks a grid's initial and current candidate state so
//! technique tests can apply a technique and assert exactly what changed.
//!
//! # Example
//!
//! ```
//! use dedoku_core::{Digit, Position};
//! use dedoku_solver::{technique::SoloCandidate, testing::TechniqueTester};
//!
//! let mut grid = dedoku_core::CandidateGrid::new();
//! for digit in Digit::ALL {
//!     if digit != Digit::D5 {
//!         grid.eliminate(Position::new(0, 0), digit);
//!     }
//! }
//!
//! TechniqueTester::new(grid)
//!     .apply_once(&SoloCandidate::new())
//!     .assert_placed(Position::new(0, 0), Digit::D5);
//! ```

use std::str::FromStr as _;

use dedoku_core::{Digit, DigitGrid, DigitSet, Position};

use crate::{SolveGrid, technique::Technique};

/// A fluent harness for verifying technique behaviour.
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the caller's source location.
#[derive(Debug)]
pub struct TechniqueTester {
    initial: SolveGrid,
    current: SolveGrid,
}

impl TechniqueTester {
    /// Creates a tester from an initial grid state.
    pub fn new<T>(initial: T) -> Self
    where
        T: Into<SolveGrid>,
    {
        let initial = initial.into();
        let current = initial.clone();
        Self { initial, current }
    }

    /// Creates a tester from a grid string (see [`DigitGrid::from_str`]).
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed as a grid.
    #[track_caller]
    pub fn from_str(s: &str) -> Self {
        let grid = DigitGrid::from_str(s).unwrap();
        Self::new(grid)
    }

    /// Applies the technique once.
    ///
    /// # Panics
    ///
    /// Panics if the technique returns an error.
    #[track_caller]
    pub fn apply_once<T>(mut self, technique: &T) -> Self
    where
        T: Technique,
    {
        technique.apply(&mut self.current).unwrap();
        self
    }

    /// Applies the technique repeatedly until it reports no progress.
    ///
    /// # Panics
    ///
    /// Panics if the technique returns an error.
    #[track_caller]
    pub fn apply_until_stuck<T>(mut self, technique: &T) -> Self
    where
        T: Technique,
    {
        while technique.apply(&mut self.current).unwrap() {}
        self
    }

    /// Asserts that one more application of `technique` makes no progress.
    ///
    /// # Panics
    ///
    /// Panics if the technique reports progress or returns an error.
    #[track_caller]
    pub fn assert_stuck<T>(mut self, technique: &T) -> Self
    where
        T: Technique,
    {
        let changed = technique.apply(&mut self.current).unwrap();
        assert!(
            !changed,
            "Expected {} to make no further progress",
            technique.name()
        );
        self
    }

    /// Asserts that a cell went from undecided to fixed at `digit`.
    ///
    /// # Panics
    ///
    /// Panics if the cell was already decided or is not fixed to `digit`.
    #[track_caller]
    pub fn assert_placed(self, pos: Position, digit: Digit) -> Self {
        let initial = self.initial.candidates_at(pos);
        assert!(
            !self.initial.is_fixed(pos) && initial.len() > 1,
            "Expected {pos} to start undecided, but candidates were {initial}"
        );
        let value = self.current.value_at(pos);
        assert_eq!(
            value,
            Some(digit),
            "Expected {pos} to be fixed to {digit}, but it holds {value:?}"
        );
        self
    }

    /// Asserts that all the given candidates were removed from a cell.
    ///
    /// Other candidates may have been removed as well.
    ///
    /// # Panics
    ///
    /// Panics if a digit was not initially present or is still present.
    #[track_caller]
    pub fn assert_removed_includes<C>(self, pos: Position, digits: C) -> Self
    where
        C: IntoIterator<Item = Digit>,
    {
        let digits = DigitSet::from_iter(digits);
        let initial = self.initial.candidates_at(pos);
        let current = self.current.candidates_at(pos);
        assert_eq!(
            initial & digits,
            digits,
            "Expected initial candidates at {pos} to include {digits}, but they were {initial}"
        );
        assert!(
            (current & digits).is_empty(),
            "Expected all of {digits} removed from {pos}, but {current} remains"
        );
        self
    }

    /// Asserts that exactly the given candidates were removed from a cell.
    ///
    /// # Panics
    ///
    /// Panics if the removed set differs from `digits`.
    #[track_caller]
    pub fn assert_removed_exact<C>(self, pos: Position, digits: C) -> Self
    where
        C: IntoIterator<Item = Digit>,
    {
        let digits = DigitSet::from_iter(digits);
        let initial = self.initial.candidates_at(pos);
        let current = self.current.candidates_at(pos);
        let removed = initial.difference(current);
        assert_eq!(
            removed, digits,
            "Expected exactly {digits} removed from {pos}, but {removed} was (initial {initial}, current {current})"
        );
        self
    }

    /// Asserts that a cell's candidates did not change.
    ///
    /// # Panics
    ///
    /// Panics if the candidates differ from the initial state.
    #[track_caller]
    pub fn assert_no_change(self, pos: Position) -> Self {
        let initial = self.initial.candidates_at(pos);
        let current = self.current.candidates_at(pos);
        assert_eq!(
            initial, current,
            "Expected no change at {pos}, but candidates went from {initial} to {current}"
        );
        self
    }
}
