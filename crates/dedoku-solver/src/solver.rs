//! The strategic solver driver.

use dedoku_core::DigitGrid;

use crate::{
    MoveLog, SolveGrid, SolveStats, SolverError,
    technique::{self, BoxedTechnique},
};

/// Terminal outcome of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum SolveStatus {
    /// Every cell was fixed.
    #[display("SOLVED")]
    Solved,
    /// No technique could make further progress; the puzzle needs a
    /// technique beyond the implemented set (or has no solution).
    #[display("EXHAUSTED")]
    Exhausted,
    /// The grid contradicted itself: bad givens or an unsound earlier state.
    #[display("ERROR")]
    Error,
}

/// Everything a caller learns from one solve.
#[derive(Debug)]
pub struct SolveReport {
    /// Terminal status of the solve.
    pub status: SolveStatus,
    /// The contradiction behind an [`SolveStatus::Error`] outcome, if any.
    pub error: Option<SolverError>,
    /// Move counts, technique usage, clue count, difficulty.
    pub stats: SolveStats,
    /// Move explanations; empty unless explanations were requested.
    pub log: MoveLog,
    /// The final grid: fully filled when solved, partial otherwise.
    pub grid: DigitGrid,
}

/// The fixed-priority technique scheduler.
///
/// Each iteration checks the terminal conditions, then offers the grid to
/// every technique in priority order. The first technique that makes progress
/// ends the iteration, so the scan always restarts from the cheapest
/// technique: an expensive deduction is only attempted when everything
/// simpler is out of moves, and any single elimination re-opens the simple
/// end of the list.
///
/// # Examples
///
/// ```
/// use dedoku_solver::{SolveStatus, StrategicSolver};
///
/// let solver = StrategicSolver::with_all_techniques();
/// let puzzle = "53__7____6__195____98____6_8___6___34__8_3__17___2___6_6____28____419__5____8__79"
///     .parse()?;
/// let report = solver.solve(&puzzle);
/// assert_eq!(report.status, SolveStatus::Solved);
/// # Ok::<(), dedoku_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone)]
pub struct StrategicSolver {
    techniques: Vec<BoxedTechnique>,
}

impl StrategicSolver {
    /// Creates a solver with a custom technique list, tried in order.
    #[must_use]
    pub fn new(techniques: Vec<BoxedTechnique>) -> Self {
        Self { techniques }
    }

    /// Creates a solver with every implemented technique, cheapest first.
    #[must_use]
    pub fn with_all_techniques() -> Self {
        Self::new(technique::all_techniques())
    }

    /// Returns the configured techniques in priority order.
    ///
    /// The slice defines the index mapping of
    /// [`SolveStats::usage`](crate::SolveStats::usage).
    #[must_use]
    pub fn techniques(&self) -> &[BoxedTechnique] {
        &self.techniques
    }

    /// Creates a statistics object aligned with this solver's technique
    /// order.
    #[must_use]
    pub fn new_stats(&self, clues: usize) -> SolveStats {
        SolveStats::new(&self.techniques, clues)
    }

    /// Solves a puzzle without recording move explanations.
    #[must_use]
    pub fn solve(&self, puzzle: &DigitGrid) -> SolveReport {
        self.solve_with_log(puzzle, false)
    }

    /// Solves a puzzle, recording a human-readable explanation per move.
    #[must_use]
    pub fn solve_explained(&self, puzzle: &DigitGrid) -> SolveReport {
        self.solve_with_log(puzzle, true)
    }

    fn solve_with_log(&self, puzzle: &DigitGrid, explain: bool) -> SolveReport {
        let mut grid = SolveGrid::from_puzzle(puzzle, explain);
        let mut stats = self.new_stats(puzzle.given_count());
        let (status, error) = self.run(&mut grid, &mut stats);
        let final_grid = grid.to_digit_grid();
        let (_, log) = grid.into_parts();
        SolveReport {
            status,
            error,
            stats,
            log,
            grid: final_grid,
        }
    }

    /// Runs the solve loop on prepared solver state.
    ///
    /// Exposed separately from [`solve`](Self::solve) so callers can start
    /// from a hand-built candidate state.
    pub fn run(
        &self,
        grid: &mut SolveGrid,
        stats: &mut SolveStats,
    ) -> (SolveStatus, Option<SolverError>) {
        // Every successful iteration fixes a cell or removes one of the 729
        // cell-candidates, so the cap is unreachable for sound techniques; it
        // bounds the loop if a technique misreports progress.
        let max_iterations = 81 * 9 * self.techniques.len();
        for _ in 0..max_iterations {
            if grid.is_filled() {
                return (SolveStatus::Solved, None);
            }
            if let Err(error) = grid.check_consistency() {
                return (SolveStatus::Error, Some(error.into()));
            }

            let mut progressed = false;
            for (index, technique) in self.techniques.iter().enumerate() {
                match technique.apply(grid) {
                    Ok(true) => {
                        stats.record(index);
                        progressed = true;
                        break;
                    }
                    Ok(false) => {}
                    Err(error) => return (SolveStatus::Error, Some(error)),
                }
            }
            if !progressed {
                return (SolveStatus::Exhausted, None);
            }
        }
        (SolveStatus::Exhausted, None)
    }
}

impl Default for StrategicSolver {
    fn default() -> Self {
        Self::with_all_techniques()
    }
}

#[cfg(test)]
mod tests {
    use dedoku_core::{CandidateGrid, Digit, Position};

    use super::*;
    use crate::technique::{
        BivalueUniversalGrave, BoxLineReduction, HiddenCandidate, PointingPairs, SinglesChain,
        SoloCandidate, SubsetCover,
    };

    const EASY: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    const EASY_SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_easy_puzzle_is_solved_by_singles() {
        let solver = StrategicSolver::with_all_techniques();
        let report = solver.solve(&EASY.parse().unwrap());

        assert_eq!(report.status, SolveStatus::Solved);
        assert_eq!(report.grid.to_line_string(), EASY_SOLUTION);
        assert_eq!(report.stats.clues(), 30);
        assert!(report.stats.has_progress());

        // An easy puzzle never needs the expensive end of the list.
        for name in ["X-Wing", "Singles Chain", "Bivalue Universal Grave"] {
            assert_eq!(report.stats.usage_of(name).unwrap().moves(), 0);
        }
    }

    #[test]
    fn test_solved_input_reports_zero_moves() {
        let solver = StrategicSolver::with_all_techniques();
        let report = solver.solve(&EASY_SOLUTION.parse().unwrap());

        assert_eq!(report.status, SolveStatus::Solved);
        assert_eq!(report.stats.moves(), 0);
        assert_eq!(report.stats.clues(), 81);
        assert_eq!(report.stats.difficulty(), 0);
    }

    #[test]
    fn test_duplicate_given_reports_error_without_moves() {
        // Two 5s in the first row.
        let puzzle =
            "550070000600195000098000060800060003400803001700020006060000280000419005000080079";
        let solver = StrategicSolver::with_all_techniques();
        let report = solver.solve(&puzzle.parse().unwrap());

        assert_eq!(report.status, SolveStatus::Error);
        assert!(report.error.is_some());
        assert_eq!(report.stats.moves(), 0);
    }

    #[test]
    fn test_blank_grid_exhausts() {
        let solver = StrategicSolver::with_all_techniques();
        let report = solver.solve(&"0".repeat(81).parse().unwrap());

        assert_eq!(report.status, SolveStatus::Exhausted);
        assert_eq!(report.stats.moves(), 0);
        assert_eq!(report.stats.clues(), 0);
    }

    #[test]
    fn test_solved_grid_round_trips_through_candidates() {
        let solver = StrategicSolver::with_all_techniques();
        let report = solver.solve(&EASY.parse().unwrap());
        assert_eq!(report.status, SolveStatus::Solved);

        // Recomputing candidates from the final fixed values leaves no
        // unsolved cell.
        let recomputed = CandidateGrid::from_digit_grid(&report.grid);
        assert!(recomputed.is_filled());
        assert!(recomputed.check_consistency().is_ok());
    }

    #[test]
    fn test_explained_solve_logs_moves() {
        let solver = StrategicSolver::with_all_techniques();
        let report = solver.solve_explained(&EASY.parse().unwrap());
        assert_eq!(report.status, SolveStatus::Solved);
        assert!(!report.log.entries().is_empty());

        let silent = solver.solve(&EASY.parse().unwrap());
        assert!(silent.log.entries().is_empty());
    }

    /// Candidate state where only an X-Wing can make the first move: digit 1
    /// on rows 1 and 5 is confined to columns 2 and 8.
    fn x_wing_only_state() -> SolveGrid {
        let mut grid = CandidateGrid::new();
        for y in [0, 4] {
            for pos in Position::ROWS[y] {
                if pos.x() != 1 && pos.x() != 7 {
                    grid.eliminate(pos, Digit::D1);
                }
            }
        }
        SolveGrid::from(grid)
    }

    fn techniques_without_x_wing() -> Vec<BoxedTechnique> {
        vec![
            Box::new(SoloCandidate::new()),
            Box::new(HiddenCandidate::new()),
            Box::new(SubsetCover::new()),
            Box::new(PointingPairs::new()),
            Box::new(BoxLineReduction::new()),
            Box::new(SinglesChain::new()),
            Box::new(BivalueUniversalGrave::new()),
        ]
    }

    #[test]
    fn test_x_wing_state_progresses_only_with_x_wing() {
        // With the full list the X-Wing fires exactly once, then the search
        // exhausts on the wide-open remainder.
        let solver = StrategicSolver::with_all_techniques();
        let mut grid = x_wing_only_state();
        let mut stats = solver.new_stats(0);
        let (status, error) = solver.run(&mut grid, &mut stats);

        assert_eq!(status, SolveStatus::Exhausted);
        assert!(error.is_none());
        assert_eq!(stats.usage_of("X-Wing").unwrap().moves(), 1);
        assert_eq!(stats.moves(), 1);

        // Without it, the same state is immediately exhausted.
        let reduced = StrategicSolver::new(techniques_without_x_wing());
        let mut grid = x_wing_only_state();
        let mut stats = reduced.new_stats(0);
        let (status, _) = reduced.run(&mut grid, &mut stats);

        assert_eq!(status, SolveStatus::Exhausted);
        assert_eq!(stats.moves(), 0);
    }

    #[test]
    fn test_technique_error_maps_to_error_status() {
        #[derive(Debug, Clone, Copy)]
        struct Failing;

        impl crate::technique::Technique for Failing {
            fn name(&self) -> &'static str {
                "failing"
            }

            fn weight(&self) -> u32 {
                1
            }

            fn clone_box(&self) -> BoxedTechnique {
                Box::new(*self)
            }

            fn apply(&self, grid: &mut SolveGrid) -> Result<bool, SolverError> {
                // Manufacture a contradiction and report it.
                for digit in Digit::ALL {
                    grid.eliminate(Position::new(0, 0), digit);
                }
                grid.check_consistency()?;
                Ok(false)
            }
        }

        let solver = StrategicSolver::new(vec![Box::new(Failing)]);
        let mut grid = SolveGrid::new();
        let mut stats = solver.new_stats(0);
        let (status, error) = solver.run(&mut grid, &mut stats);
        assert_eq!(status, SolveStatus::Error);
        assert!(error.is_some());
    }

    #[test]
    fn test_status_helpers() {
        assert!(SolveStatus::Solved.is_solved());
        assert!(SolveStatus::Exhausted.is_exhausted());
        assert!(SolveStatus::Error.is_error());
    }
}
