//! Batch ingestion and aggregate statistics.
//!
//! A batch file is CSV-shaped: one puzzle per line as an 81-character grid
//! string, optionally followed by a comma and the expected solution string.
//! Malformed lines are skipped with a warning; one bad puzzle never aborts
//! the batch.

use std::fmt::{self, Display};

use dedoku_core::DigitGrid;
use dedoku_solver::{SolveReport, SolveStatus, StrategicSolver};
use rayon::prelude::*;

/// One puzzle of a batch, with its optional expected solution.
#[derive(Debug, Clone)]
pub struct TestCase {
    /// 1-based line number in the batch file.
    pub number: usize,
    /// The puzzle to solve.
    pub puzzle: DigitGrid,
    /// The expected solution, when the file provides one.
    pub solution: Option<DigitGrid>,
}

/// Parses batch file contents, skipping malformed lines with a warning.
pub fn parse_batch(text: &str) -> Vec<TestCase> {
    let mut cases = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let number = index + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split(',');
        let Some(grid_field) = fields.next() else {
            continue;
        };
        let puzzle = match grid_field.trim().parse::<DigitGrid>() {
            Ok(puzzle) => puzzle,
            Err(err) => {
                log::warn!("line {number}: skipping puzzle: {err}");
                continue;
            }
        };
        let solution = match fields.next() {
            Some(solution_field) => match solution_field.trim().parse::<DigitGrid>() {
                Ok(solution) => Some(solution),
                Err(err) => {
                    log::warn!("line {number}: skipping puzzle, bad solution: {err}");
                    continue;
                }
            },
            None => None,
        };
        cases.push(TestCase {
            number,
            puzzle,
            solution,
        });
    }
    cases
}

/// The result of solving one batch entry.
#[derive(Debug)]
pub struct BatchOutcome {
    /// 1-based line number of the test case.
    pub number: usize,
    /// Whether the final grid matched the provided solution, if one was
    /// given.
    pub passed: Option<bool>,
    /// The full solve report.
    pub report: SolveReport,
}

/// Aggregate statistics over a finished batch.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Number of puzzles attempted.
    pub total: usize,
    /// Puzzles solved completely.
    pub solved: usize,
    /// Puzzles the engine ran out of techniques on.
    pub exhausted: usize,
    /// Puzzles that reached a contradiction.
    pub errors: usize,
    /// Outcomes matching their provided solution.
    pub passed: usize,
    /// Outcomes contradicting their provided solution.
    pub failed: usize,
    /// Sum of difficulty scores, for averaging.
    difficulty_total: u64,
    /// Sum of clue counts, for averaging.
    clue_total: usize,
}

impl BatchSummary {
    fn add(&mut self, outcome: &BatchOutcome) {
        self.total += 1;
        match outcome.report.status {
            SolveStatus::Solved => self.solved += 1,
            SolveStatus::Exhausted => self.exhausted += 1,
            SolveStatus::Error => self.errors += 1,
        }
        match outcome.passed {
            Some(true) => self.passed += 1,
            Some(false) => self.failed += 1,
            None => {}
        }
        self.difficulty_total += outcome.report.stats.difficulty();
        self.clue_total += outcome.report.stats.clues();
    }

    /// Returns the mean difficulty score across the batch.
    #[must_use]
    pub fn average_difficulty(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        #[expect(clippy::cast_precision_loss)]
        let average = self.difficulty_total as f64 / self.total as f64;
        average
    }

    /// Returns the mean clue count across the batch.
    #[must_use]
    pub fn average_clues(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        #[expect(clippy::cast_precision_loss)]
        let average = self.clue_total as f64 / self.total as f64;
        average
    }

    #[expect(clippy::cast_precision_loss)]
    fn rate(&self, count: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * count as f64 / self.total as f64
    }
}

impl Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[ Tests ]")?;
        writeln!(
            f,
            "Solved:    {} out of {} tests. ({:.1}%)",
            self.solved,
            self.total,
            self.rate(self.solved)
        )?;
        writeln!(
            f,
            "Exhausted: {} out of {} tests. ({:.1}%)",
            self.exhausted,
            self.total,
            self.rate(self.exhausted)
        )?;
        writeln!(
            f,
            "Error in:  {} out of {} tests. ({:.1}%)",
            self.errors,
            self.total,
            self.rate(self.errors)
        )?;
        if self.passed + self.failed > 0 {
            writeln!(
                f,
                "Passed:    {} out of {} checked solutions.",
                self.passed,
                self.passed + self.failed
            )?;
        }
        writeln!(f)?;
        writeln!(f, "[ Stats ]")?;
        writeln!(f, "Average Difficulty: {:.0}", self.average_difficulty())?;
        write!(f, "Average Clues:      {:.0}", self.average_clues())
    }
}

/// Solves every case and aggregates the outcomes.
///
/// Puzzles are independent (each owns its grid), so the batch fans out
/// across threads; outcomes are reported in file order regardless.
pub fn run_batch(
    solver: &StrategicSolver,
    cases: Vec<TestCase>,
    explain: bool,
) -> (Vec<BatchOutcome>, BatchSummary) {
    let mut outcomes: Vec<BatchOutcome> = cases
        .into_par_iter()
        .map(|case| {
            let report = if explain {
                solver.solve_explained(&case.puzzle)
            } else {
                solver.solve(&case.puzzle)
            };
            let passed = case
                .solution
                .map(|solution| report.status.is_solved() && report.grid == solution);
            BatchOutcome {
                number: case.number,
                passed,
                report,
            }
        })
        .collect();
    outcomes.sort_by_key(|outcome| outcome.number);

    let mut summary = BatchSummary::default();
    for outcome in &outcomes {
        summary.add(outcome);
    }
    (outcomes, summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EASY: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    const EASY_SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_parse_batch_skips_malformed_lines() {
        let text = format!("{EASY},{EASY_SOLUTION}\nnot-a-grid\n\n{EASY}\n");
        let cases = parse_batch(&text);
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].number, 1);
        assert!(cases[0].solution.is_some());
        assert_eq!(cases[1].number, 4);
        assert!(cases[1].solution.is_none());
    }

    #[test]
    fn test_run_batch_checks_solutions() {
        let solver = StrategicSolver::with_all_techniques();
        let text = format!("{EASY},{EASY_SOLUTION}");
        let (outcomes, summary) = run_batch(&solver, parse_batch(&text), false);

        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].passed, Some(true));
        assert_eq!(summary.total, 1);
        assert_eq!(summary.solved, 1);
        assert_eq!(summary.passed, 1);
        assert!(summary.average_clues() > 29.0);
    }

    #[test]
    fn test_summary_counts_statuses() {
        let solver = StrategicSolver::with_all_techniques();
        // A solvable puzzle, an empty grid (exhausts), and a contradiction.
        let duplicate =
            "550070000600195000098000060800060003400803001700020006060000280000419005000080079";
        let text = format!("{EASY}\n{}\n{duplicate}\n", "0".repeat(81));
        let (outcomes, summary) = run_batch(&solver, parse_batch(&text), false);

        assert_eq!(outcomes.len(), 3);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.solved, 1);
        assert_eq!(summary.exhausted, 1);
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.passed + summary.failed, 0);
    }

    #[test]
    fn test_empty_batch_has_zero_rates() {
        let summary = BatchSummary::default();
        assert_eq!(summary.average_difficulty(), 0.0);
        assert_eq!(summary.average_clues(), 0.0);
        let rendered = format!("{summary}");
        assert!(rendered.contains("0 out of 0"));
    }
}
