use dedoku_core::{CellSet, Digit, DigitSet, Position, Unit};
use tinyvec::ArrayVec;

use crate::{
    SolveGrid, SolverError,
    technique::{BoxedTechnique, Technique},
};

const NAME: &str = "Subset Cover";

/// Eliminates candidates covered by naked or hidden pairs and triples.
///
/// Within one unit:
/// - **Naked subset**: N cells whose combined candidates total exactly N
///   digits claim those digits; the digits leave every other cell of the
///   unit.
/// - **Hidden subset**: N digits confined to exactly N cells pin those
///   cells; every other candidate leaves them.
///
/// Both directions run for N = 2 and N = 3 over all 27 units.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubsetCover;

impl SubsetCover {
    /// Creates a new `SubsetCover` technique.
    #[must_use]
    pub const fn new() -> Self {
        SubsetCover
    }

    fn naked_subsets(grid: &mut SolveGrid, unit: Unit) -> bool {
        let unsolved: ArrayVec<[Position; 9]> =
            (unit.cells() & grid.unfixed_cells()).iter().collect();
        let n = unsolved.len();

        let mut changed = false;
        for i in 0..n {
            for j in i + 1..n {
                changed |= Self::cover_naked(grid, unit, &[unsolved[i], unsolved[j]]);
                for k in j + 1..n {
                    changed |=
                        Self::cover_naked(grid, unit, &[unsolved[i], unsolved[j], unsolved[k]]);
                }
            }
        }
        changed
    }

    fn cover_naked(grid: &mut SolveGrid, unit: Unit, members: &[Position]) -> bool {
        let mut union = DigitSet::EMPTY;
        for &pos in members {
            union |= grid.candidates_at(pos);
        }
        if union.len() != members.len() {
            return false;
        }

        let mut others = unit.cells() & grid.unfixed_cells();
        for &pos in members {
            others.remove(pos);
        }

        let label = subset_label("Naked", members.len());
        let mut changed = false;
        for pos in others {
            let before = grid.candidates_at(pos);
            let removed = before & union;
            if removed.is_empty() {
                continue;
            }
            for digit in removed {
                grid.eliminate(pos, digit);
            }
            let after = grid.candidates_at(pos);
            grid.note(|| format!("{label}: reduced {pos} from {before} to {after} in {unit}"));
            changed = true;
        }
        changed
    }

    fn hidden_subsets(grid: &mut SolveGrid, unit: Unit) -> bool {
        let mut changed = false;
        for i in 0..9 {
            for j in i + 1..9 {
                let pair = DigitSet::from_iter([Digit::ALL[i], Digit::ALL[j]]);
                changed |= Self::cover_hidden(grid, unit, pair);
                for k in j + 1..9 {
                    let triple =
                        DigitSet::from_iter([Digit::ALL[i], Digit::ALL[j], Digit::ALL[k]]);
                    changed |= Self::cover_hidden(grid, unit, triple);
                }
            }
        }
        changed
    }

    fn cover_hidden(grid: &mut SolveGrid, unit: Unit, digits: DigitSet) -> bool {
        let mut cover = CellSet::EMPTY;
        for digit in digits {
            let cells = grid.candidate_cells(digit) & unit.cells();
            if cells.is_empty() {
                // Already fixed somewhere in the unit; not part of a subset.
                return false;
            }
            cover |= cells;
        }
        if cover.len() != digits.len() {
            return false;
        }

        let label = subset_label("Hidden", digits.len());
        let mut changed = false;
        for pos in cover {
            let before = grid.candidates_at(pos);
            let removed = before.difference(digits);
            if removed.is_empty() {
                continue;
            }
            for digit in removed {
                grid.eliminate(pos, digit);
            }
            let after = grid.candidates_at(pos);
            grid.note(|| format!("{label}: reduced {pos} from {before} to {after} in {unit}"));
            changed = true;
        }
        changed
    }
}

fn subset_label(kind: &str, size: usize) -> String {
    let noun = if size == 2 { "Pair" } else { "Triple" };
    format!("{kind} {noun}")
}

impl Technique for SubsetCover {
    fn name(&self) -> &'static str {
        NAME
    }

    fn weight(&self) -> u32 {
        4
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut SolveGrid) -> Result<bool, SolverError> {
        let mut changed = false;
        for unit in Unit::ALL {
            changed |= Self::naked_subsets(grid, unit);
            changed |= Self::hidden_subsets(grid, unit);
        }
        Ok(changed)
    }
}
