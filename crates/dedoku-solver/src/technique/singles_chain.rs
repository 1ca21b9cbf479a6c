use dedoku_core::{CellSet, Digit, Line, Unit};

use crate::{
    SolveGrid, SolverError,
    conjugate::{LinkGraph, conjugate_pairs},
    technique::{BoxedTechnique, Technique},
};

const NAME: &str = "Singles Chain";

/// Follows chains of conjugate pairs to force eliminations.
///
/// For one digit, every conjugate pair is a strong link: exactly one of its
/// two cells holds the digit. Chaining the links and 2-coloring each
/// connected component splits its cells into two camps that are all-true or
/// all-false together. Two consequences fall out:
///
/// - a camp whose cells collide inside one unit cannot be the true one, so
///   the digit leaves all of its cells;
/// - a cell (outside the chain) that sees both camps sees the digit wherever
///   it lands, so the digit leaves that cell.
#[derive(Debug, Default, Clone, Copy)]
pub struct SinglesChain;

impl SinglesChain {
    /// Creates a new `SinglesChain` technique.
    #[must_use]
    pub const fn new() -> Self {
        SinglesChain
    }

    /// Returns `true` if two cells of `camp` share a row, column, or sector.
    fn has_unit_collision(camp: CellSet) -> bool {
        Unit::ALL
            .into_iter()
            .any(|unit| (camp & unit.cells()).len() > 1)
    }

    fn eliminate_camp(grid: &mut SolveGrid, digit: Digit, camp: CellSet) -> bool {
        let mut changed = false;
        for pos in camp {
            if grid.eliminate(pos, digit) {
                grid.note(|| {
                    format!("{NAME}: {digit} removed from {pos}, its colour collides in a unit")
                });
                changed = true;
            }
        }
        changed
    }
}

impl Technique for SinglesChain {
    fn name(&self) -> &'static str {
        NAME
    }

    fn weight(&self) -> u32 {
        12
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut SolveGrid) -> Result<bool, SolverError> {
        let mut changed = false;
        for digit in Digit::ALL {
            let mut graph = LinkGraph::new();
            for lines in [&Line::ROWS, &Line::COLUMNS] {
                for pair in conjugate_pairs(grid, digit, lines) {
                    graph.add(pair.a, pair.b);
                }
            }
            if graph.is_empty() {
                continue;
            }

            for (first, second) in graph.color_components() {
                if Self::has_unit_collision(first) {
                    changed |= Self::eliminate_camp(grid, digit, first);
                }
                if Self::has_unit_collision(second) {
                    changed |= Self::eliminate_camp(grid, digit, second);
                }

                let colored = first | second;
                for pos in grid.candidate_cells(digit) & !colored {
                    let peers = CellSet::peers(pos);
                    if !(peers & first).is_empty() && !(peers & second).is_empty() {
                        grid.eliminate(pos, digit);
                        grid.note(|| {
                            format!("{NAME}: {digit} removed from {pos}, it sees both colours of a chain")
                        });
                        changed = true;
                    }
                }
            }
        }
        Ok(changed)
    }
}
