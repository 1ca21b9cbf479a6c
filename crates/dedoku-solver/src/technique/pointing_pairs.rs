use dedoku_core::{Digit, Line, Unit};

use crate::{
    SolveGrid, SolverError,
    technique::{BoxedTechnique, Technique},
};

const NAME: &str = "Pointing Pairs";

/// Eliminates a digit along a line that a sector points at.
///
/// If all occurrences of a digit within a sector (two or three of them) sit
/// on a single row or column, one of those cells must hold the digit, so the
/// digit cannot appear elsewhere on that line outside the sector.
///
/// For each (sector, digit) the three rows are checked top to bottom, then
/// the three columns left to right, and the first line containing all the
/// occurrences wins; remaining configurations are picked up on a later pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct PointingPairs;

impl PointingPairs {
    /// Creates a new `PointingPairs` technique.
    #[must_use]
    pub const fn new() -> Self {
        PointingPairs
    }
}

impl Technique for PointingPairs {
    fn name(&self) -> &'static str {
        NAME
    }

    fn weight(&self) -> u32 {
        5
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut SolveGrid) -> Result<bool, SolverError> {
        let mut changed = false;
        for sector_index in 0..9u8 {
            let sector = Unit::Sector {
                index: sector_index,
            };
            let x0 = (sector_index % 3) * 3;
            let y0 = (sector_index / 3) * 3;
            let lines = [
                Line::Row { y: y0 },
                Line::Row { y: y0 + 1 },
                Line::Row { y: y0 + 2 },
                Line::Column { x: x0 },
                Line::Column { x: x0 + 1 },
                Line::Column { x: x0 + 2 },
            ];

            for digit in Digit::ALL {
                let in_sector = grid.candidate_cells(digit) & sector.cells();
                let count = in_sector.len();
                if count != 2 && count != 3 {
                    continue;
                }
                for line in lines {
                    if !in_sector.is_subset(line.cells()) {
                        continue;
                    }
                    let outside =
                        grid.candidate_cells(digit) & line.cells() & !sector.cells();
                    let label = if count == 2 {
                        "Pointing Pair"
                    } else {
                        "Pointing Triple"
                    };
                    for pos in outside {
                        let before = grid.candidates_at(pos);
                        grid.eliminate(pos, digit);
                        let after = grid.candidates_at(pos);
                        grid.note(|| {
                            format!(
                                "{label}: reduced {pos} from {before} to {after} using {sector}"
                            )
                        });
                        changed = true;
                    }
                    // First matching line wins for this (sector, digit).
                    break;
                }
            }
        }
        Ok(changed)
    }
}
