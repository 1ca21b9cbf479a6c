use dedoku_core::{Digit, Line};

use crate::{
    SolveGrid, SolverError,
    conjugate::conjugate_pairs,
    technique::{BoxedTechnique, Technique},
};

const NAME: &str = "X-Wing";

/// Eliminates a digit outside a rectangle of two conjugate pairs.
///
/// When two rows each hold exactly two candidate cells for a digit and the
/// pairs share the same two columns, the digit must occupy diagonally
/// opposite corners of that rectangle; every other cell of the two columns
/// loses the digit. The same scan runs over column conjugate pairs to
/// eliminate along rows: two orientations of one routine, selected by the
/// line table rather than by transposing the grid.
#[derive(Debug, Default, Clone, Copy)]
pub struct XWing;

impl XWing {
    /// Creates a new `XWing` technique.
    #[must_use]
    pub const fn new() -> Self {
        XWing
    }

    fn scan(grid: &mut SolveGrid, lines: &[Line; 9]) -> bool {
        let mut changed = false;
        for digit in Digit::ALL {
            let pairs = conjugate_pairs(grid, digit, lines);
            for (i, first) in pairs.iter().enumerate() {
                let offsets = (
                    first.line.offset_of(first.a),
                    first.line.offset_of(first.b),
                );
                for second in &pairs[i + 1..] {
                    if offsets
                        != (
                            second.line.offset_of(second.a),
                            second.line.offset_of(second.b),
                        )
                    {
                        continue;
                    }
                    let cross =
                        first.line.orthogonal(offsets.0).cells() | first.line.orthogonal(offsets.1).cells();
                    let outside = grid.candidate_cells(digit)
                        & cross
                        & !(first.line.cells() | second.line.cells());
                    for pos in outside {
                        let before = grid.candidates_at(pos);
                        grid.eliminate(pos, digit);
                        let after = grid.candidates_at(pos);
                        grid.note(|| {
                            format!(
                                "{NAME}: reduced {pos} from {before} to {after} using {} and {}",
                                first.line, second.line
                            )
                        });
                        changed = true;
                    }
                }
            }
        }
        changed
    }
}

impl Technique for XWing {
    fn name(&self) -> &'static str {
        NAME
    }

    fn weight(&self) -> u32 {
        8
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut SolveGrid) -> Result<bool, SolverError> {
        let mut changed = Self::scan(grid, &Line::ROWS);
        changed |= Self::scan(grid, &Line::COLUMNS);
        Ok(changed)
    }
}
