//! Sudoku solving techniques.
//!
//! Each technique implements one category of logical deduction over the
//! candidate grid. All of them share the [`Technique`] contract: `apply`
//! attempts the deduction, confines its side effects to the grid (placements
//! and candidate eliminations, narrated into the move log), and reports
//! whether it made progress.

use std::fmt::Debug;

pub use self::{
    bivalue_universal_grave::BivalueUniversalGrave, box_line_reduction::BoxLineReduction,
    hidden_candidate::HiddenCandidate, pointing_pairs::PointingPairs,
    singles_chain::SinglesChain, solo_candidate::SoloCandidate, subset_cover::SubsetCover,
    x_wing::XWing,
};
use crate::{SolveGrid, SolverError};

mod bivalue_universal_grave;
mod box_line_reduction;
mod hidden_candidate;
mod pointing_pairs;
mod singles_chain;
mod solo_candidate;
mod subset_cover;
mod x_wing;

/// A logical solving technique.
///
/// Techniques are stateless; all solve state lives in the [`SolveGrid`] they
/// are applied to.
pub trait Technique: Debug + Send + Sync {
    /// Returns the name of the technique, as used in move explanations and
    /// statistics.
    fn name(&self) -> &'static str;

    /// Returns the difficulty weight of one application of this technique.
    ///
    /// Weights feed the puzzle difficulty score: cheap local deductions score
    /// low, chains and uniqueness arguments score high.
    fn weight(&self) -> u32;

    /// Returns a boxed clone of the technique.
    fn clone_box(&self) -> BoxedTechnique;

    /// Attempts one category of deduction on the grid.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - at least one value was fixed or candidate eliminated
    /// * `Ok(false)` - the technique found nothing to do
    ///
    /// # Errors
    ///
    /// Returns an error if the technique detects an invalid grid state.
    fn apply(&self, grid: &mut SolveGrid) -> Result<bool, SolverError>;
}

/// A boxed technique.
pub type BoxedTechnique = Box<dyn Technique>;

impl Clone for BoxedTechnique {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Returns all techniques in solving priority order, cheapest first.
///
/// The driver scans this list from the top and restarts after every
/// successful application, so a puzzle is always solved with the simplest
/// deductions that suffice.
#[must_use]
pub fn all_techniques() -> Vec<BoxedTechnique> {
    vec![
        Box::new(SoloCandidate::new()),
        Box::new(HiddenCandidate::new()),
        Box::new(SubsetCover::new()),
        Box::new(PointingPairs::new()),
        Box::new(BoxLineReduction::new()),
        Box::new(XWing::new()),
        Box::new(SinglesChain::new()),
        Box::new(BivalueUniversalGrave::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        let techniques = all_techniques();
        let names: Vec<_> = techniques.iter().map(|t| t.name()).collect();
        assert_eq!(
            names,
            [
                "Solo Candidate",
                "Hidden Candidate",
                "Subset Cover",
                "Pointing Pairs",
                "Box/Line Reduction",
                "X-Wing",
                "Singles Chain",
                "Bivalue Universal Grave",
            ]
        );
    }

    #[test]
    fn test_weights_increase_with_complexity() {
        let techniques = all_techniques();
        let weights: Vec<_> = techniques.iter().map(|t| t.weight()).collect();
        for pair in weights.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }
}
