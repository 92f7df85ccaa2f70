//! Pairwise win probabilities, used purely for player guidance.

use super::{DiceCatalog, Die, FACES};

impl DiceCatalog {
    /// Probability that the die at `a` beats the die at `b`, rounded to 4
    /// decimal places.
    ///
    /// `None` when `a == b` (self-comparison is not applicable) or either
    /// index is out of range. Ties count toward neither side, so the
    /// probabilities for `(a, b)` and `(b, a)` need not sum to 1.
    pub fn win_probability(&self, a: usize, b: usize) -> Option<f64> {
        if a == b {
            return None;
        }
        Some(pairwise(self.get(a)?, self.get(b)?))
    }

    /// Square win-probability matrix indexed by die position.
    ///
    /// `matrix[i][j]` is the probability that die `i` beats die `j`; the
    /// diagonal is `None`.
    pub fn probability_matrix(&self) -> Vec<Vec<Option<f64>>> {
        (0..self.len())
            .map(|i| (0..self.len()).map(|j| self.win_probability(i, j)).collect())
            .collect()
    }
}

/// Wins for `a` over all 36 ordered face pairs
fn pairwise(a: &Die, b: &Die) -> f64 {
    let wins = a
        .faces()
        .iter()
        .flat_map(|&x| b.faces().iter().map(move |&y| x > y))
        .filter(|&won| won)
        .count();
    round4(wins as f64 / (FACES * FACES) as f64)
}

fn round4(p: f64) -> f64 {
    (p * 10_000.0).round() / 10_000.0
}
