use crate::algorithm::{AlignKey, SequenceAligner};
use crate::config::AlignmentCosts;
use crate::diff::{Alignment, AlignmentOp};

/// Dense `(|ref|+1) × (|user|+1)` table of minimum alignment costs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl CostMatrix {
    fn build<W: AlignKey>(reference: &[W], user: &[W], costs: &AlignmentCosts) -> Self {
        let rows = reference.len() + 1;
        let cols = user.len() + 1;
        let mut matrix = Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        };

        for i in 1..rows {
            let above = matrix.get(i - 1, 0);
            matrix.set(i, 0, above.saturating_add(costs.deletion));
        }
        for j in 1..cols {
            let left = matrix.get(0, j - 1);
            matrix.set(0, j, left.saturating_add(costs.insertion));
        }

        for i in 1..rows {
            for j in 1..cols {
                let step = diagonal_cost(&reference[i - 1], &user[j - 1], costs);
                let diagonal = matrix.get(i - 1, j - 1).saturating_add(step);
                let deletion = matrix.get(i - 1, j).saturating_add(costs.deletion);
                let insertion = matrix.get(i, j - 1).saturating_add(costs.insertion);
                matrix.set(i, j, diagonal.min(deletion).min(insertion));
            }
        }

        matrix
    }

    /// Cost of aligning the first `i` reference and first `j` user words
    pub fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.cols + j]
    }

    fn set(&mut self, i: usize, j: usize, value: u32) {
        self.cells[i * self.cols + j] = value;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cost of the full alignment
    pub fn total(&self) -> u32 {
        self.get(self.rows - 1, self.cols - 1)
    }
}

fn diagonal_cost<W: AlignKey>(reference: &W, user: &W, costs: &AlignmentCosts) -> u32 {
    if reference.align_key() == user.align_key() {
        costs.match_cost
    } else {
        costs.substitution
    }
}

/// Global word alignment under asymmetric edit costs
///
/// Ties between equally cheap alignments are broken while backtracking in a
/// fixed order: diagonal (match/substitute) first, then deletion, then
/// insertion.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedAligner {
    costs: AlignmentCosts,
}

impl WeightedAligner {
    pub fn new(costs: AlignmentCosts) -> Self {
        Self { costs }
    }

    pub fn costs(&self) -> &AlignmentCosts {
        &self.costs
    }

    /// Fill the cost table without backtracking
    pub fn cost_matrix<W: AlignKey>(&self, reference: &[W], user: &[W]) -> CostMatrix {
        CostMatrix::build(reference, user, &self.costs)
    }

    fn backtrack<W: AlignKey + Clone>(
        &self,
        matrix: &CostMatrix,
        reference: &[W],
        user: &[W],
    ) -> Vec<AlignmentOp<W>> {
        let mut ops = Vec::with_capacity(reference.len() + user.len());
        let mut i = reference.len();
        let mut j = user.len();

        while i > 0 || j > 0 {
            let current = matrix.get(i, j);

            if i > 0 && j > 0 {
                let (r, u) = (&reference[i - 1], &user[j - 1]);
                let step = diagonal_cost(r, u, &self.costs);
                if current == matrix.get(i - 1, j - 1).saturating_add(step) {
                    let (reference, user) = (r.clone(), u.clone());
                    ops.push(if r.align_key() == u.align_key() {
                        AlignmentOp::Match { reference, user }
                    } else {
                        AlignmentOp::Substitute { reference, user }
                    });
                    i -= 1;
                    j -= 1;
                    continue;
                }
            }

            if i > 0
                && (j == 0 || current == matrix.get(i - 1, j).saturating_add(self.costs.deletion))
            {
                ops.push(AlignmentOp::Delete {
                    reference: reference[i - 1].clone(),
                });
                i -= 1;
                continue;
            }

            ops.push(AlignmentOp::Insert {
                user: user[j - 1].clone(),
            });
            j -= 1;
        }

        ops.reverse();
        ops
    }
}

impl SequenceAligner for WeightedAligner {
    fn align<W: AlignKey + Clone>(&self, reference: &[W], user: &[W]) -> Alignment<W> {
        let matrix = self.cost_matrix(reference, user);
        let ops = self.backtrack(&matrix, reference, user);
        let cost = matrix.total();

        tracing::trace!(
            reference_words = reference.len(),
            user_words = user.len(),
            cost,
            steps = ops.len(),
            "alignment computed"
        );

        Alignment::new(ops, cost)
    }
}
