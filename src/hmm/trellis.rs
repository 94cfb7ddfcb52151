//!
//! Result table of the forward algorithm
//!
use crate::prob::Prob;
use crate::utils::pretty_matrix;
use ndarray::{Array2, ArrayView1, ArrayView2};

///
/// `T x n` table where the cell `(t, s)` is the forward value of state `s`
/// after `t+1` emissions.
///
/// * `Trellis<f64>` holds probabilities
/// * `Trellis<Prob>` holds log probabilities
///
#[derive(Debug, Clone, PartialEq)]
pub struct Trellis<T> {
    table: Array2<T>,
}

impl<T: Copy> Trellis<T> {
    pub(crate) fn new(table: Array2<T>) -> Self {
        Trellis { table }
    }
    ///
    /// `(T, n)` = (length of emissions, number of states)
    ///
    pub fn shape(&self) -> (usize, usize) {
        self.table.dim()
    }
    ///
    /// Length of emissions `T`
    ///
    pub fn len(&self) -> usize {
        self.table.nrows()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn n_states(&self) -> usize {
        self.table.ncols()
    }
    ///
    /// Forward values of all states after `t+1` emissions
    ///
    pub fn row(&self, t: usize) -> ArrayView1<T> {
        self.table.row(t)
    }
    pub fn table(&self) -> ArrayView2<T> {
        self.table.view()
    }
    pub fn into_table(self) -> Array2<T> {
        self.table
    }
    ///
    /// Convert into `Vec` of rows
    ///
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.table.rows().into_iter().map(|row| row.to_vec()).collect()
    }
}

impl<T> std::ops::Index<(usize, usize)> for Trellis<T> {
    type Output = T;
    fn index(&self, (t, s): (usize, usize)) -> &T {
        &self.table[[t, s]]
    }
}

impl Trellis<f64> {
    ///
    /// Probability of the whole emissions `P(o[0..T])`, the sum of the last row.
    ///
    pub fn full_prob(&self) -> f64 {
        self.table.rows().into_iter().last().map_or(0.0, |row| row.sum())
    }
}

impl Trellis<Prob> {
    ///
    /// Probability of the whole emissions `P(o[0..T])`, the log-sum of the last row.
    ///
    pub fn full_prob(&self) -> Prob {
        self.table
            .rows()
            .into_iter()
            .last()
            .map_or(Prob::zero(), |row| row.iter().sum())
    }
    ///
    /// Table of `log f_t[s]`
    ///
    pub fn log_values(&self) -> Array2<f64> {
        self.table.mapv(|p| p.to_log_value())
    }
    ///
    /// Convert back into probabilities, underflowing as `forward` does
    ///
    pub fn to_values(&self) -> Trellis<f64> {
        Trellis::new(self.table.mapv(|p| p.to_value()))
    }
}

impl std::fmt::Display for Trellis<f64> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", pretty_matrix(&self.to_rows(), 8, 4))
    }
}

/// Shows the log values
impl std::fmt::Display for Trellis<Prob> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let rows: Vec<Vec<f64>> = self
            .to_rows()
            .into_iter()
            .map(|row| row.into_iter().map(|p| p.to_log_value()).collect())
            .collect();
        write!(f, "{}", pretty_matrix(&rows, 8, 4))
    }
}
