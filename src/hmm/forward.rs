//!
//! Forward algorithm definitions
//!
//! For emissions `o = o[0],...,o[T-1]`
//!
//! ```text
//! f_t[s] = P(emits o[0],...,o[t] and in state s at t)
//!
//! f_0[s] = pi[s] b_s(o[0])
//! f_t[s] = (\sum_{r} f_t-1[r] a(r, s)) b_s(o[t])
//! ```
//!
//! `forward` computes `f` directly with f64, and underflows to 0 for long
//! emissions. `forward_log` computes `log f` instead.
//!
use super::model::Model;
use super::reference::Ref;
use super::trellis::Trellis;
use crate::error::{HmmError, Result};
use crate::prob::{log_sum_series, safe_log, Prob};
use log::debug;
use ndarray::Array2;

impl Model {
    ///
    /// Resolve the emissions into symbol indices.
    /// Symbols outside of the alphabet are `UnknownSymbol` errors.
    ///
    fn to_symbols<'a, I, R>(&self, emissions: I) -> Result<Vec<usize>>
    where
        I: IntoIterator<Item = R>,
        R: Into<Ref<'a>>,
    {
        let symbols = emissions
            .into_iter()
            .map(|emission| {
                let r: Ref = emission.into();
                self.resolve_observation(r)
                    .map_err(|_| HmmError::UnknownSymbol(r.to_string()))
            })
            .collect::<Result<Vec<usize>>>()?;
        if symbols.is_empty() {
            return Err(HmmError::InvalidInput(
                "forward of an empty emission sequence".to_string(),
            ));
        }
        Ok(symbols)
    }
    ///
    /// Run Forward algorithm to the emissions
    ///
    /// Returns the `T x n` trellis whose `(t, s)` cell is
    /// `P(emits o[0..=t] and in state s)`.
    ///
    /// Emissions are symbol names or indices.
    ///
    pub fn forward<'a, I, R>(&self, emissions: I) -> Result<Trellis<f64>>
    where
        I: IntoIterator<Item = R>,
        R: Into<Ref<'a>>,
    {
        let symbols = self.to_symbols(emissions)?;
        let n = self.state_count();
        debug!("forward len={} n_states={}", symbols.len(), n);
        let (pi, a, b) = (self.initial(), self.transition(), self.emission());

        let mut table = Array2::<f64>::zeros((symbols.len(), n));
        for s in 0..n {
            table[[0, s]] = pi[s] * b[[s, symbols[0]]];
        }
        for (t, &o) in symbols.iter().enumerate().skip(1) {
            for s in 0..n {
                let from: f64 = (0..n).map(|r| table[[t - 1, r]] * a[[r, s]]).sum();
                table[[t, s]] = from * b[[s, o]];
            }
        }
        Ok(Trellis::new(table))
    }
    ///
    /// Run Forward algorithm in log space
    ///
    /// ```text
    /// L_0[s] = log pi[s] + log b_s(o[0])
    /// L_t[s] = logsum_{r} (L_t-1[r] + log a(r, s) + log b_s(o[t]))
    /// ```
    ///
    /// where `log 0 = -inf`.
    ///
    pub fn forward_log<'a, I, R>(&self, emissions: I) -> Result<Trellis<Prob>>
    where
        I: IntoIterator<Item = R>,
        R: Into<Ref<'a>>,
    {
        let symbols = self.to_symbols(emissions)?;
        let n = self.state_count();
        debug!("forward_log len={} n_states={}", symbols.len(), n);
        let (pi, a, b) = (self.initial(), self.transition(), self.emission());

        let mut table = Array2::<f64>::zeros((symbols.len(), n));
        for s in 0..n {
            table[[0, s]] = safe_log(pi[s])? + safe_log(b[[s, symbols[0]]])?;
        }
        let mut terms: Vec<f64> = Vec::with_capacity(n);
        for (t, &o) in symbols.iter().enumerate().skip(1) {
            for s in 0..n {
                let log_emit = safe_log(b[[s, o]])?;
                terms.clear();
                for r in 0..n {
                    terms.push(table[[t - 1, r]] + safe_log(a[[r, s]])? + log_emit);
                }
                table[[t, s]] = log_sum_series(&terms)?;
            }
        }
        Ok(Trellis::new(table.mapv(Prob::from_log_prob)))
    }
}
