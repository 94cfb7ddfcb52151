//!
//! Sampling states and emissions from the Model
//!
pub mod history;
pub mod picker;

pub use history::{Emission, History};
pub use picker::{pick_from_cumulative, rng_from_seed};

use super::model::Model;
use super::params::SampleParams;
use crate::error::{HmmError, Result};
use log::{debug, trace, warn};
use rand::prelude::*;

impl Model {
    ///
    /// Generate a sequence of (state, observation) pairs.
    ///
    /// Starting from `param.start` (or a state sampled from the initial
    /// distribution), repeat
    ///
    /// 1. emit the current state with an observation sampled from its emission row
    /// 2. move to the state sampled from its transition row
    ///
    /// and stop once at least `param.min_length` pairs are emitted and the
    /// current (not yet emitted) state is a terminal state.
    ///
    /// There is no upper bound of the length unless `param.max_steps` is
    /// given; if terminal states are unreachable this loops forever.
    ///
    pub fn generate<R: Rng>(&self, rng: &mut R, param: &SampleParams) -> Result<History> {
        if param.min_length == 0 {
            return Err(HmmError::InvalidInput(
                "min_length should be at least 1".to_string(),
            ));
        }
        if let Some(max_steps) = param.max_steps {
            if max_steps < param.min_length {
                return Err(HmmError::InvalidInput(format!(
                    "max_steps={} is less than min_length={}",
                    max_steps, param.min_length
                )));
            }
        }
        let is_terminal = self.terminal_mask(&param.terminals)?;
        let start = match &param.start {
            Some(name) => self.resolve_state(name)?,
            None => pick_from_cumulative(rng, self.initial_cumulative()),
        };
        debug!("generate {} start={}", param, start);

        let mut history = History::new(start);
        let mut now = start;
        while history.len() < param.min_length || !is_terminal[now] {
            if let Some(max_steps) = param.max_steps {
                if history.len() >= max_steps {
                    warn!("no terminal state reached in {} steps", max_steps);
                    return Err(HmmError::Exhausted { steps: max_steps });
                }
            }
            let observation = pick_from_cumulative(rng, self.emission_cumulative(now));
            trace!("iter {} state={} observation={}", history.len(), now, observation);
            history.push(now, observation);
            now = pick_from_cumulative(rng, self.transition_cumulative(now));
        }
        history.set_final_state(now);
        Ok(history)
    }
    ///
    /// `Model::generate` with a fresh `Xoshiro256PlusPlus` seeded by `seed`
    ///
    pub fn generate_with_seed(&self, seed: u64, param: &SampleParams) -> Result<History> {
        let mut rng = rng_from_seed(seed);
        self.generate(&mut rng, param)
    }
    ///
    /// `mask[s]` is true if the generation can stop at state `s`.
    /// No names means every state.
    ///
    fn terminal_mask(&self, names: &[String]) -> Result<Vec<bool>> {
        let n = self.state_count();
        if names.is_empty() {
            return Ok(vec![true; n]);
        }
        let mut mask = vec![false; n];
        for name in names {
            mask[self.resolve_state(name)?] = true;
        }
        Ok(mask)
    }
}
