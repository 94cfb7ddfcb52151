//!
//! Struct for storing sampling results
//!
use crate::error::Result;
use crate::hmm::model::Model;
use itertools::Itertools;
use ndarray::{Array1, Array2};
use serde::Serialize;

///
/// A hidden state and the symbol emitted from it
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Emission {
    pub state: usize,
    pub observation: usize,
}

///
/// Struct for storing sampling results from HMM
///
/// `final_state` is the state reached after the last emission (not emitted
/// itself). Generation stops only when it is a terminal state.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    emissions: Vec<Emission>,
    final_state: usize,
}

impl History {
    ///
    /// Constructor of empty sample store, starting at `state`.
    ///
    pub fn new(state: usize) -> Self {
        History {
            emissions: Vec::new(),
            final_state: state,
        }
    }
    ///
    /// Append a new state and its emission
    ///
    pub fn push(&mut self, state: usize, observation: usize) {
        self.emissions.push(Emission { state, observation });
    }
    pub(crate) fn set_final_state(&mut self, state: usize) {
        self.final_state = state;
    }
    pub fn len(&self) -> usize {
        self.emissions.len()
    }
    pub fn is_empty(&self) -> bool {
        self.emissions.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<Emission> {
        self.emissions.iter()
    }
    pub fn emissions(&self) -> &[Emission] {
        &self.emissions
    }
    pub fn final_state(&self) -> usize {
        self.final_state
    }
    ///
    /// `(state, observation)` pairs
    ///
    pub fn to_pairs(&self) -> Vec<(usize, usize)> {
        self.iter().map(|e| (e.state, e.observation)).collect()
    }
    ///
    /// Sequence of hidden states
    ///
    pub fn to_states(&self) -> Vec<usize> {
        self.iter().map(|e| e.state).collect()
    }
    ///
    /// Sequence of emitted symbols, that can be fed into `Model::forward`
    ///
    pub fn to_sequence(&self) -> Vec<usize> {
        self.iter().map(|e| e.observation).collect()
    }
    ///
    /// `(state name, symbol name)` pairs
    ///
    pub fn to_named<'a>(&self, model: &'a Model) -> Result<Vec<(&'a str, &'a str)>> {
        self.iter()
            .map(|e| Ok((model.state_name(e.state)?, model.observation_name(e.observation)?)))
            .collect()
    }
    ///
    /// Number of visits of each state in the emitted history
    ///
    pub fn to_state_counts(&self, model: &Model) -> Array1<usize> {
        let mut counts = Array1::zeros(model.state_count());
        for e in self.iter() {
            counts[e.state] += 1;
        }
        counts
    }
    ///
    /// `counts[[i, j]]` = number of transitions `i -> j` between
    /// consecutive emitted states
    ///
    pub fn to_transition_counts(&self, model: &Model) -> Array2<usize> {
        let n = model.state_count();
        let mut counts = Array2::zeros((n, n));
        for (e1, e2) in self.iter().tuple_windows() {
            counts[[e1.state, e2.state]] += 1;
        }
        counts
    }
}

impl std::fmt::Display for History {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} -> {}",
            self.iter()
                .map(|e| format!("({},{})", e.state, e.observation))
                .join(""),
            self.final_state
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hmm::mocks::mock_two_state;
    use ndarray::array;

    #[test]
    fn history_accessors() {
        let hmm = mock_two_state();
        let mut h = History::new(0);
        assert!(h.is_empty());
        h.push(0, 1);
        h.push(0, 0);
        h.push(1, 1);
        h.set_final_state(0);
        assert_eq!(h.len(), 3);
        assert_eq!(h.to_pairs(), vec![(0, 1), (0, 0), (1, 1)]);
        assert_eq!(h.to_states(), vec![0, 0, 1]);
        assert_eq!(h.to_sequence(), vec![1, 0, 1]);
        assert_eq!(h.final_state(), 0);
        assert_eq!(
            h.to_named(&hmm).unwrap(),
            vec![("S1", "b"), ("S1", "a"), ("S2", "b")]
        );
        assert_eq!(h.to_state_counts(&hmm), array![2, 1]);
        assert_eq!(h.to_transition_counts(&hmm), array![[1, 1], [0, 0]]);
        assert_eq!(h.to_string(), "(0,1)(0,0)(1,1) -> 0");
    }

    #[test]
    fn history_json() {
        let mut h = History::new(1);
        h.push(1, 0);
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(
            json,
            r#"{"emissions":[{"state":1,"observation":0}],"final_state":1}"#
        );
    }
}
