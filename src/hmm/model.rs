//!
//! Definition of discrete HMM parameters
//!
use super::reference::Ref;
use super::validate::{check_distribution, check_matrix, check_names};
use crate::error::{Catalog, HmmError, Location, Result};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use std::collections::HashMap;

/// Discrete HMM
///
/// * `states` hidden states `0..n`
/// * `observations` observation alphabet `0..m`
/// * `initial[i]` = P(start in state i)
/// * `transition[i, j]` = P(next state = j | current state = i)
/// * `emission[i, k]` = P(observe symbol k | in state i)
///
/// Parameters are fixed once the model is constructed. The cumulative
/// versions of the three distributions (used by the sampler) are computed
/// at construction too.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    observations: Vec<String>,
    observation_index: HashMap<String, usize>,
    states: Vec<String>,
    state_index: HashMap<String, usize>,
    initial: Array1<f64>,
    transition: Array2<f64>,
    emission: Array2<f64>,
    initial_cumulative: Array1<f64>,
    transition_cumulative: Array2<f64>,
    emission_cumulative: Array2<f64>,
}

impl Model {
    ///
    /// Create a model from its parameters after checking every stochastic
    /// invariant. A violation is a `Validation` error naming the offending
    /// vector or row.
    ///
    pub fn new(
        observations: Vec<String>,
        states: Vec<String>,
        initial: Vec<f64>,
        transition: Vec<Vec<f64>>,
        emission: Vec<Vec<f64>>,
    ) -> Result<Model> {
        check_names(&observations, Location::Observations)?;
        check_names(&states, Location::States)?;
        let n = states.len();
        let m = observations.len();
        check_distribution(&initial, n, Location::Initial)?;
        check_matrix(
            &transition,
            n,
            n,
            Location::TransitionMatrix,
            Location::TransitionRow,
        )?;
        check_matrix(
            &emission,
            n,
            m,
            Location::EmissionMatrix,
            Location::EmissionRow,
        )?;

        let initial = Array1::from(initial);
        let transition = Array2::from_shape_fn((n, n), |(i, j)| transition[i][j]);
        let emission = Array2::from_shape_fn((n, m), |(i, k)| emission[i][k]);

        Ok(Model {
            observation_index: to_index(&observations),
            state_index: to_index(&states),
            observations,
            states,
            initial_cumulative: cumulative(initial.view()),
            transition_cumulative: cumulative_rows(transition.view()),
            emission_cumulative: cumulative_rows(emission.view()),
            initial,
            transition,
            emission,
        })
    }
    //
    // catalogs
    //
    ///
    /// The number of hidden states `n`
    ///
    pub fn state_count(&self) -> usize {
        self.states.len()
    }
    ///
    /// The number of observation symbols `m`
    ///
    pub fn observation_count(&self) -> usize {
        self.observations.len()
    }
    pub fn state_names(&self) -> &[String] {
        &self.states
    }
    pub fn observation_names(&self) -> &[String] {
        &self.observations
    }
    pub fn state_name(&self, index: usize) -> Result<&str> {
        self.states
            .get(index)
            .map(|name| name.as_str())
            .ok_or(HmmError::IndexOutOfRange {
                kind: Catalog::State,
                index,
                len: self.state_count(),
            })
    }
    pub fn observation_name(&self, index: usize) -> Result<&str> {
        self.observations
            .get(index)
            .map(|name| name.as_str())
            .ok_or(HmmError::IndexOutOfRange {
                kind: Catalog::Observation,
                index,
                len: self.observation_count(),
            })
    }
    ///
    /// Canonical index of a state given by name or by index
    ///
    pub fn resolve_state<'a, R: Into<Ref<'a>>>(&self, state: R) -> Result<usize> {
        resolve(state.into(), &self.state_index, Catalog::State)
    }
    ///
    /// Canonical index of an observation symbol given by name or by index
    ///
    pub fn resolve_observation<'a, R: Into<Ref<'a>>>(&self, observation: R) -> Result<usize> {
        resolve(
            observation.into(),
            &self.observation_index,
            Catalog::Observation,
        )
    }
    //
    // probabilities
    //
    ///
    /// `P(q_0 = state)`
    ///
    pub fn start_probability<'a, R: Into<Ref<'a>>>(&self, state: R) -> Result<f64> {
        let s = self.resolve_state(state)?;
        Ok(self.initial[s])
    }
    ///
    /// `P(q_t+1 = to | q_t = from)`
    ///
    pub fn transition_probability<'a, 'b, R, S>(&self, from: R, to: S) -> Result<f64>
    where
        R: Into<Ref<'a>>,
        S: Into<Ref<'b>>,
    {
        let i = self.resolve_state(from)?;
        let j = self.resolve_state(to)?;
        Ok(self.transition[[i, j]])
    }
    ///
    /// `P(O_t = symbol | q_t = state)`
    ///
    pub fn emission_probability<'a, 'b, R, S>(&self, state: R, symbol: S) -> Result<f64>
    where
        R: Into<Ref<'a>>,
        S: Into<Ref<'b>>,
    {
        let i = self.resolve_state(state)?;
        let k = self.resolve_observation(symbol)?;
        Ok(self.emission[[i, k]])
    }
    pub fn initial(&self) -> ArrayView1<f64> {
        self.initial.view()
    }
    pub fn transition(&self) -> ArrayView2<f64> {
        self.transition.view()
    }
    pub fn emission(&self) -> ArrayView2<f64> {
        self.emission.view()
    }
    //
    // cumulative distributions for sampling
    //
    pub fn initial_cumulative(&self) -> ArrayView1<f64> {
        self.initial_cumulative.view()
    }
    ///
    /// Cumulative transition probabilities from state `s` (row `s`)
    ///
    pub fn transition_cumulative(&self, s: usize) -> ArrayView1<f64> {
        self.transition_cumulative.row(s)
    }
    ///
    /// Cumulative emission probabilities of state `s` (row `s`)
    ///
    pub fn emission_cumulative(&self, s: usize) -> ArrayView1<f64> {
        self.emission_cumulative.row(s)
    }
}

fn to_index(names: &[String]) -> HashMap<String, usize> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| (name.clone(), i))
        .collect()
}

fn resolve(r: Ref, index: &HashMap<String, usize>, kind: Catalog) -> Result<usize> {
    match r {
        Ref::Name(name) => index.get(name).copied().ok_or(HmmError::UnknownName {
            kind,
            name: name.to_string(),
        }),
        Ref::Index(i) if i < index.len() => Ok(i),
        Ref::Index(i) => Err(HmmError::IndexOutOfRange {
            kind,
            index: i,
            len: index.len(),
        }),
    }
}

///
/// prefix sums `[x0, x0+x1, x0+x1+x2, ...]`
///
fn cumulative(xs: ArrayView1<f64>) -> Array1<f64> {
    xs.iter()
        .scan(0.0, |acc, &x| {
            *acc += x;
            Some(*acc)
        })
        .collect()
}

fn cumulative_rows(matrix: ArrayView2<f64>) -> Array2<f64> {
    let mut ret = matrix.to_owned();
    for mut row in ret.rows_mut() {
        let mut acc = 0.0;
        for x in row.iter_mut() {
            acc += *x;
            *x = acc;
        }
    }
    ret
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hmm::mocks::mock_two_state;
    use ndarray::array;

    #[test]
    fn model_catalogs() {
        let hmm = mock_two_state();
        assert_eq!(hmm.state_count(), 2);
        assert_eq!(hmm.observation_count(), 2);
        assert_eq!(hmm.state_names(), &["S1".to_string(), "S2".to_string()]);
        assert_eq!(hmm.observation_name(1).unwrap(), "b");
        assert_eq!(hmm.state_name(0).unwrap(), "S1");
        assert!(matches!(
            hmm.state_name(2),
            Err(HmmError::IndexOutOfRange { index: 2, len: 2, .. })
        ));
    }

    #[test]
    fn model_resolve() {
        let hmm = mock_two_state();
        assert_eq!(hmm.resolve_state("S2").unwrap(), 1);
        assert_eq!(hmm.resolve_state(1).unwrap(), 1);
        assert_eq!(hmm.resolve_observation("a").unwrap(), 0);
        assert!(matches!(
            hmm.resolve_state("S9"),
            Err(HmmError::UnknownName {
                kind: Catalog::State,
                ..
            })
        ));
        assert!(matches!(
            hmm.resolve_observation(2),
            Err(HmmError::IndexOutOfRange {
                kind: Catalog::Observation,
                ..
            })
        ));
        // states and observations are separate catalogs
        assert!(hmm.resolve_observation("S1").is_err());
    }

    #[test]
    fn model_probabilities() {
        let hmm = mock_two_state();
        assert_eq!(hmm.start_probability("S1").unwrap(), 0.6);
        assert_eq!(hmm.start_probability(1).unwrap(), 0.4);
        assert_eq!(hmm.transition_probability("S1", "S2").unwrap(), 0.3);
        assert_eq!(hmm.transition_probability(1, "S1").unwrap(), 0.4);
        assert_eq!(hmm.emission_probability("S2", "b").unwrap(), 0.9);
        assert_eq!(hmm.emission_probability(0, 0).unwrap(), 0.5);
        assert!(hmm.emission_probability("S2", "c").is_err());
    }

    fn assert_close(xs: ArrayView1<f64>, ys: &[f64]) {
        assert_eq!(xs.len(), ys.len());
        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_abs_diff_eq!(x, y, epsilon = 1e-12);
        }
    }

    #[test]
    fn model_cumulative() {
        let hmm = mock_two_state();
        assert_close(hmm.initial_cumulative(), &[0.6, 1.0]);
        assert_close(hmm.transition_cumulative(0), &[0.7, 1.0]);
        assert_close(hmm.transition_cumulative(1), &[0.4, 1.0]);
        assert_close(hmm.emission_cumulative(1), &[0.1, 1.0]);
        // originals are untouched
        assert_eq!(hmm.transition(), array![[0.7, 0.3], [0.4, 0.6]]);
        assert_eq!(hmm.initial(), array![0.6, 0.4]);
    }

    fn names(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|x| x.to_string()).collect()
    }

    #[test]
    fn model_new_rejects_invalid() {
        let e = Model::new(
            names(&["a", "b"]),
            names(&["S1", "S2", "S3"]),
            vec![0.5, 0.5, 0.0],
            vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0, 0.0], vec![0.5, 0.47, 0.0]],
            vec![vec![0.5, 0.5], vec![0.5, 0.5], vec![0.5, 0.5]],
        )
        .unwrap_err();
        match e {
            HmmError::Validation { location, reason } => {
                assert_eq!(location, Location::TransitionRow(2));
                assert_eq!(reason, "does not sum to 1: got 0.97");
            }
            e => panic!("unexpected {:?}", e),
        }

        // emission row of wrong width
        let e = Model::new(
            names(&["a", "b"]),
            names(&["S1"]),
            vec![1.0],
            vec![vec![1.0]],
            vec![vec![1.0]],
        )
        .unwrap_err();
        assert!(matches!(
            e,
            HmmError::Validation {
                location: Location::EmissionRow(0),
                ..
            }
        ));

        // missing transition row
        let e = Model::new(
            names(&["a"]),
            names(&["S1", "S2"]),
            vec![1.0, 0.0],
            vec![vec![1.0, 0.0]],
            vec![vec![1.0], vec![1.0]],
        )
        .unwrap_err();
        assert!(matches!(
            e,
            HmmError::Validation {
                location: Location::TransitionMatrix,
                ..
            }
        ));

        // duplicated observation name
        let e = Model::new(
            names(&["a", "a"]),
            names(&["S1"]),
            vec![1.0],
            vec![vec![1.0]],
            vec![vec![0.5, 0.5]],
        )
        .unwrap_err();
        assert!(matches!(
            e,
            HmmError::Validation {
                location: Location::Observations,
                ..
            }
        ));
    }
}
