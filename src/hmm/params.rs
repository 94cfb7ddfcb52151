//!
//! SampleParams for sequence generation
//!

///
/// Parameters of `Model::generate`
///
/// * `min_length` minimum number of emitted (state, observation) pairs. `>= 1`.
/// * `start` name of the starting state. If `None`, it is sampled from the
///   initial distribution.
/// * `terminals` names of states the generation may stop at. Empty means all states.
/// * `max_steps` ceiling of the number of emitted pairs. `None` is unbounded.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleParams {
    pub min_length: usize,
    pub start: Option<String>,
    pub terminals: Vec<String>,
    pub max_steps: Option<usize>,
}

impl SampleParams {
    pub fn new(min_length: usize) -> SampleParams {
        SampleParams {
            min_length,
            start: None,
            terminals: Vec::new(),
            max_steps: None,
        }
    }
    pub fn start_from<S: Into<String>>(mut self, state: S) -> SampleParams {
        self.start = Some(state.into());
        self
    }
    pub fn terminate_at<I, S>(mut self, states: I) -> SampleParams
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.terminals = states.into_iter().map(|s| s.into()).collect();
        self
    }
    pub fn with_max_steps(mut self, max_steps: usize) -> SampleParams {
        self.max_steps = Some(max_steps);
        self
    }
}

impl std::fmt::Display for SampleParams {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "min_length={} start={} terminals={:?} max_steps={:?}",
            self.min_length,
            self.start.as_deref().unwrap_or("(initial)"),
            self.terminals,
            self.max_steps,
        )
    }
}
