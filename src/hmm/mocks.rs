//!
//! Small models for tests, benchmarks and demos
//!
use super::model::Model;

fn names(xs: &[&str]) -> Vec<String> {
    xs.iter().map(|x| x.to_string()).collect()
}

///
/// 2 states `S1, S2` and 2 symbols `a, b`
///
/// ```text
/// pi = [0.6, 0.4]
/// A  = [[0.7, 0.3], [0.4, 0.6]]
/// B  = [[0.5, 0.5], [0.1, 0.9]]
/// ```
///
pub fn mock_two_state() -> Model {
    Model::new(
        names(&["a", "b"]),
        names(&["S1", "S2"]),
        vec![0.6, 0.4],
        vec![vec![0.7, 0.3], vec![0.4, 0.6]],
        vec![vec![0.5, 0.5], vec![0.1, 0.9]],
    )
    .unwrap()
}

///
/// 3 states over DNA bases, with a zero-probability transition
/// `S3 -> S1` and zero emissions, to exercise `log(0) = -inf` paths.
///
pub fn mock_dna() -> Model {
    Model::new(
        names(&["A", "C", "G", "T"]),
        names(&["S1", "S2", "S3"]),
        vec![0.5, 0.3, 0.2],
        vec![
            vec![0.8, 0.1, 0.1],
            vec![0.2, 0.6, 0.2],
            vec![0.0, 0.3, 0.7],
        ],
        vec![
            vec![0.4, 0.1, 0.1, 0.4],
            vec![0.25, 0.25, 0.25, 0.25],
            vec![0.0, 0.5, 0.5, 0.0],
        ],
    )
    .unwrap()
}

///
/// Deterministic model: always starts at `S1`, moves `S1 -> S2 -> S3 -> S1`
/// and `Si` always emits `xi`.
///
pub fn mock_cycle() -> Model {
    Model::new(
        names(&["x1", "x2", "x3"]),
        names(&["S1", "S2", "S3"]),
        vec![1.0, 0.0, 0.0],
        vec![
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
            vec![1.0, 0.0, 0.0],
        ],
        vec![
            vec![1.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
        ],
    )
    .unwrap()
}
