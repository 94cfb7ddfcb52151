//!
//! Checks of the stochastic invariants of a model
//!
use crate::error::{HmmError, Location, Result};
use std::collections::HashSet;

///
/// Allowed deviation of the sum of a distribution from 1
///
pub const PROB_TOLERANCE: f64 = 1e-4;

///
/// Names of a catalog should be non-empty strings, unique in the catalog,
/// and the catalog itself should have at least one entry.
///
pub fn check_names(names: &[String], location: Location) -> Result<()> {
    if names.is_empty() {
        return Err(HmmError::validation(location, "no names given"));
    }
    let mut seen = HashSet::new();
    for (i, name) in names.iter().enumerate() {
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(HmmError::validation(
                location,
                format!("invalid name {:?} at position {}", name, i),
            ));
        }
        if !seen.insert(name.as_str()) {
            return Err(HmmError::validation(
                location,
                format!("duplicate name `{}`", name),
            ));
        }
    }
    Ok(())
}

///
/// `values` should be of length `len`, every value in `[0, 1]`, and sum to 1
/// within `PROB_TOLERANCE`.
///
pub fn check_distribution(values: &[f64], len: usize, location: Location) -> Result<()> {
    if values.len() != len {
        return Err(HmmError::validation(
            location,
            format!("expected {} values, got {}", len, values.len()),
        ));
    }
    if let Some((i, x)) = values
        .iter()
        .enumerate()
        .find(|&(_, &x)| !(0.0..=1.0).contains(&x))
    {
        return Err(HmmError::validation(
            location,
            format!("value {} at position {} is not a probability", x, i),
        ));
    }
    let sum: f64 = values.iter().sum();
    if (1.0 - sum).abs() > PROB_TOLERANCE {
        return Err(HmmError::validation(
            location,
            format!("does not sum to 1: got {}", round6(sum)),
        ));
    }
    Ok(())
}

///
/// Each of the `n_rows` rows of `rows` should be a distribution of length `n_cols`.
///
pub fn check_matrix<F>(
    rows: &[Vec<f64>],
    n_rows: usize,
    n_cols: usize,
    location: Location,
    row_location: F,
) -> Result<()>
where
    F: Fn(usize) -> Location,
{
    if rows.len() != n_rows {
        return Err(HmmError::validation(
            location,
            format!("expected {} rows, got {}", n_rows, rows.len()),
        ));
    }
    rows.iter()
        .enumerate()
        .try_for_each(|(i, row)| check_distribution(row, n_cols, row_location(i)))
}

fn round6(x: f64) -> f64 {
    (x * 1e6).round() / 1e6
}
