//!
//! probability calculation in log space
//!
use crate::error::{HmmError, Result};

///
/// Natural logarithm that maps `x = 0` into `-inf`.
///
/// `x < 0` is a `Domain` error.
///
pub fn safe_log(x: f64) -> Result<f64> {
    if x == 0.0 {
        Ok(f64::NEG_INFINITY)
    } else if x > 0.0 {
        Ok(x.ln())
    } else {
        Err(HmmError::Domain(x))
    }
}

/// Addition of two probabilities `exp(x) + exp(y)` in log space
///
/// The larger operand is used as the pivot. If `x > y`:
///
/// ```text
/// log(exp(x) + exp(y))
///  = log(exp(x) (1 + exp(y-x)))
///  = log(exp(x)) + log(1 + exp(y-x))
///  = x + log(1 + exp(y-x))
/// ```
///
/// `-inf` (p=0) is the identity element.
pub fn log_add(x: f64, y: f64) -> f64 {
    if x == f64::NEG_INFINITY {
        return y;
    }
    if y == f64::NEG_INFINITY {
        return x;
    }
    let (max, min) = if x >= y { (x, y) } else { (y, x) };
    max + (min - max).exp().ln_1p()
}

///
/// `log(sum(exp(v) for v in values))` by folding `log_add` from the first element.
///
/// An empty series has no meaningful log-sum and is an `InvalidInput` error.
///
pub fn log_sum_series(values: &[f64]) -> Result<f64> {
    match values.split_first() {
        Some((&first, rest)) => Ok(rest.iter().fold(first, |acc, &v| log_add(acc, v))),
        None => Err(HmmError::InvalidInput(
            "log-sum of an empty series".to_string(),
        )),
    }
}

///
/// Wrapper of f64 that represents probability `0 <= p <= 1` by its log
///
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Prob(f64);

impl Prob {
    ///
    /// From a probability value. `p = 0` becomes `-inf` in log space.
    ///
    pub fn from_prob(value: f64) -> Prob {
        Prob(value.ln())
    }
    pub fn from_log_prob(log_value: f64) -> Prob {
        Prob(log_value)
    }
    ///
    /// Get the probability (in `[0, 1]`)
    pub fn to_value(self) -> f64 {
        self.0.exp()
    }
    ///
    /// Get the log probability
    pub fn to_log_value(self) -> f64 {
        self.0
    }
    ///
    /// Is `p == 0` or not? (log p = -inf)
    ///
    pub fn is_zero(self) -> bool {
        self.0.is_infinite() && self.0.is_sign_negative()
    }
    ///
    /// prob=0.0
    ///
    pub fn zero() -> Prob {
        Prob(f64::NEG_INFINITY)
    }
}

/// `px + py` in log space, see `log_add`
impl std::ops::Add for Prob {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Prob(log_add(self.0, other.0))
    }
}

impl<'a> std::iter::Sum<&'a Self> for Prob {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Prob::zero(), |a, b| a + *b)
    }
}
