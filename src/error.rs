//!
//! Error types of model loading, lookups and the algorithms
//!
use thiserror::Error;

///
/// Which part of a model a validation failure refers to.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Observations,
    States,
    Initial,
    TransitionMatrix,
    /// row `i` of the transition matrix (outgoing probabilities of state `i`)
    TransitionRow(usize),
    EmissionMatrix,
    /// row `i` of the emission matrix (emission probabilities of state `i`)
    EmissionRow(usize),
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Location::Observations => write!(f, "observation names"),
            Location::States => write!(f, "state names"),
            Location::Initial => write!(f, "initial distribution"),
            Location::TransitionMatrix => write!(f, "transition matrix"),
            Location::TransitionRow(i) => write!(f, "transition matrix row {}", i),
            Location::EmissionMatrix => write!(f, "emission matrix"),
            Location::EmissionRow(i) => write!(f, "emission matrix row {}", i),
        }
    }
}

///
/// Catalog a name or an index was looked up in.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalog {
    State,
    Observation,
}

impl std::fmt::Display for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Catalog::State => write!(f, "state"),
            Catalog::Observation => write!(f, "observation"),
        }
    }
}

#[derive(Error, Debug)]
pub enum HmmError {
    /// Malformed model description (token counts, non-numeric fields,
    /// missing or trailing lines). `line` is 1-based when known.
    #[error("format error at line {line}: {message}")]
    Format { line: usize, message: String },

    /// Well-formed model violating a stochastic invariant
    #[error("{location}: {reason}")]
    Validation { location: Location, reason: String },

    #[error("unknown {kind} name `{name}`")]
    UnknownName { kind: Catalog, name: String },

    #[error("{kind} index {index} out of range (0..{len})")]
    IndexOutOfRange {
        kind: Catalog,
        index: usize,
        len: usize,
    },

    /// Observation outside of the model alphabet given to the forward algorithm
    #[error("unknown observation symbol `{0}`")]
    UnknownSymbol(String),

    /// Logarithm of a negative value
    #[error("log of negative value {0}")]
    Domain(f64),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Generation did not reach a terminal state within the step ceiling
    #[error("generation exhausted after {steps} steps without reaching a terminal state")]
    Exhausted { steps: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HmmError>;

impl HmmError {
    pub(crate) fn format<S: Into<String>>(line: usize, message: S) -> HmmError {
        HmmError::Format {
            line,
            message: message.into(),
        }
    }
    pub(crate) fn validation<S: Into<String>>(location: Location, reason: S) -> HmmError {
        HmmError::Validation {
            location,
            reason: reason.into(),
        }
    }
    /// Is this a `Format` error?
    pub fn is_format(&self) -> bool {
        matches!(self, HmmError::Format { .. })
    }
    /// Is this a `Validation` error?
    pub fn is_validation(&self) -> bool {
        matches!(self, HmmError::Validation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let e = HmmError::validation(Location::TransitionRow(2), "does not sum to 1: got 0.97");
        assert_eq!(
            e.to_string(),
            "transition matrix row 2: does not sum to 1: got 0.97"
        );
        assert!(e.is_validation());
        assert!(!e.is_format());

        let e = HmmError::format(7, "extra information");
        assert_eq!(e.to_string(), "format error at line 7: extra information");
        assert!(e.is_format());

        let e = HmmError::IndexOutOfRange {
            kind: Catalog::State,
            index: 5,
            len: 2,
        };
        assert_eq!(e.to_string(), "state index 5 out of range (0..2)");
    }
}
