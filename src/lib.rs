pub mod cli;
pub mod error;
pub mod hmm;
pub mod prob;
pub mod utils;

pub use error::{HmmError, Result};
pub use hmm::{Model, Ref, SampleParams};

#[cfg(test)]
#[macro_use]
extern crate approx;
