//!
//! Discrete Hidden Markov Model
//!
//! # Overview of calculation
//!
//! n hidden states, m observation symbols
//!
//! pi[i]     = P(q_0 = i)
//! A[i, j]   = P(q_t+1 = j | q_t = i)
//! B[i, k]   = P(o_t = k | q_t = i)
//!
//! Forward
//! F[t][s]
//!  = P(emits o[0],...,o[t] and in state s at t) for 0<=t<T
//!
//! Sample
//! (q_0, o_0), (q_1, o_1), ... drawn by comparing uniform draws with the
//! cumulative versions of pi, A and B.
//!
pub mod forward;
pub mod loader;
pub mod mocks;
pub mod model;
pub mod params;
pub mod reference;
pub mod sample;
pub mod trellis;
pub mod validate;

pub use model::Model;
pub use params::SampleParams;
pub use reference::Ref;
pub use sample::{Emission, History};
pub use trellis::Trellis;
