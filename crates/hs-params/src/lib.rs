//! # hs-params
//!
//! Hyperparameter value generation for Hypersweep tuning runs.
//!
//! Provides the per-parameter candidate-value contract ([`ValueGenerator`])
//! and the discrete centered generator used for integer hyperparameters
//! searched around a known-good value.

mod errors;
mod values;

pub use errors::{ParamError, ParamResult};
pub use values::{DiscreteCentered, ValueGenerator};
