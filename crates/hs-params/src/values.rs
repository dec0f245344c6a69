//! Candidate value generators for individual hyperparameters.
//!
//! Each tuned hyperparameter owns one [`ValueGenerator`]. The search engine
//! asks it for a deterministic trial grid (structured sweeps) or for a single
//! random draw (sampled sweeps), and uses the reported candidate-space size
//! to decide which of the two is feasible.

use std::fmt;

use rand::{Rng, RngCore};
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

use crate::errors::ParamResult;
use crate::invalid_argument;

/// Common contract for a single hyperparameter's candidate values.
///
/// Implementations are immutable after construction and carry only the data
/// their own grid/sampling strategy needs. The random source is always
/// injected by the caller, so generators stay pure and seedable.
pub trait ValueGenerator: fmt::Display + Send + Sync {
    /// Concrete value type produced for this hyperparameter.
    type Value;

    /// Deterministic ordered grid of `count` candidate values.
    ///
    /// Fails with [`ParamError::InvalidArgument`](crate::ParamError) when
    /// `count` is zero.
    fn trial_values(&self, count: usize) -> ParamResult<Vec<Self::Value>>;

    /// One random candidate drawn from the injected source.
    fn random_value(&self, rng: &mut dyn RngCore) -> Self::Value;

    /// Number of distinct candidates this generator can produce, or
    /// `u64::MAX` when the space is effectively unbounded and should be
    /// sampled rather than enumerated.
    fn candidate_space_size(&self) -> u64;
}

/// Integer hyperparameter searched around a known-good center value.
///
/// Grid requests produce values spaced `step` apart and centered on `center`;
/// random requests draw from `Normal(center, step)` rounded to the nearest
/// integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscreteCentered {
    center: i64,
    step: i64,
}

impl DiscreteCentered {
    /// Builds a generator clustered around `center`. `step` is both the grid
    /// spacing and the standard deviation used for random draws; it must be
    /// strictly positive.
    pub fn new(center: i64, step: i64) -> ParamResult<Self> {
        if step <= 0 {
            return Err(invalid_argument!("step must be positive, got {step}"));
        }
        Ok(Self { center, step })
    }

    pub fn center(&self) -> i64 {
        self.center
    }

    pub fn step(&self) -> i64 {
        self.step
    }
}

impl ValueGenerator for DiscreteCentered {
    type Value = i64;

    fn trial_values(&self, count: usize) -> ParamResult<Vec<i64>> {
        if count == 0 {
            return Err(invalid_argument!("trial count must be positive"));
        }
        if count == 1 {
            return Ok(vec![self.center]);
        }
        // Truncating division shifts the window slightly below center when
        // (count - 1) * step is odd; sweep reproducibility depends on these
        // exact offsets.
        let mut value = self.center - (count as i64 - 1) * self.step / 2;
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(value);
            value += self.step;
        }
        Ok(values)
    }

    /// Draws from `Normal(center, step)` and rounds to the nearest integer,
    /// ties away from zero (`f64::round` semantics).
    fn random_value(&self, rng: &mut dyn RngCore) -> i64 {
        let z: f64 = rng.sample(StandardNormal);
        (self.center as f64 + self.step as f64 * z).round() as i64
    }

    fn candidate_space_size(&self) -> u64 {
        u64::MAX
    }
}

impl fmt::Display for DiscreteCentered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // A 3-value trial preview is enough to show location and spread.
        let preview = self.trial_values(3).map_err(|_| fmt::Error)?;
        write!(f, "DiscreteCentered{preview:?}")
    }
}
