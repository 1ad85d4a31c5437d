//! Dataset configuration and random integer generation
//!
//! The integer dataset is drawn once, when a [`Datasets`](crate::Datasets) is
//! built. Draws are uniform over `[min, max]`, inclusive on both ends. Without
//! a seed the sequence comes from the thread-local generator and differs on
//! every run; with a seed it is reproducible.
//!
//! # Example
//!
//! ```
//! use gently::DatasetConfig;
//!
//! let config = DatasetConfig::default().with_seed(7).with_sample_size(10);
//! let a = config.generate_integers().unwrap();
//! let b = config.generate_integers().unwrap();
//!
//! assert_eq!(a.len(), 10);
//! assert_eq!(a, b);
//! assert!(a.iter().all(|v| (0..=1000).contains(v)));
//! ```

use crate::error::PipelineError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of integers drawn by default.
pub const DEFAULT_SAMPLE_SIZE: usize = 1000;

/// Smallest value a default draw can produce.
pub const DEFAULT_MIN: i32 = 0;

/// Largest value a default draw can produce.
pub const DEFAULT_MAX: i32 = 1000;

/// How the integer dataset is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DatasetConfig {
    /// Number of integers to draw.
    pub sample_size: usize,
    /// Inclusive lower bound.
    pub min: i32,
    /// Inclusive upper bound.
    pub max: i32,
    /// Seed for a reproducible sequence; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            seed: None,
        }
    }
}

impl DatasetConfig {
    /// Set the number of integers to draw.
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Set the inclusive bounds of each draw.
    pub fn with_bounds(mut self, min: i32, max: i32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Make the sequence reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the bounds describe a non-empty range.
    ///
    /// # Example
    ///
    /// ```
    /// use gently::DatasetConfig;
    ///
    /// assert!(DatasetConfig::default().validate().is_ok());
    ///
    /// let err = DatasetConfig::default().with_bounds(10, 1).validate().unwrap_err();
    /// assert!(err.is_operation_failed());
    /// ```
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.min > self.max {
            return Err(PipelineError::failed(format!(
                "invalid integer bounds: min {} is greater than max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Draw `sample_size` integers uniformly from `[min, max]`.
    pub fn generate_integers(&self) -> Result<Vec<i32>, PipelineError> {
        self.validate()?;
        Ok(self.sample())
    }

    // Callers must have validated the bounds; `random_range` panics on an empty range.
    pub(crate) fn sample(&self) -> Vec<i32> {
        let values = match self.seed {
            Some(seed) => draw(&mut StdRng::seed_from_u64(seed), self),
            None => draw(&mut rand::rng(), self),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sample_size = self.sample_size,
            min = self.min,
            max = self.max,
            seeded = self.seed.is_some(),
            "generated integer dataset"
        );

        values
    }
}

fn draw<R: Rng>(rng: &mut R, config: &DatasetConfig) -> Vec<i32> {
    (0..config.sample_size)
        .map(|_| rng.random_range(config.min..=config.max))
        .collect()
}
