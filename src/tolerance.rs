//! Thresholds for the approximate predicates on [`Vector`](crate::Vector).

use crate::error::{Result, VectorError};

/// Tolerance settings.
///
/// Fields are only reachable through the presets and the validating
/// constructors, so every threshold is positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    zero: f64,
    orthogonal: f64,
    parallel: f64,
}

impl Tolerance {
    /// Default thresholds.
    /// - zero, orthogonal: 1e-10
    /// - parallel: 1e-6 rad. `acos` turns one ulp of error in a cosine near
    ///   ±1 into roughly 2e-8 rad, so the angular bound has to sit above that.
    pub const DEFAULT: Tolerance = Tolerance {
        zero: 1e-10,
        orthogonal: 1e-10,
        parallel: 1e-6,
    };

    /// Tight thresholds for well-conditioned, unit-scale inputs
    pub const STRICT: Tolerance = Tolerance {
        zero: 1e-14,
        orthogonal: 1e-14,
        parallel: 1e-7,
    };

    /// Loose thresholds for data that went through lossy computation
    pub const LOOSE: Tolerance = Tolerance {
        zero: 1e-6,
        orthogonal: 1e-6,
        parallel: 1e-4,
    };

    /// Build a tolerance from its three thresholds.
    ///
    /// Fails with [`VectorError::InvalidTolerance`] unless every value is
    /// positive and finite.
    pub fn new(zero: f64, orthogonal: f64, parallel: f64) -> Result<Self> {
        let t = Self {
            zero,
            orthogonal,
            parallel,
        };
        t.validate()?;
        Ok(t)
    }

    /// Use the same threshold for every predicate.
    pub fn uniform(eps: f64) -> Result<Self> {
        Self::new(eps, eps, eps)
    }

    /// Replace the zero threshold.
    pub fn with_zero(self, zero: f64) -> Result<Self> {
        Self::new(zero, self.orthogonal, self.parallel)
    }

    /// Replace the orthogonality threshold.
    pub fn with_orthogonal(self, orthogonal: f64) -> Result<Self> {
        Self::new(self.zero, orthogonal, self.parallel)
    }

    /// Replace the angular parallelism threshold.
    pub fn with_parallel(self, parallel: f64) -> Result<Self> {
        Self::new(self.zero, self.orthogonal, parallel)
    }

    /// A vector whose magnitude is below this is treated as zero
    #[inline(always)]
    pub fn zero(&self) -> f64 {
        self.zero
    }

    /// Largest |a · b| for which a and b count as orthogonal
    #[inline(always)]
    pub fn orthogonal(&self) -> f64 {
        self.orthogonal
    }

    /// Largest angular distance (radians) from 0 or π for parallel vectors
    #[inline(always)]
    pub fn parallel(&self) -> f64 {
        self.parallel
    }

    /// Validate parameters
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("zero", self.zero),
            ("orthogonal", self.orthogonal),
            ("parallel", self.parallel),
        ] {
            if !(value.is_finite() && value > 0.0) {
                tracing::debug!(field = name, value, "rejecting tolerance");
                return Err(VectorError::InvalidTolerance { name, value });
            }
        }
        Ok(())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::DEFAULT
    }
}
