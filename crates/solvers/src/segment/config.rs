use thiserror::Error;

/// Configuration for the segment solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    feasibility_tol: f64,
}

/// Errors that can occur when validating a solver or sampling config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("feasibility_tol must be finite and non-negative")]
    FeasibilityTol,

    #[error("step must be finite and positive")]
    Step,

    #[error("x_max must be finite and non-negative")]
    XMax,

    #[error("x_max / step exceeds the sample limit of {limit}")]
    TooManySamples { limit: usize },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feasibility_tol: 0.0,
        }
    }
}

impl Config {
    /// Creates a new config with a validated feasibility tolerance.
    ///
    /// A bound is satisfied when its value is on the accepted side of the
    /// threshold or within `feasibility_tol` of it.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or non-finite.
    pub fn new(feasibility_tol: f64) -> Result<Self, ConfigError> {
        if !feasibility_tol.is_finite() || feasibility_tol < 0.0 {
            return Err(ConfigError::FeasibilityTol);
        }

        Ok(Self { feasibility_tol })
    }

    /// Returns the tolerance applied when checking bounds.
    #[must_use]
    pub fn feasibility_tol(&self) -> f64 {
        self.feasibility_tol
    }
}
