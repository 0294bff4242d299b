//! Error types for the prob-space library.
//!
//! Construction failures and query failures share one error type, [`SpaceError`],
//! so callers can match on the kind that fired.

use thiserror::Error;

/// The reason a mass function was rejected at construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// An outcome was assigned a negative mass.
    #[error("negative mass: {mass} (probabilities must be nonnegative)")]
    NegativeMass {
        /// The offending mass
        mass: f64,
    },

    /// An outcome was assigned NaN or an infinite mass.
    #[error("non-finite mass: {mass}")]
    NonFiniteMass {
        /// The offending mass
        mass: f64,
    },

    /// The masses do not sum to 1 within tolerance.
    #[error("mass does not sum to 1: total is {total}")]
    NotNormalized {
        /// The computed total
        total: f64,
    },
}

impl DistributionError {
    /// Create an error for a negative mass.
    ///
    /// # Example
    /// ```
    /// use prob_space::error::DistributionError;
    ///
    /// let error = DistributionError::negative(-0.1);
    /// assert!(error.to_string().contains("-0.1"));
    /// ```
    #[must_use]
    pub fn negative(mass: f64) -> Self {
        Self::NegativeMass { mass }
    }

    /// Create an error for a NaN or infinite mass.
    #[must_use]
    pub fn non_finite(mass: f64) -> Self {
        Self::NonFiniteMass { mass }
    }

    /// Create an error for a total that is not 1.
    ///
    /// # Example
    /// ```
    /// use prob_space::error::DistributionError;
    ///
    /// let error = DistributionError::not_normalized(1.2);
    /// assert!(error.to_string().contains("1.2"));
    /// ```
    #[must_use]
    pub fn not_normalized(total: f64) -> Self {
        Self::NotNormalized { total }
    }
}

/// The main error type for the prob-space library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpaceError {
    /// The mass function handed to a constructor is not a probability distribution.
    #[error("Invalid distribution: {0}")]
    InvalidDistribution(#[from] DistributionError),

    /// A strict-mode query named outcomes outside the sample space.
    #[error("Unknown outcome: event contains {unknown} outcome(s) not in sample space")]
    UnknownOutcome {
        /// How many distinct foreign outcomes the checked events contain
        unknown: usize,
    },

    /// A conditional probability was requested given an event of probability zero.
    #[error("Condition on zero: P(A|B) is undefined when P(B) = 0")]
    ConditionOnZero,
}

/// A specialized `Result` type for probability space operations.
pub type Result<T> = std::result::Result<T, SpaceError>;

impl SpaceError {
    /// Create an error for events containing foreign outcomes.
    ///
    /// # Example
    /// ```
    /// use prob_space::error::SpaceError;
    ///
    /// let error = SpaceError::unknown_outcome(2);
    /// assert!(error.to_string().contains("2 outcome(s)"));
    /// ```
    #[must_use]
    pub fn unknown_outcome(unknown: usize) -> Self {
        Self::UnknownOutcome { unknown }
    }
}
