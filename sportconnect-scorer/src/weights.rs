//! Relative weighting between the location and rating components.

use thiserror::Error;

/// Errors raised when configuring the scorer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AffinityError {
    /// Provided weights were unusable.
    #[error("weights must be finite, non-negative, and sum to a positive value")]
    InvalidWeights,
}

/// Multipliers applied to the location and rating scores before summing.
///
/// The defaults weight proximity over skill similarity: `0.7 × location +
/// 0.3 × rating`. Lower composite scores are more relevant.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScoreWeights {
    /// Multiplier applied to the location score.
    pub location: f64,
    /// Multiplier applied to the rating-similarity score.
    pub rating: f64,
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`AffinityError::InvalidWeights`] when either value is not
    /// finite, is negative, or the total weight is zero.
    pub fn validate(self) -> Result<Self, AffinityError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(AffinityError::InvalidWeights)
        }
    }

    const fn is_valid(self) -> bool {
        self.has_finite_values() && self.has_non_negative_values() && self.has_non_zero_total()
    }

    const fn has_finite_values(self) -> bool {
        self.location.is_finite() && self.rating.is_finite()
    }

    const fn has_non_negative_values(self) -> bool {
        self.location >= 0.0 && self.rating >= 0.0
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "validation sums weights to ensure a non-zero total"
    )]
    const fn has_non_zero_total(self) -> bool {
        (self.location + self.rating) != 0.0
    }

    /// Combine component scores into the composite relevance score.
    #[expect(
        clippy::float_arithmetic,
        reason = "score blending is a weighted sum"
    )]
    #[must_use]
    pub fn blend(self, location_score: f64, rating_score: f64) -> f64 {
        location_score * self.location + rating_score * self.rating
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            location: 0.7,
            rating: 0.3,
        }
    }
}
