//! Skill profiles: sparse per-sport self-ratings.
//!
//! Ratings are validated against each sport's range at insertion, so the
//! scoring path never sees a non-finite or out-of-range value. An absent
//! sport means "unrated" rather than zero.

use std::collections::HashMap;

use thiserror::Error;

use crate::Sport;

/// Per-sport ratings for one user.
///
/// # Examples
/// ```
/// use sportconnect_core::{SkillProfile, Sport};
///
/// let profile = SkillProfile::new()
///     .with_rating(Sport::Tennis, 4.5)?
///     .with_rating(Sport::Golf, 18.0)?;
/// assert_eq!(profile.rating(&Sport::Tennis), Some(4.5));
/// assert!(profile.rating(&Sport::Soccer).is_none());
/// # Ok::<(), sportconnect_core::SkillProfileError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SkillProfile {
    ratings: HashMap<Sport, f64>,
}

/// Errors returned when inserting a rating.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SkillProfileError {
    /// The rating was non-finite or outside the sport's valid range.
    #[error("rating {rating} for {sport} is outside the valid range")]
    OutOfRange {
        /// Sport the rating was supplied for.
        sport: Sport,
        /// Offending rating value.
        rating: f64,
    },
}

impl SkillProfile {
    /// Construct an empty profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the rating for a sport, if present.
    #[must_use]
    pub fn rating(&self, sport: &Sport) -> Option<f64> {
        self.ratings.get(sport).copied()
    }

    /// Insert or update a rating.
    ///
    /// # Errors
    /// Returns [`SkillProfileError::OutOfRange`] when the rating is
    /// non-finite or outside [`Sport::rating_range`]. `NaN` never validates.
    pub fn set_rating(&mut self, sport: Sport, rating: f64) -> Result<(), SkillProfileError> {
        if !sport.rating_range().contains(&rating) {
            return Err(SkillProfileError::OutOfRange { sport, rating });
        }
        self.ratings.insert(sport, rating);
        Ok(())
    }

    /// Add a rating while consuming `self`, enabling chaining.
    ///
    /// # Errors
    /// Propagates [`SkillProfileError`] from [`Self::set_rating`].
    pub fn with_rating(mut self, sport: Sport, rating: f64) -> Result<Self, SkillProfileError> {
        self.set_rating(sport, rating)?;
        Ok(self)
    }

    /// Iterate over all rated sports.
    pub fn iter(&self) -> impl Iterator<Item = (Sport, f64)> + '_ {
        self.ratings.iter().map(|(&sport, &rating)| (sport, rating))
    }

    /// Report whether no sport is rated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// Number of rated sports.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ratings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Sport::Tennis, 0.0)]
    #[case(Sport::Tennis, 16.0)]
    #[case(Sport::Golf, 54.0)]
    #[case(Sport::Running, 10.0)]
    fn accepts_boundary_ratings(#[case] sport: Sport, #[case] rating: f64) {
        let mut profile = SkillProfile::new();
        assert!(profile.set_rating(sport, rating).is_ok());
        assert_eq!(profile.rating(&sport), Some(rating));
    }

    #[rstest]
    #[case(Sport::Tennis, 16.5)]
    #[case(Sport::Tennis, -0.5)]
    #[case(Sport::Golf, 54.1)]
    #[case(Sport::Swimming, 10.5)]
    #[case(Sport::Soccer, f64::NAN)]
    fn rejects_out_of_range_ratings(#[case] sport: Sport, #[case] rating: f64) {
        let mut profile = SkillProfile::new();
        assert!(matches!(
            profile.set_rating(sport, rating),
            Err(SkillProfileError::OutOfRange { .. })
        ));
        assert!(profile.rating(&sport).is_none());
    }

    #[rstest]
    fn updates_overwrite_previous_rating() {
        let mut profile = SkillProfile::new();
        profile.set_rating(Sport::Tennis, 3.0).expect("valid rating");
        profile.set_rating(Sport::Tennis, 5.0).expect("valid rating");
        assert_eq!(profile.rating(&Sport::Tennis), Some(5.0));
        assert_eq!(profile.len(), 1);
    }

    #[rstest]
    fn empty_profile_reports_empty() {
        let profile = SkillProfile::new();
        assert!(profile.is_empty());
        assert!(profile.rating(&Sport::Baseball).is_none());
    }
}
