//! Geo-affinity scoring: blend proximity against skill-rating similarity.
//!
//! Scores are built from two components. The location component maps
//! great-circle distance through a piecewise curve that saturates at 1000;
//! the rating component is the mean absolute rating difference over sports
//! both profiles rate, scaled by 10. The composite is a weighted sum, lower
//! is better, and ties keep their input order.

use sportconnect_core::{Candidate, GeoPoint, ProfileSource, Ranked, SkillProfile, Viewer};

use crate::distance::haversine_km;
use crate::weights::{AffinityError, ScoreWeights};

/// Location score assigned when either side lacks a usable position.
pub const UNKNOWN_LOCATION_SCORE: f64 = 1000.0;

/// Rating score assigned when the profiles share no rated sport.
pub const UNKNOWN_RATING_SCORE: f64 = 100.0;

/// Composite scores strictly below this threshold are flagged as
/// recommended. Purely a presentation hint, never a filter.
pub const RECOMMENDED_THRESHOLD: f64 = 500.0;

/// Piecewise location score over distance in kilometres.
///
/// Monotonically non-decreasing and continuous at the segment boundaries:
/// 100 at 10 km, 300 at 50 km, 600 at 200 km, capped at 1000 from 600 km
/// out. A missing distance maps to the fixed worst-case 1000 rather than an
/// unbounded penalty.
///
/// # Examples
/// ```
/// use sportconnect_scorer::location_score;
///
/// assert_eq!(location_score(Some(10.0)), 100.0);
/// assert_eq!(location_score(Some(50.0)), 300.0);
/// assert_eq!(location_score(None), 1000.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "the score curve is piecewise linear floating-point math"
)]
#[must_use]
pub fn location_score(distance_km: Option<f64>) -> f64 {
    match distance_km {
        None => UNKNOWN_LOCATION_SCORE,
        Some(d) if d <= 10.0 => d * 10.0,
        Some(d) if d <= 50.0 => 100.0 + (d - 10.0) * 5.0,
        Some(d) if d <= 200.0 => 300.0 + (d - 50.0) * 2.0,
        Some(d) => 600.0 + (d - 200.0).min(400.0),
    }
}

/// Skill-similarity score between two optional rating profiles.
///
/// Sports present on both sides contribute their absolute rating
/// difference; the mean difference is scaled by 10. Profiles with no shared
/// sport (including either side missing entirely) score the fixed
/// [`UNKNOWN_RATING_SCORE`].
///
/// # Examples
/// ```
/// use sportconnect_core::{SkillProfile, Sport};
/// use sportconnect_scorer::rating_score;
///
/// let a = SkillProfile::new().with_rating(Sport::Tennis, 5.0)?;
/// let b = SkillProfile::new().with_rating(Sport::Tennis, 7.0)?;
/// assert_eq!(rating_score(Some(&a), Some(&b)), 20.0);
/// assert_eq!(rating_score(Some(&a), None), 100.0);
/// # Ok::<(), sportconnect_core::SkillProfileError>(())
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "similarity averages absolute rating differences"
)]
#[must_use]
pub fn rating_score(viewer: Option<&SkillProfile>, candidate: Option<&SkillProfile>) -> f64 {
    let (Some(viewer_skills), Some(candidate_skills)) = (viewer, candidate) else {
        return UNKNOWN_RATING_SCORE;
    };
    let mut total_difference = 0.0;
    let mut shared: u32 = 0;
    for (sport, rating) in viewer_skills.iter() {
        if let Some(other) = candidate_skills.rating(&sport) {
            total_difference += (rating - other).abs();
            shared += 1;
        }
    }
    if shared == 0 {
        UNKNOWN_RATING_SCORE
    } else {
        total_difference / f64::from(shared) * 10.0
    }
}

/// Ranks candidate content for a viewer by blended geo/skill affinity.
///
/// The scorer is generic over the live-profile lookup port so it can be
/// unit-tested without a backend. Candidates owned by the viewer are
/// excluded; each remaining candidate's effective location and skills are
/// the values denormalized on the item, falling back to the owner's live
/// profile.
///
/// # Examples
/// ```
/// use sportconnect_core::{
///     ActorId, PostId, PostSnapshot, Profile, ProfileSource, Viewer,
/// };
/// use sportconnect_scorer::GeoAffinityScorer;
///
/// struct NoProfiles;
///
/// impl ProfileSource for NoProfiles {
///     fn profile(&self, _actor: &ActorId) -> Option<Profile> {
///         None
///     }
/// }
///
/// let scorer = GeoAffinityScorer::new(NoProfiles);
/// let viewer = Viewer::new(ActorId::new("me"));
/// let posts = vec![PostSnapshot::new(PostId::new("p1"), ActorId::new("other"))];
/// let ranked = scorer.rank(&viewer, posts, 15);
/// assert_eq!(ranked.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GeoAffinityScorer<P: ProfileSource> {
    profiles: P,
    weights: ScoreWeights,
}

impl<P: ProfileSource> GeoAffinityScorer<P> {
    /// Construct a scorer with the default 0.7/0.3 weighting.
    #[must_use]
    pub fn new(profiles: P) -> Self {
        Self {
            profiles,
            weights: ScoreWeights::default(),
        }
    }

    /// Construct a scorer with explicit weights.
    ///
    /// # Errors
    /// Returns [`AffinityError::InvalidWeights`] when the weights fail
    /// validation.
    pub fn with_weights(profiles: P, weights: ScoreWeights) -> Result<Self, AffinityError> {
        Ok(Self {
            profiles,
            weights: weights.validate()?,
        })
    }

    /// The active component weights.
    #[must_use]
    pub fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Rank `candidates` for `viewer`, ascending by composite score,
    /// truncated to `limit`.
    ///
    /// The sort is stable: candidates with equal scores keep their input
    /// order, so a viewer with no personalization signal sees the input
    /// order unchanged.
    #[must_use]
    pub fn rank<C: Candidate>(
        &self,
        viewer: &Viewer,
        candidates: Vec<C>,
        limit: usize,
    ) -> Vec<Ranked<C>> {
        let mut ranked: Vec<Ranked<C>> = candidates
            .into_iter()
            .filter(|item| item.owner() != &viewer.actor)
            .map(|item| self.score_item(viewer, item))
            .collect();
        ranked.sort_by(|a, b| a.score.total_cmp(&b.score));
        ranked.truncate(limit);
        ranked
    }

    fn score_item<C: Candidate>(&self, viewer: &Viewer, item: C) -> Ranked<C> {
        let (location, skills) = self.resolve(&item);
        let distance_km = viewer
            .profile
            .location
            .as_ref()
            .zip(location.as_ref())
            .map(|(a, b)| haversine_km(a, b));
        let composite = self
            .weights
            .blend(
                location_score(distance_km),
                rating_score(viewer.profile.skills.as_ref(), skills.as_ref()),
            )
            .max(0.0);
        Ranked {
            item,
            score: composite,
            distance_km,
            recommended: composite < RECOMMENDED_THRESHOLD,
        }
    }

    /// Effective location and skills: denormalized values first, the
    /// owner's live profile as fallback.
    fn resolve<C: Candidate>(&self, item: &C) -> (Option<GeoPoint>, Option<SkillProfile>) {
        let needs_fallback = item.location().is_none() || item.skills().is_none();
        let live = if needs_fallback {
            self.profiles.profile(item.owner())
        } else {
            None
        };
        if needs_fallback && live.is_none() {
            log::debug!(
                "no live profile for owner {}; scoring on denormalized data only",
                item.owner()
            );
        }
        let location = item
            .location()
            .copied()
            .or_else(|| live.as_ref().and_then(|p| p.location));
        let skills = item.skills().cloned().or_else(|| live.and_then(|p| p.skills));
        (location, skills)
    }
}
