//! Live profile data and the viewer requesting a feed.

use crate::{ActorId, GeoPoint, SkillProfile};

/// Location and skill data recorded on a user's profile.
///
/// Both components are optional; a missing component degrades scoring
/// gracefully rather than erroring.
///
/// # Examples
/// ```
/// use sportconnect_core::{GeoPoint, Profile, SkillProfile, Sport};
///
/// let profile = Profile::new()
///     .with_location(GeoPoint::new(40.7, -74.0)?)
///     .with_skills(SkillProfile::new().with_rating(Sport::Running, 6.0)?);
/// assert!(profile.has_personalization_signal());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Profile {
    /// Last recorded position, if the user shared one.
    pub location: Option<GeoPoint>,
    /// Per-sport self-ratings, if any were entered.
    pub skills: Option<SkillProfile>,
}

impl Profile {
    /// Construct an empty profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a location while returning `self` for chaining.
    #[must_use]
    pub fn with_location(mut self, location: GeoPoint) -> Self {
        self.location = Some(location);
        self
    }

    /// Attach skill ratings while returning `self` for chaining.
    #[must_use]
    pub fn with_skills(mut self, skills: SkillProfile) -> Self {
        self.skills = Some(skills);
        self
    }

    /// Whether the profile carries any signal usable for personalised
    /// ranking: a location, or at least one rated sport.
    #[must_use]
    pub fn has_personalization_signal(&self) -> bool {
        self.location.is_some() || self.skills.as_ref().is_some_and(|s| !s.is_empty())
    }
}

/// The actor requesting a ranked feed, with their live profile snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewer {
    /// Authenticated identity of the requester.
    pub actor: ActorId,
    /// The requester's profile at feed time.
    pub profile: Profile,
}

impl Viewer {
    /// Construct a viewer with an empty profile.
    #[must_use]
    pub fn new(actor: ActorId) -> Self {
        Self {
            actor,
            profile: Profile::new(),
        }
    }

    /// Replace the profile while returning `self` for chaining.
    #[must_use]
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sport;

    #[test]
    fn empty_profile_has_no_signal() {
        assert!(!Profile::new().has_personalization_signal());
    }

    #[test]
    fn location_alone_is_a_signal() {
        let profile = Profile::new().with_location(GeoPoint::new(0.0, 0.0).expect("valid point"));
        assert!(profile.has_personalization_signal());
    }

    #[test]
    fn empty_skill_map_is_not_a_signal() {
        let profile = Profile::new().with_skills(SkillProfile::new());
        assert!(!profile.has_personalization_signal());
    }

    #[test]
    fn rated_sport_is_a_signal() {
        let skills = SkillProfile::new()
            .with_rating(Sport::Tennis, 5.0)
            .expect("valid rating");
        assert!(Profile::new().with_skills(skills).has_personalization_signal());
    }
}
