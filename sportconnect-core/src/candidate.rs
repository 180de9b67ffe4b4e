//! Candidates for ranking and the ranked result wrapper.

use crate::{ActorId, GeoPoint, PostId, SkillProfile};

/// An entity that can be ranked for a viewer.
///
/// The scorer only needs the owner identity and whatever location/skill data
/// was denormalized onto the item at creation time; the content payload
/// stays in the implementing type and is opaque to ranking.
///
/// # Examples
/// ```
/// use sportconnect_core::{ActorId, Candidate, GeoPoint, SkillProfile};
///
/// struct Clip {
///     owner: ActorId,
///     location: Option<GeoPoint>,
/// }
///
/// impl Candidate for Clip {
///     fn owner(&self) -> &ActorId {
///         &self.owner
///     }
///     fn location(&self) -> Option<&GeoPoint> {
///         self.location.as_ref()
///     }
///     fn skills(&self) -> Option<&SkillProfile> {
///         None
///     }
/// }
/// ```
pub trait Candidate {
    /// Identity of the item's owner.
    fn owner(&self) -> &ActorId;

    /// Location denormalized onto the item, if any.
    fn location(&self) -> Option<&GeoPoint>;

    /// Skill ratings denormalized onto the item, if any.
    fn skills(&self) -> Option<&SkillProfile>;
}

/// A post as captured for ranking: identity plus the location and skill data
/// denormalized at creation time.
///
/// Missing components fall back to the owner's live profile during ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct PostSnapshot {
    /// Document id of the post.
    pub id: PostId,
    /// Author of the post.
    pub owner: ActorId,
    /// Author location captured when the post was created.
    pub location: Option<GeoPoint>,
    /// Author skill ratings captured when the post was created.
    pub skills: Option<SkillProfile>,
}

impl PostSnapshot {
    /// Construct a snapshot with no denormalized data.
    #[must_use]
    pub fn new(id: PostId, owner: ActorId) -> Self {
        Self {
            id,
            owner,
            location: None,
            skills: None,
        }
    }

    /// Attach a denormalized location while returning `self` for chaining.
    #[must_use]
    pub fn with_location(mut self, location: GeoPoint) -> Self {
        self.location = Some(location);
        self
    }

    /// Attach denormalized skills while returning `self` for chaining.
    #[must_use]
    pub fn with_skills(mut self, skills: SkillProfile) -> Self {
        self.skills = Some(skills);
        self
    }
}

impl Candidate for PostSnapshot {
    fn owner(&self) -> &ActorId {
        &self.owner
    }

    fn location(&self) -> Option<&GeoPoint> {
        self.location.as_ref()
    }

    fn skills(&self) -> Option<&SkillProfile> {
        self.skills.as_ref()
    }
}

/// A candidate paired with its computed relevance.
///
/// Lower scores are more relevant. `distance_km` is present only when both
/// sides of the comparison had a usable location.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<C> {
    /// The ranked candidate.
    pub item: C,
    /// Composite relevance score; finite, non-negative, lower is better.
    pub score: f64,
    /// Great-circle distance to the viewer, when computable.
    pub distance_km: Option<f64>,
    /// Presentation hint: the score fell under the recommendation threshold.
    pub recommended: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_exposes_denormalized_data() {
        let point = GeoPoint::new(1.0, 2.0).expect("valid point");
        let snapshot =
            PostSnapshot::new(PostId::new("p1"), ActorId::new("a1")).with_location(point);
        assert_eq!(snapshot.location(), Some(&point));
        assert!(snapshot.skills().is_none());
        assert_eq!(snapshot.owner(), &ActorId::new("a1"));
    }
}
