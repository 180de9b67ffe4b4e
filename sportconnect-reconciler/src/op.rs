//! Toggle operations and the entities they touch.

use sportconnect_core::{ActorId, PostId};

/// The counter surface a reference points at.
///
/// A user document carries two independent surfaces (who they follow, who
/// follows them); a post carries one. Store adapters map the pair of
/// [`CounterKind`] and document id onto concrete field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterKind {
    /// Actors who liked a post.
    Likes,
    /// Actors a user follows.
    Following,
    /// Actors following a user.
    Followers,
}

impl CounterKind {
    /// Return the kind as a lowercase `&str`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Likes => "likes",
            Self::Following => "following",
            Self::Followers => "followers",
        }
    }
}

/// Reference to one counter surface on one document.
///
/// # Examples
/// ```
/// use sportconnect_core::PostId;
/// use sportconnect_reconciler::EntityRef;
///
/// let entity = EntityRef::likes(&PostId::new("p1"));
/// assert_eq!(entity.to_string(), "likes/p1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityRef {
    /// Which counter surface on the document.
    pub counter: CounterKind,
    /// Document id in the external store.
    pub id: String,
}

impl EntityRef {
    /// The like surface of a post.
    #[must_use]
    pub fn likes(post: &PostId) -> Self {
        Self {
            counter: CounterKind::Likes,
            id: post.as_str().to_owned(),
        }
    }

    /// The following surface of a user.
    #[must_use]
    pub fn following(user: &ActorId) -> Self {
        Self {
            counter: CounterKind::Following,
            id: user.as_str().to_owned(),
        }
    }

    /// The followers surface of a user.
    #[must_use]
    pub fn followers(user: &ActorId) -> Self {
        Self {
            counter: CounterKind::Followers,
            id: user.as_str().to_owned(),
        }
    }
}

impl std::fmt::Display for EntityRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.counter.as_str(), self.id)
    }
}

/// A toggle-style state change against the authoritative store.
///
/// Each variant derives the primary entity, the symmetric counter-entity
/// (follow only), and the member identity written to each side. The actual
/// direction (adding or removing) is decided inside the transaction from
/// freshly read authoritative state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOp {
    /// Like or unlike a post.
    Like {
        /// Acting user.
        actor: ActorId,
        /// Post being toggled.
        post: PostId,
    },
    /// Follow or unfollow another user.
    Follow {
        /// Acting user.
        actor: ActorId,
        /// User being followed or unfollowed.
        target: ActorId,
    },
}

impl ToggleOp {
    /// The acting user.
    #[must_use]
    pub fn actor(&self) -> &ActorId {
        match self {
            Self::Like { actor, .. } | Self::Follow { actor, .. } => actor,
        }
    }

    /// The entity whose membership drives the toggle direction.
    #[must_use]
    pub fn primary(&self) -> EntityRef {
        match self {
            Self::Like { post, .. } => EntityRef::likes(post),
            Self::Follow { actor, .. } => EntityRef::following(actor),
        }
    }

    /// The symmetric counter-entity updated in the same transaction, if any.
    #[must_use]
    pub fn counter(&self) -> Option<EntityRef> {
        match self {
            Self::Like { .. } => None,
            Self::Follow { target, .. } => Some(EntityRef::followers(target)),
        }
    }

    /// The member written to the primary entity's set.
    #[must_use]
    pub fn primary_member(&self) -> &ActorId {
        match self {
            Self::Like { actor, .. } => actor,
            Self::Follow { target, .. } => target,
        }
    }

    /// The member written to the counter-entity's set.
    #[must_use]
    pub fn counter_member(&self) -> &ActorId {
        self.actor()
    }

    /// The suppression key: one in-flight toggle per actor and primary
    /// entity.
    #[must_use]
    pub fn flight_key(&self) -> FlightKey {
        FlightKey {
            actor: self.actor().clone(),
            entity: self.primary(),
        }
    }
}

/// Identifies an in-flight toggle for suppression purposes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlightKey {
    actor: ActorId,
    entity: EntityRef,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn like_touches_only_the_post() {
        let op = ToggleOp::Like {
            actor: ActorId::new("me"),
            post: PostId::new("p1"),
        };
        assert_eq!(op.primary(), EntityRef::likes(&PostId::new("p1")));
        assert!(op.counter().is_none());
        assert_eq!(op.primary_member(), &ActorId::new("me"));
    }

    #[rstest]
    fn follow_touches_both_sides_symmetrically() {
        let op = ToggleOp::Follow {
            actor: ActorId::new("me"),
            target: ActorId::new("them"),
        };
        assert_eq!(op.primary(), EntityRef::following(&ActorId::new("me")));
        assert_eq!(
            op.counter(),
            Some(EntityRef::followers(&ActorId::new("them")))
        );
        assert_eq!(op.primary_member(), &ActorId::new("them"));
        assert_eq!(op.counter_member(), &ActorId::new("me"));
    }

    #[rstest]
    fn flight_keys_distinguish_entities_not_directions() {
        let like = |post: &str| ToggleOp::Like {
            actor: ActorId::new("me"),
            post: PostId::new(post),
        };
        assert_eq!(like("p1").flight_key(), like("p1").flight_key());
        assert_ne!(like("p1").flight_key(), like("p2").flight_key());
    }
}
