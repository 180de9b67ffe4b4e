//! Feed assembly: personalised ranking with a recency fallback.
//!
//! Whether to fall back is a caller-side policy, not a scorer concern; this
//! module codifies the product behaviour so every surface applies it the
//! same way: a viewer with no personalization signal gets the plain
//! recency-ordered pool rather than a degenerate uniform ranking.

use sportconnect_core::{Candidate, ProfileSource, Ranked, Viewer};

use crate::affinity::GeoAffinityScorer;

/// A feed ready for display.
#[derive(Debug, Clone, PartialEq)]
pub enum Feed<C> {
    /// Personalised ranking, ascending by composite score.
    Ranked(Vec<Ranked<C>>),
    /// The caller's recency-ordered pool, untouched apart from truncation.
    Recent(Vec<C>),
}

impl<C> Feed<C> {
    /// Number of items in the feed.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Ranked(items) => items.len(),
            Self::Recent(items) => items.len(),
        }
    }

    /// Report whether the feed is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<P: ProfileSource> GeoAffinityScorer<P> {
    /// Assemble a feed for `viewer`.
    ///
    /// With any personalization signal present, `candidates` are ranked via
    /// [`GeoAffinityScorer::rank`]. Without one, the ranking would assign
    /// every candidate the same score, so `recent` (already ordered by the
    /// caller's store query, newest first) is returned instead.
    ///
    /// # Examples
    /// ```
    /// use sportconnect_core::{ActorId, PostId, PostSnapshot, Profile, ProfileSource, Viewer};
    /// use sportconnect_scorer::{Feed, GeoAffinityScorer};
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
    /// let recent = vec![PostSnapshot::new(PostId::new("newest"), ActorId::new("a"))];
    /// let feed = scorer.feed(&viewer, Vec::new(), recent, 15);
    /// assert!(matches!(feed, Feed::Recent(items) if items.len() == 1));
    /// ```
    #[must_use]
    pub fn feed<C: Candidate>(
        &self,
        viewer: &Viewer,
        candidates: Vec<C>,
        mut recent: Vec<C>,
        limit: usize,
    ) -> Feed<C> {
        if viewer.profile.has_personalization_signal() {
            Feed::Ranked(self.rank(viewer, candidates, limit))
        } else {
            recent.truncate(limit);
            Feed::Recent(recent)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use sportconnect_core::test_support::MemoryProfiles;
    use sportconnect_core::{ActorId, GeoPoint, PostId, PostSnapshot, Profile};

    fn post(id: &str, owner: &str) -> PostSnapshot {
        PostSnapshot::new(PostId::new(id), ActorId::new(owner))
    }

    #[rstest]
    fn no_signal_yields_the_recent_pool_in_order() {
        let scorer = GeoAffinityScorer::new(MemoryProfiles::new());
        let viewer = Viewer::new(ActorId::new("me"));
        let recent = vec![post("r1", "a"), post("r2", "b"), post("r3", "c")];
        let feed = scorer.feed(&viewer, vec![post("c1", "a")], recent.clone(), 15);
        assert_eq!(feed, Feed::Recent(recent));
    }

    #[rstest]
    fn recent_pool_is_truncated_to_the_limit() {
        let scorer = GeoAffinityScorer::new(MemoryProfiles::new());
        let viewer = Viewer::new(ActorId::new("me"));
        let recent = vec![post("r1", "a"), post("r2", "b"), post("r3", "c")];
        let feed = scorer.feed(&viewer, Vec::new(), recent, 2);
        assert_eq!(feed.len(), 2);
    }

    #[rstest]
    fn any_signal_switches_to_ranking() {
        let scorer = GeoAffinityScorer::new(MemoryProfiles::new());
        let viewer = Viewer::new(ActorId::new("me")).with_profile(
            Profile::new().with_location(GeoPoint::new(0.0, 0.0).expect("valid point")),
        );
        let feed = scorer.feed(&viewer, vec![post("c1", "a")], vec![post("r1", "b")], 15);
        assert!(matches!(feed, Feed::Ranked(items) if items.len() == 1));
    }
}
