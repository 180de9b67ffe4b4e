//! Counter documents: a membership set with a cardinality-derived count.

use std::collections::BTreeSet;

use sportconnect_core::ActorId;

/// Membership set for one counter surface.
///
/// The displayed count is always the set's cardinality, so a committed
/// document can never show a count disagreeing with its members. Stored
/// documents that arrive with a stale count are corrected on read by
/// [`CounterDoc::from_parts`].
///
/// # Examples
/// ```
/// use sportconnect_core::ActorId;
/// use sportconnect_reconciler::CounterDoc;
///
/// let mut doc = CounterDoc::new();
/// doc.insert(ActorId::new("a"));
/// assert!(doc.is_member(&ActorId::new("a")));
/// assert_eq!(doc.count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CounterDoc {
    members: BTreeSet<ActorId>,
}

impl CounterDoc {
    /// An empty counter, the initial state for a freshly created entity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a counter from a stored membership list and count.
    ///
    /// The set is authoritative: a stored count that disagrees with the
    /// set's cardinality is corrected (and logged), not propagated.
    #[must_use]
    pub fn from_parts(members: impl IntoIterator<Item = ActorId>, stored_count: u64) -> Self {
        let doc = Self {
            members: members.into_iter().collect(),
        };
        if stored_count != doc.count() {
            log::warn!(
                "stored count {stored_count} disagrees with membership cardinality {}; trusting the set",
                doc.count()
            );
        }
        doc
    }

    /// Whether `actor` is currently a member.
    #[must_use]
    pub fn is_member(&self, actor: &ActorId) -> bool {
        self.members.contains(actor)
    }

    /// Add a member. Returns `true` when the membership changed.
    pub fn insert(&mut self, actor: ActorId) -> bool {
        self.members.insert(actor)
    }

    /// Remove a member. Returns `true` when the membership changed.
    pub fn remove(&mut self, actor: &ActorId) -> bool {
        self.members.remove(actor)
    }

    /// The count shown next to the membership set.
    #[must_use]
    pub fn count(&self) -> u64 {
        u64::try_from(self.members.len()).unwrap_or(u64::MAX)
    }

    /// Iterate over members in stable order.
    pub fn members(&self) -> impl Iterator<Item = &ActorId> {
        self.members.iter()
    }

    /// Report whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
