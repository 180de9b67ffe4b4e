//! Read-only access to live profiles.
//!
//! The `ProfileSource` trait is the seam between the engine and the external
//! document store: ranking consults it when a candidate carries no
//! denormalized location or skill data.

use crate::{ActorId, Profile};

/// Look up the live profile of an item's owner.
///
/// Implementations are expected to serve from a local snapshot or cache of
/// the document store; the engine issues at most one lookup per candidate.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use sportconnect_core::{ActorId, Profile, ProfileSource};
///
/// struct SnapshotProfiles {
///     profiles: HashMap<ActorId, Profile>,
/// }
///
/// impl ProfileSource for SnapshotProfiles {
///     fn profile(&self, actor: &ActorId) -> Option<Profile> {
///         self.profiles.get(actor).cloned()
///     }
/// }
///
/// let source = SnapshotProfiles {
///     profiles: HashMap::from([(ActorId::new("a1"), Profile::new())]),
/// };
/// assert!(source.profile(&ActorId::new("a1")).is_some());
/// assert!(source.profile(&ActorId::new("a2")).is_none());
/// ```
pub trait ProfileSource: Send + Sync {
    /// Return the current profile for `actor`, or `None` when unknown.
    fn profile(&self, actor: &ActorId) -> Option<Profile>;
}
