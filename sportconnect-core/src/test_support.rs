//! Test-only, in-memory `ProfileSource` implementation used by unit and
//! behaviour tests.

use std::collections::HashMap;

use crate::{ActorId, Profile, ProfileSource};

/// In-memory `ProfileSource` backed by a plain map.
///
/// Intended only for tests and examples; lookups clone the stored profile.
#[derive(Default, Debug)]
pub struct MemoryProfiles {
    profiles: HashMap<ActorId, Profile>,
}

impl MemoryProfiles {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a profile while returning `self` for chaining.
    #[must_use]
    pub fn with_profile(mut self, actor: ActorId, profile: Profile) -> Self {
        self.insert(actor, profile);
        self
    }

    /// Insert or replace the profile for `actor`.
    pub fn insert(&mut self, actor: ActorId, profile: Profile) {
        self.profiles.insert(actor, profile);
    }
}

impl FromIterator<(ActorId, Profile)> for MemoryProfiles {
    fn from_iter<I: IntoIterator<Item = (ActorId, Profile)>>(iter: I) -> Self {
        Self {
            profiles: iter.into_iter().collect(),
        }
    }
}

impl ProfileSource for MemoryProfiles {
    fn profile(&self, actor: &ActorId) -> Option<Profile> {
        self.profiles.get(actor).cloned()
    }
}
