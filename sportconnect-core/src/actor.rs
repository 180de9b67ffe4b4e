//! Opaque identifiers issued by the external backend.

/// Stable opaque identifier for an authenticated user.
///
/// The authentication service issues these; the engine never inspects the
/// contents beyond equality and ordering.
///
/// # Examples
/// ```
/// use sportconnect_core::ActorId;
///
/// let actor = ActorId::new("uid-1234");
/// assert_eq!(actor.as_str(), "uid-1234");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(String);

impl ActorId {
    /// Wrap a raw identifier string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Document identifier of a post in the external store.
///
/// # Examples
/// ```
/// use sportconnect_core::PostId;
///
/// let post = PostId::new("post-42");
/// assert_eq!(post.as_str(), "post-42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId(String);

impl PostId {
    /// Wrap a raw document identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
