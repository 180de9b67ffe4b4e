//! Geo-affinity ranking for SportConnect feeds.
//!
//! The crate provides two complementary capabilities:
//! - **Scoring** combines great-circle proximity with sport-skill-rating
//!   similarity into a single comparable score per candidate, lower being
//!   more relevant. Missing data degrades to fixed sentinel scores rather
//!   than errors, and ties keep their input order.
//! - **Feed assembly** applies the product's fallback policy: viewers with
//!   no personalization signal receive the recency-ordered pool instead of
//!   a degenerate uniform ranking.
//!
//! The scorer is a pure function of its inputs plus a read-only
//! [`ProfileSource`](sportconnect_core::ProfileSource) lookup for
//! denormalization fallback; it performs no I/O of its own.
//!
//! # Examples
//! ```
//! use sportconnect_core::test_support::MemoryProfiles;
//! use sportconnect_core::{ActorId, GeoPoint, PostId, PostSnapshot, Profile, Viewer};
//! use sportconnect_scorer::GeoAffinityScorer;
//!
//! let scorer = GeoAffinityScorer::new(MemoryProfiles::new());
//! let viewer = Viewer::new(ActorId::new("me"))
//!     .with_profile(Profile::new().with_location(GeoPoint::new(0.0, 0.0)?));
//! let posts = vec![
//!     PostSnapshot::new(PostId::new("p1"), ActorId::new("a"))
//!         .with_location(GeoPoint::new(0.0, 0.05)?),
//! ];
//! let ranked = scorer.rank(&viewer, posts, 15);
//! assert!(ranked.first().is_some_and(|r| r.recommended));
//! # Ok::<(), sportconnect_core::GeoPointError>(())
//! ```

#![forbid(unsafe_code)]

mod affinity;
mod distance;
mod feed;
mod weights;

pub use affinity::{
    GeoAffinityScorer, RECOMMENDED_THRESHOLD, UNKNOWN_LOCATION_SCORE, UNKNOWN_RATING_SCORE,
    location_score, rating_score,
};
pub use distance::{EARTH_RADIUS_KM, haversine_km};
pub use feed::Feed;
pub use weights::{AffinityError, ScoreWeights};
