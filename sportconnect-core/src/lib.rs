//! Core domain types and ports for the SportConnect engine.
//!
//! These models provide validation at the boundary to keep downstream
//! components honest: coordinates, ratings, and raw document snapshots
//! enter the engine only through `Result` constructors, so ranking and
//! reconciliation can assume well-formed data.
//!
//! The crate also defines the trait seams to the external backend (the
//! [`ProfileSource`] lookup used for denormalization fallback) and the
//! [`Candidate`]/[`Ranked`] pair shared by the scoring crate.

#![forbid(unsafe_code)]

mod actor;
mod candidate;
mod document;
mod geo_point;
mod profile;
mod skill;
mod sport;
mod store;

pub mod test_support;

pub use actor::{ActorId, PostId};
pub use candidate::{Candidate, PostSnapshot, Ranked};
pub use document::{DocumentError, post_from_value, profile_from_value};
pub use geo_point::{GeoPoint, GeoPointError};
pub use profile::{Profile, Viewer};
pub use skill::{SkillProfile, SkillProfileError};
pub use sport::Sport;
pub use store::ProfileSource;
