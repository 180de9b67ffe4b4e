//! Facade crate for the SportConnect engine.
//!
//! This crate re-exports the core domain types together with the
//! geo-affinity scorer and the optimistic toggle reconciler, so application
//! shells depend on a single crate.

#![forbid(unsafe_code)]

pub use sportconnect_core::{
    ActorId, Candidate, DocumentError, GeoPoint, GeoPointError, PostId, PostSnapshot, Profile,
    ProfileSource, Ranked, SkillProfile, SkillProfileError, Sport, Viewer, post_from_value,
    profile_from_value,
};

pub use sportconnect_scorer::{
    AffinityError, EARTH_RADIUS_KM, Feed, GeoAffinityScorer, RECOMMENDED_THRESHOLD, ScoreWeights,
    UNKNOWN_LOCATION_SCORE, UNKNOWN_RATING_SCORE, haversine_km, location_score, rating_score,
};

pub use sportconnect_reconciler::{
    CounterDoc, CounterKind, EntityRef, FlightKey, MembershipView, Reconciler, StoreError,
    ToggleError, ToggleOp, ToggleOutcome, Transaction, TransactionalStore,
};
