//! Decoding of raw document-store snapshots.
//!
//! The document store hands the application shell dynamically-typed
//! snapshots. Everything entering the engine passes through the validating
//! mappers here, so malformed documents are rejected at the boundary instead
//! of surfacing as missing-field defects inside scoring or reconciliation.
//!
//! Snapshot shape: camelCase fields, `location` as a nested
//! `{"latitude", "longitude"}` object, `skillLevels` as a map from sport
//! name to rating, and `userId` for post ownership. Unknown fields are
//! ignored; unknown sport names are not.

use std::collections::HashMap;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::{
    ActorId, GeoPoint, GeoPointError, PostId, PostSnapshot, Profile, SkillProfile,
    SkillProfileError, Sport,
};

/// Errors produced while decoding a store snapshot.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The snapshot did not match the expected document shape.
    #[error("document is not a valid {kind} snapshot")]
    Shape {
        /// Document kind being decoded.
        kind: &'static str,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A skill map key did not name a recognised sport.
    #[error("unknown sport '{name}' in skill map")]
    UnknownSport {
        /// Offending key.
        name: String,
    },
    /// Coordinates failed validation.
    #[error(transparent)]
    Coordinates(#[from] GeoPointError),
    /// A rating failed validation.
    #[error(transparent)]
    Rating(#[from] SkillProfileError),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLocation {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProfile {
    #[serde(default)]
    location: Option<RawLocation>,
    #[serde(default)]
    skill_levels: Option<HashMap<String, f64>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPost {
    user_id: String,
    #[serde(default)]
    location: Option<RawLocation>,
    #[serde(default)]
    skill_levels: Option<HashMap<String, f64>>,
}

/// Decode a user profile snapshot.
///
/// # Errors
/// Returns [`DocumentError`] when the snapshot shape is wrong, a coordinate
/// is out of range, a sport name is unknown, or a rating is invalid.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use sportconnect_core::{profile_from_value, Sport};
///
/// let snapshot = json!({
///     "displayName": "Sam",
///     "location": {"latitude": 40.7, "longitude": -74.0},
///     "skillLevels": {"tennis": 4.5},
/// });
/// let profile = profile_from_value(&snapshot)?;
/// assert!(profile.location.is_some());
/// assert_eq!(
///     profile.skills.and_then(|s| s.rating(&Sport::Tennis)),
///     Some(4.5),
/// );
/// # Ok::<(), sportconnect_core::DocumentError>(())
/// ```
pub fn profile_from_value(value: &Value) -> Result<Profile, DocumentError> {
    let raw = RawProfile::deserialize(value).map_err(|source| DocumentError::Shape {
        kind: "profile",
        source,
    })?;
    Ok(Profile {
        location: raw.location.map(geo_point_from_raw).transpose()?,
        skills: raw.skill_levels.map(skills_from_map).transpose()?,
    })
}

/// Decode a post snapshot.
///
/// The document id is not part of the snapshot payload and is supplied by
/// the caller.
///
/// # Errors
/// Returns [`DocumentError`] under the same conditions as
/// [`profile_from_value`]; a missing `userId` is a shape error.
pub fn post_from_value(id: PostId, value: &Value) -> Result<PostSnapshot, DocumentError> {
    let raw = RawPost::deserialize(value).map_err(|source| DocumentError::Shape {
        kind: "post",
        source,
    })?;
    Ok(PostSnapshot {
        id,
        owner: ActorId::new(raw.user_id),
        location: raw.location.map(geo_point_from_raw).transpose()?,
        skills: raw.skill_levels.map(skills_from_map).transpose()?,
    })
}

fn geo_point_from_raw(raw: RawLocation) -> Result<GeoPoint, DocumentError> {
    Ok(GeoPoint::new(raw.latitude, raw.longitude)?)
}

fn skills_from_map(map: HashMap<String, f64>) -> Result<SkillProfile, DocumentError> {
    let mut skills = SkillProfile::new();
    for (name, rating) in map {
        let sport =
            Sport::from_str(&name).map_err(|_| DocumentError::UnknownSport { name: name.clone() })?;
        skills.set_rating(sport, rating)?;
    }
    Ok(skills)
}
