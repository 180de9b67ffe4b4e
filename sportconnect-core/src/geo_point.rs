//! Validated WGS84 coordinates.
//!
//! Profile and post locations enter the engine exclusively through
//! [`GeoPoint::new`], so downstream scoring code can assume finite,
//! in-range coordinates.

use geo::Coord;
use thiserror::Error;

/// A geographic position recorded on a profile or denormalized onto a post.
///
/// Backed by [`geo::Coord`] with `x = longitude` and `y = latitude`, both in
/// decimal degrees. Instances are immutable once constructed.
///
/// # Examples
/// ```
/// use sportconnect_core::GeoPoint;
///
/// let court = GeoPoint::new(52.52, 13.405)?;
/// assert_eq!(court.latitude(), 52.52);
/// assert_eq!(court.longitude(), 13.405);
/// # Ok::<(), sportconnect_core::GeoPointError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    coord: Coord<f64>,
}

/// Errors returned by [`GeoPoint::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoPointError {
    /// Latitude was non-finite or outside `[-90, 90]` degrees.
    #[error("latitude {0} is outside [-90, 90] degrees")]
    Latitude(f64),
    /// Longitude was non-finite or outside `[-180, 180]` degrees.
    #[error("longitude {0} is outside [-180, 180] degrees")]
    Longitude(f64),
}

impl GeoPoint {
    /// Validates and constructs a `GeoPoint` from degrees.
    ///
    /// # Errors
    /// Returns [`GeoPointError`] when either component is non-finite or out
    /// of range. `NaN` never passes validation.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoPointError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoPointError::Latitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoPointError::Longitude(longitude));
        }
        Ok(Self {
            coord: Coord {
                x: longitude,
                y: latitude,
            },
        })
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.coord.y
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.coord.x
    }

    /// The underlying coordinate (`x = longitude`, `y = latitude`).
    #[must_use]
    pub fn coord(&self) -> Coord<f64> {
        self.coord
    }
}
