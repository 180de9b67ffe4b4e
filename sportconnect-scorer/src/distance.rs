//! Great-circle distance between validated coordinates.

use sportconnect_core::GeoPoint;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points in kilometres.
///
/// Symmetric in its arguments, and exactly zero for identical points.
/// Inputs are already range-validated by [`GeoPoint::new`], so the result
/// is always finite and non-negative.
///
/// # Examples
/// ```
/// use sportconnect_core::GeoPoint;
/// use sportconnect_scorer::haversine_km;
///
/// let a = GeoPoint::new(0.0, 0.0)?;
/// let b = GeoPoint::new(0.0, 1.0)?;
/// let d = haversine_km(&a, &b);
/// assert!((d - 111.19).abs() < 0.01);
/// # Ok::<(), sportconnect_core::GeoPointError>(())
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "great-circle distance is floating-point math"
)]
#[must_use]
pub fn haversine_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let d_lat = (b.latitude() - a.latitude()).to_radians();
    let d_lon = (b.longitude() - a.longitude()).to_radians();
    let lat_a = a.latitude().to_radians();
    let lat_b = b.latitude().to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).expect("valid test coordinates")
    }

    #[rstest]
    fn identical_points_are_zero_kilometres_apart() {
        let a = point(48.85, 2.35);
        assert_eq!(haversine_km(&a, &a), 0.0);
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "assertions compare distances")]
    fn one_degree_of_longitude_at_the_equator() {
        let a = point(0.0, 0.0);
        let b = point(0.0, 1.0);
        assert!((haversine_km(&a, &b) - 111.194_9).abs() < 0.001);
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "assertions compare distances")]
    fn antipodal_points_are_half_the_circumference_apart() {
        let a = point(0.0, 0.0);
        let b = point(0.0, 180.0);
        let half_circumference = EARTH_RADIUS_KM * std::f64::consts::PI;
        assert!((haversine_km(&a, &b) - half_circumference).abs() < 0.001);
    }

    #[rstest]
    #[case(52.52, 13.405, 48.8566, 2.3522)] // Berlin ↔ Paris
    #[case(-33.86, 151.21, 35.68, 139.69)] // Sydney ↔ Tokyo
    #[expect(clippy::float_arithmetic, reason = "assertions compare distances")]
    fn distance_is_symmetric(
        #[case] lat_a: f64,
        #[case] lon_a: f64,
        #[case] lat_b: f64,
        #[case] lon_b: f64,
    ) {
        let a = point(lat_a, lon_a);
        let b = point(lat_b, lon_b);
        assert!((haversine_km(&a, &b) - haversine_km(&b, &a)).abs() < 1e-9);
    }
}
