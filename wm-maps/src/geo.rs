//! Great-circle distance between coordinates.

/// Mean Earth radius in feet (3958.8 miles).
const EARTH_RADIUS_FEET: f64 = 3958.8 * 5280.0;

/// Haversine distance in feet between two `(latitude, longitude)` points given in degrees.
///
/// The result is non-negative and symmetric in its arguments.
#[must_use]
pub fn distance_feet(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1 for antipodal points.
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();
    EARTH_RADIUS_FEET * c
}

#[cfg(test)]
mod tests {
    use assertables::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn test_same_point_is_zero() {
        assert_eq!(distance_feet(34.1377, -118.1253, 34.1377, -118.1253), 0.0);
    }

    #[rstest]
    #[case(34.1377, -118.1253, 34.1390, -118.1240)]
    #[case(-33.9, 151.2, 51.5, -0.12)]
    fn test_symmetric(#[case] lat1: f64, #[case] lon1: f64, #[case] lat2: f64, #[case] lon2: f64) {
        let there = distance_feet(lat1, lon1, lat2, lon2);
        let back = distance_feet(lat2, lon2, lat1, lon1);
        assert_lt!((there - back).abs(), 1e-6);
        assert_gt!(there, 0.0);
    }

    #[rstest]
    fn test_one_degree_of_latitude() {
        // One degree along a meridian is about 69.09 miles.
        let feet = distance_feet(0.0, 0.0, 1.0, 0.0);
        assert_lt!((feet / 5280.0 - 69.09).abs(), 0.01);
    }
}
