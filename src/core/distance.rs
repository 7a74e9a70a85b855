use crate::models::Coordinates;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers. NaN inputs produce NaN.
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Haversine distance between two coordinates in kilometers
#[inline]
pub fn distance_between(from: Coordinates, to: Coordinates) -> f64 {
    haversine_distance(from.lat, from.lng, to.lat, to.lng)
}

/// Format a distance for display
///
/// Under 1 km shows whole meters, under 10 km one decimal, otherwise
/// rounded kilometers.
pub fn format_distance(distance_km: f64) -> String {
    if distance_km < 1.0 {
        format!("{}m", (distance_km * 1000.0).round() as i64)
    } else if distance_km < 10.0 {
        format!("{:.1}km", distance_km)
    } else {
        format!("{}km", distance_km.round() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_distance() {
        // Distance from London to Paris (approximately 344 km)
        let london_lat = 51.5074;
        let london_lon = -0.1278;
        let paris_lat = 48.8566;
        let paris_lon = 2.3522;

        let distance = haversine_distance(london_lat, london_lon, paris_lat, paris_lon);
        assert!((distance - 344.0).abs() < 10.0, "Distance should be ~344km, got {}", distance);
    }

    #[test]
    fn test_coincident_points() {
        let delhi = Coordinates::new(28.6139, 77.2090);
        assert_eq!(distance_between(delhi, delhi), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let delhi = Coordinates::new(28.6139, 77.2090);
        let gurgaon = Coordinates::new(28.7041, 77.1025);

        let there = distance_between(delhi, gurgaon);
        let back = distance_between(gurgaon, delhi);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn test_nan_input() {
        assert!(haversine_distance(f64::NAN, 77.2, 28.6, 77.2).is_nan());
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(0.0), "0m");
        assert_eq!(format_distance(0.85), "850m");
        assert_eq!(format_distance(2.54), "2.5km");
        assert_eq!(format_distance(19.6), "20km");
    }
}
