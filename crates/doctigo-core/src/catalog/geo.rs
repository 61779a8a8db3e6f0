//! Great-circle distance and travel-time estimation.

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates, in kilometers.
pub fn distance_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Estimated travel time in minutes, assuming ~30 km/h city traffic.
pub fn estimated_travel_minutes(distance_km: f64) -> u32 {
    (distance_km * 2.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance_for_same_point() {
        assert!(distance_km(22.5726, 88.3639, 22.5726, 88.3639) < 1e-9);
    }

    #[test]
    fn test_known_city_pair_distance() {
        // central Kolkata to the western suburbs, roughly 10-11 km
        let d = distance_km(22.5726, 88.3639, 22.5958, 88.2636);
        assert!(d > 9.0 && d < 12.0, "unexpected distance: {d}");
    }

    #[test]
    fn test_travel_time_scales_with_distance() {
        assert_eq!(estimated_travel_minutes(0.0), 0);
        assert_eq!(estimated_travel_minutes(10.0), 20);
        assert_eq!(estimated_travel_minutes(10.3), 21);
    }
}
