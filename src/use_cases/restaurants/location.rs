use common::geocoder::{GeocodeAddress, GeocodeError, GeocodedLocation};
use db_adapters::restaurant_adapter::{BoundingBox, LocationParams};

use crate::UseCaseError;

pub const EARTH_RADIUS_MILES: f64 = 3963.0;

pub(crate) async fn locate<G: GeocodeAddress>(
    geocoder: &G,
    address: &str,
) -> Result<GeocodedLocation, UseCaseError> {
    geocoder.geocode(address).await.map_err(|e| match e {
        GeocodeError::NotFound(_) => {
            UseCaseError::BadRequest(format!("Could not locate {:?}", address.trim()))
        }
        GeocodeError::Provider(_) => {
            UseCaseError::ServiceUnavailable("Geocoding service is unavailable".to_string())
        }
    })
}

pub(crate) fn into_location_params(location: GeocodedLocation) -> LocationParams {
    LocationParams {
        latitude: location.latitude,
        longitude: location.longitude,
        formatted_address: location.formatted_address,
        street: location.street,
        city: location.city,
        county: location.county,
        postal_code: location.postal_code,
        country: location.country,
    }
}

/// Great-circle distance between two `(latitude, longitude)` points in degrees.
pub fn haversine_miles(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lat2) = (from.0.to_radians(), to.0.to_radians());
    let d_lat = lat2 - lat1;
    let d_lng = (to.1 - from.1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_MILES * a.sqrt().min(1.0).asin()
}

/// Smallest latitude/longitude box containing the circle. Falls back to all longitudes
/// near the poles or across the antimeridian.
pub fn bounding_box(center: (f64, f64), miles: f64) -> BoundingBox {
    let d_lat = (miles / EARTH_RADIUS_MILES).to_degrees();
    let min_latitude = (center.0 - d_lat).max(-90.0);
    let max_latitude = (center.0 + d_lat).min(90.0);

    let cos_lat = center.0.to_radians().cos();
    let d_lng = match cos_lat > f64::EPSILON {
        true => (miles / (EARTH_RADIUS_MILES * cos_lat)).to_degrees(),
        false => 180.0,
    };
    let (min_longitude, max_longitude) = match (
        center.1 - d_lng,
        center.1 + d_lng,
        min_latitude <= -90.0 || max_latitude >= 90.0,
    ) {
        (min, max, false) if min >= -180.0 && max <= 180.0 => (min, max),
        _ => (-180.0, 180.0),
    };

    BoundingBox {
        min_latitude,
        max_latitude,
        min_longitude,
        max_longitude,
    }
}
