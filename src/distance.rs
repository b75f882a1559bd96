//! Great-circle distance and the fixed degree/kilometer approximations
//! shared by the search pruning logic.

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Approximate kilometers spanned by one degree of latitude.
pub(crate) const KM_PER_DEG: f64 = 111.0;

/// Great-circle distance in kilometers between two (lat, lon) pairs in
/// degrees, via the haversine formula on a spherical Earth.
#[inline]
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// A radius in kilometers converted to a latitude degree span.
#[inline]
pub(crate) fn lat_degree_span(radius_km: f64) -> f64 {
    radius_km / KM_PER_DEG
}

/// A radius in kilometers converted to a longitude degree span at the given
/// latitude. Degrees of longitude shrink with cos(lat).
#[inline]
pub(crate) fn lon_degree_span(radius_km: f64, lat: f64) -> f64 {
    radius_km / (KM_PER_DEG * lat.to_radians().cos())
}
