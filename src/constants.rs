//! Spatial and navigation constants.

use crate::types::{BoundingBox, GeoCoordinate};

/// Mean Earth radius in kilometers used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Approximate length of one degree of latitude in kilometers.
pub const KM_PER_DEGREE_LAT: f64 = 111.0;

/// Valid latitude range in degrees.
pub const MAX_LAT_DEG: f64 = 90.0;
/// Valid longitude range in degrees.
pub const MAX_LNG_DEG: f64 = 180.0;

/// Geohash base32 alphabet (no `a`, `i`, `l`, `o`).
pub const GEOHASH_BASE32: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Bits carried by one geohash character.
pub const GEOHASH_BITS_PER_CHAR: u32 = 5;

/// Geohash length used when the caller has no preference (~38m x 19m cells).
pub const DEFAULT_GEOHASH_PRECISION: usize = 8;

/// Longest geohash [`crate::geohash::encode`] produces. Past this the f64
/// intervals stop shrinking for typical coordinates.
pub const MAX_GEOHASH_PRECISION: usize = 22;

/// Default search radius for [`crate::regions::nearest_region`].
pub const DEFAULT_NEAREST_REGION_KM: f64 = 5.0;

/// Rectangular extent of Seoul used by [`crate::coord::is_in_seoul`].
///
/// This is an axis-aligned box, not the city outline: points in the corners of
/// the box (parts of Gyeonggi-do) are reported as inside.
pub const SEOUL_BOUNDS: BoundingBox = BoundingBox {
  northeast: GeoCoordinate {
    lat: 37.7151,
    lng: 127.2693,
  },
  southwest: GeoCoordinate {
    lat: 37.4133,
    lng: 126.7341,
  },
};
