// src/coord.rs

use crate::constants::{EARTH_RADIUS_KM, KM_PER_DEGREE_LAT, MAX_LAT_DEG, MAX_LNG_DEG, SEOUL_BOUNDS};
use crate::types::{BoundingBox, GeoCoordinate, GeoError};
use std::cmp::Ordering;
use std::f64::consts::FRAC_PI_2;

/// Whether both components are finite and inside `[-90, 90]` x `[-180, 180]`.
#[inline]
#[must_use]
pub fn is_valid_coordinate(c: &GeoCoordinate) -> bool {
  c.lat.is_finite() && c.lng.is_finite() && c.lat.abs() <= MAX_LAT_DEG && c.lng.abs() <= MAX_LNG_DEG
}

/// Reduces a longitude difference in degrees to the shortest signed arc, `[-180, 180]`.
#[inline]
#[must_use]
pub(crate) fn shortest_lng_delta(delta: f64) -> f64 {
  let mut d = delta % 360.0;
  if d > 180.0 {
    d -= 360.0;
  } else if d < -180.0 {
    d += 360.0;
  }
  d
}

/// The great circle distance in kilometers between two coordinates.
///
/// Uses the haversine formula on a sphere of radius [`EARTH_RADIUS_KM`]. The
/// longitude delta is taken along the shorter arc, so points on either side of
/// the antimeridian are close together.
///
/// Invalid input is not rejected; NaN components produce NaN.
#[must_use]
pub fn distance_km(a: &GeoCoordinate, b: &GeoCoordinate) -> f64 {
  let lat_a = a.lat.to_radians();
  let lat_b = b.lat.to_radians();
  let sin_lat_half = ((b.lat - a.lat).to_radians() * 0.5).sin();
  let sin_lng_half = (shortest_lng_delta(b.lng - a.lng).to_radians() * 0.5).sin();
  let h = sin_lat_half * sin_lat_half + lat_a.cos() * lat_b.cos() * sin_lng_half * sin_lng_half;
  let h = h.clamp(0.0, 1.0);
  2.0 * h.sqrt().atan2((1.0 - h).sqrt()) * EARTH_RADIUS_KM
}

/// Box of `radius_km` around `center`.
///
/// The latitude half-height is `radius_km / 111`; the longitude half-width is
/// that divided by `cos(lat)`, so boxes widen towards the poles. Longitudes
/// are not wrapped at the antimeridian.
#[must_use]
pub fn bounding_box(center: &GeoCoordinate, radius_km: f64) -> BoundingBox {
  let lat_delta = radius_km / KM_PER_DEGREE_LAT;
  let lng_delta = lat_delta / center.lat.to_radians().cos();
  BoundingBox {
    northeast: GeoCoordinate {
      lat: center.lat + lat_delta,
      lng: center.lng + lng_delta,
    },
    southwest: GeoCoordinate {
      lat: center.lat - lat_delta,
      lng: center.lng - lng_delta,
    },
  }
}

/// Inclusive rectangular containment test.
///
/// This is a plain lat/lng comparison with no great-circle correction, so it
/// disagrees with [`distance_km`] near the corners of the box.
#[inline]
#[must_use]
pub fn is_within_region_bounds(c: &GeoCoordinate, bounds: &BoundingBox) -> bool {
  (bounds.southwest.lat..=bounds.northeast.lat).contains(&c.lat)
    && (bounds.southwest.lng..=bounds.northeast.lng).contains(&c.lng)
}

/// Whether `c` falls inside [`SEOUL_BOUNDS`].
#[inline]
#[must_use]
pub fn is_in_seoul(c: &GeoCoordinate) -> bool {
  is_within_region_bounds(c, &SEOUL_BOUNDS)
}

/// Arithmetic mean of a set of coordinates.
///
/// Suitable for points spread over a city; the mean is not meaningful for
/// sets that straddle the antimeridian.
pub fn center_point(points: &[GeoCoordinate]) -> Result<GeoCoordinate, GeoError> {
  if points.is_empty() {
    return Err(GeoError::EmptyPointSet);
  }
  let (lat_sum, lng_sum) = points
    .iter()
    .fold((0.0, 0.0), |(lat, lng), p| (lat + p.lat, lng + p.lng));
  let n = points.len() as f64;
  Ok(GeoCoordinate {
    lat: lat_sum / n,
    lng: lng_sum / n,
  })
}

/// Lat/lng box enclosing every point within `radius_km` of `center` on the
/// sphere, or `None` when that box would reach a pole or cross the
/// antimeridian.
///
/// Unlike [`bounding_box`] this uses the exact spherical extent, so nothing
/// inside the circle falls outside it.
fn enclosing_box(center: &GeoCoordinate, radius_km: f64) -> Option<BoundingBox> {
  // Slack for rounding in the trig below; about a millimeter.
  const PAD_DEG: f64 = 1e-8;

  let angle = radius_km / EARTH_RADIUS_KM;
  if !(0.0..FRAC_PI_2).contains(&angle) {
    return None;
  }
  let lat_delta = angle.to_degrees() + PAD_DEG;
  let lat_range = -MAX_LAT_DEG..=MAX_LAT_DEG;
  if !lat_range.contains(&(center.lat + lat_delta)) || !lat_range.contains(&(center.lat - lat_delta)) {
    return None;
  }

  let ratio = angle.sin() / center.lat.to_radians().cos();
  if !(0.0..1.0).contains(&ratio) {
    return None;
  }
  let lng_delta = ratio.asin().to_degrees() + PAD_DEG;
  let lng_range = -MAX_LNG_DEG..=MAX_LNG_DEG;
  if !lng_range.contains(&(center.lng + lng_delta)) || !lng_range.contains(&(center.lng - lng_delta)) {
    return None;
  }

  Some(BoundingBox {
    northeast: GeoCoordinate {
      lat: center.lat + lat_delta,
      lng: center.lng + lng_delta,
    },
    southwest: GeoCoordinate {
      lat: center.lat - lat_delta,
      lng: center.lng - lng_delta,
    },
  })
}

/// Points within `radius_km` of `center`, as `(index, distance_km)` sorted by
/// distance. Equal distances keep input order.
///
/// A box prefilter discards obvious misses before the haversine check. The
/// prefilter is skipped when the box would cross the antimeridian or a pole.
#[must_use]
pub fn within_radius(center: &GeoCoordinate, radius_km: f64, points: &[GeoCoordinate]) -> Vec<(usize, f64)> {
  let prefilter = enclosing_box(center, radius_km);

  let mut hits: Vec<(usize, f64)> = points
    .iter()
    .enumerate()
    .filter(|(_, p)| prefilter.as_ref().is_none_or(|bbox| is_within_region_bounds(p, bbox)))
    .map(|(i, p)| (i, distance_km(center, p)))
    .filter(|&(_, d)| d <= radius_km)
    .collect();
  hits.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
  hits
}

/// Human-readable distance: whole meters below 1 km, one decimal of km above.
///
/// The unit is picked after rounding to meters, so 999.6 m reads as `1.0km`.
#[must_use]
pub fn format_distance(km: f64) -> String {
  let meters = (km * 1000.0).round();
  if meters < 1000.0 {
    format!("{meters}m")
  } else {
    format!("{km:.1}km")
  }
}
