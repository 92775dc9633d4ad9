// src/regions.rs

//! Named regions and nearest-region lookup.
//!
//! Tables are plain values passed into the lookup functions, so callers can
//! swap in their own set of neighborhoods. [`RegionTable::seoul`] is the set
//! used for tagging community posts.

use crate::constants::DEFAULT_NEAREST_REGION_KM;
use crate::coord::distance_km;
use crate::types::{GeoCoordinate, GeoError};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, trace};

/// A named center point.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamedRegion {
  /// Unique, case-sensitive key.
  pub name: String,
  /// Center of the region.
  pub center: GeoCoordinate,
}

impl NamedRegion {
  /// Creates a region from a name and degrees.
  pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Self {
    Self {
      name: name.into(),
      center: GeoCoordinate::new(lat, lng),
    }
  }
}

/// Ordered table of regions with unique names.
///
/// Iteration order is insertion order and decides ties in [`nearest_region`].
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<NamedRegion>", into = "Vec<NamedRegion>"))]
pub struct RegionTable {
  regions: Vec<NamedRegion>,
}

// (name, lat, lng)
const SEOUL_REGIONS: &[(&str, f64, f64)] = &[
  ("Hongdae", 37.5563, 126.9236),
  ("Sinchon", 37.5551, 126.9368),
  ("City Hall", 37.5667, 126.9784),
  ("Jongno", 37.5704, 126.9921),
  ("Itaewon", 37.5345, 126.9946),
  ("Yeouido", 37.5219, 126.9245),
  ("Gangnam", 37.4979, 127.0276),
  ("Seongsu", 37.5446, 127.0557),
  ("Konkuk University", 37.5404, 127.0692),
  ("Jamsil", 37.5133, 127.1001),
];

impl RegionTable {
  /// Builds a table, rejecting empty and duplicate names.
  pub fn new(regions: Vec<NamedRegion>) -> Result<Self, GeoError> {
    {
      let mut seen = HashSet::with_capacity(regions.len());
      for region in &regions {
        if region.name.is_empty() {
          return Err(GeoError::EmptyRegionName);
        }
        if !seen.insert(region.name.as_str()) {
          return Err(GeoError::DuplicateRegion(region.name.clone()));
        }
      }
    }
    Ok(Self { regions })
  }

  /// The built-in table of Seoul neighborhoods with an active swing scene.
  #[must_use]
  pub fn seoul() -> Self {
    Self {
      regions: SEOUL_REGIONS
        .iter()
        .map(|&(name, lat, lng)| NamedRegion::new(name, lat, lng))
        .collect(),
    }
  }

  /// Parses a JSON array of `{"name": .., "center": {"lat": .., "lng": ..}}`.
  #[cfg(feature = "serde")]
  pub fn from_json(json: &str) -> Result<Self, GeoError> {
    serde_json::from_str(json).map_err(|e| GeoError::RegionConfig(e.to_string()))
  }

  /// Regions in table order.
  pub fn iter(&self) -> impl Iterator<Item = &NamedRegion> {
    self.regions.iter()
  }

  /// Number of regions.
  #[must_use]
  pub fn len(&self) -> usize {
    self.regions.len()
  }

  /// Whether the table has no regions.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.regions.is_empty()
  }

  /// Same as [`region_center`].
  #[must_use]
  pub fn center_of(&self, name: &str) -> Option<GeoCoordinate> {
    region_center(self, name)
  }

  /// [`nearest_region`] with [`DEFAULT_NEAREST_REGION_KM`].
  #[must_use]
  pub fn nearest(&self, c: &GeoCoordinate) -> Option<&str> {
    nearest_region(self, c, DEFAULT_NEAREST_REGION_KM)
  }
}

impl TryFrom<Vec<NamedRegion>> for RegionTable {
  type Error = GeoError;

  fn try_from(regions: Vec<NamedRegion>) -> Result<Self, Self::Error> {
    RegionTable::new(regions)
  }
}

impl From<RegionTable> for Vec<NamedRegion> {
  fn from(table: RegionTable) -> Self {
    table.regions
  }
}

/// Center of the region called `name`. Exact, case-sensitive match.
#[must_use]
pub fn region_center(table: &RegionTable, name: &str) -> Option<GeoCoordinate> {
  if name.is_empty() {
    return None;
  }
  table.iter().find(|r| r.name == name).map(|r| r.center)
}

/// Name of the region whose center is closest to `c`, if it lies within
/// `max_km`. Equidistant regions resolve to the one listed first.
#[must_use]
pub fn nearest_region<'a>(table: &'a RegionTable, c: &GeoCoordinate, max_km: f64) -> Option<&'a str> {
  let mut best: Option<(&NamedRegion, f64)> = None;
  for region in table.iter() {
    let d = distance_km(c, &region.center);
    trace!(region = %region.name, distance_km = d, "region candidate");
    // Strict comparison keeps the earlier entry on ties. NaN never wins.
    if !d.is_nan() && best.is_none_or(|(_, best_d)| d < best_d) {
      best = Some((region, d));
    }
  }

  match best {
    Some((region, d)) if d <= max_km => Some(region.name.as_str()),
    Some((region, d)) => {
      debug!(closest = %region.name, distance_km = d, max_km, "no region within range");
      None
    }
    None => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn spaced_table() -> RegionTable {
    RegionTable::new(vec![
      NamedRegion::new("north", 10.0, 0.0),
      NamedRegion::new("south", -10.0, 0.0),
      NamedRegion::new("east", 0.0, 10.0),
    ])
    .unwrap()
  }

  #[test]
  fn test_new_rejects_duplicates_and_empty_names() {
    let dup = RegionTable::new(vec![NamedRegion::new("a", 0.0, 0.0), NamedRegion::new("a", 1.0, 1.0)]);
    assert_eq!(dup, Err(GeoError::DuplicateRegion("a".to_owned())));
    let empty = RegionTable::new(vec![NamedRegion::new("", 0.0, 0.0)]);
    assert_eq!(empty, Err(GeoError::EmptyRegionName));
  }

  #[test]
  fn test_seoul_table_is_valid() {
    let table = RegionTable::seoul();
    assert_eq!(RegionTable::new(table.iter().cloned().collect()), Ok(table.clone()));
    assert!(!table.is_empty());
  }

  #[test]
  fn test_region_center_lookup() {
    let table = RegionTable::seoul();
    assert_eq!(region_center(&table, "Gangnam"), Some(GeoCoordinate::new(37.4979, 127.0276)));
    assert_eq!(region_center(&table, "gangnam"), None, "case-sensitive");
    assert_eq!(region_center(&table, ""), None);
    assert_eq!(region_center(&table, "Busan"), None);
  }

  #[test]
  fn test_nearest_region_within_range() {
    let table = spaced_table();
    assert_eq!(nearest_region(&table, &GeoCoordinate::new(10.01, 0.0), 5.0), Some("north"));
    assert_eq!(nearest_region(&table, &GeoCoordinate::new(0.0, 10.02), 5.0), Some("east"));
  }

  #[test]
  fn test_nearest_region_out_of_range() {
    let table = spaced_table();
    assert_eq!(nearest_region(&table, &GeoCoordinate::new(0.0, 0.0), 5.0), None);
    assert_eq!(nearest_region(&RegionTable::default(), &GeoCoordinate::new(0.0, 0.0), 5.0), None);
  }

  #[test]
  fn test_nearest_region_tie_prefers_first() {
    let table =
      RegionTable::new(vec![NamedRegion::new("west", 0.0, -0.01), NamedRegion::new("east", 0.0, 0.01)]).unwrap();
    assert_eq!(nearest_region(&table, &GeoCoordinate::new(0.0, 0.0), 5.0), Some("west"));

    let flipped =
      RegionTable::new(vec![NamedRegion::new("east", 0.0, 0.01), NamedRegion::new("west", 0.0, -0.01)]).unwrap();
    assert_eq!(nearest_region(&flipped, &GeoCoordinate::new(0.0, 0.0), 5.0), Some("east"));
  }

  #[test]
  fn test_nearest_region_nan_input() {
    let table = spaced_table();
    assert_eq!(nearest_region(&table, &GeoCoordinate::new(f64::NAN, 0.0), 5.0), None);
  }

  #[test]
  fn test_seoul_nearest_default_radius() {
    let table = RegionTable::seoul();
    assert_eq!(table.nearest(&GeoCoordinate::new(37.5133, 127.1001)), Some("Jamsil"));
    assert_eq!(table.nearest(&GeoCoordinate::new(35.1796, 129.0756)), None);
  }
}
