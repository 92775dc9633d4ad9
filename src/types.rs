//! Core data structures shared by the spatial and focus modules.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Latitude/longitude coordinates in decimal degrees.
///
/// Nothing here enforces the valid range; run [`crate::coord::is_valid_coordinate`]
/// on untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoCoordinate {
  /// Latitude in degrees, `[-90, 90]`.
  pub lat: f64,
  /// Longitude in degrees, `[-180, 180]`.
  pub lng: f64,
}

impl GeoCoordinate {
  /// Creates a coordinate from degrees.
  #[must_use]
  pub const fn new(lat: f64, lng: f64) -> Self {
    Self { lat, lng }
  }
}

/// Axis-aligned box in lat/lng space.
///
/// `northeast.lat >= southwest.lat` holds for boxes built by
/// [`crate::coord::bounding_box`]. Longitudes are never wrapped, so a box near
/// the antimeridian may have `northeast.lng > 180`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingBox {
  /// North-east corner (max lat, max lng).
  pub northeast: GeoCoordinate,
  /// South-west corner (min lat, min lng).
  pub southwest: GeoCoordinate,
}

impl BoundingBox {
  /// Height of the box in degrees of latitude.
  #[must_use]
  pub fn height_deg(&self) -> f64 {
    self.northeast.lat - self.southwest.lat
  }

  /// Width of the box in degrees of longitude.
  #[must_use]
  pub fn width_deg(&self) -> f64 {
    self.northeast.lng - self.southwest.lng
  }

  /// Midpoint of the box.
  #[must_use]
  pub fn center(&self) -> GeoCoordinate {
    GeoCoordinate {
      lat: (self.northeast.lat + self.southwest.lat) * 0.5,
      lng: (self.northeast.lng + self.southwest.lng) * 0.5,
    }
  }
}

/// Which arrow keys a list navigation handler responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NavigationAxis {
  /// `ArrowUp` / `ArrowDown`.
  #[default]
  Vertical,
  /// `ArrowLeft` / `ArrowRight`.
  Horizontal,
  /// All four arrows.
  Both,
  /// No arrows; only `Home` / `End`.
  None,
}

impl NavigationAxis {
  /// Builds the axis from the `vertical` / `horizontal` flag pair.
  #[must_use]
  pub const fn from_flags(vertical: bool, horizontal: bool) -> Self {
    match (vertical, horizontal) {
      (true, true) => NavigationAxis::Both,
      (true, false) => NavigationAxis::Vertical,
      (false, true) => NavigationAxis::Horizontal,
      (false, false) => NavigationAxis::None,
    }
  }

  /// Whether `ArrowUp` / `ArrowDown` are intercepted.
  #[must_use]
  pub const fn vertical(self) -> bool {
    matches!(self, NavigationAxis::Vertical | NavigationAxis::Both)
  }

  /// Whether `ArrowLeft` / `ArrowRight` are intercepted.
  #[must_use]
  pub const fn horizontal(self) -> bool {
    matches!(self, NavigationAxis::Horizontal | NavigationAxis::Both)
  }
}

/// Options for [`crate::focus::ListNavigationHandler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavigationOptions {
  /// Respond to `ArrowUp` / `ArrowDown`.
  pub vertical: bool,
  /// Respond to `ArrowLeft` / `ArrowRight`.
  pub horizontal: bool,
}

impl Default for NavigationOptions {
  fn default() -> Self {
    Self {
      vertical: true,
      horizontal: false,
    }
  }
}

impl NavigationOptions {
  /// The axis these flags select.
  #[must_use]
  pub const fn axis(&self) -> NavigationAxis {
    NavigationAxis::from_flags(self.vertical, self.horizontal)
  }
}

impl From<NavigationAxis> for NavigationOptions {
  fn from(axis: NavigationAxis) -> Self {
    Self {
      vertical: axis.vertical(),
      horizontal: axis.horizontal(),
    }
  }
}

/// Direction of travel through an ordered focus sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceDirection {
  /// Forward, wrapping from last to first.
  Next,
  /// Backward, wrapping from first to last.
  Previous,
}

/// Errors from the spatial modules.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
  /// Latitude or longitude is NaN or infinite.
  #[error("coordinate ({lat}, {lng}) is not finite")]
  InvalidCoordinate { lat: f64, lng: f64 },
  /// A center point was requested for zero coordinates.
  #[error("cannot compute the center of an empty point set")]
  EmptyPointSet,
  /// A geohash contained a character outside the base32 alphabet.
  #[error("invalid geohash {hash:?}: character {ch:?} at position {position}")]
  InvalidGeohash { hash: String, position: usize, ch: char },
  /// A geohash longer than the encoder can resolve was requested.
  #[error("geohash precision {precision} exceeds the maximum of {max}")]
  GeohashPrecision { precision: usize, max: usize },
  /// Two regions in one table share a name.
  #[error("duplicate region name {0:?}")]
  DuplicateRegion(String),
  /// A region was declared with an empty name.
  #[error("region name must not be empty")]
  EmptyRegionName,
  /// A region table could not be parsed.
  #[error("invalid region table: {0}")]
  RegionConfig(String),
}

/// Errors from the focus modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FocusError {
  /// The container handle does not resolve to an element in the tree.
  #[error("container does not resolve to an element")]
  UnknownContainer,
  /// An element handle does not resolve, e.g. it was removed.
  #[error("element does not resolve")]
  UnknownElement,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_axis_from_flags() {
    assert_eq!(NavigationAxis::from_flags(true, false), NavigationAxis::Vertical);
    assert_eq!(NavigationAxis::from_flags(false, true), NavigationAxis::Horizontal);
    assert_eq!(NavigationAxis::from_flags(true, true), NavigationAxis::Both);
    assert_eq!(NavigationAxis::from_flags(false, false), NavigationAxis::None);
  }

  #[test]
  fn test_options_round_trip_through_axis() {
    for axis in [
      NavigationAxis::Vertical,
      NavigationAxis::Horizontal,
      NavigationAxis::Both,
      NavigationAxis::None,
    ] {
      assert_eq!(NavigationOptions::from(axis).axis(), axis);
    }
    assert_eq!(NavigationOptions::default().axis(), NavigationAxis::Vertical);
  }

  #[test]
  fn test_bbox_center_and_extent() {
    let bbox = BoundingBox {
      northeast: GeoCoordinate::new(2.0, 4.0),
      southwest: GeoCoordinate::new(-2.0, 0.0),
    };
    assert_eq!(bbox.center(), GeoCoordinate::new(0.0, 2.0));
    assert!((bbox.height_deg() - 4.0).abs() < f64::EPSILON);
    assert!((bbox.width_deg() - 4.0).abs() < f64::EPSILON);
  }
}
