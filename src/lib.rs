#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // Often a matter of taste
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)] // usize -> f64 for averaging point sets
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unreadable_literal)] // Coordinates read better without separators
#![allow(clippy::similar_names)] // lat/lng pairs

//! `swing-core` holds the spatial and keyboard-focus logic behind Swing
//! Connect's studio search, region tagging and list widgets.
//!
//! - [`coord`]: haversine distance, bounding boxes, rectangular containment.
//! - [`geohash`]: base32 geohash encoding and decoding.
//! - [`regions`]: nearest named region over an injected table.
//! - [`focus`]: focusable-element scanning and keyboard navigation handlers.

// Declare modules
pub mod constants;
pub mod coord;
pub mod focus;
pub mod geohash;
pub mod regions;
pub mod types;

// Re-export key public types and functions for easier use
pub use constants::{
  DEFAULT_GEOHASH_PRECISION, DEFAULT_NEAREST_REGION_KM, EARTH_RADIUS_KM, MAX_GEOHASH_PRECISION, SEOUL_BOUNDS,
};
pub use coord::{
  bounding_box, center_point, distance_km, format_distance, is_in_seoul, is_valid_coordinate, is_within_region_bounds,
  within_radius,
};
pub use focus::{
  first_focusable, focusable_elements, is_focusable, last_focusable, next_in_sequence, ActivationHandler,
  DeferredQueue, ElementInfo, ElementTree, EscapeHandler, FocusHost, FocusTrap, Key, KeyEvent, ListNavigationHandler,
  MemoryDocument, NodeId, Scheduler,
};
pub use regions::{nearest_region, region_center, NamedRegion, RegionTable};
pub use types::{
  BoundingBox, FocusError, GeoCoordinate, GeoError, NavigationAxis, NavigationOptions, SequenceDirection,
};
