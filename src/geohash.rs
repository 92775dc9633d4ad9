// src/geohash.rs

//! Base32 geohash encoding.
//!
//! Bits alternate between longitude and latitude, longitude first. Each bit
//! halves the current interval; every five bits become one character of
//! [`GEOHASH_BASE32`].

use crate::constants::{GEOHASH_BASE32, GEOHASH_BITS_PER_CHAR, MAX_GEOHASH_PRECISION, MAX_LAT_DEG, MAX_LNG_DEG};
use crate::types::{BoundingBox, GeoCoordinate, GeoError};

/// Half-open interval being bisected.
#[derive(Debug, Clone, Copy)]
struct Interval {
  lo: f64,
  hi: f64,
}

impl Interval {
  /// Halves the interval towards `value`; returns the bit for the chosen half.
  #[inline]
  fn bisect_towards(&mut self, value: f64) -> u8 {
    let mid = (self.lo + self.hi) * 0.5;
    if value >= mid {
      self.lo = mid;
      1
    } else {
      self.hi = mid;
      0
    }
  }

  /// Halves the interval according to an already known bit.
  #[inline]
  fn bisect_with(&mut self, bit: u8) {
    let mid = (self.lo + self.hi) * 0.5;
    if bit == 1 {
      self.lo = mid;
    } else {
      self.hi = mid;
    }
  }
}

/// Encodes `c` as a geohash of `precision` characters.
///
/// `precision == 0` yields an empty string. Out-of-range but finite input is
/// not rejected and saturates at the edge cells; run
/// [`crate::coord::is_valid_coordinate`] first for strict checking.
///
/// # Errors
/// [`GeoError::InvalidCoordinate`] if either component is NaN or infinite.
/// [`GeoError::GeohashPrecision`] if `precision` exceeds [`MAX_GEOHASH_PRECISION`].
pub fn encode(c: &GeoCoordinate, precision: usize) -> Result<String, GeoError> {
  if !c.lat.is_finite() || !c.lng.is_finite() {
    return Err(GeoError::InvalidCoordinate { lat: c.lat, lng: c.lng });
  }
  if precision > MAX_GEOHASH_PRECISION {
    return Err(GeoError::GeohashPrecision {
      precision,
      max: MAX_GEOHASH_PRECISION,
    });
  }

  let mut lat = Interval {
    lo: -MAX_LAT_DEG,
    hi: MAX_LAT_DEG,
  };
  let mut lng = Interval {
    lo: -MAX_LNG_DEG,
    hi: MAX_LNG_DEG,
  };
  let mut hash = String::with_capacity(precision);
  let mut even_bit = true;

  for _ in 0..precision {
    let mut idx = 0u8;
    for _ in 0..GEOHASH_BITS_PER_CHAR {
      let bit = if even_bit {
        lng.bisect_towards(c.lng)
      } else {
        lat.bisect_towards(c.lat)
      };
      idx = (idx << 1) | bit;
      even_bit = !even_bit;
    }
    hash.push(char::from(GEOHASH_BASE32[usize::from(idx)]));
  }
  Ok(hash)
}

/// Index of `ch` in the base32 alphabet.
#[inline]
fn base32_index(ch: char) -> Option<u8> {
  let byte = u8::try_from(ch).ok()?;
  GEOHASH_BASE32
    .iter()
    .position(|&b| b == byte)
    .and_then(|i| u8::try_from(i).ok())
}

/// The cell a geohash denotes. The empty hash denotes the whole world.
///
/// Matching is case-sensitive: geohashes are lowercase.
///
/// # Errors
/// [`GeoError::InvalidGeohash`] on the first character outside the alphabet.
pub fn decode_bounds(hash: &str) -> Result<BoundingBox, GeoError> {
  let mut lat = Interval {
    lo: -MAX_LAT_DEG,
    hi: MAX_LAT_DEG,
  };
  let mut lng = Interval {
    lo: -MAX_LNG_DEG,
    hi: MAX_LNG_DEG,
  };
  let mut even_bit = true;

  for (position, ch) in hash.chars().enumerate() {
    let idx = base32_index(ch).ok_or_else(|| GeoError::InvalidGeohash {
      hash: hash.to_owned(),
      position,
      ch,
    })?;
    for shift in (0..GEOHASH_BITS_PER_CHAR).rev() {
      let bit = (idx >> shift) & 1;
      if even_bit {
        lng.bisect_with(bit);
      } else {
        lat.bisect_with(bit);
      }
      even_bit = !even_bit;
    }
  }

  Ok(BoundingBox {
    northeast: GeoCoordinate { lat: lat.hi, lng: lng.hi },
    southwest: GeoCoordinate { lat: lat.lo, lng: lng.lo },
  })
}

/// Center of the cell a geohash denotes.
pub fn decode(hash: &str) -> Result<GeoCoordinate, GeoError> {
  decode_bounds(hash).map(|bbox| bbox.center())
}
