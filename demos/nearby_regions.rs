//! Tags a few venue coordinates with their nearest Seoul neighborhood and
//! geohash, the way community posts are tagged before they are stored.
//!
//! Run with `cargo run --example nearby_regions`.

use swing_core::{geohash, *};

fn main() -> Result<(), GeoError> {
  let table = RegionTable::seoul();
  let venues = [
    ("Club Bogie", GeoCoordinate::new(37.5536, 126.9215)),
    ("Gangnam Social", GeoCoordinate::new(37.5003, 127.0262)),
    ("Haeundae Beach", GeoCoordinate::new(35.1587, 129.1604)),
  ];

  for (name, venue) in &venues {
    let hash = geohash::encode(venue, DEFAULT_GEOHASH_PRECISION)?;
    let region = table.nearest(venue).unwrap_or("(none)");
    println!("{name:<16} {hash}  region={region:<18} in_seoul={}", is_in_seoul(venue));
  }

  let points: Vec<GeoCoordinate> = venues.iter().map(|(_, c)| *c).collect();
  let center = center_point(&points)?;
  println!("\nstudios within 10km of City Hall:");
  let city_hall = table.center_of("City Hall").unwrap_or(center);
  for (idx, km) in within_radius(&city_hall, 10.0, &points) {
    println!("  {:<16} {}", venues[idx].0, format_distance(km));
  }
  Ok(())
}
