//! Irregular flat-coloured polygons, each taking the mean colour of the square it sits in.

use {
  super::{millis, DrawConfig, Phase, Plan, Style},
  crate::{
    geometry::{Primitive, P2, V2},
    vision::SourceImage
  },
  rand::prelude::*,
  rand_pcg::Pcg64,
  std::ops::RangeInclusive
};

pub const MIN_SIDE: u32 = 10;

pub fn polygon_count(detail: f32) -> usize {
  (50.0 + 450.0 * detail).round() as usize
}

/// Side lengths of the sampled squares; never larger than the image.
pub fn side_range(detail: f32, width: u32, height: u32) -> RangeInclusive<u32> {
  let limit = width.min(height).max(1);
  let max = ((30.0 * detail) as u32).max(MIN_SIDE + 1).min(limit);
  MIN_SIDE.min(max)..=max
}

/// One polygon with 3 to 5 vertices scattered over the square `origin + [0, side]²`.
fn shard(origin: P2, side: u32, rng: &mut impl Rng) -> Vec<P2> {
  let side = side as i32;
  (0..rng.gen_range(3..=5))
    .map(|_| origin + V2::new(rng.gen_range(0..=side), rng.gen_range(0..=side)))
    .collect()
}

pub fn plan(source: &SourceImage, config: &DrawConfig, mut rng: Pcg64) -> Plan {
  let count = polygon_count(config.detail);
  let (w, h) = (source.width(), source.height());
  let sides = side_range(config.detail, w, h);
  let source = source.clone();

  let shards = (0..count).map(move |_| {
    let side = rng.gen_range(sides.clone());
    let origin = P2::new(
      rng.gen_range(0..=w - side) as i32,
      rng.gen_range(0..=h - side) as i32
    );
    match source.region_mean(origin, side, side) {
      Some(fill) => vec![Primitive::Polygon { points: shard(origin, side, &mut rng), fill }],
      None => vec![]
    }
  });

  Plan::new(Style::Cubist, vec![
    Phase::new("shards", count, 10, millis(10), shards)
  ])
}
