//! Rough edges, each traced one to three times with a shaky hand.

use {
  super::{millis, DrawConfig, Phase, Plan, Stroke, Style},
  crate::{
    geometry::{Primitive, P2, V2, BLACK},
    vision::{self, Contour, Retrieval, SourceImage}
  },
  itertools::Itertools,
  rand::{prelude::*, seq::index},
  rand_pcg::Pcg64
};

pub const CANNY_LOW: f32 = 20.0;
pub const CANNY_HIGH: f32 = 80.0;
pub const MIN_CONTOURS: usize = 10;
pub const JITTER: i32 = 2;
pub const MAX_PASSES: usize = 3;

/// Random subset of the contours, in random order.
pub fn contours(source: &SourceImage, detail: f32, rng: &mut impl Rng) -> Vec<Contour> {
  let edges = vision::detect_edges(source.gray(), CANNY_LOW, CANNY_HIGH);
  let mut contours: Vec<_> = vision::find_contours(&edges, Retrieval::List)
    .into_iter()
    .map(Some)
    .collect();
  let keep = vision::keep_count(contours.len(), detail, MIN_CONTOURS);
  index::sample(rng, contours.len(), keep)
    .into_iter()
    .filter_map(|i| contours[i].take())
    .collect()
}

fn passes(contour: &Contour, rng: &mut impl Rng) -> Stroke {
  if contour.len() < 2 { return vec![]; }
  (0..rng.gen_range(1..=MAX_PASSES))
    .flat_map(|_| {
      let shaky: Vec<P2> = contour.points.iter()
        .map(|p| *p + V2::new(
          rng.gen_range(-JITTER..=JITTER),
          rng.gen_range(-JITTER..=JITTER)
        ))
        .collect();
      shaky.into_iter()
        .tuple_windows()
        .map(|(a, b)| Primitive::segment(a, b, BLACK, rng.gen_range(1..=2)))
        .collect::<Vec<_>>()
    })
    .collect()
}

pub fn plan(source: &SourceImage, config: &DrawConfig, mut rng: Pcg64) -> Plan {
  let contours = contours(source, config.detail, &mut rng);
  Plan::new(Style::Sketch, vec![
    Phase::new("contours", contours.len(), 3, millis(30), contours.into_iter()
      .map(move |contour| passes(&contour, &mut rng)))
  ])
}
