//! Pencil hatching for the tone, then the strongest contours as line art on top.

use {
  super::{grid_len, millis, DrawConfig, Phase, Plan, Style},
  crate::{
    geometry::{polar_offset, Primitive, P2, BLACK},
    vision::{self, Contour, Retrieval, SourceImage}
  },
  image::Rgb,
  itertools::Itertools,
  rand::prelude::*,
  rand_pcg::Pcg64,
  std::f32::consts::PI
};

pub const BLUR_SIGMA: f32 = 1.1;
pub const CANNY_LOW: f32 = 30.0;
pub const CANNY_HIGH: f32 = 100.0;
pub const MIN_CONTOURS: usize = 10;
/// Only pixels darker than this get hatched.
pub const SHADE_THRESHOLD: u8 = 200;
pub const MAX_HATCH: f32 = 5.0;

/// Stride of the shading grid.
pub fn tone_step(detail: f32) -> usize {
  ((101.0 - detail * 100.0) / 10.0).round().max(1.0) as usize
}

/// Contours kept for the line art, largest enclosed area first.
pub fn contours(source: &SourceImage, detail: f32) -> Vec<Contour> {
  let blurred = vision::gaussian(source.gray(), BLUR_SIGMA);
  let edges = vision::detect_edges(&blurred, CANNY_LOW, CANNY_HIGH);
  let contours = vision::sort_by_area(vision::find_contours(&edges, Retrieval::List));
  let keep = vision::keep_count(contours.len(), detail, MIN_CONTOURS);
  contours.into_iter().take(keep).collect()
}

/// Short stroke whose length grows with darkness, at a random angle.
fn hatch(p: P2, value: u8, rng: &mut impl Rng) -> Primitive {
  let darkness = (255 - value) as f32;
  let length = (darkness / 255.0 * MAX_HATCH) as i32 + 1;
  let angle = rng.gen_range(0.0..PI);
  Primitive::segment(p, polar_offset(p, angle, length as f32), Rgb([value; 3]), 1)
}

/// Mostly 1px, sometimes a heavier 2px segment.
fn pressure(rng: &mut impl Rng) -> u32 {
  if rng.gen_bool(0.2) { 2 } else { 1 }
}

pub fn plan(source: &SourceImage, config: &DrawConfig, mut rng: Pcg64) -> Plan {
  let step = tone_step(config.detail);
  let (w, h) = (source.width(), source.height());
  let contours = contours(source, config.detail);

  let shading = {
    let source = source.clone();
    let mut rng = Pcg64::seed_from_u64(rng.gen());
    itertools::iproduct!((0..h).step_by(step), (0..w).step_by(step))
      .map(move |(y, x)| {
        let p = P2::new(x as i32, y as i32);
        let value = source.gray_at(p);
        if value < SHADE_THRESHOLD {
          vec![hatch(p, value, &mut rng)]
        } else {
          vec![]
        }
      })
  };

  let contour_count = contours.len();
  let line_art = contours.into_iter()
    .map(move |contour| contour.points.iter()
      .tuple_windows()
      .map(|(a, b)| Primitive::segment(*a, *b, BLACK, pressure(&mut rng)))
      .collect());

  Plan::new(Style::Realistic, vec![
    Phase::new("shading", grid_len(h, step) * grid_len(w, step), 50, millis(10), shading),
    Phase::new("contours", contour_count, 5, millis(50), line_art)
  ])
}
