//! A grid of coloured dots, darker samples getting larger dots.

use {
  super::{grid_len, millis, DrawConfig, Phase, Plan, Style},
  crate::{
    geometry::{Primitive, P2, V2},
    vision::SourceImage
  },
  rand::prelude::*,
  rand_pcg::Pcg64
};

pub const MAX_RADIUS: i32 = 3;
pub const JITTER: i32 = 2;

/// Stride of the sampling grid, finer as detail grows.
pub fn point_step(detail: f32) -> usize {
  ((101.0 - detail * 100.0) / 5.0).round().max(1.0) as usize
}

/// Dot radius for a sample of `brightness` in `[0, 255]`; non-increasing, at least 1.
pub fn dot_radius(brightness: f32, max_radius: i32) -> i32 {
  ((max_radius as f32 * (1.0 - brightness / 255.0)) as i32).max(1)
}

pub fn plan(source: &SourceImage, config: &DrawConfig, mut rng: Pcg64) -> Plan {
  let step = point_step(config.detail);
  let (w, h) = (source.width(), source.height());
  let len = grid_len(h, step) * grid_len(w, step);
  let source = source.clone();

  let dots = itertools::iproduct!((0..h).step_by(step), (0..w).step_by(step))
    .map(move |(y, x)| {
      let p = P2::new(x as i32, y as i32);
      let color = source.color_at(p);
      let brightness = color.0.iter().map(|&c| c as f32).sum::<f32>() / 3.0;
      let offset = V2::new(
        rng.gen_range(-JITTER..=JITTER),
        rng.gen_range(-JITTER..=JITTER)
      );
      vec![Primitive::dot(p + offset, dot_radius(brightness, MAX_RADIUS), color)]
    });

  Plan::new(Style::Pointillist, vec![
    Phase::new("dots", len, 100, millis(10), dots)
  ])
}
