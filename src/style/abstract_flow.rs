//! Free-floating curves, circles and lines in colours picked from the source.

use {
  super::{millis, DrawConfig, Phase, Plan, Style},
  crate::{
    geometry::{clamp_to, polar_offset, Dimensions, Primitive, P2},
    vision::SourceImage
  },
  image::Rgb,
  rand::prelude::*,
  rand_pcg::Pcg64,
  std::f32::consts::TAU
};

pub const COLOR_SHIFT: i16 = 20;

pub fn element_count(detail: f32) -> usize {
  (20.0 + 180.0 * detail).round() as usize
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Element { Curve, Circle, Line }

impl Element {
  const ALL: [Element; 3] = [Element::Curve, Element::Circle, Element::Line];
}

/// Same offset on every channel, saturating.
pub fn shift(color: Rgb<u8>, by: i16) -> Rgb<u8> {
  Rgb(color.0.map(|c| (c as i16 + by).clamp(0, 255) as u8))
}

/// Random walk of 5 to 15 steps, each 5 to 20 pixels long, kept inside `bounds`.
fn curve(start: P2, bounds: Dimensions, rng: &mut impl Rng) -> Vec<P2> {
  let segments = rng.gen_range(5..=15);
  std::iter::successors(Some(start), |&p| {
    let angle = rng.gen_range(0.0..TAU);
    let distance = rng.gen_range(5..=20) as f32;
    Some(clamp_to(polar_offset(p, angle, distance), bounds))
  })
  .take(segments + 1)
  .collect()
}

fn element(source: &SourceImage, rng: &mut impl Rng) -> Primitive {
  let bounds = source.dimensions();
  let start = P2::new(
    rng.gen_range(0..source.width()) as i32,
    rng.gen_range(0..source.height()) as i32
  );
  let color = if source.is_grayscale() {
    source.color_at(start)
  } else {
    shift(source.color_at(start), rng.gen_range(-COLOR_SHIFT..=COLOR_SHIFT))
  };

  match Element::ALL.choose(rng).copied().unwrap_or(Element::Line) {
    Element::Curve => {
      let points = curve(start, bounds, rng);
      Primitive::Line { points, color, width: rng.gen_range(1..=3) }
    }
    Element::Circle => {
      let r = rng.gen_range(5..=25);
      Primitive::ring(start, r, color, rng.gen_range(1..=3))
    }
    Element::Line => {
      let angle = rng.gen_range(0.0..TAU);
      let length = rng.gen_range(20..=80) as f32;
      let end = clamp_to(polar_offset(start, angle, length), bounds);
      Primitive::segment(start, end, color, rng.gen_range(1..=3))
    }
  }
}

pub fn plan(source: &SourceImage, config: &DrawConfig, mut rng: Pcg64) -> Plan {
  let count = element_count(config.detail);
  let source = source.clone();
  let elements = (0..count).map(move |_| vec![element(&source, &mut rng)]);

  Plan::new(Style::Abstract, vec![
    Phase::new("elements", count, 5, millis(20), elements)
  ])
}
