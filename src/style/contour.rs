//! Clean outlines only: smoothed, simplified, closed, and drawn in solid black.

use {
  super::{millis, DrawConfig, Phase, Plan, Style},
  crate::{
    geometry::{Primitive, P2, BLACK},
    vision::{self, Contour, Retrieval, SourceImage}
  },
  rand_pcg::Pcg64
};

pub const BILATERAL_WINDOW: u32 = 9;
pub const BILATERAL_SIGMA: f32 = 75.0;
pub const CANNY_LOW: f32 = 50.0;
pub const CANNY_HIGH: f32 = 150.0;
pub const MIN_CONTOURS: usize = 5;
pub const LINE_WIDTH: u32 = 2;

/// Outer contours kept, largest enclosed area first.
pub fn contours(source: &SourceImage, detail: f32) -> Vec<Contour> {
  let smooth = vision::bilateral(source.gray(), BILATERAL_WINDOW, BILATERAL_SIGMA, BILATERAL_SIGMA);
  let edges = vision::detect_edges(&smooth, CANNY_LOW, CANNY_HIGH);
  let contours = vision::sort_by_area(vision::find_contours(&edges, Retrieval::External));
  let keep = vision::keep_count(contours.len(), detail, MIN_CONTOURS);
  contours.into_iter().take(keep).collect()
}

/// Simplified closed loop, the tolerance shrinking as detail grows.
/// `None` when fewer than three corners survive.
pub fn outline(contour: &Contour, detail: f32) -> Option<Vec<P2>> {
  let epsilon = (1.1 - detail as f64) * 0.01 * contour.perimeter();
  let mut points = contour.simplify(epsilon);
  (points.len() > 2).then(|| {
    points.push(points[0]);
    points
  })
}

pub fn plan(source: &SourceImage, config: &DrawConfig, _rng: Pcg64) -> Plan {
  let detail = config.detail;
  let contours = contours(source, detail);
  Plan::new(Style::Contour, vec![
    Phase::new("outlines", contours.len(), 2, millis(20), contours.into_iter()
      .map(move |contour| outline(&contour, detail)
        .map(|points| vec![Primitive::Line { points, color: BLACK, width: LINE_WIDTH }])
        .unwrap_or_default()))
  ])
}
