//! Read-only source image, and the feature extraction the styles build their plans from:
//! smoothing, edge maps and contours.

use {
  crate::geometry::{P2, Dimensions},
  image::{DynamicImage, GrayImage, Rgb, RgbImage, ColorType},
  imageproc::{
    contours::{self, BorderType},
    point::Point
  },
  rayon::prelude::*,
  std::sync::Arc
};

#[cfg(test)] mod tests;

/// Immutable input of a drawing run. Cheap to clone, both planes are shared.
#[derive(Debug, Clone)]
pub struct SourceImage {
  rgb: Arc<RgbImage>,
  gray: Arc<GrayImage>,
  grayscale: bool
}

impl SourceImage {
  pub fn from_dynamic(image: &DynamicImage) -> Self {
    let grayscale = matches!(
      image.color(),
      ColorType::L8 | ColorType::La8 | ColorType::L16 | ColorType::La16
    );
    SourceImage {
      rgb: Arc::new(image.to_rgb8()),
      gray: Arc::new(image.to_luma8()),
      grayscale
    }
  }

  pub fn width(&self) -> u32 { self.rgb.width() }
  pub fn height(&self) -> u32 { self.rgb.height() }

  pub fn dimensions(&self) -> Dimensions {
    self.rgb.dimensions().into()
  }

  pub fn is_empty(&self) -> bool {
    self.width() == 0 || self.height() == 0
  }

  /// Whether the source was decoded without colour; its RGB plane replicates the gray value.
  pub fn is_grayscale(&self) -> bool { self.grayscale }

  pub fn rgb(&self) -> &RgbImage { &self.rgb }
  pub fn gray(&self) -> &GrayImage { &self.gray }

  pub fn color_at(&self, p: P2) -> Rgb<u8> {
    *self.rgb.get_pixel(p.x as u32, p.y as u32)
  }

  pub fn gray_at(&self, p: P2) -> u8 {
    self.gray.get_pixel(p.x as u32, p.y as u32).0[0]
  }

  /// Mean colour of the region `[x, x + w) × [y, y + h)`, clipped to the image.
  /// `None` when nothing of the region is inside.
  pub fn region_mean(&self, origin: P2, w: u32, h: u32) -> Option<Rgb<u8>> {
    let x0 = origin.x.max(0) as u32;
    let y0 = origin.y.max(0) as u32;
    let x1 = (origin.x.max(0) as u32 + w).min(self.width());
    let y1 = (origin.y.max(0) as u32 + h).min(self.height());
    if x0 >= x1 || y0 >= y1 { return None; }

    let (sum, count) = itertools::iproduct!(y0..y1, x0..x1)
      .map(|(y, x)| self.rgb.get_pixel(x, y).0)
      .fold(([0u64; 3], 0u64), |(mut sum, count), px| {
        sum.iter_mut().zip(px).for_each(|(s, c)| *s += c as u64);
        (sum, count + 1)
      });
    Some(Rgb(sum.map(|s| (s / count) as u8)))
  }
}

impl From<&DynamicImage> for SourceImage {
  fn from(image: &DynamicImage) -> Self { SourceImage::from_dynamic(image) }
}

impl From<RgbImage> for SourceImage {
  fn from(image: RgbImage) -> Self {
    SourceImage::from_dynamic(&DynamicImage::ImageRgb8(image))
  }
}

impl From<GrayImage> for SourceImage {
  fn from(image: GrayImage) -> Self {
    SourceImage::from_dynamic(&DynamicImage::ImageLuma8(image))
  }
}

/// Gaussian smoothing; `sigma` of 1.1 matches a 5x5 kernel.
pub fn gaussian(gray: &GrayImage, sigma: f32) -> GrayImage {
  imageproc::filter::gaussian_blur_f32(gray, sigma)
}

/// Edge preserving smoothing.
pub fn bilateral(gray: &GrayImage, window: u32, sigma_color: f32, sigma_space: f32) -> GrayImage {
  imageproc::filter::bilateral_filter(gray, window, sigma_color, sigma_space)
}

/// Binary edge map, 255 on edges.
pub fn detect_edges(gray: &GrayImage, low: f32, high: f32) -> GrayImage {
  imageproc::edges::canny(gray, low, high)
}

/// Which borders of the edge map to keep.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Retrieval {
  /// every border, outer and hole
  List,
  /// outermost borders only
  External
}

/// Ordered boundary of an object in the edge map.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
  pub points: Vec<P2>
}

impl Contour {
  pub fn new(points: Vec<P2>) -> Self {
    Contour { points }
  }

  pub fn len(&self) -> usize { self.points.len() }
  pub fn is_empty(&self) -> bool { self.points.is_empty() }

  /// Enclosed area of the closed polygon (shoelace).
  pub fn area(&self) -> f64 {
    let n = self.points.len();
    if n < 3 { return 0.0; }
    let twice = (0..n)
      .map(|i| {
        let (a, b) = (self.points[i], self.points[(i + 1) % n]);
        a.x as f64 * b.y as f64 - b.x as f64 * a.y as f64
      })
      .sum::<f64>();
    twice.abs() / 2.0
  }

  /// Length of the closed loop.
  pub fn perimeter(&self) -> f64 {
    imageproc::geometry::arc_length(&self.as_points(), true)
  }

  /// Douglas-Peucker simplification of the closed loop.
  pub fn simplify(&self, epsilon: f64) -> Vec<P2> {
    if self.points.len() < 3 { return self.points.clone(); }
    imageproc::geometry::approximate_polygon_dp(&self.as_points(), epsilon, true)
      .into_iter()
      .map(|p| P2::new(p.x, p.y))
      .collect()
  }

  fn as_points(&self) -> Vec<Point<i32>> {
    self.points.iter().map(|p| Point::new(p.x, p.y)).collect()
  }
}

pub fn find_contours(edges: &GrayImage, retrieval: Retrieval) -> Vec<Contour> {
  contours::find_contours::<i32>(edges)
    .into_iter()
    .filter(|contour| match retrieval {
      Retrieval::List => true,
      Retrieval::External =>
        matches!(contour.border_type, BorderType::Outer) && contour.parent.is_none()
    })
    .map(|contour| {
      let points: Vec<_> = contour.points.iter().map(|p| P2::new(p.x, p.y)).collect();
      Contour::new(compress_chain(&points))
    })
    .collect()
}

/// Keep only the end points of straight horizontal, vertical and diagonal runs.
pub fn compress_chain(points: &[P2]) -> Vec<P2> {
  if points.len() < 3 { return points.to_vec(); }
  let mut kept = Vec::with_capacity(points.len());
  kept.push(points[0]);
  kept.extend(points.windows(3)
    .filter(|w| w[1] - w[0] != w[2] - w[1])
    .map(|w| w[1]));
  kept.push(points[points.len() - 1]);
  kept
}

/// Largest enclosed area first; ties keep extraction order.
pub fn sort_by_area(contours: Vec<Contour>) -> Vec<Contour> {
  let mut keyed: Vec<(f64, Contour)> = contours
    .into_par_iter()
    .map(|contour| (contour.area(), contour))
    .collect();
  keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
  keyed.into_iter().map(|(_, contour)| contour).collect()
}

/// How many of `total` features a style keeps at `detail`: `max(floor, round(total × detail))`,
/// never more than there are.
pub fn keep_count(total: usize, detail: f32, floor: usize) -> usize {
  let scaled = (total as f32 * detail).round() as usize;
  scaled.max(floor).min(total)
}
