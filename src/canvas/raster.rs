//! Software rasterization of [`Primitive`]s into an `RgbImage`.
//!
//! Everything clips silently: pixels outside of the image are dropped, never wrapped.

use {
  crate::geometry::{P2, BBox, Primitive},
  image::{Rgb, RgbImage}
};

pub fn draw(image: &mut RgbImage, primitive: &Primitive) {
  match primitive {
    Primitive::Line { points, color, width } =>
      draw_polyline(image, points, *color, *width),
    Primitive::Ellipse { bbox, fill, outline, width } =>
      draw_ellipse(image, *bbox, *fill, *outline, *width),
    Primitive::Polygon { points, fill } =>
      fill_polygon(image, points, *fill)
  }
}

#[inline]
pub fn put_pixel(image: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
  if x < 0 || y < 0 { return; }
  let (x, y) = (x as u32, y as u32);
  if x >= image.width() || y >= image.height() { return; }
  image.put_pixel(x, y, color);
}

/// Integer points of the segment `from -> to`, both ends included.
pub struct Bresenham {
  point: P2,
  end: P2,
  dx: i32,
  dy: i32,
  sx: i32,
  sy: i32,
  err: i32,
  done: bool
}

impl Bresenham {
  pub fn new(from: P2, to: P2) -> Self {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    Self {
      point: from,
      end: to,
      dx,
      dy,
      sx: if from.x < to.x { 1 } else { -1 },
      sy: if from.y < to.y { 1 } else { -1 },
      err: dx + dy,
      done: false
    }
  }
}

impl Iterator for Bresenham {
  type Item = P2;

  fn next(&mut self) -> Option<P2> {
    if self.done { return None; }
    let current = self.point;
    if current == self.end {
      self.done = true;
      return Some(current);
    }
    let e2 = 2 * self.err;
    if e2 >= self.dy { self.err += self.dy; self.point.x += self.sx; }
    if e2 <= self.dx { self.err += self.dx; self.point.y += self.sy; }
    Some(current)
  }
}

/// Round brush of diameter `width`; `width <= 1` is a single pixel.
fn stamp(image: &mut RgbImage, center: P2, width: u32, color: Rgb<u8>) {
  if width <= 1 {
    put_pixel(image, center.x, center.y, color);
    return;
  }
  let r = width as f32 / 2.0;
  let reach = r.ceil() as i32;
  for dy in -reach..=reach {
    for dx in -reach..=reach {
      if ((dx * dx + dy * dy) as f32) <= r * r {
        put_pixel(image, center.x + dx, center.y + dy, color);
      }
    }
  }
}

pub fn draw_polyline(image: &mut RgbImage, points: &[P2], color: Rgb<u8>, width: u32) {
  match points {
    [] => {},
    [single] => stamp(image, *single, width, color),
    _ => points.windows(2).for_each(|segment| {
      Bresenham::new(segment[0], segment[1])
        .for_each(|p| stamp(image, p, width, color));
    })
  }
}

pub fn draw_ellipse(
  image: &mut RgbImage,
  bbox: BBox,
  fill: Option<Rgb<u8>>,
  outline: Option<Rgb<u8>>,
  width: u32
) {
  if fill.is_none() && outline.is_none() { return; }
  let (x0, x1) = (bbox.min.x.min(bbox.max.x), bbox.min.x.max(bbox.max.x));
  let (y0, y1) = (bbox.min.y.min(bbox.max.y), bbox.min.y.max(bbox.max.y));
  let (cx, cy) = ((x0 + x1) as f32 / 2.0, (y0 + y1) as f32 / 2.0);
  // half a pixel of slack, so that a degenerate box still covers its own pixels
  let (rx, ry) = ((x1 - x0) as f32 / 2.0 + 0.5, (y1 - y0) as f32 / 2.0 + 0.5);
  let ring = width.max(1) as f32;
  let (irx, iry) = (rx - ring, ry - ring);

  let clip_x = (x0.max(0), x1.min(image.width() as i32 - 1));
  let clip_y = (y0.max(0), y1.min(image.height() as i32 - 1));

  itertools::iproduct!(clip_y.0..=clip_y.1, clip_x.0..=clip_x.1)
    .for_each(|(y, x)| {
      let (fx, fy) = (x as f32 - cx, y as f32 - cy);
      if (fx / rx).powi(2) + (fy / ry).powi(2) > 1.0 { return; }
      let on_ring = irx <= 0.0 || iry <= 0.0 ||
        (fx / irx).powi(2) + (fy / iry).powi(2) > 1.0;
      let color = match (on_ring, outline, fill) {
        (true, Some(outline), _) => outline,
        (_, _, Some(fill)) => fill,
        _ => return
      };
      put_pixel(image, x, y, color);
    });
}

/// Even-odd scanline fill sampled at pixel centers, plus the outline in the fill color so
/// that thin and degenerate polygons still leave a mark.
pub fn fill_polygon(image: &mut RgbImage, points: &[P2], color: Rgb<u8>) {
  if points.is_empty() || image.width() == 0 || image.height() == 0 { return; }
  let y_min = points.iter().map(|p| p.y).min().unwrap_or(0).max(0);
  let y_max = points.iter().map(|p| p.y).max().unwrap_or(0).min(image.height() as i32 - 1);
  let edges = || points.iter()
    .zip(points.iter().cycle().skip(1))
    .take(points.len());

  let mut crossings = Vec::with_capacity(points.len());
  for y in y_min..=y_max {
    let sy = y as f32;
    crossings.clear();
    crossings.extend(edges().filter_map(|(a, b)| {
      let (ay, by) = (a.y as f32, b.y as f32);
      ((ay <= sy && by > sy) || (by <= sy && ay > sy)).then(|| {
        a.x as f32 + (sy - ay) / (by - ay) * (b.x - a.x) as f32
      })
    }));
    crossings.sort_by(|a, b| a.total_cmp(b));
    crossings.chunks_exact(2).for_each(|span| {
      let from = span[0].ceil() as i32;
      let to = span[1].floor() as i32;
      (from.max(0)..=to.min(image.width() as i32 - 1))
        .for_each(|x| put_pixel(image, x, y, color));
    });
  }

  edges().for_each(|(a, b)|
    Bresenham::new(*a, *b).for_each(|p| put_pixel(image, p.x, p.y, color)));
}
