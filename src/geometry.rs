//! Pixel-space geometry and the drawable primitives.
//!
//! The origin of coordinate system is in top-left corner, `x` grows to the right and `y` grows
//! down. All coordinates are integer pixel centers; nothing here is clipped, the canvas is
//! responsible for ignoring whatever falls outside of it.

use {
  euclid::{Box2D, Point2D, Size2D, Vector2D},
  image::Rgb
};

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelSpace;

pub type P2 = Point2D<i32, PixelSpace>;
pub type V2 = Vector2D<i32, PixelSpace>;
pub type BBox = Box2D<i32, PixelSpace>;
pub type Dimensions = Size2D<u32, PixelSpace>;

pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// The atomic output unit of every drawing style.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
  /// Connected polyline through `points`. A single point stamps one dot of `width`.
  Line {
    points: Vec<P2>,
    color: Rgb<u8>,
    width: u32
  },
  /// Ellipse inscribed into `bbox` (inclusive corners). Outline wins over fill on the ring.
  Ellipse {
    bbox: BBox,
    fill: Option<Rgb<u8>>,
    outline: Option<Rgb<u8>>,
    width: u32
  },
  /// Filled polygon, closed implicitly.
  Polygon {
    points: Vec<P2>,
    fill: Rgb<u8>
  }
}

impl Primitive {
  pub fn segment(from: P2, to: P2, color: Rgb<u8>, width: u32) -> Self {
    Primitive::Line { points: vec![from, to], color, width }
  }

  /// Filled disc of radius `r` around `center`.
  pub fn dot(center: P2, r: i32, color: Rgb<u8>) -> Self {
    Primitive::Ellipse {
      bbox: square_around(center, r),
      fill: Some(color),
      outline: None,
      width: 1
    }
  }

  /// Outlined circle of radius `r` around `center`.
  pub fn ring(center: P2, r: i32, color: Rgb<u8>, width: u32) -> Self {
    Primitive::Ellipse {
      bbox: square_around(center, r),
      fill: None,
      outline: Some(color),
      width
    }
  }

  pub fn kind(&self) -> &'static str {
    match self {
      Primitive::Line { .. } => "line",
      Primitive::Ellipse { .. } => "ellipse",
      Primitive::Polygon { .. } => "polygon"
    }
  }
}

pub fn square_around(center: P2, r: i32) -> BBox {
  let r = V2::splat(r);
  Box2D::new(center - r, center + r)
}

/// Clamp a point into `[0, width) × [0, height)`.
pub fn clamp_to(point: P2, dimensions: Dimensions) -> P2 {
  let max_x = dimensions.width.saturating_sub(1) as i32;
  let max_y = dimensions.height.saturating_sub(1) as i32;
  P2::new(point.x.clamp(0, max_x), point.y.clamp(0, max_y))
}

/// Step `distance` pixels from `from` in direction `angle` (radians), truncating toward zero
/// like an integer cast does.
pub fn polar_offset(from: P2, angle: f32, distance: f32) -> P2 {
  P2::new(
    (from.x as f32 + distance * angle.cos()) as i32,
    (from.y as f32 + distance * angle.sin()) as i32
  )
}
