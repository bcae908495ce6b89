//! The raster canvas a drawing run paints on.
//!
//! There is exactly one writer at a time (the running style, see [`crate::scheduler`]), and any
//! number of readers taking [`Canvas::snapshot`]s for display. [`SharedCanvas`] takes the write
//! lock once per primitive, so a reader never observes a half-painted primitive.

use {
  crate::geometry::{Dimensions, Primitive, WHITE},
  image::{Rgb, RgbImage},
  humansize::{FileSize, file_size_opts},
  std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
  tracing::debug
};

pub mod raster;
#[cfg(test)] mod tests;

/// Something primitives can be painted on.
pub trait CanvasWriter {
  fn apply(&mut self, primitive: &Primitive);
}

/// Recording writer, keeps every primitive in order.
impl CanvasWriter for Vec<Primitive> {
  fn apply(&mut self, primitive: &Primitive) {
    self.push(primitive.clone());
  }
}

impl <W: CanvasWriter + ?Sized> CanvasWriter for &mut W {
  fn apply(&mut self, primitive: &Primitive) {
    (**self).apply(primitive)
  }
}

#[derive(Debug, Clone)]
pub struct Canvas {
  image: RgbImage,
  background: Rgb<u8>
}

impl Default for Canvas {
  fn default() -> Self {
    Canvas::new(Dimensions::new(800, 300), WHITE)
  }
}

impl Canvas {
  pub fn new(dimensions: Dimensions, background: Rgb<u8>) -> Self {
    let mut canvas = Canvas {
      image: RgbImage::new(0, 0),
      background
    };
    canvas.reset(dimensions, background);
    canvas
  }

  /// Reallocate to `dimensions`, filled with `background`.
  pub fn reset(&mut self, dimensions: Dimensions, background: Rgb<u8>) {
    self.image = RgbImage::from_pixel(dimensions.width, dimensions.height, background);
    self.background = background;
    let bytes = self.image.as_raw().len()
      .file_size(file_size_opts::BINARY)
      .unwrap_or_default();
    debug!("canvas reset to {}x{} ({})", dimensions.width, dimensions.height, bytes);
  }

  /// Same dimensions and background, blank again.
  pub fn clear(&mut self) {
    self.reset(self.dimensions(), self.background);
  }

  pub fn dimensions(&self) -> Dimensions {
    self.image.dimensions().into()
  }

  pub fn background(&self) -> Rgb<u8> {
    self.background
  }

  pub fn image(&self) -> &RgbImage {
    &self.image
  }

  /// Read-only copy suitable for display or saving.
  pub fn snapshot(&self) -> RgbImage {
    self.image.clone()
  }

  /// True when no pixel differs from the background.
  pub fn is_blank(&self) -> bool {
    self.image.pixels().all(|p| *p == self.background)
  }
}

impl CanvasWriter for Canvas {
  fn apply(&mut self, primitive: &Primitive) {
    raster::draw(&mut self.image, primitive);
  }
}

/// Canvas shared between the drawing thread and whoever displays it.
#[derive(Debug, Clone, Default)]
pub struct SharedCanvas(Arc<RwLock<Canvas>>);

impl SharedCanvas {
  pub fn new(canvas: Canvas) -> Self {
    SharedCanvas(Arc::new(RwLock::new(canvas)))
  }

  // poisoned locks are recovered, the buffer is a valid image at any point
  pub fn read(&self) -> RwLockReadGuard<'_, Canvas> {
    self.0.read().unwrap_or_else(PoisonError::into_inner)
  }

  pub fn write(&self) -> RwLockWriteGuard<'_, Canvas> {
    self.0.write().unwrap_or_else(PoisonError::into_inner)
  }

  pub fn snapshot(&self) -> RgbImage {
    self.read().snapshot()
  }
}

impl CanvasWriter for SharedCanvas {
  fn apply(&mut self, primitive: &Primitive) {
    self.write().apply(primitive);
  }
}
