use {
  crate::error::ErrorKind,
  image::{imageops, DynamicImage, Rgba, RgbaImage},
  std::fmt
};

/// Transformation of a single animation frame.
pub trait Effect: fmt::Debug + Send + Sync {
  fn name(&self) -> &'static str;
  fn apply(&self, image: DynamicImage) -> DynamicImage;
}

pub const EFFECT_NAMES: [&str; 3] = ["fade_in", "slide_in", "bounce"];

/// Resolve an effect by its name, `fade_in`, `slide_in` or `bounce`.
pub fn effect_by_name(name: &str) -> Result<Box<dyn Effect>, ErrorKind> {
  match name.trim().to_ascii_lowercase().as_str() {
    "fade_in" => Ok(Box::new(FadeIn::default())),
    "slide_in" => Ok(Box::new(SlideIn::default())),
    "bounce" => Ok(Box::new(Bounce::default())),
    _ => Err(ErrorKind::UnknownEffect(name.trim().to_string()))
  }
}

/// Image moved by `(dx, dy)` pixels over a transparent frame of the same size.
fn shifted(image: &DynamicImage, dx: i64, dy: i64) -> DynamicImage {
  let mut frame = RgbaImage::from_pixel(image.width(), image.height(), Rgba([0, 0, 0, 0]));
  imageops::overlay(&mut frame, &image.to_rgba8(), dx, dy);
  DynamicImage::ImageRgba8(frame)
}

/// Scales alpha down to `opacity`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FadeIn {
  pub opacity: f32
}

impl Default for FadeIn {
  fn default() -> Self { FadeIn { opacity: 0.5 } }
}

impl Effect for FadeIn {
  fn name(&self) -> &'static str { "fade_in" }

  fn apply(&self, image: DynamicImage) -> DynamicImage {
    let opacity = self.opacity.clamp(0.0, 1.0);
    let mut frame = image.into_rgba8();
    frame.pixels_mut().for_each(|px| px.0[3] = (px.0[3] as f32 * opacity).round() as u8);
    DynamicImage::ImageRgba8(frame)
  }
}

/// Enters from the left: shifted right by a fraction of the width.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SlideIn {
  pub offset: f32
}

impl Default for SlideIn {
  fn default() -> Self { SlideIn { offset: 0.25 } }
}

impl Effect for SlideIn {
  fn name(&self) -> &'static str { "slide_in" }

  fn apply(&self, image: DynamicImage) -> DynamicImage {
    let dx = (image.width() as f32 * self.offset) as i64;
    shifted(&image, dx, 0)
  }
}

/// Lifted up by a fraction of the height, the top of a bounce.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounce {
  pub height: f32
}

impl Default for Bounce {
  fn default() -> Self { Bounce { height: 0.1 } }
}

impl Effect for Bounce {
  fn name(&self) -> &'static str { "bounce" }

  fn apply(&self, image: DynamicImage) -> DynamicImage {
    let dy = (image.height() as f32 * self.height) as i64;
    shifted(&image, 0, -dy)
  }
}
