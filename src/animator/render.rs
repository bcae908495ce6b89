use {
  crate::error::{ErrorKind, Result},
  image::{
    codecs::gif::{GifEncoder, Repeat},
    imageops::FilterType,
    Delay, DynamicImage, Frame
  },
  std::{fs::File, io::BufWriter, path::Path, time::Duration},
  tracing::info
};

/// Sink the animator hands every step to, in order.
pub trait Render {
  fn render(&mut self, image: &DynamicImage, duration: Option<Duration>, delay: Option<Duration>) -> Result<()>;
}

/// Only reports what would be shown.
#[derive(Debug, Default)]
pub struct LogRenderer {
  pub rendered: usize
}

impl Render for LogRenderer {
  fn render(&mut self, image: &DynamicImage, duration: Option<Duration>, delay: Option<Duration>) -> Result<()> {
    self.rendered += 1;
    info!("frame {}: {}x{}, shown {:?} after {:?}",
      self.rendered, image.width(), image.height(), duration, delay);
    Ok(())
  }
}

/// Collects the steps into an endlessly looping GIF. Every frame is scaled to the size of the
/// first and stays up for its duration plus its delay.
#[derive(Default)]
pub struct GifRenderer {
  frames: Vec<Frame>
}

impl GifRenderer {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.frames.len()
  }

  pub fn is_empty(&self) -> bool {
    self.frames.is_empty()
  }

  pub fn frames(&self) -> &[Frame] {
    &self.frames
  }

  pub fn save(self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if self.frames.is_empty() {
      return Err(ErrorKind::EmptyAnimation.into());
    }
    let count = self.frames.len();
    let write = || -> Result<()> {
      let mut encoder = GifEncoder::new(BufWriter::new(File::create(path)?));
      encoder.set_repeat(Repeat::Infinite)?;
      encoder.encode_frames(self.frames)?;
      Ok(())
    };
    write().map_err(|e| ErrorKind::Save { path: path.to_path_buf(), reason: e.to_string() })?;
    info!("saved {} frames to {}", count, path.display());
    Ok(())
  }
}

impl Render for GifRenderer {
  fn render(&mut self, image: &DynamicImage, duration: Option<Duration>, delay: Option<Duration>) -> Result<()> {
    let image = match self.frames.first() {
      Some(first) if first.buffer().dimensions() != (image.width(), image.height()) => {
        let (w, h) = first.buffer().dimensions();
        image.resize_exact(w, h, FilterType::Lanczos3)
      }
      _ => image.clone()
    };
    let shown = duration.unwrap_or_default() + delay.unwrap_or_default();
    self.frames.push(Frame::from_parts(image.into_rgba8(), 0, 0, Delay::from_saturating_duration(shown)));
    Ok(())
  }
}
