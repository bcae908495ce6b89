//! Sequencing of still images into a simple animation: each step shows one image, transformed
//! by an optional effect, for a duration after a delay. Unrelated to the drawing styles.

use {
  crate::error::{ErrorKind, Result},
  image::DynamicImage,
  std::{path::PathBuf, time::Duration},
  tracing::{debug, warn}
};

pub mod effects;
pub mod render;

pub use {
  effects::{effect_by_name, Bounce, Effect, FadeIn, SlideIn},
  render::{GifRenderer, LogRenderer, Render}
};

/// Image of a step: a path until effects are applied, decoded after.
#[derive(Debug, Clone)]
pub enum Frame {
  Path(PathBuf),
  Image(DynamicImage)
}

impl Frame {
  fn decode(&self) -> Result<DynamicImage> {
    match self {
      Frame::Image(image) => Ok(image.clone()),
      Frame::Path(path) => image::open(path).map_err(|e| ErrorKind::Load {
        path: path.clone(),
        reason: e.to_string()
      }.into())
    }
  }
}

impl From<PathBuf> for Frame {
  fn from(path: PathBuf) -> Self { Frame::Path(path) }
}

impl From<&str> for Frame {
  fn from(path: &str) -> Self { Frame::Path(path.into()) }
}

impl From<DynamicImage> for Frame {
  fn from(image: DynamicImage) -> Self { Frame::Image(image) }
}

#[derive(Debug)]
pub struct Step {
  pub image: Frame,
  pub effect: Option<Box<dyn Effect>>,
  pub duration: Option<Duration>,
  pub delay: Option<Duration>
}

/// Seconds to a duration; negative or non-finite input gives `None`.
fn seconds(s: f32) -> Option<Duration> {
  (s.is_finite() && s >= 0.0).then(|| Duration::from_secs_f32(s))
}

#[derive(Debug, Default)]
pub struct Animator {
  steps: Vec<Step>
}

impl Animator {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn steps(&self) -> &[Step] {
    &self.steps
  }

  pub fn push(&mut self, step: Step) {
    self.steps.push(step);
  }

  /// Append one step per image; the effect, duration and delay at the same index go with it,
  /// missing ones are left empty. Effect names that do not resolve are skipped with a warning.
  pub fn create_animation<I: Into<Frame>>(
    &mut self,
    images: impl IntoIterator<Item = I>,
    effects: &[impl AsRef<str>],
    durations: &[f32],
    delays: &[f32]
  ) {
    for (i, image) in images.into_iter().enumerate() {
      let effect = effects.get(i)
        .map(|name| name.as_ref())
        .filter(|name| !name.trim().is_empty())
        .and_then(|name| effect_by_name(name)
          .map_err(|e| warn!("step {}: {}, no effect applied", i, e))
          .ok());
      self.steps.push(Step {
        image: image.into(),
        effect,
        duration: durations.get(i).copied().and_then(seconds),
        delay: delays.get(i).copied().and_then(seconds)
      });
    }
    debug!("animation has {} steps", self.steps.len());
  }

  /// Decode every step's image and run its effect over it.
  pub fn apply_effects(&mut self) -> Result<()> {
    for step in &mut self.steps {
      let image = step.image.decode()?;
      step.image = Frame::Image(match &step.effect {
        Some(effect) => effect.apply(image),
        None => image
      });
    }
    Ok(())
  }

  /// Hand each step to `renderer`, in order.
  pub fn render_animation(&self, renderer: &mut impl Render) -> Result<()> {
    for step in &self.steps {
      renderer.render(&step.image.decode()?, step.duration, step.delay)?;
    }
    Ok(())
  }
}
