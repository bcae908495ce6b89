//! Drawing styles.
//!
//! Every style turns a [`SourceImage`] into a [`Plan`]: an ordered, lazily generated sequence of
//! strokes, split into phases that each carry their own refresh cadence. A single generic
//! [`drive`]r then paints any plan onto a [`CanvasWriter`], polling for cancellation before
//! every stroke and reporting throttled progress.
//!
//! ```no_run
//! # use autodraw::{style::{self, DrawConfig, Style}, canvas::Canvas, vision::SourceImage};
//! # fn main() -> anyhow::Result<()> {
//! let source = SourceImage::from(&image::open("in.png")?);
//! let config = DrawConfig::new(Style::Sketch, 0.8, 50.0).with_seed(7);
//! let mut canvas = Canvas::new(source.dimensions(), image::Rgb([255, 255, 255]));
//! style::run(&source, &config, &mut canvas, || true, |progress| println!("{progress:.2}"));
//! canvas.snapshot().save("out.png")?;
//! # Ok(())
//! # }
//! ```

use {
  crate::{
    error::ErrorKind,
    geometry::Primitive,
    vision::SourceImage
  },
  rand::SeedableRng,
  rand_pcg::Pcg64,
  serde::{Deserialize, Serialize},
  std::{fmt, str::FromStr, time::Duration}
};

pub mod driver;
pub mod realistic;
pub mod sketch;
pub mod contour;
pub mod pointillist;
pub mod cubist;
pub mod abstract_flow;

pub use driver::{drive, run, Outcome};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
  #[default]
  Realistic,
  Sketch,
  Contour,
  Pointillist,
  Cubist,
  Abstract
}

impl Style {
  pub const ALL: [Style; 6] = [
    Style::Realistic, Style::Sketch, Style::Contour,
    Style::Pointillist, Style::Cubist, Style::Abstract
  ];

  pub fn name(self) -> &'static str {
    match self {
      Style::Realistic => "realistic",
      Style::Sketch => "sketch",
      Style::Contour => "contour",
      Style::Pointillist => "pointillist",
      Style::Cubist => "cubist",
      Style::Abstract => "abstract"
    }
  }
}

impl fmt::Display for Style {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Style {
  type Err = ErrorKind;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    Style::ALL.iter()
      .copied()
      .find(|style| style.name().eq_ignore_ascii_case(s))
      .ok_or_else(|| ErrorKind::UnknownStyle(s.to_string()))
  }
}

/// Parameters of one run. Fixed for the whole run.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawConfig {
  pub style: Style,
  /// Fraction in `[0.1, 1.0]` scaling how many features get drawn.
  pub detail: f32,
  /// `[1, 100]`, higher is faster. Only affects pacing, never the drawing itself.
  pub speed: f32,
  /// Seed of every random choice; `None` draws one from the OS.
  pub seed: Option<u64>
}

impl Default for DrawConfig {
  fn default() -> Self {
    DrawConfig {
      style: Style::Realistic,
      detail: 0.5,
      speed: 50.0,
      seed: None
    }
  }
}

impl DrawConfig {
  pub const DETAIL_RANGE: (f32, f32) = (0.1, 1.0);
  pub const SPEED_RANGE: (f32, f32) = (1.0, 100.0);

  pub fn new(style: Style, detail: f32, speed: f32) -> Self {
    DrawConfig { style, detail, speed, seed: None }.clamped()
  }

  /// From the control surface units: speed `1..=100`, detail in percent `10..=100`.
  pub fn from_ui(style: Style, speed: f32, detail_percent: f32) -> Self {
    DrawConfig::new(style, detail_percent / 100.0, speed)
  }

  pub fn with_seed(self, seed: u64) -> Self {
    DrawConfig { seed: Some(seed), ..self }
  }

  /// Out of range values are pulled back into range, non-finite ones reset to defaults.
  pub fn clamped(self) -> Self {
    let default = DrawConfig::default();
    let clamp = |value: f32, (min, max): (f32, f32), fallback: f32| if value.is_finite() {
      num_traits::clamp(value, min, max)
    } else {
      fallback
    };
    DrawConfig {
      detail: clamp(self.detail, Self::DETAIL_RANGE, default.detail),
      speed: clamp(self.speed, Self::SPEED_RANGE, default.speed),
      ..self
    }
  }

  pub fn rng(&self) -> Pcg64 {
    match self.seed {
      Some(seed) => Pcg64::seed_from_u64(seed),
      None => Pcg64::from_entropy()
    }
  }

  /// Pause after a refresh whose nominal length is `base` (at speed 10).
  pub fn pause(&self, base: Duration) -> Duration {
    base.mul_f32(10.0 / self.clamped().speed)
  }
}

/// Primitives making up one progress step.
pub type Stroke = Vec<Primitive>;

/// A run of strokes sharing the same refresh cadence.
pub struct Phase {
  pub name: &'static str,
  /// exact number of strokes `strokes` yields
  pub len: usize,
  /// strokes between two refreshes
  pub throttle: usize,
  /// nominal pause after each refresh, see [`DrawConfig::pause`]
  pub pause: Duration,
  strokes: Box<dyn Iterator<Item = Stroke> + Send>
}

impl Phase {
  pub fn new(
    name: &'static str,
    len: usize,
    throttle: usize,
    pause: Duration,
    strokes: impl Iterator<Item = Stroke> + Send + 'static
  ) -> Self {
    Phase { name, len, throttle: throttle.max(1), pause, strokes: Box::new(strokes) }
  }

  pub fn strokes(self) -> impl Iterator<Item = Stroke> + Send {
    self.strokes
  }
}

impl fmt::Debug for Phase {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Phase")
      .field("name", &self.name)
      .field("len", &self.len)
      .field("throttle", &self.throttle)
      .field("pause", &self.pause)
      .finish()
  }
}

#[derive(Debug)]
pub struct Plan {
  pub style: Style,
  pub phases: Vec<Phase>
}

impl Plan {
  pub fn new(style: Style, phases: Vec<Phase>) -> Self {
    Plan { style, phases }
  }

  pub fn empty(style: Style) -> Self {
    Plan::new(style, vec![])
  }

  /// Total number of strokes over all phases.
  pub fn len(&self) -> usize {
    self.phases.iter().map(|phase| phase.len).sum()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Every stroke of every phase, in drawing order.
  pub fn into_strokes(self) -> impl Iterator<Item = Stroke> {
    self.phases.into_iter().flat_map(Phase::strokes)
  }
}

/// Build the plan of `config.style` for `source`.
pub fn plan(source: &SourceImage, config: &DrawConfig) -> Plan {
  let config = config.clamped();
  if source.is_empty() {
    return Plan::empty(config.style);
  }
  let rng = config.rng();
  crate::profile!("plan", match config.style {
    Style::Realistic => realistic::plan(source, &config, rng),
    Style::Sketch => sketch::plan(source, &config, rng),
    Style::Contour => contour::plan(source, &config, rng),
    Style::Pointillist => pointillist::plan(source, &config, rng),
    Style::Cubist => cubist::plan(source, &config, rng),
    Style::Abstract => abstract_flow::plan(source, &config, rng)
  })
}

/// Number of samples taken along `extent` pixels with stride `step`.
pub(crate) fn grid_len(extent: u32, step: usize) -> usize {
  (extent as usize + step - 1) / step
}

pub(crate) fn millis(ms: u64) -> Duration {
  Duration::from_millis(ms)
}
