//! One drawing session: the loaded image, the settings of the next run, the canvas and the
//! lifecycle around them.
//!
//! ```no_run
//! # use autodraw::{session::Session, config::Settings};
//! # fn main() -> anyhow::Result<()> {
//! let mut session = Session::new(&Settings::default());
//! session.load("portrait.jpg")?;
//! session.start()?;
//! while session.poll().is_running() {
//!   // display session.snapshot()
//!   std::thread::sleep(std::time::Duration::from_millis(30));
//! }
//! session.save("drawing.png")?;
//! # Ok(())
//! # }
//! ```

use {
  crate::{
    canvas::{Canvas, SharedCanvas},
    config::Settings,
    error::{ErrorKind, Result},
    geometry::Dimensions,
    io,
    scheduler::{DrawEvent, Scheduler},
    style::DrawConfig,
    vision::SourceImage
  },
  image::{Rgb, RgbImage},
  std::{
    path::Path,
    sync::mpsc::{self, Receiver, TryRecvError}
  },
  tracing::{debug, info}
};


#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RunPhase {
  #[default]
  Idle,
  Running,
  Completed,
  Stopped
}

/// What the control surface shows.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct RunState {
  pub phase: RunPhase,
  /// `[0, 1]`
  pub progress: f32
}

impl RunState {
  pub fn is_running(&self) -> bool {
    self.phase == RunPhase::Running
  }

  fn apply(&mut self, event: DrawEvent) {
    match event {
      DrawEvent::Progress(progress) => self.progress = self.progress.max(progress),
      DrawEvent::Refresh => {}
      DrawEvent::Completed => {
        self.phase = RunPhase::Completed;
        self.progress = 1.0;
      }
      DrawEvent::Stopped => self.phase = RunPhase::Stopped
    }
  }
}

#[derive(Debug)]
pub struct Session {
  source: Option<SourceImage>,
  config: DrawConfig,
  bounds: Dimensions,
  canvas: SharedCanvas,
  scheduler: Scheduler,
  events: Option<Receiver<DrawEvent>>,
  state: RunState
}

impl Session {
  pub fn new(settings: &Settings) -> Self {
    Self::with_scheduler(settings, Scheduler::new())
  }

  /// Same as [`Session::new`], runs with no pauses at refresh points.
  pub fn unpaced(settings: &Settings) -> Self {
    Self::with_scheduler(settings, Scheduler::new().with_pacing(false))
  }

  fn with_scheduler(settings: &Settings, scheduler: Scheduler) -> Self {
    Session {
      source: None,
      config: settings.draw_config(),
      bounds: settings.dimensions(),
      canvas: SharedCanvas::new(Canvas::new(settings.dimensions(), settings.background())),
      scheduler,
      events: None,
      state: RunState::default()
    }
  }

  pub fn source(&self) -> Option<&SourceImage> {
    self.source.as_ref()
  }

  pub fn config(&self) -> DrawConfig {
    self.config
  }

  /// Takes effect on the next start; a running drawing keeps its own copy.
  pub fn set_config(&mut self, config: DrawConfig) {
    self.config = config.clamped();
  }

  /// Handle for readers displaying the canvas while a drawing runs.
  pub fn canvas(&self) -> SharedCanvas {
    self.canvas.clone()
  }

  pub fn snapshot(&self) -> RgbImage {
    self.canvas.snapshot()
  }

  pub fn background(&self) -> Rgb<u8> {
    self.canvas.read().background()
  }

  /// Decode `path`, fit it into the display region and make it the source of the next run.
  /// On failure nothing changes.
  pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
    let source = io::load_source(path, self.bounds)?;
    self.load_image(source);
    Ok(())
  }

  /// Replace the source image; stops a running drawing and clears the canvas.
  pub fn load_image(&mut self, source: SourceImage) {
    self.source = Some(source);
    self.clear();
  }

  /// Start drawing the loaded image with the current config on a cleared canvas.
  /// `Ok(false)` when a drawing is already running.
  pub fn start(&mut self) -> Result<bool> {
    let source = self.source.clone().ok_or(ErrorKind::NoImage)?;
    if self.scheduler.is_running() {
      debug!("already drawing");
      return Ok(false);
    }
    self.canvas.write().clear();

    let (tx, rx) = mpsc::channel();
    if !self.scheduler.start(source, self.config, self.canvas.clone(), tx)? {
      return Ok(false);
    }
    self.events = Some(rx);
    self.state = RunState { phase: RunPhase::Running, progress: 0.0 };
    Ok(true)
  }

  /// Ask the drawing to stop; the canvas keeps what was painted so far.
  pub fn stop(&mut self) {
    self.scheduler.stop();
  }

  /// Blank canvas, progress back to zero. Waits for a running drawing to stop first.
  pub fn clear(&mut self) {
    if self.scheduler.is_running() {
      self.scheduler.stop();
      self.wait();
    }
    self.scheduler.join();
    self.events = None;
    self.canvas.write().clear();
    self.state = RunState::default();
    info!("canvas cleared");
  }

  /// Write the current canvas to `path`; the canvas is left as is either way.
  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    io::save_image(&self.snapshot(), path)
  }

  pub fn state(&self) -> RunState {
    self.state
  }

  pub fn is_running(&self) -> bool {
    self.state.is_running()
  }

  /// Fold every pending notification into the run state.
  pub fn poll(&mut self) -> RunState {
    if let Some(events) = &self.events {
      loop {
        match events.try_recv() {
          Ok(event) => self.state.apply(event),
          Err(TryRecvError::Empty) => break,
          Err(TryRecvError::Disconnected) => {
            self.finish();
            break;
          }
        }
      }
    }
    self.state
  }

  /// Block until the running drawing ends.
  pub fn wait(&mut self) -> RunState {
    if let Some(events) = &self.events {
      events.iter().for_each(|event| self.state.apply(event));
      self.finish();
    }
    self.state
  }

  /// The drawing thread is gone; settle a state it had no chance to report.
  fn finish(&mut self) {
    self.events = None;
    self.scheduler.join();
    if self.state.is_running() {
      self.state.phase = RunPhase::Stopped;
    }
  }
}
