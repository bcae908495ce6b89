//! Runs one drawing at a time on a background thread.
//!
//! The thread is the only writer of the [`SharedCanvas`] while it runs. Cancellation is
//! cooperative: [`Scheduler::stop`] only lowers a flag the running style polls before each
//! stroke, so a stop takes effect at the next poll point and never in the middle of a stroke.

use {
  crate::{
    canvas::SharedCanvas,
    error::Result,
    style::{self, DrawConfig, Outcome},
    vision::SourceImage
  },
  std::{
    sync::{
      atomic::{AtomicBool, AtomicUsize, Ordering},
      mpsc::Sender,
      Arc
    },
    thread::{self, JoinHandle}
  },
  tracing::{debug, info, warn}
};

#[cfg(test)] mod tests;

/// Notifications sent by a running drawing, in order.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DrawEvent {
  /// Fraction of the plan painted so far; non-decreasing, `1.0` only right before `Completed`.
  Progress(f32),
  /// The canvas holds new strokes worth displaying.
  Refresh,
  Completed,
  Stopped
}

impl DrawEvent {
  pub fn is_terminal(&self) -> bool {
    matches!(self, DrawEvent::Completed | DrawEvent::Stopped)
  }
}

/// Counts live drawing threads, and remembers the most ever seen at once.
#[derive(Debug, Default)]
struct Occupancy {
  active: AtomicUsize,
  peak: AtomicUsize
}

struct Entered<'a>(&'a Occupancy);

impl Occupancy {
  fn enter(&self) -> Entered<'_> {
    let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
    self.peak.fetch_max(now, Ordering::SeqCst);
    Entered(self)
  }
}

impl Drop for Entered<'_> {
  fn drop(&mut self) {
    self.0.active.fetch_sub(1, Ordering::SeqCst);
  }
}

/// Lowers the busy flag when the drawing thread is done, even by unwinding.
struct Release<'a>(&'a AtomicBool);

impl Drop for Release<'_> {
  fn drop(&mut self) {
    self.0.store(false, Ordering::SeqCst);
  }
}

#[derive(Debug)]
pub struct Scheduler {
  busy: Arc<AtomicBool>,
  keep_going: Arc<AtomicBool>,
  occupancy: Arc<Occupancy>,
  pacing: bool,
  handle: Option<JoinHandle<Outcome>>
}

impl Default for Scheduler {
  fn default() -> Self {
    Scheduler {
      busy: Arc::new(AtomicBool::new(false)),
      keep_going: Arc::new(AtomicBool::new(false)),
      occupancy: Default::default(),
      pacing: true,
      handle: None
    }
  }
}

impl Scheduler {
  pub fn new() -> Self {
    Self::default()
  }

  /// With pacing off, refresh points do not sleep; the drawing runs as fast as it can.
  pub fn with_pacing(mut self, pacing: bool) -> Self {
    self.pacing = pacing;
    self
  }

  pub fn is_running(&self) -> bool {
    self.busy.load(Ordering::SeqCst)
  }

  /// Most drawing threads ever alive at the same time.
  pub fn peak_concurrency(&self) -> usize {
    self.occupancy.peak.load(Ordering::SeqCst)
  }

  /// Spawn a drawing of `source` onto `canvas`. Returns `Ok(false)` without doing anything
  /// while a previous drawing is still running.
  pub fn start(
    &mut self,
    source: SourceImage,
    config: DrawConfig,
    canvas: SharedCanvas,
    events: Sender<DrawEvent>
  ) -> Result<bool> {
    if self.busy.swap(true, Ordering::SeqCst) {
      debug!("start ignored, a drawing is already running");
      return Ok(false);
    }
    // the previous thread, if any, has already released `busy`
    self.join();
    self.keep_going.store(true, Ordering::SeqCst);

    let config = config.clamped();
    let busy = self.busy.clone();
    let keep_going = self.keep_going.clone();
    let occupancy = self.occupancy.clone();
    let pacing = self.pacing;

    let spawned = thread::Builder::new()
      .name(format!("draw-{}", config.style))
      .spawn(move || {
        let outcome = {
          let _release = Release(&busy);
          let _entered = occupancy.enter();
          info!("drawing {}x{} in {} style, detail {:.2}, speed {}",
            source.width(), source.height(), config.style, config.detail, config.speed);
          let plan = style::plan(&source, &config);
          let mut canvas = canvas;
          style::drive(
            plan,
            &mut canvas,
            || keep_going.load(Ordering::SeqCst),
            |progress| { events.send(DrawEvent::Progress(progress)).ok(); },
            |pause| {
              events.send(DrawEvent::Refresh).ok();
              if pacing && !pause.is_zero() {
                thread::sleep(config.pause(pause));
              }
            }
          )
        };
        info!("drawing {:?}", outcome);
        events.send(match outcome {
          Outcome::Completed => DrawEvent::Completed,
          Outcome::Stopped => DrawEvent::Stopped
        }).ok();
        outcome
      });

    match spawned {
      Ok(handle) => {
        self.handle = Some(handle);
        Ok(true)
      }
      Err(e) => {
        self.busy.store(false, Ordering::SeqCst);
        Err(e.into())
      }
    }
  }

  /// Ask the running drawing to stop at its next poll point. No-op when idle.
  pub fn stop(&self) {
    if self.is_running() {
      debug!("stop requested");
      self.keep_going.store(false, Ordering::SeqCst);
    }
  }

  /// Wait for the drawing thread to exit. `None` when there was none, or it panicked.
  pub fn join(&mut self) -> Option<Outcome> {
    let handle = self.handle.take()?;
    match handle.join() {
      Ok(outcome) => Some(outcome),
      Err(_) => {
        warn!("drawing thread panicked");
        None
      }
    }
  }
}

impl Drop for Scheduler {
  fn drop(&mut self) {
    self.stop();
    self.join();
  }
}
