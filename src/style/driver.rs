use {
  super::{plan, DrawConfig, Plan},
  crate::{canvas::CanvasWriter, vision::SourceImage},
  std::time::Duration,
  tracing::debug
};

/// How a run ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
  Completed,
  /// `should_continue` returned false; whatever was painted before stays.
  Stopped
}

/// Paint `plan` stroke by stroke.
///
/// `should_continue` is polled before every stroke and a `false` ends the run right there.
/// Every `throttle` strokes (per phase) `on_progress` receives the fraction done so far,
/// followed by `on_refresh` with the phase pause. Progress never decreases, and `1.0` is only
/// reported once, after the last stroke.
pub fn drive<W: CanvasWriter + ?Sized>(
  plan: Plan,
  canvas: &mut W,
  should_continue: impl Fn() -> bool,
  mut on_progress: impl FnMut(f32),
  mut on_refresh: impl FnMut(Duration)
) -> Outcome {
  let total = plan.len();
  let style = plan.style;
  let mut step = 0usize;

  for phase in plan.phases {
    debug!("{}: {} phase, {} strokes", style, phase.name, phase.len);
    let (throttle, pause) = (phase.throttle, phase.pause);
    for stroke in phase.strokes() {
      if !should_continue() {
        debug!("{}: stopped after {}/{} strokes", style, step, total);
        return Outcome::Stopped;
      }
      stroke.iter().for_each(|primitive| canvas.apply(primitive));
      step += 1;
      if step % throttle == 0 && step < total {
        on_progress(step as f32 / total as f32);
        on_refresh(pause);
      }
    }
  }

  on_progress(1.0);
  on_refresh(Duration::ZERO);
  Outcome::Completed
}

/// Plan and paint `config.style` in one go, without pacing.
pub fn run<W: CanvasWriter + ?Sized>(
  source: &SourceImage,
  config: &DrawConfig,
  canvas: &mut W,
  should_continue: impl Fn() -> bool,
  on_progress: impl FnMut(f32)
) -> Outcome {
  drive(plan(source, config), canvas, should_continue, on_progress, |_| {})
}
