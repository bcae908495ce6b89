use {
  super::*,
  crate::{
    canvas::Canvas,
    geometry::WHITE,
    style::Style
  },
  anyhow::Result,
  image::{Rgb, RgbImage},
  std::{sync::mpsc, time::Duration}
};

fn gradient(w: u32, h: u32) -> SourceImage {
  RgbImage::from_fn(w, h, |x, y| Rgb([(x * 255 / w) as u8, (y * 255 / h) as u8, 128])).into()
}

fn blank_canvas(source: &SourceImage) -> SharedCanvas {
  SharedCanvas::new(Canvas::new(source.dimensions(), WHITE))
}

/// Long enough at the slowest speed to still be running when the test reacts.
fn slow_config() -> DrawConfig {
  DrawConfig::new(Style::Pointillist, 1.0, 1.0).with_seed(1)
}

#[test] fn runs_to_completion() -> Result<()> {
  let source = gradient(80, 60);
  let canvas = blank_canvas(&source);
  let (tx, rx) = mpsc::channel();
  let mut scheduler = Scheduler::new().with_pacing(false);

  assert!(scheduler.start(source, DrawConfig::new(Style::Cubist, 0.5, 50.0).with_seed(3), canvas.clone(), tx)?);
  let events: Vec<_> = rx.iter().collect();
  assert_eq!(scheduler.join(), Some(Outcome::Completed));
  assert!(!scheduler.is_running());

  assert_eq!(events.last(), Some(&DrawEvent::Completed));
  let progress: Vec<f32> = events.iter()
    .filter_map(|event| match event { DrawEvent::Progress(p) => Some(*p), _ => None })
    .collect();
  assert!(progress.windows(2).all(|w| w[0] <= w[1]));
  assert_eq!(progress.last(), Some(&1.0));
  assert!(events.contains(&DrawEvent::Refresh));
  assert!(!canvas.read().is_blank());
  Ok(())
}

#[test] fn second_start_is_ignored() -> Result<()> {
  let source = gradient(200, 200);
  let canvas = blank_canvas(&source);
  let (tx, rx) = mpsc::channel();
  let mut scheduler = Scheduler::new();

  assert!(scheduler.start(source.clone(), slow_config(), canvas.clone(), tx.clone())?);
  assert!(scheduler.is_running());
  assert!(!scheduler.start(source.clone(), slow_config(), canvas.clone(), tx.clone())?);
  assert!(!scheduler.start(source, slow_config(), canvas, tx)?);

  scheduler.stop();
  assert_eq!(scheduler.join(), Some(Outcome::Stopped));
  assert_eq!(scheduler.peak_concurrency(), 1);
  let terminal = rx.try_iter().filter(DrawEvent::is_terminal).count();
  assert_eq!(terminal, 1);
  Ok(())
}

#[test] fn stop_keeps_partial_canvas() -> Result<()> {
  let source = gradient(200, 200);
  let canvas = blank_canvas(&source);
  let (tx, rx) = mpsc::channel();
  let mut scheduler = Scheduler::new();

  scheduler.start(source, slow_config(), canvas.clone(), tx)?;
  // first refresh comes after a hundred dots
  assert_eq!(rx.recv_timeout(Duration::from_secs(10))?, DrawEvent::Progress(100.0 / 40000.0));
  scheduler.stop();
  assert_eq!(scheduler.join(), Some(Outcome::Stopped));

  let events: Vec<_> = rx.try_iter().collect();
  assert_eq!(events.last(), Some(&DrawEvent::Stopped));
  assert!(!events.contains(&DrawEvent::Completed));

  let partial = canvas.snapshot();
  assert!(!canvas.read().is_blank());
  std::thread::sleep(Duration::from_millis(50));
  assert_eq!(canvas.snapshot(), partial);
  Ok(())
}

#[test] fn restart_after_finish() -> Result<()> {
  let source = gradient(40, 40);
  let canvas = blank_canvas(&source);
  let mut scheduler = Scheduler::new().with_pacing(false);
  let config = DrawConfig::new(Style::Abstract, 0.2, 100.0).with_seed(5);

  for _ in 0..3 {
    let (tx, rx) = mpsc::channel();
    assert!(scheduler.start(source.clone(), config, canvas.clone(), tx)?);
    assert_eq!(rx.iter().last(), Some(DrawEvent::Completed));
  }
  assert_eq!(scheduler.join(), Some(Outcome::Completed));
  assert_eq!(scheduler.peak_concurrency(), 1);
  Ok(())
}

#[test] fn stop_when_idle_is_noop() {
  let mut scheduler = Scheduler::new();
  scheduler.stop();
  assert!(!scheduler.is_running());
  assert_eq!(scheduler.join(), None);
  assert_eq!(scheduler.peak_concurrency(), 0);
}
