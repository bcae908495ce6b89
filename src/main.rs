use {
  autodraw::{
    animator::{Animator, GifRenderer},
    config::Settings,
    error::{self, Result},
    io,
    logging,
    session::Session,
    style::Style
  },
  clap::{Parser, Subcommand},
  std::{path::{Path, PathBuf}, process::ExitCode, thread, time::Duration},
  tracing::{info, warn}
};

#[derive(Parser)]
#[command(name = "autodraw", version, about = "Progressive automatic drawing of raster images")]
struct Args {
  /// debug logging, `RUST_LOG` overrides
  #[arg(short, long, global = true)]
  verbose: bool,

  /// JSON settings file, flags take precedence
  #[arg(long, global = true)]
  settings: Option<PathBuf>,

  #[command(subcommand)]
  command: Command
}

#[derive(Subcommand)]
enum Command {
  /// Draw an image in one of the styles and save the result
  Draw {
    input: PathBuf,
    #[arg(short, long, default_value = "drawing.png")]
    output: PathBuf,
    /// realistic, sketch, contour, pointillist, cubist or abstract
    #[arg(short, long)]
    style: Option<Style>,
    /// 1 to 100, higher is faster
    #[arg(long)]
    speed: Option<f32>,
    /// 10 to 100 percent
    #[arg(long)]
    detail: Option<f32>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    width: Option<u32>,
    #[arg(long)]
    height: Option<u32>,
    /// do not pause at refresh points
    #[arg(long)]
    no_pacing: bool
  },
  /// Turn still images into a looping GIF
  Animate {
    #[arg(required = true)]
    images: Vec<PathBuf>,
    /// comma separated, one per image: fade_in, slide_in, bounce
    #[arg(short, long, default_value = "")]
    effects: String,
    /// seconds each image is shown
    #[arg(long, default_value_t = 1.0)]
    duration: f32,
    /// seconds before each image
    #[arg(long, default_value_t = 0.0)]
    delay: f32,
    #[arg(short, long, default_value = "animation.gif")]
    output: PathBuf
  }
}

fn main() -> ExitCode {
  let args = Args::parse();
  logging::init(args.verbose);
  match run(args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprint!("{}", error::display(&e));
      ExitCode::FAILURE
    }
  }
}

fn run(args: Args) -> Result<()> {
  let mut settings = match &args.settings {
    Some(path) => Settings::load(path)?,
    None => Settings::default()
  };

  match args.command {
    Command::Draw { input, output, style, speed, detail, seed, width, height, no_pacing } => {
      settings.style = style.unwrap_or(settings.style);
      settings.speed = speed.unwrap_or(settings.speed);
      settings.detail = detail.unwrap_or(settings.detail);
      settings.seed = seed.or(settings.seed);
      settings.width = width.unwrap_or(settings.width);
      settings.height = height.unwrap_or(settings.height);
      draw(&settings, &input, &output, !no_pacing)
    }
    Command::Animate { images, effects, duration, delay, output } =>
      animate(images, &effects, duration, delay, &output)
  }
}

fn ensure_parent(path: &Path) -> Result<()> {
  match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => io::ensure_directory(parent),
    _ => Ok(())
  }
}

fn draw(settings: &Settings, input: &Path, output: &Path, pacing: bool) -> Result<()> {
  let mut session = if pacing { Session::new(settings) } else { Session::unpaced(settings) };
  session.load(input)?;
  session.start()?;

  let mut reported = 0;
  loop {
    let state = session.poll();
    let percent = (state.progress * 100.0) as u32;
    if percent >= reported + 10 {
      info!("{}%", percent);
      reported = percent - percent % 10;
    }
    if !state.is_running() {
      info!("{:?}", state.phase);
      break;
    }
    thread::sleep(Duration::from_millis(50));
  }

  ensure_parent(output)?;
  session.save(output)
}

fn animate(images: Vec<PathBuf>, effects: &str, duration: f32, delay: f32, output: &Path) -> Result<()> {
  images.iter()
    .filter(|path| !io::is_supported_image(path))
    .for_each(|path| warn!("{} does not look like a supported image", path.display()));

  let effects: Vec<&str> = effects.split(',').map(str::trim).collect();
  let durations = vec![duration; images.len()];
  let delays = vec![delay; images.len()];

  let mut animator = Animator::new();
  animator.create_animation(images, &effects, &durations, &delays);
  animator.apply_effects()?;

  let mut gif = GifRenderer::new();
  animator.render_animation(&mut gif)?;
  ensure_parent(output)?;
  gif.save(output)
}
