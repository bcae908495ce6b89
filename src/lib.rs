//! Progressive "automatic drawing" of raster images.
//!
//! A loaded picture is redrawn stroke by stroke on a blank canvas in one of six styles:
//! realistic pencil shading with line art, rough sketch, clean contours, pointillist dots,
//! cubist shards or abstract flowing shapes.
//!
//! The crate is layered bottom-up:
//! - [`geometry`] and [`canvas`]: drawable [`Primitive`](geometry::Primitive)s and the raster
//!   they are painted on;
//! - [`vision`]: the read-only [`SourceImage`](vision::SourceImage) and the edge and contour
//!   extraction the styles work from;
//! - [`style`]: every style as a lazily generated [`Plan`](style::Plan) of strokes, and the one
//!   generic driver painting any plan with cooperative cancellation and throttled progress;
//! - [`scheduler`]: a single background drawing thread at a time;
//! - [`session`]: load, start, stop, clear and save, the way a control surface drives it.
//!
//! [`animator`] is an unrelated small utility sequencing still images into a GIF.
//!
//! # Basic usage
//! ```no_run
//! # use autodraw::{config::Settings, session::Session, style::{DrawConfig, Style}};
//! # fn main() -> anyhow::Result<()> {
//! let mut session = Session::unpaced(&Settings::default());
//! session.load("photo.jpg")?;
//! session.set_config(DrawConfig::from_ui(Style::Pointillist, 50.0, 80.0).with_seed(1));
//! session.start()?;
//! session.wait();
//! session.save("pointillist.png")?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod util;
pub mod logging;
pub mod geometry;
pub mod canvas;
pub mod vision;
pub mod style;
pub mod scheduler;
pub mod session;
pub mod io;
pub mod config;
pub mod animator;
