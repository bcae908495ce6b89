//! Error kinds of the crate.
//!
//! Fallible operations return [`anyhow::Result`]; the failures callers may want to tell apart
//! are raised as an [`ErrorKind`] and can be recovered with `error.downcast_ref::<ErrorKind>()`.

use std::{fmt, path::PathBuf};

pub use anyhow::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
  /// Start was requested before any image was loaded.
  NoImage,
  UnknownStyle(String),
  UnknownEffect(String),
  UnsupportedFormat(PathBuf),
  /// Reading or decoding the image at `path` failed.
  Load { path: PathBuf, reason: String },
  /// Encoding or writing to `path` failed.
  Save { path: PathBuf, reason: String },
  EmptyAnimation
}

impl fmt::Display for ErrorKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    use ErrorKind::*;
    match self {
      NoImage => write!(f, "no image loaded"),
      UnknownStyle(name) => write!(f, "unknown style `{}`", name),
      UnknownEffect(name) => write!(f, "unknown effect `{}`", name),
      UnsupportedFormat(path) => write!(f, "unsupported image format: {}", path.display()),
      Load { path, reason } => write!(f, "failed to load {}: {}", path.display(), reason),
      Save { path, reason } => write!(f, "failed to save {}: {}", path.display(), reason),
      EmptyAnimation => write!(f, "animation has no frames")
    }
  }
}

impl std::error::Error for ErrorKind {}

/// Render the whole cause chain, one line per link.
pub fn display(error: &anyhow::Error) -> String {
  let mut msg = "Error:\n".to_string();
  error
    .chain()
    .enumerate()
    .for_each(|(index, error)| msg.push_str(&format!("└> {} - {}\n", index, error)));
  msg
}

#[cfg(test)]
mod tests {
  use {super::*, anyhow::Context};

  #[test] fn chain_is_listed() {
    let error = Err::<(), _>(ErrorKind::NoImage)
      .context("starting a run")
      .unwrap_err();
    assert_eq!(display(&error), "Error:\n└> 0 - starting a run\n└> 1 - no image loaded\n");
    assert_eq!(error.downcast_ref::<ErrorKind>(), Some(&ErrorKind::NoImage));
  }
}
