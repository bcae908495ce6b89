//! Loading source images and saving drawings.

use {
  crate::{
    error::{ErrorKind, Result},
    geometry::Dimensions,
    vision::SourceImage
  },
  image::{imageops::FilterType, DynamicImage, ImageFormat, RgbImage},
  std::path::Path,
  tracing::{debug, info}
};

#[cfg(test)] mod tests;

pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "bmp"];

/// Lowercase extension without the dot.
pub fn file_extension(path: impl AsRef<Path>) -> Option<String> {
  path.as_ref()
    .extension()
    .and_then(|ext| ext.to_str())
    .map(str::to_ascii_lowercase)
}

pub fn is_supported_image(path: impl AsRef<Path>) -> bool {
  file_extension(path).map_or(false, |ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

/// Create `dir` and its parents, if missing.
pub fn ensure_directory(dir: impl AsRef<Path>) -> Result<()> {
  let dir = dir.as_ref();
  if !dir.is_dir() {
    std::fs::create_dir_all(dir)?;
    debug!("created {}", dir.display());
  }
  Ok(())
}

/// Size of a `width`×`height` image scaled by the largest ratio that fits `bounds`.
pub fn fitted_size(width: u32, height: u32, bounds: Dimensions) -> Dimensions {
  if width == 0 || height == 0 {
    return Dimensions::new(width, height);
  }
  let ratio = f64::min(
    bounds.width as f64 / width as f64,
    bounds.height as f64 / height as f64
  );
  Dimensions::new(
    ((width as f64 * ratio) as u32).max(1),
    ((height as f64 * ratio) as u32).max(1)
  )
}

/// Resize to fit inside `bounds`, up or down, with Lanczos resampling.
pub fn fit_within(image: &DynamicImage, bounds: Dimensions) -> DynamicImage {
  let size = fitted_size(image.width(), image.height(), bounds);
  if size == Dimensions::new(image.width(), image.height()) {
    return image.clone();
  }
  crate::profile!("fit", image.resize_exact(size.width, size.height, FilterType::Lanczos3))
}

/// Decode the image at `path` and fit it inside `bounds`.
pub fn load_source(path: impl AsRef<Path>, bounds: Dimensions) -> Result<SourceImage> {
  let path = path.as_ref();
  if !is_supported_image(path) {
    return Err(ErrorKind::UnsupportedFormat(path.to_path_buf()).into());
  }
  let image = image::open(path).map_err(|e| ErrorKind::Load {
    path: path.to_path_buf(),
    reason: e.to_string()
  })?;
  let fitted = fit_within(&image, bounds);
  info!("loaded {} ({}x{} -> {}x{})",
    path.display(), image.width(), image.height(), fitted.width(), fitted.height());
  Ok(SourceImage::from(&fitted))
}

/// Output format from the extension of `path`; PNG when there is none or it is unknown.
pub fn output_format(path: impl AsRef<Path>) -> ImageFormat {
  ImageFormat::from_path(path)
    .ok()
    .filter(|format| matches!(format,
      ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::Gif | ImageFormat::Bmp))
    .unwrap_or(ImageFormat::Png)
}

/// Write `image` to `path`, replacing whatever is there.
pub fn save_image(image: &RgbImage, path: impl AsRef<Path>) -> Result<()> {
  let path = path.as_ref();
  let format = output_format(path);
  image.save_with_format(path, format).map_err(|e| ErrorKind::Save {
    path: path.to_path_buf(),
    reason: e.to_string()
  })?;
  info!("saved {} as {:?}", path.display(), format);
  Ok(())
}
