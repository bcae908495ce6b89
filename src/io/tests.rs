use {
  super::*,
  anyhow::Result,
  image::Rgb,
  std::path::PathBuf
};

fn scratch(name: &str) -> Result<PathBuf> {
  let dir = std::env::temp_dir().join("autodraw-io-tests");
  ensure_directory(&dir)?;
  Ok(dir.join(name))
}

#[test] fn extensions() {
  assert_eq!(file_extension("a/b/photo.JPG").as_deref(), Some("jpg"));
  assert_eq!(file_extension("noext"), None);
  assert!(is_supported_image("x.png"));
  assert!(is_supported_image("x.Jpeg"));
  assert!(is_supported_image("x.bmp"));
  assert!(!is_supported_image("x.tiff"));
  assert!(!is_supported_image("png"));
}

#[test] fn fit_keeps_aspect_ratio() {
  let bounds = Dimensions::new(800, 300);
  assert_eq!(fitted_size(1600, 1200, bounds), Dimensions::new(400, 300));
  assert_eq!(fitted_size(100, 10, bounds), Dimensions::new(800, 80));
  assert_eq!(fitted_size(4000, 1, bounds), Dimensions::new(800, 1));
  assert_eq!(fitted_size(800, 300, bounds), bounds);
}

#[test] fn output_format_defaults_to_png() {
  assert_eq!(output_format("a.jpg"), ImageFormat::Jpeg);
  assert_eq!(output_format("a.BMP"), ImageFormat::Bmp);
  assert_eq!(output_format("a"), ImageFormat::Png);
  assert_eq!(output_format("a.tiff"), ImageFormat::Png);
}

#[test] fn save_then_load() -> Result<()> {
  let path = scratch("round.png")?;
  let image = RgbImage::from_fn(40, 20, |x, y| Rgb([x as u8 * 6, y as u8 * 12, 0]));
  save_image(&image, &path)?;
  // overwrite silently
  save_image(&image, &path)?;

  let source = load_source(&path, Dimensions::new(800, 300))?;
  assert_eq!(source.dimensions(), Dimensions::new(600, 300));
  let same = load_source(&path, Dimensions::new(40, 20))?;
  assert_eq!(same.rgb(), &image);
  Ok(())
}

#[test] fn load_failures() -> Result<()> {
  let missing = load_source(scratch("missing.png")?, Dimensions::new(10, 10)).unwrap_err();
  assert!(matches!(missing.downcast_ref::<ErrorKind>(), Some(ErrorKind::Load { .. })));

  let text = scratch("notes.txt")?;
  std::fs::write(&text, "hello")?;
  let unsupported = load_source(&text, Dimensions::new(10, 10)).unwrap_err();
  assert!(matches!(unsupported.downcast_ref::<ErrorKind>(), Some(ErrorKind::UnsupportedFormat(_))));

  let corrupt = scratch("corrupt.png")?;
  std::fs::write(&corrupt, "definitely not a png")?;
  let corrupt = load_source(&corrupt, Dimensions::new(10, 10)).unwrap_err();
  assert!(matches!(corrupt.downcast_ref::<ErrorKind>(), Some(ErrorKind::Load { .. })));
  Ok(())
}

#[test] fn save_into_missing_directory_fails() -> Result<()> {
  let path = scratch("no/such/dir/out.png")?;
  let error = save_image(&RgbImage::new(4, 4), &path).unwrap_err();
  assert!(matches!(error.downcast_ref::<ErrorKind>(), Some(ErrorKind::Save { .. })));
  Ok(())
}
