//! User facing settings, in the units of the control surface.

use {
  crate::{
    error::Result,
    geometry::Dimensions,
    style::{DrawConfig, Style}
  },
  image::Rgb,
  serde::{Deserialize, Serialize},
  std::path::Path
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
  pub style: Style,
  /// `1..=100`, higher is faster
  pub speed: f32,
  /// percent, `10..=100`
  pub detail: f32,
  pub seed: Option<u64>,
  /// display region the loaded image is fitted into, and the canvas size
  pub width: u32,
  pub height: u32,
  pub background: [u8; 3]
}

impl Default for Settings {
  fn default() -> Self {
    Settings {
      style: Style::Realistic,
      speed: 50.0,
      detail: 50.0,
      seed: None,
      width: 800,
      height: 300,
      background: [255; 3]
    }
  }
}

impl Settings {
  /// Read JSON settings; a missing or empty file gives the defaults.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let content = std::fs::read_to_string(path).unwrap_or_default();
    if content.trim().is_empty() {
      return Ok(Self::default());
    }
    Ok(serde_json::from_str(&content)?)
  }

  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    std::fs::write(path, serde_json::to_string_pretty(self)?)?;
    Ok(())
  }

  /// Clamped into the ranges the drawing core accepts.
  pub fn draw_config(&self) -> DrawConfig {
    let config = DrawConfig::from_ui(self.style, self.speed, self.detail);
    match self.seed {
      Some(seed) => config.with_seed(seed),
      None => config
    }
  }

  pub fn dimensions(&self) -> Dimensions {
    Dimensions::new(self.width.max(1), self.height.max(1))
  }

  pub fn background(&self) -> Rgb<u8> {
    Rgb(self.background)
  }
}

#[cfg(test)]
mod tests {
  use {super::*, anyhow::Result};

  #[test] fn defaults() {
    let settings = Settings::default();
    let config = settings.draw_config();
    assert_eq!(config.style, Style::Realistic);
    assert_eq!((config.detail, config.speed, config.seed), (0.5, 50.0, None));
    assert_eq!(settings.dimensions(), Dimensions::new(800, 300));
    assert_eq!(settings.background(), Rgb([255, 255, 255]));
  }

  #[test] fn partial_json() -> Result<()> {
    let settings: Settings = serde_json::from_str(r#"{ "style": "cubist", "detail": 250, "seed": 9 }"#)?;
    assert_eq!(settings.style, Style::Cubist);
    assert_eq!(settings.speed, 50.0);
    let config = settings.draw_config();
    assert_eq!((config.detail, config.seed), (1.0, Some(9)));
    assert!(serde_json::from_str::<Settings>(r#"{ "style": "oil" }"#).is_err());
    Ok(())
  }

  #[test] fn load_missing_and_saved() -> Result<()> {
    let dir = std::env::temp_dir().join("autodraw-config-tests");
    crate::io::ensure_directory(&dir)?;
    assert_eq!(Settings::load(dir.join("absent.json"))?, Settings::default());

    let path = dir.join("settings.json");
    let settings = Settings { style: Style::Sketch, speed: 80.0, width: 320, ..Settings::default() };
    settings.save(&path)?;
    assert_eq!(Settings::load(&path)?, settings);
    Ok(())
  }
}
