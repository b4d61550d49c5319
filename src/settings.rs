//! Generator settings
//!
//! Stored as JSON. Every field has a default, so partial files are fine.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Shell detail levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DetailPreset {
    Low,
    Medium,
    #[default]
    High,
}

impl fmt::Display for DetailPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DetailPreset::Low => "low",
            DetailPreset::Medium => "medium",
            DetailPreset::High => "high",
        };
        f.write_str(name)
    }
}

impl FromStr for DetailPreset {
    type Err = SettingsError;

    /// Case-insensitive; `med` is accepted for `medium`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(DetailPreset::Low),
            "medium" | "med" => Ok(DetailPreset::Medium),
            "high" => Ok(DetailPreset::High),
            _ => Err(SettingsError::UnknownPreset(s.to_string())),
        }
    }
}

impl DetailPreset {
    /// Number of rotated layers in the shell
    pub fn rotations(&self) -> usize {
        match self {
            DetailPreset::Low => 60,
            DetailPreset::Medium => 120,
            DetailPreset::High => ROTATION_COUNT,
        }
    }

    /// Samples per layer
    pub fn samples(&self) -> usize {
        match self {
            DetailPreset::Low => 40,
            DetailPreset::Medium => 80,
            DetailPreset::High => SAMPLE_COUNT,
        }
    }
}

/// Hidden-word grid parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub size: usize,
    pub secret_word: String,
    /// Characters used for non-word cells
    pub charset: String,
    pub min_words: u32,
    pub max_words: u32,
    pub max_attempts: u32,
    pub seed: u64,

    // === Layout ===
    /// Pixel size of one square cell
    pub cell_size: u32,
    /// Glyph offset inside its cell
    pub padding: u32,
    pub font_size: u32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            size: GRID_SIZE,
            secret_word: HIDDEN_WORD.to_string(),
            charset: ALPHANUMERIC.to_string(),
            min_words: MIN_WORDS,
            max_words: MAX_WORDS,
            max_attempts: MAX_ATTEMPTS,
            seed: DEFAULT_SEED,

            cell_size: CELL_SIZE,
            padding: CELL_PADDING,
            font_size: FONT_SIZE,
        }
    }
}

impl GridSettings {
    /// Seed clamped to the slider range
    pub fn slider_seed(&self) -> u64 {
        self.seed.clamp(SEED_MIN, SEED_MAX)
    }
}

/// Shell sculpture parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellSettings {
    pub control_points: usize,
    /// Control points are drawn from [-extent, extent] per axis
    pub extent: f32,
    pub rotations: usize,
    pub samples: usize,
    /// Added to every side of the bounding box
    pub margin: f32,
    pub seed: u64,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            control_points: CONTROL_POINTS,
            extent: CONTROL_EXTENT,
            rotations: ROTATION_COUNT,
            samples: SAMPLE_COUNT,
            margin: BOUNDS_MARGIN,
            seed: 0,
        }
    }
}

/// Orbit phase parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub orbit_frames: u32,
    pub fps: u32,
    pub zoom_amplitude: f32,
    pub elevation_base: f32,
    pub elevation_swing: f32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            orbit_frames: ORBIT_FRAMES,
            fps: FPS,
            zoom_amplitude: ZOOM_AMPLITUDE,
            elevation_base: ELEVATION_BASE,
            elevation_swing: ELEVATION_SWING,
        }
    }
}

/// All generator settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Shell detail preset
    pub preset: DetailPreset,
    pub grid: GridSettings,
    pub shell: ShellSettings,
    pub animation: AnimationSettings,
}

impl Settings {
    /// Create settings from a detail preset (applies preset defaults)
    pub fn from_preset(preset: DetailPreset) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    /// Apply a detail preset (updates shell rotation and sample counts)
    pub fn apply_preset(&mut self, preset: DetailPreset) {
        self.preset = preset;
        self.shell.rotations = preset.rotations();
        self.shell.samples = preset.samples();
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from a JSON file
    pub fn try_load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Using default settings ({})", err);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_demo_constants() {
        let s = Settings::default();
        assert_eq!(s.preset, DetailPreset::High);
        assert_eq!(s.grid.size, 25);
        assert_eq!(s.grid.secret_word, "NAMMU");
        assert_eq!(s.grid.charset.len(), 62);
        assert_eq!(s.grid.seed, 50);
        assert_eq!(s.shell.rotations, 180);
        assert_eq!(s.shell.samples, 100);
        assert_eq!(s.animation.orbit_frames, 180);
    }

    #[test]
    fn test_preset_parses_display_names() {
        for preset in [DetailPreset::Low, DetailPreset::Medium, DetailPreset::High] {
            assert_eq!(preset.to_string().parse::<DetailPreset>().unwrap(), preset);
        }
        assert_eq!(" MED ".parse::<DetailPreset>().unwrap(), DetailPreset::Medium);

        let err = "ultra".parse::<DetailPreset>().unwrap_err();
        assert!(matches!(err, SettingsError::UnknownPreset(ref name) if name == "ultra"));
    }

    #[test]
    fn test_apply_preset() {
        let s = Settings::from_preset(DetailPreset::Low);
        assert_eq!(s.shell.rotations, 60);
        assert_eq!(s.shell.samples, 40);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s = Settings::from_json(r#"{ "grid": { "seed": 7, "secret_word": "ENKI" } }"#).unwrap();
        assert_eq!(s.grid.seed, 7);
        assert_eq!(s.grid.secret_word, "ENKI");
        assert_eq!(s.grid.size, GRID_SIZE);
        assert_eq!(s.shell, ShellSettings::default());
    }

    #[test]
    fn test_json_round_trip() {
        let s = Settings::from_preset(DetailPreset::Medium);
        let back = Settings::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let path = Path::new("/nonexistent/whisper-shell.json");
        assert!(matches!(Settings::try_load(path), Err(SettingsError::Io(_))));
        assert_eq!(Settings::load(path), Settings::default());
    }

    #[test]
    fn test_slider_seed_clamps() {
        let grid = GridSettings {
            seed: 500,
            ..GridSettings::default()
        };
        assert_eq!(grid.slider_seed(), SEED_MAX);
    }
}
