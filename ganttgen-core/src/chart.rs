//! Chart configuration
//!
//! Cosmetic and calendar defaults for the schedule builder and renderer:
//! the group color palette, the working-hours ratio, the default workday
//! set, and figure geometry. Everything is an explicit value passed into
//! `build_rows` / `render_chart`; there are no globals.
//!
//! Configuration is loaded from `~/.config/ganttgen/config.toml` when the
//! file exists; every field has a default so the file is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// An sRGB color parsed from a `#rrggbb` palette entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse a `#rrggbb` hex string (leading `#` optional).
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 {
            return Err(Error::Config(format!("invalid palette color {s:?}")));
        }
        let v = u32::from_str_radix(hex, 16)
            .map_err(|_| Error::Config(format!("invalid palette color {s:?}")))?;
        Ok(Rgb((v >> 16) as u8, (v >> 8) as u8, v as u8))
    }
}

/// Chart-related configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Group color palette as `#rrggbb` entries, cycled when there are
    /// more groups than colors
    pub palette: Vec<String>,

    /// Working hours per day, used when parsing `h` durations
    pub hours_per_day: f64,

    /// Default workday set when the project does not specify one
    pub workdays: String,

    /// Figure width in pixels
    pub width: u32,

    /// Vertical pixels reserved per display row
    pub row_height: u32,

    /// Color of the "today" marker line and label
    pub today_color: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            palette: vec![
                "#4e79a7".to_string(), // blue
                "#f28e2b".to_string(), // orange
                "#e15759".to_string(), // red
                "#76b7b2".to_string(), // teal
                "#59a14f".to_string(), // green
                "#edc948".to_string(), // yellow
                "#b07aa1".to_string(), // purple
                "#ff9da7".to_string(), // pink
            ],
            hours_per_day: 8.0,
            workdays: "M,T,W,Th,F".to_string(),
            width: 1600,
            row_height: 36,
            today_color: "#cc0000".to_string(),
        }
    }
}

impl ChartConfig {
    /// Parse the palette into colors. An empty palette is a configuration
    /// error.
    pub fn palette_colors(&self) -> Result<Vec<Rgb>> {
        if self.palette.is_empty() {
            return Err(Error::Config("palette must not be empty".to_string()));
        }
        self.palette.iter().map(|s| Rgb::from_hex(s)).collect()
    }

    /// Parse the today-marker color.
    pub fn today_rgb(&self) -> Result<Rgb> {
        Rgb::from_hex(&self.today_color)
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Chart configuration
    pub chart: ChartConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::default_config_path() {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/ganttgen/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ganttgen").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let config = ChartConfig::default();
        assert_eq!(config.palette.len(), 8);
        assert_eq!(config.palette_colors().unwrap()[0], Rgb(0x4e, 0x79, 0xa7));
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Rgb::from_hex("#cc0000").unwrap(), Rgb(0xcc, 0, 0));
        assert_eq!(Rgb::from_hex("4e79a7").unwrap(), Rgb(0x4e, 0x79, 0xa7));
    }

    #[test]
    fn test_invalid_hex() {
        assert!(Rgb::from_hex("#cc00").is_err());
        assert!(Rgb::from_hex("not-a-color").is_err());
    }

    #[test]
    fn test_empty_palette_is_config_error() {
        let config = ChartConfig {
            palette: Vec::new(),
            ..ChartConfig::default()
        };
        assert!(config.palette_colors().is_err());
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[chart]\nhours_per_day = 6.0\nworkdays = \"M,T,W,Th\"\n",
        )
        .unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.chart.hours_per_day, 6.0);
        assert_eq!(config.chart.workdays, "M,T,W,Th");
        // untouched fields keep their defaults
        assert_eq!(config.chart.palette.len(), 8);
    }

    #[test]
    fn test_load_from_file_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not toml at all [[[").unwrap();
        assert!(Config::load_from_file(&path).is_err());
    }
}
