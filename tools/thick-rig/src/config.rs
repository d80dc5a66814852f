//! Generator configuration (thick-object.toml)

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::f32::consts::FRAC_PI_2;
use std::path::{Path, PathBuf};

/// Settings for one generated object
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Number of polygon corners (>= 3).
    /// Default: 7
    pub sides: usize,

    /// Circumradius of the polygon.
    /// Default: 1.0
    pub radius: f32,

    /// Angle of the first corner, in radians.
    /// Default: π/2 (first corner points up)
    pub start_angle: f32,

    /// Extrusion depth along Z.
    /// Default: 0.2
    pub thickness: f32,

    /// Output GLB path.
    /// Default: thickObj.glb
    pub output: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sides: 7,
            radius: 1.0,
            start_angle: FRAC_PI_2,
            thickness: 0.2,
            output: PathBuf::from("thickObj.glb"),
        }
    }
}

impl GeneratorConfig {
    /// Load a config file; missing fields keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: GeneratorConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Reject settings the builder cannot use
    pub fn validate(&self) -> Result<()> {
        if self.sides < 3 {
            bail!("sides must be at least 3, got {}", self.sides);
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            bail!("radius must be positive, got {}", self.radius);
        }
        if !self.thickness.is_finite() || self.thickness <= 0.0 {
            bail!("thickness must be positive, got {}", self.thickness);
        }
        if !self.start_angle.is_finite() {
            bail!("start_angle must be finite");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let config = GeneratorConfig::default();
        assert_eq!(config.sides, 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial() {
        let config = GeneratorConfig::parse("sides = 6\nthickness = 0.5\n").unwrap();
        assert_eq!(config.sides, 6);
        assert_eq!(config.thickness, 0.5);
        assert_eq!(config.radius, 1.0);
        assert_eq!(config.output, PathBuf::from("thickObj.glb"));
    }

    #[test]
    fn test_parse_rejects_unknown_field() {
        assert!(GeneratorConfig::parse("segments = 4\n").is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let few = GeneratorConfig {
            sides: 2,
            ..Default::default()
        };
        assert!(few.validate().is_err());

        let flat = GeneratorConfig {
            thickness: 0.0,
            ..Default::default()
        };
        assert!(flat.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("thick-object.toml");
        std::fs::write(&path, "radius = 2.5\noutput = \"out.glb\"\n").unwrap();

        let config = GeneratorConfig::load(&path).unwrap();
        assert_eq!(config.radius, 2.5);
        assert_eq!(config.output, PathBuf::from("out.glb"));
    }
}
