//! Scenario parameters.
//!
//! The reference sculpture's dimensions are data, not constants: they
//! live in an immutable [`SculptureParams`] value, loadable from TOML,
//! and are passed explicitly to the layout helpers.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading parameters.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The TOML did not parse into parameters.
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// The parameters parsed but make no geometric sense.
    #[error("invalid parameters: {0}")]
    Invalid(String),
}

/// Dimensions of the two-cube sculpture, in millimetres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SculptureParams {
    /// Inner edge length of each cube.
    pub dim: f64,
    /// Panel material thickness.
    pub thickness: f64,
    /// Displacement of the second cube relative to the first.
    pub offset: [f64; 3],
}

impl Default for SculptureParams {
    fn default() -> Self {
        Self {
            dim: 1000.0,
            thickness: 10.0,
            offset: [500.0, 500.0, 500.0],
        }
    }
}

impl SculptureParams {
    /// Parse and validate parameters from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let params: Self = toml::from_str(s)?;
        params.validate()?;
        Ok(params)
    }

    /// Load and validate parameters from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    /// Reject dimension combinations the layout cannot realize.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dim > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "dim must be positive, got {}",
                self.dim
            )));
        }
        if !(self.thickness > 0.0) || self.thickness * 2.0 >= self.dim {
            return Err(ConfigError::Invalid(format!(
                "thickness must be positive and less than half of dim, got {}",
                self.thickness
            )));
        }
        for (axis, off) in ["x", "y", "z"].iter().zip(self.offset) {
            if off.abs() >= self.dim + 2.0 * self.thickness {
                return Err(ConfigError::Invalid(format!(
                    "offset.{axis} {off} moves the cubes apart entirely"
                )));
            }
        }
        Ok(())
    }
}
