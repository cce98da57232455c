//! Tunable layout constants.
//!
//! # Responsibility
//! - Hold every tuned number the layout engine reads (axis horizon, curve
//!   exponent, placement factors, ribbon window length).
//! - Load overrides from JSON, falling back to defaults per missing key.
//!
//! # Invariants
//! - A config passed to the engine has been through `validate()`.
//! - `max_days` stays above the 14-day color seam so the far band has a
//!   non-zero log range.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Start of the far (log-faded) urgency band, in days.
pub const FAR_BAND_START_DAYS: f64 = 14.0;

/// Layout tuning parameters.
///
/// Field defaults reproduce the dashboard's observed look. None of them are
/// semantic contracts; only the shape of each formula is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct LayoutConfig {
    /// Days at which the compressed axis reaches its right edge.
    pub max_days: f64,
    /// Exponent applied to the normalized log position (> 1 squeezes the tail).
    pub gamma: f64,
    pub y_base: f64,
    pub y_max: f64,
    pub child_y_factor: f64,
    pub weight_y_factor: f64,
    pub base_radius: f64,
    pub weight_radius_factor: f64,
    pub child_radius_factor: f64,
    /// Added to `radius / 10` to get the orbit distance in axis units.
    pub orbit_margin: f64,
    pub child_base_radius: f64,
    pub child_radius_stride: u32,
    pub child_radius_modulo: u32,
    /// Alpha override used for orbiting child colors.
    pub child_opacity: f64,
    /// Number of day cells in the ribbon window.
    pub window_days: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_days: 60.0,
            gamma: 1.3,
            y_base: 10.0,
            y_max: 90.0,
            child_y_factor: 2.5,
            weight_y_factor: 4.0,
            base_radius: 20.0,
            weight_radius_factor: 3.0,
            child_radius_factor: 2.0,
            orbit_margin: 3.0,
            child_base_radius: 3.0,
            child_radius_stride: 3,
            child_radius_modulo: 4,
            child_opacity: 0.75,
            window_days: 30,
        }
    }
}

impl LayoutConfig {
    /// Parses a JSON config document and validates it.
    ///
    /// Missing keys keep their default value; unknown keys are rejected.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(ConfigError::Json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&raw)
    }

    /// Checks that every tunable keeps the formulas well-defined.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let floats = [
            ("maxDays", self.max_days),
            ("gamma", self.gamma),
            ("yBase", self.y_base),
            ("yMax", self.y_max),
            ("childYFactor", self.child_y_factor),
            ("weightYFactor", self.weight_y_factor),
            ("baseRadius", self.base_radius),
            ("weightRadiusFactor", self.weight_radius_factor),
            ("childRadiusFactor", self.child_radius_factor),
            ("orbitMargin", self.orbit_margin),
            ("childBaseRadius", self.child_base_radius),
            ("childOpacity", self.child_opacity),
        ];
        for (name, value) in floats {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite(name));
            }
        }

        if self.max_days <= FAR_BAND_START_DAYS {
            return Err(ConfigError::HorizonTooShort(self.max_days));
        }
        if self.gamma <= 0.0 {
            return Err(ConfigError::NonPositiveGamma(self.gamma));
        }
        if self.y_max < self.y_base {
            return Err(ConfigError::InvertedVerticalBounds {
                base: self.y_base,
                max: self.y_max,
            });
        }
        if !(0.0..=1.0).contains(&self.child_opacity) {
            return Err(ConfigError::OpacityOutOfRange(self.child_opacity));
        }
        if self.child_radius_modulo == 0 {
            return Err(ConfigError::ZeroRadiusModulo);
        }
        if self.window_days == 0 {
            return Err(ConfigError::EmptyWindow);
        }
        Ok(())
    }
}

/// Config loading or validation failure.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    NonFinite(&'static str),
    HorizonTooShort(f64),
    NonPositiveGamma(f64),
    InvertedVerticalBounds { base: f64, max: f64 },
    OpacityOutOfRange(f64),
    ZeroRadiusModulo,
    EmptyWindow,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read layout config: {err}"),
            Self::Json(err) => write!(f, "invalid layout config json: {err}"),
            Self::NonFinite(name) => write!(f, "layout config `{name}` must be finite"),
            Self::HorizonTooShort(value) => write!(
                f,
                "layout config `maxDays` must be greater than {FAR_BAND_START_DAYS}, got {value}"
            ),
            Self::NonPositiveGamma(value) => {
                write!(f, "layout config `gamma` must be positive, got {value}")
            }
            Self::InvertedVerticalBounds { base, max } => write!(
                f,
                "layout config `yMax` ({max}) must be >= `yBase` ({base})"
            ),
            Self::OpacityOutOfRange(value) => write!(
                f,
                "layout config `childOpacity` must be within [0, 1], got {value}"
            ),
            Self::ZeroRadiusModulo => {
                write!(f, "layout config `childRadiusModulo` must be non-zero")
            }
            Self::EmptyWindow => write!(f, "layout config `windowDays` must be at least 1"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}
