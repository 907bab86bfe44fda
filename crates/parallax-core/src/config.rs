//! Runtime configuration for the scroll controller.
//!
//! Defaults come from [`crate::constants`]; the page may override individual
//! values through string key/value pairs (the web front-end reads them from
//! `data-*` attributes on the scroll container).

use crate::constants::{
    EASING_FACTOR, FULL_INTENSITY, LOW_CORE_INTENSITY, LOW_CORE_THRESHOLD, MOMENTUM_SCALE,
    WHEEL_MULTIPLIER,
};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown config key `{0}`")]
    UnknownKey(String),
    #[error("`{key}` is not a number: `{value}`")]
    InvalidNumber { key: String, value: String },
    #[error("`{key}` out of range: {value} ({expected})")]
    OutOfRange {
        key: &'static str,
        value: f64,
        expected: &'static str,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollConfig {
    /// Fraction of the remaining distance closed each frame, in (0, 1].
    pub easing: f64,
    /// Multiplier applied to release velocity. Negative so a leftward fling
    /// keeps the strip moving the same way.
    pub momentum_scale: f64,
    pub wheel_multiplier: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            easing: EASING_FACTOR,
            momentum_scale: MOMENTUM_SCALE,
            wheel_multiplier: WHEEL_MULTIPLIER,
        }
    }
}

impl ScrollConfig {
    pub const KEYS: [&'static str; 3] = ["ease", "momentum", "wheel"];

    /// Start from the defaults and apply each `(key, value)` pair in order.
    pub fn with_overrides<'a, I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut cfg = Self::default();
        for (key, raw) in pairs {
            let value: f64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber {
                    key: key.to_string(),
                    value: raw.to_string(),
                })?;
            match key {
                "ease" => cfg.easing = value,
                "momentum" => cfg.momentum_scale = value,
                "wheel" => cfg.wheel_multiplier = value,
                other => return Err(ConfigError::UnknownKey(other.to_string())),
            }
        }
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.easing > 0.0 && self.easing <= 1.0) {
            return Err(ConfigError::OutOfRange {
                key: "ease",
                value: self.easing,
                expected: "0 < ease <= 1",
            });
        }
        if !self.momentum_scale.is_finite() {
            return Err(ConfigError::OutOfRange {
                key: "momentum",
                value: self.momentum_scale,
                expected: "finite",
            });
        }
        if !(self.wheel_multiplier.is_finite() && self.wheel_multiplier > 0.0) {
            return Err(ConfigError::OutOfRange {
                key: "wheel",
                value: self.wheel_multiplier,
                expected: "finite and > 0",
            });
        }
        Ok(())
    }
}

/// Value for the `--parallax-intensity` CSS hint given the reported core count.
#[inline]
pub fn parallax_intensity(hardware_concurrency: u32) -> f64 {
    if hardware_concurrency <= LOW_CORE_THRESHOLD {
        LOW_CORE_INTENSITY
    } else {
        FULL_INTENSITY
    }
}
