//! Water level math
//!
//! Converts a raw ADC code into the probe voltage and then into a fill
//! percentage using a two-breakpoint piecewise linear map:
//!
//! ```text
//!  100% ┤            ┌──────────
//!       │           ╱
//!       │         ╱
//!    0% ┼───────┘
//!       └───────┬────┬─────────── volts
//!              low  high
//! ```
//!
//! Nothing is rejected here. Readings outside the probe's usable range
//! are clamped at the breakpoints and nowhere else.

use crate::config::ConfigError;

/// Linear scale from ADC code to volts
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcScale {
    /// Largest code the converter produces (4095 for 12-bit)
    pub max_code: u16,
    /// Reference voltage that `max_code` corresponds to
    pub vref: f32,
}

impl AdcScale {
    /// RP2040 ADC: 12-bit, 3.3V reference
    pub const RP2040_3V3: Self = Self {
        max_code: 4095,
        vref: 3.3,
    };

    /// Convert a raw code to volts
    pub fn to_voltage(&self, raw: u16) -> f32 {
        (raw as f32 / self.max_code as f32) * self.vref
    }

    /// Check that the scale can be used for conversion
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_code == 0 || !(self.vref > 0.0) {
            return Err(ConfigError::InvalidScale);
        }
        Ok(())
    }
}

/// Breakpoints of the voltage → percentage map
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LevelCalibration {
    /// Voltage at (and below) which the tank reads empty
    pub low: f32,
    /// Voltage at (and above) which the tank reads full
    pub high: f32,
}

impl LevelCalibration {
    /// Breakpoints measured for the resistive probe shipped with the gauge
    pub const DEFAULT: Self = Self {
        low: 0.17,
        high: 1.6,
    };

    /// Map a probe voltage to a fill percentage in `[0, 100]`
    pub fn percent(&self, voltage: f32) -> f32 {
        if voltage <= self.low {
            0.0
        } else if voltage >= self.high {
            100.0
        } else {
            ((voltage - self.low) / (self.high - self.low)) * 100.0
        }
    }

    /// Check that the breakpoints describe a rising ramp
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.low < self.high) {
            return Err(ConfigError::InvalidCalibration);
        }
        Ok(())
    }
}

impl Default for LevelCalibration {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One sample worth of derived values
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    /// Raw ADC code
    pub raw: u16,
    /// Probe voltage
    pub voltage: f32,
    /// Fill level, 0-100
    pub percent: f32,
}

impl Reading {
    /// Derive voltage and percentage from a raw sample
    pub fn new(raw: u16, scale: &AdcScale, calibration: &LevelCalibration) -> Self {
        let voltage = scale.to_voltage(raw);
        Self {
            raw,
            voltage,
            percent: calibration.percent(voltage),
        }
    }
}
