//! Fixed configuration
//!
//! The gauge has no runtime configuration. Everything lives in
//! [`GaugeConfig::DEFAULT`], is handed to the drivers at start-up and
//! is checked once at boot with [`GaugeConfig::validate`].

pub mod hardware;

pub use hardware::*;

use crate::level::{AdcScale, LevelCalibration};

/// Configuration errors found at boot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The same GPIO is assigned to two signals
    DuplicatePin(u8),
    /// ADC scale has no range or no reference voltage
    InvalidScale,
    /// Level breakpoints are not strictly increasing
    InvalidCalibration,
    /// Update interval is zero
    InvalidInterval,
}

/// Complete gauge configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GaugeConfig {
    /// GPIO assignment for the LCD, probe and serial link
    pub pins: PinAssignment,
    /// ADC code → volts
    pub scale: AdcScale,
    /// Volts → percent
    pub calibration: LevelCalibration,
    /// Diagnostic UART baud rate
    pub baudrate: u32,
    /// Time between samples in milliseconds
    pub update_interval_ms: u32,
}

impl GaugeConfig {
    /// The wiring and calibration the firmware is built for
    pub const DEFAULT: Self = Self {
        pins: PinAssignment::DEFAULT,
        scale: AdcScale::RP2040_3V3,
        calibration: LevelCalibration::DEFAULT,
        baudrate: 115_200,
        update_interval_ms: 1000,
    };

    /// Check every part of the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pins.validate()?;
        self.scale.validate()?;
        self.calibration.validate()?;
        if self.update_interval_ms == 0 {
            return Err(ConfigError::InvalidInterval);
        }
        Ok(())
    }
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
