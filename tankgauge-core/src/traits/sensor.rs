//! Level sensor trait

use tankgauge_hal::AdcError;

use crate::level::Reading;

/// Errors that can occur while sampling the level probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// ADC conversion error
    ConversionError,
}

impl From<AdcError> for SensorError {
    fn from(_: AdcError) -> Self {
        SensorError::ConversionError
    }
}

/// Trait for water level sensors
///
/// Takes `&mut self` because ADC reads require mutable access.
pub trait LevelSensor {
    /// Take one sample and derive voltage and fill level from it
    fn read(&mut self) -> Result<Reading, SensorError>;
}
