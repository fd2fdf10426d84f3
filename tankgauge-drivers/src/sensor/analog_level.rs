//! Resistive water level probe on an ADC input
//!
//! The probe's output voltage rises with the water level. Conversion to
//! a fill percentage is done by the core level math; this driver only
//! owns the ADC channel and the constants it needs.

use tankgauge_core::level::{AdcScale, LevelCalibration, Reading};
use tankgauge_core::traits::{LevelSensor, SensorError};
use tankgauge_hal::AdcReader;

/// Level probe read through an [`AdcReader`]
pub struct AnalogLevelSensor<A> {
    adc: A,
    scale: AdcScale,
    calibration: LevelCalibration,
}

impl<A> AnalogLevelSensor<A> {
    /// Create a sensor with an explicit scale and calibration
    pub fn new(adc: A, scale: AdcScale, calibration: LevelCalibration) -> Self {
        Self {
            adc,
            scale,
            calibration,
        }
    }

    /// RP2040 ADC with the stock probe breakpoints
    pub fn rp2040(adc: A) -> Self {
        Self::new(adc, AdcScale::RP2040_3V3, LevelCalibration::DEFAULT)
    }
}

impl<A: AdcReader> LevelSensor for AnalogLevelSensor<A> {
    fn read(&mut self) -> Result<Reading, SensorError> {
        let raw = self.adc.read()?;
        Ok(Reading::new(raw, &self.scale, &self.calibration))
    }
}

/// Dummy ADC for testing (returns a fixed value)
#[cfg(test)]
pub struct DummyAdc(pub Option<u16>);

#[cfg(test)]
impl AdcReader for DummyAdc {
    fn read(&mut self) -> Result<u16, tankgauge_hal::AdcError> {
        self.0.ok_or(tankgauge_hal::AdcError::ConversionFailed)
    }
}
