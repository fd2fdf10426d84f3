//! ADC channel management
//!
//! RP2040 has a single ADC with 4 external channels:
//! - ADC0: GPIO26
//! - ADC1: GPIO27
//! - ADC2: GPIO28
//! - ADC3: GPIO29

use embassy_rp::adc::{Adc, AdcPin, Blocking, Channel, Config};
use embassy_rp::gpio::{Pin, Pull};
use embassy_rp::peripherals::ADC;
use embassy_rp::Peri;
use tankgauge_hal::{AdcError, AdcReader};

use crate::gpio::{check_pin, PinError};

/// ADC channel identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcChannel {
    /// ADC0 on GPIO26
    Adc0,
    /// ADC1 on GPIO27
    Adc1,
    /// ADC2 on GPIO28
    Adc2,
    /// ADC3 on GPIO29
    Adc3,
}

impl AdcChannel {
    /// Get the GPIO pin for this ADC channel
    pub fn gpio(&self) -> u8 {
        match self {
            AdcChannel::Adc0 => 26,
            AdcChannel::Adc1 => 27,
            AdcChannel::Adc2 => 28,
            AdcChannel::Adc3 => 29,
        }
    }

    /// Get ADC channel from GPIO pin
    pub fn from_gpio(gpio: u8) -> Option<Self> {
        match gpio {
            26 => Some(AdcChannel::Adc0),
            27 => Some(AdcChannel::Adc1),
            28 => Some(AdcChannel::Adc2),
            29 => Some(AdcChannel::Adc3),
            _ => None,
        }
    }
}

/// One ADC channel sampled with blocking one-shot conversions
pub struct RpAdc {
    adc: Adc<'static, Blocking>,
    channel: Channel<'static>,
    id: AdcChannel,
}

impl RpAdc {
    /// Take the ADC and configure `pin` as its input, without pull
    pub fn new(
        adc: Peri<'static, ADC>,
        pin: Peri<'static, impl AdcPin + 'static>,
        expected: u8,
    ) -> Result<Self, PinError> {
        let gpio = pin.pin();
        check_pin(gpio, expected)?;
        let id = AdcChannel::from_gpio(gpio).ok_or(PinError::NotAdcCapable(gpio))?;

        Ok(Self {
            adc: Adc::new_blocking(adc, Config::default()),
            channel: Channel::new_pin(pin, Pull::None),
            id,
        })
    }

    /// Channel this reader samples
    pub fn channel(&self) -> AdcChannel {
        self.id
    }
}

impl AdcReader for RpAdc {
    fn read(&mut self) -> Result<u16, AdcError> {
        self.adc
            .blocking_read(&mut self.channel)
            .map_err(|_| AdcError::ConversionFailed)
    }
}
