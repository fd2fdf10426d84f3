//! GPIO allocation and outputs
//!
//! Tracks which GPIO pins are in use to prevent conflicts, and wraps
//! embassy outputs so drivers can use them through `tankgauge-hal`.

use embassy_rp::gpio::{AnyPin, Level, Output, Pin};
use embassy_rp::Peri;
use heapless::FnvIndexSet;
use tankgauge_core::config::PinAssignment;
use tankgauge_hal::OutputPin;

use crate::adc::AdcChannel;
use crate::uart::tx_pin_uart;

/// Maximum number of GPIO pins on RP2040
pub const GPIO_COUNT: usize = 30;

/// Error when claiming or checking a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin(u8),
    /// Pin already taken
    AlreadyTaken(u8),
    /// Pin has no ADC function
    NotAdcCapable(u8),
    /// Pin has no UART TX function
    NotUartTx(u8),
    /// Wired pin differs from the configured one
    Mismatch { expected: u8, found: u8 },
}

/// GPIO allocator to track pin usage
pub struct GpioAllocator {
    /// Set of allocated GPIO pins
    allocated: FnvIndexSet<u8, 32>,
}

impl Default for GpioAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioAllocator {
    /// Create a new GPIO allocator
    pub fn new() -> Self {
        Self {
            allocated: FnvIndexSet::new(),
        }
    }

    /// Claim every pin of an assignment and check pin functions
    pub fn claim(pins: &PinAssignment) -> Result<Self, PinError> {
        let mut alloc = Self::new();
        for pin in pins.all() {
            alloc.allocate(pin)?;
        }
        if AdcChannel::from_gpio(pins.adc).is_none() {
            return Err(PinError::NotAdcCapable(pins.adc));
        }
        if tx_pin_uart(pins.uart_tx).is_none() {
            return Err(PinError::NotUartTx(pins.uart_tx));
        }
        Ok(alloc)
    }

    /// Allocate a GPIO pin
    pub fn allocate(&mut self, pin: u8) -> Result<(), PinError> {
        if pin >= GPIO_COUNT as u8 {
            return Err(PinError::InvalidPin(pin));
        }
        if self.allocated.contains(&pin) {
            return Err(PinError::AlreadyTaken(pin));
        }
        self.allocated
            .insert(pin)
            .map_err(|_| PinError::InvalidPin(pin))?;
        Ok(())
    }

    /// Get the number of allocated pins
    pub fn allocated_count(&self) -> usize {
        self.allocated.len()
    }
}

/// Check that a peripheral pin is the one the configuration names
pub fn check_pin(found: u8, expected: u8) -> Result<(), PinError> {
    if found == expected {
        Ok(())
    } else {
        Err(PinError::Mismatch { expected, found })
    }
}

/// Push-pull output, driven low on creation
pub struct RpOutput {
    pin: Output<'static>,
    gpio: u8,
}

impl RpOutput {
    /// Configure `pin` as an output after checking its number
    pub fn new(pin: Peri<'static, AnyPin>, expected: u8) -> Result<Self, PinError> {
        let gpio = pin.pin();
        check_pin(gpio, expected)?;
        Ok(Self {
            pin: Output::new(pin, Level::Low),
            gpio,
        })
    }

    /// GPIO number of this output
    pub fn gpio(&self) -> u8 {
        self.gpio
    }
}

impl OutputPin for RpOutput {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
