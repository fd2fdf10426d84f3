//! Hardware pin assignment
//!
//! GPIO numbers for every signal the gauge drives or samples.

use super::ConfigError;

/// HD44780 parallel bus wiring (4-bit mode, R/W tied to ground)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LcdPins {
    /// Register select (low = command, high = data)
    pub rs: u8,
    /// Enable strobe
    pub enable: u8,
    /// D4, D5, D6, D7 in bit order
    pub data: [u8; 4],
}

impl LcdPins {
    /// All six LCD lines: RS, E, D4..D7
    pub const fn all(&self) -> [u8; 6] {
        [
            self.rs,
            self.enable,
            self.data[0],
            self.data[1],
            self.data[2],
            self.data[3],
        ]
    }
}

/// Every GPIO the firmware claims
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinAssignment {
    /// Character LCD bus
    pub lcd: LcdPins,
    /// Level probe analog input
    pub adc: u8,
    /// Diagnostic UART transmit
    pub uart_tx: u8,
}

impl PinAssignment {
    /// Pico wiring: LCD on GP10/GP11 + GP2..GP5, probe on GP26 (ADC0), UART0 TX on GP0
    pub const DEFAULT: Self = Self {
        lcd: LcdPins {
            rs: 10,
            enable: 11,
            data: [2, 3, 4, 5],
        },
        adc: 26,
        uart_tx: 0,
    };

    /// All claimed pins, LCD lines first
    pub const fn all(&self) -> [u8; 8] {
        let lcd = self.lcd.all();
        [
            lcd[0], lcd[1], lcd[2], lcd[3], lcd[4], lcd[5], self.adc, self.uart_tx,
        ]
    }

    /// Reject assignments that put two signals on one GPIO
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pins = self.all();
        for (i, pin) in pins.iter().enumerate() {
            if pins[i + 1..].contains(pin) {
                return Err(ConfigError::DuplicatePin(*pin));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_assignment() {
        let pins = PinAssignment::DEFAULT;
        assert_eq!(pins.all(), [10, 11, 2, 3, 4, 5, 26, 0]);
        assert!(pins.validate().is_ok());
    }

    #[test]
    fn test_duplicate_data_line() {
        let mut pins = PinAssignment::DEFAULT;
        pins.lcd.data[3] = 2;
        assert_eq!(pins.validate(), Err(ConfigError::DuplicatePin(2)));
    }

    #[test]
    fn test_probe_on_lcd_line() {
        let mut pins = PinAssignment::DEFAULT;
        pins.adc = pins.lcd.enable;
        assert_eq!(pins.validate(), Err(ConfigError::DuplicatePin(11)));
    }
}
