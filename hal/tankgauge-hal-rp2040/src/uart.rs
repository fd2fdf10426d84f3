//! Diagnostic UART transmitter
//!
//! RP2040 has two UART peripherals (UART0 and UART1). The gauge only
//! transmits, so only the TX pin is claimed.

use embassy_rp::gpio::Pin;
use embassy_rp::uart::{self, Blocking, Instance, TxPin};
use embassy_rp::Peri;
use tankgauge_hal::{DataBits, Parity, StopBits, UartConfig, UartError, UartTx};

use crate::gpio::{check_pin, PinError};

/// UART peripheral identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartId {
    Uart0,
    Uart1,
}

/// Determine which UART can transmit on a given GPIO pin
pub fn tx_pin_uart(gpio: u8) -> Option<UartId> {
    // UART0 TX: GPIO 0, 12, 16, 28
    // UART1 TX: GPIO 4, 8, 20, 24
    match gpio {
        0 | 12 | 16 | 28 => Some(UartId::Uart0),
        4 | 8 | 20 | 24 => Some(UartId::Uart1),
        _ => None,
    }
}

/// Translate a board-agnostic UART config into the embassy one
pub fn rp_config(config: &UartConfig) -> uart::Config {
    let mut cfg = uart::Config::default();
    cfg.baudrate = config.baudrate;
    cfg.data_bits = match config.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
    };
    cfg.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    cfg.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    cfg
}

/// Blocking TX-only UART
pub struct SerialTx {
    tx: uart::UartTx<'static, Blocking>,
}

impl SerialTx {
    /// Set up `uart` to transmit on `tx` after checking its number
    pub fn new<T: Instance>(
        uart: Peri<'static, T>,
        tx: Peri<'static, impl TxPin<T>>,
        expected: u8,
        config: &UartConfig,
    ) -> Result<Self, PinError> {
        check_pin(tx.pin(), expected)?;
        Ok(Self {
            tx: uart::UartTx::new_blocking(uart, tx, rp_config(config)),
        })
    }
}

impl UartTx for SerialTx {
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), UartError> {
        self.tx.blocking_write(data).map_err(map_error)
    }

    fn flush(&mut self) -> Result<(), UartError> {
        self.tx.blocking_flush().map_err(map_error)
    }
}

fn map_error(e: uart::Error) -> UartError {
    match e {
        uart::Error::Overrun => UartError::Overrun,
        _ => UartError::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tx_pins() {
        assert_eq!(tx_pin_uart(0), Some(UartId::Uart0));
        assert_eq!(tx_pin_uart(8), Some(UartId::Uart1));
        // RX-only pins
        assert_eq!(tx_pin_uart(1), None);
        assert_eq!(tx_pin_uart(9), None);
    }
}
