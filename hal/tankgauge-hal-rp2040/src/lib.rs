//! RP2040-specific HAL for the tank gauge firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `tankgauge-hal` traits on top of `embassy-rp`:
//!
//! - GPIO allocation and push-pull outputs for the LCD bus
//! - ADC channel selection and blocking one-shot reads
//! - Blocking UART transmitter for the diagnostic line

#![cfg_attr(not(test), no_std)]

pub mod adc;
pub mod gpio;
pub mod uart;

pub use adc::{AdcChannel, RpAdc};
pub use gpio::{GpioAllocator, PinError, RpOutput};
pub use uart::{SerialTx, UartId};
