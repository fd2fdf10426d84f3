//! Tank Gauge Hardware Abstraction Layer
//!
//! This crate defines the hardware capabilities the gauge needs from a
//! chip. Chip-specific HALs implement them, and the drivers and core logic
//! only ever see these traits, so they can be exercised on the host against
//! in-memory fakes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  tankgauge-firmware                     │
//! └─────────────────────────────────────────┘
//!          │                      │
//!          ▼                      ▼
//! ┌──────────────────┐   ┌──────────────────┐
//! │ tankgauge-core / │   │ tankgauge-hal-   │
//! │ tankgauge-drivers│   │     rp2040       │
//! └──────────────────┘   └──────────────────┘
//!          │                      │
//!          └──────────┬───────────┘
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tankgauge-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output line
//! - [`adc::AdcReader`] - One-shot analog sample source
//! - [`uart::UartTx`] - Serial transmitter

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use adc::{AdcError, AdcReader};
pub use gpio::OutputPin;
pub use uart::{DataBits, Parity, StopBits, UartConfig, UartError, UartTx};
