//! Board-agnostic core logic for the tank gauge firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Level math (raw sample → voltage → fill percentage)
//! - Fixed pin assignment and calibration constants
//! - Display and serial line formatting
//! - Device traits (character display, level sensor)
//! - The acquisition and presentation step run by the firmware loop

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod level;
pub mod monitor;
pub mod report;
pub mod traits;

pub use level::{AdcScale, LevelCalibration, Reading};
pub use monitor::{Monitor, MonitorError};
