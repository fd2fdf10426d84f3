//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in tankgauge-core:
//!
//! - HD44780 character LCD over a bit-banged 4-bit bus
//! - Analog level probe on an ADC channel

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod lcd;
pub mod sensor;
