//! Device traits
//!
//! These traits define the interface between the acquisition and
//! presentation logic and the device drivers.

pub mod display;
pub mod sensor;

pub use display::{CharacterDisplay, Row};
pub use sensor::{LevelSensor, SensorError};
