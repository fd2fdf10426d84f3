//! Level sensor drivers

pub mod analog_level;

pub use analog_level::AnalogLevelSensor;
