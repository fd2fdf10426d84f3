//! Acquisition and presentation step
//!
//! One call to [`Monitor::update`] samples the probe, redraws both LCD
//! rows and sends one diagnostic line over the serial link. Pacing is
//! left to the caller.

use tankgauge_hal::UartTx;

use crate::level::Reading;
use crate::report::{self, DiagnosticLine, DisplayLine};
use crate::traits::{CharacterDisplay, LevelSensor, Row, SensorError};

/// Why an update did not complete
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MonitorError {
    /// The probe could not be sampled; nothing was drawn
    Sensor(SensorError),
    /// The display was updated but the diagnostic line was not sent
    Serial(Reading),
}

impl From<SensorError> for MonitorError {
    fn from(e: SensorError) -> Self {
        MonitorError::Sensor(e)
    }
}

/// Ties a level sensor to a character display and a serial sink
pub struct Monitor<S, D, T> {
    sensor: S,
    display: D,
    serial: T,
    top: DisplayLine,
    bottom: DisplayLine,
    diagnostic: DiagnosticLine,
}

impl<S, D, T> Monitor<S, D, T>
where
    S: LevelSensor,
    D: CharacterDisplay,
    T: UartTx,
{
    /// Create a monitor. The display must already be initialized.
    pub fn new(sensor: S, display: D, serial: T) -> Self {
        Self {
            sensor,
            display,
            serial,
            top: DisplayLine::new(),
            bottom: DisplayLine::new(),
            diagnostic: DiagnosticLine::new(),
        }
    }

    /// Run one sample/draw/report iteration
    pub async fn update(&mut self) -> Result<Reading, MonitorError> {
        let reading = self.sensor.read()?;

        report::voltage_line(&mut self.top, &reading);
        report::level_line(&mut self.bottom, &reading);
        report::diagnostic_line(&mut self.diagnostic, &reading);

        self.display.clear().await;
        self.display.set_cursor(Row::Top, 0).await;
        self.display.print(&self.top).await;
        self.display.set_cursor(Row::Bottom, 0).await;
        self.display.print(&self.bottom).await;

        self.serial
            .write_line(&self.diagnostic)
            .map_err(|_| MonitorError::Serial(reading))?;

        Ok(reading)
    }

    /// Last diagnostic line that was formatted
    pub fn diagnostic(&self) -> &str {
        &self.diagnostic
    }
}
