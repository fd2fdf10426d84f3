//! Tank Gauge - Water Level Monitor Firmware
//!
//! Samples a resistive level probe on the Pico's ADC once a second,
//! shows voltage and fill level on a 16x2 HD44780 LCD and echoes the
//! same values as a text line on UART0.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::{Duration, Ticker};
use {defmt_rtt as _, panic_probe as _};

use tankgauge_core::config::GaugeConfig;
use tankgauge_core::{Monitor, MonitorError};

use crate::board::Board;

mod board;

/// Wiring and calibration this image is built for
const CONFIG: GaugeConfig = GaugeConfig::DEFAULT;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Tank gauge firmware starting...");

    if let Err(e) = CONFIG.validate() {
        defmt::panic!("Invalid configuration: {}", e);
    }
    debug!("Configuration: {}", CONFIG);

    let p = embassy_rp::init(Default::default());

    let Board {
        claimed,
        mut lcd,
        probe,
        serial,
    } = match Board::new(p, &CONFIG) {
        Ok(board) => board,
        Err(e) => defmt::panic!("Pin setup failed: {}", e),
    };
    info!(
        "Peripherals ready: {} GPIOs claimed, UART0 TX on GPIO{} at {} baud",
        claimed.allocated_count(),
        CONFIG.pins.uart_tx,
        CONFIG.baudrate
    );

    lcd.initialize().await;
    info!("LCD initialized");

    let mut monitor = Monitor::new(probe, lcd, serial);
    let mut ticker = Ticker::every(Duration::from_millis(CONFIG.update_interval_ms as u64));

    loop {
        match monitor.update().await {
            Ok(reading) => {
                trace!(
                    "raw={} voltage={} level={}",
                    reading.raw,
                    reading.voltage,
                    reading.percent
                );
                debug!("{=str}", monitor.diagnostic());
            }
            Err(MonitorError::Sensor(e)) => {
                warn!("Level probe read failed: {}", e);
            }
            Err(MonitorError::Serial(reading)) => {
                warn!("Diagnostic line not sent (level {}%)", reading.percent);
            }
        }

        ticker.next().await;
    }
}
