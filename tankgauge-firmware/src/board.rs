//! Raspberry Pi Pico wiring
//!
//! Peripherals are taken by type here, and every pin is checked against
//! the configured assignment so the two cannot drift apart silently.

use defmt::*;
use embassy_rp::Peripherals;
use embassy_time::Delay;

use tankgauge_core::config::GaugeConfig;
use tankgauge_drivers::lcd::{Hd44780, LcdBus};
use tankgauge_drivers::sensor::AnalogLevelSensor;
use tankgauge_hal::UartConfig;
use tankgauge_hal_rp2040::{GpioAllocator, PinError, RpAdc, RpOutput, SerialTx};

/// HD44780 on six GPIO outputs, timed by the embassy time driver
pub type Lcd = Hd44780<RpOutput, Delay>;

/// Level probe on ADC0
pub type Probe = AnalogLevelSensor<RpAdc>;

/// Everything the main loop needs
pub struct Board {
    /// GPIOs taken by the gauge
    pub claimed: GpioAllocator,
    pub lcd: Lcd,
    pub probe: Probe,
    pub serial: SerialTx,
}

impl Board {
    /// Claim and configure the gauge's peripherals
    pub fn new(p: Peripherals, config: &GaugeConfig) -> Result<Self, PinError> {
        let pins = &config.pins;
        let claimed = GpioAllocator::claim(pins)?;

        let bus = LcdBus {
            rs: RpOutput::new(p.PIN_10.into(), pins.lcd.rs)?,
            enable: RpOutput::new(p.PIN_11.into(), pins.lcd.enable)?,
            data: [
                RpOutput::new(p.PIN_2.into(), pins.lcd.data[0])?,
                RpOutput::new(p.PIN_3.into(), pins.lcd.data[1])?,
                RpOutput::new(p.PIN_4.into(), pins.lcd.data[2])?,
                RpOutput::new(p.PIN_5.into(), pins.lcd.data[3])?,
            ],
        };
        debug!(
            "LCD bus: RS=GPIO{} E=GPIO{} D4..D7=GPIO{}/{}/{}/{}",
            bus.rs.gpio(),
            bus.enable.gpio(),
            bus.data[0].gpio(),
            bus.data[1].gpio(),
            bus.data[2].gpio(),
            bus.data[3].gpio()
        );

        let adc = RpAdc::new(p.ADC, p.PIN_26, pins.adc)?;
        debug!("Level probe on {} (GPIO{})", adc.channel(), adc.channel().gpio());

        let uart_config = UartConfig {
            baudrate: config.baudrate,
            ..UartConfig::default()
        };
        let serial = SerialTx::new(p.UART0, p.PIN_0, pins.uart_tx, &uart_config)?;

        Ok(Self {
            claimed,
            lcd: Hd44780::new(bus, Delay),
            probe: AnalogLevelSensor::new(adc, config.scale, config.calibration),
            serial,
        })
    }
}
