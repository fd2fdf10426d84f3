//! Line formatting for the LCD and the serial log
//!
//! LCD lines keep at most [`LINE_LEN`] characters, one per panel
//! column; the rest is dropped. The serial line uses a fixed format that host-side tooling
//! parses, so it must not change.

use core::fmt::{self, Write};

use heapless::String;

use crate::level::Reading;

/// Characters per LCD row
pub const LINE_LEN: usize = 16;

/// Capacity of the serial diagnostic line
pub const DIAG_LEN: usize = 64;

/// One LCD row of text
pub type DisplayLine = String<LINE_LEN>;

/// One serial diagnostic line (without line ending)
pub type DiagnosticLine = String<DIAG_LEN>;

/// Writer that drops whatever does not fit
struct Truncating<'a, const N: usize>(&'a mut String<N>);

impl<const N: usize> Write for Truncating<'_, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

fn overwrite<const N: usize>(buf: &mut String<N>, args: fmt::Arguments<'_>) {
    buf.clear();
    let mut out = Truncating(buf);
    // Truncating never reports an error
    let _ = out.write_fmt(args);
}

/// First LCD row: probe voltage, two decimals
pub fn voltage_line(buf: &mut DisplayLine, reading: &Reading) {
    overwrite(buf, format_args!("Voltage: {:.2} V", reading.voltage));
}

/// Second LCD row: fill level, one decimal
pub fn level_line(buf: &mut DisplayLine, reading: &Reading) {
    overwrite(buf, format_args!("Level: {:.1}%", reading.percent));
}

/// Serial diagnostic line
pub fn diagnostic_line(buf: &mut DiagnosticLine, reading: &Reading) {
    overwrite(
        buf,
        format_args!(
            "ADC Value: {}, Voltage: {:.2} V, Tank Level: {:.1}%",
            reading.raw, reading.voltage, reading.percent
        ),
    );
}
