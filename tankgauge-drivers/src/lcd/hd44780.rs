//! HD44780 character LCD over a 4-bit GPIO bus
//!
//! The panel is write-only (R/W tied to ground), so the busy flag is
//! never read. Every transfer is followed by a fixed settle delay long
//! enough for the slowest instruction except clear and home, which get
//! their own longer wait.
//!
//! Wiring:
//!
//! ```text
//!   RS ── register select (low = instruction, high = data)
//!   E  ── strobe, latched on the falling edge
//!   D4..D7 ── data nibble, D4 = bit 0
//! ```

use embedded_hal_async::delay::DelayNs;
use tankgauge_core::traits::{CharacterDisplay, Row};
use tankgauge_hal::OutputPin;

use super::command::{self, DisplayControl, EntryMode, FunctionSet};

/// Power-up wait before the first instruction
const POWER_UP_MS: u32 = 50;
/// Wait after the first function-set nibble
const FIRST_RETRY_MS: u32 = 5;
/// Wait after the second and third function-set nibbles
const RETRY_US: u32 = 100;
/// Minimum E high time
const PULSE_US: u32 = 1;
/// Execution time of an ordinary instruction
const SETTLE_US: u32 = 100;
/// Execution time of clear and home
const LONG_SETTLE_MS: u32 = 2;

/// The six lines of a 4-bit HD44780 bus
pub struct LcdBus<P> {
    pub rs: P,
    pub enable: P,
    /// D4, D5, D6, D7
    pub data: [P; 4],
}

/// HD44780 driver
pub struct Hd44780<P, D> {
    bus: LcdBus<P>,
    delay: D,
}

impl<P, D> Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Create a driver. Call [`Self::initialize`] before anything else.
    pub fn new(bus: LcdBus<P>, delay: D) -> Self {
        Self { bus, delay }
    }

    /// Run the power-on sequence and leave the panel cleared
    ///
    /// The controller may come up in 8-bit mode, so the function set is
    /// repeated three times as a nibble before switching to 4-bit.
    pub async fn initialize(&mut self) {
        self.bus.rs.set_low();
        self.bus.enable.set_low();
        for pin in self.bus.data.iter_mut() {
            pin.set_low();
        }
        self.delay.delay_ms(POWER_UP_MS).await;

        self.send_nibble(command::INIT_8BIT_NIBBLE, true).await;
        self.delay.delay_ms(FIRST_RETRY_MS).await;
        self.send_nibble(command::INIT_8BIT_NIBBLE, true).await;
        self.delay.delay_us(RETRY_US).await;
        self.send_nibble(command::INIT_8BIT_NIBBLE, true).await;
        self.delay.delay_us(RETRY_US).await;
        self.send_nibble(command::INIT_4BIT_NIBBLE, true).await;

        self.send_byte(FunctionSet::FOUR_BIT_TWO_LINES.bits(), true)
            .await;
        self.send_byte(DisplayControl::TEXT_ONLY.bits(), true).await;
        self.send_byte(EntryMode::LEFT_TO_RIGHT.bits(), true).await;
        self.clear().await;
    }

    /// Put the low four bits of `value` on D4..D7 and strobe E
    pub async fn send_nibble(&mut self, value: u8, is_command: bool) {
        self.bus.rs.set_state(!is_command);
        for (bit, pin) in self.bus.data.iter_mut().enumerate() {
            pin.set_state((value >> bit) & 1 != 0);
        }

        self.bus.enable.set_high();
        self.delay.delay_us(PULSE_US).await;
        self.bus.enable.set_low();
        self.delay.delay_us(SETTLE_US).await;
    }

    /// Send a full byte, high nibble first
    pub async fn send_byte(&mut self, value: u8, is_command: bool) {
        self.send_nibble(value >> 4, is_command).await;
        self.send_nibble(value & 0x0F, is_command).await;
    }

    /// Clear the panel and home the cursor
    pub async fn clear(&mut self) {
        self.send_byte(command::CLEAR_DISPLAY, true).await;
        self.delay.delay_ms(LONG_SETTLE_MS).await;
    }

    /// Home the cursor and undo any display shift
    pub async fn home(&mut self) {
        self.send_byte(command::RETURN_HOME, true).await;
        self.delay.delay_ms(LONG_SETTLE_MS).await;
    }

    /// Switch the display, cursor and cursor blink on or off
    pub async fn set_display(&mut self, display_on: bool, cursor_on: bool, blink_on: bool) {
        let control = DisplayControl {
            display_on,
            cursor_on,
            blink_on,
        };
        self.send_byte(control.bits(), true).await;
    }

    /// Move the cursor to `col` on `row`
    ///
    /// Any row other than 0 addresses the second line.
    pub async fn set_cursor(&mut self, row: u8, col: u8) {
        self.goto(Row::from_index(row), col).await;
    }

    /// Write every byte of `text` as character data
    pub async fn print(&mut self, text: &str) {
        for byte in text.bytes() {
            self.send_byte(byte, false).await;
        }
    }

    async fn goto(&mut self, row: Row, col: u8) {
        let base = command::ROW_OFFSETS[row.index() as usize];
        let address = base.wrapping_add(col);
        self.send_byte(command::set_ddram_address(address), true)
            .await;
    }
}

impl<P, D> CharacterDisplay for Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    async fn clear(&mut self) {
        Hd44780::clear(self).await;
    }

    async fn set_cursor(&mut self, row: Row, col: u8) {
        self.goto(row, col).await;
    }

    async fn print(&mut self, text: &str) {
        Hd44780::print(self, text).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use embassy_futures::block_on;
    use std::rc::Rc;

    const RS: usize = 0;
    const E: usize = 1;
    const D4: usize = 2;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        /// Rising edge on E with the bus state at that moment
        Strobe { data: bool, nibble: u8 },
        /// Delay in nanoseconds
        Delay(u32),
    }

    #[derive(Default)]
    struct Recorder {
        levels: [bool; 6],
        events: Vec<Event>,
    }

    impl Recorder {
        fn nibble(&self) -> u8 {
            (0..4).fold(0, |acc, bit| acc | ((self.levels[D4 + bit] as u8) << bit))
        }
    }

    type Shared = Rc<RefCell<Recorder>>;

    struct MockPin {
        line: usize,
        rec: Shared,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            let mut rec = self.rec.borrow_mut();
            if self.line == E && !rec.levels[E] {
                let event = Event::Strobe {
                    data: rec.levels[RS],
                    nibble: rec.nibble(),
                };
                rec.events.push(event);
            }
            rec.levels[self.line] = true;
        }

        fn set_low(&mut self) {
            self.rec.borrow_mut().levels[self.line] = false;
        }

        fn is_set_high(&self) -> bool {
            self.rec.borrow().levels[self.line]
        }
    }

    struct MockDelay(Shared);

    impl DelayNs for MockDelay {
        async fn delay_ns(&mut self, ns: u32) {
            self.0.borrow_mut().events.push(Event::Delay(ns));
        }

        async fn delay_us(&mut self, us: u32) {
            self.delay_ns(us * 1_000).await;
        }

        async fn delay_ms(&mut self, ms: u32) {
            self.delay_ns(ms * 1_000_000).await;
        }
    }

    fn setup() -> (Hd44780<MockPin, MockDelay>, Shared) {
        let rec: Shared = Rc::new(RefCell::new(Recorder::default()));
        let pin = |line| MockPin {
            line,
            rec: rec.clone(),
        };
        let bus = LcdBus {
            rs: pin(RS),
            enable: pin(E),
            data: [pin(D4), pin(D4 + 1), pin(D4 + 2), pin(D4 + 3)],
        };
        (Hd44780::new(bus, MockDelay(rec.clone())), rec)
    }

    fn strobes(rec: &Shared) -> Vec<(bool, u8)> {
        rec.borrow()
            .events
            .iter()
            .filter_map(|e| match *e {
                Event::Strobe { data, nibble } => Some((data, nibble)),
                Event::Delay(_) => None,
            })
            .collect()
    }

    /// Pair up strobes into (is_data, byte)
    fn bytes(strobes: &[(bool, u8)]) -> Vec<(bool, u8)> {
        strobes
            .chunks(2)
            .map(|pair| {
                assert_eq!(pair[0].0, pair[1].0, "mode changed mid-byte");
                (pair[0].0, (pair[0].1 << 4) | pair[1].1)
            })
            .collect()
    }

    /// Total delay between each strobe and the next one
    fn strobe_gaps(events: &[Event]) -> Vec<u32> {
        let mut gaps = Vec::new();
        let mut current = None;
        for e in events {
            match *e {
                Event::Strobe { .. } => {
                    if let Some(g) = current.replace(0) {
                        gaps.push(g);
                    }
                }
                Event::Delay(ns) => {
                    if let Some(g) = current.as_mut() {
                        *g += ns;
                    }
                }
            }
        }
        gaps
    }

    #[test]
    fn test_send_nibble_sets_lines() {
        let (mut lcd, rec) = setup();
        block_on(lcd.send_nibble(0b1010, false));

        let r = rec.borrow();
        assert_eq!(
            r.events,
            vec![
                Event::Strobe {
                    data: true,
                    nibble: 0b1010
                },
                Event::Delay(1_000),
                Event::Delay(100_000),
            ]
        );
        assert!(!r.levels[E]);
        assert_eq!(r.levels[D4..], [false, true, false, true]);
    }

    #[test]
    fn test_send_nibble_ignores_high_bits() {
        let (mut lcd, rec) = setup();
        block_on(lcd.send_nibble(0xF3, true));
        assert_eq!(strobes(&rec), vec![(false, 0x3)]);
    }

    #[test]
    fn test_send_byte_is_two_pulses() {
        let (mut lcd, rec) = setup();
        block_on(lcd.send_byte(0xA5, false));
        assert_eq!(strobes(&rec), vec![(true, 0xA), (true, 0x5)]);
        assert!(!rec.borrow().levels[E]);

        let (mut lcd, rec) = setup();
        block_on(lcd.send_byte(0x28, true));
        assert_eq!(strobes(&rec), vec![(false, 0x2), (false, 0x8)]);
    }

    #[test]
    fn test_initialize_sequence() {
        let (mut lcd, rec) = setup();
        block_on(lcd.initialize());

        let s = strobes(&rec);
        assert_eq!(s[..4], [(false, 3), (false, 3), (false, 3), (false, 2)]);
        assert_eq!(
            bytes(&s[4..]),
            vec![(false, 0x28), (false, 0x0C), (false, 0x06), (false, 0x01)]
        );
    }

    #[test]
    fn test_initialize_timing() {
        let (mut lcd, rec) = setup();
        block_on(lcd.initialize());
        let events = rec.borrow().events.clone();

        // Power-up wait comes before any strobe
        assert_eq!(events[0], Event::Delay(50_000_000));
        assert!(matches!(events[1], Event::Strobe { nibble: 3, .. }));

        let gaps = strobe_gaps(&events);
        // At least 5 ms after the first function-set nibble
        assert!(gaps[0] >= 5_000_000);
        // At least 100 us after the second and third
        assert!(gaps[1] >= 100_000);
        assert!(gaps[2] >= 100_000);

        // Clear is the last instruction and gets its long settle
        assert_eq!(events.last(), Some(&Event::Delay(2_000_000)));
    }

    #[test]
    fn test_initialize_starts_with_lines_low() {
        let (mut lcd, rec) = setup();
        rec.borrow_mut().levels = [true; 6];
        block_on(lcd.initialize());

        let s = strobes(&rec);
        assert_eq!(s.len(), 4 + 8);
        assert_eq!(s[0], (false, 3));
        assert!(!rec.borrow().levels[E]);
    }

    #[test]
    fn test_clear_and_home() {
        let (mut lcd, rec) = setup();
        block_on(lcd.clear());
        block_on(lcd.home());

        assert_eq!(bytes(&strobes(&rec)), vec![(false, 0x01), (false, 0x02)]);
        let long_waits = rec
            .borrow()
            .events
            .iter()
            .filter(|e| **e == Event::Delay(2_000_000))
            .count();
        assert_eq!(long_waits, 2);
    }

    #[test]
    fn test_set_cursor() {
        let (mut lcd, rec) = setup();
        block_on(lcd.set_cursor(1, 5));
        block_on(lcd.set_cursor(0, 0));
        block_on(lcd.set_cursor(7, 0));

        assert_eq!(
            bytes(&strobes(&rec)),
            vec![(false, 0xC5), (false, 0x80), (false, 0xC0)]
        );
    }

    #[test]
    fn test_set_cursor_masks_column() {
        let (mut lcd, rec) = setup();
        block_on(lcd.set_cursor(1, 0x40));
        assert_eq!(bytes(&strobes(&rec)), vec![(false, 0x80)]);
    }

    #[test]
    fn test_set_display() {
        let (mut lcd, rec) = setup();
        block_on(lcd.set_display(true, true, false));
        block_on(lcd.set_display(false, false, false));
        assert_eq!(bytes(&strobes(&rec)), vec![(false, 0x0E), (false, 0x08)]);
    }

    #[test]
    fn test_print_sends_data() {
        let (mut lcd, rec) = setup();
        block_on(lcd.print("Hi"));
        assert_eq!(bytes(&strobes(&rec)), vec![(true, 0x48), (true, 0x69)]);
    }

    #[test]
    fn test_character_display_impl() {
        async fn draw<L: CharacterDisplay>(lcd: &mut L) {
            lcd.clear().await;
            lcd.set_cursor(Row::Bottom, 3).await;
            lcd.print("A").await;
        }

        let (mut lcd, rec) = setup();
        block_on(draw(&mut lcd));
        assert_eq!(
            bytes(&strobes(&rec)),
            vec![(false, 0x01), (false, 0xC3), (true, 0x41)]
        );
    }
}
