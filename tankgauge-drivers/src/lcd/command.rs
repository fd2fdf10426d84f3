//! HD44780 instruction set
//!
//! Only the instructions the gauge uses are covered. Each builder
//! returns the raw instruction byte sent with RS low.

/// Clear display and return the cursor home
pub const CLEAR_DISPLAY: u8 = 0b0000_0001;

/// Return the cursor home without clearing
pub const RETURN_HOME: u8 = 0b0000_0010;

/// Set DDRAM address; the low 7 bits carry the address
pub const SET_DDRAM_ADDR: u8 = 0b1000_0000;

/// Function-set nibble sent while the controller may still be in 8-bit mode
pub const INIT_8BIT_NIBBLE: u8 = 0x3;

/// Function-set nibble that switches the controller to 4-bit mode
pub const INIT_4BIT_NIBBLE: u8 = 0x2;

/// DDRAM address of the first column of each row
pub const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

/// Function set: bus width, line count, font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FunctionSet {
    /// 8-bit bus (false = 4-bit)
    pub eight_bit: bool,
    /// Two display lines (false = one)
    pub two_lines: bool,
    /// 5x10 font (false = 5x8)
    pub large_font: bool,
}

impl FunctionSet {
    /// 4-bit bus, two lines, 5x8 font
    pub const FOUR_BIT_TWO_LINES: Self = Self {
        eight_bit: false,
        two_lines: true,
        large_font: false,
    };

    pub const fn bits(self) -> u8 {
        let mut cmd = 0b0010_0000;
        if self.eight_bit {
            cmd |= 0b0001_0000;
        }
        if self.two_lines {
            cmd |= 0b0000_1000;
        }
        if self.large_font {
            cmd |= 0b0000_0100;
        }
        cmd
    }
}

/// Display on/off control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayControl {
    pub display_on: bool,
    pub cursor_on: bool,
    pub blink_on: bool,
}

impl DisplayControl {
    /// Display on, no cursor, no blink
    pub const TEXT_ONLY: Self = Self {
        display_on: true,
        cursor_on: false,
        blink_on: false,
    };

    pub const fn bits(self) -> u8 {
        let mut cmd = 0b0000_1000;
        if self.display_on {
            cmd |= 0b0000_0100;
        }
        if self.cursor_on {
            cmd |= 0b0000_0010;
        }
        if self.blink_on {
            cmd |= 0b0000_0001;
        }
        cmd
    }
}

/// Cursor movement after each data write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EntryMode {
    /// Move the cursor right (false = left)
    pub increment: bool,
    /// Shift the whole display instead of the cursor
    pub shift: bool,
}

impl EntryMode {
    /// Left to right, no display shift
    pub const LEFT_TO_RIGHT: Self = Self {
        increment: true,
        shift: false,
    };

    pub const fn bits(self) -> u8 {
        let mut cmd = 0b0000_0100;
        if self.increment {
            cmd |= 0b0000_0010;
        }
        if self.shift {
            cmd |= 0b0000_0001;
        }
        cmd
    }
}

/// Set-DDRAM-address instruction for `address`
///
/// Bits above the 7-bit address field are dropped.
pub const fn set_ddram_address(address: u8) -> u8 {
    SET_DDRAM_ADDR | (address & 0x7F)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_bytes() {
        assert_eq!(FunctionSet::FOUR_BIT_TWO_LINES.bits(), 0x28);
        assert_eq!(DisplayControl::TEXT_ONLY.bits(), 0x0C);
        assert_eq!(EntryMode::LEFT_TO_RIGHT.bits(), 0x06);
    }

    #[test]
    fn test_display_control_flags() {
        let all = DisplayControl {
            display_on: true,
            cursor_on: true,
            blink_on: true,
        };
        assert_eq!(all.bits(), 0x0F);

        let off = DisplayControl {
            display_on: false,
            cursor_on: false,
            blink_on: false,
        };
        assert_eq!(off.bits(), 0x08);
    }

    #[test]
    fn test_function_set_eight_bit() {
        let fs = FunctionSet {
            eight_bit: true,
            two_lines: true,
            large_font: false,
        };
        assert_eq!(fs.bits(), 0x38);
        assert_eq!(fs.bits() >> 4, INIT_8BIT_NIBBLE);
    }

    #[test]
    fn test_ddram_address() {
        assert_eq!(set_ddram_address(0x00), 0x80);
        assert_eq!(set_ddram_address(0x45), 0xC5);
        assert_eq!(set_ddram_address(0xFF), 0xFF);
        assert_eq!(set_ddram_address(0x80), 0x80);
    }
}
