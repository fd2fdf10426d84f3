//! Character display trait

/// Display row on a two-line character LCD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Row {
    /// First line
    Top,
    /// Second line
    Bottom,
}

impl Row {
    /// Map a row index to a row
    ///
    /// Only two rows exist. Any index other than 0 selects the second
    /// line, so out-of-range rows never address outside the panel.
    pub const fn from_index(index: u8) -> Self {
        if index == 0 {
            Row::Top
        } else {
            Row::Bottom
        }
    }

    /// Zero-based row index
    pub const fn index(self) -> u8 {
        match self {
            Row::Top => 0,
            Row::Bottom => 1,
        }
    }
}

/// Text-mode display
///
/// Operations cannot fail: there is no acknowledgement channel from the
/// panel. Methods are async because the controller needs settle time
/// after every transfer.
#[allow(async_fn_in_trait)]
pub trait CharacterDisplay {
    /// Clear the display and return the cursor home
    async fn clear(&mut self);

    /// Move the cursor to `col` on `row`
    async fn set_cursor(&mut self, row: Row, col: u8);

    /// Write text at the cursor
    ///
    /// The caller must make sure `text` fits the rest of the row.
    async fn print(&mut self, text: &str);
}
