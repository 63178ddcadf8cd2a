use crate::constants::MAX_DIGITS;

/// Which physical digit the chip's Digit0 register is wired to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    /// Digit0 drives the leftmost digit.
    #[default]
    LeftmostFirst,
    /// Digit0 drives the rightmost digit.
    RightmostFirst,
}

/// Maps a 1-based logical position to the 0-based digit register offset.
///
/// Positions outside `1..=digit_count` are not checked and give a meaningless offset.
pub const fn digit_offset(pos: u8, digit_count: u8, orientation: Orientation) -> u8 {
    match orientation {
        Orientation::LeftmostFirst => pos.wrapping_sub(1),
        Orientation::RightmostFirst => digit_count.wrapping_sub(pos),
    }
}

/// Bit in the segments register for the discrete LED at `pos`.
pub const fn led_bit(pos: u8) -> u8 {
    pos.wrapping_sub(1) & 0x07
}

/// Bit in the segments register for the decimal point of digit `pos`.
///
/// Decimal points live in the upper nibble, bit 4 + n belonging to the digit in register n.
pub const fn decimal_point_bit(pos: u8, digit_count: u8, orientation: Orientation) -> u8 {
    (MAX_DIGITS + digit_offset(pos, digit_count, orientation)) & 0x07
}
