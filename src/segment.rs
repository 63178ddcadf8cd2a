use crate::constants::NUMBERS;

/// Returns the segment pattern for a hex digit. Values above 15 wrap.
///
/// Bit 6 is segment a, bit 0 is segment g:
///
/// ```text
///   +- a -+
///   f     b
///   |- g -|
///   e     c
///   +- d -+
/// ```
pub const fn encode(digit: u8) -> u8 {
    NUMBERS[(digit % 16) as usize]
}
