pub const MAX_DIGITS: u8 = 4;
pub const MAX_INTENSITY: u8 = 63; // 6 bits
pub const DEFAULT_INTENSITY: u8 = 5;

pub const NUMBERS: [u8; 16] = [
    0x7E, 0x30, 0x6D, 0x79, 0x33, 0x5B, 0x5F, 0x70, 0x7F, 0x7B, 0x77, 0x1F, 0x4E, 0x3D, 0x4F, 0x47,
];
pub const BLANK: u8 = 0x00;
pub const MINUS: u8 = 0x01; // segment g only, also used for overflow
pub const SEGMENT_MASK: u8 = 0x7F;

pub mod register {
    pub const DECODE_MODE: u8 = 0x01;
    pub const INTENSITY: u8 = 0x02;
    pub const SCAN_LIMIT: u8 = 0x03;
    pub const CONFIG: u8 = 0x04;
    pub const DISPLAY_TEST: u8 = 0x07;
    pub const DIGIT_OFFSET: u8 = 0x20; // Digit0 - Digit3
    pub const SEGMENTS: u8 = 0x24; // discrete LEDs (bits 0-3) and decimal points (bits 4-7)

    pub mod decode_mode {
        pub const NO_DECODE: u8 = 0x00; // no decode for digits 3:0
    }

    pub mod config {
        pub const SHUTDOWN: u8 = 0x00; // bit 0 clear: shutdown mode
        pub const NORMAL_OPERATION: u8 = 0x01; // bit 0 set: normal operation
        pub const CLEAR_DATA: u8 = 0x20; // bit 5 set: clears digit and segment registers
    }

    pub mod display_test {
        pub const NORMAL_OPERATION: u8 = 0x00;
        pub const DISPLAY_TEST: u8 = 0x01; // bit 0: all segments lit at full intensity
    }
}
