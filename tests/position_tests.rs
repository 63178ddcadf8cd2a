extern crate max6958;

use max6958::{decimal_point_bit, digit_offset, led_bit, DisplayConfig, Orientation, Variant};

#[test]
fn leftmost_first_offset_test() {
    assert_eq!(digit_offset(1, 4, Orientation::LeftmostFirst), 0);
    assert_eq!(digit_offset(4, 4, Orientation::LeftmostFirst), 3);
    assert_eq!(digit_offset(2, 3, Orientation::LeftmostFirst), 1);
}

#[test]
fn rightmost_first_offset_test() {
    assert_eq!(digit_offset(1, 4, Orientation::RightmostFirst), 3);
    assert_eq!(digit_offset(4, 4, Orientation::RightmostFirst), 0);
    assert_eq!(digit_offset(1, 2, Orientation::RightmostFirst), 1);
    assert_eq!(digit_offset(2, 2, Orientation::RightmostFirst), 0);
}

#[test]
fn led_bit_test() {
    for pos in 1..=4 {
        assert_eq!(led_bit(pos), pos - 1);
    }
}

#[test]
fn decimal_point_bit_test() {
    let left: Vec<u8> = (1..=4)
        .map(|pos| decimal_point_bit(pos, 4, Orientation::LeftmostFirst))
        .collect();
    assert_eq!(left, vec![4, 5, 6, 7]);

    let right: Vec<u8> = (1..=4)
        .map(|pos| decimal_point_bit(pos, 4, Orientation::RightmostFirst))
        .collect();
    assert_eq!(right, vec![7, 6, 5, 4]);
}

#[test]
fn decimal_point_follows_digit_test() {
    for orientation in [Orientation::LeftmostFirst, Orientation::RightmostFirst] {
        for digit_count in 1..=4 {
            for pos in 1..=digit_count {
                assert_eq!(
                    decimal_point_bit(pos, digit_count, orientation) - 4,
                    digit_offset(pos, digit_count, orientation)
                );
            }
        }
    }
    assert_eq!(decimal_point_bit(1, 2, Orientation::RightmostFirst), 5);
    assert_eq!(decimal_point_bit(2, 2, Orientation::RightmostFirst), 4);
}

#[test]
fn config_validation_test() {
    assert!(DisplayConfig::new(4, 63, Variant::B, Orientation::RightmostFirst).is_ok());
    assert_eq!(
        DisplayConfig::new(0, 5, Variant::A, Orientation::LeftmostFirst),
        Err(max6958::ConfigError::InvalidDigitCount(0))
    );
    assert_eq!(
        DisplayConfig::new(5, 5, Variant::A, Orientation::LeftmostFirst),
        Err(max6958::ConfigError::InvalidDigitCount(5))
    );
    assert_eq!(
        DisplayConfig::new(4, 64, Variant::A, Orientation::LeftmostFirst),
        Err(max6958::ConfigError::InvalidIntensity(64))
    );
}

#[test]
fn default_config_test() {
    let config = DisplayConfig::default();
    assert_eq!(config.digit_count(), 4);
    assert_eq!(config.intensity(), 5);
    assert_eq!(config.address(), 0x38);
    assert_eq!(config.orientation(), Orientation::LeftmostFirst);
    assert_eq!(Variant::B.address(), 0x39);
}
