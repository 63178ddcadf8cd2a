use crate::constants::{DEFAULT_INTENSITY, MAX_DIGITS, MAX_INTENSITY};
use crate::error::ConfigError;
use crate::position::Orientation;

/// Factory bus address, fixed by the part number ordered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Variant {
    /// MAX6958AAPE
    #[default]
    A = 0x38,
    /// MAX6958BAPE
    B = 0x39,
}

impl Variant {
    pub const fn address(self) -> u8 {
        self as u8
    }
}

/// Display settings programmed into the chip by `init`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    digit_count: u8,
    intensity: u8,
    variant: Variant,
    orientation: Orientation,
}

impl DisplayConfig {
    pub fn new(
        digit_count: u8,
        intensity: u8,
        variant: Variant,
        orientation: Orientation,
    ) -> Result<Self, ConfigError> {
        Self::default()
            .with_digit_count(digit_count)?
            .with_intensity(intensity)
            .map(|config| config.with_variant(variant).with_orientation(orientation))
    }

    pub fn with_digit_count(mut self, digit_count: u8) -> Result<Self, ConfigError> {
        if digit_count == 0 || digit_count > MAX_DIGITS {
            return Err(ConfigError::InvalidDigitCount(digit_count));
        }
        self.digit_count = digit_count;
        Ok(self)
    }

    pub fn with_intensity(mut self, intensity: u8) -> Result<Self, ConfigError> {
        if intensity > MAX_INTENSITY {
            return Err(ConfigError::InvalidIntensity(intensity));
        }
        self.intensity = intensity;
        Ok(self)
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn digit_count(&self) -> u8 {
        self.digit_count
    }

    pub fn intensity(&self) -> u8 {
        self.intensity
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn address(&self) -> u8 {
        self.variant.address()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl Default for DisplayConfig {
    /// Four digits at intensity 5 on address 0x38, Digit0 on the left.
    fn default() -> Self {
        Self {
            digit_count: MAX_DIGITS,
            intensity: DEFAULT_INTENSITY,
            variant: Variant::A,
            orientation: Orientation::LeftmostFirst,
        }
    }
}
