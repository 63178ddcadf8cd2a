//! Driver for the Maxim MAX6958 4-digit 7-segment LED display driver.
//!
//! ```ignore
//! let config = DisplayConfig::default().with_orientation(Orientation::RightmostFirst);
//! let mut display = Max6958::new(i2c, config);
//! display.init()?;
//! display.show_integer(-42)?;
//! display.set_decimal_point(2, true)?;
//! ```
#![no_std]

mod config;
mod constants;
mod error;
mod position;
mod render;
mod segment;

pub use config::{DisplayConfig, Variant};
pub use constants::*;
pub use error::{ConfigError, Max6958Error};
pub use position::{decimal_point_bit, digit_offset, led_bit, Orientation};
pub use render::{render, Cell, Radix, RenderedFrame};
pub use segment::encode;

use embedded_hal::i2c::I2c;
use num_traits::ToPrimitive;

pub struct Max6958<I2C> {
    pub i2c: I2C,
    config: DisplayConfig,
    led_mask: u8, // mirror of the write-only segments register
}

impl<I2C, E> Max6958<I2C>
where
    I2C: I2c<Error = E>,
{
    pub fn new(i2c: I2C, config: DisplayConfig) -> Self {
        Self {
            i2c,
            config,
            led_mask: 0,
        }
    }

    pub fn destroy(self) -> I2C {
        self.i2c
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Current state of the discrete LED (bits 0-3) and decimal point (bits 4-7) register.
    pub fn led_mask(&self) -> u8 {
        self.led_mask
    }

    /// Programs decode mode, intensity and scan limit, then clears the display and turns it on.
    pub fn init(&mut self) -> Result<(), Max6958Error<E>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("max6958 init: {}", self.config);

        // register address auto-increments after each data byte
        self.i2c.write(
            self.config.address(),
            &[
                register::DECODE_MODE,
                register::decode_mode::NO_DECODE,
                self.config.intensity(),
                self.config.digit_count() - 1,
                register::config::CLEAR_DATA | register::config::NORMAL_OPERATION,
            ],
        )?;
        self.led_mask = 0;
        Ok(())
    }

    pub fn reinit(&mut self, config: DisplayConfig) -> Result<(), Max6958Error<E>> {
        self.config = config;
        self.init()
    }

    pub fn power_on(&mut self) -> Result<(), Max6958Error<E>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("max6958 power on");

        self.write_register(register::CONFIG, register::config::NORMAL_OPERATION)
    }

    pub fn power_off(&mut self) -> Result<(), Max6958Error<E>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("max6958 power off");

        self.write_register(register::CONFIG, register::config::SHUTDOWN)
    }

    /// Blanks all digits, discrete LEDs and decimal points, and turns the display on.
    pub fn clear(&mut self) -> Result<(), Max6958Error<E>> {
        self.write_register(
            register::CONFIG,
            register::config::CLEAR_DATA | register::config::NORMAL_OPERATION,
        )?;
        self.led_mask = 0;
        Ok(())
    }

    pub fn set_intensity(&mut self, intensity: u8) -> Result<(), Max6958Error<E>> {
        let config = self
            .config
            .with_intensity(intensity)
            .map_err(Max6958Error::Config)?;
        self.write_register(register::INTENSITY, intensity)?;
        self.config = config;
        Ok(())
    }

    pub fn display_test(&mut self, on: bool) -> Result<(), Max6958Error<E>> {
        let value = if on {
            register::display_test::DISPLAY_TEST
        } else {
            register::display_test::NORMAL_OPERATION
        };
        self.write_register(register::DISPLAY_TEST, value)
    }

    pub fn set_led(&mut self, pos: u8, on: bool) -> Result<(), Max6958Error<E>> {
        Self::check_location(pos, MAX_DIGITS)?;
        self.update_led_mask(led_bit(pos), on)
    }

    pub fn set_decimal_point(&mut self, pos: u8, on: bool) -> Result<(), Max6958Error<E>> {
        let digit_count = self.config.digit_count();
        Self::check_location(pos, digit_count)?;
        self.update_led_mask(
            decimal_point_bit(pos, digit_count, self.config.orientation()),
            on,
        )
    }

    pub fn clear_leds(&mut self) -> Result<(), Max6958Error<E>> {
        self.led_mask = 0;
        self.write_register(register::SEGMENTS, self.led_mask)
    }

    /// Writes raw segment data (bit 6 = a ... bit 0 = g) to the digit at `pos`.
    pub fn light_segments(&mut self, segments: u8, pos: u8) -> Result<(), Max6958Error<E>> {
        Self::check_location(pos, self.config.digit_count())?;
        let offset = digit_offset(pos, self.config.digit_count(), self.config.orientation());
        self.write_register(register::DIGIT_OFFSET + offset, segments & SEGMENT_MASK)
    }

    /// Shows a hex digit at `pos`, values above 15 wrap.
    pub fn show_digit(&mut self, value: u8, pos: u8) -> Result<(), Max6958Error<E>> {
        self.light_segments(encode(value), pos)
    }

    pub fn show_integer<T>(&mut self, value: T) -> Result<(), Max6958Error<E>>
    where
        T: ToPrimitive,
    {
        self.show_value(value, Radix::Decimal)
    }

    pub fn show_hex<T>(&mut self, value: T) -> Result<(), Max6958Error<E>>
    where
        T: ToPrimitive,
    {
        self.show_value(value, Radix::Hexadecimal)
    }

    /// Renders `value` across all configured digits, or the overflow bars if it does not fit.
    pub fn show_value<T>(&mut self, value: T, radix: Radix) -> Result<(), Max6958Error<E>>
    where
        T: ToPrimitive,
    {
        let digit_count = self.config.digit_count();
        let orientation = self.config.orientation();
        let frame = match value.to_i32() {
            Some(value) => render(value, radix, digit_count, orientation),
            None => RenderedFrame::overflow(digit_count, orientation),
        };
        self.show_frame(&frame)
    }

    /// Writes every cell of `frame` in logical order.
    pub fn show_frame(&mut self, frame: &RenderedFrame) -> Result<(), Max6958Error<E>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("max6958 frame: {}", frame);

        for cell in frame.cells() {
            self.write_register(register::DIGIT_OFFSET + cell.offset, cell.segments & SEGMENT_MASK)?;
        }
        Ok(())
    }

    fn update_led_mask(&mut self, bit: u8, on: bool) -> Result<(), Max6958Error<E>> {
        if on {
            self.led_mask |= 1 << bit;
        } else {
            self.led_mask &= !(1 << bit);
        }
        self.write_register(register::SEGMENTS, self.led_mask)
    }

    fn check_location(pos: u8, limit: u8) -> Result<(), Max6958Error<E>> {
        if pos == 0 || pos > limit {
            return Err(Max6958Error::InvalidLocation(pos));
        }
        Ok(())
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Max6958Error<E>> {
        self.i2c.write(self.config.address(), &[register, value])?;
        Ok(())
    }
}
