#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    InvalidDigitCount(u8),
    InvalidIntensity(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Max6958Error<E> {
    I2cError(E),
    InvalidLocation(u8),
    Config(ConfigError),
}

impl<E> From<E> for Max6958Error<E> {
    fn from(error: E) -> Self {
        Max6958Error::I2cError(error)
    }
}
