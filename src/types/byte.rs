use crate::midi::error::{Error, Result};

/// A 7-bit MIDI data byte (0-127)
/// The high bit is guaranteed clear by construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct U7(u8);

impl U7 {
    pub const MIN: U7 = U7(0);
    pub const MAX: U7 = U7(0x7F);

    /// Checked construction, rejects anything above 127
    pub const fn new(value: u8) -> Result<Self> {
        if value > 0x7F {
            Err(Error::ByteOutOfRange(value))
        } else {
            Ok(U7(value))
        }
    }

    /// Construction that clears the high bit
    pub const fn from_masked(value: u8) -> Self {
        U7(value & 0x7F)
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for U7 {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        U7::new(value)
    }
}

impl From<U7> for u8 {
    fn from(value: U7) -> Self {
        value.0
    }
}

/// The two data bytes of a message, in transmission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DataBytes {
    pub first: U7,
    pub second: U7,
}

impl DataBytes {
    pub const fn new(first: U7, second: U7) -> Self {
        Self { first, second }
    }

    /// Validate a raw pair, e.g. from a config file
    pub fn from_raw(first: u8, second: u8) -> Result<Self> {
        Ok(Self {
            first: U7::new(first)?,
            second: U7::new(second)?,
        })
    }

    /// Split the low 14 bits of `value` into (bits 13-7, bits 6-0)
    pub const fn split_14bit(value: u16) -> (U7, U7) {
        let high = U7::from_masked((value >> 7) as u8);
        let low = U7::from_masked(value as u8);
        (high, low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u7_bounds() {
        assert_eq!(U7::new(0).unwrap(), U7::MIN);
        assert_eq!(U7::new(127).unwrap(), U7::MAX);
        assert_eq!(U7::new(128), Err(Error::ByteOutOfRange(128)));
        assert_eq!(U7::try_from(255u8), Err(Error::ByteOutOfRange(255)));
    }

    #[test]
    fn test_u7_masking() {
        assert_eq!(U7::from_masked(0x80).get(), 0);
        assert_eq!(U7::from_masked(0xFF).get(), 0x7F);
        assert_eq!(U7::from_masked(0x45).get(), 0x45);
    }

    #[test]
    fn test_data_bytes_from_raw() {
        let pair = DataBytes::from_raw(0x10, 0x20).unwrap();
        assert_eq!(pair.first.get(), 0x10);
        assert_eq!(pair.second.get(), 0x20);
        assert!(DataBytes::from_raw(0x10, 0x80).is_err());
    }

    #[test]
    fn test_split_14bit() {
        assert_eq!(DataBytes::split_14bit(0x000C), (U7::MIN, U7::from_masked(12)));
        assert_eq!(DataBytes::split_14bit(0x3FFF), (U7::MAX, U7::MAX));
        // bits above 13 are discarded
        assert_eq!(DataBytes::split_14bit(0xC080), (U7::from_masked(1), U7::MIN));
    }
}
