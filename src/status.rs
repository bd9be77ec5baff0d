//! Magnet detection status for AS5600

use embedded_hal::i2c::I2c;

use crate::{
    driver::As5600,
    error::Error,
    register::{Register, StatusRegister},
};

const DETECTED: u8 = 0b0010_0000;
const TOO_WEAK: u8 = 0b0001_0000;
const TOO_STRONG: u8 = 0b0000_1000;

/// Classification of the STATUS register (0x0B)
///
/// Only a byte with exactly one of the MD, ML or MH flags set is
/// considered known. Any other pattern is surfaced as [`MagnetStatus::Unknown`]
/// with the raw byte, it is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MagnetStatus {
    /// MD set alone: magnet detected with a usable field strength
    Detected,
    /// ML set alone: AGC at maximum gain, magnet too weak
    TooWeak,
    /// MH set alone: AGC at minimum gain, magnet too strong
    TooStrong,
    /// Any other bit pattern
    Unknown(u8),
}

impl MagnetStatus {
    /// Classify a raw STATUS byte
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            DETECTED => Self::Detected,
            TOO_WEAK => Self::TooWeak,
            TOO_STRONG => Self::TooStrong,
            other => Self::Unknown(other),
        }
    }

    /// Check if the magnet is detected
    #[must_use]
    pub const fn is_detected(&self) -> bool {
        matches!(self, Self::Detected)
    }
}

impl From<u8> for MagnetStatus {
    fn from(raw: u8) -> Self {
        Self::from_raw(raw)
    }
}

impl From<StatusRegister> for MagnetStatus {
    fn from(reg: StatusRegister) -> Self {
        Self::from_raw(u8::from(reg))
    }
}

impl<I2C, E> As5600<I2C>
where
    I2C: I2c<Error = E>,
{
    /// Read and classify the magnet detection status
    ///
    /// This is a pure read, it never changes device state.
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub fn magnet_status(&mut self) -> Result<MagnetStatus, Error<E>> {
        let reg = StatusRegister::from(self.read_register(Register::Status)?);

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "STATUS md={} ml={} mh={}",
            reg.md(),
            reg.ml(),
            reg.mh()
        );

        let status = MagnetStatus::from(reg);

        #[cfg(feature = "defmt")]
        if let MagnetStatus::Unknown(raw) = status {
            defmt::warn!("Unrecognised STATUS pattern: 0x{:02X}", raw);
        }

        Ok(status)
    }
}
