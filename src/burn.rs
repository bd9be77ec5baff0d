//! One-time-programmable memory commands
//!
//! Both burn commands are irreversible and limited by the device: BURN_ANGLE
//! can succeed at most three times (counted by ZMCO), BURN_SETTING once.
//! Preconditions are re-read from the device right before the command is
//! written and nothing is ever retried. Once the command write succeeds the
//! operation returns `Ok`; anything that fails afterwards is reported inside
//! the returned [`AngleBurnReceipt`].

use embedded_hal::{delay::DelayNs, i2c::I2c};

use crate::{
    driver::As5600,
    error::{BurnRefusal, Error},
    register::Register,
    status::MagnetStatus,
};

/// Time to wait after BURN_ANGLE before ZMCO is read back
const BURN_SETTLE_MS: u32 = 1;

/// Sequence written to BURN to reload OTP content into the registers
const LOAD_OTP_SEQUENCE: [u8; 3] = [0x01, 0x11, 0x10];

/// Commands accepted by the BURN register (0xFF)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BurnCommand {
    /// BURN_ANGLE: commit ZPOS and MPOS
    Angle = 0x80,
    /// BURN_SETTING: commit MANG and CONF
    Setting = 0x40,
}

impl From<BurnCommand> for u8 {
    fn from(cmd: BurnCommand) -> u8 {
        cmd as u8
    }
}

/// Outcome of a BURN_ANGLE command that was written to the device
///
/// Holding one of these means a burn was spent, whatever `burn_count` says.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AngleBurnReceipt<E> {
    /// ZMCO read back after the command, or the error from that read
    pub burn_count: Result<u8, Error<E>>,
}

impl<I2C, E> As5600<I2C>
where
    I2C: I2c<Error = E>,
{
    fn issue_burn(&mut self, command: BurnCommand) -> Result<(), Error<E>> {
        #[cfg(feature = "defmt")]
        defmt::info!("Issuing burn command {}", command);

        self.write_register(Register::Burn, command.into())
    }

    /// Permanently program ZPOS and MPOS (BURN_ANGLE)
    ///
    /// The command is only sent when the STATUS register, read immediately
    /// beforehand, reports a detected magnet. The driver does not check the
    /// burn budget itself; the receipt carries ZMCO read back after the
    /// command so callers can track how many burns remain. A failed
    /// read-back does not turn the result into an `Err`.
    ///
    /// # Errors
    ///
    /// Only returned when no burn was confirmed issued:
    ///
    /// - [`Error::PreconditionFailed`] with [`BurnRefusal::MagnetNotDetected`]
    ///   if no magnet is detected; no write is issued
    /// - [`Error::Transport`] if the STATUS read fails (nothing written) or
    ///   the BURN write itself fails (the device may or may not have
    ///   received it)
    pub fn burn_angle(
        &mut self,
        delay: &mut impl DelayNs,
    ) -> Result<AngleBurnReceipt<E>, Error<E>> {
        let status = self.magnet_status()?;

        if status != MagnetStatus::Detected {
            #[cfg(feature = "defmt")]
            defmt::warn!("BURN_ANGLE refused, magnet status {}", status);
            return Err(Error::PreconditionFailed(BurnRefusal::MagnetNotDetected(
                status,
            )));
        }

        self.issue_burn(BurnCommand::Angle)?;

        delay.delay_ms(BURN_SETTLE_MS);

        let burn_count = self.burn_count();

        #[cfg(feature = "defmt")]
        if burn_count.is_err() {
            defmt::warn!("BURN_ANGLE issued but ZMCO read-back failed");
        }

        Ok(AngleBurnReceipt { burn_count })
    }

    /// Permanently program MANG and CONF (BURN_SETTING)
    ///
    /// The command is only sent when ZMCO, read immediately beforehand, is
    /// zero. This is the only gate: a setting burn that already happened is
    /// not tracked separately from ZMCO.
    ///
    /// # Errors
    ///
    /// - [`Error::PreconditionFailed`] with [`BurnRefusal::PriorBurnExists`]
    ///   if an angle burn was ever committed; no write is issued
    /// - [`Error::Transport`] if I2C communication fails
    /// - [`Error::InvariantViolation`] if ZMCO is out of range
    pub fn burn_setting(&mut self) -> Result<(), Error<E>> {
        let burn_count = self.burn_count()?;

        if burn_count != 0 {
            #[cfg(feature = "defmt")]
            defmt::warn!("BURN_SETTING refused, ZMCO = {}", burn_count);
            return Err(Error::PreconditionFailed(BurnRefusal::PriorBurnExists {
                burn_count,
            }));
        }

        self.issue_burn(BurnCommand::Setting)
    }

    /// Reload the OTP content into the volatile registers
    ///
    /// Used after a burn to verify it: read ZPOS and MPOS back once this
    /// returns.
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub fn load_otp(&mut self) -> Result<(), Error<E>> {
        for byte in LOAD_OTP_SEQUENCE {
            self.write_register(Register::Burn, byte)?;
        }

        Ok(())
    }
}
