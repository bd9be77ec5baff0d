//! Blocking driver for AS5600 magnetic position sensor

use embedded_hal::i2c::I2c;

use crate::{
    error::Error,
    register::{PositionHighRegister, Register},
    utils,
};

/// Fixed 7-bit I2C address of the AS5600
pub const DEVICE_ADDRESS: u8 = 0x36;

/// Mask for the 12 meaningful bits of angle, position and magnitude values
pub const RESOLUTION_MASK: u16 = 0x0FFF;

/// Maximum angle value (12-bit: 0-4095, representing 0-360°)
pub const ANGLE_MAX: u16 = RESOLUTION_MASK + 1;

/// Highest valid ZMCO value; the device accepts at most three angle burns
pub const MAX_BURN_COUNT: u8 = 3;

/// AS5600 driver instance (blocking)
///
/// Every call reads the device afresh; no register value is cached.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct As5600<I2C> {
    i2c: I2C,
}

impl<I2C, E> As5600<I2C>
where
    I2C: I2c<Error = E>,
{
    /// Create a new AS5600 driver instance
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Release the I2C bus, consuming the driver
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Read a single register byte
    pub(crate) fn read_register(&mut self, register: Register) -> Result<u8, Error<E>> {
        let address = u8::from(register);
        let mut buf = [0u8; 1];

        self.i2c
            .write_read(DEVICE_ADDRESS, &[address], &mut buf)
            .map_err(Error::Transport)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("Register 0x{:02X} value: 0x{:02X}", address, buf[0]);

        Ok(buf[0])
    }

    /// Write a single register byte
    pub(crate) fn write_register(&mut self, register: Register, data: u8) -> Result<(), Error<E>> {
        let address = u8::from(register);

        #[cfg(feature = "defmt")]
        defmt::debug!("Writing 0x{:02X} to register 0x{:02X}", data, address);

        self.i2c
            .write(DEVICE_ADDRESS, &[address, data])
            .map_err(Error::Transport)
    }

    pub(crate) fn modify_register<R>(
        &mut self,
        register: Register,
        f: impl FnOnce(&mut u8) -> R,
    ) -> Result<R, Error<E>> {
        let mut data = self.read_register(register)?;

        let result = f(&mut data);

        self.write_register(register, data)?;

        Ok(result)
    }

    /// Read a high/low register pair and combine it as `(high << 8) | low`
    ///
    /// The high register is read first. The result is not masked; apply
    /// [`RESOLUTION_MASK`] when the 12-bit device range is needed.
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub fn read_pair(&mut self, high: Register, low: Register) -> Result<u16, Error<E>> {
        let msb = self.read_register(high)?;
        let lsb = self.read_register(low)?;

        Ok(utils::combine_pair(msb, lsb))
    }

    /// Get the unscaled, unmodified angle (RAW ANGLE)
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub fn raw_angle(&mut self) -> Result<u16, Error<E>> {
        self.read_pair(Register::RawAngleH, Register::RawAngleL)
    }

    /// Get the scaled output angle (ANGLE)
    ///
    /// The value is scaled by ZPOS/MPOS/MANG and filtered by hysteresis
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub fn angle(&mut self) -> Result<u16, Error<E>> {
        self.read_pair(Register::AngleH, Register::AngleL)
    }

    /// Get the output angle in degrees (0-359)
    ///
    /// The 12-bit angle is converted with integer arithmetic and rounded down
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub fn angle_degrees(&mut self) -> Result<u16, Error<E>> {
        let angle = self.angle()? & RESOLUTION_MASK;
        let degrees = (u32::from(angle) * 360) / u32::from(ANGLE_MAX);
        #[allow(clippy::cast_possible_truncation)]
        Ok(degrees as u16)
    }

    /// Get the magnitude of the magnetic field vector from CORDIC
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub fn magnitude(&mut self) -> Result<u16, Error<E>> {
        self.read_pair(Register::MagnitudeH, Register::MagnitudeL)
    }

    /// Get the automatic gain control value
    ///
    /// The range is 0-255 at 5V supply and 0-128 at 3.3V supply. The value
    /// is returned as read; for best performance it should sit mid-range.
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub fn agc(&mut self) -> Result<u8, Error<E>> {
        self.read_register(Register::Agc)
    }

    /// Get the number of angle burns committed so far (ZMCO)
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails, or
    /// [`Error::InvariantViolation`] if the device reports more than
    /// [`MAX_BURN_COUNT`]
    pub fn burn_count(&mut self) -> Result<u8, Error<E>> {
        let zmco = self.read_register(Register::Zmco)?;

        if zmco > MAX_BURN_COUNT {
            #[cfg(feature = "defmt")]
            defmt::warn!("ZMCO out of range: 0x{:02X}", zmco);
            return Err(Error::InvariantViolation {
                register: Register::Zmco,
                value: zmco,
            });
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("Burn commands done: {}", zmco);

        Ok(zmco)
    }

    fn position(&mut self, high: Register, low: Register) -> Result<u16, Error<E>> {
        let msb = PositionHighRegister::from(self.read_register(high)?);
        let lsb = self.read_register(low)?;

        Ok(utils::combine_pair(msb.position(), lsb))
    }

    fn set_position(&mut self, high: Register, low: Register, value: u16) -> Result<(), Error<E>> {
        let (msb, lsb) = utils::split_position(value);

        self.modify_register(high, |v: &mut u8| {
            let mut r = PositionHighRegister::from(*v);
            r.set_position(msb);
            *v = r.into();
        })?;
        self.write_register(low, lsb)?;

        Ok(())
    }

    /// Get the zero position (ZPOS)
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub fn zero_position(&mut self) -> Result<u16, Error<E>> {
        self.position(Register::ZPosH, Register::ZPosL)
    }

    /// Set the zero position (ZPOS), masked to 12 bits
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub fn set_zero_position(&mut self, value: u16) -> Result<(), Error<E>> {
        self.set_position(Register::ZPosH, Register::ZPosL, value)
    }

    /// Get the maximum position (MPOS)
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub fn max_position(&mut self) -> Result<u16, Error<E>> {
        self.position(Register::MPosH, Register::MPosL)
    }

    /// Set the maximum position (MPOS), masked to 12 bits
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub fn set_max_position(&mut self, value: u16) -> Result<(), Error<E>> {
        self.set_position(Register::MPosH, Register::MPosL, value)
    }

    /// Get the maximum angle (MANG)
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub fn max_angle(&mut self) -> Result<u16, Error<E>> {
        self.position(Register::MAngH, Register::MAngL)
    }

    /// Set the maximum angle (MANG), masked to 12 bits
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub fn set_max_angle(&mut self, value: u16) -> Result<(), Error<E>> {
        self.set_position(Register::MAngH, Register::MAngL, value)
    }
}
