//! Typed configuration for the CONF0 and CONF1 registers

use embedded_hal::i2c::I2c;

use crate::{
    driver::As5600,
    error::Error,
    register::{Conf0Register, Conf1Register, Register},
};

/// Slow filter step response (SF)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SlowFilter {
    /// 16x, 2.2 ms settling time (reset value)
    #[default]
    X16 = 0b00,
    /// 8x, 1.1 ms settling time
    X8 = 0b01,
    /// 4x, 0.55 ms settling time
    X4 = 0b10,
    /// 2x, 0.286 ms settling time
    X2 = 0b11,
}

/// Fast filter threshold (FTH)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum FastFilterThreshold {
    /// Slow filter only (reset value)
    #[default]
    SlowFilterOnly = 0b000,
    /// Fast filter above 6 LSBs
    Lsb6 = 0b001,
    /// Fast filter above 7 LSBs
    Lsb7 = 0b010,
    /// Fast filter above 9 LSBs
    Lsb9 = 0b011,
    /// Fast filter above 18 LSBs
    Lsb18 = 0b100,
    /// Fast filter above 21 LSBs
    Lsb21 = 0b101,
    /// Fast filter above 24 LSBs
    Lsb24 = 0b110,
    /// Fast filter above 10 LSBs, encoded out of order as `0b111`
    Lsb10 = 0b111,
}

/// PWM output frequency (PWMF)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PwmFrequency {
    /// 115 Hz (reset value)
    #[default]
    Hz115 = 0b00,
    /// 230 Hz
    Hz230 = 0b01,
    /// 460 Hz
    Hz460 = 0b10,
    /// 920 Hz
    Hz920 = 0b11,
}

/// Output stage (OUTS)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum OutputStage {
    /// Analog, 0% to 100% of VDD (reset value)
    #[default]
    AnalogFullRange = 0b00,
    /// Analog, 10% to 90% of VDD
    AnalogReducedRange = 0b01,
    /// Digital PWM
    DigitalPwm = 0b10,
}

/// Hysteresis (HYST)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Hysteresis {
    /// Off (reset value)
    #[default]
    Off = 0b00,
    /// 1 LSB
    Lsb1 = 0b01,
    /// 2 LSBs
    Lsb2 = 0b10,
    /// 3 LSBs
    Lsb3 = 0b11,
}

/// Power mode (PM)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PowerMode {
    /// Always on, 6.5 mA (reset value)
    #[default]
    Nom = 0b00,
    /// 5 ms polling, 3.4 mA
    Lpm1 = 0b01,
    /// 20 ms polling, 1.8 mA
    Lpm2 = 0b10,
    /// 100 ms polling, 1.5 mA
    Lpm3 = 0b11,
}

impl SlowFilter {
    const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Self::X16,
            0b01 => Self::X8,
            0b10 => Self::X4,
            _ => Self::X2,
        }
    }
}

impl FastFilterThreshold {
    const fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0b000 => Self::SlowFilterOnly,
            0b001 => Self::Lsb6,
            0b010 => Self::Lsb7,
            0b011 => Self::Lsb9,
            0b100 => Self::Lsb18,
            0b101 => Self::Lsb21,
            0b110 => Self::Lsb24,
            _ => Self::Lsb10,
        }
    }
}

impl PwmFrequency {
    const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Self::Hz115,
            0b01 => Self::Hz230,
            0b10 => Self::Hz460,
            _ => Self::Hz920,
        }
    }
}

impl OutputStage {
    /// `0b11` is not a defined output stage
    const fn from_bits(bits: u8) -> Option<Self> {
        match bits & 0b11 {
            0b00 => Some(Self::AnalogFullRange),
            0b01 => Some(Self::AnalogReducedRange),
            0b10 => Some(Self::DigitalPwm),
            _ => None,
        }
    }
}

impl Hysteresis {
    const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Self::Off,
            0b01 => Self::Lsb1,
            0b10 => Self::Lsb2,
            _ => Self::Lsb3,
        }
    }
}

impl PowerMode {
    const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Self::Nom,
            0b01 => Self::Lpm1,
            0b10 => Self::Lpm2,
            _ => Self::Lpm3,
        }
    }
}

/// A configuration register held a bit pattern with no defined meaning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidField {
    /// Register holding the field
    pub register: Register,
    /// Raw register byte
    pub value: u8,
}

/// Non-burned sensor configuration spread over CONF0 and CONF1
///
/// [`Default`] yields the power-on reset value of every field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Configuration {
    /// CONF0 bits 1:0
    pub slow_filter: SlowFilter,
    /// CONF0 bits 4:2
    pub fast_filter_threshold: FastFilterThreshold,
    /// CONF0 bit 5
    pub watchdog: bool,
    /// CONF1 bits 7:6
    pub pwm_frequency: PwmFrequency,
    /// CONF1 bits 5:4
    pub output_stage: OutputStage,
    /// CONF1 bits 3:2
    pub hysteresis: Hysteresis,
    /// CONF1 bits 1:0
    pub power_mode: PowerMode,
}

impl Configuration {
    /// Merge the CONF0 fields into the current register value
    ///
    /// Reserved bits 7:6 of `current` are kept as they are.
    #[must_use]
    pub fn encode_conf0(&self, current: u8) -> u8 {
        let mut reg = Conf0Register::from(current);
        reg.set_sf(self.slow_filter as u8);
        reg.set_fth(self.fast_filter_threshold as u8);
        reg.set_wd(self.watchdog);
        reg.into()
    }

    /// Encode CONF1, every bit of which belongs to this configuration
    #[must_use]
    pub fn encode_conf1(&self) -> u8 {
        let mut reg = Conf1Register::from(0);
        reg.set_pwmf(self.pwm_frequency as u8);
        reg.set_outs(self.output_stage as u8);
        reg.set_hyst(self.hysteresis as u8);
        reg.set_pm(self.power_mode as u8);
        reg.into()
    }

    /// Decode a configuration from raw CONF0 and CONF1 values
    ///
    /// # Errors
    ///
    /// Returns [`InvalidField`] if CONF1 holds the undefined output stage `0b11`
    pub fn decode(conf0: u8, conf1: u8) -> Result<Self, InvalidField> {
        let c0 = Conf0Register::from(conf0);
        let c1 = Conf1Register::from(conf1);

        let output_stage = OutputStage::from_bits(c1.outs()).ok_or(InvalidField {
            register: Register::Conf1,
            value: conf1,
        })?;

        Ok(Self {
            slow_filter: SlowFilter::from_bits(c0.sf()),
            fast_filter_threshold: FastFilterThreshold::from_bits(c0.fth()),
            watchdog: c0.wd(),
            pwm_frequency: PwmFrequency::from_bits(c1.pwmf()),
            output_stage,
            hysteresis: Hysteresis::from_bits(c1.hyst()),
            power_mode: PowerMode::from_bits(c1.pm()),
        })
    }
}

impl<I2C, E> As5600<I2C>
where
    I2C: I2c<Error = E>,
{
    /// Apply a configuration to the volatile CONF registers
    ///
    /// CONF0 is updated with read-modify-write so its reserved bits survive.
    /// CONF1 is overwritten. Nothing is burned: the values are lost on
    /// power cycle unless [`Self::burn_setting`] commits them.
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub fn initialize(&mut self, config: &Configuration) -> Result<(), Error<E>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("Applying configuration {}", config);

        self.modify_register(Register::Conf0, |v: &mut u8| {
            *v = config.encode_conf0(*v);
        })?;
        self.write_register(Register::Conf1, config.encode_conf1())?;

        Ok(())
    }

    /// Read back the configuration currently held in CONF0 and CONF1
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails, or
    /// [`Error::InvariantViolation`] if CONF1 holds an undefined output stage
    pub fn configuration(&mut self) -> Result<Configuration, Error<E>> {
        let conf0 = self.read_register(Register::Conf0)?;
        let conf1 = self.read_register(Register::Conf1)?;

        Configuration::decode(conf0, conf1).map_err(|e| Error::InvariantViolation {
            register: e.register,
            value: e.value,
        })
    }
}
