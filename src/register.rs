//! Register addresses for AS5600 sensor.

/// Register addresses for AS5600
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
#[repr(u8)]
pub enum Register {
    /// Number of BURN_ANGLE commands committed so far (read-only)
    Zmco = 0x00,
    /// Zero position, bits 11:8
    ZPosH = 0x01,
    /// Zero position, bits 7:0
    ZPosL = 0x02,
    /// Maximum position, bits 11:8
    MPosH = 0x03,
    /// Maximum position, bits 7:0
    MPosL = 0x04,
    /// Maximum angle, bits 11:8
    MAngH = 0x05,
    /// Maximum angle, bits 7:0
    MAngL = 0x06,
    /// Configuration: watchdog and filters
    Conf0 = 0x07,
    /// Configuration: PWM, output stage, hysteresis and power mode
    Conf1 = 0x08,

    /// Magnet detection flags
    Status = 0x0B,
    /// Unscaled angle, bits 11:8
    RawAngleH = 0x0C,
    /// Unscaled angle, bits 7:0
    RawAngleL = 0x0D,
    /// Scaled output angle, bits 11:8
    AngleH = 0x0E,
    /// Scaled output angle, bits 7:0
    AngleL = 0x0F,
    /// Automatic gain control
    Agc = 0x1A,
    /// CORDIC magnitude, bits 11:8
    MagnitudeH = 0x1B,
    /// CORDIC magnitude, bits 7:0
    MagnitudeL = 0x1C,

    /// Write-only command register for OTP programming
    Burn = 0xFF,
}

impl From<Register> for u8 {
    fn from(reg: Register) -> u8 {
        reg as u8
    }
}

bitfield::bitfield! {
    /// CONF0 (0x07)
    ///
    /// Bits 7:6 are reserved and must be written back unchanged
    #[derive(Clone, Copy, PartialEq, Eq)]
    pub struct Conf0Register(u8);
    impl Debug;
    u8;
    /// Watchdog: enters LPM3 after one minute of less than 4 LSB movement
    pub wd, set_wd: 5;
    /// Fast filter threshold
    pub fth, set_fth: 4, 2;
    /// Slow filter
    pub sf, set_sf: 1, 0;
}

bitfield::bitfield! {
    /// CONF1 (0x08)
    #[derive(Clone, Copy, PartialEq, Eq)]
    pub struct Conf1Register(u8);
    impl Debug;
    u8;
    /// PWM frequency
    pub pwmf, set_pwmf: 7, 6;
    /// Output stage
    ///
    /// - `00` = analog, full range
    /// - `01` = analog, reduced range (10% to 90%)
    /// - `10` = digital PWM
    pub outs, set_outs: 5, 4;
    /// Hysteresis in LSBs
    pub hyst, set_hyst: 3, 2;
    /// Power mode
    pub pm, set_pm: 1, 0;
}

bitfield::bitfield! {
    /// STATUS (0x0B)
    #[derive(Clone, Copy, PartialEq, Eq)]
    pub struct StatusRegister(u8);
    impl Debug;
    u8;
    /// Magnet was detected
    pub md, _: 5;
    /// AGC maximum gain overflow, magnet too weak
    pub ml, _: 4;
    /// AGC minimum gain overflow, magnet too strong
    pub mh, _: 3;
}

bitfield::bitfield! {
    /// High byte of ZPOS, MPOS and MANG
    ///
    /// Only the low nibble carries position data
    #[derive(Clone, Copy, PartialEq, Eq)]
    pub struct PositionHighRegister(u8);
    impl Debug;
    u8;
    /// Bits 11:8 of the 12-bit position
    pub position, set_position: 3, 0;
}

macro_rules! impl_raw_conversions {
    ($($reg:ident),* $(,)?) => {
        $(
            impl From<u8> for $reg {
                fn from(raw: u8) -> Self {
                    Self(raw)
                }
            }

            impl From<$reg> for u8 {
                fn from(reg: $reg) -> u8 {
                    reg.0
                }
            }
        )*
    };
}

impl_raw_conversions!(
    Conf0Register,
    Conf1Register,
    StatusRegister,
    PositionHighRegister,
);
