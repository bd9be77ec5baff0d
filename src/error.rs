use crate::{register::Register, status::MagnetStatus};

/// Error type for AS5600 operations
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Bus-level failure reported by the I2C transport
    Transport(E),
    /// A burn command was withheld because its precondition does not hold.
    ///
    /// Nothing was written to the device.
    PreconditionFailed(BurnRefusal),
    /// The device returned a value outside its documented range
    InvariantViolation {
        /// Register the value was read from
        register: Register,
        /// Raw byte (or decoded field) that was rejected
        value: u8,
    },
}

/// Reason a burn command was not issued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BurnRefusal {
    /// BURN_ANGLE requires the STATUS register to report a detected magnet
    MagnetNotDetected(MagnetStatus),
    /// BURN_SETTING requires that no angle burn has ever been committed
    PriorBurnExists {
        /// ZMCO value read right before the refusal
        burn_count: u8,
    },
}
