#![no_std]
#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

mod burn;
mod config;
mod driver;
mod error;
mod register;
mod status;
mod utils;

pub use burn::{AngleBurnReceipt, BurnCommand};
pub use config::{
    Configuration, FastFilterThreshold, Hysteresis, InvalidField, OutputStage, PowerMode,
    PwmFrequency, SlowFilter,
};
pub use driver::{ANGLE_MAX, As5600, DEVICE_ADDRESS, MAX_BURN_COUNT, RESOLUTION_MASK};
pub use error::{BurnRefusal, Error};
pub use register::Register;
pub use status::MagnetStatus;
