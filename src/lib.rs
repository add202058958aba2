//! # VL53L1 Platform Layer
//!
//! This crate provides the platform functions the ST VL53L1 time-of-flight driver expects
//! (register byte/word/double-word access, burst transfers and millisecond waits) on top of
//! any `embedded-hal` I2C bus and delay. It is `no_std`, and with the `async` feature every
//! primitive is built on `embedded-hal-async` instead.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use vl53l1_platform::{Config, DeviceHandle, DeviceId, Platform, Register, DEFAULT_ADDRESS};
//!
//! let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
//! let delay = embedded_hal_mock::eh1::delay::NoopDelay;
//!
//! let mut platform = Platform::new(delay, Config::default());
//! platform.configure(DeviceHandle::new(i2c, DEFAULT_ADDRESS));
//!
//! // The vendor driver passes its device id through to every call
//! let dev = DeviceId::CONFIGURED;
//! let model_id = platform.read_byte(dev, Register::IdentificationModelId).unwrap();
//! platform.write_byte(dev, Register::SystemInterruptClear, 0x01).unwrap();
//! platform.wait_ms(10);
//! println!("Model ID: {:#x}", model_id);
//! ```
//!
//! Errors are returned rather than aborting; glue code that must hand an `int8` status back to
//! the vendor driver can use [`status`] or [`Error::status_code`].
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod fmt; // <-- must be first module!

mod config;
mod device;
mod error;
mod platform;
mod register;

pub use config::{Config, DWordWrite, LogLevel};
pub use device::{DeviceHandle, DEFAULT_ADDRESS};
pub use error::{
    status, Error, STATUS_CONTROL_INTERFACE, STATUS_INVALID_PARAMS, STATUS_OK, STATUS_UNDEFINED,
};
pub use platform::Platform;
pub use register::Register;

/// Bus transaction timeout, in milliseconds, to configure on the HAL's I2C driver.
///
/// `embedded-hal` transactions carry no timeout of their own, so the bound on
/// a stuck transfer is whatever the bus driver enforces.
pub const DEFAULT_TIMEOUT_MS: u32 = 50;

/// Device identifier passed by the vendor driver with every platform call.
///
/// Only [`DeviceId::CONFIGURED`] is accepted. It confirms the caller means the
/// one configured device and never selects between devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceId(pub u16);

impl DeviceId {
    /// The identifier standing for the configured device (127).
    pub const CONFIGURED: DeviceId = DeviceId(127);
}

impl From<u16> for DeviceId {
    fn from(raw: u16) -> Self {
        DeviceId(raw)
    }
}

impl From<DeviceId> for u16 {
    fn from(dev: DeviceId) -> Self {
        dev.0
    }
}
