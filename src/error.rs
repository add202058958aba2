use crate::DeviceId;

/// Vendor status for a successful call.
pub const STATUS_OK: i8 = 0;
/// Vendor status `VL53L1_ERROR_UNDEFINED`.
pub const STATUS_UNDEFINED: i8 = -3;
/// Vendor status `VL53L1_ERROR_INVALID_PARAMS`.
pub const STATUS_INVALID_PARAMS: i8 = -4;
/// Vendor status `VL53L1_ERROR_CONTROL_INTERFACE`.
pub const STATUS_CONTROL_INTERFACE: i8 = -13;

/// Error type for platform register operations.
///
/// The validation variants are raised before any bus traffic, so a failed
/// call never leaves a partial transfer behind.
///
/// # Examples
///
/// ```rust,no_run
/// use vl53l1_platform::{Config, DeviceId, Error, Platform};
///
/// let delay = embedded_hal_mock::eh1::delay::NoopDelay;
/// let mut platform: Platform<embedded_hal_mock::eh1::i2c::Mock, _> =
///     Platform::new(delay, Config::default());
///
/// match platform.read_byte(DeviceId::CONFIGURED, 0x010Fu16) {
///     Ok(value) => println!("model id: {:#x}", value),
///     Err(Error::Unconfigured) => println!("no device configured yet"),
///     Err(Error::DeviceMismatch(id)) => println!("unexpected device id {:?}", id),
///     Err(Error::Bus(e)) => println!("I2C error: {:?}", e),
/// }
/// ```
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E: core::fmt::Debug> {
    /// No device handle has been configured
    Unconfigured,
    /// The caller named a device other than [`DeviceId::CONFIGURED`]
    DeviceMismatch(DeviceId),
    /// I2C communication error from the underlying hardware
    Bus(E),
}

impl<E: core::fmt::Debug> Error<E> {
    /// Maps the error onto the vendor driver's `int8` status codes.
    #[must_use]
    pub fn status_code(&self) -> i8 {
        match self {
            Error::Unconfigured => STATUS_UNDEFINED,
            Error::DeviceMismatch(_) => STATUS_INVALID_PARAMS,
            Error::Bus(_) => STATUS_CONTROL_INTERFACE,
        }
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl<E: core::fmt::Debug> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Error::Bus(error)
    }
}

/// Collapses a result into the vendor status returned to the ranging driver.
///
/// ```rust
/// use vl53l1_platform::{status, Error, STATUS_OK};
///
/// let ok: Result<u8, Error<()>> = Ok(7);
/// assert_eq!(status(&ok), STATUS_OK);
/// assert_eq!(status(&Err::<u8, _>(Error::<()>::Unconfigured)), -3);
/// ```
pub fn status<T, E: core::fmt::Debug>(result: &Result<T, Error<E>>) -> i8 {
    match result {
        Ok(_) => STATUS_OK,
        Err(e) => e.status_code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_are_distinct() {
        let codes = [
            Error::<()>::Unconfigured.status_code(),
            Error::<()>::DeviceMismatch(DeviceId(1)).status_code(),
            Error::<()>::Bus(()).status_code(),
        ];
        assert_eq!(codes, [-3, -4, -13]);
    }

    #[test]
    fn bus_errors_lift_through_from() {
        let err: Error<u8> = 5u8.into();
        assert!(matches!(err, Error::Bus(5)));
    }
}
