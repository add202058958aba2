#[cfg(not(feature = "async"))]
use embedded_hal::{delay::DelayNs, i2c::I2c};
#[cfg(feature = "async")]
use embedded_hal_async::{delay::DelayNs, i2c::I2c};

use crate::device::dword_frame;
use crate::{Config, DWordWrite, DeviceHandle, DeviceId, Error, LogLevel};

/// Platform layer between the VL53L1 vendor driver and the HAL.
///
/// Holds at most one [`DeviceHandle`] and the delay used by
/// [`wait_ms`](Self::wait_ms). Register primitives take the vendor's device
/// identifier and refuse to touch the bus unless a handle is configured and
/// the identifier is [`DeviceId::CONFIGURED`].
///
/// # Examples
///
/// ```rust,no_run
/// use vl53l1_platform::{Config, DeviceHandle, DeviceId, Platform, Register, DEFAULT_ADDRESS};
///
/// let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
/// let delay = embedded_hal_mock::eh1::delay::NoopDelay;
///
/// let mut platform = Platform::new(delay, Config::default());
/// platform.configure(DeviceHandle::new(i2c, DEFAULT_ADDRESS));
///
/// let model_id = platform
///     .read_byte(DeviceId::CONFIGURED, Register::IdentificationModelId)
///     .unwrap();
/// println!("Model ID: {:#x}", model_id);
/// ```
pub struct Platform<I2C, D> {
    device: Option<DeviceHandle<I2C>>,
    delay: D,
    config: Config,
}

#[maybe_async_cfg::maybe(
    sync(cfg(not(feature = "async")), keep_self),
    async(feature = "async", keep_self)
)]
impl<I2C, E, D> Platform<I2C, D>
where
    I2C: I2c<Error = E>,
    E: core::fmt::Debug,
    D: DelayNs,
{
    /// Creates an unconfigured platform.
    ///
    /// Every register primitive fails with [`Error::Unconfigured`] until
    /// [`configure`](Self::configure) is called.
    pub fn new(delay: D, config: Config) -> Self {
        Self {
            device: None,
            delay,
            config,
        }
    }

    /// Installs the device handle used by every subsequent operation.
    ///
    /// A handle configured earlier is replaced and handed back.
    pub fn configure(&mut self, device: DeviceHandle<I2C>) -> Option<DeviceHandle<I2C>> {
        debug!(self.config.log_level; "(configure) address={:#x}", device.address());
        self.device.replace(device)
    }

    /// Removes the device handle, returning the platform to the unconfigured
    /// state.
    pub fn release(&mut self) -> Option<DeviceHandle<I2C>> {
        debug!(self.config.log_level; "(release)");
        self.device.take()
    }

    /// Returns `true` once a device handle is configured.
    pub fn is_configured(&self) -> bool {
        self.device.is_some()
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Sets the diagnostic logging level and returns the level now in effect.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use vl53l1_platform::{Config, LogLevel, Platform};
    ///
    /// let delay = embedded_hal_mock::eh1::delay::NoopDelay;
    /// let mut platform: Platform<embedded_hal_mock::eh1::i2c::Mock, _> =
    ///     Platform::new(delay, Config::default());
    ///
    /// assert_eq!(platform.set_logging_level(LogLevel::Debug), LogLevel::Debug);
    /// ```
    pub fn set_logging_level(&mut self, level: LogLevel) -> LogLevel {
        info!(self.config.log_level; "Previous logging level={:?}", self.config.log_level);
        self.config.log_level = level;
        info!(self.config.log_level; "New logging level={:?}", self.config.log_level);
        self.config.log_level
    }

    /// The logging level in effect.
    pub fn logging_level(&self) -> LogLevel {
        self.config.log_level
    }

    /// Writes `data` as a burst starting at `index`.
    ///
    /// # Errors
    ///
    /// * `Err(Error::Unconfigured)` - If no device handle is configured
    /// * `Err(Error::DeviceMismatch(DeviceId))` - If `dev` is not [`DeviceId::CONFIGURED`]
    /// * `Err(Error::Bus(E))` - If there was an I2C communication error
    pub async fn write_multi<R>(
        &mut self,
        dev: DeviceId,
        index: R,
        data: &[u8],
    ) -> Result<(), Error<E>>
    where
        R: Into<u16>,
    {
        let level = self.config.log_level;
        let index: u16 = index.into();
        trace!(level; "(WriteMulti) index={:#x}, count={}", index, data.len());
        self.device(dev)?.write_multi(index, data).await
    }

    /// Reads `buffer.len()` bytes as a burst starting at `index`.
    ///
    /// # Errors
    ///
    /// * `Err(Error::Unconfigured)` - If no device handle is configured
    /// * `Err(Error::DeviceMismatch(DeviceId))` - If `dev` is not [`DeviceId::CONFIGURED`]
    /// * `Err(Error::Bus(E))` - If there was an I2C communication error
    pub async fn read_multi<R>(
        &mut self,
        dev: DeviceId,
        index: R,
        buffer: &mut [u8],
    ) -> Result<(), Error<E>>
    where
        R: Into<u16>,
    {
        let level = self.config.log_level;
        let index: u16 = index.into();
        trace!(level; "(ReadMulti) index={:#x}, count={}", index, buffer.len());
        self.device(dev)?.read_multi(index, buffer).await
    }

    /// Writes a single byte to a register.
    ///
    /// # Errors
    ///
    /// * `Err(Error::Unconfigured)` - If no device handle is configured
    /// * `Err(Error::DeviceMismatch(DeviceId))` - If `dev` is not [`DeviceId::CONFIGURED`]
    /// * `Err(Error::Bus(E))` - If there was an I2C communication error
    pub async fn write_byte<R>(
        &mut self,
        dev: DeviceId,
        index: R,
        value: u8,
    ) -> Result<(), Error<E>>
    where
        R: Into<u16>,
    {
        let level = self.config.log_level;
        let index: u16 = index.into();
        debug!(level; "(WrByte) index={:#x}, data={:#x}", index, value);
        self.device(dev)?.write_byte(index, value).await
    }

    /// Writes a 16-bit word to a register.
    ///
    /// # Errors
    ///
    /// * `Err(Error::Unconfigured)` - If no device handle is configured
    /// * `Err(Error::DeviceMismatch(DeviceId))` - If `dev` is not [`DeviceId::CONFIGURED`]
    /// * `Err(Error::Bus(E))` - If there was an I2C communication error
    pub async fn write_word<R>(
        &mut self,
        dev: DeviceId,
        index: R,
        value: u16,
    ) -> Result<(), Error<E>>
    where
        R: Into<u16>,
    {
        let level = self.config.log_level;
        let index: u16 = index.into();
        debug!(level; "(WrWord) index={:#x}, data={:#x}", index, value);
        self.device(dev)?.write_word(index, value).await
    }

    /// Writes a 32-bit double word to a register.
    ///
    /// With [`DWordWrite::LegacyTruncated`] only the index and the two
    /// high-order data bytes reach the device.
    ///
    /// # Errors
    ///
    /// * `Err(Error::Unconfigured)` - If no device handle is configured
    /// * `Err(Error::DeviceMismatch(DeviceId))` - If `dev` is not [`DeviceId::CONFIGURED`]
    /// * `Err(Error::Bus(E))` - If there was an I2C communication error
    pub async fn write_dword<R>(
        &mut self,
        dev: DeviceId,
        index: R,
        value: u32,
    ) -> Result<(), Error<E>>
    where
        R: Into<u16>,
    {
        let level = self.config.log_level;
        let mode = self.config.dword_write;
        let index: u16 = index.into();
        debug!(level; "(WrDWord) index={:#x}, data={}", index, value);
        let device = self.device(dev)?;
        match mode {
            DWordWrite::Full => device.write_dword(index, value).await,
            DWordWrite::LegacyTruncated => {
                warn!(level; "(WrDWord) legacy mode drops low data bytes of {:#x}", value);
                let frame = dword_frame(index, value);
                device.write_frame(&frame[..4]).await
            }
        }
    }

    /// Reads a single byte from a register.
    ///
    /// # Errors
    ///
    /// * `Err(Error::Unconfigured)` - If no device handle is configured
    /// * `Err(Error::DeviceMismatch(DeviceId))` - If `dev` is not [`DeviceId::CONFIGURED`]
    /// * `Err(Error::Bus(E))` - If there was an I2C communication error
    pub async fn read_byte<R>(&mut self, dev: DeviceId, index: R) -> Result<u8, Error<E>>
    where
        R: Into<u16>,
    {
        let level = self.config.log_level;
        let index: u16 = index.into();
        let value = self.device(dev)?.read_byte(index).await?;
        debug!(level; "(RdByte) index={:#x}, data={:#x}", index, value);
        Ok(value)
    }

    /// Reads a 16-bit word from a register.
    ///
    /// # Errors
    ///
    /// * `Err(Error::Unconfigured)` - If no device handle is configured
    /// * `Err(Error::DeviceMismatch(DeviceId))` - If `dev` is not [`DeviceId::CONFIGURED`]
    /// * `Err(Error::Bus(E))` - If there was an I2C communication error
    pub async fn read_word<R>(&mut self, dev: DeviceId, index: R) -> Result<u16, Error<E>>
    where
        R: Into<u16>,
    {
        let level = self.config.log_level;
        let index: u16 = index.into();
        let value = self.device(dev)?.read_word(index).await?;
        debug!(level; "(RdWord) index={:#x}, data={:#x}", index, value);
        Ok(value)
    }

    /// Reads a 32-bit double word from a register.
    ///
    /// # Errors
    ///
    /// * `Err(Error::Unconfigured)` - If no device handle is configured
    /// * `Err(Error::DeviceMismatch(DeviceId))` - If `dev` is not [`DeviceId::CONFIGURED`]
    /// * `Err(Error::Bus(E))` - If there was an I2C communication error
    pub async fn read_dword<R>(&mut self, dev: DeviceId, index: R) -> Result<u32, Error<E>>
    where
        R: Into<u16>,
    {
        let level = self.config.log_level;
        let index: u16 = index.into();
        let value = self.device(dev)?.read_dword(index).await?;
        debug!(level; "(RdDWord) index={:#x}, data={}", index, value);
        Ok(value)
    }

    /// Suspends the caller for at least `ms` milliseconds, rounded up to the
    /// configured tick period.
    pub async fn wait_ms(&mut self, ms: u32) {
        let ms = self.config.round_to_ticks(ms);
        trace!(self.config.log_level; "(WaitMs) {} ms", ms);
        self.delay.delay_ms(ms).await;
    }

    fn device(&mut self, dev: DeviceId) -> Result<&mut DeviceHandle<I2C>, Error<E>> {
        let level = self.config.log_level;
        let Some(device) = self.device.as_mut() else {
            error!(level; "register access before a device handle was configured");
            return Err(Error::Unconfigured);
        };
        if dev != DeviceId::CONFIGURED {
            error!(level; "register access for unknown device {}", dev.0);
            return Err(Error::DeviceMismatch(dev));
        }
        Ok(device)
    }
}
