#[cfg(not(feature = "async"))]
use embedded_hal::i2c::I2c;
#[cfg(feature = "async")]
use embedded_hal_async::i2c::I2c;

use crate::Error;

/// Default 7-bit I2C address of the VL53L1.
pub const DEFAULT_ADDRESS: u8 = 0x29;

/// A sensor bound to an I2C bus.
///
/// Holding a `DeviceHandle` proves a device is attached, so its register
/// primitives carry no runtime validation. The bus type may be a `&mut`
/// reference or a shared-bus device, leaving ownership of the bus itself
/// with the caller.
///
/// Every register access starts with the 16-bit index, high byte first.
/// Word and double-word data are big-endian on the wire.
#[derive(Debug)]
pub struct DeviceHandle<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> DeviceHandle<I2C> {
    /// Binds the sensor at `address` on `i2c`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use vl53l1_platform::{DeviceHandle, DEFAULT_ADDRESS};
    ///
    /// let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
    /// let device = DeviceHandle::new(i2c, DEFAULT_ADDRESS);
    /// assert_eq!(device.address(), 0x29);
    /// ```
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// The 7-bit address this handle talks to.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Detaches the handle and gives the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

#[maybe_async_cfg::maybe(
    sync(cfg(not(feature = "async")), keep_self),
    async(feature = "async", keep_self)
)]
impl<I2C, E> DeviceHandle<I2C>
where
    I2C: I2c<Error = E>,
    E: core::fmt::Debug,
{
    /// Writes `data` starting at `index` as a burst.
    ///
    /// The high index byte, the low index byte and the payload go out as
    /// three separate bus writes.
    ///
    /// # Errors
    ///
    /// * `Err(Error::Bus(E))` - If any of the three writes failed
    pub async fn write_multi<R>(&mut self, index: R, data: &[u8]) -> Result<(), Error<E>>
    where
        R: Into<u16>,
    {
        let index: u16 = index.into();
        let [hi, lo] = index.to_be_bytes();
        self.i2c.write(self.address, &[hi]).await?;
        self.i2c.write(self.address, &[lo]).await?;
        self.i2c.write(self.address, data).await?;
        Ok(())
    }

    /// Reads `buffer.len()` bytes starting at `index` as a burst.
    ///
    /// The index bytes go out as two separate writes, followed by one read.
    ///
    /// # Errors
    ///
    /// * `Err(Error::Bus(E))` - If any of the bus operations failed
    pub async fn read_multi<R>(&mut self, index: R, buffer: &mut [u8]) -> Result<(), Error<E>>
    where
        R: Into<u16>,
    {
        let index: u16 = index.into();
        let [hi, lo] = index.to_be_bytes();
        self.i2c.write(self.address, &[hi]).await?;
        self.i2c.write(self.address, &[lo]).await?;
        self.i2c.read(self.address, buffer).await?;
        Ok(())
    }

    /// Writes a single byte to a register.
    ///
    /// # Errors
    ///
    /// * `Err(Error::Bus(E))` - If there was an I2C communication error
    pub async fn write_byte<R>(&mut self, index: R, value: u8) -> Result<(), Error<E>>
    where
        R: Into<u16>,
    {
        let index: u16 = index.into();
        let [hi, lo] = index.to_be_bytes();
        self.i2c.write(self.address, &[hi, lo, value]).await?;
        Ok(())
    }

    /// Writes a 16-bit word to a register.
    ///
    /// # Errors
    ///
    /// * `Err(Error::Bus(E))` - If there was an I2C communication error
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use embedded_hal_mock::eh1::i2c::{Mock, Transaction};
    /// use vl53l1_platform::DeviceHandle;
    ///
    /// let i2c = Mock::new(&[Transaction::write(0x29, vec![0x00, 0x50, 0x12, 0x34])]);
    /// let mut device = DeviceHandle::new(i2c, 0x29);
    /// device.write_word(0x0050u16, 0x1234).unwrap();
    /// device.release().done();
    /// ```
    pub async fn write_word<R>(&mut self, index: R, value: u16) -> Result<(), Error<E>>
    where
        R: Into<u16>,
    {
        let index: u16 = index.into();
        let mut buffer = [0u8; 4];
        buffer[0..2].copy_from_slice(&index.to_be_bytes());
        buffer[2..4].copy_from_slice(&value.to_be_bytes());
        self.i2c.write(self.address, &buffer).await?;
        Ok(())
    }

    /// Writes a 32-bit double word to a register, all six bytes in one write.
    ///
    /// # Errors
    ///
    /// * `Err(Error::Bus(E))` - If there was an I2C communication error
    pub async fn write_dword<R>(&mut self, index: R, value: u32) -> Result<(), Error<E>>
    where
        R: Into<u16>,
    {
        let frame = dword_frame(index.into(), value);
        self.i2c.write(self.address, &frame).await?;
        Ok(())
    }

    /// Reads a single byte from a register.
    ///
    /// # Errors
    ///
    /// * `Err(Error::Bus(E))` - If there was an I2C communication error
    pub async fn read_byte<R>(&mut self, index: R) -> Result<u8, Error<E>>
    where
        R: Into<u16>,
    {
        let mut read_buffer = [0u8; 1];
        self.read_into(index.into(), &mut read_buffer).await?;
        Ok(read_buffer[0])
    }

    /// Reads a 16-bit word from a register.
    ///
    /// # Errors
    ///
    /// * `Err(Error::Bus(E))` - If there was an I2C communication error
    pub async fn read_word<R>(&mut self, index: R) -> Result<u16, Error<E>>
    where
        R: Into<u16>,
    {
        let mut read_buffer = [0u8; 2];
        self.read_into(index.into(), &mut read_buffer).await?;
        Ok(u16::from_be_bytes(read_buffer))
    }

    /// Reads a 32-bit double word from a register.
    ///
    /// # Errors
    ///
    /// * `Err(Error::Bus(E))` - If there was an I2C communication error
    pub async fn read_dword<R>(&mut self, index: R) -> Result<u32, Error<E>>
    where
        R: Into<u16>,
    {
        let mut read_buffer = [0u8; 4];
        self.read_into(index.into(), &mut read_buffer).await?;
        Ok(u32::from_be_bytes(read_buffer))
    }

    /// Sends a prebuilt frame unchanged.
    pub(crate) async fn write_frame(&mut self, frame: &[u8]) -> Result<(), Error<E>> {
        self.i2c.write(self.address, frame).await?;
        Ok(())
    }

    // Index and data in one write-then-read exchange, no stop in between.
    async fn read_into(&mut self, index: u16, buffer: &mut [u8]) -> Result<(), Error<E>> {
        self.i2c
            .write_read(self.address, &index.to_be_bytes(), buffer)
            .await?;
        Ok(())
    }
}

/// `[index_hi, index_lo, b3, b2, b1, b0]`
pub(crate) fn dword_frame(index: u16, value: u32) -> [u8; 6] {
    let mut frame = [0u8; 6];
    frame[0..2].copy_from_slice(&index.to_be_bytes());
    frame[2..6].copy_from_slice(&value.to_be_bytes());
    frame
}
