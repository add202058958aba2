/// Well-known register indices of the VL53L1.
///
/// The platform layer accepts any `Into<u16>` index; these are provided for
/// bring-up and diagnostics code that talks to the sensor without the vendor
/// driver. Each variant notes the register's name in ST's register map.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// `SOFT_RESET` (0x0000): write 0 then 1 to reboot the sensor
    SoftReset = 0x0000,
    /// `I2C_SLAVE__DEVICE_ADDRESS` (0x0001): 7-bit bus address, takes effect immediately
    I2cSlaveDeviceAddress = 0x0001,
    /// `VHV_CONFIG__TIMEOUT_MACROP_LOOP_BOUND` (0x0008): VHV calibration loop bound
    VhvConfigTimeoutMacropLoopBound = 0x0008,
    /// `GPIO_HV_MUX__CTRL` (0x0030): bit 4 selects the GPIO1 interrupt polarity
    GpioHvMuxCtrl = 0x0030,
    /// `GPIO__TIO_HV_STATUS` (0x0031): bit 0 is the data-ready level of GPIO1
    GpioTioHvStatus = 0x0031,
    /// `SYSTEM__INTERRUPT_CONFIG_GPIO` (0x0046): interrupt source for GPIO1
    SystemInterruptConfigGpio = 0x0046,
    /// `RANGE_CONFIG__TIMEOUT_MACROP_A_HI` (0x005E): timing budget, period A
    RangeConfigTimeoutMacropAHi = 0x005E,
    /// `SYSTEM__INTERMEASUREMENT_PERIOD` (0x006C): 32-bit inter-measurement period
    SystemIntermeasurementPeriod = 0x006C,
    /// `SYSTEM__INTERRUPT_CLEAR` (0x0086)
    SystemInterruptClear = 0x0086,
    /// `SYSTEM__MODE_START` (0x0087)
    SystemModeStart = 0x0087,
    /// `RESULT__RANGE_STATUS` (0x0089)
    ResultRangeStatus = 0x0089,
    /// `RESULT__FINAL_CROSSTALK_CORRECTED_RANGE_MM_SD0` (0x0096): range in millimeters
    ResultFinalRangeMm = 0x0096,
    /// `RESULT__OSC_CALIBRATE_VAL` (0x00DE)
    ResultOscCalibrateVal = 0x00DE,
    /// `FIRMWARE__SYSTEM_STATUS` (0x00E5): bit 0 set once the firmware has booted
    FirmwareSystemStatus = 0x00E5,
    /// `IDENTIFICATION__MODEL_ID` (0x010F): 16-bit model id, 0xEACC on the VL53L1X
    IdentificationModelId = 0x010F,
}

impl From<Register> for u16 {
    fn from(r: Register) -> Self {
        r as u16
    }
}
