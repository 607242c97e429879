// src/common/hal_traits.rs

use core::fmt::Debug;
use core::time::Duration;

/// Abstraction for the delays required by the acquisition protocols.
///
/// Every settle delay and retry wait goes through this trait, so a test
/// clock can count elapsed time instead of sleeping.
pub trait LidarTimer {
    /// Delay for at least the specified number of milliseconds.
    fn delay_ms(&mut self, ms: u32);

    /// Delay for at least `duration`, rounded down to whole milliseconds.
    fn delay(&mut self, duration: Duration) {
        let ms = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        self.delay_ms(ms);
    }
}

/// Abstraction for synchronous register access on a shared bus.
///
/// Every call is addressed by the 7-bit device address and a register number.
pub trait RegisterBus {
    /// Associated error type for transport failures.
    type Error: Debug;

    /// Reads one byte from `register`.
    fn read_byte(&mut self, address: u8, register: u8) -> Result<u8, Self::Error>;

    /// Writes `value` to `register`.
    fn write_byte(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error>;

    /// Reads two consecutive bytes starting at `register`, first byte high.
    fn read_word(&mut self, address: u8, register: u8) -> Result<u16, Self::Error>;

    /// Releases the underlying bus handle.
    fn close(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Timer backed by `std::thread::sleep`.
#[cfg(feature = "std")]
#[derive(Debug, Default, Copy, Clone)]
pub struct StdTimer;

#[cfg(feature = "std")]
impl LidarTimer for StdTimer {
    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}

/// Adapts an `embedded_hal::i2c::I2c` implementation to `RegisterBus`.
///
/// Requires `embedded-hal` v1.0 traits.
#[cfg(feature = "impl-generic-hal")]
#[derive(Debug)]
pub struct HalBus<I2C> {
    i2c: I2C,
}

#[cfg(feature = "impl-generic-hal")]
impl<I2C> HalBus<I2C> {
    pub fn new(i2c: I2C) -> Self {
        HalBus { i2c }
    }

    pub fn into_inner(self) -> I2C {
        self.i2c
    }
}

#[cfg(feature = "impl-generic-hal")]
impl<I2C> RegisterBus for HalBus<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    type Error = I2C::Error;

    fn read_byte(&mut self, address: u8, register: u8) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        self.i2c.write_read(address, &[register], &mut buf)?;
        Ok(buf[0])
    }

    fn write_byte(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(address, &[register, value])
    }

    fn read_word(&mut self, address: u8, register: u8) -> Result<u16, Self::Error> {
        let mut buf = [0u8; 2];
        self.i2c.write_read(address, &[register], &mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }
}

/// Adapts an `embedded_hal::delay::DelayNs` implementation to `LidarTimer`.
#[cfg(feature = "impl-generic-hal")]
#[derive(Debug)]
pub struct HalTimer<D> {
    delay: D,
}

#[cfg(feature = "impl-generic-hal")]
impl<D> HalTimer<D> {
    pub fn new(delay: D) -> Self {
        HalTimer { delay }
    }

    pub fn into_inner(self) -> D {
        self.delay
    }
}

#[cfg(feature = "impl-generic-hal")]
impl<D> LidarTimer for HalTimer<D>
where
    D: embedded_hal::delay::DelayNs,
{
    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
