// src/driver/mod.rs

mod accessor;
mod acquisition;
#[cfg(test)]
mod mock;

use crate::common::{
    address::DeviceAddress,
    config::DriverConfig,
    error::LidarError,
    hal_traits::{LidarTimer, RegisterBus},
    register::{control, Register},
    types::Mode,
};
use log::{info, warn};

/// Handle to one LIDAR-Lite v2 on a register-addressed bus.
///
/// The handle owns the bus and timer. Every protocol takes `&mut self`, so
/// register sequences from two acquisitions can never interleave on one
/// handle; share it across threads behind a mutex if needed.
#[derive(Debug)]
pub struct LidarLite<B, T>
where
    B: RegisterBus,
    T: LidarTimer,
{
    bus: B,
    timer: T,
    address: DeviceAddress,
    config: DriverConfig,
    mode: Mode,
}

impl<B, T> LidarLite<B, T>
where
    B: RegisterBus,
    T: LidarTimer,
{
    /// Resets the device with the default timing and retry parameters.
    pub fn new(bus: B, timer: T, address: DeviceAddress) -> Result<Self, LidarError<B::Error>> {
        Self::with_config(bus, timer, address, DriverConfig::DEFAULT)
    }

    /// Resets the device and waits for it to boot.
    ///
    /// The reset reloads the FPGA from flash, so every register returns to
    /// its default value. A failed reset write is fatal.
    pub fn with_config(
        bus: B,
        timer: T,
        address: DeviceAddress,
        config: DriverConfig,
    ) -> Result<Self, LidarError<B::Error>> {
        let mut lidar = LidarLite {
            bus,
            timer,
            address,
            config,
            mode: Mode::Distance,
        };
        lidar.reset()?;
        info!("LIDAR-Lite at {} initialized", address);
        Ok(lidar)
    }

    /// Writes the reset value to the control register, then waits out the boot delay.
    pub fn reset(&mut self) -> Result<(), LidarError<B::Error>> {
        self.write_raw(Register::Control, control::RESET)?;
        self.mode = Mode::Distance;
        self.timer.delay(self.config.boot_delay);
        Ok(())
    }

    /// Best-effort shutdown: resets the device and closes the bus.
    ///
    /// Failures are logged and skipped. Calling it again repeats both steps.
    pub fn release(&mut self) {
        // write_raw already logs the failure
        let _ = self.write_raw(Register::Control, control::RESET);
        if let Err(e) = self.bus.close() {
            warn!("closing bus for LIDAR-Lite at {} failed: {:?}", self.address, e);
        }
        self.mode = Mode::Released;
        info!("LIDAR-Lite at {} released", self.address);
    }

    /// Gives back the bus and timer.
    pub fn free(self) -> (B, T) {
        (self.bus, self.timer)
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn address(&self) -> DeviceAddress {
        self.address
    }

    #[inline]
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }
}
