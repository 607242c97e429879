// src/driver/acquisition.rs

use super::LidarLite;
use crate::common::{
    error::{DeviceFault, LidarError},
    hal_traits::{LidarTimer, RegisterBus},
    register::{control, mode_control, power, Register},
    types::{ContinuousConfig, Mode, Version},
};
use log::{debug, info, warn};

impl<B, T> LidarLite<B, T>
where
    B: RegisterBus,
    T: LidarTimer,
{
    /// Takes one distance measurement, in centimeters.
    ///
    /// With `stabilize_preamp` the acquisition includes DC stabilization.
    /// Without it readings come faster, but the preamp should still be
    /// stabilized every now and then (about 1 in 100 readings).
    pub fn distance(&mut self, stabilize_preamp: bool) -> Result<u16, LidarError<B::Error>> {
        if self.mode == Mode::Released {
            self.warn_if_released("single-shot distance");
        } else if self.mode != Mode::Distance {
            warn!("single-shot distance requested in {} mode", self.mode);
        }

        let trigger = if stabilize_preamp {
            control::ACQUIRE_STABILIZED
        } else {
            control::ACQUIRE
        };
        self.write_register(Register::Control, trigger)?;

        self.timer.delay(self.config.acquisition_settle);

        let low = self.read_register(Register::DistanceLow)?;
        let high = self.read_register(Register::DistanceHigh)?;

        Ok((u16::from(high) << 8) | u16::from(low))
    }

    /// Switches to velocity mode and reads one velocity measurement.
    ///
    /// Units are whatever the device reports. The device stays in velocity
    /// mode afterwards; call [`reset`](Self::reset) to get back to distance.
    pub fn velocity(&mut self) -> Result<i8, LidarError<B::Error>> {
        self.warn_if_released("velocity");
        debug!("switching to velocity mode");
        self.write_register(Register::ModeControl, mode_control::VELOCITY)?;
        self.mode = Mode::Velocity;

        self.write_raw(Register::Control, control::ACQUIRE_STABILIZED)?;

        let raw = self.read_register(Register::Velocity)?;
        Ok(raw as i8)
    }

    /// Starts a continuous-mode session and waits for the first cycle.
    ///
    /// Writes go straight to the bus in order: interval, mode, reading
    /// count, trigger. The first failure aborts the sequence.
    pub fn begin_continuous(&mut self, config: ContinuousConfig) -> Result<(), LidarError<B::Error>> {
        self.warn_if_released("continuous");
        self.write_raw(Register::MeasurementInterval, config.interval)?;

        let mode = if config.mode_pin_low {
            mode_control::CONTINUOUS_PIN_LOW
        } else {
            mode_control::CONTINUOUS
        };
        self.write_raw(Register::ModeControl, mode)?;
        self.mode = Mode::Continuous;

        self.write_raw(Register::ReadingCount, config.readings.as_u8())?;
        self.write_raw(Register::Control, control::ACQUIRE_STABILIZED)?;

        self.timer.delay(self.config.continuous_settle);
        info!(
            "continuous mode started: interval {:#04x}, readings {:#04x}",
            config.interval,
            config.readings.as_u8()
        );
        Ok(())
    }

    /// Reads the latest continuous-mode distance after a single status check.
    ///
    /// There is no retry here; poll again at the configured interval. An
    /// unhealthy device still yields its reading.
    pub fn distance_continuous(&mut self) -> Result<u16, LidarError<B::Error>> {
        let status = self.fetch_status().map_err(LidarError::Transport)?;

        if !status.is_healthy() {
            warn!("bad health reported, reading continuous distance anyway");
            return self.read_word_raw(Register::ContinuousDistance);
        }
        if status.error_detected() {
            return Err(DeviceFault::ErrorDetected.into());
        }
        if !status.limiting_engaged() {
            return Err(DeviceFault::LimitingNotEngaged.into());
        }

        self.read_word_raw(Register::ContinuousDistance)
    }

    /// Reads the hardware and software version registers.
    pub fn version(&mut self) -> Result<Version, LidarError<B::Error>> {
        let hardware = self.read_register(Register::HardwareVersion)?;
        let software = self.read_register(Register::SoftwareVersion)?;
        Ok(Version { hardware, software })
    }

    fn warn_if_released(&self, protocol: &str) {
        if self.mode == Mode::Released {
            warn!("{} requested on released LIDAR-Lite at {}, bus may be closed", protocol, self.address);
        }
    }

    /// Puts the device into its low-power state. The next command wakes it.
    pub fn sleep(&mut self) -> Result<(), LidarError<B::Error>> {
        self.write_register(Register::PowerControl, power::SLEEP)?;
        debug!("LIDAR-Lite at {} asleep", self.address);
        Ok(())
    }
}
