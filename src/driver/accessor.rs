// src/driver/accessor.rs

use super::LidarLite;
use crate::common::{
    error::LidarError,
    hal_traits::{LidarTimer, RegisterBus},
    register::Register,
    status::Status,
};
use log::{debug, error, trace, warn};

impl<B, T> LidarLite<B, T>
where
    B: RegisterBus,
    T: LidarTimer,
{
    /// Reads and decodes the status register once, without retrying.
    pub fn status(&mut self) -> Result<Status, LidarError<B::Error>> {
        self.fetch_status().map_err(LidarError::Transport)
    }

    /// Reads `register` once the status allows it.
    ///
    /// Each attempt polls the status first. An unhealthy device is still
    /// read; a detected error or missing automatic limiting skips the read
    /// for that attempt. Failed transactions consume an attempt.
    pub fn read_register(&mut self, register: Register) -> Result<u8, LidarError<B::Error>> {
        let policy = self.config.retry;

        for attempt in 0..policy.max_attempts {
            match self.fetch_status() {
                Err(_) => {} // logged in fetch_status
                Ok(status) if !status.is_healthy() => {
                    warn!("bad health reported, reading {:?} anyway", register);
                    if let Ok(value) = self.read_raw(register) {
                        return Ok(value);
                    }
                }
                Ok(status) if status.error_detected() => {
                    warn!("error detected, skipping read of {:?}", register);
                }
                Ok(status) if !status.limiting_engaged() => {
                    debug!("automatic limiting not engaged, skipping read of {:?}", register);
                }
                Ok(_) => {
                    if let Ok(value) = self.read_raw(register) {
                        return Ok(value);
                    }
                }
            }

            if attempt + 1 < policy.max_attempts {
                self.timer.delay(policy.attempt_delay);
            }
        }

        error!("read of {:?} gave up after {} attempts", register, policy.max_attempts);
        Err(LidarError::RetryExhausted { attempts: policy.max_attempts })
    }

    /// Writes `value` to `register` once the device is ready for a command.
    ///
    /// Only the status polls are retried; the outcome of the write itself is
    /// returned as is.
    pub fn write_register(&mut self, register: Register, value: u8) -> Result<(), LidarError<B::Error>> {
        let policy = self.config.retry;

        for attempt in 0..policy.max_attempts {
            match self.fetch_status() {
                Err(_) => {} // logged in fetch_status
                Ok(status) if !status.is_ready() => {
                    debug!("busy, deferring write to {:?}", register);
                }
                Ok(_) => return self.write_raw(register, value),
            }

            if attempt + 1 < policy.max_attempts {
                self.timer.delay(policy.attempt_delay);
            }
        }

        error!("write to {:?} gave up after {} attempts", register, policy.max_attempts);
        Err(LidarError::RetryExhausted { attempts: policy.max_attempts })
    }

    // --- Raw Transactions (Private) ---

    pub(super) fn fetch_status(&mut self) -> Result<Status, B::Error> {
        match self.bus.read_byte(self.address.as_u8(), Register::Status.addr()) {
            Ok(byte) => {
                trace!("status: {:08b}", byte);
                Ok(Status::decode(byte))
            }
            Err(e) => {
                warn!("status read failed: {:?}", e);
                Err(e)
            }
        }
    }

    fn read_raw(&mut self, register: Register) -> Result<u8, B::Error> {
        self.bus
            .read_byte(self.address.as_u8(), register.addr())
            .map_err(|e| {
                warn!("read of {:?} failed: {:?}", register, e);
                e
            })
    }

    pub(super) fn read_word_raw(&mut self, register: Register) -> Result<u16, LidarError<B::Error>> {
        self.bus
            .read_word(self.address.as_u8(), register.addr())
            .map_err(|e| {
                warn!("word read of {:?} failed: {:?}", register, e);
                LidarError::Transport(e)
            })
    }

    pub(super) fn write_raw(&mut self, register: Register, value: u8) -> Result<(), LidarError<B::Error>> {
        debug!("write {:?} <- {:#04x}", register, value);
        self.bus
            .write_byte(self.address.as_u8(), register.addr(), value)
            .map_err(|e| {
                warn!("write to {:?} failed: {:?}", register, e);
                LidarError::Transport(e)
            })
    }
}
