// src/common/config.rs

use super::timing;
use core::time::Duration;

/// Attempt budget for one retried register access.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of status polls. Zero fails every access immediately.
    pub max_attempts: u32,
    /// Wait between two attempts. Not applied after the last one.
    pub attempt_delay: Duration,
}

impl RetryPolicy {
    pub const DEFAULT: RetryPolicy = RetryPolicy {
        max_attempts: timing::MAX_ATTEMPTS,
        attempt_delay: timing::ATTEMPT_DELAY,
    };

    pub const fn new(max_attempts: u32, attempt_delay: Duration) -> Self {
        RetryPolicy { max_attempts, attempt_delay }
    }

    /// Longest time one access can spend waiting between attempts.
    pub fn worst_case_delay(&self) -> Duration {
        self.attempt_delay * self.max_attempts.saturating_sub(1)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Timing and retry parameters injected into the driver at construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    pub retry: RetryPolicy,
    pub boot_delay: Duration,
    pub acquisition_settle: Duration,
    pub continuous_settle: Duration,
}

impl DriverConfig {
    pub const DEFAULT: DriverConfig = DriverConfig {
        retry: RetryPolicy::DEFAULT,
        boot_delay: timing::BOOT_DELAY,
        acquisition_settle: timing::ACQUISITION_SETTLE,
        continuous_settle: timing::CONTINUOUS_SETTLE,
    };

    pub const fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub const fn with_boot_delay(mut self, delay: Duration) -> Self {
        self.boot_delay = delay;
        self
    }

    pub const fn with_acquisition_settle(mut self, delay: Duration) -> Self {
        self.acquisition_settle = delay;
        self
    }

    pub const fn with_continuous_settle(mut self, delay: Duration) -> Self {
        self.continuous_settle = delay;
        self
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
