// src/common/error.rs

#[derive(Debug, thiserror::Error)]
pub enum LidarError<E = ()>
where
    E: core::fmt::Debug,
{
    /// Underlying bus transaction failed.
    #[error("bus transport error: {0:?}")]
    Transport(E),

    /// The attempt budget elapsed without a usable status or transaction.
    #[error("retry budget exhausted after {attempts} attempts")]
    RetryExhausted { attempts: u32 },

    /// The status register reports an unusable measurement.
    #[error("device fault: {0}")]
    DeviceFault(DeviceFault),

    /// Value does not fit a 7-bit bus address.
    #[error("invalid device address: {0:#04x}")]
    InvalidAddress(u8),
}

/// Device-reported conditions that make a reading unusable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeviceFault {
    /// Process error detected, measurement invalid.
    #[error("error detected in measurement")]
    ErrorDetected,

    /// Signal overflow flag clear: automatic limiting has not occurred.
    #[error("automatic limiting not engaged")]
    LimitingNotEngaged,
}

impl<E: core::fmt::Debug> LidarError<E> {
    /// True for errors that came from the bus rather than from the device or the retry budget.
    pub fn is_transport(&self) -> bool {
        matches!(self, LidarError::Transport(_))
    }
}

impl<E: core::fmt::Debug> From<DeviceFault> for LidarError<E> {
    fn from(fault: DeviceFault) -> Self {
        LidarError::DeviceFault(fault)
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct MockIoError;

    #[test]
    fn test_display_messages() {
        let e: LidarError<MockIoError> = LidarError::Transport(MockIoError);
        assert_eq!(e.to_string(), "bus transport error: MockIoError");

        let e: LidarError<MockIoError> = LidarError::RetryExhausted { attempts: 50 };
        assert_eq!(e.to_string(), "retry budget exhausted after 50 attempts");

        let e: LidarError<MockIoError> = DeviceFault::LimitingNotEngaged.into();
        assert_eq!(e.to_string(), "device fault: automatic limiting not engaged");
    }

    #[test]
    fn test_is_transport() {
        assert!(LidarError::Transport(MockIoError).is_transport());
        assert!(!LidarError::<MockIoError>::DeviceFault(DeviceFault::ErrorDetected).is_transport());
    }
}
