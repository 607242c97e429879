// src/common/status.rs

use bitflags::bitflags;

bitflags! {
    /// Snapshot of the status register (0x01).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        /// Busy with an acquisition; 0 means ready for a new command.
        const NOT_READY = 1 << 0;
        /// Overflow in the reference acquisition correlation.
        const REFERENCE_OVERFLOW = 1 << 1;
        /// Overflow in the signal acquisition correlation. Set together with
        /// the reference flag when automatic limiting occurs.
        const SIGNAL_OVERFLOW = 1 << 2;
        /// Signal correlation peak at or below the record threshold.
        const SIGNAL_NOT_VALID = 1 << 3;
        /// Secondary return above the correlation noise floor.
        const SECONDARY_RETURN = 1 << 4;
        /// 1 if the device is healthy.
        const HEALTH = 1 << 5;
        /// Process error detected, measurement invalid.
        const ERROR_DETECTED = 1 << 6;
        /// Eye-safety protection active.
        const EYE_SAFE_ACTIVE = 1 << 7;
    }
}

impl Status {
    /// Interprets a raw status byte. Every bit maps to exactly one flag.
    #[inline]
    pub const fn decode(byte: u8) -> Self {
        Self::from_bits_retain(byte)
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        !self.contains(Self::NOT_READY)
    }

    #[inline]
    pub fn is_healthy(&self) -> bool {
        self.contains(Self::HEALTH)
    }

    #[inline]
    pub fn error_detected(&self) -> bool {
        self.contains(Self::ERROR_DETECTED)
    }

    /// Automatic limiting has occurred (signal overflow flag set).
    #[inline]
    pub fn limiting_engaged(&self) -> bool {
        self.contains(Self::SIGNAL_OVERFLOW)
    }

    #[inline]
    pub fn eye_safe_active(&self) -> bool {
        self.contains(Self::EYE_SAFE_ACTIVE)
    }
}

impl From<u8> for Status {
    fn from(byte: u8) -> Self {
        Self::decode(byte)
    }
}
