// src/common/register.rs

/// Register map of the LIDAR-Lite v2, as used by this driver.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    /// Control: reset and acquisition trigger (0x00)
    Control = 0x00,
    /// Status flags, read-only (0x01)
    Status = 0x01,
    /// Acquisition mode control (0x04)
    ModeControl = 0x04,
    /// Velocity measurement, signed (0x09)
    Velocity = 0x09,
    /// Distance high byte (0x0F)
    DistanceHigh = 0x0F,
    /// Distance low byte (0x10)
    DistanceLow = 0x10,
    /// Number of continuous readings, 0xFF runs indefinitely (0x11)
    ReadingCount = 0x11,
    /// Hardware version (0x41)
    HardwareVersion = 0x41,
    /// Time between continuous measurements (0x45)
    MeasurementInterval = 0x45,
    /// Software version (0x4F)
    SoftwareVersion = 0x4F,
    /// Power state control (0x65)
    PowerControl = 0x65,
    /// Distance word readable while in continuous mode (0x8F)
    ContinuousDistance = 0x8F,
}

impl Register {
    #[inline]
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

impl From<Register> for u8 {
    fn from(register: Register) -> Self {
        register.addr()
    }
}

/// Values written to [`Register::Control`].
pub mod control {
    /// Reloads the FPGA from flash, all registers return to defaults.
    pub const RESET: u8 = 0x00;
    /// Distance acquisition without DC stabilization.
    pub const ACQUIRE: u8 = 0x03;
    /// Distance acquisition with DC stabilization; also the velocity/continuous trigger.
    pub const ACQUIRE_STABILIZED: u8 = 0x04;
}

/// Values written to [`Register::ModeControl`].
pub mod mode_control {
    pub const VELOCITY: u8 = 0xA0;
    /// Continuous mode, mode pin pulled low when a new reading is available.
    pub const CONTINUOUS_PIN_LOW: u8 = 0x21;
    /// Continuous mode, new readings only flagged internally.
    pub const CONTINUOUS: u8 = 0x20;
}

/// Values written to [`Register::PowerControl`].
pub mod power {
    pub const SLEEP: u8 = 0x84;
}
