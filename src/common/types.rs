// src/common/types.rs

use core::fmt;

// --- Acquisition Mode ---

/// Acquisition mode the device was last switched into by this handle.
///
/// The hardware keeps its mode in the mode control register; this value only
/// changes after a reset or mode-select write succeeds on the bus.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Register defaults after a reset: single-shot distance.
    Distance,
    Velocity,
    Continuous,
    /// The handle has been released; the bus may be closed.
    Released,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Distance => "distance",
            Mode::Velocity => "velocity",
            Mode::Continuous => "continuous",
            Mode::Released => "released",
        };
        f.write_str(name)
    }
}

// --- Continuous Mode Configuration ---

/// Number of readings taken in continuous mode before the device stops.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ReadingCount(u8);

impl ReadingCount {
    pub const INFINITE: ReadingCount = ReadingCount(0xFF);
    pub const SINGLE: ReadingCount = ReadingCount(0x01);

    /// A raw count; `0xFF` means run indefinitely.
    pub const fn new(count: u8) -> Self {
        ReadingCount(count)
    }

    #[inline]
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_infinite(&self) -> bool {
        self.0 == 0xFF
    }
}

impl Default for ReadingCount {
    fn default() -> Self {
        Self::INFINITE
    }
}

/// Parameters written when a continuous-mode session starts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ContinuousConfig {
    /// Time between measurements, device encoding. The hardware needs at
    /// least 0x02 to operate properly; this is not checked here.
    pub interval: u8,
    pub readings: ReadingCount,
    /// Pull the mode pin low on each new reading instead of only setting
    /// an internal flag.
    pub mode_pin_low: bool,
}

impl ContinuousConfig {
    /// Device default interval.
    pub const DEFAULT_INTERVAL: u8 = 0x04;
    /// Interval for roughly 10 Hz.
    pub const INTERVAL_10_HZ: u8 = 0xC8;
    /// Interval for roughly 100 Hz.
    pub const INTERVAL_100_HZ: u8 = 0x13;

    pub const fn new(interval: u8, readings: ReadingCount, mode_pin_low: bool) -> Self {
        ContinuousConfig { interval, readings, mode_pin_low }
    }
}

impl Default for ContinuousConfig {
    fn default() -> Self {
        ContinuousConfig {
            interval: Self::DEFAULT_INTERVAL,
            readings: ReadingCount::INFINITE,
            mode_pin_low: false,
        }
    }
}

// --- Device Identification ---

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    pub hardware: u8,
    pub software: u8,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hw{}sw{}", self.hardware, self.software)
    }
}
