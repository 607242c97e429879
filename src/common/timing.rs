// src/common/timing.rs

use core::time::Duration;

// A full acquisition (reference plus signal) takes 5 to 20 ms depending on the
// number of integrated pulses and the correlation record length, plus about
// 1 ms to download measurement parameters. The delays below are the nominal
// values the driver waits; they bound throughput more than the hardware does.

// === Lifecycle ===

/// Wait after an FPGA reset before the device accepts commands.
pub const BOOT_DELAY: Duration = Duration::from_secs(1);

// === Acquisition ===

/// Settle time between a single-shot trigger and reading the distance registers.
pub const ACQUISITION_SETTLE: Duration = Duration::from_millis(250);
/// Settle time after starting continuous mode, so the first cycle completes.
pub const CONTINUOUS_SETTLE: Duration = Duration::from_secs(1);

// === Retry ===

/// Maximum number of status polls for one register access.
pub const MAX_ATTEMPTS: u32 = 50;
/// Wait between two status polls. Polling faster degrades the health flag.
pub const ATTEMPT_DELAY: Duration = Duration::from_secs(1);
