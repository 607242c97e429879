// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod address;
pub mod config;
pub mod error;
pub mod hal_traits;
pub mod register;
pub mod status;
pub mod timing;
pub mod types;

// --- Re-export key types/traits/functions for easier access ---

// From address.rs
pub use address::DeviceAddress;

// From config.rs
pub use config::{DriverConfig, RetryPolicy};

// From error.rs
pub use error::{DeviceFault, LidarError};

// From hal_traits.rs
pub use hal_traits::{LidarTimer, RegisterBus}; // Core sync traits

// From register.rs
pub use register::Register;

// From status.rs
pub use status::Status;

// From types.rs
pub use types::{ContinuousConfig, Mode, ReadingCount, Version};

// --- Feature-gated re-exports ---

#[cfg(feature = "std")]
pub use hal_traits::StdTimer;

#[cfg(feature = "impl-generic-hal")]
pub use hal_traits::{HalBus, HalTimer};
