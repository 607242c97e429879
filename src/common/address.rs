// src/common/address.rs

use super::error::LidarError;
use core::convert::TryFrom;
use core::fmt;

/// 7-bit bus address of one range finder.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct DeviceAddress(u8);

impl DeviceAddress {
    /// Factory default address of the LIDAR-Lite v2.
    pub const DEFAULT_ADDRESS: DeviceAddress = DeviceAddress(0x62);

    /// Creates a new `DeviceAddress` if the value fits in 7 bits.
    /// Returns `Result<Self, LidarError<()>>` because validation itself
    /// cannot cause a transport error.
    pub fn new(address: u8) -> Result<Self, LidarError<()>> {
        if Self::is_valid(address) {
            Ok(DeviceAddress(address))
        } else {
            Err(LidarError::InvalidAddress(address))
        }
    }

    #[inline]
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_valid(address: u8) -> bool {
        address <= 0x7F
    }
}

impl Default for DeviceAddress {
    fn default() -> Self {
        Self::DEFAULT_ADDRESS
    }
}

impl TryFrom<u8> for DeviceAddress {
    type Error = LidarError<()>;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DeviceAddress> for u8 {
    fn from(value: DeviceAddress) -> Self {
        value.0
    }
}

impl fmt::Display for DeviceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}
