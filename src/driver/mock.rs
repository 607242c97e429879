// src/driver/mock.rs

// Scripted bus and counting timer shared by the driver tests.

use super::LidarLite;
use crate::common::{
    address::DeviceAddress,
    hal_traits::{LidarTimer, RegisterBus},
    register::Register,
};
use heapless::{Deque, Vec};

// --- Status Bytes ---
/// Ready, healthy, limiting engaged.
pub(crate) const NOMINAL: u8 = 0b0010_0100;
pub(crate) const BUSY: u8 = 0b0010_0101;
pub(crate) const ERROR: u8 = 0b0110_0100;
pub(crate) const UNHEALTHY: u8 = 0b0000_0100;
/// Health clear with an error reported.
pub(crate) const UNHEALTHY_ERROR: u8 = 0b0100_0100;
pub(crate) const NO_LIMITING: u8 = 0b0010_0000;

pub(crate) const ADDR: u8 = 0x62;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct MockBusError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum BusOp {
    ReadByte(u8),
    WriteByte(u8, u8),
    ReadWord(u8),
    Close,
}

#[derive(Debug)]
pub(crate) struct MockBus {
    pub registers: [u8; 256],
    pub word: u16,
    /// Status bytes returned in order; `None` is a failed status read.
    status_script: Deque<Option<u8>, 64>,
    /// Returned once the script is exhausted.
    pub default_status: u8,
    pub read_failures: u32,
    pub write_failures: u32,
    pub word_failures: u32,
    pub close_fails: bool,
    pub ops: Vec<BusOp, 512>,
}

impl MockBus {
    pub fn new() -> Self {
        MockBus {
            registers: [0; 256],
            word: 0,
            status_script: Deque::new(),
            default_status: NOMINAL,
            read_failures: 0,
            write_failures: 0,
            word_failures: 0,
            close_fails: false,
            ops: Vec::new(),
        }
    }

    pub fn script_status(&mut self, script: &[Option<u8>]) {
        self.status_script.clear();
        for entry in script {
            self.status_script.push_back(*entry).unwrap();
        }
    }

    fn record(&mut self, op: BusOp) {
        let _ = self.ops.push(op);
    }

    pub fn count(&self, pred: impl Fn(&BusOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(*op)).count()
    }

    pub fn status_reads(&self) -> usize {
        self.count(|op| *op == BusOp::ReadByte(Register::Status.addr()))
    }

    pub fn writes(&self) -> std::vec::Vec<(u8, u8)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                BusOp::WriteByte(reg, value) => Some((*reg, *value)),
                _ => None,
            })
            .collect()
    }
}

impl RegisterBus for MockBus {
    type Error = MockBusError;

    fn read_byte(&mut self, address: u8, register: u8) -> Result<u8, Self::Error> {
        assert_eq!(address, ADDR);
        self.record(BusOp::ReadByte(register));
        if register == Register::Status.addr() {
            return match self.status_script.pop_front() {
                Some(Some(status)) => Ok(status),
                Some(None) => Err(MockBusError),
                None => Ok(self.default_status),
            };
        }
        if self.read_failures > 0 {
            self.read_failures -= 1;
            return Err(MockBusError);
        }
        Ok(self.registers[usize::from(register)])
    }

    fn write_byte(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        assert_eq!(address, ADDR);
        self.record(BusOp::WriteByte(register, value));
        if self.write_failures > 0 {
            self.write_failures -= 1;
            return Err(MockBusError);
        }
        Ok(())
    }

    fn read_word(&mut self, address: u8, register: u8) -> Result<u16, Self::Error> {
        assert_eq!(address, ADDR);
        self.record(BusOp::ReadWord(register));
        if self.word_failures > 0 {
            self.word_failures -= 1;
            return Err(MockBusError);
        }
        Ok(self.word)
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        self.record(BusOp::Close);
        if self.close_fails {
            Err(MockBusError)
        } else {
            Ok(())
        }
    }
}

/// Fake clock: delays only accumulate.
#[derive(Debug, Default)]
pub(crate) struct MockTimer {
    pub elapsed_ms: u64,
    pub delays: u32,
}

impl LidarTimer for MockTimer {
    fn delay_ms(&mut self, ms: u32) {
        self.elapsed_ms += u64::from(ms);
        self.delays += 1;
    }
}

/// Builds an initialized driver and forgets the reset traffic.
pub(crate) fn initialized(bus: MockBus) -> LidarLite<MockBus, MockTimer> {
    let address = DeviceAddress::new(ADDR).unwrap();
    let mut lidar = LidarLite::new(bus, MockTimer::default(), address).unwrap();
    lidar.bus.ops.clear();
    lidar.timer = MockTimer::default();
    lidar
}
