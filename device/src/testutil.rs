//! Bus and delay doubles for exercising the drivers without hardware.

use core::cell::RefCell;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::vec::Vec;

/// Calibration block of the BMP180 datasheet example, as stored at 0xAA..0xBF.
pub const BMP180_CALIBRATION: [u8; 22] = [
    0x01, 0x98, 0xFF, 0xB8, 0xC7, 0xD1, 0x7F, 0xE5, 0x7F, 0xF5, 0x5A, 0x71, 0x18, 0x2E, 0x00,
    0x04, 0x80, 0x00, 0xDD, 0xF9, 0x0B, 0x34,
];

/// Raw temperature 27898 of the datasheet example.
pub const BMP180_RAW_TEMPERATURE: [u8; 2] = [0x6C, 0xFA];

/// Raw pressure 23843 of the datasheet example, oversampling mode 0.
pub const BMP180_RAW_PRESSURE: [u8; 3] = [0x5D, 0x23, 0x00];

/// A bus transaction recorded by [`TestBus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    Write {
        address: u8,
        register: u8,
        bytes: Vec<u8>,
    },
    Read {
        address: u8,
        register: u8,
        len: usize,
    },
}

/// Error returned by [`TestBus`] for registers set up to fail.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TestBusError {
    pub address: u8,
    pub register: u8,
}

impl embedded_hal::i2c::Error for TestBusError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

#[derive(Default)]
struct Inner {
    registers: HashMap<(u8, u8), VecDeque<u8>>,
    failing_reads: HashSet<(u8, u8)>,
    failing_writes: HashSet<(u8, u8)>,
    log: Vec<Transaction>,
}

impl Inner {
    /// Next value of a register. The last scripted value sticks.
    fn next(&mut self, address: u8, register: u8) -> u8 {
        match self.registers.get_mut(&(address, register)) {
            Some(values) if values.len() > 1 => values.pop_front().unwrap_or(0),
            Some(values) => values.front().copied().unwrap_or(0),
            None => 0,
        }
    }

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), TestBusError> {
        let (register, data) = match bytes.split_first() {
            Some((register, data)) => (*register, data),
            None => return Ok(()),
        };
        if self.failing_writes.contains(&(address, register)) {
            return Err(TestBusError { address, register });
        }
        self.log.push(Transaction::Write {
            address,
            register,
            bytes: data.to_vec(),
        });
        for (offset, value) in data.iter().enumerate() {
            let reg = register.wrapping_add(offset as u8);
            self.registers.insert((address, reg), VecDeque::from([*value]));
        }
        Ok(())
    }

    fn read(&mut self, address: u8, register: u8, buf: &mut [u8]) -> Result<(), TestBusError> {
        if self.failing_reads.contains(&(address, register)) {
            return Err(TestBusError { address, register });
        }
        self.log.push(Transaction::Read {
            address,
            register,
            len: buf.len(),
        });
        for (offset, byte) in buf.iter_mut().enumerate() {
            *byte = self.next(address, register.wrapping_add(offset as u8));
        }
        Ok(())
    }
}

/// An in-memory register file standing in for devices on an I2C bus.
///
/// Reads auto-increment the register pointer. Each register holds a queue of
/// values: a read takes the front value, and the last one is returned forever.
/// Clones share the same state, so a test keeps a handle while the driver owns
/// the bus.
#[derive(Clone, Default)]
pub struct TestBus {
    inner: Rc<RefCell<Inner>>,
}

impl TestBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `register` read `value` from now on.
    pub fn set_register(&self, address: u8, register: u8, value: u8) {
        self.script_register(address, register, &[value]);
    }

    /// Stores `values` in consecutive registers starting at `register`.
    pub fn set_registers(&self, address: u8, register: u8, values: &[u8]) {
        for (offset, value) in values.iter().enumerate() {
            self.set_register(address, register.wrapping_add(offset as u8), *value);
        }
    }

    /// Makes successive reads of `register` return `values` in order.
    pub fn script_register(&self, address: u8, register: u8, values: &[u8]) {
        self.inner
            .borrow_mut()
            .registers
            .insert((address, register), values.iter().copied().collect());
    }

    pub fn fail_on_read(&self, address: u8, register: u8) {
        self.inner.borrow_mut().failing_reads.insert((address, register));
    }

    pub fn fail_on_write(&self, address: u8, register: u8) {
        self.inner.borrow_mut().failing_writes.insert((address, register));
    }

    /// Current value of a register, without consuming it.
    pub fn register(&self, address: u8, register: u8) -> u8 {
        self.inner
            .borrow()
            .registers
            .get(&(address, register))
            .and_then(|values| values.front().copied())
            .unwrap_or(0)
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.inner.borrow().log.clone()
    }

    /// Register and payload of every write, in order.
    pub fn writes(&self) -> Vec<(u8, Vec<u8>)> {
        self.inner
            .borrow()
            .log
            .iter()
            .filter_map(|t| match t {
                Transaction::Write {
                    register, bytes, ..
                } => Some((*register, bytes.clone())),
                _ => None,
            })
            .collect()
    }

    /// Number of reads that started at `register`.
    pub fn reads_of(&self, register: u8) -> usize {
        self.inner
            .borrow()
            .log
            .iter()
            .filter(|t| matches!(t, Transaction::Read { register: r, .. } if *r == register))
            .count()
    }

    pub fn clear_transactions(&self) {
        self.inner.borrow_mut().log.clear();
    }
}

impl ErrorType for TestBus {
    type Error = TestBusError;
}

impl I2c for TestBus {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        yield_now().await;
        let mut inner = self.inner.borrow_mut();
        let mut written: Vec<u8> = Vec::new();
        for op in operations.iter_mut() {
            match op {
                Operation::Write(bytes) => written.extend_from_slice(bytes),
                Operation::Read(buf) => {
                    let register = written.first().copied().unwrap_or(0);
                    inner.read(address, register, buf)?;
                    written.clear();
                }
            }
        }
        if !written.is_empty() {
            inner.write(address, &written)?;
        }
        Ok(())
    }
}

/// A delay that completes after one yield and records what was asked of it.
#[derive(Clone, Default)]
pub struct TestDelay {
    delays_ns: Rc<RefCell<Vec<u64>>>,
}

impl TestDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every requested delay, in whole milliseconds.
    pub fn delays_ms(&self) -> Vec<u64> {
        self.delays_ns
            .borrow()
            .iter()
            .map(|ns| ns / 1_000_000)
            .collect()
    }

    async fn record(&mut self, ns: u64) {
        self.delays_ns.borrow_mut().push(ns);
        yield_now().await;
    }
}

impl DelayNs for TestDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.record(ns as u64).await
    }

    async fn delay_us(&mut self, us: u32) {
        self.record(us as u64 * 1_000).await
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.record(ms as u64 * 1_000_000).await
    }
}

/// Returns pending once so that other futures polled alongside get a turn.
pub fn yield_now() -> YieldNow {
    YieldNow { yielded: false }
}

pub struct YieldNow {
    yielded: bool,
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.yielded {
            Poll::Ready(())
        } else {
            self.yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}
