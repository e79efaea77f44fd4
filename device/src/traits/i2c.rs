use embedded_hal_async::i2c::{I2c, Operation};

/// 7-bit slave address of a device on the bus.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct I2cAddress(u8);

impl I2cAddress {
    pub const fn new(val: u8) -> Self {
        Self(val)
    }
}

impl From<u8> for I2cAddress {
    fn from(val: u8) -> Self {
        Self(val)
    }
}

impl From<I2cAddress> for u8 {
    fn from(address: I2cAddress) -> Self {
        address.0
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for I2cAddress {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "{:#x}", self.0);
    }
}

/// Register addressed access to a slave device.
///
/// Each call is one complete bus transaction. Implementations shared between
/// several devices must serialize calls, a write/read pair is never interleaved
/// with another transaction by the drivers themselves.
pub trait RegisterBus {
    type Error;

    /// Writes `bytes` starting at `register`.
    async fn write_register(
        &mut self,
        address: I2cAddress,
        register: u8,
        bytes: &[u8],
    ) -> Result<(), Self::Error>;

    /// Fills `buf` with consecutive bytes starting at `register`.
    async fn read_register(
        &mut self,
        address: I2cAddress,
        register: u8,
        buf: &mut [u8],
    ) -> Result<(), Self::Error>;
}

impl<I: I2c> RegisterBus for I {
    type Error = I::Error;

    async fn write_register(
        &mut self,
        address: I2cAddress,
        register: u8,
        bytes: &[u8],
    ) -> Result<(), Self::Error> {
        let register = [register];
        // Adjacent writes go out as one frame without a repeated start.
        let mut operations = [Operation::Write(&register), Operation::Write(bytes)];
        self.transaction(address.into(), &mut operations).await
    }

    async fn read_register(
        &mut self,
        address: I2cAddress,
        register: u8,
        buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.write_read(address.into(), &[register], buf).await
    }
}
