use crate::traits::i2c::{I2cAddress, RegisterBus};

/// The five control registers.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Ctrl {
    /// Data rate, bandwidth, power, axis enable.
    Reg1,
    /// High pass filter.
    Reg2,
    /// Interrupt and data-ready signaling.
    Reg3,
    /// Full scale, block data update, self test.
    Reg4,
    /// High pass filter enable, FIFO.
    Reg5,
}

impl Ctrl {
    pub const ALL: [Ctrl; 5] = [Ctrl::Reg1, Ctrl::Reg2, Ctrl::Reg3, Ctrl::Reg4, Ctrl::Reg5];

    pub const fn register(self) -> u8 {
        match self {
            Ctrl::Reg1 => 0x20,
            Ctrl::Reg2 => 0x21,
            Ctrl::Reg3 => 0x22,
            Ctrl::Reg4 => 0x23,
            Ctrl::Reg5 => 0x24,
        }
    }

    /// Value written during configuration.
    ///
    /// Reg1 powers up at 100 Hz output data rate with all axes enabled, Reg3
    /// routes data-ready to DRDY/INT2.
    pub const fn initial(self) -> u8 {
        match self {
            Ctrl::Reg1 => 0x1F,
            Ctrl::Reg2 => 0x00,
            Ctrl::Reg3 => 0x08,
            Ctrl::Reg4 => 0x30,
            Ctrl::Reg5 => 0x00,
        }
    }

    pub async fn write<I: RegisterBus>(
        self,
        address: I2cAddress,
        i2c: &mut I,
        value: u8,
    ) -> Result<(), I::Error> {
        i2c.write_register(address, self.register(), &[value]).await
    }
}
