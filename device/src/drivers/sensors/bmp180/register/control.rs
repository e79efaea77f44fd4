use crate::traits::i2c::{I2cAddress, RegisterBus};

const CONTROL: u8 = 0xF4;

/// Conversion commands written to the control register.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    ReadTemperature,
    ReadPressure,
}

impl From<Command> for u8 {
    fn from(command: Command) -> Self {
        match command {
            Command::ReadTemperature => 0x2E,
            Command::ReadPressure => 0x34,
        }
    }
}

pub struct Control;

impl Control {
    pub async fn write<I: RegisterBus>(
        address: I2cAddress,
        i2c: &mut I,
        command: Command,
    ) -> Result<(), I::Error> {
        i2c.write_register(address, CONTROL, &[command.into()]).await
    }
}
