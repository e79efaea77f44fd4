use crate::domain::rotation::GyroRawSample;
use crate::traits::i2c::{I2cAddress, RegisterBus};

pub const OUT_X_L: u8 = 0x28;
pub const OUT_X_H: u8 = 0x29;
pub const OUT_Y_L: u8 = 0x2A;
pub const OUT_Y_H: u8 = 0x2B;
pub const OUT_Z_L: u8 = 0x2C;
pub const OUT_Z_H: u8 = 0x2D;

pub struct Out;

impl Out {
    /// Reads the six output registers one after the other.
    pub async fn read<I: RegisterBus>(
        address: I2cAddress,
        i2c: &mut I,
    ) -> Result<GyroRawSample, I::Error> {
        let mut bytes = [0; 6];
        for (register, byte) in (OUT_X_L..=OUT_Z_H).zip(bytes.iter_mut()) {
            let mut buf = [0; 1];
            i2c.read_register(address, register, &mut buf).await?;
            *byte = buf[0];
        }
        Ok(bytes.into())
    }
}
