use crate::traits::i2c::{I2cAddress, RegisterBus};

const WHO_AM_I: u8 = 0x0F;

/// Identification value of the L3G4200D.
pub const DEVICE_ID: u8 = 0xD3;

pub struct WhoAmI;

impl WhoAmI {
    pub async fn read<I: RegisterBus>(address: I2cAddress, i2c: &mut I) -> Result<u8, I::Error> {
        let mut buf = [0; 1];
        i2c.read_register(address, WHO_AM_I, &mut buf).await?;
        Ok(buf[0])
    }
}
