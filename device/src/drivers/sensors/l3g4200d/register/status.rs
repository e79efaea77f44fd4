use crate::traits::i2c::{I2cAddress, RegisterBus};

const STATUS_REG: u8 = 0x27;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Status(u8);

impl Status {
    pub async fn read<I: RegisterBus>(address: I2cAddress, i2c: &mut I) -> Result<Status, I::Error> {
        let mut buf = [0; 1];
        i2c.read_register(address, STATUS_REG, &mut buf).await?;
        Ok(buf[0].into())
    }

    /// ZYXDA: a new sample is available on all three axes.
    pub fn xyz_available(&self) -> bool {
        (self.0 & 0b0000_1000) != 0
    }

    /// ZYXOR: a sample was overwritten before it was read.
    pub fn xyz_overrun(&self) -> bool {
        (self.0 & 0b1000_0000) != 0
    }
}

impl From<u8> for Status {
    fn from(val: u8) -> Self {
        Status(val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_ready_and_overrun_bits() {
        let status = Status::from(0x88);
        assert!(status.xyz_available());
        assert!(status.xyz_overrun());

        let status = Status::from(0x07);
        assert!(!status.xyz_available());
        assert!(!status.xyz_overrun());
    }
}
