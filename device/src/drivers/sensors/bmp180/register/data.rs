use crate::traits::i2c::{I2cAddress, RegisterBus};

// Shared conversion result: MSB, LSB, XLSB
const OUT: u8 = 0xF6;

pub struct Out;

impl Out {
    /// Uncompensated temperature code.
    pub async fn read_temperature<I: RegisterBus>(
        address: I2cAddress,
        i2c: &mut I,
    ) -> Result<u16, I::Error> {
        let mut buf = [0; 2];
        i2c.read_register(address, OUT, &mut buf).await?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Uncompensated pressure code for oversampling setting `oss`.
    pub async fn read_pressure<I: RegisterBus>(
        address: I2cAddress,
        i2c: &mut I,
        oss: u8,
    ) -> Result<i32, I::Error> {
        let mut buf = [0; 3];
        i2c.read_register(address, OUT, &mut buf).await?;
        Ok(raw_pressure(buf, oss))
    }
}

pub(crate) fn raw_pressure(buf: [u8; 3], oss: u8) -> i32 {
    let [msb, lsb, xlsb] = buf;
    (((msb as i32) << 16) | ((lsb as i32) << 8) | xlsb as i32) >> (8 - oss)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressure_keeps_more_bits_with_higher_oversampling() {
        let buf = [0x5D, 0x23, 0xC0];
        assert_eq!(0x5D23, raw_pressure(buf, 0));
        assert_eq!(0x5D23 << 1 | 1, raw_pressure(buf, 1));
        assert_eq!(0x5D23 << 3 | 0b110, raw_pressure(buf, 3));
    }
}
