use crate::traits::i2c::{I2cAddress, RegisterBus};

// 22-byte block of factory calibration, eleven big-endian words from 0xAA to 0xBF
pub const CALIBRATION: u8 = 0xAA;
pub const CALIBRATION_LEN: usize = 22;

pub const CAL_AC1: u8 = 0xAA;
pub const CAL_AC2: u8 = 0xAC;
pub const CAL_AC3: u8 = 0xAE;
pub const CAL_AC4: u8 = 0xB0;
pub const CAL_AC5: u8 = 0xB2;
pub const CAL_AC6: u8 = 0xB4;
pub const CAL_B1: u8 = 0xB6;
pub const CAL_B2: u8 = 0xB8;
pub const CAL_MB: u8 = 0xBA;
pub const CAL_MC: u8 = 0xBC;
pub const CAL_MD: u8 = 0xBE;

/// Factory programmed compensation coefficients.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Coefficients {
    pub ac1: i16,
    pub ac2: i16,
    pub ac3: i16,
    pub ac4: u16,
    pub ac5: u16,
    pub ac6: u16,
    pub b1: i16,
    pub b2: i16,
    pub mb: i16,
    pub mc: i16,
    pub md: i16,
}

impl Coefficients {
    /// Reads and decodes the calibration block in a single transaction.
    pub async fn read<I: RegisterBus>(address: I2cAddress, i2c: &mut I) -> Result<Self, I::Error> {
        let mut buf = [0; CALIBRATION_LEN];
        i2c.read_register(address, CALIBRATION, &mut buf).await?;
        Ok(buf.into())
    }
}

impl From<[u8; CALIBRATION_LEN]> for Coefficients {
    fn from(b: [u8; CALIBRATION_LEN]) -> Self {
        let word = |reg: u8| {
            let at = (reg - CALIBRATION) as usize;
            [b[at], b[at + 1]]
        };
        Coefficients {
            ac1: i16::from_be_bytes(word(CAL_AC1)),
            ac2: i16::from_be_bytes(word(CAL_AC2)),
            ac3: i16::from_be_bytes(word(CAL_AC3)),
            ac4: u16::from_be_bytes(word(CAL_AC4)),
            ac5: u16::from_be_bytes(word(CAL_AC5)),
            ac6: u16::from_be_bytes(word(CAL_AC6)),
            b1: i16::from_be_bytes(word(CAL_B1)),
            b2: i16::from_be_bytes(word(CAL_B2)),
            mb: i16::from_be_bytes(word(CAL_MB)),
            mc: i16::from_be_bytes(word(CAL_MC)),
            md: i16::from_be_bytes(word(CAL_MD)),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Coefficients {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(
            f,
            "Coefficients(ac1: {}, ac2: {}, ac3: {}, ac4: {}, ac5: {}, ac6: {}, b1: {}, b2: {}, mb: {}, mc: {}, md: {})",
            self.ac1,
            self.ac2,
            self.ac3,
            self.ac4,
            self.ac5,
            self.ac6,
            self.b1,
            self.b2,
            self.mb,
            self.mc,
            self.md
        );
    }
}
