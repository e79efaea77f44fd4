use crate::error::ValidationError;

/// Full scale range of the angular rate output.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Sensitivity {
    #[default]
    Dps250,
    Dps500,
    Dps2000,
}

impl Sensitivity {
    /// CTRL_REG4 value: block data update plus the full scale selection.
    pub const fn register_value(self) -> u8 {
        match self {
            Sensitivity::Dps250 => 0x80,
            Sensitivity::Dps500 => 0x90,
            Sensitivity::Dps2000 => 0xA0,
        }
    }

    /// Degrees per second represented by one output digit.
    pub const fn dps_per_digit(self) -> f32 {
        match self {
            Sensitivity::Dps250 => 0.00875,
            Sensitivity::Dps500 => 0.0175,
            Sensitivity::Dps2000 => 0.07,
        }
    }

    pub const fn full_scale_dps(self) -> u16 {
        match self {
            Sensitivity::Dps250 => 250,
            Sensitivity::Dps500 => 500,
            Sensitivity::Dps2000 => 2000,
        }
    }
}

impl TryFrom<u16> for Sensitivity {
    type Error = ValidationError;

    fn try_from(dps: u16) -> Result<Self, Self::Error> {
        match dps {
            250 => Ok(Sensitivity::Dps250),
            500 => Ok(Sensitivity::Dps500),
            2000 => Ok(Sensitivity::Dps2000),
            _ => Err(ValidationError::Sensitivity(dps)),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Sensitivity {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "±{} dps", self.full_scale_dps());
    }
}
