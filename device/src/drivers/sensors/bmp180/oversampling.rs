use crate::error::ValidationError;
use embassy_time::Duration;

/// Pressure oversampling setting, trading conversion time for resolution.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OversamplingMode {
    UltraLowPower = 0,
    Standard = 1,
    HighResolution = 2,
    UltraHighResolution = 3,
}

/// Conversion time of a temperature measurement.
pub const TEMPERATURE_CONVERSION: Duration = Duration::from_millis(5);

impl OversamplingMode {
    /// Time to wait between the pressure command and reading the result.
    pub const fn conversion_time(self) -> Duration {
        match self {
            OversamplingMode::UltraLowPower => Duration::from_millis(5),
            OversamplingMode::Standard => Duration::from_millis(8),
            OversamplingMode::HighResolution => Duration::from_millis(14),
            OversamplingMode::UltraHighResolution => Duration::from_millis(26),
        }
    }

    /// Shift amount used by the raw pressure decode and the compensation.
    pub const fn oss(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for OversamplingMode {
    type Error = ValidationError;

    fn try_from(mode: u8) -> Result<Self, Self::Error> {
        match mode {
            0 => Ok(OversamplingMode::UltraLowPower),
            1 => Ok(OversamplingMode::Standard),
            2 => Ok(OversamplingMode::HighResolution),
            3 => Ok(OversamplingMode::UltraHighResolution),
            _ => Err(ValidationError::OversamplingMode(mode)),
        }
    }
}

impl From<OversamplingMode> for u8 {
    fn from(mode: OversamplingMode) -> Self {
        mode.oss()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for OversamplingMode {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "oss{}", self.oss());
    }
}
