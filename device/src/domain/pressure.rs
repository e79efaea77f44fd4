//! Compensated barometer readings and the barometric altitude formula.

use super::temperature::{Celsius, Temperature};

/// Standard atmosphere at sea level, in Pascal.
pub const DEFAULT_SEA_LEVEL_PA: i32 = 101_325;

/// Temperature and pressure from one pressure conversion.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PressureReading {
    pub temperature: Temperature<Celsius>,
    /// Pascal.
    pub pressure: i32,
}

/// A [`PressureReading`] extended with the altitude derived from it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AltitudeReading {
    pub temperature: Temperature<Celsius>,
    /// Pascal.
    pub pressure: i32,
    /// Meters above the reference pressure level.
    pub altitude: f32,
}

impl AltitudeReading {
    pub fn from_pressure(reading: PressureReading, sea_level_pa: i32) -> Self {
        Self {
            temperature: reading.temperature,
            pressure: reading.pressure,
            altitude: altitude(reading.pressure, sea_level_pa),
        }
    }
}

/// Altitude in meters for `pressure_pa`, relative to `sea_level_pa`.
pub fn altitude(pressure_pa: i32, sea_level_pa: i32) -> f32 {
    let ratio = pressure_pa as f64 / sea_level_pa as f64;
    (44330.0 * (1.0 - libm::pow(ratio, 0.1903))) as f32
}

#[cfg(feature = "defmt")]
impl defmt::Format for PressureReading {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(
            f,
            "PressureReading(temperature: {}, pressure: {} Pa)",
            &self.temperature,
            &self.pressure
        );
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AltitudeReading {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(
            f,
            "AltitudeReading(temperature: {}, pressure: {} Pa, altitude: {} m)",
            &self.temperature,
            &self.pressure,
            &self.altitude
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sea_level_is_zero_altitude() {
        assert_eq!(0.0, altitude(101_325, 101_325));
        assert_eq!(0.0, altitude(99_000, 99_000));
    }

    #[test]
    fn altitude_decreases_as_pressure_increases() {
        let mut previous = altitude(30_000, DEFAULT_SEA_LEVEL_PA);
        for pressure in (30_100..=110_000).step_by(100) {
            let current = altitude(pressure, DEFAULT_SEA_LEVEL_PA);
            assert!(current < previous, "{} Pa: {} >= {}", pressure, current, previous);
            previous = current;
        }
    }

    #[test]
    fn lower_pressure_is_above_sea_level() {
        // roughly 3000 m in the standard atmosphere
        let a = altitude(69_964, DEFAULT_SEA_LEVEL_PA);
        assert!(a > 3000.0 && a < 3100.0, "{}", a);
        assert!(altitude(102_000, DEFAULT_SEA_LEVEL_PA) < 0.0);
    }
}
