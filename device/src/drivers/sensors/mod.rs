//! Sensor drivers and the registry that starts them by name.

pub mod bmp180;
pub mod l3g4200d;

use crate::error::Error;
use crate::traits::driver::Driver;
use crate::traits::i2c::RegisterBus;
use bmp180::Bmp180;
use embedded_hal_async::delay::DelayNs;
use l3g4200d::L3g4200d;

/// Drivers known to the registry.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorKind {
    Bmp180,
    L3g4200d,
}

impl SensorKind {
    pub const ALL: [SensorKind; 2] = [SensorKind::Bmp180, SensorKind::L3g4200d];

    /// Looks a driver up by its registered name.
    pub fn from_name(name: &str) -> Option<SensorKind> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            SensorKind::Bmp180 => bmp180::NAME,
            SensorKind::L3g4200d => l3g4200d::NAME,
        }
    }

    pub fn commands(&self) -> &'static [&'static str] {
        match self {
            SensorKind::Bmp180 => bmp180::COMMANDS,
            SensorKind::L3g4200d => l3g4200d::COMMANDS,
        }
    }

    /// Starts the driver with its default configuration.
    pub async fn start<B, D>(&self, bus: B, delay: D) -> Result<AnySensor<B, D>, Error<B::Error>>
    where
        B: RegisterBus,
        D: DelayNs,
    {
        info!("starting {}", self.name());
        match self {
            SensorKind::Bmp180 => Ok(AnySensor::Bmp180(
                <Bmp180<B, D> as Driver<B, D>>::start(bus, delay).await?,
            )),
            SensorKind::L3g4200d => Ok(AnySensor::L3g4200d(
                <L3g4200d<B, D> as Driver<B, D>>::start(bus, delay).await?,
            )),
        }
    }
}

/// A started driver of any registered kind.
pub enum AnySensor<B, D> {
    Bmp180(Bmp180<B, D>),
    L3g4200d(L3g4200d<B, D>),
}

impl<B, D> AnySensor<B, D> {
    pub fn kind(&self) -> SensorKind {
        match self {
            AnySensor::Bmp180(_) => SensorKind::Bmp180,
            AnySensor::L3g4200d(_) => SensorKind::L3g4200d,
        }
    }

    pub fn commands(&self) -> &'static [&'static str] {
        self.kind().commands()
    }

    pub fn release(self) -> (B, D)
    where
        B: RegisterBus,
        D: DelayNs,
    {
        match self {
            AnySensor::Bmp180(sensor) => sensor.release(),
            AnySensor::L3g4200d(sensor) => sensor.release(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name() {
        assert_eq!(Some(SensorKind::Bmp180), SensorKind::from_name("bmp180"));
        assert_eq!(Some(SensorKind::L3g4200d), SensorKind::from_name("l3g4200d"));
        assert_eq!(None, SensorKind::from_name("bme280"));
    }

    #[test]
    fn commands_per_kind() {
        assert_eq!(
            &["get_pressure", "get_temperature", "get_altitude"],
            SensorKind::Bmp180.commands()
        );
        assert!(SensorKind::L3g4200d.commands().contains(&"stop_polling"));
    }
}
