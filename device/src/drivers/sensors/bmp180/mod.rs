//! Driver for the Bosch BMP180 barometric pressure and temperature sensor.
//!
//! Every measurement is a command write to the control register, a fixed
//! conversion delay and a read of the result. Pressure compensation needs the
//! `b5` intermediate of a temperature compensation, so a pressure measurement
//! always converts temperature first.

pub mod compensation;
pub mod oversampling;
pub mod register;

use crate::domain::pressure::{AltitudeReading, PressureReading, DEFAULT_SEA_LEVEL_PA};
use crate::domain::temperature::{Celsius, Temperature};
use crate::error::Error;
use crate::traits::driver::Driver;
use crate::traits::i2c::{I2cAddress, RegisterBus};
use crate::traits::sensors::temperature::TemperatureSensor;
use compensation::{true_pressure, true_temperature, TrueTemperature};
use embassy_time::Duration;
use embedded_hal_async::delay::DelayNs;
use oversampling::{OversamplingMode, TEMPERATURE_CONVERSION};
use register::calibration::Coefficients;
use register::control::{Command, Control};
use register::data::Out;

pub const ADDR: u8 = 0x77;

/// Registry name.
pub const NAME: &str = "bmp180";
pub const COMMANDS: &[&str] = &["get_pressure", "get_temperature", "get_altitude"];

#[derive(Debug, Copy, Clone)]
pub struct Bmp180Config {
    pub address: I2cAddress,
}

impl Default for Bmp180Config {
    fn default() -> Self {
        Self {
            address: I2cAddress::new(ADDR),
        }
    }
}

pub struct Bmp180<B, D> {
    bus: B,
    delay: D,
    address: I2cAddress,
    coefficients: Coefficients,
}

impl<B, D> Bmp180<B, D>
where
    B: RegisterBus,
    D: DelayNs,
{
    /// Loads the calibration coefficients from the default address.
    pub async fn start(bus: B, delay: D) -> Result<Self, Error<B::Error>> {
        Self::start_with_config(bus, delay, Bmp180Config::default()).await
    }

    pub async fn start_with_config(
        mut bus: B,
        delay: D,
        config: Bmp180Config,
    ) -> Result<Self, Error<B::Error>> {
        let coefficients = Coefficients::read(config.address, &mut bus).await?;
        debug!(
            "bmp180 coefficients: ac1={} ac2={} ac3={} ac4={} ac5={} ac6={} b1={} b2={} mb={} mc={} md={}",
            coefficients.ac1,
            coefficients.ac2,
            coefficients.ac3,
            coefficients.ac4,
            coefficients.ac5,
            coefficients.ac6,
            coefficients.b1,
            coefficients.b2,
            coefficients.mb,
            coefficients.mc,
            coefficients.md
        );
        Ok(Self::with_coefficients(bus, delay, config, coefficients))
    }

    /// Builds a driver from coefficients obtained earlier, without bus traffic.
    pub fn with_coefficients(
        bus: B,
        delay: D,
        config: Bmp180Config,
        coefficients: Coefficients,
    ) -> Self {
        Self {
            bus,
            delay,
            address: config.address,
            coefficients,
        }
    }

    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    /// Gives back the bus and delay.
    pub fn release(self) -> (B, D) {
        (self.bus, self.delay)
    }

    pub async fn read_raw_temperature(&mut self) -> Result<u16, Error<B::Error>> {
        Control::write(self.address, &mut self.bus, Command::ReadTemperature).await?;
        self.wait(TEMPERATURE_CONVERSION).await;
        let raw = Out::read_temperature(self.address, &mut self.bus).await?;
        trace!("bmp180 raw temperature {}", raw);
        Ok(raw)
    }

    /// Fails with a validation error, before touching the bus, unless `mode` is 0..=3.
    pub async fn read_raw_pressure(&mut self, mode: u8) -> Result<i32, Error<B::Error>> {
        let mode = OversamplingMode::try_from(mode).map_err(Error::Validation)?;
        self.convert_pressure(mode).await
    }

    pub async fn temperature(&mut self) -> Result<Temperature<Celsius>, Error<B::Error>> {
        Ok(self.true_temperature().await?.temperature)
    }

    /// Converts temperature, then pressure with oversampling `mode`.
    pub async fn pressure(&mut self, mode: u8) -> Result<PressureReading, Error<B::Error>> {
        let mode = OversamplingMode::try_from(mode).map_err(Error::Validation)?;
        let t = self.true_temperature().await?;
        let raw = self.convert_pressure(mode).await?;
        let pressure = true_pressure(raw, mode, &self.coefficients, t.b5);
        trace!("bmp180 b5={} pressure {} Pa", t.b5, pressure);
        Ok(PressureReading {
            temperature: t.temperature,
            pressure,
        })
    }

    /// Pressure reading plus altitude against `sea_level_pa`, 101325 Pa when `None`.
    pub async fn altitude(
        &mut self,
        mode: u8,
        sea_level_pa: Option<i32>,
    ) -> Result<AltitudeReading, Error<B::Error>> {
        let reading = self.pressure(mode).await?;
        let altitude =
            AltitudeReading::from_pressure(reading, sea_level_pa.unwrap_or(DEFAULT_SEA_LEVEL_PA));
        trace!("bmp180 altitude {} m", altitude.altitude);
        Ok(altitude)
    }

    async fn true_temperature(&mut self) -> Result<TrueTemperature, Error<B::Error>> {
        let raw = self.read_raw_temperature().await?;
        let t = true_temperature(raw, &self.coefficients);
        trace!("bmp180 temperature {}", t.temperature.raw_value());
        Ok(t)
    }

    async fn convert_pressure(&mut self, mode: OversamplingMode) -> Result<i32, Error<B::Error>> {
        Control::write(self.address, &mut self.bus, Command::ReadPressure).await?;
        self.wait(mode.conversion_time()).await;
        let raw = Out::read_pressure(self.address, &mut self.bus, mode.oss()).await?;
        trace!("bmp180 raw pressure {} (oss{})", raw, mode.oss());
        Ok(raw)
    }

    async fn wait(&mut self, duration: Duration) {
        self.delay.delay_ms(duration.as_millis() as u32).await;
    }
}

impl<B, D> Driver<B, D> for Bmp180<B, D>
where
    B: RegisterBus,
    D: DelayNs,
{
    type Error = Error<B::Error>;

    const NAME: &'static str = NAME;
    const COMMANDS: &'static [&'static str] = COMMANDS;

    async fn start(bus: B, delay: D) -> Result<Self, Self::Error> {
        Bmp180::start(bus, delay).await
    }
}

impl<B, D> TemperatureSensor<Celsius> for Bmp180<B, D>
where
    B: RegisterBus,
    D: DelayNs,
{
    type Error = Error<B::Error>;

    async fn temperature(&mut self) -> Result<Temperature<Celsius>, Self::Error> {
        Bmp180::temperature(self).await
    }
}
