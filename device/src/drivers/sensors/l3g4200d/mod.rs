//! Driver for the ST L3G4200D three axis gyroscope.
//!
//! Bring-up runs identification, register configuration and a statistical
//! calibration that estimates the zero-rate bias and noise threshold of every
//! axis. Afterwards readings are bias corrected, thresholded and scaled to
//! degrees per second.

pub mod calibration;
pub mod polling;
pub mod register;
pub mod sensitivity;

use crate::domain::rotation::{GyroRawSample, GyroReading};
use crate::error::Error;
use crate::traits::driver::Driver;
use crate::traits::i2c::{I2cAddress, RegisterBus};
use crate::traits::sensors::gyroscope::Gyroscope;
use calibration::{Accumulator, CalibrationProfile};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal_async::delay::DelayNs;
use register::ctrl::Ctrl;
use register::out::Out;
use register::status::Status;
use register::who_am_i::{WhoAmI, DEVICE_ID};

pub use polling::PollingControl;
pub use sensitivity::Sensitivity;

/// Registry name.
pub const NAME: &str = "l3g4200d";
pub const COMMANDS: &[&str] = &[
    "start_polling",
    "stop_polling",
    "set_sensitivity_250",
    "set_sensitivity_500",
    "set_sensitivity_2000",
];

/// Slave address selected by the level of the SDO pin.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum SdoPin {
    Low,
    #[default]
    High,
}

impl From<SdoPin> for I2cAddress {
    fn from(sdo: SdoPin) -> Self {
        match sdo {
            SdoPin::Low => I2cAddress::new(0x68),
            SdoPin::High => I2cAddress::new(0x69),
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub struct L3g4200dConfig {
    pub address: SdoPin,
    /// Samples taken during calibration.
    pub samples: u16,
    /// Standard deviations below which a deviation from the zero rate is noise.
    pub sigma_multiplier: f32,
    /// Data-ready re-check interval while calibrating.
    pub calibration_poll_ms: u32,
    /// Data-ready re-check interval while polling.
    pub polling_poll_ms: u32,
}

impl Default for L3g4200dConfig {
    fn default() -> Self {
        Self {
            address: SdoPin::High,
            samples: 500,
            sigma_multiplier: 3.0,
            calibration_poll_ms: 50,
            polling_poll_ms: 3,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FailureReason {
    Bus,
    DeviceIdentification { found: u8 },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DeviceState {
    Uninitialized,
    Identifying,
    Configuring,
    Calibrating,
    Ready,
    Polling,
    Failed(FailureReason),
}

#[cfg(feature = "defmt")]
impl defmt::Format for DeviceState {
    fn format(&self, f: defmt::Formatter<'_>) {
        match self {
            DeviceState::Uninitialized => defmt::write!(f, "Uninitialized"),
            DeviceState::Identifying => defmt::write!(f, "Identifying"),
            DeviceState::Configuring => defmt::write!(f, "Configuring"),
            DeviceState::Calibrating => defmt::write!(f, "Calibrating"),
            DeviceState::Ready => defmt::write!(f, "Ready"),
            DeviceState::Polling => defmt::write!(f, "Polling"),
            DeviceState::Failed(FailureReason::Bus) => defmt::write!(f, "Failed(Bus)"),
            DeviceState::Failed(FailureReason::DeviceIdentification { found }) => {
                defmt::write!(f, "Failed(DeviceIdentification {:#x})", found)
            }
        }
    }
}

pub struct L3g4200d<B, D> {
    bus: B,
    delay: D,
    address: I2cAddress,
    config: L3g4200dConfig,
    state: DeviceState,
    sensitivity: Sensitivity,
    profile: Option<CalibrationProfile>,
}

impl<B, D> L3g4200d<B, D>
where
    B: RegisterBus,
    D: DelayNs,
{
    pub fn new(bus: B, delay: D, config: L3g4200dConfig) -> Self {
        Self {
            bus,
            delay,
            address: config.address.into(),
            config,
            state: DeviceState::Uninitialized,
            sensitivity: Sensitivity::default(),
            profile: None,
        }
    }

    pub fn state(&self) -> DeviceState {
        self.state
    }

    pub fn sensitivity(&self) -> Sensitivity {
        self.sensitivity
    }

    pub fn dps_per_digit(&self) -> f32 {
        self.sensitivity.dps_per_digit()
    }

    pub fn calibration(&self) -> Option<&CalibrationProfile> {
        self.profile.as_ref()
    }

    /// Gives back the bus and delay.
    pub fn release(self) -> (B, D) {
        (self.bus, self.delay)
    }

    /// Identifies, configures and calibrates the device.
    ///
    /// Any failure leaves the driver in [`DeviceState::Failed`], which is terminal.
    pub async fn start(&mut self) -> Result<(), Error<B::Error>> {
        if self.state != DeviceState::Uninitialized {
            return Err(Error::InvalidState(self.state));
        }
        let result = self.bring_up().await;
        self.settle(result)
    }

    /// Replaces the calibration profile with a freshly measured one.
    ///
    /// On failure the previous profile stays in place and the driver remains
    /// [`DeviceState::Ready`].
    pub async fn calibrate(&mut self) -> Result<CalibrationProfile, Error<B::Error>> {
        self.expect_state(DeviceState::Ready)?;
        let result = self.run_calibration().await;
        self.state = DeviceState::Ready;
        if let Err(e) = result {
            warn!("l3g4200d recalibration failed, keeping previous profile");
            return Err(e);
        }
        self.profile.ok_or(Error::InvalidState(self.state))
    }

    /// Writes the range to CTRL_REG4 and switches the scale used by later reads.
    pub async fn set_sensitivity(&mut self, sensitivity: Sensitivity) -> Result<(), Error<B::Error>> {
        self.expect_state(DeviceState::Ready)?;
        self.write_sensitivity(sensitivity).await
    }

    pub async fn set_sensitivity_dps(&mut self, dps: u16) -> Result<(), Error<B::Error>> {
        let sensitivity = Sensitivity::try_from(dps).map_err(Error::Validation)?;
        self.set_sensitivity(sensitivity).await
    }

    /// Waits for data-ready and returns one filtered reading.
    pub async fn read(&mut self) -> Result<GyroReading, Error<B::Error>> {
        self.expect_state(DeviceState::Ready)?;
        self.read_filtered().await
    }

    /// Delivers readings to `on_reading` back to back until `control` is stopped.
    ///
    /// The stop request is checked after each delivered reading, so a stop
    /// issued while a read is in flight still lets that reading through. Range
    /// changes requested through `control` are applied before the next read.
    pub async fn start_polling<M, F>(
        &mut self,
        control: &PollingControl<M>,
        mut on_reading: F,
    ) -> Result<(), Error<B::Error>>
    where
        M: RawMutex,
        F: FnMut(GyroReading),
    {
        self.expect_state(DeviceState::Ready)?;
        self.state = DeviceState::Polling;
        control.begin();
        debug!("l3g4200d polling started");

        let result = loop {
            if let Some(sensitivity) = control.take_sensitivity() {
                if let Err(e) = self.write_sensitivity(sensitivity).await {
                    break Err(e);
                }
            }
            match self.read_filtered().await {
                Ok(reading) => on_reading(reading),
                Err(e) => break Err(e),
            }
            if !control.is_polling() {
                break Ok(());
            }
        };

        control.end();
        self.state = DeviceState::Ready;
        debug!("l3g4200d polling stopped");
        result
    }

    async fn bring_up(&mut self) -> Result<(), Error<B::Error>> {
        self.state = DeviceState::Identifying;
        let id = WhoAmI::read(self.address, &mut self.bus).await?;
        if id != DEVICE_ID {
            error!("l3g4200d: unexpected device id {:#x}", id);
            return Err(Error::DeviceIdentification { found: id });
        }

        self.state = DeviceState::Configuring;
        for reg in Ctrl::ALL {
            reg.write(self.address, &mut self.bus, reg.initial()).await?;
        }
        self.write_sensitivity(Sensitivity::Dps250).await?;
        debug!("l3g4200d configured");

        self.run_calibration().await
    }

    async fn run_calibration(&mut self) -> Result<(), Error<B::Error>> {
        self.state = DeviceState::Calibrating;
        let mut acc = Accumulator::new();
        for _ in 0..self.config.samples {
            let sample = self.read_raw(self.config.calibration_poll_ms).await?;
            acc.add(&sample);
        }
        let profile = acc.profile(self.config.sigma_multiplier);
        info!(
            "l3g4200d calibrated with {} samples: zero rate {} {} {}, threshold {} {} {}",
            acc.samples(),
            profile.zero_rate[0],
            profile.zero_rate[1],
            profile.zero_rate[2],
            profile.threshold[0],
            profile.threshold[1],
            profile.threshold[2]
        );
        self.profile.replace(profile);
        Ok(())
    }

    fn settle(&mut self, result: Result<(), Error<B::Error>>) -> Result<(), Error<B::Error>> {
        match &result {
            Ok(()) => self.state = DeviceState::Ready,
            Err(Error::DeviceIdentification { found }) => {
                self.state = DeviceState::Failed(FailureReason::DeviceIdentification { found: *found })
            }
            Err(_) => {
                error!("l3g4200d failed while {:?}", self.state);
                self.state = DeviceState::Failed(FailureReason::Bus)
            }
        }
        result
    }

    async fn write_sensitivity(&mut self, sensitivity: Sensitivity) -> Result<(), Error<B::Error>> {
        Ctrl::Reg4
            .write(self.address, &mut self.bus, sensitivity.register_value())
            .await?;
        self.sensitivity = sensitivity;
        debug!("l3g4200d sensitivity {} dps", sensitivity.full_scale_dps());
        Ok(())
    }

    async fn read_filtered(&mut self) -> Result<GyroReading, Error<B::Error>> {
        let raw = self.read_raw(self.config.polling_poll_ms).await?;
        let profile = self.profile.ok_or(Error::InvalidState(self.state))?;
        Ok(profile.apply(&raw, self.sensitivity.dps_per_digit()))
    }

    async fn read_raw(&mut self, poll_ms: u32) -> Result<GyroRawSample, Error<B::Error>> {
        loop {
            let status = Status::read(self.address, &mut self.bus).await?;
            if status.xyz_available() {
                if status.xyz_overrun() {
                    trace!("l3g4200d output overrun, older samples were dropped");
                }
                break;
            }
            self.delay.delay_ms(poll_ms).await;
        }
        let raw = Out::read(self.address, &mut self.bus).await?;
        trace!("l3g4200d raw {} {} {}", raw.x, raw.y, raw.z);
        Ok(raw)
    }

    fn expect_state(&self, expected: DeviceState) -> Result<(), Error<B::Error>> {
        if self.state == expected {
            Ok(())
        } else {
            Err(Error::InvalidState(self.state))
        }
    }
}

impl<B, D> Driver<B, D> for L3g4200d<B, D>
where
    B: RegisterBus,
    D: DelayNs,
{
    type Error = Error<B::Error>;

    const NAME: &'static str = NAME;
    const COMMANDS: &'static [&'static str] = COMMANDS;

    async fn start(bus: B, delay: D) -> Result<Self, Self::Error> {
        let mut gyro = L3g4200d::new(bus, delay, L3g4200dConfig::default());
        L3g4200d::start(&mut gyro).await?;
        Ok(gyro)
    }
}

impl<B, D> Gyroscope for L3g4200d<B, D>
where
    B: RegisterBus,
    D: DelayNs,
{
    type Error = Error<B::Error>;

    async fn angular_rate(&mut self) -> Result<GyroReading, Self::Error> {
        self.read().await
    }
}
