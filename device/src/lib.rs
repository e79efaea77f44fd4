#![macro_use]
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(async_fn_in_trait)]
//! Async, no-alloc drivers for two sensors sharing a register-addressed I2C bus:
//! the BMP180 barometric pressure / temperature sensor and the L3G4200D three
//! axis gyroscope.
//!
//! Drivers are generic over a [`RegisterBus`](traits::i2c::RegisterBus), which is
//! implemented for every `embedded_hal_async::i2c::I2c` bus, and over an
//! `embedded_hal_async::delay::DelayNs` used for conversion and data-ready waits.
//! Every bus transaction and every delay is a suspension point; nothing busy-waits.
//!
//! # Example
//!
//! ```ignore
//! use i2c_sensor_drivers::drivers::sensors::bmp180::Bmp180;
//!
//! let mut bmp = Bmp180::start(i2c, embassy_time::Delay).await?;
//! let reading = bmp.pressure(3).await?;
//! log::info!("{} / {} Pa", reading.temperature, reading.pressure);
//! ```
//!
//! Sensors sharing one physical bus should each get their own
//! `embassy_embedded_hal::shared_bus::asynch::i2c::I2cDevice`, which serializes
//! transactions across devices.

pub(crate) mod fmt;

pub mod domain;
pub mod drivers;
pub mod error;
pub mod traits;

pub use drivers::sensors::{
    bmp180::Bmp180,
    l3g4200d::{L3g4200d, PollingControl},
    AnySensor, SensorKind,
};
pub use error::{Error, ValidationError};

#[cfg(feature = "std")]
pub mod testutil;
