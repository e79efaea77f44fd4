use crate::drivers::sensors::l3g4200d::DeviceState;
use core::fmt::{Display, Formatter};

/// Errors reported by the sensor drivers, generic over the bus error `E`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error<E> {
    /// The bus transport failed a write or a read. Surfaced unchanged.
    Bus(E),
    /// An argument was rejected before any bus traffic was issued.
    Validation(ValidationError),
    /// The identification register did not hold the expected device id.
    DeviceIdentification { found: u8 },
    /// The operation is not permitted in the driver's current state.
    InvalidState(DeviceState),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Oversampling mode outside `0..=3`.
    OversamplingMode(u8),
    /// Full-scale range other than 250, 500 or 2000 dps.
    Sensitivity(u16),
}

impl<E> From<E> for Error<E> {
    fn from(e: E) -> Error<E> {
        Error::Bus(e)
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ValidationError::OversamplingMode(mode) => {
                write!(f, "invalid oversampling mode {}", mode)
            }
            ValidationError::Sensitivity(dps) => write!(f, "invalid sensitivity {} dps", dps),
        }
    }
}

impl<E: core::fmt::Debug> Display for Error<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "bus error: {:?}", e),
            Error::Validation(e) => write!(f, "validation error: {}", e),
            Error::DeviceIdentification { found } => {
                write!(f, "unexpected device id {:#04x}", found)
            }
            Error::InvalidState(state) => write!(f, "not permitted in state {:?}", state),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ValidationError {}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug> std::error::Error for Error<E> {}

#[cfg(feature = "defmt")]
impl defmt::Format for ValidationError {
    fn format(&self, f: defmt::Formatter<'_>) {
        match self {
            ValidationError::OversamplingMode(mode) => {
                defmt::write!(f, "invalid oversampling mode {}", mode)
            }
            ValidationError::Sensitivity(dps) => {
                defmt::write!(f, "invalid sensitivity {} dps", dps)
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl<E> defmt::Format for Error<E> {
    fn format(&self, f: defmt::Formatter<'_>) {
        match self {
            Error::Bus(_) => defmt::write!(f, "bus error"),
            Error::Validation(e) => defmt::write!(f, "validation error: {}", e),
            Error::DeviceIdentification { found } => {
                defmt::write!(f, "unexpected device id {:#x}", found)
            }
            Error::InvalidState(state) => defmt::write!(f, "not permitted in state {}", state),
        }
    }
}
