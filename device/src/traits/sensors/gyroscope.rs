use crate::domain::rotation::GyroReading;

/// A sensor producing bias corrected angular rates.
pub trait Gyroscope {
    type Error;
    async fn angular_rate(&mut self) -> Result<GyroReading, Self::Error>;
}
