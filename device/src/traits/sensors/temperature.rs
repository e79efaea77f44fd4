use crate::domain::temperature::{Temperature, TemperatureScale};

pub trait TemperatureSensor<T: TemperatureScale> {
    type Error;
    async fn temperature(&mut self) -> Result<Temperature<T>, Self::Error>;
}
