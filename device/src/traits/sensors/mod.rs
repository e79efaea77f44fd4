pub mod gyroscope;
pub mod temperature;
