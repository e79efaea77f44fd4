pub mod pressure;
pub mod rotation;
pub mod temperature;
