pub mod driver;
pub mod i2c;
pub mod sensors;
