pub mod calibration;
pub mod control;
pub mod data;

// Chip identification, fixed at 0x55
pub const CHIP_ID: u8 = 0xD0;
pub const VERSION: u8 = 0xD1;
// Writing 0xB6 performs a power-on reset
pub const SOFT_RESET: u8 = 0xE0;
