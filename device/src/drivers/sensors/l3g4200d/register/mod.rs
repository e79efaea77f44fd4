pub mod ctrl;
pub mod out;
pub mod status;
pub mod who_am_i;

pub const REFERENCE: u8 = 0x25;
pub const OUT_TEMP: u8 = 0x26;
pub const FIFO_CTRL_REG: u8 = 0x2E;
pub const FIFO_SRC_REG: u8 = 0x2F;
pub const INT1_CFG: u8 = 0x30;
pub const INT1_SRC: u8 = 0x31;
pub const INT1_TSH_XH: u8 = 0x32;
pub const INT1_TSH_XL: u8 = 0x33;
pub const INT1_TSH_YH: u8 = 0x34;
pub const INT1_TSH_YL: u8 = 0x35;
pub const INT1_TSH_ZH: u8 = 0x36;
pub const INT1_TSH_ZL: u8 = 0x37;
pub const INT1_DURATION: u8 = 0x38;
