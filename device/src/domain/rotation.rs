//! Angular rate samples and readings.

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Raw output codes of the three axes.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct GyroRawSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl GyroRawSample {
    pub fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    pub fn axis(&self, axis: Axis) -> i16 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

/// Output registers in address order: X low/high, Y low/high, Z low/high.
impl From<[u8; 6]> for GyroRawSample {
    fn from(b: [u8; 6]) -> Self {
        Self {
            x: i16::from_le_bytes([b[0], b[1]]),
            y: i16::from_le_bytes([b[2], b[3]]),
            z: i16::from_le_bytes([b[4], b[5]]),
        }
    }
}

/// Bias corrected angular rate in degrees per second.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct GyroReading {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl GyroReading {
    pub fn axis(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

impl From<[f32; 3]> for GyroReading {
    fn from(v: [f32; 3]) -> Self {
        Self {
            x: v[0],
            y: v[1],
            z: v[2],
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for GyroRawSample {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "GyroRawSample(x: {}, y: {}, z: {})", self.x, self.y, self.z);
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for GyroReading {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "GyroReading(x: {}, y: {}, z: {} dps)", self.x, self.y, self.z);
    }
}
