//! Fixed-point compensation of raw conversion codes.
//!
//! Intermediates are carried in 64 bits. Genuine calibration blocks stay far
//! inside that range; products that leave it end the pressure pipeline with 0.
//! Shifts are arithmetic and every division rounds towards positive infinity,
//! which is what the reference results were produced with.

use super::oversampling::OversamplingMode;
use super::register::calibration::Coefficients;
use crate::domain::temperature::{Celsius, Temperature};

/// Compensated temperature plus the `b5` intermediate the pressure formula needs.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TrueTemperature {
    pub temperature: Temperature<Celsius>,
    pub b5: i32,
}

pub fn true_temperature(raw_temperature: u16, c: &Coefficients) -> TrueTemperature {
    let x1 = ((raw_temperature as i64 - c.ac6 as i64) * c.ac5 as i64) >> 15;
    let x2 = div_ceil((c.mc as i64) << 11, x1 + c.md as i64);
    let b5 = x1 + x2;
    TrueTemperature {
        temperature: Temperature::from_decidegrees(((b5 + 8) >> 4) as i32),
        b5: b5 as i32,
    }
}

/// Pressure in Pascal.
///
/// Returns 0 when the coefficients produce a zero divisor or push an
/// intermediate out of 64 bit range. Results beyond `i32` saturate.
pub fn true_pressure(raw_pressure: i32, mode: OversamplingMode, c: &Coefficients, b5: i32) -> i32 {
    match compensate_pressure(raw_pressure as i64, mode.oss() as u32, c, b5 as i64) {
        Some(p) => p.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
        None => 0,
    }
}

fn compensate_pressure(raw_pressure: i64, oss: u32, c: &Coefficients, b5: i64) -> Option<i64> {
    let b6 = b5 - 4000;
    let b6_sq = b6.checked_mul(b6)?;
    let x1 = ((c.b2 as i64).checked_mul(b6_sq)? >> 12) >> 11;
    let x2 = (c.ac2 as i64).checked_mul(b6)? >> 11;
    let x3 = x1.checked_add(x2)?;
    let b3 = (c.ac1 as i64 * 4)
        .checked_add(x3)?
        .checked_mul(1 << oss)?
        .checked_add(2)?;
    let b3 = div_ceil(b3, 4);

    let x1 = (c.ac3 as i64).checked_mul(b6)? >> 13;
    let x2 = (c.b1 as i64).checked_mul(b6_sq >> 12)? >> 16;
    let x3 = x1.checked_add(x2)?.checked_add(2)? >> 2;
    let b4 = (c.ac4 as i64).checked_mul(x3.checked_add(32768)?)? >> 15;
    if b4 == 0 {
        return None;
    }

    let b7 = raw_pressure.checked_sub(b3)?.checked_mul(50000 >> oss)?;
    let p = if b7 < 0x8000_0000 {
        div_ceil(b7.checked_mul(2)?, b4)
    } else {
        libm::ceil((b7 as f64 / b4 as f64) * 2.0) as i64
    };

    let x1 = (p >> 8).checked_mul(p >> 8)?.checked_mul(3038)? >> 16;
    let x2 = (-7357i64).checked_mul(p)? >> 16;
    p.checked_add((x1 + x2 + 3791) >> 4)
}

/// Integer division rounding towards positive infinity. A zero divisor yields 0.
pub(crate) fn div_ceil(numerator: i64, denominator: i64) -> i64 {
    let (quotient, remainder) = match (
        numerator.checked_div(denominator),
        numerator.checked_rem(denominator),
    ) {
        (Some(q), Some(r)) => (q, r),
        _ => return 0,
    };
    if remainder != 0 && (numerator < 0) == (denominator < 0) {
        quotient + 1
    } else {
        quotient
    }
}
