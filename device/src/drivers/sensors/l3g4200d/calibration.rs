//! Zero-rate and noise threshold estimation from stationary samples.

use crate::domain::rotation::{Axis, GyroRawSample, GyroReading};

/// Per axis bias and noise threshold, in raw digits.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct CalibrationProfile {
    pub zero_rate: [f32; 3],
    pub threshold: [f32; 3],
}

impl CalibrationProfile {
    /// Removes the bias from `raw`, zeroes deviations below the threshold and
    /// scales the rest to degrees per second.
    pub fn apply(&self, raw: &GyroRawSample, dps_per_digit: f32) -> GyroReading {
        let mut dps = [0.0; 3];
        for axis in Axis::ALL {
            let i = axis.index();
            let mut delta = raw.axis(axis) as f32 - self.zero_rate[i];
            if libm::fabsf(delta) < self.threshold[i] {
                delta = 0.0;
            }
            dps[i] = dps_per_digit * delta;
        }
        dps.into()
    }
}

/// Running sums for the mean and population standard deviation per axis.
#[derive(Debug, Default, Copy, Clone)]
pub struct Accumulator {
    samples: u32,
    sum: [i64; 3],
    sum_of_squares: [i64; 3],
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, sample: &GyroRawSample) {
        self.samples += 1;
        for axis in Axis::ALL {
            let v = sample.axis(axis) as i64;
            self.sum[axis.index()] += v;
            self.sum_of_squares[axis.index()] += v * v;
        }
    }

    pub fn samples(&self) -> u32 {
        self.samples
    }

    /// `zero_rate = mean`, `threshold = stddev * sigma_multiplier` using
    /// `stddev = sqrt((Σx² - (Σx)²/n) / n)`. An empty accumulator gives a zero profile.
    pub fn profile(&self, sigma_multiplier: f32) -> CalibrationProfile {
        let mut profile = CalibrationProfile::default();
        if self.samples == 0 {
            return profile;
        }
        let n = self.samples as f64;
        for i in 0..3 {
            let sum = self.sum[i] as f64;
            let variance = (self.sum_of_squares[i] as f64 - sum * sum / n) / n;
            // rounding may leave a tiny negative variance for constant input
            let stddev = libm::sqrt(variance.max(0.0));
            profile.zero_rate[i] = (sum / n) as f32;
            profile.threshold[i] = (stddev * sigma_multiplier as f64) as f32;
        }
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accumulate(samples: impl Iterator<Item = GyroRawSample>) -> Accumulator {
        let mut acc = Accumulator::new();
        samples.for_each(|s| acc.add(&s));
        acc
    }

    #[test]
    fn identical_samples_have_no_threshold() {
        let acc = accumulate((0..500).map(|_| GyroRawSample::new(42, -7, 0)));
        let profile = acc.profile(3.0);
        assert_eq!([42.0, -7.0, 0.0], profile.zero_rate);
        assert_eq!([0.0; 3], profile.threshold);

        let reading = profile.apply(&GyroRawSample::new(42, -7, 0), 0.00875);
        assert_eq!(GyroReading::default(), reading);
    }

    #[test]
    fn alternating_samples_use_population_stddev() {
        let acc = accumulate((0..500).map(|i| {
            let d = if i % 2 == 0 { -1 } else { 1 };
            GyroRawSample::new(100 + d, -300 + 2 * d, 0)
        }));
        let profile = acc.profile(3.0);
        assert_eq!([100.0, -300.0, 0.0], profile.zero_rate);
        assert_eq!([3.0, 6.0, 0.0], profile.threshold);
    }

    #[test]
    fn sigma_multiplier_scales_threshold() {
        let acc = accumulate((0..10).map(|i| GyroRawSample::new(if i % 2 == 0 { 9 } else { 11 }, 0, 0)));
        assert_eq!(1.0, acc.profile(1.0).threshold[0]);
        assert_eq!(5.0, acc.profile(5.0).threshold[0]);
    }

    #[test]
    fn deviations_below_threshold_are_zeroed() {
        let profile = CalibrationProfile {
            zero_rate: [10.0, 10.0, 10.0],
            threshold: [3.0, 3.0, 3.0],
        };
        let reading = profile.apply(&GyroRawSample::new(12, 13, -110), 0.07);
        assert_eq!(0.0, reading.x);
        assert!((reading.y - 0.21).abs() < 1e-6, "{}", reading.y);
        assert!((reading.z + 8.4).abs() < 1e-4, "{}", reading.z);
    }

    #[test]
    fn empty_accumulator() {
        assert_eq!(CalibrationProfile::default(), Accumulator::new().profile(3.0));
    }
}
