//! Evenly spaced sample points across the input range.

use crate::models::TableConfig;

/// One sample point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Position in the schedule, from 0
    pub index: usize,
    /// Unrounded position
    pub position: f64,
    /// Rounded value that gets encoded
    pub value: u8,
}

impl Sample {
    /// Label printed next to the literal: the truncated position.
    pub fn annotation(&self) -> u32 {
        self.position.trunc() as u32
    }
}

/// Iterator over the sample points of a range.
///
/// Positions accumulate by repeated addition of the step, so the final
/// default position lands just below 235 and is annotated 234. Halves round
/// to even.
#[derive(Debug, Clone)]
pub struct SampleSchedule {
    max: u8,
    points: usize,
    step: f64,
    position: f64,
    index: usize,
}

impl SampleSchedule {
    pub fn new(min: u8, max: u8, points: usize) -> Self {
        let step = if points > 1 {
            f64::from(max.saturating_sub(min)) / (points - 1) as f64
        } else {
            0.0
        };

        Self {
            max,
            points,
            step,
            position: f64::from(min),
            index: 0,
        }
    }

    pub fn from_config(config: &TableConfig) -> Self {
        Self::new(config.min, config.max, config.points)
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Iterator for SampleSchedule {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        if self.index >= self.points {
            return None;
        }

        let rounded = self.position.round_ties_even();
        if rounded > f64::from(self.max) {
            self.index = self.points;
            return None;
        }

        let sample = Sample {
            index: self.index,
            position: self.position,
            value: rounded as u8,
        };
        self.position += self.step;
        self.index += 1;
        Some(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule() {
        let samples: Vec<Sample> = SampleSchedule::from_config(&TableConfig::default()).collect();
        assert_eq!(samples.len(), 32);

        assert_eq!(samples[0].value, 16);
        assert_eq!(samples[0].annotation(), 16);

        let last = samples.last().unwrap();
        assert_eq!(last.value, 235);
        assert_eq!(last.annotation(), 234);

        let values: Vec<u8> = samples.iter().map(|s| s.value).collect();
        assert_eq!(
            &values[..10],
            &[16, 23, 30, 37, 44, 51, 58, 65, 73, 80]
        );
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_indices_are_sequential() {
        for (i, sample) in SampleSchedule::new(16, 235, 32).enumerate() {
            assert_eq!(sample.index, i);
        }
    }

    #[test]
    fn test_two_points_hit_endpoints() {
        let samples: Vec<Sample> = SampleSchedule::new(0, 255, 2).collect();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].value, 0);
        assert_eq!(samples[1].value, 255);
    }

    #[test]
    fn test_degenerate_range() {
        let samples: Vec<Sample> = SampleSchedule::new(100, 100, 4).collect();
        assert_eq!(samples.len(), 4);
        assert!(samples.iter().all(|s| s.value == 100));
    }

    #[test]
    fn test_halves_round_to_even() {
        let values: Vec<u8> = SampleSchedule::new(0, 3, 7).map(|s| s.value).collect();
        assert_eq!(values, vec![0, 0, 1, 2, 2, 2, 3]);
    }

    #[test]
    fn test_dense_schedule_is_bounded() {
        let samples: Vec<Sample> = SampleSchedule::new(10, 12, 9).collect();
        assert_eq!(samples.len(), 9);
        assert!(samples.iter().all(|s| (10..=12).contains(&s.value)));
    }
}
