//! Random composition sampling.
//!
//! [`CompositionSampler::sample`] is a pure function of the random source it
//! is handed: the same generator state always yields the same
//! configuration. Values are drawn in a fixed order (petal count, size,
//! red, green, blue, line width, center x, center y), which is part of the
//! reproducibility contract for seeded batches.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::color::Rgb8;
use crate::error::{Result, RosetteError};
use crate::rosette::{CompositionConfig, LINE_WIDTH_RANGE, PETAL_COUNT_RANGE};

/// Default petal arc radius range.
pub const SIZE_RANGE: RangeInclusive<u32> = 80..=180;
/// Default color channel range.
pub const CHANNEL_RANGE: RangeInclusive<u8> = 0..=255;
/// Half extents of the placement area for the default canvas.
pub const DEFAULT_HALF_EXTENTS: (u32, u32) = (450, 300);

/// Ranges each composition parameter is drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleRanges {
    pub petal_count: RangeInclusive<u32>,
    pub size: RangeInclusive<u32>,
    pub red: RangeInclusive<u8>,
    pub green: RangeInclusive<u8>,
    pub blue: RangeInclusive<u8>,
    pub line_width: RangeInclusive<u32>,
}

impl Default for SampleRanges {
    fn default() -> Self {
        Self {
            petal_count: PETAL_COUNT_RANGE,
            size: SIZE_RANGE,
            red: CHANNEL_RANGE,
            green: CHANNEL_RANGE,
            blue: CHANNEL_RANGE,
            line_width: LINE_WIDTH_RANGE,
        }
    }
}

impl SampleRanges {
    /// Reject ranges that are empty or would produce undrawable configs.
    pub fn validate(&self) -> Result<()> {
        non_empty("petal_count", &self.petal_count)?;
        non_empty("size", &self.size)?;
        non_empty("red", &self.red)?;
        non_empty("green", &self.green)?;
        non_empty("blue", &self.blue)?;
        non_empty("line_width", &self.line_width)?;
        within("petal_count", &self.petal_count, &PETAL_COUNT_RANGE)?;
        within("line_width", &self.line_width, &LINE_WIDTH_RANGE)?;
        if *self.size.start() == 0 {
            return Err(RosetteError::InvalidRange {
                name: "size",
                reason: "size must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

fn non_empty<T: PartialOrd + std::fmt::Debug>(
    name: &'static str,
    range: &RangeInclusive<T>,
) -> Result<()> {
    if range.is_empty() {
        return Err(RosetteError::InvalidRange {
            name,
            reason: format!("empty range {range:?}"),
        });
    }
    Ok(())
}

fn within(
    name: &'static str,
    range: &RangeInclusive<u32>,
    allowed: &RangeInclusive<u32>,
) -> Result<()> {
    if !allowed.contains(range.start()) || !allowed.contains(range.end()) {
        return Err(RosetteError::InvalidRange {
            name,
            reason: format!("{range:?} is not inside the drawable range {allowed:?}"),
        });
    }
    Ok(())
}

/// Draws random, always-drawable compositions.
#[derive(Debug, Clone)]
pub struct CompositionSampler {
    ranges: SampleRanges,
    half_extents: (u32, u32),
}

impl Default for CompositionSampler {
    fn default() -> Self {
        Self {
            ranges: SampleRanges::default(),
            half_extents: DEFAULT_HALF_EXTENTS,
        }
    }
}

impl CompositionSampler {
    /// Sampler over `ranges`, placing centers inside `half_extents`.
    pub fn new(ranges: SampleRanges, half_extents: (u32, u32)) -> Result<Self> {
        ranges.validate()?;
        Ok(Self {
            ranges,
            half_extents,
        })
    }

    pub fn ranges(&self) -> &SampleRanges {
        &self.ranges
    }

    pub fn half_extents(&self) -> (u32, u32) {
        self.half_extents
    }

    /// Largest center offset on an axis of half extent `half` that keeps a
    /// petal of radius `size` on the canvas; 0 when it cannot fit.
    pub fn placement_limit(half: u32, size: u32) -> i32 {
        half.saturating_sub(size).min(i32::MAX as u32) as i32
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> CompositionConfig {
        let r = &self.ranges;
        let petal_count = rng.gen_range(r.petal_count.clone());
        let size = rng.gen_range(r.size.clone());
        let red = rng.gen_range(r.red.clone());
        let green = rng.gen_range(r.green.clone());
        let blue = rng.gen_range(r.blue.clone());
        let line_width = rng.gen_range(r.line_width.clone());

        let max_x = Self::placement_limit(self.half_extents.0, size);
        let max_y = Self::placement_limit(self.half_extents.1, size);
        let x = rng.gen_range(-max_x..=max_x);
        let y = rng.gen_range(-max_y..=max_y);

        CompositionConfig {
            petal_count,
            size,
            color: Rgb8::new(red, green, blue),
            line_width,
            center: (x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_same_seed_same_sequence() {
        let sampler = CompositionSampler::default();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            assert_eq!(sampler.sample(&mut a), sampler.sample(&mut b));
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let sampler = CompositionSampler::default();
        let mut a = StdRng::seed_from_u64(1);
        let mut b = StdRng::seed_from_u64(2);
        let sa: Vec<_> = (0..10).map(|_| sampler.sample(&mut a)).collect();
        let sb: Vec<_> = (0..10).map(|_| sampler.sample(&mut b)).collect();
        assert_ne!(sa, sb);
    }

    #[test]
    fn test_samples_are_drawable_and_placed() {
        let sampler = CompositionSampler::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2000 {
            let c = sampler.sample(&mut rng);
            assert!(c.validate().is_ok(), "{c}");
            assert!(SIZE_RANGE.contains(&c.size));
            let max_x = 450 - c.size as i32;
            let max_y = (300 - c.size as i32).max(0);
            assert!(c.center.0.abs() <= max_x, "{c}");
            assert!(c.center.1.abs() <= max_y, "{c}");
        }
    }

    #[test]
    fn test_oversized_petals_are_centered_on_that_axis() {
        let ranges = SampleRanges {
            size: 400..=420,
            ..SampleRanges::default()
        };
        let sampler = CompositionSampler::new(ranges, (450, 300)).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let c = sampler.sample(&mut rng);
            assert_eq!(c.center.1, 0);
            assert!(c.center.0.abs() <= 50);
        }
    }

    #[test]
    fn test_placement_limit() {
        assert_eq!(CompositionSampler::placement_limit(450, 180), 270);
        assert_eq!(CompositionSampler::placement_limit(300, 300), 0);
        assert_eq!(CompositionSampler::placement_limit(300, 301), 0);
    }

    #[test]
    fn test_fixed_ranges_give_fixed_values() {
        let ranges = SampleRanges {
            petal_count: 5..=5,
            size: 100..=100,
            red: 1..=1,
            green: 2..=2,
            blue: 3..=3,
            line_width: 4..=4,
        };
        let sampler = CompositionSampler::new(ranges, (100, 100)).unwrap();
        let c = sampler.sample(&mut StdRng::seed_from_u64(0));
        assert_eq!(
            (c.petal_count, c.size, c.color, c.line_width, c.center),
            (5, 100, Rgb8::new(1, 2, 3), 4, (0, 0))
        );
    }

    #[test]
    fn test_invalid_ranges_rejected() {
        let (hi, lo) = (200u8, 100u8);
        let cases = [
            SampleRanges {
                petal_count: 2..=6,
                ..SampleRanges::default()
            },
            SampleRanges {
                line_width: 1..=9,
                ..SampleRanges::default()
            },
            SampleRanges {
                size: 0..=10,
                ..SampleRanges::default()
            },
            SampleRanges {
                red: hi..=lo,
                ..SampleRanges::default()
            },
        ];
        for ranges in cases {
            let err = CompositionSampler::new(ranges, DEFAULT_HALF_EXTENTS).unwrap_err();
            assert!(matches!(err, RosetteError::InvalidRange { .. }), "{err}");
        }
    }
}
