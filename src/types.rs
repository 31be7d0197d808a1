//! Shared types used across DPRES.
//! Includes the fixed `DENSITY_BUCKETS` table, `DensityBucket`, and the
//! dp-to-pixel scaling rule.

/// Baseline density; 1 dp equals 1 px at this dpi.
pub const BASELINE_DPI: u32 = 160;

/// A named density tier with its reference dots-per-inch value.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct DensityBucket {
    pub suffix: &'static str,
    pub dpi: u32,
}

/// The supported density buckets, in enumeration order.
pub const DENSITY_BUCKETS: [DensityBucket; 5] = [
    DensityBucket { suffix: "ldpi", dpi: 120 },
    DensityBucket { suffix: "mdpi", dpi: 160 },
    DensityBucket { suffix: "hdpi", dpi: 240 },
    DensityBucket { suffix: "xhdpi", dpi: 320 },
    DensityBucket { suffix: "xxhdpi", dpi: 480 },
];

impl DensityBucket {
    /// Scale a logical size in dp to physical pixels for this bucket.
    ///
    /// Rounds to the nearest integer with ties-to-even, matching the
    /// reference implementation's rounding rule.
    pub fn target_px(&self, dp: u32) -> u32 {
        (self.dpi as f64 / BASELINE_DPI as f64 * dp as f64).round_ties_even() as u32
    }
}

impl std::fmt::Display for DensityBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} dpi)", self.suffix, self.dpi)
    }
}
