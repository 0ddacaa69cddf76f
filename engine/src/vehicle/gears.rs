//! Gear Table
//!
//! Static per-gear data for the drivetrain: the gear sequence
//! `R, N, 1, 2, 3, 4, 5, 6`, the optimal speed band of each forward gear,
//! and the ratio factor that scales the vehicle's absolute top speed.
//!
//! Two different "ceilings" exist per forward gear and both matter:
//!
//! - The **acceleration ceiling** (`top_speed * ratio`, in m/s) is the hard
//!   cap the throttle can push the vehicle to in that gear.
//! - The **band ceiling** (`band.max_kmh`) is the over-rev threshold; shifting
//!   into a gear while above it triggers engine braking toward it.

/// Number of entries in the gear sequence (R, N, 1..6).
pub const GEAR_COUNT: usize = 8;

/// Number of forward gears (1..6).
pub const FORWARD_GEAR_COUNT: usize = 6;

/// Index of reverse in the gear sequence.
pub const REVERSE_INDEX: usize = 0;

/// Index of neutral in the gear sequence. Vehicles start here.
pub const NEUTRAL_INDEX: usize = 1;

/// Index of the first forward gear.
pub const FIRST_FORWARD_INDEX: usize = 2;

/// Display labels for the gear sequence, indexed by gear index.
pub const GEAR_LABELS: [&str; GEAR_COUNT] = ["R", "N", "1", "2", "3", "4", "5", "6"];

static_assertions::const_assert_eq!(GEAR_COUNT, FORWARD_GEAR_COUNT + 2);
static_assertions::const_assert!(FIRST_FORWARD_INDEX == NEUTRAL_INDEX + 1);

/// Conversion factor from meters/second to kilometers/hour.
pub const MS_TO_KMH: f32 = 3.6;

/// Optimal speed band of a forward gear, in km/h.
///
/// Inside the band the gear pulls at near-full efficiency; below it the
/// engine strains, above it the gear is over-revved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GearBand {
    pub min_kmh: f32,
    pub max_kmh: f32,
}

/// Static drivetrain data. Immutable for the lifetime of a session.
#[derive(Clone, Debug)]
pub struct GearTable {
    /// Absolute top speed in m/s (250 km/h).
    pub top_speed: f32,
    /// Reverse top speed in m/s (35 km/h).
    pub reverse_top_speed: f32,
    /// Optimal bands for gears 1..6.
    bands: [GearBand; FORWARD_GEAR_COUNT],
    /// Ratio factors for gears 1..6, strictly increasing, last one 1.0.
    ratios: [f32; FORWARD_GEAR_COUNT],
}

impl Default for GearTable {
    fn default() -> Self {
        Self {
            top_speed: 69.44,        // 250 km/h
            reverse_top_speed: 9.72, // 35 km/h
            bands: [
                GearBand { min_kmh: 0.0, max_kmh: 50.0 },
                GearBand { min_kmh: 20.0, max_kmh: 90.0 },
                GearBand { min_kmh: 40.0, max_kmh: 130.0 },
                GearBand { min_kmh: 60.0, max_kmh: 170.0 },
                GearBand { min_kmh: 80.0, max_kmh: 210.0 },
                GearBand { min_kmh: 100.0, max_kmh: 250.0 },
            ],
            ratios: [0.2, 0.35, 0.5, 0.7, 0.85, 1.0],
        }
    }
}

impl GearTable {
    /// Create the default gear table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp an arbitrary index into the legal gear range.
    #[inline]
    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(GEAR_COUNT - 1)
    }

    /// Display label for a gear index. Out-of-range indices clamp to `6`.
    #[inline]
    pub fn label(&self, index: usize) -> &'static str {
        GEAR_LABELS[self.clamp_index(index)]
    }

    #[inline]
    pub fn is_reverse(&self, index: usize) -> bool {
        index == REVERSE_INDEX
    }

    #[inline]
    pub fn is_neutral(&self, index: usize) -> bool {
        index == NEUTRAL_INDEX
    }

    #[inline]
    pub fn is_forward(&self, index: usize) -> bool {
        index >= FIRST_FORWARD_INDEX && index < GEAR_COUNT
    }

    /// Optimal band of a forward gear. `None` for R and N.
    pub fn band(&self, index: usize) -> Option<GearBand> {
        if self.is_forward(index) {
            Some(self.bands[index - FIRST_FORWARD_INDEX])
        } else {
            None
        }
    }

    /// Ratio factor of a forward gear. `None` for R and N.
    pub fn ratio(&self, index: usize) -> Option<f32> {
        if self.is_forward(index) {
            Some(self.ratios[index - FIRST_FORWARD_INDEX])
        } else {
            None
        }
    }

    /// Hard cap the throttle can reach in this gear, as a signed m/s value:
    /// negative for reverse, zero for neutral, positive for forward gears.
    pub fn accel_ceiling(&self, index: usize) -> f32 {
        if self.is_reverse(index) {
            -self.reverse_top_speed
        } else if let Some(ratio) = self.ratio(index) {
            self.top_speed * ratio
        } else {
            0.0
        }
    }

    /// Over-rev threshold of a forward gear in km/h. `None` for R and N.
    pub fn band_ceiling_kmh(&self, index: usize) -> Option<f32> {
        self.band(index).map(|band| band.max_kmh)
    }

    /// Acceleration efficiency of a gear at the given speed.
    ///
    /// 0.1 below the band (straining), 0.3 above it (over-revved), and a
    /// linear 0.7 -> 1.0 ramp across the band. Non-forward gears return 1.0;
    /// they have no band and their speed handling ignores efficiency anyway.
    pub fn efficiency(&self, index: usize, speed_kmh: f32) -> f32 {
        let Some(band) = self.band(index) else {
            return 1.0;
        };
        if speed_kmh < band.min_kmh {
            0.1
        } else if speed_kmh > band.max_kmh {
            0.3
        } else if band.max_kmh > band.min_kmh {
            let ratio = (speed_kmh - band.min_kmh) / (band.max_kmh - band.min_kmh);
            0.7 + 0.3 * ratio
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gear_labels_sequence() {
        let table = GearTable::new();
        assert_eq!(table.label(REVERSE_INDEX), "R");
        assert_eq!(table.label(NEUTRAL_INDEX), "N");
        assert_eq!(table.label(FIRST_FORWARD_INDEX), "1");
        assert_eq!(table.label(GEAR_COUNT - 1), "6");
    }

    #[test]
    fn test_label_clamps_out_of_range_index() {
        let table = GearTable::new();
        assert_eq!(table.label(99), "6");
    }

    #[test]
    fn test_bands_monotonically_increasing() {
        let table = GearTable::new();
        for i in FIRST_FORWARD_INDEX..GEAR_COUNT - 1 {
            let lower = table.band(i).unwrap();
            let upper = table.band(i + 1).unwrap();
            assert!(upper.min_kmh >= lower.min_kmh);
            assert!(upper.max_kmh > lower.max_kmh);
        }
    }

    #[test]
    fn test_ratios_strictly_increasing() {
        let table = GearTable::new();
        for i in FIRST_FORWARD_INDEX..GEAR_COUNT - 1 {
            assert!(table.ratio(i + 1).unwrap() > table.ratio(i).unwrap());
        }
        assert_eq!(table.ratio(GEAR_COUNT - 1), Some(1.0));
    }

    #[test]
    fn test_accel_ceiling_per_gear_kind() {
        let table = GearTable::new();
        assert!((table.accel_ceiling(REVERSE_INDEX) - (-9.72)).abs() < 0.001);
        assert_eq!(table.accel_ceiling(NEUTRAL_INDEX), 0.0);
        // Gear 3: 69.44 * 0.5 = 34.72 m/s (125 km/h)
        assert!((table.accel_ceiling(4) - 34.72).abs() < 0.001);
        // Gear 6 reaches the absolute top speed
        assert!((table.accel_ceiling(7) - 69.44).abs() < 0.001);
    }

    #[test]
    fn test_band_ceiling_for_engine_braking() {
        let table = GearTable::new();
        // Gear 3 over-rev threshold is 130 km/h
        assert_eq!(table.band_ceiling_kmh(4), Some(130.0));
        assert_eq!(table.band_ceiling_kmh(REVERSE_INDEX), None);
        assert_eq!(table.band_ceiling_kmh(NEUTRAL_INDEX), None);
    }

    #[test]
    fn test_efficiency_below_band() {
        let table = GearTable::new();
        // Gear 6 band starts at 100 km/h
        assert!((table.efficiency(7, 50.0) - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_efficiency_above_band() {
        let table = GearTable::new();
        // Gear 1 band ends at 50 km/h
        assert!((table.efficiency(2, 80.0) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_efficiency_ramps_across_band() {
        let table = GearTable::new();
        // Gear 2 band is 20-90 km/h: 0.7 at the bottom, 1.0 at the top
        assert!((table.efficiency(3, 20.0) - 0.7).abs() < 1e-6);
        assert!((table.efficiency(3, 90.0) - 1.0).abs() < 1e-6);
        let mid = table.efficiency(3, 55.0);
        assert!(mid > 0.7 && mid < 1.0);
    }
}
