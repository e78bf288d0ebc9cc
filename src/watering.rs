//! Watering decision for a raw soil probe reading.

/// Raw reading at or below which the soil counts as dry.
pub const DEFAULT_DRY_THRESHOLD: u16 = 200;

/// Time between powering a probe and sampling it.
pub const DEFAULT_SETTLE_MS: u32 = 2000;

/// Pause between two full sweeps.
pub const DEFAULT_SWEEP_PAUSE_MS: u32 = 0;

/// Full scale of the 10-bit raw readings.
pub const ADC_FULL_SCALE: u16 = 1023;

/// A probe needs watering when its raw reading is at or below the dry
/// threshold. The boundary reading itself counts as dry.
pub fn needs_watering(raw: u16, dry_threshold: u16) -> bool {
    raw <= dry_threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_below_threshold_needs_watering() {
        assert!(needs_watering(199, DEFAULT_DRY_THRESHOLD));
    }

    #[test]
    fn reading_at_threshold_needs_watering() {
        assert!(needs_watering(200, DEFAULT_DRY_THRESHOLD));
    }

    #[test]
    fn reading_above_threshold_is_moist_enough() {
        assert!(!needs_watering(201, DEFAULT_DRY_THRESHOLD));
    }

    #[test]
    fn bone_dry_probe_needs_watering() {
        assert!(needs_watering(0, DEFAULT_DRY_THRESHOLD));
    }

    #[test]
    fn saturated_probe_is_moist_enough() {
        assert!(!needs_watering(ADC_FULL_SCALE, DEFAULT_DRY_THRESHOLD));
    }

    #[test]
    fn custom_threshold_moves_the_boundary() {
        assert!(needs_watering(500, 500));
        assert!(!needs_watering(501, 500));
    }
}
