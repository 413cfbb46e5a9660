//! Reduced-motion preference.
//!
//! Read once at startup (from `neonkit.json`) and handed to whatever renders,
//! instead of every control sensing it on its own.

/// Process-wide motion capability flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionPreference {
    reduced: bool,
}

impl MotionPreference {
    pub fn new(reduced: bool) -> Self {
        Self { reduced }
    }

    pub fn reduced_motion_preferred(&self) -> bool {
        self.reduced
    }

    /// Whether the glow pulse is lit on animation frame `tick`.
    ///
    /// With reduced motion the glow is steady.
    pub fn glow_on(&self, tick: u64) -> bool {
        self.reduced || (tick / 5) % 2 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_motion_glow_is_steady() {
        let motion = MotionPreference::new(true);
        assert!((0..20).all(|tick| motion.glow_on(tick)));
    }

    #[test]
    fn test_glow_pulses_by_default() {
        let motion = MotionPreference::default();
        assert!(!motion.reduced_motion_preferred());
        assert!(motion.glow_on(0));
        assert!(!motion.glow_on(5));
        assert!(motion.glow_on(10));
    }
}
