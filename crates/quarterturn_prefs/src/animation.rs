use serde::{Deserialize, Serialize};

pub use interpolation::InterpolateFn;

/// Upper bound on the number of steps in a twist animation.
pub const MAX_TWIST_STEPS: u32 = 600;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationPreferences {
    /// Number of frames in a quarter-turn animation.
    pub twist_steps: u32,
    pub twist_interpolation: InterpolateFn,
}
impl Default for AnimationPreferences {
    fn default() -> Self {
        Self {
            twist_steps: 20,
            twist_interpolation: InterpolateFn::default(),
        }
    }
}
impl AnimationPreferences {
    /// Returns the step count, clamped so that an animation always finishes.
    pub fn clamped_twist_steps(&self) -> u32 {
        self.twist_steps.clamp(1, MAX_TWIST_STEPS)
    }
}

pub mod interpolation {
    //! Interpolation functions.

    use std::f32::consts::PI;

    use serde::{Deserialize, Serialize};
    use strum::VariantArray;

    /// Function that maps a float from the range 0.0 to 1.0 to another float
    /// from 0.0 to 1.0.
    #[derive(
        Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash, VariantArray,
    )]
    #[serde(rename_all = "snake_case")]
    pub enum InterpolateFn {
        /// Equal steps.
        #[default]
        Lerp,
        Cosine,
        Cubic,
    }

    impl InterpolateFn {
        /// Returns the interpolation value in the range [0, 1] for `t` in the
        /// range [0, 1].
        pub fn interpolate(self, t: f32) -> f32 {
            let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
            match self {
                Self::Lerp => t,

                Self::Cosine => (1.0 - (t * PI).cos()) / 2.0,

                Self::Cubic => (3.0 - 2.0 * t) * t * t,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::VariantArray;

    use super::*;

    #[test]
    fn test_interpolation_endpoints() {
        for &f in InterpolateFn::VARIANTS {
            assert!(f.interpolate(0.0).abs() < 1e-6, "{f:?}");
            assert!((f.interpolate(1.0) - 1.0).abs() < 1e-6, "{f:?}");
            assert!((f.interpolate(f32::NAN) - 1.0).abs() < 1e-6, "{f:?}");
        }
    }

    #[test]
    fn test_clamped_steps() {
        let mut prefs = AnimationPreferences::default();
        assert_eq!(20, prefs.clamped_twist_steps());
        prefs.twist_steps = 0;
        assert_eq!(1, prefs.clamped_twist_steps());
        prefs.twist_steps = u32::MAX;
        assert_eq!(MAX_TWIST_STEPS, prefs.clamped_twist_steps());
    }
}
