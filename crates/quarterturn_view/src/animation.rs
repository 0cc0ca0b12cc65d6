use std::f32::consts::FRAC_PI_2;

use quarterturn_core::LayerRotation;
use quarterturn_prefs::{AnimationPreferences, InterpolateFn};

/// State of a quarter-turn animation, advanced one step at a time by an
/// external scheduler.
///
/// The animation is cosmetic. The puzzle state is only changed once the
/// animation is complete.
#[derive(Debug, Clone, PartialEq)]
pub struct TwistAnimation {
    rotation: LayerRotation,
    step: u32,
    total_steps: u32,
    interpolation: InterpolateFn,
}
impl TwistAnimation {
    /// Starts a new animation for `rotation`.
    pub fn new(rotation: LayerRotation, prefs: &AnimationPreferences) -> Self {
        Self {
            rotation,
            step: 0,
            total_steps: prefs.clamped_twist_steps(),
            interpolation: prefs.twist_interpolation,
        }
    }

    /// Returns the rotation being animated.
    pub fn rotation(&self) -> &LayerRotation {
        &self.rotation
    }
    /// Consumes the animation, returning the rotation.
    pub fn into_rotation(self) -> LayerRotation {
        self.rotation
    }

    /// Steps the animation forward. Returns whether the animation is complete.
    pub fn proceed(&mut self) -> bool {
        self.step = (self.step + 1).min(self.total_steps);
        self.is_complete()
    }
    /// Returns whether the final step has been reached.
    pub fn is_complete(&self) -> bool {
        self.step >= self.total_steps
    }

    /// Returns the progress through the animation, from 0.0 to 1.0.
    pub fn progress(&self) -> f32 {
        self.step as f32 / self.total_steps as f32
    }
    /// Returns the current rotation angle of the layer in radians.
    pub fn angle(&self) -> f32 {
        self.rotation.sign.to_f32() * FRAC_PI_2 * self.interpolation.interpolate(self.progress())
    }

    /// Returns the number of steps taken so far.
    pub fn step(&self) -> u32 {
        self.step
    }
    /// Returns the total number of steps.
    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }
}

#[cfg(test)]
mod tests {
    use quarterturn_core::LayerTurn;

    use super::*;

    fn rotation(s: &str) -> LayerRotation {
        s.parse::<LayerTurn>().expect("valid turn").to_rotation()
    }

    #[test]
    fn test_equal_steps() {
        let prefs = AnimationPreferences::default();
        let mut anim = TwistAnimation::new(rotation("y1+"), &prefs);
        assert_eq!(0.0, anim.angle());
        for i in 1..=20 {
            let done = anim.proceed();
            assert_eq!(i == 20, done);
            let expected = FRAC_PI_2 / 20.0 * i as f32;
            assert!((anim.angle() - expected).abs() < 1e-5, "step {i}");
        }
        assert!(anim.proceed());
        assert_eq!(20, anim.step());
    }

    #[test]
    fn test_negative_angle() {
        let prefs = AnimationPreferences::default();
        let mut anim = TwistAnimation::new(rotation("x-1-"), &prefs);
        while !anim.proceed() {}
        assert!((anim.angle() + FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_zero_steps_still_terminates() {
        let prefs = AnimationPreferences {
            twist_steps: 0,
            ..Default::default()
        };
        let mut anim = TwistAnimation::new(rotation("z0+"), &prefs);
        assert_eq!(1, anim.total_steps());
        assert!(!anim.is_complete());
        assert!(anim.proceed());
    }
}
