//! Scalar animation controller easing the rendered rotation toward the
//! engine's authoritative value.

use std::time::{Duration, Instant};

use nelbac_core::MotionConfig;

use super::easing::{EasingType, EasingTypeExt};
use super::MotionConfigExt;

/// Below this angular distance the animator tracks the target directly
/// instead of starting an animation (continuous auto-play drift).
const SNAP_THRESHOLD_DEG: f64 = 6.0;

/// Active animation state
#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: f64,
    /// Unwrapped target; may lie outside [0, 360) to take the shortest
    /// angular path
    to: f64,
    duration: Duration,
    easing: EasingType,
}

/// Eases a displayed angle (degrees) toward a moving target.
#[derive(Debug, Clone)]
pub struct ScalarAnimator {
    animation: Option<ActiveAnimation>,
    config: MotionConfig,
    current: f64,
}

impl ScalarAnimator {
    pub fn new(config: MotionConfig) -> Self {
        Self {
            animation: None,
            config,
            current: 0.0,
        }
    }

    /// Current displayed angle, normalized to [0, 360).
    #[inline]
    pub fn current(&self) -> f64 {
        self.current.rem_euclid(360.0)
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Set the displayed angle immediately (no animation)
    pub fn set(&mut self, angle: f64) {
        self.animation = None;
        self.current = angle.rem_euclid(360.0);
    }

    /// Chase a new target angle.
    ///
    /// Small drifts (auto-play) are tracked directly; larger jumps start
    /// an eased animation along the shortest angular path. Retargeting
    /// an in-flight animation restarts from the current displayed
    /// position, so the last request wins.
    pub fn follow(&mut self, target: f64) {
        let diff = shortest_arc(self.current(), target);

        if !self.config.is_smooth() || diff.abs() < SNAP_THRESHOLD_DEG {
            if self.animation.is_none() {
                self.current = target.rem_euclid(360.0);
            } else if let Some(anim) = &self.animation {
                // Already animating; only retarget when the destination moved
                let drift = shortest_arc(anim.to.rem_euclid(360.0), target);
                if drift.abs() >= SNAP_THRESHOLD_DEG {
                    self.restart_toward(target);
                }
            }
            return;
        }

        let retarget = match &self.animation {
            Some(anim) => shortest_arc(anim.to.rem_euclid(360.0), target).abs() > 1e-6,
            None => true,
        };
        if retarget {
            self.restart_toward(target);
        }
    }

    fn restart_toward(&mut self, target: f64) {
        let from = self.current();
        self.animation = Some(ActiveAnimation {
            start: Instant::now(),
            from,
            to: from + shortest_arc(from, target),
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    /// Advance the animation and return the current displayed angle.
    /// Call once per frame.
    pub fn update(&mut self) -> f64 {
        if let Some(anim) = &self.animation {
            let elapsed = anim.start.elapsed();
            if elapsed >= anim.duration {
                self.current = anim.to.rem_euclid(360.0);
                self.animation = None;
            } else {
                let t = if anim.duration.is_zero() {
                    1.0
                } else {
                    elapsed.as_secs_f64() / anim.duration.as_secs_f64()
                };
                let eased = anim.easing.apply(t);
                self.current = anim.from + (anim.to - anim.from) * eased;
            }
        }

        self.current()
    }
}

/// Signed shortest angular distance from `from` to `to`, in (-180, 180].
fn shortest_arc(from: f64, to: f64) -> f64 {
    let diff = (to - from).rem_euclid(360.0);
    if diff > 180.0 {
        diff - 360.0
    } else {
        diff
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_config() -> MotionConfig {
        MotionConfig {
            smooth_enabled: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_shortest_arc() {
        assert!((shortest_arc(10.0, 20.0) - 10.0).abs() < 1e-9);
        assert!((shortest_arc(350.0, 10.0) - 20.0).abs() < 1e-9);
        assert!((shortest_arc(10.0, 350.0) + 20.0).abs() < 1e-9);
        assert!((shortest_arc(0.0, 180.0) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_instant_follow_when_smooth_disabled() {
        let mut animator = ScalarAnimator::new(instant_config());
        animator.follow(237.0);
        assert!((animator.update() - 237.0).abs() < 1e-9);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_large_jump_starts_animation() {
        let mut animator = ScalarAnimator::new(MotionConfig::default());
        animator.follow(180.0);
        assert!(animator.is_animating());
    }

    #[test]
    fn test_small_drift_tracks_directly() {
        let mut animator = ScalarAnimator::new(MotionConfig::default());
        animator.follow(2.0);
        assert!(!animator.is_animating());
        assert!((animator.update() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let config = MotionConfig {
            animation_duration_ms: 0,
            ..Default::default()
        };
        let mut animator = ScalarAnimator::new(config);
        animator.follow(180.0);
        assert!((animator.update() - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_set_cancels_animation() {
        let mut animator = ScalarAnimator::new(MotionConfig::default());
        animator.follow(180.0);
        animator.set(90.0);
        assert!(!animator.is_animating());
        assert!((animator.current() - 90.0).abs() < 1e-9);
    }
}
