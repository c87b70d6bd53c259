//! Display-side motion smoothing.
//!
//! The engine's scalar is authoritative; the animator only eases the
//! *rendered* scalar toward it. Nothing here ever writes back into the
//! engine, so scripted motion can never be re-read as input.
//!
//! ```ignore
//! use nelbac_tui::motion::ScalarAnimator;
//!
//! let mut animator = ScalarAnimator::new(config.ui.motion.clone());
//!
//! // Each frame: chase the engine, then sample the eased position
//! animator.follow(engine.scalar());
//! let displayed = animator.update();
//! ```

pub mod animator;
pub mod easing;

pub use animator::ScalarAnimator;
pub use easing::EasingTypeExt;

use std::time::Duration;

use nelbac_core::MotionConfig;

/// Extension trait for MotionConfig with utility methods
pub trait MotionConfigExt {
    /// Get animation duration as Duration
    fn animation_duration(&self) -> Duration;

    /// Get tick duration for animation FPS
    fn animation_tick_duration(&self) -> Duration;

    /// Check if smooth motion is effectively enabled
    fn is_smooth(&self) -> bool;
}

impl MotionConfigExt for MotionConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_smooth() {
        let mut config = MotionConfig::default();
        assert!(config.is_smooth());

        config.smooth_enabled = false;
        assert!(!config.is_smooth());

        config.smooth_enabled = true;
        config.animation_duration_ms = 0;
        assert!(!config.is_smooth());
    }

    #[test]
    fn test_tick_duration_fallback() {
        let config = MotionConfig {
            animation_fps: 0,
            ..Default::default()
        };
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(16));
    }
}
