//! Progress state machine reconciling auto-play, wheel input, and jump
//! requests over a single scalar and active index.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::{Error, Result};

/// How the scalar maps onto the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineMode {
    /// Scalar is a rotation in degrees, semantically mod 360
    Orbit,
    /// Scalar is a normalized scroll progress in [0, 1]
    ScrollLinked,
}

impl Default for EngineMode {
    fn default() -> Self {
        EngineMode::Orbit
    }
}

/// Current writer of the scalar.
///
/// `ProgrammaticMove` is the mutual-exclusion state between engine-driven
/// and host-driven writers: while it holds, wheel input and auto-play are
/// rejected so a scripted scroll is never re-read as a user gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionState {
    Idle,
    AutoAdvancing,
    /// A scripted move is in flight; the token identifies the latest
    /// jump so stale settle timers cannot release the guard early.
    ProgrammaticMove {
        token: u64,
    },
}

/// Command for the presentation layer, emitted on jump requests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostCommand {
    /// Animate the rendered rotation to the given angle in degrees
    RotateTo(f64),
    /// Scroll the host surface so overall progress reaches this fraction
    ScrollToFraction(f64),
}

/// Geometry readings from the host scroll surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceMetrics {
    /// Container top relative to the viewport (negative once scrolled past)
    pub container_top: f64,
    pub container_height: f64,
    pub viewport_height: f64,
}

impl SurfaceMetrics {
    /// Normalized scroll progress through the container.
    ///
    /// Clamped before the division so a container shorter than the
    /// viewport yields 0 instead of NaN.
    pub fn progress(&self) -> f64 {
        let scrollable = self.container_height - self.viewport_height;
        if scrollable <= 0.0 {
            return 0.0;
        }
        (-self.container_top / scrollable).clamp(0.0, 1.0)
    }
}

/// Single source of truth for "where are we in the sequence".
#[derive(Debug, Clone)]
pub struct ProgressEngine {
    mode: EngineMode,
    item_count: usize,
    scalar: f64,
    active_index: usize,
    /// Fraction of the current item's dwell already elapsed, in [0, 1]
    within_item_progress: f64,
    state: MotionState,
    move_token: u64,
    /// Remaining settle time of the latest programmatic move (ms).
    /// A single countdown re-armed on every jump; never stacked.
    settle_remaining_ms: f64,
    /// Remaining wheel-input cooldown (ms); absorbs trackpad momentum
    cooldown_remaining_ms: f64,
    config: EngineConfig,
}

impl ProgressEngine {
    /// Create an engine over `item_count` items.
    ///
    /// Rejects malformed configuration up front; per-frame computation
    /// is total over its domain.
    pub fn new(item_count: usize, mode: EngineMode, config: EngineConfig) -> Result<Self> {
        if item_count == 0 {
            return Err(Error::Engine("item count must be at least 1".into()));
        }
        if config.dwell_duration_ms == 0 {
            return Err(Error::Engine("dwell duration must be positive".into()));
        }
        if config.settle_delay_ms == 0 {
            return Err(Error::Engine("settle delay must be positive".into()));
        }

        Ok(Self {
            mode,
            item_count,
            scalar: 0.0,
            active_index: 0,
            within_item_progress: 0.0,
            state: MotionState::Idle,
            move_token: 0,
            settle_remaining_ms: 0.0,
            cooldown_remaining_ms: 0.0,
            config,
        })
    }

    pub fn mode(&self) -> EngineMode {
        self.mode
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// The continuous scalar: degrees in orbit mode, fraction in
    /// scroll-linked mode.
    pub fn scalar(&self) -> f64 {
        self.scalar
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn within_item_progress(&self) -> f64 {
        self.within_item_progress
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    pub fn is_programmatic_move(&self) -> bool {
        matches!(self.state, MotionState::ProgrammaticMove { .. })
    }

    /// Angular distance between consecutive items (orbit mode).
    pub fn step_degrees(&self) -> f64 {
        360.0 / self.item_count as f64
    }

    /// Item currently rotated closest to the front (180°) position.
    /// This is the derivation `active_index` caches in orbit mode.
    pub fn nearest_index(&self) -> usize {
        match self.mode {
            EngineMode::Orbit => {
                let normalized = self.scalar.rem_euclid(360.0);
                let raw = ((180.0 - normalized).rem_euclid(360.0) / self.step_degrees()).round();
                (raw as usize) % self.item_count
            }
            EngineMode::ScrollLinked => {
                let raw = self.scalar.clamp(0.0, 1.0) * self.item_count as f64;
                (raw.floor() as usize).min(self.item_count - 1)
            }
        }
    }

    /// Advance by elapsed time. Called once per animation frame.
    ///
    /// Always counts down the settle and cooldown timers; only advances
    /// the scalar when no programmatic move is in flight and the host
    /// surface is visible. Both conditions are checked freshly here, not
    /// from a frame-start snapshot, so user input accepted earlier in
    /// the same tick wins.
    pub fn advance_by_time(&mut self, dt_ms: f64, visible: bool) {
        let dt_ms = dt_ms.max(0.0);
        self.cooldown_remaining_ms = (self.cooldown_remaining_ms - dt_ms).max(0.0);

        if let MotionState::ProgrammaticMove { .. } = self.state {
            self.settle_remaining_ms -= dt_ms;
            if self.settle_remaining_ms <= 0.0 {
                // Timeout fallback: the guard is released no later than
                // the scripted motion's expected completion, so the
                // engine never permanently ignores user input.
                self.settle_remaining_ms = 0.0;
                self.state = MotionState::Idle;
            }
            return;
        }

        if !visible {
            self.state = MotionState::Idle;
            return;
        }

        self.state = MotionState::AutoAdvancing;

        let dwell = self.config.dwell_duration_ms as f64;
        let fraction = dt_ms / dwell;

        match self.mode {
            EngineMode::Orbit => {
                self.scalar = (self.scalar + fraction * self.step_degrees()).rem_euclid(360.0);
            }
            EngineMode::ScrollLinked => {
                self.scalar = (self.scalar + fraction / self.item_count as f64).rem_euclid(1.0);
            }
        }

        self.within_item_progress += fraction;
        while self.within_item_progress >= 1.0 {
            self.within_item_progress -= 1.0;
            self.active_index = (self.active_index + 1) % self.item_count;
        }
    }

    /// Jump to an item, wrapping modulo item count.
    ///
    /// The active index updates immediately (optimistic) so indicators
    /// highlight without waiting for the animation; the returned command
    /// tells the host where to move. Re-arms the single settle timer, so
    /// rapid successive jumps behave as "last call wins".
    pub fn jump_to(&mut self, target: i64) -> HostCommand {
        let index = target.rem_euclid(self.item_count as i64) as usize;

        self.active_index = index;
        self.within_item_progress = 0.0;
        self.move_token += 1;
        self.state = MotionState::ProgrammaticMove {
            token: self.move_token,
        };
        self.settle_remaining_ms = self.config.settle_delay_ms as f64;

        match self.mode {
            EngineMode::Orbit => {
                // The rotation that places `index` at the front (180°)
                self.scalar = (180.0 - index as f64 * self.step_degrees()).rem_euclid(360.0);
                HostCommand::RotateTo(self.scalar)
            }
            EngineMode::ScrollLinked => {
                self.scalar = index as f64 / self.item_count as f64;
                HostCommand::ScrollToFraction(self.scalar)
            }
        }
    }

    /// Interpret a raw wheel/scroll delta as a discrete step request.
    ///
    /// Rejected while a programmatic move is in flight or within the
    /// input cooldown window (one physical trackpad gesture otherwise
    /// reads as many steps). Accepted input maps sign to ±1 step.
    pub fn on_input_delta(&mut self, delta: f64) -> Option<HostCommand> {
        if delta == 0.0 || self.is_programmatic_move() || self.cooldown_remaining_ms > 0.0 {
            return None;
        }

        self.cooldown_remaining_ms = self.config.input_cooldown_ms as f64;
        let step: i64 = if delta > 0.0 { 1 } else { -1 };
        Some(self.jump_to(self.active_index as i64 + step))
    }

    /// Follow the host's absolute scroll offset (scroll-linked mode).
    ///
    /// Ignored during programmatic moves: the scripted scroll itself
    /// fires these readings, and folding them back in would loop.
    pub fn on_scroll_position(&mut self, metrics: SurfaceMetrics) {
        if self.mode != EngineMode::ScrollLinked || self.is_programmatic_move() {
            return;
        }

        let progress = metrics.progress();
        self.scalar = progress;

        let raw = progress * self.item_count as f64;
        self.active_index = (raw.floor() as usize).min(self.item_count - 1);
        self.within_item_progress = (raw - self.active_index as f64).clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(count: usize, mode: EngineMode) -> ProgressEngine {
        ProgressEngine::new(count, mode, EngineConfig::default()).unwrap()
    }

    #[test]
    fn rejects_empty_item_list() {
        assert!(ProgressEngine::new(0, EngineMode::Orbit, EngineConfig::default()).is_err());
    }

    #[test]
    fn rejects_zero_dwell() {
        let config = EngineConfig {
            dwell_duration_ms: 0,
            ..Default::default()
        };
        assert!(ProgressEngine::new(7, EngineMode::Orbit, config).is_err());
    }

    #[test]
    fn one_full_dwell_advances_exactly_one_item() {
        let mut e = engine(7, EngineMode::Orbit);
        e.advance_by_time(5000.0, true);
        assert_eq!(e.active_index(), 1);
        assert!(e.within_item_progress() < 1e-9);
    }

    #[test]
    fn cumulative_dwells_advance_one_index_per_crossing() {
        let mut e = engine(7, EngineMode::Orbit);
        for _ in 0..25 {
            e.advance_by_time(500.0, true); // 12500ms total = 2.5 dwells
        }
        assert_eq!(e.active_index(), 2);
        assert!((e.within_item_progress() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn auto_advance_wraps_modulo_item_count() {
        let mut e = engine(3, EngineMode::Orbit);
        for _ in 0..3 {
            e.advance_by_time(5000.0, true);
        }
        assert_eq!(e.active_index(), 0);
    }

    #[test]
    fn invisible_surface_does_not_advance() {
        let mut e = engine(7, EngineMode::Orbit);
        e.advance_by_time(10_000.0, false);
        assert_eq!(e.active_index(), 0);
        assert_eq!(e.scalar(), 0.0);
        assert_eq!(e.state(), MotionState::Idle);
    }

    #[test]
    fn jump_is_optimistic() {
        let mut e = engine(7, EngineMode::Orbit);
        e.jump_to(3);
        // Index updates before any scripted motion completes
        assert_eq!(e.active_index(), 3);
        assert!(e.is_programmatic_move());
    }

    #[test]
    fn jump_wraps_both_directions() {
        let mut a = engine(7, EngineMode::Orbit);
        let mut b = engine(7, EngineMode::Orbit);
        assert_eq!(a.jump_to(7), b.jump_to(0));
        assert_eq!(a.active_index(), 0);

        let mut c = engine(7, EngineMode::Orbit);
        c.jump_to(-1);
        assert_eq!(c.active_index(), 6);
    }

    #[test]
    fn jump_targets_front_angle() {
        let mut e = engine(4, EngineMode::Orbit);
        match e.jump_to(2) {
            HostCommand::RotateTo(deg) => assert!((deg - 0.0).abs() < 1e-9),
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(e.nearest_index(), 2);

        match e.jump_to(0) {
            HostCommand::RotateTo(deg) => assert!((deg - 180.0).abs() < 1e-9),
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(e.nearest_index(), 0);
    }

    #[test]
    fn input_rejected_until_settle_elapses() {
        let mut e = engine(7, EngineMode::Orbit);
        e.jump_to(2);

        // Before the settle delay the guard holds
        e.advance_by_time(400.0, true);
        assert!(e.on_input_delta(1.0).is_none());
        assert_eq!(e.active_index(), 2);

        // After it elapses user input is accepted again
        e.advance_by_time(500.0, true);
        assert!(!e.is_programmatic_move());
        assert!(e.on_input_delta(1.0).is_some());
        assert_eq!(e.active_index(), 3);
    }

    #[test]
    fn rapid_jumps_rearm_the_settle_timer() {
        let mut e = engine(7, EngineMode::Orbit);
        e.jump_to(1);
        e.advance_by_time(500.0, true);
        e.jump_to(2); // re-arms; the first jump's remainder must not release the guard
        e.advance_by_time(500.0, true);
        assert!(e.is_programmatic_move());
        e.advance_by_time(400.0, true);
        assert!(!e.is_programmatic_move());
        assert_eq!(e.active_index(), 2);
    }

    #[test]
    fn programmatic_move_blocks_auto_advance() {
        let mut e = engine(7, EngineMode::Orbit);
        e.jump_to(4);
        let scalar = e.scalar();
        // Settle countdown consumes the frame; no scalar progression
        e.advance_by_time(700.0, true);
        assert_eq!(e.active_index(), 4);
        assert_eq!(e.scalar(), scalar);
    }

    #[test]
    fn accepted_input_wins_over_auto_advance_in_same_tick() {
        let mut e = engine(7, EngineMode::Orbit);
        assert!(e.on_input_delta(1.0).is_some());
        assert_eq!(e.active_index(), 1);
        // The auto advance that fires later in the tick re-checks the
        // guard and must not move the index further
        e.advance_by_time(16.0, true);
        assert_eq!(e.active_index(), 1);
    }

    #[test]
    fn input_cooldown_absorbs_momentum() {
        let mut e = engine(7, EngineMode::Orbit);
        assert!(e.on_input_delta(3.0).is_some());
        // Clear the programmatic guard but stay within the cooldown
        e.advance_by_time(850.0, true);
        assert!(e.on_input_delta(3.0).is_none());
        // Past the cooldown window the next gesture counts
        e.advance_by_time(100.0, true);
        assert!(e.on_input_delta(3.0).is_some());
        assert_eq!(e.active_index(), 2);
    }

    #[test]
    fn negative_delta_steps_backward() {
        let mut e = engine(7, EngineMode::Orbit);
        assert!(e.on_input_delta(-2.5).is_some());
        assert_eq!(e.active_index(), 6);
    }

    #[test]
    fn scroll_position_drives_scalar_and_index() {
        let mut e = engine(4, EngineMode::ScrollLinked);
        e.on_scroll_position(SurfaceMetrics {
            container_top: -600.0,
            container_height: 2000.0,
            viewport_height: 800.0,
        });
        assert!((e.scalar() - 0.5).abs() < 1e-9);
        assert_eq!(e.active_index(), 2);
    }

    #[test]
    fn short_container_clamps_progress_to_zero() {
        let mut e = engine(4, EngineMode::ScrollLinked);
        e.on_scroll_position(SurfaceMetrics {
            container_top: -100.0,
            container_height: 800.0,
            viewport_height: 800.0,
        });
        assert_eq!(e.scalar(), 0.0);
        assert!(!e.scalar().is_nan());
        assert_eq!(e.active_index(), 0);
    }

    #[test]
    fn scroll_readings_ignored_during_programmatic_move() {
        let mut e = engine(4, EngineMode::ScrollLinked);
        e.jump_to(1);
        let scalar = e.scalar();
        // The scripted scroll itself produces readings; they must not loop back
        e.on_scroll_position(SurfaceMetrics {
            container_top: -1200.0,
            container_height: 2000.0,
            viewport_height: 800.0,
        });
        assert_eq!(e.scalar(), scalar);
        assert_eq!(e.active_index(), 1);
    }

    #[test]
    fn full_scroll_progress_lands_on_last_item() {
        let mut e = engine(4, EngineMode::ScrollLinked);
        e.on_scroll_position(SurfaceMetrics {
            container_top: -1200.0,
            container_height: 2000.0,
            viewport_height: 800.0,
        });
        assert!((e.scalar() - 1.0).abs() < 1e-9);
        assert_eq!(e.active_index(), 3);
    }
}
