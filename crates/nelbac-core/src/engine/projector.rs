//! Pure render projector: maps `(scalar, index, item_count)` to the
//! visual parameters of one orbiting item. No state, called once per
//! item per frame.

use std::f64::consts::PI;

/// Items within this angular distance of the front (180°) are focused.
pub const FOCUS_THRESHOLD_DEG: f64 = 20.0;

/// Exponent of the depth-cue falloff. Steep on purpose: only items very
/// close to the front pop forward.
const DEPTH_EXPONENT: i32 = 15;

const SCALE_GAIN: f64 = 3.2;
const BASE_OPACITY: f64 = 0.4;
const OPACITY_GAIN: f64 = 0.6;
const STACK_SCALE: f64 = 1000.0;

/// Ellipse radii for item placement. An ellipse rather than a circle to
/// compress vertical spread on wide surfaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitGeometry {
    pub radius_x: f64,
    pub radius_y: f64,
}

/// Per-item visual parameters, recomputed every frame and never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedVisual {
    /// Angular position around the orbit, in [0, 360)
    pub angle: f64,
    /// Horizontal offset from the orbit center
    pub x: f64,
    /// Vertical offset from the orbit center
    pub y: f64,
    pub scale: f64,
    /// In [0, 1]
    pub opacity: f64,
    /// Non-negative painting order; higher draws on top
    pub stack_order: i32,
    pub is_focused: bool,
    /// Drives the compact-to-expanded content transition, in [0, 1]
    pub morph_progress: f64,
}

/// Project one item.
///
/// Pure function of its arguments: identical inputs always yield the
/// identical output, so repeated per-frame calls cannot jitter.
pub fn project(
    scalar: f64,
    index: usize,
    item_count: usize,
    geometry: &OrbitGeometry,
) -> ProjectedVisual {
    debug_assert!(item_count > 0);

    let step = 360.0 / item_count as f64;
    let angle = (index as f64 * step + scalar).rem_euclid(360.0);
    let angle_rad = angle.to_radians();

    let x = angle_rad.sin() * geometry.radius_x;
    let y = angle_rad.cos() * geometry.radius_y;

    let distance_from_front = (angle - 180.0).abs();
    let is_focused = distance_from_front < FOCUS_THRESHOLD_DEG;

    // Sharply peaked depth cue: cos(θ - π) is 1 at the front, clamped
    // to zero on the back half, then raised to a steep power.
    let frontness = (angle_rad - PI).cos().max(0.0).powi(DEPTH_EXPONENT);

    ProjectedVisual {
        angle,
        x,
        y,
        scale: 1.0 + frontness * SCALE_GAIN,
        opacity: BASE_OPACITY + frontness * OPACITY_GAIN,
        stack_order: (frontness * STACK_SCALE).round() as i32,
        is_focused,
        morph_progress: (frontness * 2.0).clamp(0.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GEOMETRY: OrbitGeometry = OrbitGeometry {
        radius_x: 420.0,
        radius_y: 130.0,
    };

    #[test]
    fn front_item_is_focused_others_are_not() {
        // Four items at scalar 0: index 2 sits at exactly 180°
        for i in 0..4 {
            let v = project(0.0, i, 4, &GEOMETRY);
            if i == 2 {
                assert!((v.angle - 180.0).abs() < 1e-9);
                assert!(v.is_focused);
            } else {
                assert!(!v.is_focused, "index {i} at angle {} focused", v.angle);
            }
        }
    }

    #[test]
    fn index_zero_starts_at_angle_zero() {
        let v = project(0.0, 0, 4, &GEOMETRY);
        assert!((v.angle - 0.0).abs() < 1e-9);
    }

    #[test]
    fn stack_order_non_negative_and_peaks_at_front() {
        for &scalar in &[0.0, 37.5, 123.0, 359.9] {
            let visuals: Vec<_> = (0..7).map(|i| project(scalar, i, 7, &GEOMETRY)).collect();
            let closest = visuals
                .iter()
                .enumerate()
                .min_by(|(_, a), (_, b)| {
                    (a.angle - 180.0)
                        .abs()
                        .partial_cmp(&(b.angle - 180.0).abs())
                        .unwrap()
                })
                .map(|(i, _)| i)
                .unwrap();
            let max_stack = visuals.iter().map(|v| v.stack_order).max().unwrap();
            assert!(visuals.iter().all(|v| v.stack_order >= 0));
            assert_eq!(visuals[closest].stack_order, max_stack);
        }
    }

    #[test]
    fn projection_is_idempotent() {
        let a = project(42.7, 3, 7, &GEOMETRY);
        let b = project(42.7, 3, 7, &GEOMETRY);
        assert_eq!(a, b);
    }

    #[test]
    fn output_ranges_hold_across_the_orbit() {
        for tenth in 0..3600 {
            let scalar = tenth as f64 / 10.0;
            let v = project(scalar, 0, 5, &GEOMETRY);
            assert!(v.scale >= 1.0);
            assert!((0.0..=1.0).contains(&v.opacity), "opacity {}", v.opacity);
            assert!((0.0..=1.0).contains(&v.morph_progress));
            assert!((0.0..360.0).contains(&v.angle));
        }
    }

    #[test]
    fn front_item_pops_forward() {
        let front = project(0.0, 2, 4, &GEOMETRY);
        let back = project(0.0, 0, 4, &GEOMETRY);
        assert!((front.scale - (1.0 + SCALE_GAIN)).abs() < 1e-9);
        assert!((back.scale - 1.0).abs() < 1e-9);
        assert!(front.opacity > back.opacity);
        assert_eq!(front.morph_progress, 1.0);
        assert_eq!(back.morph_progress, 0.0);
    }

    #[test]
    fn placement_follows_the_ellipse() {
        let v = project(0.0, 1, 4, &GEOMETRY); // 90°
        assert!((v.x - GEOMETRY.radius_x).abs() < 1e-9);
        assert!(v.y.abs() < 1e-9);

        let w = project(0.0, 0, 4, &GEOMETRY); // 0°
        assert!(w.x.abs() < 1e-9);
        assert!((w.y - GEOMETRY.radius_y).abs() < 1e-9);
    }

    #[test]
    fn single_item_orbit_is_total() {
        let v = project(180.0, 0, 1, &GEOMETRY);
        assert!(v.angle.is_finite());
        assert!(v.stack_order >= 0);
    }
}
