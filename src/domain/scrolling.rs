//! Scroll behavior rules.
//!
//! Pure functions for the scroll-to-top affordance and the easing used by
//! animated scrolls. These are stateless and can be tested independently.

/// Offset above which the scroll-to-top control becomes visible.
pub const SCROLL_TOP_THRESHOLD: f32 = 300.0;

/// Exponential easing rate for animated scrolls, per second.
const APPROACH_RATE: f32 = 9.0;

/// Offsets closer than this to the target are considered arrived.
const SNAP_DISTANCE: f32 = 0.5;

/// Level-triggered visibility of the scroll-to-top control: visible exactly
/// while the offset exceeds the threshold.
pub fn scroll_top_visible(offset: f32) -> bool {
    offset > SCROLL_TOP_THRESHOLD
}

/// Moves `current` toward `target` with frame-rate independent exponential
/// easing.
///
/// # Arguments
/// * `current` - Offset at the start of the frame
/// * `target` - Destination offset
/// * `dt` - Frame duration in seconds
pub fn approach(current: f32, target: f32, dt: f32) -> f32 {
    current + (target - current) * (1.0 - (-APPROACH_RATE * dt).exp())
}

/// Returns true once an eased offset is close enough to snap to the target.
pub fn reached(current: f32, target: f32) -> bool {
    (current - target).abs() < SNAP_DISTANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_is_level_triggered() {
        assert!(!scroll_top_visible(0.0));
        assert!(!scroll_top_visible(300.0));
        assert!(scroll_top_visible(300.1));
        assert!(scroll_top_visible(1500.0));

        // Crossing back below the threshold hides it again.
        assert!(!scroll_top_visible(299.9));
    }

    #[test]
    fn test_visibility_is_idempotent_within_a_side() {
        // Repeated signals on the same side of the threshold produce the
        // same answer.
        for offset in [301.0, 400.0, 9000.0] {
            assert_eq!(scroll_top_visible(offset), scroll_top_visible(offset));
            assert!(scroll_top_visible(offset));
        }
        for offset in [0.0, 150.0, 299.0] {
            assert!(!scroll_top_visible(offset));
        }
    }

    #[test]
    fn test_approach_moves_toward_target() {
        let next = approach(1000.0, 0.0, 1.0 / 60.0);
        assert!(next < 1000.0);
        assert!(next > 0.0);
    }

    #[test]
    fn test_approach_never_overshoots() {
        let mut current = 800.0;
        for _ in 0..600 {
            current = approach(current, 0.0, 1.0 / 60.0);
            assert!(current >= 0.0);
        }
        assert!(reached(current, 0.0));
    }

    #[test]
    fn test_larger_dt_covers_more_distance() {
        let slow = approach(500.0, 0.0, 1.0 / 120.0);
        let fast = approach(500.0, 0.0, 1.0 / 30.0);
        assert!(fast < slow);
    }
}
