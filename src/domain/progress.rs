//! Reading progress derivation.
//!
//! Pure functions mapping scroll geometry to the progress ratio shown by the
//! indicator bar. Stateless and testable without a window.

/// Derives the reading progress ratio in [0, 100] from scroll geometry.
///
/// `progress = offset / (content_height - viewport_height) * 100`, clamped.
/// A document that fits entirely in the viewport has no scrollable distance;
/// that degenerate denominator is fixed to 0% rather than letting a
/// non-finite value through.
///
/// # Arguments
/// * `offset` - Current vertical scroll offset in pixels
/// * `content_height` - Total height of the scrollable content
/// * `viewport_height` - Height of the visible viewport
pub fn progress_ratio(offset: f32, content_height: f32, viewport_height: f32) -> f32 {
    let scrollable = content_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    ((offset / scrollable) * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_at_bounds() {
        assert_eq!(progress_ratio(0.0, 2000.0, 600.0), 0.0);
        assert_eq!(progress_ratio(1400.0, 2000.0, 600.0), 100.0);
    }

    #[test]
    fn test_progress_midpoint() {
        let p = progress_ratio(700.0, 2000.0, 600.0);
        assert!((p - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_progress_is_monotonic_in_offset() {
        // For fixed geometry the ratio never decreases as the offset grows
        // from 0 to max.
        let mut last = -1.0;
        for step in 0..=140 {
            let offset = step as f32 * 10.0;
            let p = progress_ratio(offset, 2000.0, 600.0);
            assert!(p >= last, "progress decreased at offset {}", offset);
            last = p;
        }
        assert_eq!(last, 100.0);
    }

    #[test]
    fn test_zero_scrollable_distance_is_zero_percent() {
        // Content no taller than the viewport: fixed policy is 0%, never a
        // non-finite ratio.
        assert_eq!(progress_ratio(0.0, 600.0, 600.0), 0.0);
        assert_eq!(progress_ratio(50.0, 400.0, 600.0), 0.0);
    }

    #[test]
    fn test_overscroll_is_clamped() {
        assert_eq!(progress_ratio(5000.0, 2000.0, 600.0), 100.0);
        assert_eq!(progress_ratio(-50.0, 2000.0, 600.0), 0.0);
    }
}
