//! One-shot metric bar load animation state.
//!
//! When a document finishes loading, every metric bar is zeroed in a single
//! synchronous transition and one deferred action restores them all to their
//! declared targets together. The eased width change itself is the rendering
//! layer's business; this state only answers "what width should a bar report
//! right now".

/// Phase of the load-time bar animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarPhase {
    /// No document loaded, nothing to animate
    #[default]
    Idle,
    /// Bars have been reset to zero, restore not fired yet
    Zeroed,
    /// Restore fired: bars report their declared targets
    Restored,
}

/// State of the one-shot load animation across all metric bars.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimatorState {
    phase: BarPhase,
}

impl AnimatorState {
    /// Creates an idle animator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> BarPhase {
        self.phase
    }

    /// Zeroes all bars; called synchronously when a document loads.
    pub fn arm(&mut self) {
        self.phase = BarPhase::Zeroed;
    }

    /// Restores all bars to their targets; called when the deferred restore
    /// fires. A stray restore with no preceding load is ignored.
    pub fn restore(&mut self) {
        if self.phase == BarPhase::Zeroed {
            self.phase = BarPhase::Restored;
        }
    }

    /// Resets to idle (document cleared).
    pub fn reset(&mut self) {
        self.phase = BarPhase::Idle;
    }

    /// The percentage a bar with the given target should report in the
    /// current phase.
    pub fn displayed_percent(&self, target_percent: f32) -> f32 {
        match self.phase {
            BarPhase::Idle | BarPhase::Zeroed => 0.0,
            BarPhase::Restored => target_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bars_report_zero_until_restore() {
        let mut animator = AnimatorState::new();
        assert_eq!(animator.displayed_percent(75.0), 0.0);

        animator.arm();
        assert_eq!(animator.phase(), BarPhase::Zeroed);
        assert_eq!(animator.displayed_percent(75.0), 0.0);
    }

    #[test]
    fn test_restore_reaches_declared_target() {
        let mut animator = AnimatorState::new();
        animator.arm();
        animator.restore();
        assert_eq!(animator.phase(), BarPhase::Restored);
        assert_eq!(animator.displayed_percent(75.0), 75.0);
        assert_eq!(animator.displayed_percent(0.0), 0.0);
    }

    #[test]
    fn test_restore_without_load_is_ignored() {
        let mut animator = AnimatorState::new();
        animator.restore();
        assert_eq!(animator.phase(), BarPhase::Idle);
    }

    #[test]
    fn test_reload_replays_animation() {
        let mut animator = AnimatorState::new();
        animator.arm();
        animator.restore();

        // A new load re-arms the transition from zero.
        animator.arm();
        assert_eq!(animator.displayed_percent(40.0), 0.0);
        animator.restore();
        assert_eq!(animator.displayed_percent(40.0), 40.0);
    }
}
