//! Deferred effect scheduling.
//!
//! The interaction layer defers two actions by a fixed short delay: the
//! post-switch scroll that brings the new panel into view, and the metric
//! bar restore that plays the load animation. Entries are fire-and-forget:
//! once scheduled they cannot be cancelled or coalesced, and rapid repeated
//! triggers simply deliver in schedule order with the last write winning.

use std::time::{Duration, Instant};

/// Delay between a panel switch and the scroll that reveals the new panel,
/// leaving the activation's visual state a beat to settle.
pub const SWITCH_SCROLL_DELAY: Duration = Duration::from_millis(100);

/// Delay between zeroing the metric bars and restoring their targets.
pub const BAR_RESTORE_DELAY: Duration = Duration::from_millis(100);

/// An action deferred by a fixed delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredEffect {
    /// Scroll the content area so the top of the active panel is in view
    ScrollPanelIntoView { panel_id: String },
    /// Restore every metric bar to its declared target width
    RestoreMetricBars,
}

#[derive(Debug, Clone)]
struct Scheduled {
    due: Instant,
    seq: u64,
    effect: DeferredEffect,
}

/// Queue of pending deferred effects, drained once per frame.
#[derive(Debug, Clone, Default)]
pub struct EffectQueue {
    entries: Vec<Scheduled>,
    next_seq: u64,
}

impl EffectQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules an effect to fire `delay` after `now`.
    pub fn schedule(&mut self, effect: DeferredEffect, delay: Duration, now: Instant) {
        self.entries.push(Scheduled {
            due: now + delay,
            seq: self.next_seq,
            effect,
        });
        self.next_seq += 1;
    }

    /// Removes and returns every effect due at `now`, in schedule order.
    pub fn drain_due(&mut self, now: Instant) -> Vec<DeferredEffect> {
        let mut due: Vec<Scheduled> = Vec::new();
        self.entries.retain(|entry| {
            if entry.due <= now {
                due.push(entry.clone());
                false
            } else {
                true
            }
        });
        due.sort_by_key(|e| e.seq);
        due.into_iter().map(|e| e.effect).collect()
    }

    /// Returns true when no effects are pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops all pending effects (document cleared).
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_fires_before_due() {
        let now = Instant::now();
        let mut queue = EffectQueue::new();
        queue.schedule(DeferredEffect::RestoreMetricBars, Duration::from_millis(100), now);

        assert!(queue.drain_due(now).is_empty());
        assert!(queue.drain_due(now + Duration::from_millis(99)).is_empty());
        assert!(!queue.is_empty());
    }

    #[test]
    fn test_fires_at_due_time_and_drains() {
        let now = Instant::now();
        let mut queue = EffectQueue::new();
        queue.schedule(DeferredEffect::RestoreMetricBars, Duration::from_millis(100), now);

        let fired = queue.drain_due(now + Duration::from_millis(100));
        assert_eq!(fired, vec![DeferredEffect::RestoreMetricBars]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_overlapping_effects_deliver_in_schedule_order() {
        // Rapid switching schedules overlapping scrolls; both deliver, in
        // order, so the last one wins wherever the effects collide.
        let now = Instant::now();
        let mut queue = EffectQueue::new();
        queue.schedule(
            DeferredEffect::ScrollPanelIntoView { panel_id: "a".into() },
            Duration::from_millis(100),
            now,
        );
        queue.schedule(
            DeferredEffect::ScrollPanelIntoView { panel_id: "b".into() },
            Duration::from_millis(100),
            now + Duration::from_millis(10),
        );

        let fired = queue.drain_due(now + Duration::from_millis(200));
        assert_eq!(fired.len(), 2);
        assert_eq!(
            fired[1],
            DeferredEffect::ScrollPanelIntoView { panel_id: "b".into() }
        );
    }

    #[test]
    fn test_not_yet_due_entries_survive_drain() {
        let now = Instant::now();
        let mut queue = EffectQueue::new();
        queue.schedule(DeferredEffect::RestoreMetricBars, Duration::from_millis(50), now);
        queue.schedule(
            DeferredEffect::ScrollPanelIntoView { panel_id: "a".into() },
            Duration::from_millis(500),
            now,
        );

        let fired = queue.drain_due(now + Duration::from_millis(60));
        assert_eq!(fired, vec![DeferredEffect::RestoreMetricBars]);
        assert!(!queue.is_empty());
    }
}
