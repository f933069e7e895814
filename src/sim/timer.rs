//! Deterministic one-shot timers on a virtual millisecond clock
//!
//! The host advances the clock; due timers are handed back in firing order
//! (due time, then arm order). A timer armed while handling a fired timer is
//! relative to the already-advanced clock.

use std::collections::BTreeSet;

/// Cancel handle for an armed timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    now_ms: u64,
    next_id: u64,
    /// (due_ms, id); ids grow with arm order
    pending: BTreeSet<(u64, TimerId)>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn arm(&mut self, delay_ms: u64) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.insert((self.now_ms + delay_ms, id));
        id
    }

    /// Returns false if the timer already fired or was cancelled
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|&(_, pending)| pending != id);
        self.pending.len() != before
    }

    /// Move the clock forward and pop every timer that came due
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<TimerId> {
        self.now_ms += elapsed_ms;
        let mut fired = Vec::new();
        while let Some(&(due, id)) = self.pending.first() {
            if due > self.now_ms {
                break;
            }
            self.pending.remove(&(due, id));
            fired.push(id);
        }
        fired
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|&(_, pending)| pending == id)
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn next_due(&self) -> Option<u64> {
        self.pending.first().map(|&(due, _)| due)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fires_when_due() {
        let mut timers = TimerQueue::new();
        let id = timers.arm(100);
        assert!(timers.advance(99).is_empty());
        assert_eq!(timers.advance(1), vec![id]);
        assert_eq!(timers.pending(), 0);
        assert!(timers.advance(1000).is_empty());
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let mut timers = TimerQueue::new();
        let id = timers.arm(50);
        assert!(timers.cancel(id));
        assert!(!timers.cancel(id));
        assert!(timers.advance(500).is_empty());
    }

    #[test]
    fn test_fire_order_is_due_then_arm_order() {
        let mut timers = TimerQueue::new();
        let late = timers.arm(30);
        let early = timers.arm(10);
        let tie = timers.arm(30);
        assert_eq!(timers.advance(30), vec![early, late, tie]);
    }

    #[test]
    fn test_arm_is_relative_to_now() {
        let mut timers = TimerQueue::new();
        timers.advance(1000);
        let id = timers.arm(16);
        assert_eq!(timers.next_due(), Some(1016));
        assert!(timers.is_pending(id));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Arm(u64),
        CancelOldest,
        Advance(u64),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u64..200).prop_map(Op::Arm),
            Just(Op::CancelOldest),
            (0u64..100).prop_map(Op::Advance),
        ]
    }

    proptest! {
        #[test]
        fn prop_fires_each_live_timer_once_at_its_due_time(ops in prop::collection::vec(op(), 0..64)) {
            let mut timers = TimerQueue::new();
            let mut live: Vec<(TimerId, u64)> = Vec::new();
            let mut cancelled: Vec<TimerId> = Vec::new();

            for op in ops {
                match op {
                    Op::Arm(delay) => {
                        let due = timers.now_ms() + delay;
                        live.push((timers.arm(delay), due));
                    }
                    Op::CancelOldest => {
                        if !live.is_empty() {
                            let (id, _) = live.remove(0);
                            prop_assert!(timers.cancel(id));
                            cancelled.push(id);
                        }
                    }
                    Op::Advance(ms) => {
                        let fired = timers.advance(ms);
                        for id in &fired {
                            prop_assert!(!cancelled.contains(id));
                            let idx = live.iter().position(|(live_id, _)| live_id == id);
                            prop_assert!(idx.is_some());
                            if let Some(idx) = idx {
                                let (_, due) = live.remove(idx);
                                prop_assert!(due <= timers.now_ms());
                            }
                        }
                        prop_assert!(live.iter().all(|&(_, due)| due > timers.now_ms()));
                    }
                }
                prop_assert_eq!(timers.pending(), live.len());
            }
        }
    }
}
