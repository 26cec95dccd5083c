// ライフサイクル監視の具象実装

use crate::core::LifecycleObserver;
use std::cell::Cell;

/// 何もしないオブザーバ（通常の計測用）
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpObserver;

impl NoOpObserver {
    pub fn new() -> Self {
        Self
    }
}

impl LifecycleObserver for NoOpObserver {
    #[inline(always)]
    fn on_constructed(&self) {}

    #[inline(always)]
    fn on_engine(&self) {}

    #[inline(always)]
    fn on_destroyed(&self) {}
}

/// 観測したイベント数のスナップショット
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleCounts {
    pub constructed: u64,
    pub engine_calls: u64,
    pub destroyed: u64,
    /// 現在生存しているインスタンス数
    pub live: u64,
    /// 同時に生存したインスタンス数の最大値
    pub peak_live: u64,
}

impl LifecycleCounts {
    /// リークも二重解放も無く、同時に1つ以上生存しなかったか
    pub fn is_balanced(&self) -> bool {
        self.constructed == self.destroyed && self.live == 0 && self.peak_live <= 1
    }
}

/// イベント数を数えるオブザーバ（検証用）
///
/// ベンチマークはシングルスレッドのため `Cell` で十分。
#[derive(Debug, Default)]
pub struct CountingObserver {
    counts: Cell<LifecycleCounts>,
}

impl CountingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counts(&self) -> LifecycleCounts {
        self.counts.get()
    }

    pub fn reset(&self) {
        self.counts.set(LifecycleCounts::default());
    }

    fn update(&self, f: impl FnOnce(&mut LifecycleCounts)) {
        let mut counts = self.counts.get();
        f(&mut counts);
        self.counts.set(counts);
    }
}

impl LifecycleObserver for CountingObserver {
    fn on_constructed(&self) {
        self.update(|c| {
            c.constructed += 1;
            c.live += 1;
            c.peak_live = c.peak_live.max(c.live);
        });
    }

    fn on_engine(&self) {
        self.update(|c| c.engine_calls += 1);
    }

    fn on_destroyed(&self) {
        self.update(|c| {
            c.destroyed += 1;
            // 二重解放時は折り返す（is_balanced が false になる）
            c.live = c.live.wrapping_sub(1);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_observer_is_zero_sized() {
        assert_eq!(std::mem::size_of::<NoOpObserver>(), 0);

        let observer = NoOpObserver::new();
        observer.on_constructed();
        observer.on_engine();
        observer.on_destroyed();
    }

    #[test]
    fn test_counting_observer_tracks_pairs() {
        let observer = CountingObserver::new();

        for _ in 0..3 {
            observer.on_constructed();
            observer.on_engine();
            observer.on_destroyed();
        }

        let counts = observer.counts();
        assert_eq!(counts.constructed, 3);
        assert_eq!(counts.engine_calls, 3);
        assert_eq!(counts.destroyed, 3);
        assert_eq!(counts.live, 0);
        assert_eq!(counts.peak_live, 1);
        assert!(counts.is_balanced());
    }

    #[test]
    fn test_overlapping_instances_are_detected() {
        let observer = CountingObserver::new();

        observer.on_constructed();
        observer.on_constructed();
        observer.on_destroyed();
        observer.on_destroyed();

        let counts = observer.counts();
        assert_eq!(counts.peak_live, 2);
        assert!(!counts.is_balanced());
    }

    #[test]
    fn test_leak_is_detected() {
        let observer = CountingObserver::new();
        observer.on_constructed();

        assert!(!observer.counts().is_balanced());
    }

    #[test]
    fn test_double_destroy_is_detected() {
        let observer = CountingObserver::new();
        observer.on_constructed();
        observer.on_destroyed();
        observer.on_destroyed();

        let counts = observer.counts();
        assert_eq!(counts.destroyed, 2);
        assert!(!counts.is_balanced());
    }

    #[test]
    fn test_reset() {
        let observer = CountingObserver::new();
        observer.on_constructed();
        observer.reset();

        assert_eq!(observer.counts(), LifecycleCounts::default());
    }
}
