//! Non-interruptible cross-fade between two code panels.
//!
//! The transition fades the outgoing panel body out over the first half of
//! its duration, swaps to the incoming panel, and fades it in over the
//! second half. Completion is a pure function of elapsed time, and the
//! handle can be cancelled, so the owning controller's in-flight guard can
//! always be cleared.

use std::time::{Duration, Instant};

use super::easing::{EasingType, EasingTypeExt};
use super::timing::progress;

/// Which half of the cross-fade is running
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionPhase {
    /// Outgoing content, alpha falling 1 → 0
    FadeOut { alpha: f64 },
    /// Incoming content, alpha rising 0 → 1
    FadeIn { alpha: f64 },
    Done,
}

/// An in-flight panel swap
#[derive(Debug, Clone)]
pub struct PanelTransition {
    started: Instant,
    half: Duration,
    easing: EasingType,
    from_index: usize,
    to_index: usize,
    cancelled: bool,
}

impl PanelTransition {
    pub fn new(
        now: Instant,
        from_index: usize,
        to_index: usize,
        total: Duration,
        easing: EasingType,
    ) -> Self {
        Self {
            started: now,
            half: total / 2,
            easing,
            from_index,
            to_index,
            cancelled: false,
        }
    }

    /// Index of the panel being navigated to
    pub fn to_index(&self) -> usize {
        self.to_index
    }

    /// Phase and content alpha at frame time `now`
    pub fn phase(&self, now: Instant) -> TransitionPhase {
        if self.finished(now) {
            return TransitionPhase::Done;
        }
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed < self.half {
            let t = self.easing.apply(progress(self.started, now, self.half));
            TransitionPhase::FadeOut { alpha: 1.0 - t }
        } else {
            let start = self.started + self.half;
            let t = self.easing.apply(progress(start, now, self.half));
            TransitionPhase::FadeIn { alpha: t }
        }
    }

    /// Which panel's body and title are currently displayed
    pub fn displayed_index(&self, now: Instant) -> usize {
        match self.phase(now) {
            TransitionPhase::FadeOut { .. } => self.from_index,
            _ => self.to_index,
        }
    }

    /// Content alpha at frame time `now`
    pub fn alpha(&self, now: Instant) -> f64 {
        match self.phase(now) {
            TransitionPhase::FadeOut { alpha } | TransitionPhase::FadeIn { alpha } => alpha,
            TransitionPhase::Done => 1.0,
        }
    }

    pub fn finished(&self, now: Instant) -> bool {
        self.cancelled
            || now.saturating_duration_since(self.started) >= self.half + self.half
    }

    /// Abandon the transition; it reads as finished from here on
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(start: Instant, ms: u64) -> Instant {
        start + Duration::from_millis(ms)
    }

    fn linear(now: Instant) -> PanelTransition {
        PanelTransition::new(now, 0, 2, Duration::from_millis(200), EasingType::Linear)
    }

    #[test]
    fn test_fade_out_then_fade_in() {
        let start = Instant::now();
        let tr = linear(start);

        match tr.phase(at(start, 50)) {
            TransitionPhase::FadeOut { alpha } => assert!((alpha - 0.5).abs() < 0.01),
            other => panic!("expected fade-out, got {:?}", other),
        }
        assert_eq!(tr.displayed_index(at(start, 50)), 0);

        match tr.phase(at(start, 150)) {
            TransitionPhase::FadeIn { alpha } => assert!((alpha - 0.5).abs() < 0.01),
            other => panic!("expected fade-in, got {:?}", other),
        }
        assert_eq!(tr.displayed_index(at(start, 150)), 2);
    }

    #[test]
    fn test_finishes_after_full_duration() {
        let start = Instant::now();
        let tr = linear(start);
        assert!(!tr.finished(at(start, 199)));
        assert!(tr.finished(at(start, 200)));
        assert_eq!(tr.phase(at(start, 200)), TransitionPhase::Done);
        assert!((tr.alpha(at(start, 200)) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_cancel_reads_as_finished() {
        let start = Instant::now();
        let mut tr = linear(start);
        tr.cancel();
        assert!(tr.finished(start));
        assert_eq!(tr.displayed_index(start), 2);
    }
}
