//! Ordered entrance timeline.
//!
//! A timeline sequences labelled tweens: by default each step starts when
//! the previous one ends, and a step may pull its start earlier to overlap
//! the previous step's tail. Widgets read each step's value by label; an
//! unknown label reads as finished so a missing entry degrades to static
//! content.

use std::time::{Duration, Instant};

use super::easing::EasingType;
use super::tween::Tween;

struct Step {
    label: &'static str,
    tween: Tween,
}

/// A built timeline; values are read per label at frame time
pub struct Timeline {
    steps: Vec<Step>,
}

impl Timeline {
    /// Progress of the labelled step in [0, 1]; unknown labels read as 1.0
    pub fn value(&self, label: &str, now: Instant) -> f64 {
        self.steps
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.tween.value(now))
            .unwrap_or(1.0)
    }

    /// Whether every step has run its course
    pub fn finished(&self, now: Instant) -> bool {
        self.steps.iter().all(|s| s.tween.finished(now))
    }
}

/// Builder accumulating steps relative to a running cursor
pub struct TimelineBuilder {
    start: Instant,
    cursor: Duration,
    easing: EasingType,
    steps: Vec<Step>,
}

impl TimelineBuilder {
    pub fn new(now: Instant, easing: EasingType) -> Self {
        Self {
            start: now,
            cursor: Duration::ZERO,
            easing,
            steps: Vec::new(),
        }
    }

    /// Append a step starting where the previous one ended
    pub fn step(self, label: &'static str, duration: Duration) -> Self {
        self.step_overlap(label, duration, Duration::ZERO)
    }

    /// Append a step whose start is pulled `overlap` before the end of the
    /// previous step
    pub fn step_overlap(
        mut self,
        label: &'static str,
        duration: Duration,
        overlap: Duration,
    ) -> Self {
        let at = self.cursor.saturating_sub(overlap);
        let tween =
            Tween::new(self.start, 0.0, 1.0, duration, self.easing).delayed(at);
        self.steps.push(Step { label, tween });
        self.cursor = at + duration;
        self
    }

    pub fn build(self) -> Timeline {
        Timeline { steps: self.steps }
    }
}
