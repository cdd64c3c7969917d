//! Single property tween: a value eased from `from` to `to` over a
//! duration, optionally after a delay, optionally looping back and forth.

use std::time::{Duration, Instant};

use super::easing::{EasingType, EasingTypeExt};
use super::timing::lerp;

/// How a tween behaves after its duration elapses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopStyle {
    /// Run once and hold the final value
    Once,
    /// Reverse direction at each end, forever
    Yoyo,
}

/// An eased scalar animation scheduled against the frame clock
#[derive(Debug, Clone)]
pub struct Tween {
    scheduled: Instant,
    delay: Duration,
    duration: Duration,
    from: f64,
    to: f64,
    easing: EasingType,
    looping: LoopStyle,
}

impl Tween {
    /// Schedule a tween starting at `now`
    pub fn new(now: Instant, from: f64, to: f64, duration: Duration, easing: EasingType) -> Self {
        Self {
            scheduled: now,
            delay: Duration::ZERO,
            duration,
            from,
            to,
            easing,
            looping: LoopStyle::Once,
        }
    }

    /// Delay the start by `delay` (stagger offset)
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Loop forever, reversing direction at each end
    pub fn yoyo(mut self) -> Self {
        self.looping = LoopStyle::Yoyo;
        self
    }

    /// Current value at frame time `now`
    pub fn value(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.scheduled);
        if elapsed < self.delay {
            return self.from;
        }
        if self.duration.is_zero() {
            return self.to;
        }
        let running = (elapsed - self.delay).as_secs_f64() / self.duration.as_secs_f64();

        let t = match self.looping {
            LoopStyle::Once => running.min(1.0),
            LoopStyle::Yoyo => {
                let phase = running.fract();
                if (running.floor() as u64) % 2 == 0 {
                    phase
                } else {
                    1.0 - phase
                }
            }
        };
        lerp(self.from, self.to, self.easing.apply(t))
    }

    /// Whether the tween has reached its final value (never for yoyo loops)
    pub fn finished(&self, now: Instant) -> bool {
        match self.looping {
            LoopStyle::Yoyo => false,
            LoopStyle::Once => {
                now.saturating_duration_since(self.scheduled) >= self.delay + self.duration
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(start: Instant, ms: u64) -> Instant {
        start + Duration::from_millis(ms)
    }

    #[test]
    fn test_tween_endpoints() {
        let start = Instant::now();
        let tween = Tween::new(start, 0.0, 10.0, Duration::from_millis(100), EasingType::Linear);

        assert!((tween.value(start) - 0.0).abs() < 0.001);
        assert!((tween.value(at(start, 100)) - 10.0).abs() < 0.001);
        // Holds final value past the end
        assert!((tween.value(at(start, 500)) - 10.0).abs() < 0.001);
        assert!(tween.finished(at(start, 100)));
    }

    #[test]
    fn test_delay_holds_initial_value() {
        let start = Instant::now();
        let tween = Tween::new(start, 5.0, 10.0, Duration::from_millis(100), EasingType::Linear)
            .delayed(Duration::from_millis(50));

        assert!((tween.value(at(start, 25)) - 5.0).abs() < 0.001);
        assert!(!tween.finished(at(start, 100)));
        assert!(tween.finished(at(start, 150)));
    }

    #[test]
    fn test_yoyo_reverses_and_never_finishes() {
        let start = Instant::now();
        let tween =
            Tween::new(start, 0.0, 8.0, Duration::from_millis(100), EasingType::Linear).yoyo();

        assert!((tween.value(at(start, 50)) - 4.0).abs() < 0.01);
        // Second cycle runs backwards: 150ms in means halfway back
        assert!((tween.value(at(start, 150)) - 4.0).abs() < 0.01);
        assert!((tween.value(at(start, 200)) - 0.0).abs() < 0.01);
        assert!(!tween.finished(at(start, 10_000)));
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        let start = Instant::now();
        let tween = Tween::new(start, 0.0, 3.0, Duration::ZERO, EasingType::Cubic);
        assert!((tween.value(start) - 3.0).abs() < 0.001);
        assert!(tween.finished(start));
    }
}
