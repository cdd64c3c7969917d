//! Smooth page scroller.
//!
//! Animates the document's vertical scroll position toward targets set by
//! key input, wheel input or anchor jumps. Deltas arriving within the same
//! frame are batched; with motion disabled every call jumps immediately.

use std::time::{Duration, Instant};

use showcase_core::MotionConfig;

use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp_u16, progress};

#[derive(Debug, Clone)]
struct ActiveScroll {
    start: Instant,
    from: u16,
    to: u16,
}

/// Animated scroll position for the page document
#[derive(Debug, Clone)]
pub struct PageScroller {
    animation: Option<ActiveScroll>,
    current: u16,
    pending_delta: i32,
    smooth: bool,
    duration: Duration,
    easing: EasingType,
}

impl PageScroller {
    pub fn new(motion: &MotionConfig) -> Self {
        Self {
            animation: None,
            current: 0,
            pending_delta: 0,
            smooth: motion.enabled && motion.smooth_scroll && motion.animation_duration_ms > 0,
            duration: Duration::from_millis(motion.animation_duration_ms),
            easing: motion.easing,
        }
    }

    /// Current interpolated scroll position
    #[inline]
    pub fn current(&self) -> u16 {
        self.current
    }

    /// Final position after any running animation
    pub fn target(&self) -> u16 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current)
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether the frame loop should run at animation rate
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0
    }

    /// Jump immediately, dropping any animation
    pub fn set(&mut self, scroll: u16) {
        self.animation = None;
        self.current = scroll;
        self.pending_delta = 0;
    }

    /// Animate to an absolute position (anchor jump)
    pub fn scroll_to(&mut self, now: Instant, target: u16, max_scroll: u16) {
        let target = target.min(max_scroll);

        if !self.smooth {
            self.set(target);
            return;
        }

        let from = self.current;
        if from == target {
            self.animation = None;
            return;
        }

        self.pending_delta = 0;
        self.animation = Some(ActiveScroll {
            start: now,
            from,
            to: target,
        });
    }

    /// Scroll by a delta (positive = down). Deltas within one frame are
    /// batched and applied by the next `update` call.
    pub fn scroll_by(&mut self, delta: i32, max_scroll: u16) {
        if !self.smooth {
            let next = (self.current as i32 + delta).clamp(0, max_scroll as i32) as u16;
            self.set(next);
            return;
        }
        self.pending_delta += delta;
    }

    /// Advance the animation and return the current scroll position
    pub fn update(&mut self, now: Instant, max_scroll: u16) -> u16 {
        if self.pending_delta != 0 {
            let target = self.target();
            let next = (target as i32 + self.pending_delta).clamp(0, max_scroll as i32) as u16;
            self.pending_delta = 0;

            if next != self.current {
                self.animation = Some(ActiveScroll {
                    start: now,
                    from: self.current,
                    to: next,
                });
            }
        }

        if let Some(ref anim) = self.animation {
            if is_complete(anim.start, now, self.duration) {
                self.current = anim.to.min(max_scroll);
                self.animation = None;
            } else {
                let t = self.easing.apply(progress(anim.start, now, self.duration));
                self.current = lerp_u16(anim.from, anim.to, t).min(max_scroll);
            }
        }

        self.current
    }

    /// Stop at the current position
    pub fn cancel(&mut self) {
        self.animation = None;
        self.pending_delta = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smooth_config() -> MotionConfig {
        MotionConfig {
            animation_duration_ms: 100,
            easing: EasingType::Linear,
            ..Default::default()
        }
    }

    fn instant_config() -> MotionConfig {
        MotionConfig {
            smooth_scroll: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_instant_jump_when_smooth_disabled() {
        let mut page = PageScroller::new(&instant_config());
        page.scroll_to(Instant::now(), 80, 200);
        assert_eq!(page.current(), 80);
        assert!(!page.is_animating());
    }

    #[test]
    fn test_anchor_scroll_animates() {
        let now = Instant::now();
        let mut page = PageScroller::new(&smooth_config());
        page.scroll_to(now, 100, 200);
        assert!(page.is_animating());
        assert_eq!(page.target(), 100);

        let mid = page.update(now + Duration::from_millis(50), 200);
        assert!(mid > 30 && mid < 70, "got {mid}");

        assert_eq!(page.update(now + Duration::from_millis(100), 200), 100);
        assert!(!page.is_animating());
    }

    #[test]
    fn test_deltas_batch_within_a_frame() {
        let now = Instant::now();
        let mut page = PageScroller::new(&smooth_config());
        page.scroll_by(10, 200);
        page.scroll_by(10, 200);
        page.scroll_by(10, 200);

        page.update(now, 200);
        assert_eq!(page.target(), 30);
    }

    #[test]
    fn test_target_clamped_to_max_scroll() {
        let now = Instant::now();
        let mut page = PageScroller::new(&smooth_config());
        page.scroll_to(now, 500, 120);
        assert!(page.target() <= 120);

        page.scroll_by(-1000, 120);
        page.update(now, 120);
        assert_eq!(page.target(), 0);
    }
}
