//! Scroll-linked code tab controller.
//!
//! Keeps exactly one of the code-sample panels visible. Selection comes
//! from two paths: direct input (tab keys, number keys) and normalized
//! scroll progress inside the pinned code-preview scene. Panel swaps run
//! as a non-interruptible cross-fade; while one is in flight further
//! requests are dropped rather than queued or preempted.

use std::time::{Duration, Instant};

use showcase_core::content::Panel;
use showcase_core::{EasingType, MotionConfig};

use crate::motion::PanelTransition;

/// What the code preview should render this frame
pub struct PanelView<'a> {
    /// Panel whose body and title are displayed
    pub panel: &'a Panel,
    /// Content alpha in [0, 1] (1.0 when no transition runs)
    pub alpha: f64,
    /// Index highlighted in the tab row
    pub active_index: usize,
}

/// Maps scroll progress to a panel index by uniform partition:
/// `clamp(floor(p × len), 0, len - 1)`.
pub fn index_for_progress(progress: f64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let p = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    ((p * len as f64).floor() as usize).min(len - 1)
}

/// Owns the panel set and the single in-flight transition
pub struct ScrollTabController {
    panels: Vec<Panel>,
    active: usize,
    transition: Option<PanelTransition>,
    duration: Duration,
    easing: EasingType,
    animate: bool,
}

impl ScrollTabController {
    pub fn new(panels: Vec<Panel>, motion: &MotionConfig) -> Self {
        Self {
            panels,
            active: 0,
            transition: None,
            duration: Duration::from_millis(motion.animation_duration_ms),
            easing: motion.easing,
            animate: motion.enabled && motion.animation_duration_ms > 0,
        }
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Index of the selected panel
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Whether a cross-fade is currently in flight
    pub fn is_transitioning(&self, now: Instant) -> bool {
        self.transition.as_ref().is_some_and(|t| !t.finished(now))
    }

    /// Select a panel by key. Unknown keys and requests made while a
    /// transition is in flight are dropped.
    pub fn select_by_key(&mut self, key: &str, now: Instant) {
        if let Some(index) = self.panels.iter().position(|p| p.key == key) {
            self.select_index(index, now);
        }
    }

    /// Select a panel by index. Out-of-range indices, re-selection of the
    /// active panel, and requests during an in-flight transition are all
    /// no-ops.
    pub fn select_index(&mut self, index: usize, now: Instant) {
        if index >= self.panels.len() || index == self.active || self.is_transitioning(now) {
            return;
        }
        self.begin(index, now);
    }

    /// Select the panel after the active one, wrapping
    pub fn select_next(&mut self, now: Instant) {
        if !self.panels.is_empty() {
            self.select_index((self.active + 1) % self.panels.len(), now);
        }
    }

    /// Select the panel before the active one, wrapping
    pub fn select_prev(&mut self, now: Instant) {
        if !self.panels.is_empty() {
            let len = self.panels.len();
            self.select_index((self.active + len - 1) % len, now);
        }
    }

    /// Feed normalized scroll progress from the pinned scene. Progress
    /// partitions uniformly across the panel set; nothing happens when the
    /// computed index already matches or a transition is in flight.
    pub fn on_scroll_progress(&mut self, progress: f64, now: Instant) {
        if self.panels.is_empty() {
            return;
        }
        let target = index_for_progress(progress, self.panels.len());
        if target != self.active {
            self.select_index(target, now);
        }
    }

    /// Reap a finished transition, clearing the in-flight guard
    pub fn tick(&mut self, now: Instant) {
        if self.transition.as_ref().is_some_and(|t| t.finished(now)) {
            self.transition = None;
        }
    }

    /// Abandon any in-flight transition (resize, teardown)
    pub fn cancel_transition(&mut self) {
        if let Some(ref mut t) = self.transition {
            t.cancel();
        }
        self.transition = None;
    }

    /// Panel, alpha and highlight for the current frame. `None` only when
    /// the panel set is empty.
    pub fn display(&self, now: Instant) -> Option<PanelView<'_>> {
        if self.panels.is_empty() {
            return None;
        }
        let (index, alpha) = match self.transition {
            Some(ref t) if !t.finished(now) => (t.displayed_index(now), t.alpha(now)),
            _ => (self.active, 1.0),
        };
        Some(PanelView {
            panel: &self.panels[index.min(self.panels.len() - 1)],
            alpha,
            active_index: self.active,
        })
    }

    fn begin(&mut self, index: usize, now: Instant) {
        if self.animate {
            self.transition = Some(PanelTransition::new(
                now,
                self.active,
                index,
                self.duration,
                self.easing,
            ));
        }
        // The tab highlight moves immediately; the body follows the fade.
        self.active = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_core::content::code_panels;

    fn controller() -> ScrollTabController {
        ScrollTabController::new(code_panels(), &MotionConfig::default())
    }

    fn instant_controller() -> ScrollTabController {
        let motion = MotionConfig {
            enabled: false,
            ..Default::default()
        };
        ScrollTabController::new(code_panels(), &motion)
    }

    fn later(now: Instant, ms: u64) -> Instant {
        now + Duration::from_millis(ms)
    }

    #[test]
    fn test_partition_formula_for_assorted_sizes() {
        for len in 1..=8usize {
            for step in 0..=100u32 {
                let p = step as f64 / 100.0;
                let expected = (((p * len as f64).floor()) as usize).min(len - 1);
                assert_eq!(index_for_progress(p, len), expected, "len={len} p={p}");
            }
        }
    }

    #[test]
    fn test_partition_examples_for_three_panels() {
        // react / vanilla / webcomponent
        assert_eq!(index_for_progress(0.0, 3), 0);
        assert_eq!(index_for_progress(0.10, 3), 0);
        assert_eq!(index_for_progress(0.34, 3), 1);
        assert_eq!(index_for_progress(0.40, 3), 1);
        assert_eq!(index_for_progress(0.66, 3), 1);
        assert_eq!(index_for_progress(0.67, 3), 2);
        assert_eq!(index_for_progress(0.90, 3), 2);
        // p = 1.0 clamps to the last panel
        assert_eq!(index_for_progress(1.0, 3), 2);
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        assert_eq!(index_for_progress(-0.5, 3), 0);
        assert_eq!(index_for_progress(2.0, 3), 2);
        assert_eq!(index_for_progress(f64::NAN, 3), 0);
    }

    #[test]
    fn test_scroll_progress_drives_selection() {
        let now = Instant::now();
        let mut tabs = controller();

        tabs.on_scroll_progress(0.40, now);
        assert_eq!(tabs.active_index(), 1);
        assert!(tabs.is_transitioning(now));
    }

    #[test]
    fn test_select_during_transition_is_dropped() {
        let now = Instant::now();
        let mut tabs = controller();

        tabs.select_by_key("vanilla", now);
        assert_eq!(tabs.active_index(), 1);
        assert!(tabs.is_transitioning(now));

        // In-flight transitions cannot be preempted
        tabs.select_by_key("webcomponent", later(now, 10));
        assert_eq!(tabs.active_index(), 1);
        assert!(tabs.is_transitioning(later(now, 10)));
    }

    #[test]
    fn test_select_after_transition_completes() {
        let now = Instant::now();
        let mut tabs = controller();

        tabs.select_by_key("vanilla", now);
        let after = later(now, 200);
        assert!(!tabs.is_transitioning(after));
        tabs.tick(after);

        tabs.select_by_key("webcomponent", after);
        assert_eq!(tabs.active_index(), 2);
    }

    #[test]
    fn test_unknown_key_leaves_state_unchanged() {
        let now = Instant::now();
        let mut tabs = controller();

        tabs.select_by_key("svelte", now);
        assert_eq!(tabs.active_index(), 0);
        assert!(!tabs.is_transitioning(now));
    }

    #[test]
    fn test_repeated_progress_does_not_restart() {
        let now = Instant::now();
        let mut tabs = controller();

        tabs.on_scroll_progress(0.40, now);
        let after = later(now, 200);
        tabs.tick(after);
        assert!(!tabs.is_transitioning(after));

        // Same computed index again: no new transition
        tabs.on_scroll_progress(0.45, after);
        assert!(!tabs.is_transitioning(after));
        assert_eq!(tabs.active_index(), 1);
    }

    #[test]
    fn test_empty_panel_set_is_inert() {
        let now = Instant::now();
        let mut tabs = ScrollTabController::new(Vec::new(), &MotionConfig::default());

        tabs.select_by_key("react", now);
        tabs.select_index(0, now);
        tabs.on_scroll_progress(0.9, now);
        tabs.select_next(now);
        assert_eq!(tabs.active_index(), 0);
        assert!(tabs.display(now).is_none());
    }

    #[test]
    fn test_motion_disabled_swaps_instantly() {
        let now = Instant::now();
        let mut tabs = instant_controller();

        tabs.select_by_key("webcomponent", now);
        assert_eq!(tabs.active_index(), 2);
        assert!(!tabs.is_transitioning(now));
        let view = tabs.display(now).expect("panels present");
        assert_eq!(view.panel.key, "webcomponent");
        assert!((view.alpha - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_display_fades_out_then_in() {
        let now = Instant::now();
        let mut tabs = ScrollTabController::new(
            code_panels(),
            &MotionConfig {
                animation_duration_ms: 200,
                easing: EasingType::Linear,
                ..Default::default()
            },
        );

        tabs.select_by_key("vanilla", now);

        // First half still shows the outgoing panel, fading
        let view = tabs.display(later(now, 50)).expect("panels present");
        assert_eq!(view.panel.key, "react");
        assert!(view.alpha < 1.0);
        // Highlight already points at the target
        assert_eq!(view.active_index, 1);

        // Second half shows the incoming panel
        let view = tabs.display(later(now, 150)).expect("panels present");
        assert_eq!(view.panel.key, "vanilla");
        assert!(view.alpha < 1.0);
    }

    #[test]
    fn test_wrap_around_selection() {
        let now = Instant::now();
        let mut tabs = instant_controller();
        tabs.select_prev(now);
        assert_eq!(tabs.active_index(), 2);
        tabs.select_next(now);
        assert_eq!(tabs.active_index(), 0);
    }
}
