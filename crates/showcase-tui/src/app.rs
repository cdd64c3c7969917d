use std::time::{Duration, Instant};

use showcase_core::content::{self, Stat};
use showcase_core::{resolve_appearance, Appearance, AppConfig, EasingType, PrefStore};
use tracing::warn;

use crate::clipboard::{copy_with_feedback, ClipboardWrite, CopyFeedback};
use crate::cursor::CursorFollower;
use crate::motion::{PageScroller, PinnedScene, Timeline, TimelineBuilder, Tween};
use crate::page::{PageLayout, SectionId, HEADER_ELEVATION_SCROLL};
use crate::tabs::ScrollTabController;
use crate::theme::Theme;
use crate::themes::resolve_theme;

/// Stat values count up over this long once the section reveals
const COUNT_UP: Duration = Duration::from_millis(2000);

/// How long after a reveal starts the frame loop keeps animation cadence
const REVEAL_WINDOW: Duration = Duration::from_millis(2000);

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal page browsing
    Normal,
    /// Section navigation overlay
    NavOverlay,
    /// Help overlay
    Help,
}

/// Entrance state of a scroll-triggered section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Trigger row has not entered the viewport yet
    Hidden,
    /// Entrance animation running since the given instant
    Entering(Instant),
    /// Content at rest (also the steady state with motion disabled)
    Shown,
}

#[derive(Debug, Clone, Copy)]
struct Reveal {
    id: SectionId,
    started: Option<Instant>,
}

/// One animated number in the stats band
pub struct StatCounter {
    pub label: &'static str,
    pub suffix: &'static str,
    target: u32,
    tween: Option<Tween>,
    animate: bool,
}

impl StatCounter {
    fn new(stat: &Stat, animate: bool) -> Self {
        Self {
            label: stat.label,
            suffix: stat.suffix,
            target: stat.target,
            tween: None,
            animate,
        }
    }

    fn start(&mut self, now: Instant) {
        if self.animate && self.tween.is_none() {
            self.tween = Some(Tween::new(
                now,
                0.0,
                self.target as f64,
                COUNT_UP,
                EasingType::EaseOut,
            ));
        }
    }

    /// Displayed value at frame time `now`
    pub fn value(&self, now: Instant) -> u32 {
        if !self.animate {
            return self.target;
        }
        match self.tween {
            Some(ref tween) => tween.value(now).round() as u32,
            None => 0,
        }
    }
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: AppConfig,
    /// Resolved theme palette
    pub theme: Theme,
    /// Appearance currently displayed
    pub appearance: Appearance,
    /// Appearance the system reported at startup
    system_appearance: Appearance,
    /// Durable preference store
    pub prefs: PrefStore,
    /// Current application mode
    pub mode: Mode,
    /// Document layout for the current terminal size
    pub layout: PageLayout,
    /// Animated page scroll position
    pub page: PageScroller,
    /// Code preview tab controller
    pub tabs: ScrollTabController,
    /// Pinned code-preview scene
    pin: PinnedScene,
    /// Hero entrance timeline (None with motion disabled)
    hero: Option<Timeline>,
    /// Looping background drifts (None with motion disabled)
    blobs: Option<[Tween; 2]>,
    /// Scroll-triggered section reveals
    reveals: Vec<Reveal>,
    /// Animated stat values
    pub stat_counters: Vec<StatCounter>,
    /// Easing cursor trail
    pub cursor: CursorFollower,
    /// "Copied!" state of the hero install button
    pub copy_install: CopyFeedback,
    /// "Copied!" state of the code window copy button
    pub copy_code: CopyFeedback,
    /// Header renders elevated once scrolled past the threshold
    pub header_elevated: bool,
    /// Selected row in the navigation overlay
    pub nav_selected: usize,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    /// Status message
    pub status_message: Option<String>,
    /// Whether the app should quit
    pub should_quit: bool,
    width: u16,
    height: u16,
    motion_enabled: bool,
}

impl App {
    pub fn new(
        config: AppConfig,
        prefs: PrefStore,
        system_appearance: Appearance,
        width: u16,
        height: u16,
        now: Instant,
    ) -> Self {
        let motion_enabled = config.motion.enabled;
        if !motion_enabled {
            warn!("Motion disabled, rendering all content in final state");
        }

        let appearance = resolve_appearance(prefs.theme_preference(), system_appearance);
        let theme = resolve_theme(appearance, &config.ui.theme);

        let pinned = motion_enabled && width >= config.ui.scroll_tabs_min_width;
        let layout = PageLayout::compute(width, height, pinned, config.motion.pin_span_viewports);
        let pin = Self::scene_for(&layout);

        let tabs = ScrollTabController::new(content::code_panels(), &config.motion);
        let page = PageScroller::new(&config.motion);

        let hero = motion_enabled.then(|| Self::hero_timeline(now));
        let blobs = motion_enabled.then(|| {
            [
                Tween::new(now, 0.0, 6.0, ms(8000), EasingType::SineInOut).yoyo(),
                Tween::new(now, 0.0, -4.0, ms(10_000), EasingType::SineInOut).yoyo(),
            ]
        });

        let reveals = [
            SectionId::Features,
            SectionId::Stats,
            SectionId::CodePreview,
            SectionId::Frameworks,
            SectionId::Changelog,
        ]
        .into_iter()
        .map(|id| Reveal { id, started: None })
        .collect();

        let stat_counters = content::stats()
            .iter()
            .map(|stat| StatCounter::new(stat, motion_enabled))
            .collect();

        let feedback_window = ms(config.motion.copy_feedback_ms);
        let cursor_trail = config.ui.cursor_trail;

        Self {
            config,
            theme,
            appearance,
            system_appearance,
            prefs,
            mode: Mode::Normal,
            layout,
            page,
            tabs,
            pin,
            hero,
            blobs,
            reveals,
            stat_counters,
            cursor: CursorFollower::new(cursor_trail),
            copy_install: CopyFeedback::new(feedback_window),
            copy_code: CopyFeedback::new(feedback_window),
            header_elevated: false,
            nav_selected: 0,
            pending_key: None,
            status_message: None,
            should_quit: false,
            width,
            height,
            motion_enabled,
        }
    }

    /// Hero entrance: ordered steps with overlapping starts
    fn hero_timeline(now: Instant) -> Timeline {
        TimelineBuilder::new(now, EasingType::Cubic)
            .step("badge", ms(600))
            .step_overlap("title", ms(800), ms(300))
            .step_overlap("subtitle", ms(600), ms(400))
            .step_overlap("cta", ms(600), ms(300))
            .step_overlap("install", ms(600), ms(300))
            .step_overlap("preview", ms(800), ms(600))
            .build()
    }

    fn scene_for(layout: &PageLayout) -> PinnedScene {
        match layout.extent(SectionId::CodePreview) {
            Some(extent) => PinnedScene::new(extent.top, extent.height),
            None => PinnedScene::new(0, 0),
        }
    }

    /// Whether scroll progress drives the code tabs at this size
    pub fn scroll_tabs_active(&self) -> bool {
        self.motion_enabled && self.width >= self.config.ui.scroll_tabs_min_width
    }

    /// Whether the code preview renders pinned at the current scroll
    pub fn code_preview_pinned(&self) -> bool {
        self.scroll_tabs_active() && self.pin.is_pinned(self.page.current())
    }

    /// Recompute layout for a new terminal size
    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let pinned = self.scroll_tabs_active();
        self.layout = PageLayout::compute(
            width,
            height,
            pinned,
            self.config.motion.pin_span_viewports,
        );
        let (top, span) = match self.layout.extent(SectionId::CodePreview) {
            Some(extent) => (extent.top, extent.height),
            None => (0, 0),
        };
        self.pin.relayout(top, span);
        // A resize mid-fade would leave the guard pointing at stale
        // geometry; abandon the fade instead.
        self.tabs.cancel_transition();
        let max = self.layout.max_scroll();
        if self.page.current() > max {
            self.page.set(max);
        }
    }

    /// Advance all animations; call once per frame
    pub fn on_tick(&mut self, now: Instant) {
        let max = self.layout.max_scroll();
        let scroll = self.page.update(now, max);

        self.header_elevated = scroll > HEADER_ELEVATION_SCROLL;

        if self.scroll_tabs_active() {
            let progress = self.pin.observe(scroll);
            self.tabs.on_scroll_progress(progress, now);
        }

        self.trigger_reveals(scroll, now);
        self.tabs.tick(now);
        self.copy_install.tick(now);
        self.copy_code.tick(now);
        self.cursor.tick();
    }

    fn trigger_reveals(&mut self, scroll: u16, now: Instant) {
        let mut start_stats = false;
        for reveal in &mut self.reveals {
            if reveal.started.is_none() && self.layout.revealed(reveal.id, scroll) {
                reveal.started = Some(now);
                if reveal.id == SectionId::Stats {
                    start_stats = true;
                }
            }
        }
        if start_stats {
            for counter in &mut self.stat_counters {
                counter.start(now);
            }
        }
    }

    /// Entrance state of a section for the renderer
    pub fn reveal_phase(&self, id: SectionId) -> RevealPhase {
        if !self.motion_enabled {
            return RevealPhase::Shown;
        }
        match self.reveals.iter().find(|r| r.id == id) {
            Some(Reveal {
                started: Some(at), ..
            }) => RevealPhase::Entering(*at),
            Some(Reveal { started: None, .. }) => RevealPhase::Hidden,
            // Sections without a reveal entry (the hero) are always shown
            None => RevealPhase::Shown,
        }
    }

    /// Hero entrance progress for a labelled element, in [0, 1]
    pub fn hero_value(&self, label: &str, now: Instant) -> f64 {
        match self.hero {
            Some(ref timeline) => timeline.value(label, now),
            None => 1.0,
        }
    }

    /// Horizontal drift of a background blob in cells
    pub fn blob_offset(&self, index: usize, now: Instant) -> f64 {
        self.blobs
            .as_ref()
            .and_then(|blobs| blobs.get(index))
            .map(|tween| tween.value(now))
            .unwrap_or(0.0)
    }

    /// Whether the frame loop should poll at animation cadence
    pub fn needs_fast_tick(&self, now: Instant) -> bool {
        self.page.needs_update()
            || self.tabs.is_transitioning(now)
            || self
                .hero
                .as_ref()
                .is_some_and(|timeline| !timeline.finished(now))
            || self.reveals.iter().any(|r| {
                r.started
                    .is_some_and(|at| now.saturating_duration_since(at) < REVEAL_WINDOW)
            })
    }

    // --- scrolling ---

    pub fn scroll_down(&mut self, lines: i32) {
        self.page.scroll_by(lines, self.layout.max_scroll());
    }

    pub fn scroll_up(&mut self, lines: i32) {
        self.page.scroll_by(-lines, self.layout.max_scroll());
    }

    pub fn half_page(&self) -> i32 {
        (self.layout.body_height / 2).max(1) as i32
    }

    pub fn full_page(&self) -> i32 {
        self.layout.body_height.max(1) as i32
    }

    pub fn jump_to_top(&mut self, now: Instant) {
        self.page.scroll_to(now, 0, self.layout.max_scroll());
    }

    pub fn jump_to_bottom(&mut self, now: Instant) {
        let max = self.layout.max_scroll();
        self.page.scroll_to(now, max, max);
    }

    /// Smooth-scroll to a section anchor
    pub fn jump_to_section(&mut self, id: SectionId, now: Instant) {
        let anchor = self.layout.anchor(id);
        self.page.scroll_to(now, anchor, self.layout.max_scroll());
    }

    // --- theme ---

    /// Flip the appearance and store it as an explicit preference
    pub fn toggle_theme(&mut self) {
        self.appearance = self.appearance.toggled();
        self.theme = resolve_theme(self.appearance, &self.config.ui.theme);
        if let Err(e) = self.prefs.set_theme_preference(self.appearance.preference()) {
            warn!("Failed to store theme preference: {}", e);
        }
    }

    /// Session-only appearance override (CLI flag); not persisted
    pub fn set_appearance(&mut self, appearance: Appearance) {
        self.appearance = appearance;
        self.theme = resolve_theme(appearance, &self.config.ui.theme);
    }

    /// React to a system appearance change; only followed while no
    /// explicit preference is stored
    pub fn system_appearance_changed(&mut self, system: Appearance) {
        self.system_appearance = system;
        let resolved = resolve_appearance(self.prefs.theme_preference(), self.system_appearance);
        if resolved != self.appearance {
            self.appearance = resolved;
            self.theme = resolve_theme(self.appearance, &self.config.ui.theme);
        }
    }

    // --- clipboard ---

    /// Copy the npm install command
    pub fn copy_install_command(&mut self, clipboard: &mut dyn ClipboardWrite, now: Instant) {
        copy_with_feedback(
            clipboard,
            content::INSTALL_COMMAND,
            &mut self.copy_install,
            now,
        );
    }

    /// Copy the active panel's source
    pub fn copy_active_panel(&mut self, clipboard: &mut dyn ClipboardWrite, now: Instant) {
        let Some(source) = self
            .tabs
            .panels()
            .get(self.tabs.active_index())
            .map(|p| p.source)
        else {
            return;
        };
        copy_with_feedback(clipboard, source, &mut self.copy_code, now);
    }

    // --- navigation overlay ---

    pub fn open_nav(&mut self) {
        self.mode = Mode::NavOverlay;
        self.nav_selected = 0;
    }

    pub fn nav_move(&mut self, delta: i32) {
        let len = SectionId::ALL.len() as i32;
        self.nav_selected = (self.nav_selected as i32 + delta).rem_euclid(len) as usize;
    }

    /// Jump to the selected section and close the overlay
    pub fn nav_select(&mut self, now: Instant) {
        let id = SectionId::ALL[self.nav_selected.min(SectionId::ALL.len() - 1)];
        self.mode = Mode::Normal;
        self.jump_to_section(id, now);
    }

    pub fn exit_mode(&mut self) {
        self.mode = Mode::Normal;
    }

    // --- misc ---

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }

    pub fn viewport(&self) -> (u16, u16) {
        (self.width, self.height)
    }
}

#[cfg(test)]
impl App {
    /// Bare app for unit tests: in-memory prefs, dark system appearance
    pub fn for_testing(config: AppConfig, width: u16, height: u16) -> Self {
        Self::new(
            config,
            PrefStore::in_memory(),
            Appearance::Dark,
            width,
            height,
            Instant::now(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wide_app() -> App {
        App::for_testing(AppConfig::default(), 140, 40)
    }

    fn narrow_app() -> App {
        App::for_testing(AppConfig::default(), 80, 40)
    }

    #[test]
    fn test_narrow_viewport_scroll_never_changes_tabs() {
        let now = Instant::now();
        let mut app = narrow_app();
        assert!(!app.scroll_tabs_active());

        // Walk the whole document; the active tab must not move
        let max = app.layout.max_scroll();
        for step in 0..=20 {
            app.page.set(max / 20 * step);
            app.on_tick(now);
            assert_eq!(app.tabs.active_index(), 0);
        }

        // Direct selection still works
        app.tabs.select_index(2, now);
        assert_eq!(app.tabs.active_index(), 2);
    }

    #[test]
    fn test_wide_viewport_scroll_drives_tabs() {
        let now = Instant::now();
        let mut app = wide_app();
        assert!(app.scroll_tabs_active());

        let scene = app.layout.extent(SectionId::CodePreview).unwrap();
        app.page.set(scene.top + scene.height / 2);
        app.on_tick(now);
        assert_eq!(app.tabs.active_index(), 1);
    }

    #[test]
    fn test_motion_disabled_never_drives_tabs_from_scroll() {
        let now = Instant::now();
        let config = AppConfig {
            motion: showcase_core::MotionConfig {
                enabled: false,
                ..Default::default()
            },
            ..Default::default()
        };
        let mut app = App::for_testing(config, 140, 40);
        assert!(!app.scroll_tabs_active());

        app.page.set(app.layout.max_scroll());
        app.on_tick(now);
        assert_eq!(app.tabs.active_index(), 0);
    }

    #[test]
    fn test_toggle_theme_stores_explicit_preference() {
        let mut app = wide_app();
        assert_eq!(app.appearance, Appearance::Dark);
        assert_eq!(app.prefs.theme_preference(), None);

        app.toggle_theme();
        assert_eq!(app.appearance, Appearance::Light);
        assert_eq!(
            app.prefs.theme_preference(),
            Some(showcase_core::ThemePreference::Light)
        );
    }

    #[test]
    fn test_system_change_only_followed_without_preference() {
        let mut app = wide_app();

        // No stored preference: the system signal is followed
        app.system_appearance_changed(Appearance::Light);
        assert_eq!(app.appearance, Appearance::Light);

        // An explicit choice pins the appearance
        app.toggle_theme(); // stores dark
        app.system_appearance_changed(Appearance::Light);
        assert_eq!(app.appearance, Appearance::Dark);
    }

    #[test]
    fn test_resize_abandons_inflight_transition() {
        let now = Instant::now();
        let mut app = wide_app();

        app.tabs.select_index(1, now);
        assert!(app.tabs.is_transitioning(now));

        app.on_resize(100, 30);
        assert!(!app.tabs.is_transitioning(now));
        // Scroll position stays within the new document
        assert!(app.page.current() <= app.layout.max_scroll());
    }

    #[test]
    fn test_header_elevates_past_threshold() {
        let now = Instant::now();
        let mut app = wide_app();

        app.page.set(HEADER_ELEVATION_SCROLL + 1);
        app.on_tick(now);
        assert!(app.header_elevated);

        app.page.set(0);
        app.on_tick(now);
        assert!(!app.header_elevated);
    }

    #[test]
    fn test_stat_count_up_starts_on_reveal() {
        let now = Instant::now();
        let mut app = wide_app();

        let stats = app.layout.extent(SectionId::Stats).unwrap();
        app.page.set(stats.top);
        app.on_tick(now);
        assert!(matches!(
            app.reveal_phase(SectionId::Stats),
            RevealPhase::Entering(_)
        ));

        let target = app.stat_counters[0].value(now + COUNT_UP);
        assert_eq!(target, content::stats()[0].target);
        // Counts start from zero at the moment of reveal
        assert!(app.stat_counters[0].value(now) < target);
    }

    #[test]
    fn test_nav_selection_wraps() {
        let mut app = wide_app();
        app.open_nav();
        assert_eq!(app.mode, Mode::NavOverlay);

        app.nav_move(-1);
        assert_eq!(app.nav_selected, SectionId::ALL.len() - 1);
        app.nav_move(1);
        assert_eq!(app.nav_selected, 0);
    }
}
