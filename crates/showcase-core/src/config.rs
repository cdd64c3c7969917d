use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            ui: UiConfig::default(),
            motion: MotionConfig::default(),
            keymap: KeymapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (preference store lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Minimum terminal width (columns) for scroll-driven tab switching.
    /// Narrower terminals fall back to key-driven selection only.
    #[serde(default = "default_scroll_tabs_min_width")]
    pub scroll_tabs_min_width: u16,
    /// Render the easing cursor trail when mouse events are available
    #[serde(default = "default_true")]
    pub cursor_trail: bool,
    /// Theme color overrides
    #[serde(default)]
    pub theme: ThemeColorOverrides,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            scroll_tabs_min_width: default_scroll_tabs_min_width(),
            cursor_trail: default_true(),
            theme: ThemeColorOverrides::default(),
        }
    }
}

/// Animation parameters for the motion system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Master switch. When false every animation renders its final state
    /// immediately (reduced motion).
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Animate page scrolling instead of jumping
    #[serde(default = "default_true")]
    pub smooth_scroll: bool,
    /// Panel transition / scroll animation duration in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Easing function for scroll and panel transitions
    #[serde(default)]
    pub easing: EasingType,
    /// Frame rate while an animation is active
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u16,
    /// Scroll distance of the pinned code-preview scene, in viewport heights
    #[serde(default = "default_pin_span_viewports")]
    pub pin_span_viewports: u16,
    /// How long a copy button shows "Copied!" before reverting, in milliseconds
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            smooth_scroll: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
            pin_span_viewports: default_pin_span_viewports(),
            copy_feedback_ms: default_copy_feedback_ms(),
        }
    }
}

/// Easing curve applied to animation progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    Linear,
    #[default]
    Cubic,
    Quintic,
    EaseOut,
    SineInOut,
}

/// Optional color overrides, each a hex string ("#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Page background
    pub bg0: Option<String>,
    /// Raised surface background (cards, code window)
    pub bg1: Option<String>,
    /// Highlight background (active tab, selection)
    pub bg2: Option<String>,
    /// Primary foreground
    pub fg0: Option<String>,
    /// Secondary foreground
    pub fg1: Option<String>,
    /// Accent color
    pub accent: Option<String>,
    /// Brand green (copy confirmation)
    pub brand: Option<String>,
    /// Error color
    pub error: Option<String>,
    /// Success color
    pub success: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "G", "<C-d>" (Ctrl+d), "<S-Tab>" (Shift+Tab), "<CR>", "<Esc>", "gg"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,

    // Page scrolling
    /// Scroll the page down one line
    #[serde(default = "default_key_scroll_down")]
    pub scroll_down: String,
    /// Scroll the page up one line
    #[serde(default = "default_key_scroll_up")]
    pub scroll_up: String,
    /// Scroll half a page down
    #[serde(default = "default_key_scroll_half_down")]
    pub scroll_half_down: String,
    /// Scroll half a page up
    #[serde(default = "default_key_scroll_half_up")]
    pub scroll_half_up: String,
    /// Scroll a full page down
    #[serde(default = "default_key_scroll_page_down")]
    pub scroll_page_down: String,
    /// Scroll a full page up
    #[serde(default = "default_key_scroll_page_up")]
    pub scroll_page_up: String,
    /// Jump to the top of the page
    #[serde(default = "default_key_jump_to_top")]
    pub jump_to_top: String,
    /// Jump to the bottom of the page
    #[serde(default = "default_key_jump_to_bottom")]
    pub jump_to_bottom: String,

    // Code preview tabs
    /// Select the next code tab
    #[serde(default = "default_key_next_tab")]
    pub next_tab: String,
    /// Select the previous code tab
    #[serde(default = "default_key_prev_tab")]
    pub prev_tab: String,

    // Actions
    /// Confirm / select (navigation overlay)
    #[serde(default = "default_key_select")]
    pub select: String,
    /// Toggle between light and dark theme
    #[serde(default = "default_key_toggle_theme")]
    pub toggle_theme: String,
    /// Copy the visible code sample
    #[serde(default = "default_key_copy_code")]
    pub copy_code: String,
    /// Copy the npm install command
    #[serde(default = "default_key_copy_install")]
    pub copy_install: String,
    /// Open the section navigation overlay
    #[serde(default = "default_key_nav_overlay")]
    pub nav_overlay: String,
    /// Open the project documentation in a browser
    #[serde(default = "default_key_open_docs")]
    pub open_docs: String,
    /// Show the help overlay
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            scroll_down: default_key_scroll_down(),
            scroll_up: default_key_scroll_up(),
            scroll_half_down: default_key_scroll_half_down(),
            scroll_half_up: default_key_scroll_half_up(),
            scroll_page_down: default_key_scroll_page_down(),
            scroll_page_up: default_key_scroll_page_up(),
            jump_to_top: default_key_jump_to_top(),
            jump_to_bottom: default_key_jump_to_bottom(),
            next_tab: default_key_next_tab(),
            prev_tab: default_key_prev_tab(),
            select: default_key_select(),
            toggle_theme: default_key_toggle_theme(),
            copy_code: default_key_copy_code(),
            copy_install: default_key_copy_install(),
            nav_overlay: default_key_nav_overlay(),
            open_docs: default_key_open_docs(),
            help: default_key_help(),
        }
    }
}

// Default keymap values (Vim-style notation)
fn default_key_quit() -> String { "q".to_string() }
fn default_key_scroll_down() -> String { "j".to_string() }
fn default_key_scroll_up() -> String { "k".to_string() }
fn default_key_scroll_half_down() -> String { "<C-d>".to_string() }
fn default_key_scroll_half_up() -> String { "<C-u>".to_string() }
fn default_key_scroll_page_down() -> String { "<C-f>".to_string() }
fn default_key_scroll_page_up() -> String { "<C-b>".to_string() }
fn default_key_jump_to_top() -> String { "gg".to_string() }
fn default_key_jump_to_bottom() -> String { "G".to_string() }
fn default_key_next_tab() -> String { "<Tab>".to_string() }
fn default_key_prev_tab() -> String { "<S-Tab>".to_string() }
fn default_key_select() -> String { "<CR>".to_string() }
fn default_key_toggle_theme() -> String { "t".to_string() }
fn default_key_copy_code() -> String { "c".to_string() }
fn default_key_copy_install() -> String { "y".to_string() }
fn default_key_nav_overlay() -> String { "m".to_string() }
fn default_key_open_docs() -> String { "b".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sds-showcase")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_scroll_tabs_min_width() -> u16 {
    120
}

fn default_animation_duration() -> u64 {
    150
}

fn default_animation_fps() -> u16 {
    60
}

fn default_pin_span_viewports() -> u16 {
    3
}

fn default_copy_feedback_ms() -> u64 {
    2000
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/sds-showcase/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("sds-showcase")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the preference store path
    pub fn prefs_path(&self) -> PathBuf {
        self.data_dir().join("prefs.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_motion_config() {
        let config = MotionConfig::default();
        assert!(config.enabled);
        assert!(config.smooth_scroll);
        assert_eq!(config.animation_duration_ms, 150);
        assert_eq!(config.easing, EasingType::Cubic);
        assert_eq!(config.animation_fps, 60);
        assert_eq!(config.pin_span_viewports, 3);
        assert_eq!(config.copy_feedback_ms, 2000);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [motion]
            animation_duration_ms = 300
            easing = "sine-in-out"
            "#,
        )
        .unwrap();
        assert_eq!(config.motion.animation_duration_ms, 300);
        assert_eq!(config.motion.easing, EasingType::SineInOut);
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.keymap.quit, "q");
    }

    #[test]
    fn test_scroll_tabs_min_width_default() {
        let config = UiConfig::default();
        assert_eq!(config.scroll_tabs_min_width, 120);
    }
}
