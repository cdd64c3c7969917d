pub mod config;
pub mod content;
pub mod error;
pub mod prefs;

pub use config::{AppConfig, EasingType, MotionConfig};
pub use error::{Error, Result};
pub use prefs::{resolve_appearance, Appearance, PrefStore, ThemePreference};
