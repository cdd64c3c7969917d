//! Motion system for the showcase page.
//!
//! Everything that moves on the page goes through this module: eased
//! property tweens, ordered entrance timelines, the panel cross-fade, the
//! pinned scroll scene and the smooth page scroller. All state advances
//! from an explicit `Instant` passed in by the frame loop; completion is
//! derived from elapsed time, never from a completion callback, so a
//! stalled animation cannot leave a guard flag set forever.

pub mod easing;
pub mod pin;
pub mod scroll;
pub mod timeline;
pub mod timing;
pub mod transition;
pub mod tween;

pub use easing::{EasingType, EasingTypeExt};
pub use pin::PinnedScene;
pub use scroll::PageScroller;
pub use timeline::{Timeline, TimelineBuilder};
pub use transition::{PanelTransition, TransitionPhase};
pub use tween::Tween;
