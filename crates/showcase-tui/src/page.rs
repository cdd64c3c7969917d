//! Vertical layout of the showcase page.
//!
//! The page is a fixed sequence of sections laid out top to bottom in
//! document rows; the viewport scrolls over it. Layout is recomputed on
//! resize and whenever the scroll-tab mode flips between pinned (wide
//! terminals, scene spans several viewport heights) and static (narrow
//! terminals, the preview is an ordinary section).

use showcase_core::content;

/// Rows of fixed chrome above the scrolled document
pub const HEADER_ROWS: u16 = 3;

/// Scroll depth past which the header renders elevated
pub const HEADER_ELEVATION_SCROLL: u16 = 6;

/// Fraction of the viewport a section top must reach before its entrance
/// animation plays ("top 80%" in the original)
const REVEAL_VIEWPORT_FRACTION: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Hero,
    Features,
    Stats,
    CodePreview,
    Frameworks,
    Changelog,
}

impl SectionId {
    /// All sections in document order
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::Features,
        SectionId::Stats,
        SectionId::CodePreview,
        SectionId::Frameworks,
        SectionId::Changelog,
    ];

    /// Title shown in the navigation overlay
    pub fn title(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::Features => "Features",
            Self::Stats => "By the numbers",
            Self::CodePreview => "Code",
            Self::Frameworks => "Frameworks",
            Self::Changelog => "Changelog",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SectionExtent {
    pub id: SectionId,
    /// First document row of the section
    pub top: u16,
    pub height: u16,
}

/// Computed document layout for one viewport size
#[derive(Debug, Clone)]
pub struct PageLayout {
    pub width: u16,
    /// Height of the scrolled body (viewport minus header chrome)
    pub body_height: u16,
    sections: Vec<SectionExtent>,
    total: u16,
}

impl PageLayout {
    /// Lay the page out for a terminal of `width` x `height` cells.
    ///
    /// `pinned_tabs` selects the scene geometry for the code preview:
    /// pinned mode stretches it over `pin_span_viewports` viewport
    /// heights of scroll, static mode sizes it to its content.
    pub fn compute(width: u16, height: u16, pinned_tabs: bool, pin_span_viewports: u16) -> Self {
        let body_height = height.saturating_sub(HEADER_ROWS).max(1);

        let mut sections = Vec::with_capacity(SectionId::ALL.len());
        let mut top = 0u16;
        for id in SectionId::ALL {
            let height = match id {
                SectionId::Hero => body_height.max(16),
                SectionId::Features => {
                    let cols = feature_columns(width);
                    let rows = content::feature_cards().len().div_ceil(cols as usize) as u16;
                    2 + rows * 5
                }
                SectionId::Stats => 7,
                SectionId::CodePreview => {
                    if pinned_tabs {
                        body_height.saturating_mul(pin_span_viewports.max(1))
                    } else {
                        code_window_rows()
                    }
                }
                SectionId::Frameworks => 5,
                SectionId::Changelog => 2 + content::changelog().len() as u16 * 3 + 1,
            };
            sections.push(SectionExtent { id, top, height });
            top = top.saturating_add(height);
        }

        Self {
            width,
            body_height,
            sections,
            total: top,
        }
    }

    pub fn sections(&self) -> &[SectionExtent] {
        &self.sections
    }

    pub fn extent(&self, id: SectionId) -> Option<SectionExtent> {
        self.sections.iter().copied().find(|s| s.id == id)
    }

    /// Document row an anchor jump scrolls to
    pub fn anchor(&self, id: SectionId) -> u16 {
        self.extent(id).map(|s| s.top).unwrap_or(0)
    }

    /// Total document height in rows
    pub fn total_height(&self) -> u16 {
        self.total
    }

    /// Greatest reachable scroll position
    pub fn max_scroll(&self) -> u16 {
        self.total.saturating_sub(self.body_height)
    }

    /// Whether a section's entrance trigger row has entered the viewport
    pub fn revealed(&self, id: SectionId, scroll: u16) -> bool {
        let Some(extent) = self.extent(id) else {
            return false;
        };
        let trigger_line = scroll as f64 + self.body_height as f64 * REVEAL_VIEWPORT_FRACTION;
        (extent.top as f64) <= trigger_line
    }
}

/// Columns in the feature grid at a given terminal width
pub fn feature_columns(width: u16) -> u16 {
    (width / 40).clamp(1, 3)
}

/// Rows the static (unpinned) code window occupies
pub fn code_window_rows() -> u16 {
    let body = content::code_panels()
        .iter()
        .map(|p| p.source.lines().count())
        .max()
        .unwrap_or(0) as u16;
    // Title bar, tab row, padding, hint line
    body + 6
}
