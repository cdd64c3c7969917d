//! Static page content for the showcase.
//!
//! Everything here is defined once at startup and never mutated: the code
//! sample panels, feature cards, stats, supported frameworks and the
//! changelog.

use chrono::NaiveDate;

/// npm command shown in the hero install line
pub const INSTALL_COMMAND: &str = "npm install simple-design-system";

/// Documentation site opened by the browse action
pub const DOCS_URL: &str = "https://github.com/simple-design-system/simple-design-system";

/// One selectable code-sample variant in the tabbed preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    /// Stable key ("react", "vanilla", "webcomponent")
    pub key: &'static str,
    /// Tab label shown in the preview chrome
    pub label: &'static str,
    /// Filename shown in the window title bar
    pub filename: &'static str,
    /// Formatted source text
    pub source: &'static str,
}

/// The ordered, immutable panel set for the code preview
pub fn code_panels() -> Vec<Panel> {
    vec![
        Panel {
            key: "react",
            label: "React",
            filename: "Button.tsx",
            source: r#"import { Button } from 'simple-design-system'

export default function App() {
  return (
    <div className="flex gap-4">
      <Button variant="primary">Primary</Button>
      <Button variant="secondary">Secondary</Button>
      <Button variant="outline">Outline</Button>
      <Button variant="ghost">Ghost</Button>
    </div>
  )
}"#,
        },
        Panel {
            key: "vanilla",
            label: "Vanilla",
            filename: "index.html",
            source: r#"<!-- Import CSS -->
<link rel="stylesheet" href="simple-design-system.css">

<!-- Use components with classes -->
<div class="sds-flex sds-gap-4">
  <button class="sds-btn sds-btn--primary">Primary</button>
  <button class="sds-btn sds-btn--secondary">Secondary</button>
  <button class="sds-btn sds-btn--outline">Outline</button>
  <button class="sds-btn sds-btn--ghost">Ghost</button>
</div>"#,
        },
        Panel {
            key: "webcomponent",
            label: "Web Components",
            filename: "app.js",
            source: r#"// Import the web component
import 'simple-design-system/web-components'

// Use in your HTML
<sds-button variant="primary">Primary</sds-button>
<sds-button variant="secondary">Secondary</sds-button>
<sds-button variant="outline">Outline</sds-button>
<sds-button variant="ghost">Ghost</sds-button>

// Or use JavaScript API
const btn = document.createElement('sds-button')
btn.setAttribute('variant', 'primary')
btn.textContent = 'Click me'"#,
        },
    ]
}

/// One card in the features grid
#[derive(Debug, Clone)]
pub struct FeatureCard {
    pub title: &'static str,
    pub blurb: &'static str,
}

pub fn feature_cards() -> Vec<FeatureCard> {
    vec![
        FeatureCard {
            title: "Framework agnostic",
            blurb: "One component library for React, plain HTML and web components.",
        },
        FeatureCard {
            title: "Themeable",
            blurb: "Light and dark palettes driven by design tokens you can override.",
        },
        FeatureCard {
            title: "Accessible",
            blurb: "Keyboard navigation and sensible focus order in every component.",
        },
        FeatureCard {
            title: "Lightweight",
            blurb: "No runtime dependencies; ship only the pieces you import.",
        },
        FeatureCard {
            title: "Composable",
            blurb: "Small primitives that combine into full page layouts.",
        },
        FeatureCard {
            title: "Typed API",
            blurb: "Complete TypeScript definitions for every variant and prop.",
        },
    ]
}

/// One animated number in the stats band
#[derive(Debug, Clone)]
pub struct Stat {
    pub label: &'static str,
    pub target: u32,
    /// Suffix rendered after the value ("+" for counts, "%" for the
    /// coverage stat)
    pub suffix: &'static str,
}

pub fn stats() -> Vec<Stat> {
    vec![
        Stat {
            label: "Components",
            target: 50,
            suffix: "+",
        },
        Stat {
            label: "Design tokens",
            target: 120,
            suffix: "+",
        },
        Stat {
            label: "Test coverage",
            target: 100,
            suffix: "%",
        },
        Stat {
            label: "Releases",
            target: 24,
            suffix: "+",
        },
    ]
}

/// Frameworks listed in the compatibility band
pub fn frameworks() -> &'static [&'static str] {
    &["React", "Vue", "Svelte", "Angular", "Solid", "Web Components"]
}

/// One entry in the changelog section
#[derive(Debug, Clone)]
pub struct ChangelogEntry {
    pub version: &'static str,
    pub date: NaiveDate,
    pub notes: &'static str,
}

pub fn changelog() -> Vec<ChangelogEntry> {
    vec![
        ChangelogEntry {
            version: "2.4.0",
            date: date(2026, 6, 18),
            notes: "Combobox and date picker components, tree-shakeable icon set.",
        },
        ChangelogEntry {
            version: "2.3.1",
            date: date(2026, 4, 2),
            notes: "Contrast fixes for outline buttons in dark mode.",
        },
        ChangelogEntry {
            version: "2.3.0",
            date: date(2026, 2, 11),
            notes: "Web component bundle, CSS-only dialog, reduced motion support.",
        },
        ChangelogEntry {
            version: "2.2.0",
            date: date(2025, 11, 27),
            notes: "Design token overhaul; every color is now themeable.",
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    // Literal dates above are always valid
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_keys_are_unique_and_ordered() {
        let panels = code_panels();
        assert_eq!(panels.len(), 3);
        assert_eq!(panels[0].key, "react");
        assert_eq!(panels[1].key, "vanilla");
        assert_eq!(panels[2].key, "webcomponent");
    }

    #[test]
    fn test_panels_have_content() {
        for panel in code_panels() {
            assert!(!panel.filename.is_empty());
            assert!(!panel.source.is_empty());
        }
    }

    #[test]
    fn test_changelog_is_newest_first() {
        let entries = changelog();
        for pair in entries.windows(2) {
            assert!(pair[0].date > pair[1].date);
        }
    }
}
