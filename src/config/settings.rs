//! Marker-visibility settings
//!
//! This module defines the `MarkerSettings` record that holds every
//! user-configurable flag, with serde support for JSON persistence, plus the
//! `MarkerCategory` enum the settings page and the rule generator are keyed by.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Marker Categories
// ─────────────────────────────────────────────────────────────────────────────

/// The Markdown syntax-marker categories that can be suppressed.
///
/// Each category corresponds to one granular toggle on the settings page and
/// one block of selectors in the generated stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerCategory {
    /// Leading `#` characters of ATX headings
    Headers,
    /// `**` / `__` delimiters around bold text
    Bold,
    /// `*` / `_` delimiters around italic text
    Italic,
    /// Bracket/paren syntax and the raw URL of links
    Links,
    /// Inline backticks and fence-boundary markers of code
    Code,
    /// Leading `>` characters of blockquotes
    Quotes,
    /// Raw `-`, `*`, `+` and `1.` characters of list items
    Lists,
}

impl MarkerCategory {
    /// Get the display label for the settings page.
    pub fn label(&self) -> &'static str {
        match self {
            MarkerCategory::Headers => "Hide heading markers",
            MarkerCategory::Bold => "Hide bold markers",
            MarkerCategory::Italic => "Hide italic markers",
            MarkerCategory::Links => "Hide link syntax",
            MarkerCategory::Code => "Hide code markers",
            MarkerCategory::Quotes => "Hide quote markers",
            MarkerCategory::Lists => "Hide list markers",
        }
    }

    /// Get a description of what the toggle suppresses.
    pub fn description(&self) -> &'static str {
        match self {
            MarkerCategory::Headers => "Suppress the leading # characters of headings",
            MarkerCategory::Bold => "Suppress the ** and __ delimiters around bold text",
            MarkerCategory::Italic => "Suppress the * and _ delimiters around italic text",
            MarkerCategory::Links => "Suppress link brackets, parentheses, and the raw URL",
            MarkerCategory::Code => "Suppress inline backticks and code fence boundaries",
            MarkerCategory::Quotes => "Suppress the leading > characters of blockquotes",
            MarkerCategory::Lists => "Fade the raw bullet and number characters of lists",
        }
    }

    /// Get all categories, in stylesheet order.
    pub fn all() -> &'static [MarkerCategory] {
        &[
            MarkerCategory::Headers,
            MarkerCategory::Bold,
            MarkerCategory::Italic,
            MarkerCategory::Links,
            MarkerCategory::Code,
            MarkerCategory::Quotes,
            MarkerCategory::Lists,
        ]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Main Settings Struct
// ─────────────────────────────────────────────────────────────────────────────

/// The persisted marker-visibility settings record.
///
/// This struct is serialized to a flat camelCase JSON object. All fields
/// default to `true`; a partial record from an older version merge-fills the
/// missing fields from `Default` via the container-level `#[serde(default)]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarkerSettings {
    /// Master switch: whether marker suppression is active
    pub enabled: bool,

    /// Whether the status-bar indicator is shown
    pub show_status_bar: bool,

    /// Per-category toggles
    pub hide_headers: bool,
    pub hide_bold: bool,
    pub hide_italic: bool,
    pub hide_links: bool,
    pub hide_code: bool,
    pub hide_quotes: bool,
    pub hide_lists: bool,
}

impl Default for MarkerSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            show_status_bar: true,
            hide_headers: true,
            hide_bold: true,
            hide_italic: true,
            hide_links: true,
            hide_code: true,
            hide_quotes: true,
            hide_lists: true,
        }
    }
}

impl MarkerSettings {
    /// Whether the given category is currently suppressed.
    pub fn is_hidden(&self, category: MarkerCategory) -> bool {
        match category {
            MarkerCategory::Headers => self.hide_headers,
            MarkerCategory::Bold => self.hide_bold,
            MarkerCategory::Italic => self.hide_italic,
            MarkerCategory::Links => self.hide_links,
            MarkerCategory::Code => self.hide_code,
            MarkerCategory::Quotes => self.hide_quotes,
            MarkerCategory::Lists => self.hide_lists,
        }
    }

    /// Set the suppression flag for the given category.
    pub fn set_hidden(&mut self, category: MarkerCategory, hidden: bool) {
        match category {
            MarkerCategory::Headers => self.hide_headers = hidden,
            MarkerCategory::Bold => self.hide_bold = hidden,
            MarkerCategory::Italic => self.hide_italic = hidden,
            MarkerCategory::Links => self.hide_links = hidden,
            MarkerCategory::Code => self.hide_code = hidden,
            MarkerCategory::Quotes => self.hide_quotes = hidden,
            MarkerCategory::Lists => self.hide_lists = hidden,
        }
    }

    /// Whether at least one category is suppressed.
    pub fn any_category_hidden(&self) -> bool {
        MarkerCategory::all().iter().any(|c| self.is_hidden(*c))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
