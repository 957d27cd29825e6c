//! Suppression rule generation
//!
//! This module maps the settings record to the ordered rule sequence that
//! implements marker suppression, and renders that sequence to the stylesheet
//! text carried by the injected style resource.
//!
//! The selectors target the CSS-like classes the host editor attaches to
//! formatting-marker tokens. Each category is covered by a small fixed set of
//! layer variants (base token class, active-line variant, content-wrapper
//! variant) because some host-applied line states carry their own token
//! styling that locally overrides a single generic rule. If the host renames
//! these classes, the tables below are the only place to update.

use crate::config::{MarkerCategory, MarkerSettings};

// ─────────────────────────────────────────────────────────────────────────────
// Declarations
// ─────────────────────────────────────────────────────────────────────────────

/// Zero-footprint suppression: the token renders with no width, no height,
/// invisible and transparent, so sibling text does not shift in either axis.
pub const SUPPRESS_DECL: &str =
    "display: inline-block; width: 0; height: 0; overflow: hidden; visibility: hidden; color: transparent;";

/// Color-only suppression for list tokens. The host draws the rendered bullet
/// or number glyph from the same token, so the raw character may only become
/// invisible, not lose its footprint.
pub const TRANSPARENT_DECL: &str = "color: transparent;";

// ─────────────────────────────────────────────────────────────────────────────
// Selector Tables
// ─────────────────────────────────────────────────────────────────────────────

const HEADER_SELECTORS: [&str; 3] = [
    ".cm-formatting-header",
    ".cm-line.cm-active .cm-formatting-header",
    ".cm-content .cm-formatting-header",
];

const BOLD_SELECTORS: [&str; 3] = [
    ".cm-formatting-strong",
    ".cm-line.cm-active .cm-formatting-strong",
    ".cm-content .cm-formatting-strong",
];

const ITALIC_SELECTORS: [&str; 3] = [
    ".cm-formatting-em",
    ".cm-line.cm-active .cm-formatting-em",
    ".cm-content .cm-formatting-em",
];

// Bracket/paren markers in all layers, plus the raw URL text.
const LINK_SELECTORS: [&str; 4] = [
    ".cm-formatting-link",
    ".cm-line.cm-active .cm-formatting-link",
    ".cm-content .cm-formatting-link",
    ".cm-url",
];

// Inline backticks, then fence boundaries in all layers. The block body keeps
// its own padding; compensating padding under hidden fences leaves visible
// artifacts.
const CODE_SELECTORS: [&str; 4] = [
    ".cm-formatting-code",
    ".cm-formatting-code-block",
    ".cm-line.cm-active .cm-formatting-code-block",
    ".cm-content .cm-formatting-code-block",
];

const QUOTE_SELECTORS: [&str; 3] = [
    ".cm-formatting-quote",
    ".cm-line.cm-active .cm-formatting-quote",
    ".cm-content .cm-formatting-quote",
];

const LIST_SELECTORS: [&str; 3] = [
    ".cm-formatting-list",
    ".cm-line.cm-active .cm-formatting-list",
    ".cm-content .cm-formatting-list",
];

/// Get the selector variants for a category.
pub fn selectors_for(category: MarkerCategory) -> &'static [&'static str] {
    match category {
        MarkerCategory::Headers => &HEADER_SELECTORS,
        MarkerCategory::Bold => &BOLD_SELECTORS,
        MarkerCategory::Italic => &ITALIC_SELECTORS,
        MarkerCategory::Links => &LINK_SELECTORS,
        MarkerCategory::Code => &CODE_SELECTORS,
        MarkerCategory::Quotes => &QUOTE_SELECTORS,
        MarkerCategory::Lists => &LIST_SELECTORS,
    }
}

/// Get the suppressing declaration for a category.
pub fn declaration_for(category: MarkerCategory) -> &'static str {
    match category {
        MarkerCategory::Lists => TRANSPARENT_DECL,
        _ => SUPPRESS_DECL,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rule Generation
// ─────────────────────────────────────────────────────────────────────────────

/// A single style rule: one selector paired with one declaration block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRule {
    /// Selector the host document matches against its marker tokens
    pub selector: &'static str,
    /// Declaration block applied to matching tokens
    pub declaration: &'static str,
}

/// Generate the ordered rule sequence for the given settings.
///
/// Pure function of the settings record. Yields an empty sequence when the
/// master switch is off or when every category toggle is off, which is the
/// signal to the injector to skip resource creation entirely.
pub fn generate_rules(settings: &MarkerSettings) -> Vec<StyleRule> {
    if !settings.enabled {
        return Vec::new();
    }

    let mut rules = Vec::new();
    for &category in MarkerCategory::all() {
        if !settings.is_hidden(category) {
            continue;
        }
        let declaration = declaration_for(category);
        for &selector in selectors_for(category) {
            rules.push(StyleRule {
                selector,
                declaration,
            });
        }
    }
    rules
}

/// Render a rule sequence to stylesheet text.
pub fn render_stylesheet(rules: &[StyleRule]) -> String {
    let mut out = String::new();
    for rule in rules {
        out.push_str(rule.selector);
        out.push_str(" { ");
        out.push_str(rule.declaration);
        out.push_str(" }\n");
    }
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_rule_counts() {
        let rules = generate_rules(&MarkerSettings::default());

        // 3 each for headers/bold/italic/quotes/lists, 4 each for links/code.
        assert_eq!(rules.len(), 23);

        let count = |class: &str| {
            rules
                .iter()
                .filter(|r| r.selector.contains(class))
                .count()
        };
        assert_eq!(count("cm-formatting-header"), 3);
        assert_eq!(count("cm-formatting-strong"), 3);
        assert_eq!(count("cm-formatting-em"), 3);
        assert_eq!(count("cm-formatting-link"), 3);
        assert_eq!(count("cm-url"), 1);
        assert_eq!(count("cm-formatting-code"), 4);
        assert_eq!(count("cm-formatting-quote"), 3);
        assert_eq!(count("cm-formatting-list"), 3);
    }

    #[test]
    fn test_disabled_yields_no_rules() {
        let settings = MarkerSettings {
            enabled: false,
            ..MarkerSettings::default()
        };
        assert!(generate_rules(&settings).is_empty());
    }

    #[test]
    fn test_all_categories_off_yields_no_rules() {
        let mut settings = MarkerSettings::default();
        for &category in MarkerCategory::all() {
            settings.set_hidden(category, false);
        }
        assert!(settings.enabled);
        assert!(generate_rules(&settings).is_empty());
    }

    #[test]
    fn test_lists_use_color_only_suppression() {
        let rules = generate_rules(&MarkerSettings::default());

        for rule in &rules {
            if rule.selector.contains("cm-formatting-list") {
                assert_eq!(rule.declaration, TRANSPARENT_DECL);
            } else {
                assert_eq!(rule.declaration, SUPPRESS_DECL);
            }
        }
    }

    #[test]
    fn test_zero_footprint_declaration_shape() {
        assert!(SUPPRESS_DECL.contains("width: 0"));
        assert!(SUPPRESS_DECL.contains("height: 0"));
        assert!(SUPPRESS_DECL.contains("visibility: hidden"));
        assert!(SUPPRESS_DECL.contains("color: transparent"));
        // Color-only must not collapse the token's footprint.
        assert!(!TRANSPARENT_DECL.contains("width"));
        assert!(!TRANSPARENT_DECL.contains("visibility"));
    }

    #[test]
    fn test_single_category_rules() {
        let mut settings = MarkerSettings::default();
        for &category in MarkerCategory::all() {
            settings.set_hidden(category, category == MarkerCategory::Quotes);
        }

        let rules = generate_rules(&settings);
        assert_eq!(rules.len(), 3);
        assert!(rules
            .iter()
            .all(|r| r.selector.contains("cm-formatting-quote")));
    }

    #[test]
    fn test_rules_follow_category_order() {
        let rules = generate_rules(&MarkerSettings::default());
        assert_eq!(rules[0].selector, ".cm-formatting-header");
        assert_eq!(rules.last().unwrap().selector, ".cm-content .cm-formatting-list");
    }

    #[test]
    fn test_generation_is_deterministic() {
        let settings = MarkerSettings::default();
        assert_eq!(generate_rules(&settings), generate_rules(&settings));
    }

    #[test]
    fn test_render_stylesheet_format() {
        let rules = [StyleRule {
            selector: ".cm-formatting-header",
            declaration: SUPPRESS_DECL,
        }];
        let sheet = render_stylesheet(&rules);

        assert_eq!(
            sheet,
            format!(".cm-formatting-header {{ {} }}\n", SUPPRESS_DECL)
        );
    }

    #[test]
    fn test_render_empty_rules() {
        assert!(render_stylesheet(&[]).is_empty());
    }
}
