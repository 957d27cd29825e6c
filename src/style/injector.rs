//! Style injector state machine
//!
//! This module owns the lifecycle of the single style resource markveil keeps
//! in the host document. The injector is either `Detached` (no resource) or
//! `Attached` (exactly one resource, identified by [`STYLE_RESOURCE_ID`]).
//!
//! All three operations are safe to call from any state and any number of
//! times. Nothing here returns an error to the caller: the worst observable
//! failure is a stray resource that could not be removed, which is logged and
//! retried by the forced pre-removal of the next apply.

use log::{debug, error, warn};

use crate::config::MarkerSettings;
use crate::style::host::{StyleHandle, StyleHost};
use crate::style::rules::{generate_rules, render_stylesheet};

/// Stable identifier of the injected style resource. Unique within the host
/// document so id-based removal cannot hit unrelated resources.
pub const STYLE_RESOURCE_ID: &str = "markveil-marker-styles";

// ─────────────────────────────────────────────────────────────────────────────
// Style Injector
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InjectorState {
    Detached,
    Attached,
}

/// Manages the single injected style resource.
#[derive(Debug)]
pub struct StyleInjector {
    state: InjectorState,
    handle: Option<StyleHandle>,
}

impl Default for StyleInjector {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleInjector {
    pub fn new() -> Self {
        Self {
            state: InjectorState::Detached,
            handle: None,
        }
    }

    /// Whether a style resource is currently attached.
    pub fn is_attached(&self) -> bool {
        self.state == InjectorState::Attached
    }

    /// Generate rules for the given settings and attach them as a fresh
    /// style resource.
    ///
    /// Always forces a removal pass first, so no duplicate resource can exist
    /// even if the in-memory state disagrees with the document (e.g., after a
    /// crash-reload cycle). If the settings yield no rules, no resource is
    /// created and the injector stays detached.
    pub fn apply<H: StyleHost>(&mut self, host: &mut H, settings: &MarkerSettings) {
        self.remove(host);

        let rules = generate_rules(settings);
        if rules.is_empty() {
            debug!("No marker rules active, skipping style resource creation");
            return;
        }

        let content = render_stylesheet(&rules);
        self.handle = Some(host.create_style(STYLE_RESOURCE_ID, &content));
        self.state = InjectorState::Attached;
        debug!(
            "Attached style resource '{}' with {} rules",
            STYLE_RESOURCE_ID,
            rules.len()
        );
    }

    /// Detach the style resource, leaving no residue.
    ///
    /// Removes primarily by the held handle and then defensively by the
    /// stable id, covering the case where the handle was lost but a resource
    /// persists. Verifies the post-condition; a surviving resource is reported
    /// as an internal diagnostic, never an error to the caller.
    pub fn remove<H: StyleHost>(&mut self, host: &mut H) {
        if let Some(handle) = self.handle.take() {
            if !host.remove_style(handle) {
                debug!("Held style handle was already gone from the document");
            }
        }

        let swept = host.remove_styles_by_id(STYLE_RESOURCE_ID);
        if swept > 0 {
            warn!(
                "Swept {} stray style resource(s) with id '{}'",
                swept, STYLE_RESOURCE_ID
            );
        }

        if host.has_style(STYLE_RESOURCE_ID) {
            error!(
                "Style resource '{}' still present after removal",
                STYLE_RESOURCE_ID
            );
        }

        self.state = InjectorState::Detached;
    }

    /// Tear down and conditionally re-apply.
    ///
    /// This is the path every settings change goes through. Calling it any
    /// number of times with the same settings leaves the document in the same
    /// state as calling it once.
    pub fn refresh<H: StyleHost>(&mut self, host: &mut H, settings: &MarkerSettings) {
        self.remove(host);
        if settings.enabled {
            self.apply(host, settings);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
