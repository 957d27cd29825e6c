//! Status-bar indicator
//!
//! A single optional status-bar item reflecting the master toggle. Its text
//! is a pure function of the `enabled` flag. The item is clickable by host
//! contract; the embedder routes its click events to
//! `MarkerController::status_clicked`.

use log::debug;

use crate::style::{StatusHost, StatusItemHandle};

/// Status text while marker suppression is active.
pub const STATUS_TEXT_HIDDEN: &str = "Markdown markers: hidden";

/// Status text while marker suppression is off.
pub const STATUS_TEXT_SHOWN: &str = "Markdown markers: shown";

/// The status-bar indicator element, present iff the visibility setting is on.
#[derive(Debug, Default)]
pub struct StatusIndicator {
    item: Option<StatusItemHandle>,
}

impl StatusIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the indicator element currently exists.
    pub fn exists(&self) -> bool {
        self.item.is_some()
    }

    /// The status text for the given toggle state.
    pub fn text_for(enabled: bool) -> &'static str {
        if enabled {
            STATUS_TEXT_HIDDEN
        } else {
            STATUS_TEXT_SHOWN
        }
    }

    /// Create the indicator element and render its initial text.
    ///
    /// Idempotent: if an element already exists, this is a no-op.
    pub fn create<H: StatusHost>(&mut self, host: &mut H, enabled: bool) {
        if self.item.is_some() {
            return;
        }
        let handle = host.create_status_item();
        host.set_status_text(handle, Self::text_for(enabled));
        self.item = Some(handle);
        debug!("Status indicator created");
    }

    /// Remove the indicator element if present.
    ///
    /// Idempotent: safe to call when absent.
    pub fn destroy<H: StatusHost>(&mut self, host: &mut H) {
        if let Some(handle) = self.item.take() {
            host.remove_status_item(handle);
            debug!("Status indicator destroyed");
        }
    }

    /// Update the display text for the given toggle state.
    ///
    /// No-op if the element does not exist.
    pub fn update<H: StatusHost>(&mut self, host: &mut H, enabled: bool) {
        if let Some(handle) = self.item {
            host.set_status_text(handle, Self::text_for(enabled));
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
