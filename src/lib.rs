//! markveil: hide Markdown syntax markers in a live editor surface.
//!
//! This crate is the style-injection and settings-synchronization core of a
//! marker-visibility editor extension. It never parses Markdown and never
//! mutates the document; it maintains a single named style resource in the
//! host document that visually suppresses formatting-marker tokens (heading
//! `#`, bold/italic delimiters, link syntax, code fences, quote `>`, list
//! bullets), driven by a persisted settings record.
//!
//! # Architecture
//!
//! - [`MarkerSettings`] / [`SettingsStore`]: the flat persisted record with
//!   merge-filled defaults
//! - [`generate_rules`]: pure mapping from settings to layered style rules
//! - [`StyleInjector`]: idempotent apply/remove/refresh lifecycle of the one
//!   style resource, with residue-free teardown
//! - [`StatusIndicator`]: optional status-bar affordance mirroring the toggle
//! - [`MarkerController`]: the top-level owner the host's lifecycle hooks,
//!   command palette, and settings page talk to
//!
//! The host editor is reached through the [`StyleHost`] and [`StatusHost`]
//! traits; [`MemoryHost`] implements both in memory for tests and reference
//! harnesses.
//!
//! # Example
//!
//! ```
//! use markveil::{MarkerCategory, MarkerController, MemoryHost, SettingsStore};
//!
//! let store = SettingsStore::at(std::env::temp_dir().join("markveil-doc-example"));
//! let mut controller = MarkerController::new(MemoryHost::new(), store);
//!
//! controller.start();
//! controller.toggle_marker_visibility();
//! controller.set_category_hidden(MarkerCategory::Lists, false);
//! controller.stop();
//! ```

mod config;
mod controller;
mod error;
mod status;
mod style;

pub use config::{MarkerCategory, MarkerSettings, SettingsStore};
pub use controller::{Command, MarkerController, COMMANDS, TOGGLE_COMMAND_ID};
pub use error::{Error, Result, ResultExt};
pub use status::{StatusIndicator, STATUS_TEXT_HIDDEN, STATUS_TEXT_SHOWN};
pub use style::{
    generate_rules, render_stylesheet, MemoryHost, StatusHost, StatusItemHandle, StyleHandle,
    StyleHost, StyleInjector, StyleRule, STYLE_RESOURCE_ID, SUPPRESS_DECL, TRANSPARENT_DECL,
};
