//! Top-level controller
//!
//! `MarkerController` owns the settings record, the style injector, and the
//! status indicator, and wires every user-triggered entry point: the host's
//! load/unload hooks (`start`/`stop`), the command palette action, the
//! status-indicator click, and the settings-page change handlers.
//!
//! Every component is handed in at construction, so independent instances can
//! coexist (one per host window, or many in tests).

use log::info;

use crate::config::{MarkerCategory, MarkerSettings, SettingsStore};
use crate::status::StatusIndicator;
use crate::style::{StatusHost, StyleHost, StyleInjector};

// ─────────────────────────────────────────────────────────────────────────────
// Command Surface
// ─────────────────────────────────────────────────────────────────────────────

/// A command the embedder exposes in the host's command palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    /// Stable command identifier
    pub id: &'static str,
    /// Human-readable command name
    pub name: &'static str,
}

/// Identifier of the master-toggle command.
pub const TOGGLE_COMMAND_ID: &str = "toggle-marker-visibility";

/// Every command this controller can run.
pub const COMMANDS: [Command; 1] = [Command {
    id: TOGGLE_COMMAND_ID,
    name: "Toggle marker visibility",
}];

// ─────────────────────────────────────────────────────────────────────────────
// Controller
// ─────────────────────────────────────────────────────────────────────────────

/// Owns the marker-visibility state and synchronizes it with the host.
#[derive(Debug)]
pub struct MarkerController<H: StyleHost + StatusHost> {
    host: H,
    store: SettingsStore,
    settings: MarkerSettings,
    injector: StyleInjector,
    indicator: StatusIndicator,
}

impl<H: StyleHost + StatusHost> MarkerController<H> {
    /// Create a controller over the given host and settings store.
    ///
    /// The settings record is not read from the store until `start()`.
    pub fn new(host: H, store: SettingsStore) -> Self {
        Self {
            host,
            store,
            settings: MarkerSettings::default(),
            injector: StyleInjector::new(),
            indicator: StatusIndicator::new(),
        }
    }

    /// Host `onload` hook: load persisted settings, bring up the indicator,
    /// and apply styles.
    pub fn start(&mut self) {
        self.settings = self.store.load();
        info!(
            "markveil starting (enabled: {}, status bar: {})",
            self.settings.enabled, self.settings.show_status_bar
        );

        if self.settings.show_status_bar {
            self.indicator.create(&mut self.host, self.settings.enabled);
        }
        self.injector.refresh(&mut self.host, &self.settings);
    }

    /// Host `onunload` hook: detach styles and tear down the indicator.
    ///
    /// No settings flush is needed; every mutation persisted at change time.
    pub fn stop(&mut self) {
        info!("markveil stopping");
        self.injector.remove(&mut self.host);
        self.indicator.destroy(&mut self.host);
    }

    /// The current settings record.
    pub fn settings(&self) -> &MarkerSettings {
        &self.settings
    }

    /// The host document, for embedders that need to reach through.
    pub fn host(&self) -> &H {
        &self.host
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Command and click entry points
    // ─────────────────────────────────────────────────────────────────────────

    /// The master-toggle command: flip `enabled`, persist, and synchronize
    /// styles and indicator.
    pub fn toggle_marker_visibility(&mut self) {
        self.settings.enabled = !self.settings.enabled;
        info!("Marker suppression toggled to {}", self.settings.enabled);
        self.store.save_silent(&self.settings);
        self.injector.refresh(&mut self.host, &self.settings);
        self.indicator.update(&mut self.host, self.settings.enabled);
    }

    /// Click handler for the status indicator.
    pub fn status_clicked(&mut self) {
        self.toggle_marker_visibility();
    }

    /// Run a command by id. Returns `false` for unknown ids.
    pub fn run_command(&mut self, id: &str) -> bool {
        match id {
            TOGGLE_COMMAND_ID => {
                self.toggle_marker_visibility();
                true
            }
            _ => false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Settings-page change handlers
    // ─────────────────────────────────────────────────────────────────────────

    /// Change handler for one category toggle.
    pub fn set_category_hidden(&mut self, category: MarkerCategory, hidden: bool) {
        self.settings.set_hidden(category, hidden);
        self.store.save_silent(&self.settings);
        self.injector.refresh(&mut self.host, &self.settings);
    }

    /// Change handler for the status-indicator visibility toggle.
    pub fn set_show_status_bar(&mut self, show: bool) {
        self.settings.show_status_bar = show;
        self.store.save_silent(&self.settings);
        if show {
            self.indicator.create(&mut self.host, self.settings.enabled);
        } else {
            self.indicator.destroy(&mut self.host);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{STATUS_TEXT_HIDDEN, STATUS_TEXT_SHOWN};
    use crate::style::{MemoryHost, StyleHost, STYLE_RESOURCE_ID};
    use tempfile::TempDir;

    /// Controller over a fresh in-memory host and a sandboxed store.
    fn controller(dir: &TempDir) -> MarkerController<MemoryHost> {
        MarkerController::new(MemoryHost::new(), SettingsStore::at(dir.path()))
    }

    fn seeded_controller(dir: &TempDir, settings: &MarkerSettings) -> MarkerController<MemoryHost> {
        let store = SettingsStore::at(dir.path());
        store.save(settings).unwrap();
        MarkerController::new(MemoryHost::new(), store)
    }

    #[test]
    fn test_start_with_defaults_attaches_everything() {
        let dir = TempDir::new().unwrap();
        let mut controller = controller(&dir);

        controller.start();

        let host = controller.host();
        assert!(host.has_style(STYLE_RESOURCE_ID));
        assert_eq!(host.style_count(), 1);
        assert_eq!(host.sole_status_text(), Some(STATUS_TEXT_HIDDEN));

        // Default settings produce the full seven-category stylesheet.
        let content = host.style_content(STYLE_RESOURCE_ID).unwrap();
        for class in [
            "cm-formatting-header",
            "cm-formatting-strong",
            "cm-formatting-em",
            "cm-formatting-link",
            "cm-url",
            "cm-formatting-code",
            "cm-formatting-quote",
            "cm-formatting-list",
        ] {
            assert!(content.contains(class), "missing {}", class);
        }
    }

    #[test]
    fn test_start_disabled_creates_no_resource() {
        let dir = TempDir::new().unwrap();
        let settings = MarkerSettings {
            enabled: false,
            ..MarkerSettings::default()
        };
        let mut controller = seeded_controller(&dir, &settings);

        controller.start();

        assert!(!controller.host().has_style(STYLE_RESOURCE_ID));
        assert_eq!(controller.host().sole_status_text(), Some(STATUS_TEXT_SHOWN));
    }

    #[test]
    fn test_start_with_all_categories_off_creates_no_resource() {
        let dir = TempDir::new().unwrap();
        let mut settings = MarkerSettings::default();
        for &category in MarkerCategory::all() {
            settings.set_hidden(category, false);
        }
        let mut controller = seeded_controller(&dir, &settings);

        controller.start();

        assert!(controller.settings().enabled);
        assert!(!controller.host().has_style(STYLE_RESOURCE_ID));
    }

    #[test]
    fn test_start_without_status_bar_setting() {
        let dir = TempDir::new().unwrap();
        let settings = MarkerSettings {
            show_status_bar: false,
            ..MarkerSettings::default()
        };
        let mut controller = seeded_controller(&dir, &settings);

        controller.start();

        assert_eq!(controller.host().status_item_count(), 0);
        assert!(controller.host().has_style(STYLE_RESOURCE_ID));
    }

    #[test]
    fn test_toggle_flips_styles_text_and_persisted_record() {
        let dir = TempDir::new().unwrap();
        let mut controller = controller(&dir);
        controller.start();

        controller.toggle_marker_visibility();

        assert!(!controller.settings().enabled);
        assert!(!controller.host().has_style(STYLE_RESOURCE_ID));
        assert_eq!(controller.host().sole_status_text(), Some(STATUS_TEXT_SHOWN));
        // Persisted synchronously at change time.
        assert!(!SettingsStore::at(dir.path()).load().enabled);

        controller.toggle_marker_visibility();

        assert!(controller.settings().enabled);
        assert!(controller.host().has_style(STYLE_RESOURCE_ID));
        assert_eq!(controller.host().sole_status_text(), Some(STATUS_TEXT_HIDDEN));
        assert!(SettingsStore::at(dir.path()).load().enabled);
    }

    #[test]
    fn test_status_click_is_the_master_toggle() {
        let dir = TempDir::new().unwrap();
        let mut controller = controller(&dir);
        controller.start();

        controller.status_clicked();
        assert!(!controller.settings().enabled);

        controller.status_clicked();
        assert!(controller.settings().enabled);
    }

    #[test]
    fn test_run_command_dispatch() {
        let dir = TempDir::new().unwrap();
        let mut controller = controller(&dir);
        controller.start();

        assert!(controller.run_command(TOGGLE_COMMAND_ID));
        assert!(!controller.settings().enabled);

        assert!(!controller.run_command("no-such-command"));
        assert!(!controller.settings().enabled);
    }

    #[test]
    fn test_commands_table_matches_dispatch() {
        assert_eq!(COMMANDS.len(), 1);
        assert_eq!(COMMANDS[0].id, TOGGLE_COMMAND_ID);
        assert_eq!(COMMANDS[0].name, "Toggle marker visibility");
    }

    #[test]
    fn test_category_toggle_refreshes_stylesheet() {
        let dir = TempDir::new().unwrap();
        let mut controller = controller(&dir);
        controller.start();

        controller.set_category_hidden(MarkerCategory::Lists, false);

        let content = controller
            .host()
            .style_content(STYLE_RESOURCE_ID)
            .unwrap();
        assert!(!content.contains("cm-formatting-list"));
        // The other six categories are untouched.
        for class in [
            "cm-formatting-header",
            "cm-formatting-strong",
            "cm-formatting-em",
            "cm-formatting-link",
            "cm-formatting-code",
            "cm-formatting-quote",
        ] {
            assert!(content.contains(class), "missing {}", class);
        }
        assert!(!SettingsStore::at(dir.path()).load().hide_lists);
    }

    #[test]
    fn test_status_bar_setting_creates_and_destroys_indicator() {
        let dir = TempDir::new().unwrap();
        let mut controller = controller(&dir);
        controller.start();
        assert_eq!(controller.host().status_item_count(), 1);

        controller.set_show_status_bar(false);
        assert_eq!(controller.host().status_item_count(), 0);
        assert!(!SettingsStore::at(dir.path()).load().show_status_bar);

        controller.set_show_status_bar(true);
        assert_eq!(
            controller.host().sole_status_text(),
            Some(STATUS_TEXT_HIDDEN)
        );
    }

    #[test]
    fn test_stop_leaves_no_residue() {
        let dir = TempDir::new().unwrap();
        let mut controller = controller(&dir);
        controller.start();

        controller.stop();

        assert_eq!(controller.host().style_count(), 0);
        assert_eq!(controller.host().status_item_count(), 0);
    }

    #[test]
    fn test_restart_cycle_is_stable() {
        let dir = TempDir::new().unwrap();
        let mut controller = controller(&dir);

        controller.start();
        controller.stop();
        controller.start();

        assert_eq!(controller.host().style_count(), 1);
        assert_eq!(controller.host().status_item_count(), 1);
    }

    #[test]
    fn test_settings_survive_restart_via_store() {
        let dir = TempDir::new().unwrap();

        let mut first = controller(&dir);
        first.start();
        first.toggle_marker_visibility();
        first.set_category_hidden(MarkerCategory::Code, false);
        first.stop();

        let mut second = controller(&dir);
        second.start();

        assert!(!second.settings().enabled);
        assert!(!second.settings().hide_code);
        assert!(!second.host().has_style(STYLE_RESOURCE_ID));
    }

    #[test]
    fn test_independent_instances_do_not_share_state() {
        let dir_a = TempDir::new().unwrap();
        let dir_b = TempDir::new().unwrap();

        let mut a = controller(&dir_a);
        let mut b = controller(&dir_b);
        a.start();
        b.start();

        a.toggle_marker_visibility();

        assert!(!a.settings().enabled);
        assert!(b.settings().enabled);
        assert!(b.host().has_style(STYLE_RESOURCE_ID));
    }
}
