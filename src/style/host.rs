//! Host document seam
//!
//! The core never touches the host editor directly; it goes through the two
//! traits below. A target environment implements them over its native styling
//! and status-bar layers. `MemoryHost` is the bundled in-memory implementation
//! used by the tests and by embedding harnesses.

// ─────────────────────────────────────────────────────────────────────────────
// Handles
// ─────────────────────────────────────────────────────────────────────────────

/// Handle to an attached style resource, issued by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleHandle(pub u64);

/// Handle to a status-bar item, issued by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusItemHandle(pub u64);

// ─────────────────────────────────────────────────────────────────────────────
// Host Traits
// ─────────────────────────────────────────────────────────────────────────────

/// Style-resource capability of the host document.
///
/// Resources are identified two ways: by the handle returned at creation and
/// by the caller-chosen stable id. The id-based operations exist so a resource
/// can be located and eliminated even after the in-memory handle was lost
/// (e.g., across a crash-reload cycle).
pub trait StyleHost {
    /// Create a style resource with the given id and stylesheet text and
    /// attach it to the document.
    fn create_style(&mut self, id: &str, content: &str) -> StyleHandle;

    /// Detach the resource with the given handle. Returns `false` if no such
    /// resource exists.
    fn remove_style(&mut self, handle: StyleHandle) -> bool;

    /// Detach every resource carrying the given id. Returns how many were
    /// removed.
    fn remove_styles_by_id(&mut self, id: &str) -> usize;

    /// Whether any resource with the given id is attached.
    fn has_style(&self, id: &str) -> bool;

    /// The stylesheet text of the first attached resource with the given id.
    fn style_content(&self, id: &str) -> Option<String>;
}

/// Status-bar capability of the host application.
///
/// Items are clickable by contract; the embedder routes click events on an
/// item back into the controller (`MarkerController::status_clicked`).
pub trait StatusHost {
    /// Create an empty status-bar item.
    fn create_status_item(&mut self) -> StatusItemHandle;

    /// Set the display text of a status-bar item. Unknown handles are ignored.
    fn set_status_text(&mut self, handle: StatusItemHandle, text: &str);

    /// Remove a status-bar item. Returns `false` if no such item exists.
    fn remove_status_item(&mut self, handle: StatusItemHandle) -> bool;
}

// ─────────────────────────────────────────────────────────────────────────────
// In-Memory Host
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct StyleEntry {
    handle: StyleHandle,
    id: String,
    content: String,
}

#[derive(Debug, Clone)]
struct StatusEntry {
    handle: StatusItemHandle,
    text: String,
}

/// In-memory implementation of both host capabilities.
///
/// Keeps attached resources and status items in plain vectors so tests can
/// observe exact document state, including deliberately planted stray
/// resources.
#[derive(Debug, Default)]
pub struct MemoryHost {
    next_handle: u64,
    styles: Vec<StyleEntry>,
    status_items: Vec<StatusEntry>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_handle(&mut self) -> u64 {
        self.next_handle += 1;
        self.next_handle
    }

    /// Number of attached style resources, any id.
    pub fn style_count(&self) -> usize {
        self.styles.len()
    }

    /// Number of live status-bar items.
    pub fn status_item_count(&self) -> usize {
        self.status_items.len()
    }

    /// Display text of the given status-bar item.
    pub fn status_text(&self, handle: StatusItemHandle) -> Option<&str> {
        self.status_items
            .iter()
            .find(|item| item.handle == handle)
            .map(|item| item.text.as_str())
    }

    /// Display text of the only status-bar item, if exactly one exists.
    pub fn sole_status_text(&self) -> Option<&str> {
        match self.status_items.as_slice() {
            [item] => Some(item.text.as_str()),
            _ => None,
        }
    }
}

impl StyleHost for MemoryHost {
    fn create_style(&mut self, id: &str, content: &str) -> StyleHandle {
        let handle = StyleHandle(self.next_handle());
        self.styles.push(StyleEntry {
            handle,
            id: id.to_string(),
            content: content.to_string(),
        });
        handle
    }

    fn remove_style(&mut self, handle: StyleHandle) -> bool {
        let before = self.styles.len();
        self.styles.retain(|entry| entry.handle != handle);
        self.styles.len() < before
    }

    fn remove_styles_by_id(&mut self, id: &str) -> usize {
        let before = self.styles.len();
        self.styles.retain(|entry| entry.id != id);
        before - self.styles.len()
    }

    fn has_style(&self, id: &str) -> bool {
        self.styles.iter().any(|entry| entry.id == id)
    }

    fn style_content(&self, id: &str) -> Option<String> {
        self.styles
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.content.clone())
    }
}

impl StatusHost for MemoryHost {
    fn create_status_item(&mut self) -> StatusItemHandle {
        let handle = StatusItemHandle(self.next_handle());
        self.status_items.push(StatusEntry {
            handle,
            text: String::new(),
        });
        handle
    }

    fn set_status_text(&mut self, handle: StatusItemHandle, text: &str) {
        if let Some(item) = self
            .status_items
            .iter_mut()
            .find(|item| item.handle == handle)
        {
            item.text = text.to_string();
        }
    }

    fn remove_status_item(&mut self, handle: StatusItemHandle) -> bool {
        let before = self.status_items.len();
        self.status_items.retain(|item| item.handle != handle);
        self.status_items.len() < before
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
