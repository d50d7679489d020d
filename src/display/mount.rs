/// Page model and mount slots
///
/// The hosting page is modelled as a set of named content slots. The
/// load sequence writes rendered markup into one of them; the view
/// mirrors whatever was mounted.

use std::collections::HashMap;

use thiserror::Error;

/// Errors from the display side of the viewer
#[derive(Debug, Error)]
pub enum DisplayError {
    /// No slot with the requested id exists in the page
    #[error("mount point \"{0}\" not found in the page")]
    MissingMount(String),
}

/// A place rendered markup can be mounted into.
///
/// Lookup is by slot id; a successful lookup hands out the slot's
/// content for full replacement.
pub trait DisplayMount {
    /// The content slot registered under `id`, if any
    fn slot_mut(&mut self, id: &str) -> Option<&mut String>;
}

/// Minimal model of the hosting page: named slots holding markup
#[derive(Debug, Default)]
pub struct Document {
    slots: HashMap<String, String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an empty slot under `id`, replacing any existing one
    pub fn register(&mut self, id: &str) {
        self.slots.insert(id.to_owned(), String::new());
    }

    /// Current content of the slot registered under `id`
    pub fn content(&self, id: &str) -> Option<&str> {
        self.slots.get(id).map(String::as_str)
    }
}

impl DisplayMount for Document {
    fn slot_mut(&mut self, id: &str) -> Option<&mut String> {
        self.slots.get_mut(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_slot_is_found() {
        let mut page = Document::new();
        page.register("spot");

        assert!(page.slot_mut("spot").is_some());
        assert_eq!(page.content("spot"), Some(""));
    }

    #[test]
    fn test_unregistered_slot_is_missing() {
        let mut page = Document::new();

        assert!(page.slot_mut("spot").is_none());
        assert_eq!(page.content("spot"), None);
    }

    #[test]
    fn test_writing_replaces_slot_content() {
        let mut page = Document::new();
        page.register("spot");

        *page.slot_mut("spot").unwrap() = "OLD".to_owned();
        *page.slot_mut("spot").unwrap() = "<img />".to_owned();

        assert_eq!(page.content("spot"), Some("<img />"));
    }
}
