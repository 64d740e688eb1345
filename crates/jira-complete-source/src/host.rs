//! Host integration seam
//!
//! The editor host owns configuration, notifications, and the
//! completion-source registry. These traits are the narrow surface the
//! plugin needs from it.

use jira_complete_core::models::CompletionItem;

/// Read access to the host configuration store, keyed by dotted path.
pub trait ConfigStore {
    fn get(&self, key: &str) -> Option<String>;
}

/// User-visible notification surface.
pub trait Notifier {
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

/// Provider half of a registered completion source. The host calls
/// `complete` on every completion trigger.
pub trait CompletionProvider {
    fn complete(&self) -> Vec<CompletionItem>;
}

/// Descriptor handed to the host registry.
pub struct CompletionSource {
    pub name: &'static str,
    /// When false the host may offer the source on every keystroke, not
    /// just on an explicit trigger character.
    pub trigger_only: bool,
    pub provider: Box<dyn CompletionProvider>,
}

/// Host-side registry of completion sources.
pub trait SourceRegistry {
    fn register(&mut self, source: CompletionSource);
}
