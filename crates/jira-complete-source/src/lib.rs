//! jira-complete completion source
//!
//! Wires the Jira client to an editor plugin host: reads host
//! configuration, fetches the user's unresolved issues once, and registers
//! a completion source serving them as candidates.

pub mod activation;
pub mod host;
pub mod source;

pub use activation::activate;
pub use host::{CompletionProvider, CompletionSource, ConfigStore, Notifier, SourceRegistry};
pub use source::{JiraCompletionSource, SOURCE_NAME};
