//! The jira-complete source

use crate::host::{CompletionProvider, CompletionSource};
use jira_complete_core::models::{CompletionItem, Issue};

/// Name the source is registered under.
pub const SOURCE_NAME: &str = "jira-complete";

/// Serves the issue list captured at activation. The list never changes
/// after construction; every call returns one candidate per issue, in
/// fetch order. Narrowing by typed prefix is the host's job.
pub struct JiraCompletionSource {
    issues: Vec<Issue>,
}

impl JiraCompletionSource {
    pub fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    /// Wrap the provider in a registry descriptor.
    pub fn into_source(self) -> CompletionSource {
        CompletionSource {
            name: SOURCE_NAME,
            trigger_only: false,
            provider: Box::new(self),
        }
    }
}

impl CompletionProvider for JiraCompletionSource {
    fn complete(&self) -> Vec<CompletionItem> {
        self.issues.iter().map(CompletionItem::from).collect()
    }
}
