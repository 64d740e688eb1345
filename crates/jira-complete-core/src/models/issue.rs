//! Issue and completion-candidate models

use serde::{Deserialize, Serialize};

/// A unit of tracked work, identified by a project-scoped key such as
/// "PROJ-123". Immutable once fetched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Issue {
    pub key: String,
    pub title: String,
}

/// A completion candidate offered to the editor host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionItem {
    /// Text inserted into the buffer.
    pub word: String,
    /// Label shown in the completion menu.
    pub abbr: String,
}

impl From<&Issue> for CompletionItem {
    fn from(issue: &Issue) -> Self {
        Self {
            word: issue.key.clone(),
            abbr: format!("{} {}", issue.key, issue.title),
        }
    }
}
