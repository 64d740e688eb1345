//! Jira API types

use jira_complete_core::models::Issue;
use serde::Deserialize;

/// Body of a `/rest/api/2/search` response. Only the fields the plugin
/// consumes are decoded; everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub issues: Vec<JiraIssue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraIssue {
    pub key: String,
    pub fields: JiraFields,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraFields {
    pub summary: String,
}

impl From<JiraIssue> for Issue {
    fn from(issue: JiraIssue) -> Self {
        Self {
            key: issue.key,
            title: issue.fields.summary,
        }
    }
}
