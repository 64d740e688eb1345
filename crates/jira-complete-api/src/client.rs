//! Jira search client

use crate::auth::JiraAuth;
use crate::error::Result;
use crate::types::SearchResponse;
use jira_complete_core::models::{Credentials, Issue};

/// Fields requested with each search hit. `updated` is part of the wire
/// contract but is not surfaced in the decoded model.
const SEARCH_FIELDS: &str = "summary,updated";

pub struct JiraClient {
    http: reqwest::Client,
    workspace_url: String,
    auth: JiraAuth,
}

impl JiraClient {
    /// Create a client for one workspace. `workspace_url` is used as-is
    /// and is assumed to carry no trailing slash.
    pub fn new(workspace_url: impl Into<String>, credentials: &Credentials) -> Self {
        Self {
            http: reqwest::Client::new(),
            workspace_url: workspace_url.into(),
            auth: JiraAuth::from(credentials),
        }
    }

    /// Fetch every unresolved issue assigned to the configured user, in
    /// server response order. Issues one request; the endpoint is expected
    /// to return the complete set in a single page.
    pub async fn search_unresolved(&self) -> Result<Vec<Issue>> {
        let body = self
            .http
            .get(self.search_url())
            .header(reqwest::header::AUTHORIZATION, self.auth.to_basic_auth())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let response: SearchResponse = serde_json::from_str(&body)?;
        Ok(response.issues.into_iter().map(Issue::from).collect())
    }

    // Assembled by hand: the `+` separators in the JQL are meaningful to
    // the endpoint and a form encoder would turn them into `%2B`.
    fn search_url(&self) -> String {
        format!(
            "{}/rest/api/2/search?jql=assignee={}+and+resolution=unresolved&fields={}",
            self.workspace_url,
            self.auth.username(),
            SEARCH_FIELDS
        )
    }
}
