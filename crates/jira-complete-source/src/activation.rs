//! Plugin activation

use crate::host::{ConfigStore, Notifier, SourceRegistry};
use crate::source::JiraCompletionSource;
use jira_complete_api::JiraClient;
use jira_complete_core::models::{JiraConfig, JiraSettings};

/// Read the `jira` namespace from the host store. Values are passed
/// through raw; the settings resolver decides whether the set is usable.
fn read_settings(config: &dyn ConfigStore) -> JiraSettings {
    JiraSettings {
        workspace_url: config.get("jira.workspaceUrl"),
        name: config.get("jira.user.name"),
        password: config.get("jira.user.password"),
        email: config.get("jira.user.email"),
        api_key: config.get("jira.user.apiKey"),
    }
}

/// Activate the plugin against a host.
///
/// Performs the one-time issue fetch and registers the completion source.
/// Incomplete configuration warns and registers nothing; a failed fetch
/// notifies and registers the source with an empty candidate list. Neither
/// is an error for the host.
pub async fn activate(
    config: &dyn ConfigStore,
    notifier: &dyn Notifier,
    registry: &mut dyn SourceRegistry,
) {
    let JiraConfig {
        workspace_url,
        credentials,
    } = match read_settings(config).resolve() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("jira configuration incomplete: {err}");
            notifier.warning("JIRA configuration missing, edit your configuration");
            return;
        }
    };

    let client = JiraClient::new(workspace_url, &credentials);
    let issues = match client.search_unresolved().await {
        Ok(issues) => {
            tracing::debug!("fetched {} unresolved issues", issues.len());
            issues
        }
        Err(err) => {
            tracing::error!("failed to fetch JIRA issues: {err}");
            notifier.error("Failed to fetch JIRA issues, check the logs");
            Vec::new()
        }
    };

    registry.register(JiraCompletionSource::new(issues).into_source());
}
