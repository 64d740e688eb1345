//! Plugin configuration

use crate::models::Credentials;
use crate::{Error, Result};

/// Raw values read from the host configuration store under the `jira`
/// namespace. Any field may be absent; [`JiraSettings::resolve`] decides
/// whether the set is usable.
#[derive(Debug, Clone, Default)]
pub struct JiraSettings {
    pub workspace_url: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub api_key: Option<String>,
}

/// Validated configuration for one activation.
#[derive(Debug, Clone, PartialEq)]
pub struct JiraConfig {
    /// Base URL of the tracker workspace, without a trailing slash.
    pub workspace_url: String,
    pub credentials: Credentials,
}

impl JiraSettings {
    /// Validate the raw settings into a usable configuration.
    ///
    /// A credential pair only counts when both halves are set. When both
    /// pairs are complete the password pair wins.
    pub fn resolve(self) -> Result<JiraConfig> {
        let workspace_url = match present(self.workspace_url) {
            Some(url) => url,
            None => return Err(Error::Validation("workspaceUrl is not set".to_string())),
        };

        if !workspace_url.starts_with("http://") && !workspace_url.starts_with("https://") {
            return Err(Error::Validation(
                "workspaceUrl must start with http:// or https://".to_string(),
            ));
        }

        let name = present(self.name);
        let password = present(self.password);
        let email = present(self.email);
        let api_key = present(self.api_key);

        let credentials = match (name, password, email, api_key) {
            (Some(username), Some(password), _, _) => Credentials::Password { username, password },
            (_, _, Some(email), Some(api_key)) => Credentials::ApiToken { email, api_key },
            _ => {
                return Err(Error::Validation(
                    "set user.name and user.password, or user.email and user.apiKey".to_string(),
                ))
            }
        };

        Ok(JiraConfig {
            workspace_url,
            credentials,
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
