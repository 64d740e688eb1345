//! Tracker credentials

use serde::{Deserialize, Serialize};

/// Credentials for one tracker account. Exactly one variant is held; an
/// incomplete pair is rejected at the configuration boundary and never
/// reaches this type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Credentials {
    /// Username plus account password (self-hosted instances).
    Password { username: String, password: String },
    /// Account email plus API token (cloud instances).
    ApiToken { email: String, api_key: String },
}

impl Credentials {
    /// Identity half of the auth pair, also used as the `assignee=` value
    /// in the search query.
    ///
    /// For the token variant every `@` in the email is replaced by the
    /// literal `\u0040` escape the search endpoint expects. A `@` inside
    /// a plain username is left alone.
    pub fn query_username(&self) -> String {
        match self {
            Credentials::Password { username, .. } => username.clone(),
            Credentials::ApiToken { email, .. } => email.replace('@', "\\u0040"),
        }
    }

    /// Secret half of the auth pair.
    pub fn secret(&self) -> &str {
        match self {
            Credentials::Password { password, .. } => password,
            Credentials::ApiToken { api_key, .. } => api_key,
        }
    }
}
