//! Jira authentication

use jira_complete_core::models::Credentials;

pub struct JiraAuth {
    username: String,
    token: String,
}

impl JiraAuth {
    pub fn new(username: String, token: String) -> Self {
        Self { username, token }
    }

    /// Identity half of the pair, already carrying any `@` substitution.
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn to_basic_auth(&self) -> String {
        use base64::Engine;
        let credentials = format!("{}:{}", self.username, self.token);
        format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(credentials)
        )
    }
}

impl From<&Credentials> for JiraAuth {
    fn from(credentials: &Credentials) -> Self {
        Self::new(
            credentials.query_username(),
            credentials.secret().to_string(),
        )
    }
}
