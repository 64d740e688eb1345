//! jira-complete Jira integration
//!
//! Client library for fetching a user's unresolved issues from the Jira
//! search API.

pub mod auth;
pub mod client;
pub mod error;
pub mod types;

pub use client::JiraClient;
pub use error::{Error, Result};
pub use types::*;
