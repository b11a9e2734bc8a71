//! Users and labels

use serde::{Deserialize, Serialize};
use std::fmt;

/// A GitHub account
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    /// Login handle
    pub login: String,
    pub id: u64,
    /// Public email; only the single-user lookup populates it
    #[serde(default)]
    pub email: Option<String>,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.email {
            Some(email) => write!(f, "{} <{}>", self.login, email),
            None => f.write_str(&self.login),
        }
    }
}

/// Issue label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    /// Hex color without the leading `#`
    #[serde(default)]
    pub color: String,
}
