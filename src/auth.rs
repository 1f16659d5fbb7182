//! Session and bearer-token plumbing.
//!
//! Sign-in itself happens in an external identity provider. The SDK only
//! needs to know who the current user is and how to obtain a bearer token
//! for them, which is what [`Session`] and [`TokenProvider`] describe.

use std::fmt;
use std::sync::Arc;

use crate::config;
use crate::error::{Result, SpendflowError};

/// Source of bearer tokens for authenticated backend calls.
pub trait TokenProvider: Send + Sync {
    fn token(&self) -> Result<String>;
}

/// A fixed token, e.g. one handed over by a host application.
#[derive(Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl TokenProvider for StaticToken {
    fn token(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

impl fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StaticToken(********)")
    }
}

/// Reads the token from an environment variable on every call.
#[derive(Debug, Clone)]
pub struct EnvToken {
    var: String,
}

impl EnvToken {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvToken {
    fn default() -> Self {
        Self::new(config::TOKEN_ENV)
    }
}

impl TokenProvider for EnvToken {
    fn token(&self) -> Result<String> {
        match std::env::var(&self.var) {
            Ok(token) if !token.trim().is_empty() => Ok(token),
            _ => Err(SpendflowError::Auth(format!("{} is not set", self.var))),
        }
    }
}

/// The signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub first_name: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            first_name: None,
        }
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Name used in the dashboard greeting.
    pub fn display_name(&self) -> &str {
        match self.first_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "User",
        }
    }
}

/// Current user (if any) plus the token source used on their behalf.
#[derive(Clone)]
pub struct Session {
    user: Option<User>,
    tokens: Arc<dyn TokenProvider>,
}

impl Session {
    pub fn new(tokens: Arc<dyn TokenProvider>) -> Self {
        Self { user: None, tokens }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn set_user(&mut self, user: Option<User>) {
        self.user = user;
    }

    /// The signed-in user, or an auth error when nobody is signed in.
    pub fn require_user(&self) -> Result<&User> {
        self.user
            .as_ref()
            .ok_or_else(|| SpendflowError::Auth("User not found".into()))
    }

    pub fn token(&self) -> Result<String> {
        self.tokens.token()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("user", &self.user).finish()
    }
}
