//! Authentication module
//!
//! Supports: no auth, fixed Basic credentials, environment credentials and
//! custom credential providers.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{
    AuthConfig, CredentialProvider, Credentials, EnvCredentials, DEFAULT_TOKEN_ENV,
    DEFAULT_USERNAME_ENV,
};
