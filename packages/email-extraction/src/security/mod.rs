//! Credential handling for external services.

mod credentials;

pub use credentials::SecretString;
