//! Fission client module.
//!
//! This module provides the client interface for the Fission gateway API:
//! an anonymous [`FissionClient`] for public reads and an authenticated
//! [`FissionUser`] session for mutating operations.

mod credentials;
mod fission_client;
mod fission_config;
mod fission_user;

pub use credentials::FissionCredentials;
pub use fission_client::FissionClient;
pub use fission_config::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_MAX_CONTENT_LENGTH, DEFAULT_TIMEOUT, FissionBuilder,
    FissionConfig,
};
pub use fission_user::FissionUser;

/// Content type the gateway expects on reads and uploads.
pub(crate) const OCTET_STREAM: &str = "application/octet-stream";
