#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for the main library
pub const TRACING_TARGET: &str = "fission_client";

/// Tracing target for client construction and anonymous reads
pub const TRACING_TARGET_CLIENT: &str = "fission_client::client";

/// Tracing target for authenticated gateway operations
pub const TRACING_TARGET_OPERATIONS: &str = "fission_client::operations";

mod client;
mod error;
mod types;
#[doc(hidden)]
pub mod prelude;

pub use crate::client::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_MAX_CONTENT_LENGTH, DEFAULT_TIMEOUT, FissionBuilder,
    FissionClient, FissionConfig, FissionCredentials, FissionUser,
};
pub use crate::error::{Error, FileSizeError, Result, TRANSPORT_OVERFLOW_MESSAGE};
pub use crate::types::{Cid, Content};
