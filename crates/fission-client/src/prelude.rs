//! Prelude module for fission-client.
//!
//! This module re-exports the most commonly used types, traits, and functions
//! from the fission-client library. Import this module to get quick access to
//! the essential components.

pub use crate::client::{FissionClient, FissionConfig, FissionCredentials, FissionUser};
pub use crate::error::{Error, FileSizeError, Result};
pub use crate::types::{Cid, Content};
