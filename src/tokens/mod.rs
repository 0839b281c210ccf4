//! Design token catalog.
//!
//! This module provides:
//! - `Token`, an immutable name/value pair with optional documentation
//! - `TokenCatalog`, the read-only dictionary built once at initialization

mod catalog;

pub use catalog::{Token, TokenCatalog, TOKEN_PREFIX};
