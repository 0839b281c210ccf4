//! LSP protocol feature implementations.
//!
//! This module provides implementations for LSP features:
//! - Completion of design tokens inside style blocks
//! - Hover information for token references

mod completion;
mod hover;

pub use completion::{completion_at_position, completion_for};
pub use hover::hover_at_position;
