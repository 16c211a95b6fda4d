// Rust guideline compliant 2026-10-18

//! Hookkit Core Library
//!
//! Shared building blocks for the hookkit pre-commit hooks:
//! - Delegated tool lookup and invocation
//! - Conventional commit message rules
//! - Configuration loading
//! - Logging setup
//! - Error types and result handling

pub mod config;
pub mod conventional;
pub mod error;
pub mod logging;
pub mod tool;

pub use config::Config;
pub use conventional::{conventional_types, is_conventional, is_special_commit};
pub use error::{Error, Result};
pub use tool::DelegatedTool;
