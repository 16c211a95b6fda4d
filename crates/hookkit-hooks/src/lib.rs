// Rust guideline compliant 2026-10-18

//! Hookkit Git Hooks
//!
//! This crate provides the hook implementations behind the hookkit binaries:
//! - Code generation through a delegated external tool
//! - Conventional commit message checks

pub mod codegen;
pub mod commit_msg;
pub mod report;
pub mod staged;

pub use codegen::{codegen_hook, CODEGEN_TOOL};
pub use commit_msg::{commit_msg_hook, CommitMsgOptions, Verdict};
