//! Tenets installer library.
//!
//! This crate installs a bundled, read-only tree of project convention
//! documents into a consumer project's working tree. It is used by the
//! `tenets-installer` CLI binary and can be consumed programmatically for
//! testing or custom installation workflows.
//!
//! # Modules
//!
//! - [`assets`] - The embedded convention-document bundle
//! - [`cli`] - Command-line argument definitions
//! - [`copier`] - Writing the bundle to the target directory
//! - [`error`] - Semantic error types with recovery hints
//! - [`guard`] - Existence guarding and forced replacement
//! - [`list`] - List command implementation
//! - [`list_output`] - Output formatting for the document listing
//! - [`output`] - Progress, success, and dry-run formatting
//! - [`pipeline`] - Resolve, guard, copy, report orchestration
//! - [`report`] - Post-install document counting
//! - [`resolver`] - Target path resolution
//! - [`scanner`] - Discovery of installed documents

pub mod assets;
pub mod cli;
pub mod copier;
pub mod error;
pub mod guard;
pub mod list;
pub mod list_output;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod resolver;
pub mod scanner;
