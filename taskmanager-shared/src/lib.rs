//! # Taskmanager Shared Library
//!
//! This crate contains the data layer shared by the Taskmanager API server:
//! database pooling and migrations, the `User` and `Task` models with their
//! CRUD operations, and slug derivation.
//!
//! ## Module Organization
//!
//! - `db`: Connection pool management and the embedded migration runner
//! - `models`: Database models and data structures
//! - `slug`: URL-safe slug derivation for usernames

pub mod db;
pub mod models;
pub mod slug;

/// Current version of the Taskmanager shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
