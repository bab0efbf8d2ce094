//! Shared test utilities for the tierconf workspace.
//!
//! This crate provides standard fixtures so crate test suites do not each
//! roll their own temp-dir handling. It is a dev-dependency only.
//!
//! # Modules
//!
//! - [`dir`] - [`TestDir`] temp directory with config-file helpers
//! - [`fixtures`] - sample config texts shared by resolution tests

pub mod dir;
pub mod fixtures;

pub use dir::TestDir;
