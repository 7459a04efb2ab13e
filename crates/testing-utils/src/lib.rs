//! # Alchemist Testing Utils
//!
//! Shared testing utilities for the data alchemist workspace.
//!
//! ## Features
//!
//! - **Test Data Builders**: valid-by-default Client/Worker/Task records
//! - **Fixtures**: the clean and mixed end-to-end datasets
//!
//! ## Usage
//!
//! ```toml
//! [dev-dependencies]
//! alchemist-testing-utils = { path = "../testing-utils" }
//! ```

pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
