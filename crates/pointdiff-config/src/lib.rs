//! # pointdiff Config
//!
//! Type-safe configuration for the ranking pipeline and dashboard.
//!
//! The defaults reproduce the 2024 regular-season chart for weeks 1-11;
//! a `pointdiff.toml` in the working directory overrides any subset.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
