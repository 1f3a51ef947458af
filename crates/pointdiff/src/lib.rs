//! # pointdiff
//!
//! Reads a season of NFL scores, ranks teams by cumulative point
//! differential week by week and serves the rankings as an animated chart.
//!
//! The pipeline is synchronous; the server runs it on tokio's blocking pool
//! once per page view.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod error;
pub mod server;

pub use app::*;
pub use error::*;
pub use server::*;
