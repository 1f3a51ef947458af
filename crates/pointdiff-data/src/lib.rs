//! # pointdiff Data
//!
//! Loading, filtering and reshaping of game scores into a dense table of
//! cumulative point differentials per team and week.
//!
//! Data flows in one direction:
//! [`GameLoader`] → [`SeasonFilter`] → [`DifferentialBuilder`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod differential;
pub mod filter;
pub mod loader;
pub mod record;

pub use differential::*;
pub use filter::*;
pub use loader::*;
pub use record::*;
