//! Routes a game to its content producer and runs the answer loop.
//!
//! - [`Engine`]: fetches a [`Deal`] for a user and grades answers to it
//! - [`Registry`]: cache of game records, resolved by slug then id
//! - [`Chart`], [`Scenario`]: client instructions for non-solver games
//! - [`Config`]: symmetry, grading thresholds, and candidate limit
mod chart;
mod config;
mod deal;
mod engine;
mod error;
mod level;
mod registry;
mod scenario;

pub use chart::*;
pub use config::*;
pub use deal::*;
pub use engine::*;
pub use error::*;
pub use level::*;
pub use registry::*;
pub use scenario::*;
