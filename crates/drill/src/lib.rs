//! GTO drill core for solved poker spots.
//!
//! This facade crate re-exports every drill crate for convenient access.
//!
//! ## Crate Organization
//!
//! ### Primitives
//! - [`core`]: type aliases, identifiers, and tuning constants
//! - [`cards`]: cards, suit permutations, variant keys, and the suit transform
//!
//! ### Solved Content
//! - [`spots`]: decision trees, solved hands, grading, and opponent play
//! - [`library`]: game configurations, storage seams, exposure, and selection
//!
//! ### Application
//! - [`engine`]: game routing, chart and scenario instructions, the answer loop

pub use drill_cards   as cards;
pub use drill_core    as core;
pub use drill_engine  as engine;
pub use drill_library as library;
pub use drill_spots   as spots;
