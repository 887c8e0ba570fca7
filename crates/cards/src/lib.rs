//! Cards and the suit symmetry that multiplies solved content.
//!
//! ## Core Types
//!
//! - [`Card`]: A single card as a `(Rank, Suit)` pair encoded in one byte
//! - [`Hole`]: A player's two private cards, in dealt order
//! - [`Board`]: The community cards (flop, turn, river)
//! - [`Street`]: The betting round a spot is played on
//!
//! ## Suit Symmetry
//!
//! - [`Permutation`]: A bijective relabeling of the four suits
//! - [`Symmetry`]: Which relabelings make up the variant space (x24 or x4)
//! - [`VariantKey`]: Canonical text name of one permutation
//! - [`Permute`]: Relabel every card inside a value, including free text and json
//!
//! Typed parsing is strict and reports a [`CardError`]. Free text is never
//! rejected: anything that is not a clean run of cards is passed through.
mod board;
mod card;
mod error;
mod hole;
mod permutation;
mod permute;
mod rank;
mod street;
mod suit;
mod symmetry;
mod variant;

pub use board::*;
pub use card::*;
pub use error::*;
pub use hole::*;
pub use permutation::*;
pub use permute::*;
pub use rank::*;
pub use street::*;
pub use suit::*;
pub use symmetry::*;
pub use variant::*;
