//! Where hands come from and which variant of them a user sees next.
//!
//! The corpus, the seen ledger, and the game registry are external
//! collaborators reached through [`Catalog`], [`Ledger`], and [`Games`].
//! [`Memory`] implements all three in process.
//!
//! [`Exposure`] reports the unseen variants of a hand for a user;
//! [`Selector`] shuffles a candidate pool and serves one of them.
mod error;
mod exposure;
mod filter;
mod game;
mod memory;
mod selector;
mod store;

pub use error::*;
pub use exposure::*;
pub use filter::*;
pub use game::*;
pub use memory::*;
pub use selector::*;
pub use store::*;
