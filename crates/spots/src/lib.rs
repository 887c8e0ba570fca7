//! Solved spots and everything done with them at the table.
//!
//! ## Corpus Model
//!
//! - [`SolvedHand`]: One solved spot with hole cards, board, and tree
//! - [`DecisionNode`]: Ordered branches with frequency and EV
//! - [`Edge`]: A parsed action key (`check`, `bet_50`, `allin`)
//!
//! ## Play
//!
//! - [`Villain`]: Samples the opponent's reply from solver frequencies
//! - [`Rubric`]: Grades a [`Submission`] by EV loss with a mixed-strategy tolerance
mod edge;
mod error;
mod hand;
mod node;
mod position;
mod rubric;
mod submission;
mod villain;

pub use edge::*;
pub use error::*;
pub use hand::*;
pub use node::*;
pub use position::*;
pub use rubric::*;
pub use submission::*;
pub use villain::*;
