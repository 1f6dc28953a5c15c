//! View layer
//!
//! - **deck**: the fact deck state (current sequence, cyclic index, advisory)
//! - **session**: terminal rendering and the interactive command loop

pub mod deck;
pub mod session;

pub use deck::{FactDeck, FetchMode, ADVISORY_MESSAGE};
pub use session::run_session;
