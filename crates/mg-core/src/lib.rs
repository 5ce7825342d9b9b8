//! Shared building blocks for the minigame round engines.
//!
//! Every engine draws from a [`RandomSource`], reports its action results as a
//! [`Step`], settles terminal rounds into a [`SessionScore`], and hands out
//! [`PendingTransition`]s for the transitions that fire after a display delay.

pub mod error;
pub mod outcome;
pub mod pending;
pub mod random;
pub mod score;

pub use error::{GameError, GameResult};
pub use outcome::{Outcome, Step};
pub use pending::{PendingTransition, Ticket, TicketIssuer};
pub use random::{RandomSource, ScriptedSource, choose};
pub use score::SessionScore;
