//! Minigame arcade shell.
//!
//! Ties the five round engines together behind one text command
//! interpreter. The [`Arcade`] owns the session score, opens games from the
//! [`GameKind`] catalog, loads collaborators on first use and hands delayed
//! transitions back to the caller as [`Timer`]s.

pub mod catalog;
pub mod config;
pub mod error;
pub mod session;

pub use catalog::GameKind;
pub use config::ArcadeConfig;
pub use error::{ArcadeError, ArcadeResult};
pub use session::{Arcade, Reply, Timer};
