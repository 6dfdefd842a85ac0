//! Balero Core - tournament engine for the traditional balero game.
//!
//! Teams of up to three players take timed turns attempting a technique;
//! each attempt resolves probabilistically into points, a session state
//! machine tracks turns and standings, and tournament winners are appended
//! to a fixed-record binary ledger that survives across runs.

pub mod attempt;
pub mod constants;
pub mod control;
pub mod error;
pub mod ledger;
pub mod resolver;
pub mod session;
pub mod store;
pub mod team;

pub use attempt::AttemptKind;
pub use control::{MatchControl, MatchSummary};
pub use error::{Error, Result};
pub use ledger::{WinLedger, WinRecord};
pub use resolver::{AttemptResolver, PercentileDie, RollSource};
pub use session::TurnSession;
pub use store::TeamStore;
pub use team::{Player, Team, TeamStats};
