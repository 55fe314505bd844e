//! MiniPlay Economy Module
//!
//! Implements the MPcoin economy behind the minigame portal:
//! - Weekly ranking payout liability (fixed tiers plus custom tiers)
//! - Achievement payout liability with expected-claimant and overhead factors
//! - Real-currency charge conversion with ceiling-only bonus rounding
//! - Budget policy gating reward configuration saves
//! - Developer dashboard sessions, player wallets and login streaks
//! - Game catalog search, category filter and likes

pub mod achievement;
pub mod budget;
pub mod catalog;
pub mod charge;
pub mod config;
pub mod errors;
pub mod form;
pub mod params;
pub mod ranking;
pub mod session;
pub mod streak;
pub mod types;
pub mod wallet;
pub mod weekly;

pub use achievement::*;
pub use budget::*;
pub use catalog::*;
pub use charge::*;
pub use config::*;
pub use errors::*;
pub use form::*;
pub use params::*;
pub use ranking::*;
pub use session::*;
pub use streak::*;
pub use types::*;
pub use wallet::*;
pub use weekly::*;

/// Module version for API introspection
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
