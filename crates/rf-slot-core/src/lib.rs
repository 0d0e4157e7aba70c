//! # rf-slot-core: reel-strip slot round engine
//!
//! Simulates one round of a reel-based slot machine: every reel shows a
//! random 3-symbol window, the windows form the result grid, and configured
//! paylines are evaluated against it to compute the payout.
//!
//! ## Architecture
//!
//! ```text
//! SlotEngine::play(bet)
//!     │
//!     ├── Reel::spin() × N     (StripReel + injected SharedRng)
//!     ├── ResultGrid           (window rows × reels)
//!     └── PayTable::calculate_payout(grid, bet)
//!           │
//!           v
//!     RoundResult | RoundError
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let engine = SlotConfig::classic().build_engine(SharedRng::seeded(7))?;
//! let round = engine.play(5.0)?;
//! println!("{}won {}", round.grid, round.win_amount);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod paytable;
pub mod reel;
pub mod rng;
pub mod stats;
pub mod symbols;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use grid::*;
pub use paytable::*;
pub use reel::*;
pub use rng::*;
pub use stats::*;
pub use symbols::*;
