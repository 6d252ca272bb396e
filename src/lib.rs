//! Minimum drink menus for the lazy bartender problem.
//!
//! Each customer accepts some set of drinks; the bartender wants the fewest
//! drinks such that everyone is served. This is set cover, so two strategies
//! are offered: [`greedy_cover`] is fast but may overshoot, [`exact_cover`]
//! always finds a minimum at exponential cost.

pub mod error;
pub mod exact;
pub mod generate;
pub mod greedy;
pub mod index;
pub mod model;

pub use error::CoverError;
pub use exact::{exact_cover, exact_cover_with, minimal_drinks_exact, ExactParams};
pub use greedy::{greedy_cover, minimal_drinks_greedy};
pub use index::InvertedIndex;
pub use model::cover::Cover;
pub use model::entity::Id;
pub use model::preference::Preferences;
