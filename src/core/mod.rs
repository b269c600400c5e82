//! Core types: pieces, areas, roles, RNG, configuration and errors.
//!
//! Everything the round engine and the board are built from.

pub mod piece;
pub mod rng;
pub mod config;
pub mod roles;
pub mod error;

pub use piece::{AreaId, PieceId};
pub use rng::GameRng;
pub use config::GameConfig;
pub use roles::{Role, Roles};
pub use error::{ConfigError, InvalidChoice};
