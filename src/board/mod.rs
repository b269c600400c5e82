//! The board: a fixed number of areas that pieces are spread across each
//! round.

pub mod areas;

pub use areas::{Board, Occupants};
