#![no_std]

extern crate alloc;

pub use api::*;
pub use board::*;
pub use clue::*;
pub use error::*;
pub use loader::*;
pub use session::*;
pub use types::*;

mod api;
mod board;
mod clue;
mod error;
mod loader;
mod session;
#[cfg(test)]
mod test_support;
mod types;

/// How many category summaries to request before picking a board.
pub const CATEGORY_POOL_SIZE: usize = 100;

/// Columns on a full board.
pub const CATEGORIES_PER_GAME: usize = 5;

/// Rows on a full board.
pub const CLUES_PER_CATEGORY: usize = 5;

pub const DEFAULT_API_BASE: &str = "https://rithm-jeopardy.herokuapp.com/api";
