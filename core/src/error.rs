use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriviaError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Malformed response: {0}")]
    Shape(&'static str),
    #[error("No categories available")]
    NoCategories,
    #[error("Only {found} of {needed} categories could be loaded")]
    NotEnoughCategories { found: usize, needed: usize },
    #[error("Invalid coordinates")]
    InvalidCoords,
}

pub type Result<T> = core::result::Result<T, TriviaError>;
