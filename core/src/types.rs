use core::fmt;
use core::num::NonZeroU64;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::TriviaError;

/// Identifier of a remote category, always positive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CategoryId(NonZeroU64);

impl CategoryId {
    pub const fn new(id: u64) -> Option<Self> {
        match NonZeroU64::new(id) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Address of a single clue cell: column is the category, row is the clue.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellCoord {
    pub category: usize,
    pub clue: usize,
}

impl CellCoord {
    pub const fn new(category: usize, clue: usize) -> Self {
        Self { category, clue }
    }
}

/// Text form is `"<category>-<clue>"`, as stored in the grid's `data-cell` attribute.
impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category, self.clue)
    }
}

impl FromStr for CellCoord {
    type Err = TriviaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, clue) = s.split_once('-').ok_or(TriviaError::InvalidCoords)?;
        let category = category.parse().map_err(|_| TriviaError::InvalidCoords)?;
        let clue = clue.parse().map_err(|_| TriviaError::InvalidCoords)?;
        Ok(Self { category, clue })
    }
}
