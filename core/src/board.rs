use alloc::vec::Vec;
use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

/// The committed categories of one game. Membership and shape are fixed at
/// construction; only the per-clue reveal state changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    /// Fails unless at least `needed` categories are given.
    pub fn new(categories: Vec<Category>, needed: usize) -> Result<Self> {
        if categories.is_empty() || categories.len() < needed {
            return Err(TriviaError::NotEnoughCategories {
                found: categories.len(),
                needed,
            });
        }
        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Number of clue rows, the longest category decides.
    pub fn rows(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.clues().len())
            .max()
            .unwrap_or(0)
    }

    pub fn cell_count(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.clues().len())
            .sum()
    }

    pub fn clue_at(&self, coord: CellCoord) -> Option<&Clue> {
        self.categories.get(coord.category)?.clue(coord.clue)
    }

    /// Every addressable cell, row by row.
    pub fn coords(&self) -> impl Iterator<Item = CellCoord> + '_ {
        (0..self.rows()).flat_map(move |clue| {
            (0..self.categories.len())
                .map(move |category| CellCoord::new(category, clue))
                .filter(move |&coord| self.clue_at(coord).is_some())
        })
    }

    pub fn reveal(&mut self, coord: CellCoord) -> Result<RevealOutcome> {
        let outcome = self
            .categories
            .get_mut(coord.category)
            .and_then(|category| category.clue_mut(coord.clue))
            .ok_or(TriviaError::InvalidCoords)?
            .advance();
        log::trace!("reveal {}: {:?}", coord, outcome);
        Ok(outcome)
    }

    pub fn is_fully_answered(&self) -> bool {
        self.categories
            .iter()
            .flat_map(|category| category.clues())
            .all(|clue| clue.reveal().is_answered())
    }
}

impl Index<CellCoord> for Board {
    type Output = Clue;

    fn index(&self, coord: CellCoord) -> &Self::Output {
        &self.categories[coord.category].clues()[coord.clue]
    }
}
