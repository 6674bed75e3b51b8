//! Remote payload shapes and their normalization into board types.
//!
//! Every field is optional on the wire; presence and sanity are checked here so
//! a malformed response turns into a [`TriviaError::Shape`] instead of a panic.

use alloc::borrow::ToOwned;
use alloc::collections::BTreeSet;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use serde::Deserialize;

use crate::*;

/// Where the two read endpoints live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    pub fn categories_url(&self, count: usize) -> String {
        format!("{}/categories?count={}", self.base, count)
    }

    pub fn category_url(&self, id: CategoryId) -> String {
        format!("{}/category?id={}", self.base, id)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CategorySummary {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub clues_count: Option<i64>,
}

impl CategorySummary {
    /// Id of a category worth requesting, if this entry has one.
    pub fn playable_id(&self) -> Option<CategoryId> {
        match self.clues_count {
            Some(count) if count > 0 => self.id.and_then(CategoryId::new),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CluePayload {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

impl CluePayload {
    fn into_clue(self) -> Option<Clue> {
        let question = self.question?.trim().to_owned();
        let answer = self.answer?.trim().to_owned();
        if question.is_empty() || answer.is_empty() {
            return None;
        }
        Some(Clue::new(question, answer))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CategoryPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub clues: Option<Vec<CluePayload>>,
}

impl CategoryPayload {
    /// Keeps `clue_count` usable clues, picked at random but in their original order.
    pub fn into_category(self, clue_count: usize, seed: u64) -> Result<Category> {
        let title = self
            .title
            .map(|title| title.trim().to_owned())
            .filter(|title| !title.is_empty())
            .ok_or(TriviaError::Shape("category has no title"))?;
        let clues: Vec<Clue> = self
            .clues
            .ok_or(TriviaError::Shape("category has no clues"))?
            .into_iter()
            .filter_map(CluePayload::into_clue)
            .collect();

        if clues.len() < clue_count {
            log::debug!(
                "category {:?} has {} usable clues, needs {}",
                title,
                clues.len(),
                clue_count
            );
            return Err(TriviaError::Shape("category has too few usable clues"));
        }

        let mut rng = SmallRng::seed_from_u64(seed);
        let mut picked: Vec<usize> = (0..clues.len()).collect();
        picked.shuffle(&mut rng);
        picked.truncate(clue_count);
        let picked: BTreeSet<usize> = picked.into_iter().collect();

        let clues = clues
            .into_iter()
            .enumerate()
            .filter(|(index, _)| picked.contains(index))
            .map(|(_, clue)| clue)
            .collect();
        Ok(Category::new(title, clues))
    }
}

/// Only a body that isn't a JSON array fails; malformed entries are skipped one by one.
pub fn parse_category_list(body: &str) -> Result<Vec<CategorySummary>> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(body).map_err(|err| {
        log::debug!("category list did not parse: {}", err);
        TriviaError::Shape("category list is not a list of categories")
    })?;

    let total = entries.len();
    let summaries: Vec<CategorySummary> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(summary) => Some(summary),
            Err(err) => {
                log::warn!("skipping category summary #{}: {}", index, err);
                None
            }
        })
        .collect();
    if summaries.len() < total {
        log::debug!("kept {} of {} category summaries", summaries.len(), total);
    }
    Ok(summaries)
}

pub fn parse_category(body: &str) -> Result<CategoryPayload> {
    serde_json::from_str(body).map_err(|err| {
        log::debug!("category did not parse: {}", err);
        TriviaError::Shape("category is not an object with title and clues")
    })
}

/// Picks up to `count` distinct playable ids, without replacement.
pub fn select_category_ids(
    summaries: &[CategorySummary],
    count: usize,
    seed: u64,
) -> Vec<CategoryId> {
    let playable: BTreeSet<CategoryId> = summaries
        .iter()
        .filter_map(CategorySummary::playable_id)
        .collect();
    let mut ids: Vec<CategoryId> = playable.into_iter().collect();

    let mut rng = SmallRng::seed_from_u64(seed);
    ids.shuffle(&mut rng);
    ids.truncate(count);
    ids
}
