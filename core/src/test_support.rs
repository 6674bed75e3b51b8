//! Fixtures shared by the unit tests.

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::*;

pub(crate) fn sample_category(index: usize, clues: usize) -> Category {
    Category::new(
        format!("Category {index}"),
        (0..clues)
            .map(|clue| Clue::new(format!("Q{index}.{clue}"), format!("A{index}.{clue}")))
            .collect(),
    )
}

pub(crate) fn full_board() -> Board {
    let categories = (0..CATEGORIES_PER_GAME)
        .map(|index| sample_category(index, CLUES_PER_CATEGORY))
        .collect();
    Board::new(categories, CATEGORIES_PER_GAME).unwrap()
}

/// In-memory source; ids without an entry fail to load.
#[derive(Default)]
pub(crate) struct FakeSource {
    pub ids: Vec<CategoryId>,
    pub categories: BTreeMap<CategoryId, Category>,
    pub requested: RefCell<Vec<CategoryId>>,
}

impl FakeSource {
    pub(crate) fn with_categories(count: u64, loadable: u64) -> Self {
        let ids: Vec<CategoryId> = (1..=count).filter_map(CategoryId::new).collect();
        let categories = ids
            .iter()
            .take(loadable as usize)
            .map(|&id| (id, sample_category(id.get() as usize, CLUES_PER_CATEGORY)))
            .collect();
        Self {
            ids,
            categories,
            requested: RefCell::default(),
        }
    }
}

impl TriviaSource for FakeSource {
    async fn fetch_category_ids(&self) -> Vec<CategoryId> {
        self.ids.clone()
    }

    async fn fetch_category(&self, id: CategoryId) -> Option<Category> {
        self.requested.borrow_mut().push(id);
        self.categories.get(&id).cloned()
    }
}
