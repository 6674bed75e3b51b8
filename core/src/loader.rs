use alloc::vec::Vec;
use futures_util::future::join_all;

use crate::*;

/// A read-only provider of trivia data.
///
/// Both operations fail soft: implementations log transport and shape
/// problems and report them as an empty list or `None`.
#[allow(async_fn_in_trait)]
pub trait TriviaSource {
    /// Up to [`CATEGORIES_PER_GAME`] distinct playable category ids.
    async fn fetch_category_ids(&self) -> Vec<CategoryId>;

    async fn fetch_category(&self, id: CategoryId) -> Option<Category>;
}

/// Fetches the ids, then every category concurrently, and keeps the ones that
/// loaded. Only succeeds when enough categories survive for a full board.
pub async fn load_categories<S: TriviaSource>(source: &S) -> Result<Vec<Category>> {
    let ids = source.fetch_category_ids().await;
    if ids.is_empty() {
        log::error!("no category ids to load");
        return Err(TriviaError::NoCategories);
    }
    log::debug!("loading categories: {:?}", ids);

    let requested = ids.len();
    let categories: Vec<Category> = join_all(ids.into_iter().map(|id| source.fetch_category(id)))
        .await
        .into_iter()
        .flatten()
        .collect();

    if categories.len() < CATEGORIES_PER_GAME {
        log::error!(
            "only {} of {} requested categories loaded, {} needed",
            categories.len(),
            requested,
            CATEGORIES_PER_GAME
        );
        return Err(TriviaError::NotEnoughCategories {
            found: categories.len(),
            needed: CATEGORIES_PER_GAME,
        });
    }

    Ok(categories)
}
