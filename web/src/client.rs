use gloo::net::http::Request;
use trivia_core::*;

/// [`TriviaSource`] backed by the remote JSON API.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ApiClient {
    endpoints: Endpoints,
    seed: u64,
}

impl ApiClient {
    pub(crate) fn new(endpoints: Endpoints, seed: u64) -> Self {
        Self { endpoints, seed }
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        log::debug!("GET {}", url);
        let response = Request::get(url)
            .send()
            .await
            .map_err(|err| TriviaError::Transport(err.to_string()))?;
        if !response.ok() {
            return Err(TriviaError::Transport(format!(
                "{} answered {} {}",
                url,
                response.status(),
                response.status_text()
            )));
        }
        response
            .text()
            .await
            .map_err(|err| TriviaError::Transport(err.to_string()))
    }
}

impl TriviaSource for ApiClient {
    async fn fetch_category_ids(&self) -> Vec<CategoryId> {
        let url = self.endpoints.categories_url(CATEGORY_POOL_SIZE);
        let summaries = self
            .get_text(&url)
            .await
            .and_then(|body| parse_category_list(&body));

        match summaries {
            Ok(summaries) => {
                let ids = select_category_ids(&summaries, CATEGORIES_PER_GAME, self.seed);
                let titles: Vec<&str> = summaries
                    .iter()
                    .filter(|summary| {
                        summary
                            .playable_id()
                            .is_some_and(|id| ids.contains(&id))
                    })
                    .filter_map(|summary| summary.title.as_deref())
                    .collect();
                log::debug!(
                    "picked {:?} {:?} out of {} summaries",
                    ids,
                    titles,
                    summaries.len()
                );
                ids
            }
            Err(err) => {
                log::warn!("category list unavailable: {}", err);
                Vec::new()
            }
        }
    }

    async fn fetch_category(&self, id: CategoryId) -> Option<Category> {
        let url = self.endpoints.category_url(id);
        let category = self
            .get_text(&url)
            .await
            .and_then(|body| parse_category(&body))
            .and_then(|payload| payload.into_category(CLUES_PER_CATEGORY, self.seed ^ id.get()));

        match category {
            Ok(category) => Some(category),
            Err(err) => {
                log::warn!("category {} skipped: {}", id, err);
                None
            }
        }
    }
}
