use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// One entry of the paged category listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub clues_count: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CluePayload {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub value: Option<u32>,
}

/// Full category as returned by the API, clues in API order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub title: String,
    #[serde(default)]
    pub clues: Vec<CluePayload>,
}

/// Normalized category before its clues are sampled down to board size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryData {
    pub id: CategoryId,
    pub title: String,
    pub clues: Vec<Clue>,
}

impl CategoryData {
    fn from_payload(id: CategoryId, payload: CategoryPayload) -> Self {
        let clues = payload
            .clues
            .into_iter()
            .map(|clue| Clue::new(clue.question, clue.answer, clue.value.unwrap_or_default()))
            .collect();
        Self {
            id,
            title: payload.title,
            clues,
        }
    }
}

/// Transport to the remote quiz API.
///
/// Futures are not required to be `Send`, browser fetches never are.
#[allow(async_fn_in_trait)]
pub trait QuizApi {
    /// `GET /categories?count=<count>&offset=<offset>`
    async fn categories(&self, count: u32, offset: u32) -> DataResult<Vec<CategorySummary>>;

    /// `GET /category?id=<id>`, [`DataError::NotFound`] for unknown ids.
    async fn category(&self, id: CategoryId) -> DataResult<CategoryPayload>;
}

impl<A: QuizApi + ?Sized> QuizApi for &A {
    async fn categories(&self, count: u32, offset: u32) -> DataResult<Vec<CategorySummary>> {
        (**self).categories(count, offset).await
    }

    async fn category(&self, id: CategoryId) -> DataResult<CategoryPayload> {
        (**self).category(id).await
    }
}

/// Category discovery and fetching on top of a [`QuizApi`] transport.
#[derive(Clone, Debug)]
pub struct QuizClient<A> {
    api: A,
    listing: ListingConfig,
}

impl<A: QuizApi> QuizClient<A> {
    pub fn new(api: A, listing: ListingConfig) -> Self {
        Self { api, listing }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn listing(&self) -> ListingConfig {
        self.listing
    }

    /// Ids of every listed category advertising at least `min_clues` clues.
    ///
    /// Pages are requested one after the other; a short page means the listing
    /// is exhausted, which holds because [`ListingConfig::new`] keeps the page size
    /// within what the API serves. Any failed page fails the whole scan.
    pub async fn list_eligible_category_ids(&self, min_clues: u32) -> DataResult<Vec<CategoryId>> {
        let ListingConfig {
            page_size,
            max_pages,
        } = self.listing;

        let mut seen = BTreeSet::new();
        let mut eligible = Vec::new();

        for page in 0..max_pages {
            let offset = page.saturating_mul(page_size);
            let summaries = self.api.categories(page_size, offset).await.inspect_err(|err| {
                log::warn!("category listing failed at offset {}: {}", offset, err);
            })?;
            let exhausted = summaries.len() < page_size as usize;

            eligible.extend(
                summaries
                    .iter()
                    .filter(|summary| summary.clues_count >= min_clues)
                    .filter(|summary| seen.insert(summary.id))
                    .map(|summary| summary.id),
            );

            if exhausted {
                log::debug!("category listing exhausted after {} page(s)", page + 1);
                break;
            }
        }

        log::debug!(
            "{} eligible categories with at least {} clues",
            eligible.len(),
            min_clues
        );
        Ok(eligible)
    }

    /// Uniform sample of `num_categories` distinct eligible category ids.
    pub async fn sample_category_ids<R: Rng>(
        &self,
        num_categories: usize,
        min_clues: u32,
        rng: &mut R,
    ) -> DataResult<Vec<CategoryId>> {
        let eligible = self.list_eligible_category_ids(min_clues).await?;
        let available = eligible.len();

        sample_without_replacement(eligible, num_categories, rng).ok_or(
            DataError::InsufficientData {
                requested: num_categories,
                available,
            },
        )
    }

    /// Fetches one category with all of its clues, every clue hidden.
    pub async fn fetch_category(&self, id: CategoryId) -> DataResult<CategoryData> {
        let payload = self.api.category(id).await?;
        log::trace!("fetched category {} ({} clues)", id, payload.clues.len());
        Ok(CategoryData::from_payload(id, payload))
    }
}
