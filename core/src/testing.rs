use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::future::poll_fn;
use core::task::Poll;

use crate::*;

/// In-memory quiz API: a flat category listing plus fetchable categories.
#[derive(Debug, Default)]
pub(crate) struct MockQuizApi {
    listing: Vec<CategorySummary>,
    categories: BTreeMap<CategoryId, CategoryPayload>,
    failing_page: Option<u32>,
    failing_category: Option<CategoryId>,
    page_cap: Option<u32>,
    suspend_fetches: bool,
    page_offsets: RefCell<Vec<u32>>,
    fetched: RefCell<Vec<CategoryId>>,
    fetch_log: RefCell<Vec<String>>,
}

impl MockQuizApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Lists a category without making it fetchable.
    pub(crate) fn with_listed(mut self, id: CategoryId, clues_count: u32) -> Self {
        self.listing.push(CategorySummary {
            id,
            title: format!("category {id}"),
            clues_count,
        });
        self
    }

    /// Lists a category and serves `clue_count` generated clues for it.
    pub(crate) fn with_category(self, id: CategoryId, title: &str, clue_count: u32) -> Self {
        let clues = (0..clue_count)
            .map(|i| CluePayload {
                question: format!("{title} question {i}"),
                answer: format!("{title} answer {i}"),
                value: Some(100 * (i + 1)),
            })
            .collect();
        self.with_payload(id, clue_count, CategoryPayload {
            title: String::from(title),
            clues,
        })
    }

    /// Lists a category advertising `clues_count` clues and serves `payload` for it.
    pub(crate) fn with_payload(
        mut self,
        id: CategoryId,
        clues_count: u32,
        payload: CategoryPayload,
    ) -> Self {
        self.listing.push(CategorySummary {
            id,
            title: payload.title.clone(),
            clues_count,
        });
        self.categories.insert(id, payload);
        self
    }

    pub(crate) fn failing_page(mut self, offset: u32) -> Self {
        self.failing_page = Some(offset);
        self
    }

    pub(crate) fn failing_category(mut self, id: CategoryId) -> Self {
        self.failing_category = Some(id);
        self
    }

    /// Serves at most `cap` summaries per page, whatever `count` asks for.
    pub(crate) fn page_cap(mut self, cap: u32) -> Self {
        self.page_cap = Some(cap);
        self
    }

    /// Category fetches suspend once between starting and finishing.
    pub(crate) fn suspend_fetches(mut self) -> Self {
        self.suspend_fetches = true;
        self
    }

    pub(crate) fn page_offsets(&self) -> Vec<u32> {
        self.page_offsets.borrow().clone()
    }

    pub(crate) fn fetched(&self) -> Vec<CategoryId> {
        self.fetched.borrow().clone()
    }

    /// `start <id>` / `end <id>` entries in the order category fetches hit them.
    pub(crate) fn fetch_log(&self) -> Vec<String> {
        self.fetch_log.borrow().clone()
    }
}

/// Returns `Pending` once, waking itself, then completes.
async fn yield_now() {
    let mut yielded = false;
    poll_fn(|cx| {
        if yielded {
            Poll::Ready(())
        } else {
            yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    })
    .await
}

impl QuizApi for MockQuizApi {
    async fn categories(&self, count: u32, offset: u32) -> DataResult<Vec<CategorySummary>> {
        self.page_offsets.borrow_mut().push(offset);
        if self.failing_page == Some(offset) {
            return Err(DataError::Network(format!("page at offset {offset} unavailable")));
        }

        let count = self.page_cap.map_or(count, |cap| count.min(cap));
        Ok(self
            .listing
            .iter()
            .skip(offset as usize)
            .take(count as usize)
            .cloned()
            .collect())
    }

    async fn category(&self, id: CategoryId) -> DataResult<CategoryPayload> {
        self.fetched.borrow_mut().push(id);
        if self.suspend_fetches {
            self.fetch_log.borrow_mut().push(format!("start {id}"));
            yield_now().await;
            self.fetch_log.borrow_mut().push(format!("end {id}"));
        }
        if self.failing_category == Some(id) {
            return Err(DataError::Network(format!("category {id} unavailable")));
        }

        self.categories
            .get(&id)
            .cloned()
            .ok_or(DataError::NotFound(id))
    }
}
