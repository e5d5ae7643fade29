//! Pagination controller for one search at a time.
//!
//! `SearchSession` decides which page of which query comes next and when a
//! query has run out of pages. It holds no rendered state: callers clear their
//! gallery before `start_search` and append whatever pages come back.
//!
//! Only one fetch is ever in flight: both mutating calls take `&mut self` and
//! block until the source answers.

use crate::domain::constants::DEFAULT_PER_PAGE;
use crate::domain::models::ResultPage;
use crate::services::source::{FetchError, ImageSource};

#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    #[error("search query is empty")]
    EmptyQuery,
    #[error("no active search with more pages to load")]
    NoActiveSearch,
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    Empty {
        query: String,
    },
    HasResults {
        page: u32,
        total_hits: u64,
        exhausted: bool,
    },
}

/// Result of submitting a new query. Zero matches is not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    NoResults,
    Page(ResultPage),
}

pub struct SearchSession<S> {
    source: S,
    query: String,
    page: u32,
    per_page: u32,
    total_hits: u64,
    state: SessionState,
}

impl<S: ImageSource> SearchSession<S> {
    pub fn new(source: S) -> Self {
        Self::with_per_page(source, DEFAULT_PER_PAGE)
    }

    pub fn with_per_page(source: S, per_page: u32) -> Self {
        SearchSession {
            source,
            query: String::new(),
            page: 1,
            per_page: per_page.max(1),
            total_hits: 0,
            state: SessionState::Idle,
        }
    }

    pub fn start_search(&mut self, query: &str) -> Result<SearchOutcome, SearchError> {
        self.query = query.trim().to_string();
        self.page = 1;
        self.total_hits = 0;
        self.state = SessionState::Idle;
        if self.query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        let result = match self.source.fetch(&self.query, self.page, self.per_page) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(query = %self.query, error = %e, "search failed");
                return Err(e.into());
            }
        };
        self.total_hits = result.total_hits;
        if result.total_hits == 0 {
            tracing::info!(query = %self.query, "no results");
            self.state = SessionState::Empty {
                query: self.query.clone(),
            };
            return Ok(SearchOutcome::NoResults);
        }
        self.state = self.results_state();
        tracing::info!(
            query = %self.query,
            total_hits = self.total_hits,
            exhausted = self.is_exhausted(),
            "search started"
        );
        Ok(SearchOutcome::Page(result))
    }

    pub fn load_more(&mut self) -> Result<ResultPage, SearchError> {
        match self.state {
            SessionState::HasResults {
                exhausted: false, ..
            } => {}
            _ => return Err(SearchError::NoActiveSearch),
        }
        let next = self.page + 1;
        let result = match self.source.fetch(&self.query, next, self.per_page) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(query = %self.query, page = next, error = %e, "load more failed");
                return Err(e.into());
            }
        };
        self.page = next;
        self.total_hits = result.total_hits;
        self.state = self.results_state();
        tracing::info!(
            query = %self.query,
            page = self.page,
            hits = result.hits.len(),
            exhausted = self.is_exhausted(),
            "page loaded"
        );
        Ok(result)
    }

    pub fn is_exhausted(&self) -> bool {
        match self.state {
            SessionState::HasResults { exhausted, .. } => exhausted,
            _ => false,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn total_hits(&self) -> u64 {
        self.total_hits
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    // page * per_page >= total_hits is the same boundary as
    // page >= ceil(total_hits / per_page).
    fn results_state(&self) -> SessionState {
        let fetched = u64::from(self.page) * u64::from(self.per_page);
        SessionState::HasResults {
            page: self.page,
            total_hits: self.total_hits,
            exhausted: fetched >= self.total_hits,
        }
    }
}
