//! Image sources the search session pages through.
//!
//! `PixabayClient` talks to the remote API; `LocalCatalog` serves pages out of
//! a JSON file with the same record shape.

use crate::domain::constants::{DEFAULT_IMAGE_TYPE, DEFAULT_ORIENTATION};
use crate::domain::models::{ImageRecord, ResultPage};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("no API key configured (set PIXSEEK_API_KEY or api.key in the config file)")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("search API returned HTTP {0}")]
    Status(u16),
    #[error("could not read catalog {path}: {source}")]
    CatalogIo {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid catalog {path}: {source}")]
    CatalogFormat {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Fetches one page of results for a query.
pub trait ImageSource {
    fn fetch(&self, query: &str, page: u32, per_page: u32) -> Result<ResultPage, FetchError>;
}

impl<T: ImageSource + ?Sized> ImageSource for &T {
    fn fetch(&self, query: &str, page: u32, per_page: u32) -> Result<ResultPage, FetchError> {
        (**self).fetch(query, page, per_page)
    }
}

impl<T: ImageSource + ?Sized> ImageSource for Box<T> {
    fn fetch(&self, query: &str, page: u32, per_page: u32) -> Result<ResultPage, FetchError> {
        (**self).fetch(query, page, per_page)
    }
}

/// Fixed search filters sent with every remote request.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilters {
    pub image_type: String,
    pub orientation: String,
    pub safesearch: bool,
}

impl Default for SearchFilters {
    fn default() -> Self {
        SearchFilters {
            image_type: DEFAULT_IMAGE_TYPE.to_string(),
            orientation: DEFAULT_ORIENTATION.to_string(),
            safesearch: true,
        }
    }
}

pub struct PixabayClient {
    client: reqwest::blocking::Client,
    base_url: String,
    key: String,
    filters: SearchFilters,
}

impl PixabayClient {
    pub fn new(
        base_url: &str,
        key: Option<&str>,
        filters: SearchFilters,
    ) -> Result<Self, FetchError> {
        let key = match key.map(str::trim) {
            Some(k) if !k.is_empty() => k.to_string(),
            _ => return Err(FetchError::MissingApiKey),
        };
        let client = reqwest::blocking::Client::builder().build()?;
        Ok(PixabayClient {
            client,
            base_url: base_url.to_string(),
            key,
            filters,
        })
    }

    fn request(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<reqwest::blocking::Request, FetchError> {
        let safesearch = if self.filters.safesearch {
            "true"
        } else {
            "false"
        };
        let per_page = per_page.to_string();
        let page = page.to_string();
        let req = self
            .client
            .get(&self.base_url)
            .query(&[
                ("key", self.key.as_str()),
                ("q", query),
                ("image_type", self.filters.image_type.as_str()),
                ("orientation", self.filters.orientation.as_str()),
                ("safesearch", safesearch),
                ("per_page", per_page.as_str()),
                ("page", page.as_str()),
            ])
            .build()?;
        Ok(req)
    }
}

impl ImageSource for PixabayClient {
    fn fetch(&self, query: &str, page: u32, per_page: u32) -> Result<ResultPage, FetchError> {
        let req = self.request(query, page, per_page)?;
        tracing::debug!(base_url = %self.base_url, query, page, per_page, "GET search page");
        let resp = self.client.execute(req)?;
        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), query, page, "search API error status");
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(resp.json::<ResultPage>()?)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    hits: Vec<ImageRecord>,
}

/// Offline source: a JSON file of records, matched against `tags`.
pub struct LocalCatalog {
    records: Vec<ImageRecord>,
}

impl LocalCatalog {
    pub fn open(path: &Path) -> Result<Self, FetchError> {
        let raw = std::fs::read_to_string(path).map_err(|source| FetchError::CatalogIo {
            path: path.to_path_buf(),
            source,
        })?;
        let file: CatalogFile =
            serde_json::from_str(&raw).map_err(|source| FetchError::CatalogFormat {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), records = file.hits.len(), "catalog loaded");
        Ok(LocalCatalog::from_records(file.hits))
    }

    pub fn from_records(records: Vec<ImageRecord>) -> Self {
        LocalCatalog { records }
    }

    fn matches<'a>(&'a self, query: &str) -> Vec<&'a ImageRecord> {
        let q = query.trim().to_ascii_lowercase();
        self.records
            .iter()
            .filter(|r| r.tags.to_ascii_lowercase().contains(&q))
            .collect()
    }
}

impl ImageSource for LocalCatalog {
    fn fetch(&self, query: &str, page: u32, per_page: u32) -> Result<ResultPage, FetchError> {
        let matched = self.matches(query);
        let start = (page.saturating_sub(1) as usize).saturating_mul(per_page as usize);
        let hits = matched
            .iter()
            .skip(start)
            .take(per_page as usize)
            .map(|r| (*r).clone())
            .collect();
        Ok(ResultPage {
            total_hits: matched.len() as u64,
            hits,
        })
    }
}

pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Builds the source named by `--source`: a URL selects the API client,
/// anything else is read as a catalog file.
pub fn open_source(
    source: &str,
    key: Option<&str>,
    filters: SearchFilters,
) -> Result<Box<dyn ImageSource>, FetchError> {
    if is_remote(source) {
        Ok(Box::new(PixabayClient::new(source, key, filters)?))
    } else {
        Ok(Box::new(LocalCatalog::open(Path::new(source))?))
    }
}
