use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One image as returned by the search API.
///
/// The session never looks inside a record; only rendering and output do.
/// Fields the API adds later are preserved in `extra`.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ImageRecord {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub tags: String,
    #[serde(rename = "pageURL", default)]
    pub page_url: String,
    #[serde(rename = "webformatURL", default)]
    pub webformat_url: String,
    #[serde(rename = "largeImageURL", default)]
    pub large_image_url: String,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub downloads: u64,
    #[serde(default)]
    pub user: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One page of results for a query, consumed immediately by the caller.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ResultPage {
    #[serde(rename = "totalHits", default)]
    pub total_hits: u64,
    #[serde(default)]
    pub hits: Vec<ImageRecord>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub api: ApiSection,
}

#[derive(Debug, Deserialize, Default)]
pub struct ApiSection {
    pub base_url: Option<String>,
    pub key: Option<String>,
    pub image_type: Option<String>,
    pub orientation: Option<String>,
    pub safesearch: Option<bool>,
    pub per_page: Option<u32>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ItemRow {
    pub id: u64,
    pub tags: String,
    pub url: String,
    pub preview: String,
    pub likes: u64,
    pub views: u64,
    pub comments: u64,
    pub downloads: u64,
}

impl From<&ImageRecord> for ItemRow {
    fn from(r: &ImageRecord) -> Self {
        ItemRow {
            id: r.id,
            tags: r.tags.clone(),
            url: r.large_image_url.clone(),
            preview: r.webformat_url.clone(),
            likes: r.likes,
            views: r.views,
            comments: r.comments,
            downloads: r.downloads,
        }
    }
}

#[derive(Serialize, Debug, Default)]
pub struct SearchReport {
    pub query: String,
    pub total_hits: u64,
    pub pages_fetched: u32,
    pub exhausted: bool,
    pub items: Vec<ItemRow>,
    pub notices: Vec<String>,
    pub error: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct BrowseStep {
    pub event: String,
    pub query: String,
    pub page: u32,
    pub total_hits: u64,
    pub more_available: bool,
    pub items: Vec<ItemRow>,
    pub notices: Vec<String>,
    pub error: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct EffectiveConfig {
    pub config_path: String,
    pub source: String,
    pub api_key: String,
    pub image_type: String,
    pub orientation: String,
    pub safesearch: bool,
    pub per_page: u32,
}
