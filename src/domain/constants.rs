pub const DEFAULT_BASE_URL: &str = "https://pixabay.com/api/";
pub const DEFAULT_PER_PAGE: u32 = 40;
pub const DEFAULT_IMAGE_TYPE: &str = "photo";
pub const DEFAULT_ORIENTATION: &str = "horizontal";

pub const NOTICE_EMPTY_QUERY: &str =
    "The search bar cannot be empty. Please type any criteria in the search bar.";
pub const NOTICE_NO_RESULTS: &str =
    "Sorry, there are no images matching your search query. Please try again.";
pub const NOTICE_END_OF_RESULTS: &str =
    "We're sorry, but you've reached the end of search results.";

pub fn notice_found(total_hits: u64) -> String {
    format!("Hooray! We found {} images.", total_hits)
}
