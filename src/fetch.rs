use crate::client::StoryApi;
use crate::constants::SEARCH_STORIES_PATH;
use crate::dates::DateRange;
use crate::error::{ReportError, ReportResult};
use crate::logging::log_info;
use crate::models::Story;

pub fn search_stories_path(range: &DateRange, page_size: u32) -> String {
    format!(
        "{}?query={}&page_size={}",
        SEARCH_STORIES_PATH,
        range.search_query(),
        page_size
    )
}

/// Follows `next` cursors in order. More than `max_pages` pages fails with
/// [`ReportError::PageLimitExceeded`].
pub async fn fetch_all_stories<A: StoryApi>(
    api: &A,
    first_path: &str,
    max_pages: usize,
) -> ReportResult<Vec<Story>> {
    let mut stories = Vec::new();
    let mut path = first_path.to_string();
    let mut pages = 0usize;

    loop {
        if pages >= max_pages {
            return Err(ReportError::PageLimitExceeded(max_pages));
        }

        let page = api.get_page(&path).await?;
        pages += 1;
        log_info(&format!("Fetched page {} with {} stories", pages, page.data.len()));

        stories.extend(page.data);

        match page.next {
            Some(next) => path = next,
            None => break,
        }
    }

    Ok(stories)
}
