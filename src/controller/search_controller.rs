use tracing::{info, warn};
use crate::error::SearchError;
use crate::models::place::SearchResult;
use crate::repositories::places_api_repo::{PlacesApiRepo, SearchPage};

/// Runs the text search `"<business_type> in <city_name>"` and follows
/// next-page tokens until the API stops handing them out.
pub async fn search_entries(
    places_repo: &PlacesApiRepo,
    city_name: &str,
    business_type: &str,
) -> Result<Vec<SearchResult>, SearchError> {
    let query = format!("{} in {}", business_type, city_name);
    let search_res = collect_pages(places_repo, &query).await;

    if let Err(e) = &search_res {
        warn!("Something went wrong searching for {} due to: {}", query, e);
    }
    info!("Fetching completed");
    search_res
}

async fn collect_pages(
    places_repo: &PlacesApiRepo,
    query: &str,
) -> Result<Vec<SearchResult>, SearchError> {
    let mut results: Vec<SearchResult> = Vec::new();
    let mut pages_fetched = 0;
    let mut next_page_token: Option<String> = None;

    loop {
        let page = match next_page_token.as_deref() {
            Some(token) => SearchPage::Token(token),
            None => SearchPage::Query(query),
        };
        let response = places_repo
            .search_page(page)
            .await
            .map_err(|e| SearchError { pages_fetched, source: e })?;

        pages_fetched += 1;
        info!("Fetched page {} with {} results", pages_fetched, response.results.len());
        results.extend(response.results);

        match response.next_page_token {
            Some(token) => {
                // tokens are rejected with INVALID_REQUEST until they activate
                tokio::time::sleep(places_repo.page_token_delay()).await;
                next_page_token = Some(token);
            }
            None => break,
        }
    }

    Ok(results)
}
