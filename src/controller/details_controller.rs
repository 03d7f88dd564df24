use futures::stream::{self, StreamExt};
use tracing::{info, warn};
use crate::error::{EnrichmentError, PlacesApiError};
use crate::models::entry_detail::EntryDetail;
use crate::models::place::SearchResult;
use crate::repositories::places_api_repo::PlacesApiRepo;

/// Looks up details for every search result, keeping search order.
///
/// At most `concurrency` lookups are in flight; `1` issues them one after
/// another. The first failed lookup stops the stage and the entries finished
/// before it travel back inside the [`EnrichmentError`].
pub async fn fetch_entries_details(
    places_repo: &PlacesApiRepo,
    search_results: &[SearchResult],
    concurrency: usize,
) -> Result<Vec<EntryDetail>, EnrichmentError> {
    let mut lookups = stream::iter(search_results)
        .map(|search_result| async move {
            let detail_res = fetch_entry_detail(places_repo, &search_result.place_id).await;
            (search_result, detail_res)
        })
        .buffered(concurrency.max(1));

    let mut entries_details = Vec::with_capacity(search_results.len());
    while let Some((search_result, detail_res)) = lookups.next().await {
        match detail_res {
            Ok(entry_detail) => {
                info!(
                    "Fetched details {}/{}: {}",
                    entries_details.len() + 1,
                    search_results.len(),
                    entry_detail.name
                );
                entries_details.push(entry_detail);
            }
            Err(e) => {
                warn!(
                    "Something went wrong fetching details for {} ({}) due to: {}",
                    search_result.name.as_deref().unwrap_or("unnamed place"),
                    search_result.place_id,
                    e
                );
                return Err(EnrichmentError {
                    place_id: search_result.place_id.clone(),
                    partial: entries_details,
                    source: e,
                });
            }
        }
    }

    Ok(entries_details)
}

async fn fetch_entry_detail(
    places_repo: &PlacesApiRepo,
    place_id: &str,
) -> Result<EntryDetail, PlacesApiError> {
    let details = places_repo.place_details(place_id).await?;
    let photos = details
        .photos
        .iter()
        .map(|photo| places_repo.photo_url(&photo.photo_reference))
        .collect();

    Ok(EntryDetail::new(details, photos))
}
