use anyhow::Context;
use tracing::{info, warn};
use crate::config::Config;
use crate::repositories::places_api_repo::PlacesApiRepo;

pub mod details_controller;
pub mod persist_controller;
pub mod search_controller;

/// Search, enrich, then write the entries file for `config`.
///
/// A failed write is not an error here. Search and enrichment failures are;
/// with `keep_partial` the entries enriched before the failure are written
/// first.
pub async fn run(
    config: &Config,
) -> anyhow::Result<()> {
    let places_repo = PlacesApiRepo::new(config.places_api())
        .context("Error building the Places API client")?;

    let search_results = search_controller::search_entries(
        &places_repo,
        &config.city_name,
        &config.business_type,
    ).await?;
    info!("Found {} places, fetching details", search_results.len());

    let output_file = config.output_file();
    let entries_details = match details_controller::fetch_entries_details(
        &places_repo,
        &search_results,
        usize::from(config.detail_concurrency),
    ).await {
        Ok(entries_details) => entries_details,
        Err(e) => {
            if config.keep_partial {
                warn!("Keeping {} entries enriched before the failure", e.partial.len());
                persist_controller::save_entries(&output_file, &e.partial);
            }
            return Err(e.into());
        }
    };

    persist_controller::save_entries(&output_file, &entries_details);
    Ok(())
}
