use std::path::PathBuf;
use std::time::Duration;
use clap::Parser;

pub const DEFAULT_PLACES_API_URL: &str = "https://maps.googleapis.com/maps/api/place";

#[derive(Parser, Clone, Debug)]
#[command(name = "places-entries")]
#[command(about = "Collects place listings for a city and business type into a JSON file")]
pub struct Config {
    /// City to search in, e.g. "Singapore"
    pub city_name: String,
    /// Free-text business category, e.g. "restaurants"
    pub business_type: String,

    #[clap(env, long, hide_env_values = true)]
    pub google_api_key: String,
    #[clap(env, long, default_value = DEFAULT_PLACES_API_URL)]
    pub places_api_url: String,
    /// Wait before a next-page token becomes usable
    #[clap(env, long, default_value_t = 2000)]
    pub page_token_delay_ms: u64,
    #[clap(env, long, default_value_t = 400)]
    pub photo_max_width: u32,
    #[clap(env, long, default_value = ".")]
    pub output_dir: PathBuf,
    #[clap(env, long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub detail_concurrency: u16,
    /// Write whatever was enriched before a detail lookup failed
    #[clap(env, long)]
    pub keep_partial: bool,
}

impl Config {
    pub fn places_api(&self) -> PlacesApiConfig {
        PlacesApiConfig {
            api_key: self.google_api_key.clone(),
            base_url: self.places_api_url.clone(),
            page_token_delay: Duration::from_millis(self.page_token_delay_ms),
            photo_max_width: self.photo_max_width,
        }
    }

    pub fn output_file(&self) -> PathBuf {
        self.output_dir.join(entries_file_name(&self.city_name, &self.business_type))
    }
}

/// Settings the Places API client needs; kept apart from the CLI so the
/// pipeline can be driven without parsing arguments.
#[derive(Clone, Debug)]
pub struct PlacesApiConfig {
    pub api_key: String,
    pub base_url: String,
    pub page_token_delay: Duration,
    pub photo_max_width: u32,
}

impl PlacesApiConfig {
    pub fn new(api_key: &str, base_url: &str) -> Self {
        Self {
            api_key: api_key.to_owned(),
            base_url: base_url.to_owned(),
            page_token_delay: Duration::from_secs(2),
            photo_max_width: 400,
        }
    }
}

pub fn entries_file_name(city_name: &str, business_type: &str) -> String {
    format!("{}_{}_entries.json", city_name, business_type)
}
