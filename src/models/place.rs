//! Response shapes of the Places web service. Only the fields this tool
//! reads are declared; everything else in the payload is ignored.

use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub status: String,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct SearchResult {
    pub place_id: String,
    pub name: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct DetailsResponse {
    pub result: Option<PlaceDetails>,
    #[serde(default)]
    pub status: String,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct PlaceDetails {
    #[serde(default)]
    pub name: String,
    pub price_level: Option<u8>,
    pub formatted_address: Option<String>,
    pub url: Option<String>,
    pub international_phone_number: Option<String>,
    pub website: Option<String>,
    pub opening_hours: Option<OpeningHours>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub photos: Vec<Photo>,
    /// Kept as the API's number so `5` is written back as `5`, not `5.0`
    pub rating: Option<serde_json::Number>,
    pub user_ratings_total: Option<u64>,
    pub geometry: Geometry,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct OpeningHours {
    #[serde(default)]
    pub weekday_text: Vec<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Review {
    pub author_name: String,
    #[serde(default)]
    pub text: String,
    pub rating: i64,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Photo {
    pub photo_reference: String,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Geometry {
    pub location: Location,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}
