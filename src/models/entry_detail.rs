use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use crate::models::place::{PlaceDetails, Review};
use crate::models::rating::RatingHistogram;

/// One business listing as written to the entries file.
///
/// Fields the Places API has no data for (`tripadvisor_url`, `cuisines`,
/// `diets`, `menu_url`, `email`, `popular_nearby`) stay empty strings so the
/// file keeps the shape downstream importers expect.
#[skip_serializing_none]
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct EntryDetail {
    pub tripadvisor_url: String,
    pub name: String,
    pub price_range: Option<u8>,
    pub cuisines: String,
    pub diets: String,
    pub address: Option<String>,
    pub gmaps_url: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub menu_url: String,
    pub email: String,
    pub schedule: Vec<String>,
    pub reviews: Vec<EntryReview>,
    pub photos: Vec<String>,
    pub rating: Option<serde_json::Number>,
    pub rating_total: Option<u64>,
    pub ratings: RatingHistogram,
    pub popular_nearby: String,
    /// `[lng, lat]`
    pub location: [f64; 2],
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct EntryReview {
    pub user_id: String,
    pub title: String,
    pub review: String,
    pub rating: i64,
    pub photos: String,
}

impl From<&Review> for EntryReview {
    fn from(review: &Review) -> Self {
        Self {
            user_id: review.author_name.clone(),
            title: String::new(),
            review: review.text.clone(),
            rating: review.rating,
            photos: String::new(),
        }
    }
}

impl EntryDetail {
    /// Builds the output record from a details payload. `photos` are the
    /// already templated photo URLs, in the order the API listed them.
    pub fn new(details: PlaceDetails, photos: Vec<String>) -> Self {
        let ratings = RatingHistogram::from_reviews(&details.reviews);
        let reviews = details.reviews.iter().map(EntryReview::from).collect();
        let schedule = details
            .opening_hours
            .map(|hours| hours.weekday_text)
            .unwrap_or_default();
        let location = details.geometry.location;

        Self {
            tripadvisor_url: String::new(),
            name: details.name,
            price_range: details.price_level,
            cuisines: String::new(),
            diets: String::new(),
            address: details.formatted_address,
            gmaps_url: details.url,
            phone: details.international_phone_number,
            website: details.website,
            menu_url: String::new(),
            email: String::new(),
            schedule,
            reviews,
            photos,
            rating: details.rating,
            rating_total: details.user_ratings_total,
            ratings,
            popular_nearby: String::new(),
            location: [location.lng, location.lat],
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use super::*;

    fn details(value: serde_json::Value) -> PlaceDetails {
        serde_json::from_value(value).expect("details fixture should parse")
    }

    #[test]
    fn maps_full_details_payload() {
        let entry = EntryDetail::new(details(json!({
            "name": "Lau Pa Sat",
            "price_level": 1,
            "formatted_address": "18 Raffles Quay, Singapore 048582",
            "url": "https://maps.google.com/?cid=1",
            "international_phone_number": "+65 6220 2138",
            "website": "https://laupasat.sg",
            "opening_hours": { "weekday_text": ["Monday: Open 24 hours"] },
            "reviews": [
                { "author_name": "Ann", "text": "Satay!", "rating": 5 },
                { "author_name": "Ben", "text": "Crowded", "rating": 3 }
            ],
            "rating": 4.2,
            "user_ratings_total": 21000,
            "geometry": { "location": { "lat": 1.2807, "lng": 103.8504 } }
        })), vec!["https://photo/1".to_string()]);

        assert_eq!(entry.name, "Lau Pa Sat");
        assert_eq!(entry.price_range, Some(1));
        assert_eq!(entry.schedule, vec!["Monday: Open 24 hours".to_string()]);
        assert_eq!(entry.reviews.len(), 2);
        assert_eq!(entry.reviews[0].user_id, "Ann");
        assert_eq!(entry.reviews[0].review, "Satay!");
        assert_eq!(entry.reviews[0].title, "");
        assert_eq!(entry.ratings.count(5), 1);
        assert_eq!(entry.ratings.count(3), 1);
        assert_eq!(entry.ratings.total(), 2);
        assert_eq!(entry.location, [103.8504, 1.2807]);
        assert_eq!(entry.photos, vec!["https://photo/1".to_string()]);
    }

    #[test]
    fn integer_rating_is_written_without_a_fraction() {
        let entry = EntryDetail::new(details(json!({
            "name": "Perfect Score",
            "rating": 5,
            "geometry": { "location": { "lat": 1.0, "lng": 2.0 } }
        })), Vec::new());

        let text = serde_json::to_string(&entry).unwrap();
        assert!(text.contains("\"rating\":5,"));
        assert!(!text.contains("\"rating\":5.0"));
    }

    #[test]
    fn missing_opening_hours_yields_empty_schedule() {
        let entry = EntryDetail::new(details(json!({
            "name": "Nameless Stall",
            "geometry": { "location": { "lat": 1.0, "lng": 2.0 } }
        })), Vec::new());

        assert!(entry.schedule.is_empty());
        assert!(entry.reviews.is_empty());
        assert_eq!(entry.ratings.total(), 0);
    }

    #[test]
    fn absent_values_are_omitted_and_placeholders_kept() {
        let entry = EntryDetail::new(details(json!({
            "name": "Nameless Stall",
            "geometry": { "location": { "lat": 1.0, "lng": 2.0 } }
        })), Vec::new());

        let value = serde_json::to_value(&entry).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("phone"));
        assert!(!object.contains_key("price_range"));
        assert!(!object.contains_key("rating"));
        assert_eq!(object["cuisines"], "");
        assert_eq!(object["popular_nearby"], "");
        assert_eq!(object["location"], json!([2.0, 1.0]));
    }

    #[test]
    fn serialized_fields_keep_record_order() {
        let entry = EntryDetail::new(details(json!({
            "name": "A",
            "geometry": { "location": { "lat": 0.0, "lng": 0.0 } }
        })), Vec::new());

        let text = serde_json::to_string(&entry).unwrap();
        let tripadvisor = text.find("\"tripadvisor_url\"").unwrap();
        let name = text.find("\"name\"").unwrap();
        let location = text.find("\"location\"").unwrap();
        assert!(tripadvisor < name && name < location);
    }
}
