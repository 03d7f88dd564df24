use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::models::place::Review;

/// Count of reviews per star rating. Keys 1 through 5 are always present;
/// any other value the API sends gets a key of its own.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct RatingHistogram(BTreeMap<i64, u64>);

impl Default for RatingHistogram {
    fn default() -> Self {
        Self((1..=5).map(|star| (star, 0)).collect())
    }
}

impl RatingHistogram {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let mut histogram = Self::default();
        for review in reviews {
            histogram.record(review.rating);
        }
        histogram
    }

    pub fn record(&mut self, rating: i64) {
        *self.0.entry(rating).or_insert(0) += 1;
    }

    pub fn count(&self, rating: i64) -> u64 {
        self.0.get(&rating).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: i64) -> Review {
        Review {
            author_name: format!("reviewer {}", rating),
            text: String::new(),
            rating,
        }
    }

    #[test]
    fn empty_histogram_has_all_five_stars_at_zero() {
        let histogram = RatingHistogram::default();
        assert_eq!(serde_json::to_value(&histogram).unwrap(), serde_json::json!({
            "1": 0, "2": 0, "3": 0, "4": 0, "5": 0
        }));
    }

    #[test]
    fn counts_sum_to_number_of_reviews() {
        let reviews: Vec<Review> = [5, 5, 4, 1, 3, 5].into_iter().map(review).collect();
        let histogram = RatingHistogram::from_reviews(&reviews);

        assert_eq!(histogram.total(), reviews.len() as u64);
        assert_eq!(histogram.count(5), 3);
        assert_eq!(histogram.count(2), 0);
    }

    #[test]
    fn out_of_range_ratings_get_their_own_key() {
        let reviews: Vec<Review> = [0, 7, 5].into_iter().map(review).collect();
        let histogram = RatingHistogram::from_reviews(&reviews);

        assert_eq!(histogram.count(0), 1);
        assert_eq!(histogram.count(7), 1);
        assert_eq!(histogram.total(), 3);

        let json = serde_json::to_value(&histogram).unwrap();
        assert_eq!(json["7"], 1);
        assert_eq!(json["1"], 0);
    }
}
