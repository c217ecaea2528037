//! Restaurant aggregation: fan out to every curated source list,
//! tolerate per-source failures, dedup near-identical entries across
//! lists.

use futures::future::join_all;
use places::{PlacesClient, PlaceResult, RestaurantSource};
use serde::Serialize;
use strum::IntoEnumIterator;

/// Names this similar are the same restaurant.
const NAME_THRESHOLD: f64 = 0.85;
/// Weaker name matches still dedup when the addresses agree too.
const COMBINED_THRESHOLD: f64 = 0.7;

#[derive(Debug, Clone, Serialize)]
pub struct DiningResponse {
    pub data: Vec<PlaceResult>,
    pub sources: Vec<SourceReport>,
}

/// Per-source outcome, reported alongside the merged results so a
/// partially degraded answer is visible for what it is.
#[derive(Debug, Clone, Serialize)]
pub struct SourceReport {
    pub source: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Query every restaurant source concurrently. A failed source
/// contributes nothing but never fails the aggregate.
pub async fn fetch_restaurants(places: &PlacesClient, location: &str) -> DiningResponse {
    let outcomes = join_all(
        RestaurantSource::iter()
            .map(|source| async move { (source, places.restaurants(source, location).await) }),
    )
    .await;

    let mut merged = Vec::new();
    let mut sources = Vec::new();
    for (source, outcome) in outcomes {
        match outcome {
            Ok(results) => {
                sources.push(SourceReport {
                    source: source.to_string(),
                    status: "fulfilled".to_string(),
                    count: Some(results.len()),
                    error: None,
                });
                merged.extend(results);
            }
            Err(err) => {
                tracing::warn!(%source, %err, "restaurant source failed");
                sources.push(SourceReport {
                    source: source.to_string(),
                    status: "rejected".to_string(),
                    count: None,
                    error: Some(err.to_string()),
                });
            }
        }
    }

    DiningResponse {
        data: deduplicate_restaurants(merged),
        sources,
    }
}

/// Drop entries that are the same restaurant surfaced by two lists,
/// keeping the first occurrence (source order is the ranking).
pub fn deduplicate_restaurants(restaurants: Vec<PlaceResult>) -> Vec<PlaceResult> {
    let mut deduped: Vec<PlaceResult> = Vec::new();
    for candidate in restaurants {
        let is_duplicate = deduped.iter().any(|existing| {
            let name_sim = strsim::sorensen_dice(
                &existing.name.to_lowercase(),
                &candidate.name.to_lowercase(),
            );
            let address_sim = if existing.address.is_empty() || candidate.address.is_empty() {
                0.0
            } else {
                strsim::sorensen_dice(
                    &existing.address.to_lowercase(),
                    &candidate.address.to_lowercase(),
                )
            };
            name_sim >= NAME_THRESHOLD
                || (name_sim > COMBINED_THRESHOLD && address_sim > COMBINED_THRESHOLD)
        });
        if !is_duplicate {
            deduped.push(candidate);
        }
    }
    deduped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(name: &str, address: &str, source: &str) -> PlaceResult {
        PlaceResult {
            name: name.to_string(),
            address: address.to_string(),
            place_id: None,
            source: source.to_string(),
        }
    }

    #[test]
    fn near_identical_names_collapse_keeping_the_first_source() {
        let deduped = deduplicate_restaurants(vec![
            place("The French Laundry", "6640 Washington St", "Michelin"),
            place("French Laundry", "6640 Washington Street", "Eater"),
            place("Single Thread", "131 North St", "Michelin"),
        ]);

        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].source, "Michelin");
        assert_eq!(deduped[1].name, "Single Thread");
    }

    #[test]
    fn weak_name_match_needs_an_address_match_too() {
        // Similar-ish names, different addresses: both survive.
        let deduped = deduplicate_restaurants(vec![
            place("Luigi's Pizza", "1 First Ave", "GooglePlaces"),
            place("Luigi's Pizzeria", "900 Ninth Ave", "Eater"),
        ]);
        assert_eq!(deduped.len(), 2);
    }

    #[test]
    fn exact_duplicates_collapse_even_without_addresses() {
        let deduped = deduplicate_restaurants(vec![
            place("Noma", "", "Michelin"),
            place("Noma", "", "Eater"),
        ]);
        assert_eq!(deduped.len(), 1);
    }
}
