//! Aggregated location lookups with a session-lifetime memo.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::model::Suggestions;
use crate::service::ServiceClient;

/// One call per location: restaurants, sights and history fetched
/// concurrently, each degrading to its empty default on failure.
/// Results are memoized by the raw location string for the life of the
/// client — a repeat lookup never goes back to the network.
#[derive(Debug, Clone)]
pub struct LocationLookupClient {
    service: ServiceClient,
    cache: Arc<Mutex<HashMap<String, Suggestions>>>,
}

impl LocationLookupClient {
    pub fn new(service: ServiceClient) -> Self {
        Self {
            service,
            cache: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn fetch(&self, location: &str) -> Suggestions {
        if location.trim().is_empty() {
            return Suggestions::default();
        }

        if let Some(hit) = self.cache.lock().unwrap().get(location) {
            return hit.clone();
        }

        let (restaurants, sights, history) = tokio::join!(
            self.service.dining_suggestions(location),
            self.service.site_suggestions(location),
            self.service.location_history(location),
        );

        let suggestions = Suggestions {
            restaurants: restaurants.unwrap_or_else(|err| {
                tracing::warn!(location, %err, "dining lookup failed");
                Vec::new()
            }),
            sights: sights.unwrap_or_else(|err| {
                tracing::warn!(location, %err, "sights lookup failed");
                Vec::new()
            }),
            history: history.unwrap_or_else(|err| {
                tracing::warn!(location, %err, "history lookup failed");
                String::new()
            }),
        };

        self.cache
            .lock()
            .unwrap()
            .insert(location.to_string(), suggestions.clone());
        suggestions
    }

    #[cfg(test)]
    pub(crate) fn prime(&self, location: &str, suggestions: Suggestions) {
        self.cache
            .lock()
            .unwrap()
            .insert(location.to_string(), suggestions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PlaceRef;

    fn unreachable_client() -> LocationLookupClient {
        // Nothing listens here; any attempted call errors immediately
        // and would surface as empty results.
        LocationLookupClient::new(ServiceClient::new("http://127.0.0.1:9").unwrap())
    }

    #[tokio::test]
    async fn empty_location_short_circuits() {
        let lookup = unreachable_client();
        assert_eq!(lookup.fetch("").await, Suggestions::default());
        assert_eq!(lookup.fetch("   ").await, Suggestions::default());
    }

    #[tokio::test]
    async fn repeat_lookups_are_served_from_the_memo() {
        let lookup = unreachable_client();
        let cached = Suggestions {
            restaurants: vec![PlaceRef {
                name: "Chez Test".into(),
                ..PlaceRef::default()
            }],
            sights: Vec::new(),
            history: "Founded long ago.".into(),
        };
        lookup.prime("Lyon", cached.clone());

        // Hits the memo: if this went to the (unreachable) network it
        // would come back empty instead.
        assert_eq!(lookup.fetch("Lyon").await, cached);
    }

    #[tokio::test]
    async fn all_sources_degrade_on_failure() {
        let lookup = unreachable_client();
        assert_eq!(lookup.fetch("Atlantis").await, Suggestions::default());
    }
}
