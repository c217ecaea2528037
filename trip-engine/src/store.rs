//! The single mutable holder of the current trip document.
//!
//! Every mutation flows through [`TripStore::update`]: the transform
//! produces a new document, the document is swapped in, the view is
//! re-rendered and rebound, and only then is the result persisted. The
//! store is the only owner of the document; coordinators submit
//! transforms, they never mutate it directly.

use std::collections::HashMap;
use std::future::Future;

use thiserror::Error;

use crate::bind::Bindings;
use crate::field::FieldAddress;
use crate::host::{BufferHost, RenderHost};
use crate::lookup::LocationLookupClient;
use crate::model::TripDocument;
use crate::render;
use crate::service::{ServiceClient, ServiceError};
use crate::transform;

#[derive(Debug, Error)]
pub enum EngineError {
    /// An update was requested before any trip was loaded. The Rust
    /// analog of calling `update` with nothing to transform: a
    /// programming error, reported immediately, with no side effects.
    #[error("no trip document is loaded")]
    NoDocument,
    #[error(transparent)]
    Service(#[from] ServiceError),
}

pub struct TripStore<H: RenderHost = BufferHost> {
    current: Option<TripDocument>,
    api_key: String,
    service: ServiceClient,
    lookup: LocationLookupClient,
    host: H,
    bindings: Bindings,
    /// Inputs just written by an autocomplete selection, with the value
    /// that was written: the trailing blur for the same value is
    /// swallowed instead of producing a second update (and a second
    /// save). An edit with a different value clears the mark and goes
    /// through.
    suppressed: HashMap<FieldAddress, String>,
}

impl<H: RenderHost> TripStore<H> {
    pub fn new(service: ServiceClient, host: H) -> Self {
        let lookup = LocationLookupClient::new(service.clone());
        Self {
            current: None,
            api_key: String::new(),
            service,
            lookup,
            host,
            bindings: Bindings::empty(),
            suppressed: HashMap::new(),
        }
    }

    /// The place-search credential stamped onto rendered markup.
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = api_key.into();
    }

    /// Read-only view of the current document.
    pub fn get(&self) -> Option<&TripDocument> {
        self.current.as_ref()
    }

    /// Replace state without side effects. Initial load only; editing
    /// goes through [`Self::update`].
    pub fn set(&mut self, doc: TripDocument) {
        self.current = Some(doc);
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// A handle on the lookup client, for transforms that resolve
    /// suggestions while the store is borrowed.
    pub fn lookup_client(&self) -> LocationLookupClient {
        self.lookup.clone()
    }

    /// Apply a pure transform: swap in its result, redraw, persist.
    ///
    /// Ordering is the contract: the document is replaced before the
    /// redraw starts, and the redraw happens before persistence begins,
    /// so what is saved is always exactly what this transform produced.
    /// Persistence failures are logged and absorbed — in-memory state
    /// stays the most recent truth and editing continues.
    pub async fn update<F>(&mut self, transform: F) -> Result<(), EngineError>
    where
        F: FnOnce(&TripDocument) -> TripDocument,
    {
        let current = self.current.as_ref().ok_or(EngineError::NoDocument)?;
        let next = transform(current);
        self.current = Some(next);
        self.render();
        self.persist().await;
        Ok(())
    }

    /// Like [`Self::update`] for transforms that must await (a location
    /// lookup resolving before the new document can be built). The
    /// transform receives the document current at the moment it runs.
    pub async fn update_with<F, Fut>(&mut self, transform: F) -> Result<(), EngineError>
    where
        F: FnOnce(TripDocument) -> Fut,
        Fut: Future<Output = TripDocument>,
    {
        let current = self.current.clone().ok_or(EngineError::NoDocument)?;
        let next = transform(current).await;
        self.current = Some(next);
        self.render();
        self.persist().await;
        Ok(())
    }

    /// Redraw the current document and rebuild the bindings the
    /// coordinators validate events against. Replacing the markup
    /// destroyed the host's listeners, so this runs after every swap.
    pub fn render(&mut self) {
        let Some(doc) = &self.current else {
            self.bindings = Bindings::empty();
            return;
        };
        let markup = render::render_trip_html(doc, &self.api_key);
        if !self.host.mount(&markup) {
            tracing::warn!("trip container is not mounted; skipping markup injection");
        }
        self.bindings = Bindings::from_document(doc);
    }

    async fn persist(&self) {
        let Some(doc) = &self.current else {
            return;
        };
        if let Err(err) = self.service.save_trip(doc).await {
            tracing::error!(%err, "failed to persist trip; in-memory state kept as truth");
        }
    }

    /// Load a saved trip, replacing whatever was being edited.
    pub async fn load_trip(&mut self, trip_name: &str) -> Result<(), EngineError> {
        let doc = self.service.trip(trip_name).await?;
        self.set(doc);
        self.suppressed.clear();
        self.render();
        Ok(())
    }

    /// Start an empty trip and persist it right away so it shows up in
    /// the trip list.
    pub async fn new_trip(&mut self, trip_name: &str, start_date: &str) {
        self.set(TripDocument::new(trip_name, start_date));
        self.suppressed.clear();
        self.render();
        self.persist().await;
    }

    pub async fn add_day(&mut self) -> Result<(), EngineError> {
        self.update(transform::add_day).await
    }

    pub async fn add_activity(&mut self, day_index: usize) -> Result<(), EngineError> {
        self.update(|doc| transform::add_activity(doc, day_index)).await
    }

    pub async fn delete_day(&mut self, day_index: usize) -> Result<(), EngineError> {
        self.update(|doc| transform::delete_day(doc, day_index)).await
    }

    pub async fn delete_activity(
        &mut self,
        day_index: usize,
        activity_index: usize,
    ) -> Result<(), EngineError> {
        self.update(|doc| transform::delete_activity(doc, day_index, activity_index))
            .await
    }

    pub(crate) fn suppress(&mut self, address: FieldAddress, value: impl Into<String>) {
        self.suppressed.insert(address, value.into());
    }

    /// Remove and return any suppression mark for this input. Marks are
    /// one-shot: whatever the outcome, the next edit starts clean.
    pub(crate) fn take_suppression(&mut self, address: &FieldAddress) -> Option<String> {
        self.suppressed.remove(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::DetachedHost;

    fn store() -> TripStore {
        // Persistence targets a port nothing listens on: saves fail,
        // are logged, and must not disturb the update contract.
        TripStore::new(
            ServiceClient::new("http://127.0.0.1:9").unwrap(),
            BufferHost::new(),
        )
    }

    #[tokio::test]
    async fn update_requires_a_loaded_document() {
        let mut store = store();
        let result = store.update(|doc| doc.clone()).await;
        assert!(matches!(result, Err(EngineError::NoDocument)));
        assert_eq!(store.host().mounts(), 0);
    }

    #[tokio::test]
    async fn update_swaps_renders_and_keeps_state_on_save_failure() {
        let mut store = store();
        store.set(TripDocument::new("Paris Trip", "2025-06-01"));

        store.update(transform::add_day).await.unwrap();

        let doc = store.get().unwrap();
        assert_eq!(doc.days.len(), 1);
        assert_eq!(store.host().mounts(), 1);
        assert!(store.host().markup().contains("Sunday, June 1st, 2025"));
        assert!(store.bindings().activity_order(0).is_some());
    }

    #[tokio::test]
    async fn sequential_updates_observe_the_prior_result() {
        let mut store = store();
        store.set(TripDocument::new("Paris Trip", "2025-06-01"));

        store.update(transform::add_day).await.unwrap();
        store
            .update(|doc| {
                // The second transform sees the first one's document.
                assert_eq!(doc.days.len(), 1);
                transform::add_day(doc)
            })
            .await
            .unwrap();

        assert_eq!(store.get().unwrap().days.len(), 2);
    }

    #[tokio::test]
    async fn added_day_persists_with_the_documented_shape() {
        let mut store = store();
        store.set(TripDocument::new("Paris Trip", "2025-06-01"));
        store.add_day().await.unwrap();

        let payload = serde_json::to_value(store.get().unwrap()).unwrap();
        assert_eq!(
            payload,
            serde_json::json!({
                "tripName": "Paris Trip",
                "startDate": "2025-06-01",
                "trip": [{
                    "location": "",
                    "wakeUpTime": "08:00",
                    "lodging": { "name": "", "address": "", "phone": "", "roomType": "" },
                    "activities": []
                }]
            })
        );
    }

    #[tokio::test]
    async fn missing_mount_point_does_not_block_editing() {
        let mut store = TripStore::new(
            ServiceClient::new("http://127.0.0.1:9").unwrap(),
            DetachedHost,
        );
        store.set(TripDocument::new("t", "2025-06-01"));

        store.add_day().await.unwrap();
        assert_eq!(store.get().unwrap().days.len(), 1);
    }
}
