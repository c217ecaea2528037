//! Field-level edit completion (the blur-equivalent event).

use crate::event::EditEvent;
use crate::field::{DayField, FieldTarget};
use crate::host::RenderHost;
use crate::store::{EngineError, TripStore};
use crate::transform;

/// Route one completed edit into the document. Exactly one update per
/// edit; an edit whose value was just written by an autocomplete
/// selection is swallowed instead of double-processed. Editing a day's
/// location also resolves fresh lookup results and attaches them as
/// that day's suggestions within the same update.
pub async fn on_edit<H: RenderHost>(
    store: &mut TripStore<H>,
    event: EditEvent,
) -> Result<(), EngineError> {
    if let Some(just_written) = store.take_suppression(&event.address) {
        if just_written == event.value {
            tracing::debug!(
                address = %event.address,
                "edit repeats an autocomplete selection; skipping"
            );
            return Ok(());
        }
    }

    let EditEvent { address, value } = event;
    let day_index = address.day_index;

    match address.target {
        FieldTarget::Activity { index, field } => {
            store
                .update(|doc| transform::set_activity_field(doc, day_index, index, field, &value))
                .await
        }
        FieldTarget::Day(DayField::Location) => {
            let lookup = store.lookup_client();
            store
                .update_with(|doc| async move {
                    let suggestions = lookup.fetch(&value).await;
                    let doc =
                        transform::set_day_field(&doc, day_index, DayField::Location, &value);
                    transform::attach_suggestions(&doc, day_index, suggestions)
                })
                .await
        }
        FieldTarget::Day(field) => {
            store
                .update(|doc| transform::set_day_field(doc, day_index, field, &value))
                .await
        }
    }
}
