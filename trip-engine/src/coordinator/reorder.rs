//! Drag-and-drop completion on a day's activity list.

use crate::event::DropEvent;
use crate::host::RenderHost;
use crate::store::{EngineError, TripStore};
use crate::transform;

/// Apply a completed drop: the day's activities are rebuilt in the
/// reported DOM order, where each entry is the `data-activity-index`
/// the element was rendered with. The order must be a permutation of
/// the bound list — anything else (including an element dragged in from
/// another day's list) is ignored with a warning; reordering is only
/// defined within a single day.
pub async fn on_drop<H: RenderHost>(
    store: &mut TripStore<H>,
    event: DropEvent,
) -> Result<(), EngineError> {
    let Some(bound) = store.bindings().activity_order(event.day_index) else {
        tracing::warn!(day_index = event.day_index, "drop on an unbound day; ignoring");
        return Ok(());
    };

    if !transform::is_permutation(&event.dom_order, bound.len()) {
        tracing::warn!(
            day_index = event.day_index,
            order = ?event.dom_order,
            "drop order is not a permutation of this day's activities; ignoring"
        );
        return Ok(());
    }

    let DropEvent {
        day_index,
        dom_order,
    } = event;
    store
        .update(|doc| transform::reorder_activities(doc, day_index, &dom_order))
        .await
}
