//! Typed UI events delivered by the host.
//!
//! The host (a browser shell, a test harness) owns the actual widgets;
//! the engine only ever sees these values, built from the addressing
//! metadata the renderer stamped onto each element.

use crate::field::FieldAddress;

/// A field-level edit completed (the blur-equivalent event).
#[derive(Debug, Clone, PartialEq)]
pub struct EditEvent {
    pub address: FieldAddress,
    pub value: String,
}

/// The place a search widget resolved for an input. Fields the widget
/// could not provide stay empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectedPlace {
    pub name: String,
    pub formatted_address: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceSelectedEvent {
    pub address: FieldAddress,
    pub place: SelectedPlace,
}

/// A drag-and-drop completed on one day's activity list. `dom_order` is
/// the container's child order after the drop, read off each element's
/// `data-activity-index` — the indices the elements were rendered with,
/// not their new positions.
#[derive(Debug, Clone, PartialEq)]
pub struct DropEvent {
    pub day_index: usize,
    pub dom_order: Vec<usize>,
}
