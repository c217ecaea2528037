//! Place-selection events from the host's search widgets.

use crate::event::PlaceSelectedEvent;
use crate::field::{ActivityField, DayField, FieldAddress, FieldTarget};
use crate::host::RenderHost;
use crate::store::{EngineError, TripStore};
use crate::transform;

/// Apply one place selection as a partial update. Lodging-name
/// selections fan out to lodging name/address/phone (room type is
/// untouched); location fields take the place name, a day's location
/// preferring the formatted address. Each written input is marked so
/// the trailing blur for the same value does not produce a second
/// update. A selection for an input with no bound widget is ignored
/// with a warning — the widget script may simply not have loaded.
pub async fn on_place_selected<H: RenderHost>(
    store: &mut TripStore<H>,
    event: PlaceSelectedEvent,
) -> Result<(), EngineError> {
    if !store.bindings().is_place_input(&event.address) {
        tracing::warn!(
            address = %event.address,
            "place selected for an input without a bound widget; ignoring"
        );
        return Ok(());
    }

    let PlaceSelectedEvent { address, place } = event;
    let day_index = address.day_index;

    match address.target {
        FieldTarget::Day(DayField::LodgingName) => {
            store.suppress(
                FieldAddress::day(day_index, DayField::LodgingName),
                place.name.clone(),
            );
            store.suppress(
                FieldAddress::day(day_index, DayField::LodgingAddress),
                place.formatted_address.clone(),
            );
            store.suppress(
                FieldAddress::day(day_index, DayField::LodgingPhone),
                place.phone.clone(),
            );
            store
                .update(|doc| {
                    let doc = transform::set_day_field(
                        doc,
                        day_index,
                        DayField::LodgingName,
                        &place.name,
                    );
                    let doc = transform::set_day_field(
                        &doc,
                        day_index,
                        DayField::LodgingAddress,
                        &place.formatted_address,
                    );
                    transform::set_day_field(&doc, day_index, DayField::LodgingPhone, &place.phone)
                })
                .await
        }
        FieldTarget::Day(DayField::Location) => {
            let value = if place.formatted_address.is_empty() {
                place.name
            } else {
                place.formatted_address
            };
            store.suppress(address, value.clone());
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
        FieldTarget::Activity {
            index,
            field: ActivityField::Location,
        } => {
            store.suppress(address, place.name.clone());
            store
                .update(|doc| {
                    transform::set_activity_field(
                        doc,
                        day_index,
                        index,
                        ActivityField::Location,
                        &place.name,
                    )
                })
                .await
        }
        _ => {
            tracing::warn!(address = %address, "place selection on a non-place field; ignoring");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinator::field_edit;
    use crate::event::{EditEvent, SelectedPlace};
    use crate::host::BufferHost;
    use crate::model::TripDocument;
    use crate::service::ServiceClient;

    async fn store_with_day() -> TripStore {
        let mut store = TripStore::new(
            ServiceClient::new("http://127.0.0.1:9").unwrap(),
            BufferHost::new(),
        );
        store.set(TripDocument::new("t", "2025-06-01"));
        store.add_day().await.unwrap();
        store
    }

    fn hotel() -> SelectedPlace {
        SelectedPlace {
            name: "Hotel du Nord".into(),
            formatted_address: "102 Quai de Jemmapes, Paris".into(),
            phone: "+33 1 40 40 78 78".into(),
        }
    }

    #[tokio::test]
    async fn lodging_selection_fans_out_and_preserves_room_type() {
        let mut store = store_with_day().await;
        field_edit::on_edit(
            &mut store,
            EditEvent {
                address: FieldAddress::day(0, DayField::LodgingRoomType),
                value: "Double".into(),
            },
        )
        .await
        .unwrap();

        on_place_selected(
            &mut store,
            PlaceSelectedEvent {
                address: FieldAddress::day(0, DayField::LodgingName),
                place: hotel(),
            },
        )
        .await
        .unwrap();

        let lodging = &store.get().unwrap().days[0].lodging;
        assert_eq!(lodging.name, "Hotel du Nord");
        assert_eq!(lodging.address, "102 Quai de Jemmapes, Paris");
        assert_eq!(lodging.phone, "+33 1 40 40 78 78");
        assert_eq!(lodging.room_type, "Double");
    }

    #[tokio::test]
    async fn trailing_blurs_after_a_selection_are_swallowed() {
        let mut store = store_with_day().await;
        on_place_selected(
            &mut store,
            PlaceSelectedEvent {
                address: FieldAddress::day(0, DayField::LodgingName),
                place: hotel(),
            },
        )
        .await
        .unwrap();
        let mounts_after_selection = store.host().mounts();

        // The host re-fires the blur-equivalents for what the widget
        // just wrote; none of them may produce another update.
        for (field, value) in [
            (DayField::LodgingName, "Hotel du Nord"),
            (DayField::LodgingAddress, "102 Quai de Jemmapes, Paris"),
            (DayField::LodgingPhone, "+33 1 40 40 78 78"),
        ] {
            field_edit::on_edit(
                &mut store,
                EditEvent {
                    address: FieldAddress::day(0, field),
                    value: value.into(),
                },
            )
            .await
            .unwrap();
        }
        assert_eq!(store.host().mounts(), mounts_after_selection);
    }

    #[tokio::test]
    async fn day_location_selection_prefers_formatted_address_and_looks_up() {
        let mut store = store_with_day().await;
        on_place_selected(
            &mut store,
            PlaceSelectedEvent {
                address: FieldAddress::day(0, DayField::Location),
                place: SelectedPlace {
                    name: "Lyon".into(),
                    formatted_address: "Lyon, France".into(),
                    phone: String::new(),
                },
            },
        )
        .await
        .unwrap();

        let day = &store.get().unwrap().days[0];
        assert_eq!(day.location, "Lyon, France");
        assert!(day.suggestions.is_some());
    }

    #[tokio::test]
    async fn selection_for_an_unbound_input_is_a_no_op() {
        let mut store = store_with_day().await;
        // Day 7 was never rendered, so no widget is bound there.
        on_place_selected(
            &mut store,
            PlaceSelectedEvent {
                address: FieldAddress::day(7, DayField::Location),
                place: hotel(),
            },
        )
        .await
        .unwrap();

        assert_eq!(store.get().unwrap().days[0].location, "");
    }
}
