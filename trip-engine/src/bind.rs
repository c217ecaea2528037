//! Bindings derived from the rendered document.
//!
//! Replacing the markup destroys whatever listeners the host had
//! attached, so after every render the store rebuilds this index of what
//! is on screen: per-day activity element order (what a drop event's
//! addressing metadata is validated against) and the set of inputs a
//! place-search widget binds to.

use std::collections::HashSet;

use crate::field::{ActivityField, DayField, FieldAddress};
use crate::model::TripDocument;

#[derive(Debug, Clone, Default)]
pub struct Bindings {
    /// For each day, the activity indices in rendered order. Freshly
    /// rendered markup always shows `0..len`; a drop event reports the
    /// same identifiers in their new DOM order.
    activity_lists: Vec<Vec<usize>>,
    place_inputs: HashSet<FieldAddress>,
}

impl Bindings {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_document(doc: &TripDocument) -> Self {
        let activity_lists = doc
            .days
            .iter()
            .map(|day| (0..day.activities.len()).collect())
            .collect();

        let mut place_inputs = HashSet::new();
        for (day_index, day) in doc.days.iter().enumerate() {
            place_inputs.insert(FieldAddress::day(day_index, DayField::Location));
            place_inputs.insert(FieldAddress::day(day_index, DayField::LodgingName));
            for activity_index in 0..day.activities.len() {
                place_inputs.insert(FieldAddress::activity(
                    day_index,
                    activity_index,
                    ActivityField::Location,
                ));
            }
        }

        Self {
            activity_lists,
            place_inputs,
        }
    }

    /// The bound element order for a day's activity list, if that day
    /// is on screen.
    pub fn activity_order(&self, day_index: usize) -> Option<&[usize]> {
        self.activity_lists.get(day_index).map(Vec::as_slice)
    }

    /// Whether a place-search widget was attached to this input.
    pub fn is_place_input(&self, address: &FieldAddress) -> bool {
        self.place_inputs.contains(address)
    }
}
