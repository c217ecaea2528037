//! Pure document transforms.
//!
//! Every mutation of a trip goes through one of these: each takes the
//! current document and produces a new one, leaving the input untouched,
//! so a render triggered mid-update never observes a half-edited
//! structure. Out-of-range indices leave the document unchanged.

use crate::field::{ActivityField, DayField};
use crate::model::{Activity, Day, Suggestions, TripDocument};

/// Append a fresh day (08:00 wake-up, empty lodging, no activities).
pub fn add_day(doc: &TripDocument) -> TripDocument {
    let mut next = doc.clone();
    next.days.push(Day::default());
    next
}

/// Append an empty activity to the given day.
pub fn add_activity(doc: &TripDocument, day_index: usize) -> TripDocument {
    let mut next = doc.clone();
    if let Some(day) = next.days.get_mut(day_index) {
        day.activities.push(Activity::default());
    } else {
        tracing::warn!(day_index, "add_activity: no such day");
    }
    next
}

pub fn delete_day(doc: &TripDocument, day_index: usize) -> TripDocument {
    let mut next = doc.clone();
    if day_index < next.days.len() {
        next.days.remove(day_index);
    } else {
        tracing::warn!(day_index, "delete_day: no such day");
    }
    next
}

pub fn delete_activity(
    doc: &TripDocument,
    day_index: usize,
    activity_index: usize,
) -> TripDocument {
    let mut next = doc.clone();
    match next.days.get_mut(day_index) {
        Some(day) if activity_index < day.activities.len() => {
            day.activities.remove(activity_index);
        }
        _ => tracing::warn!(day_index, activity_index, "delete_activity: no such slot"),
    }
    next
}

/// Rebuild a day's activities in the order `new_order`, where each entry
/// is an index into the *previous* activities array. Indexing the old
/// array (rather than re-reading field values) means unsaved in-memory
/// edits on every activity survive the reorder.
///
/// `new_order` must be a permutation of `0..len`; anything else leaves
/// the document unchanged.
pub fn reorder_activities(
    doc: &TripDocument,
    day_index: usize,
    new_order: &[usize],
) -> TripDocument {
    let mut next = doc.clone();
    let Some(day) = next.days.get_mut(day_index) else {
        tracing::warn!(day_index, "reorder_activities: no such day");
        return next;
    };

    if !is_permutation(new_order, day.activities.len()) {
        tracing::warn!(day_index, ?new_order, "reorder_activities: not a permutation");
        return next;
    }

    day.activities = new_order
        .iter()
        .map(|&original| day.activities[original].clone())
        .collect();
    next
}

pub fn is_permutation(order: &[usize], len: usize) -> bool {
    if order.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for &index in order {
        if index >= len || seen[index] {
            return false;
        }
        seen[index] = true;
    }
    true
}

/// Write a value into a day-level field.
pub fn set_day_field(
    doc: &TripDocument,
    day_index: usize,
    field: DayField,
    value: &str,
) -> TripDocument {
    let mut next = doc.clone();
    let Some(day) = next.days.get_mut(day_index) else {
        tracing::warn!(day_index, "set_day_field: no such day");
        return next;
    };

    let value = value.to_string();
    match field {
        DayField::WakeUpTime => day.wake_up_time = value,
        DayField::Location => day.location = value,
        DayField::LodgingName => day.lodging.name = value,
        DayField::LodgingAddress => day.lodging.address = value,
        DayField::LodgingPhone => day.lodging.phone = value,
        DayField::LodgingRoomType => day.lodging.room_type = value,
    }
    next
}

/// Write a value into an activity-level field. `length` coerces through
/// the same lenient parse the model applies on load: invalid input is 0.
pub fn set_activity_field(
    doc: &TripDocument,
    day_index: usize,
    activity_index: usize,
    field: ActivityField,
    value: &str,
) -> TripDocument {
    let mut next = doc.clone();
    let Some(activity) = next
        .days
        .get_mut(day_index)
        .and_then(|day| day.activities.get_mut(activity_index))
    else {
        tracing::warn!(day_index, activity_index, "set_activity_field: no such slot");
        return next;
    };

    match field {
        ActivityField::Name => activity.name = value.to_string(),
        ActivityField::Length => activity.length = parse_minutes(value),
        ActivityField::Location => activity.location = value.to_string(),
        ActivityField::Notes => activity.notes = value.to_string(),
    }
    next
}

fn parse_minutes(value: &str) -> u32 {
    let value = value.trim();
    value
        .parse::<i64>()
        .or_else(|_| value.parse::<f64>().map(|f| f as i64))
        .map(|n| n.max(0) as u32)
        .unwrap_or(0)
}

/// Attach lookup results to a day. Display-only state: it rides along in
/// memory and is stripped whenever the document is persisted.
pub fn attach_suggestions(
    doc: &TripDocument,
    day_index: usize,
    suggestions: Suggestions,
) -> TripDocument {
    let mut next = doc.clone();
    if let Some(day) = next.days.get_mut(day_index) {
        day.suggestions = Some(suggestions);
    } else {
        tracing::warn!(day_index, "attach_suggestions: no such day");
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Lodging;

    fn doc_with_activities(names: &[&str]) -> TripDocument {
        let mut doc = TripDocument::new("Test Trip", "2025-06-01");
        doc.days.push(Day {
            activities: names
                .iter()
                .enumerate()
                .map(|(i, name)| Activity {
                    name: name.to_string(),
                    length: (i as u32 + 1) * 10,
                    location: format!("loc-{i}"),
                    notes: format!("notes-{i}"),
                })
                .collect(),
            ..Day::default()
        });
        doc
    }

    #[test]
    fn add_day_appends_defaults_and_keeps_input_untouched() {
        let doc = TripDocument::new("Paris Trip", "2025-06-01");
        let next = add_day(&doc);

        assert!(doc.days.is_empty());
        assert_eq!(next.days.len(), 1);
        assert_eq!(next.days[0].wake_up_time, "08:00");
        assert_eq!(next.days[0].lodging, Lodging::default());
        assert!(next.days[0].activities.is_empty());
    }

    #[test]
    fn reorder_indexes_the_previous_array() {
        let doc = doc_with_activities(&["a", "b", "c"]);
        let next = reorder_activities(&doc, 0, &[2, 0, 1]);

        let names: Vec<_> = next.days[0]
            .activities
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, ["c", "a", "b"]);
        // Identity travels with the activity, not the slot.
        assert_eq!(next.days[0].activities[0].notes, "notes-2");
        assert_eq!(next.days[0].activities[0].length, 30);
    }

    #[test]
    fn reorder_rejects_non_permutations() {
        let doc = doc_with_activities(&["a", "b", "c"]);
        assert_eq!(reorder_activities(&doc, 0, &[0, 1]), doc);
        assert_eq!(reorder_activities(&doc, 0, &[0, 1, 1]), doc);
        assert_eq!(reorder_activities(&doc, 0, &[0, 1, 3]), doc);
        assert_eq!(reorder_activities(&doc, 5, &[0, 1, 2]), doc);
    }

    #[test]
    fn delete_activity_preserves_the_survivors() {
        let doc = doc_with_activities(&["a", "b", "c"]);
        let next = delete_activity(&doc, 0, 1);

        let day = &next.days[0];
        assert_eq!(day.activities.len(), 2);
        assert_eq!(day.activities[0], doc.days[0].activities[0]);
        assert_eq!(day.activities[1], doc.days[0].activities[2]);
    }

    #[test]
    fn out_of_range_deletes_are_no_ops() {
        let doc = doc_with_activities(&["a"]);
        assert_eq!(delete_activity(&doc, 0, 7), doc);
        assert_eq!(delete_day(&doc, 3), doc);
    }

    #[test]
    fn nested_lodging_fields_resolve() {
        let doc = doc_with_activities(&[]);
        let next = set_day_field(&doc, 0, DayField::LodgingName, "Hotel du Nord");
        assert_eq!(next.days[0].lodging.name, "Hotel du Nord");
        assert_eq!(next.days[0].lodging.address, "");

        let next = set_day_field(&next, 0, DayField::LodgingRoomType, "Double");
        assert_eq!(next.days[0].lodging.room_type, "Double");
        assert_eq!(next.days[0].lodging.name, "Hotel du Nord");
    }

    #[test]
    fn activity_length_coerces() {
        let doc = doc_with_activities(&["a"]);
        let next = set_activity_field(&doc, 0, 0, ActivityField::Length, "90");
        assert_eq!(next.days[0].activities[0].length, 90);

        let next = set_activity_field(&next, 0, 0, ActivityField::Length, "soon");
        assert_eq!(next.days[0].activities[0].length, 0);

        let next = set_activity_field(&next, 0, 0, ActivityField::Length, "-5");
        assert_eq!(next.days[0].activities[0].length, 0);
    }
}
