//! Pure markup generation for the trip view.
//!
//! Deterministic: one document always renders to the same string. Every
//! editable field carries its addressing metadata (`data-day-index`,
//! `data-activity-index`, `data-field`) so edit, autocomplete and drop
//! events can be routed back into the document; element ids are derived
//! from those indices, never from counters.

use std::fmt::Write;

use crate::field::{ActivityField, DayField};
use crate::model::{Activity, Day, PlaceRef, Suggestions, TripDocument};
use crate::schedule;

/// Class carried by inputs that a place-search widget should attach to.
pub const PLACE_INPUT_CLASS: &str = "place-autocomplete";

struct DayFieldSpec {
    label: &'static str,
    input_type: &'static str,
    field: DayField,
    class: &'static str,
    placeholder: &'static str,
}

const DAY_FIELDS: &[DayFieldSpec] = &[
    DayFieldSpec {
        label: "Start Time",
        input_type: "text",
        field: DayField::WakeUpTime,
        class: "wake-up-time",
        placeholder: "08:00",
    },
    DayFieldSpec {
        label: "Location",
        input_type: "text",
        field: DayField::Location,
        class: PLACE_INPUT_CLASS,
        placeholder: "Enter location",
    },
    DayFieldSpec {
        label: "Hotel Name",
        input_type: "text",
        field: DayField::LodgingName,
        class: PLACE_INPUT_CLASS,
        placeholder: "Hotel name",
    },
    DayFieldSpec {
        label: "Address",
        input_type: "text",
        field: DayField::LodgingAddress,
        class: "",
        placeholder: "Hotel address",
    },
    DayFieldSpec {
        label: "Phone",
        input_type: "text",
        field: DayField::LodgingPhone,
        class: "",
        placeholder: "Hotel phone",
    },
    DayFieldSpec {
        label: "Room Type",
        input_type: "text",
        field: DayField::LodgingRoomType,
        class: "",
        placeholder: "Room type",
    },
];

struct ActivityFieldSpec {
    label: &'static str,
    input_type: &'static str,
    field: ActivityField,
    class: &'static str,
}

const ACTIVITY_FIELDS: &[ActivityFieldSpec] = &[
    ActivityFieldSpec {
        label: "Name",
        input_type: "text",
        field: ActivityField::Name,
        class: "",
    },
    ActivityFieldSpec {
        label: "Length (min)",
        input_type: "number",
        field: ActivityField::Length,
        class: "activity-length",
    },
    ActivityFieldSpec {
        label: "Location",
        input_type: "text",
        field: ActivityField::Location,
        class: PLACE_INPUT_CLASS,
    },
    ActivityFieldSpec {
        label: "Notes",
        input_type: "textarea",
        field: ActivityField::Notes,
        class: "",
    },
];

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn form_row(label: &str, id: &str, input: &str) -> String {
    format!(
        r#"<div class="row mb-2">
  <label class="col-2 col-form-label" for="{id}">{label}</label>
  <div class="col-10">{input}</div>
</div>"#
    )
}

fn input_field(
    input_type: &str,
    id: &str,
    class: &str,
    value: &str,
    placeholder: &str,
    addressing: &str,
) -> String {
    let value = escape_html(value);
    if input_type == "textarea" {
        format!(
            r#"<textarea id="{id}" class="form-control {class}" rows="2" {addressing}>{value}</textarea>"#
        )
    } else {
        format!(
            r#"<input type="{input_type}" id="{id}" class="form-control {class}" value="{value}" placeholder="{placeholder}" {addressing}>"#
        )
    }
}

fn day_field_row(day: &Day, day_index: usize, spec: &DayFieldSpec) -> String {
    let value = match spec.field {
        DayField::WakeUpTime => &day.wake_up_time,
        DayField::Location => &day.location,
        DayField::LodgingName => &day.lodging.name,
        DayField::LodgingAddress => &day.lodging.address,
        DayField::LodgingPhone => &day.lodging.phone,
        DayField::LodgingRoomType => &day.lodging.room_type,
    };
    let id = format!(
        "field-{}-day-{}",
        spec.field.as_str().replace('.', "-"),
        day_index
    );
    let addressing = format!(
        r#"data-day-index="{}" data-field="{}""#,
        day_index,
        spec.field.as_str()
    );
    form_row(
        spec.label,
        &id,
        &input_field(
            spec.input_type,
            &id,
            spec.class,
            value,
            spec.placeholder,
            &addressing,
        ),
    )
}

/// One activity card: derived start time in the header, the editable
/// fields below, each addressed by day index, activity index and field.
pub fn render_activity_card(
    activity: &Activity,
    day_index: usize,
    activity_index: usize,
    start_time: &str,
) -> String {
    let mut fields = String::new();
    for spec in ACTIVITY_FIELDS {
        let value = match spec.field {
            ActivityField::Name => activity.name.clone(),
            ActivityField::Length => activity.length.to_string(),
            ActivityField::Location => activity.location.clone(),
            ActivityField::Notes => activity.notes.clone(),
        };
        let id = format!(
            "field-{}-activity-{}-day-{}",
            spec.field.as_str(),
            activity_index,
            day_index
        );
        let addressing = format!(
            r#"data-day-index="{}" data-activity-index="{}" data-field="{}""#,
            day_index,
            activity_index,
            spec.field.as_str()
        );
        fields.push_str(&form_row(
            spec.label,
            &id,
            &input_field(spec.input_type, &id, spec.class, &value, "", &addressing),
        ));
    }

    format!(
        r#"<div class="activity p-2 border mb-3 draggable" data-day-index="{day_index}" data-activity-index="{activity_index}">
  <h4>{start_time} {name}</h4>
  {fields}
  <button class="btn btn-danger delete-activity-button mt-2" data-day-index="{day_index}" data-activity-index="{activity_index}">Delete Activity</button>
</div>"#,
        name = escape_html(&activity.name),
    )
}

fn render_suggestions(suggestions: &Suggestions) -> String {
    fn place_list(title: &str, places: &[PlaceRef]) -> String {
        if places.is_empty() {
            return String::new();
        }
        let items: String = places
            .iter()
            .map(|place| {
                format!(
                    "<li>{} - {}</li>",
                    escape_html(&place.name),
                    escape_html(&place.address)
                )
            })
            .collect();
        format!("<h5>{title}</h5><ul>{items}</ul>")
    }

    let mut out = String::new();
    out.push_str(&place_list("Restaurant Suggestions", &suggestions.restaurants));
    out.push_str(&place_list("Things to See", &suggestions.sights));
    if !suggestions.history.is_empty() {
        let _ = write!(
            out,
            "<h5>Location History</h5><p>{}</p>",
            escape_html(&suggestions.history)
        );
    }
    if out.is_empty() {
        return String::new();
    }
    format!(r#"<div class="suggestions">{out}</div>"#)
}

/// One day card: header date, day-level fields, the drop-enabled
/// activity list, and any attached suggestions.
pub fn render_day(day: &Day, day_index: usize, trip_name: &str, display_date: &str) -> String {
    let header = if day_index == 0 {
        format!(
            r#"<div class="trip-header">{}</div>"#,
            escape_html(if trip_name.is_empty() { "Trip" } else { trip_name })
        )
    } else {
        String::new()
    };

    let fields: String = DAY_FIELDS
        .iter()
        .map(|spec| day_field_row(day, day_index, spec))
        .collect();

    let activities: String = day
        .activities
        .iter()
        .enumerate()
        .map(|(activity_index, activity)| {
            render_activity_card(
                activity,
                day_index,
                activity_index,
                &schedule::compute_start_time(day, activity_index),
            )
        })
        .collect();

    let suggestions = day
        .suggestions
        .as_ref()
        .map(render_suggestions)
        .unwrap_or_default();

    format!(
        r#"<div class="day-entry card mb-3 p-3" data-day-index="{day_index}">
  {header}
  <h3>{display_date}</h3>
  {fields}
  {suggestions}
  <div id="activity-list-{day_index}" class="activity-list" data-day-index="{day_index}">
    {activities}
  </div>
  <button class="btn btn-primary mt-3 add-activity-button" data-day-index="{day_index}">Add Activity</button>
  <button class="btn btn-danger delete-day-button" data-day-index="{day_index}">Delete Day</button>
</div>"#,
        display_date = escape_html(display_date),
    )
}

/// The whole trip as markup. The maps API key is a parameter, not hidden
/// state: it lands on the container for the host's place-search widget.
pub fn render_trip_html(doc: &TripDocument, api_key: &str) -> String {
    let days: String = doc
        .days
        .iter()
        .enumerate()
        .map(|(day_index, day)| {
            render_day(
                day,
                day_index,
                &doc.trip_name,
                &schedule::display_date(&doc.start_date, day_index),
            )
        })
        .collect();

    format!(
        r#"<div id="days-container" data-maps-api-key="{key}">{days}</div>"#,
        key = escape_html(api_key),
    )
}
