use serde::{Deserialize, Deserializer, Serialize};

/// The whole in-memory trip: name, start date and the ordered days.
///
/// Serialized shape matches the trip service: the day array lives under
/// the `trip` key, field names are camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDocument {
    #[serde(default)]
    pub trip_name: String,
    /// Calendar date with `YYYY-MM-DD` semantics. Kept as a string:
    /// historical trip files contain malformed dates, and date math
    /// degrades instead of refusing to load them.
    #[serde(default)]
    pub start_date: String,
    #[serde(rename = "trip", default)]
    pub days: Vec<Day>,
}

impl TripDocument {
    /// A brand-new trip with no days yet.
    pub fn new(trip_name: impl Into<String>, start_date: impl Into<String>) -> Self {
        Self {
            trip_name: trip_name.into(),
            start_date: start_date.into(),
            days: Vec::new(),
        }
    }
}

/// One calendar day of the trip. Day `i` occurs `startDate + i` days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_wake_up_time")]
    pub wake_up_time: String,
    #[serde(default)]
    pub lodging: Lodging,
    #[serde(default)]
    pub activities: Vec<Activity>,
    /// Derived lookup results. A cache annex, never trip content: the
    /// persisted form of a Day excludes it, so it is skipped on
    /// serialization and comes back as `None` on load.
    #[serde(default, skip_serializing)]
    pub suggestions: Option<Suggestions>,
}

impl Default for Day {
    fn default() -> Self {
        Self {
            location: String::new(),
            wake_up_time: default_wake_up_time(),
            lodging: Lodging::default(),
            activities: Vec::new(),
            suggestions: None,
        }
    }
}

fn default_wake_up_time() -> String {
    "08:00".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lodging {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub room_type: String,
}

/// One scheduled item within a day. Order within `Day::activities`
/// determines both display order and the cumulative start-time
/// computation; no activity stores its own start time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(default)]
    pub name: String,
    /// Duration in minutes. Old trip files store this as either a JSON
    /// number or a numeric string; anything unparseable becomes 0.
    #[serde(default, deserialize_with = "lenient_minutes")]
    pub length: u32,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub notes: String,
}

fn lenient_minutes<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let minutes = match value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        serde_json::Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .or_else(|_| s.parse::<f64>().map(|f| f as i64))
                .unwrap_or(0)
        }
        _ => 0,
    };
    Ok(minutes.max(0) as u32)
}

/// A simplified external place result (restaurant or sight).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceRef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(rename = "place_id", default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(rename = "source", default, skip_serializing_if = "Option::is_none")]
    pub source_label: Option<String>,
}

/// Lookup results attached to a day for display: restaurants, sights
/// and a short historical summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Suggestions {
    #[serde(default)]
    pub restaurants: Vec<PlaceRef>,
    #[serde(default)]
    pub sights: Vec<PlaceRef>,
    #[serde(default)]
    pub history: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_defaults_match_a_freshly_added_day() {
        let day = Day::default();
        assert_eq!(day.wake_up_time, "08:00");
        assert_eq!(day.lodging, Lodging::default());
        assert!(day.activities.is_empty());
        assert!(day.suggestions.is_none());
    }

    #[test]
    fn activity_length_tolerates_strings_and_garbage() {
        let parse = |raw: &str| serde_json::from_str::<Activity>(raw).unwrap().length;

        assert_eq!(parse(r#"{"name":"a","length":90}"#), 90);
        assert_eq!(parse(r#"{"name":"a","length":"45"}"#), 45);
        assert_eq!(parse(r#"{"name":"a","length":"90.5"}"#), 90);
        assert_eq!(parse(r#"{"name":"a","length":"soon"}"#), 0);
        assert_eq!(parse(r#"{"name":"a","length":-30}"#), 0);
        assert_eq!(parse(r#"{"name":"a"}"#), 0);
    }

    #[test]
    fn suggestions_are_stripped_on_serialization() {
        let mut day = Day::default();
        day.suggestions = Some(Suggestions {
            restaurants: vec![PlaceRef {
                name: "Noma".into(),
                address: "Copenhagen".into(),
                ..PlaceRef::default()
            }],
            sights: Vec::new(),
            history: "old".into(),
        });

        let json = serde_json::to_value(&day).unwrap();
        assert!(json.get("suggestions").is_none());

        let reloaded: Day = serde_json::from_value(json).unwrap();
        assert!(reloaded.suggestions.is_none());
    }

    #[test]
    fn document_round_trips_through_the_wire_shape() {
        let doc = TripDocument {
            trip_name: "Paris Trip".into(),
            start_date: "2025-06-01".into(),
            days: vec![Day::default()],
        };

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["tripName"], "Paris Trip");
        assert_eq!(json["startDate"], "2025-06-01");
        assert!(json["trip"].is_array());

        let back: TripDocument = serde_json::from_value(json).unwrap();
        assert_eq!(back, doc);
    }
}
