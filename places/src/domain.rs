use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// A simplified place as returned to the trip planner: name, address,
/// the Google place id, and a label for the source list that produced
/// it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceResult {
    pub name: String,
    pub address: String,
    pub place_id: Option<String>,
    pub source: String,
}

/// One raw result from the Places text search API. Only the fields the
/// planner consumes; everything else in the payload is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GooglePlace {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub formatted_address: String,
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
}

impl GooglePlace {
    pub fn into_result(self, source: &str) -> PlaceResult {
        PlaceResult {
            name: self.name,
            address: self.formatted_address,
            place_id: self.place_id,
            source: source.to_string(),
        }
    }
}

/// The curated restaurant lists the dining lookup aggregates. Each is
/// just a differently phrased text search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum RestaurantSource {
    GooglePlaces,
    Michelin,
    JamesBeard,
    Eater,
}

impl RestaurantSource {
    pub fn query(self, location: &str) -> String {
        match self {
            Self::GooglePlaces => format!("restaurants near {location}"),
            Self::Michelin => format!("michelin star restaurants near {location}"),
            Self::JamesBeard => format!("james beard award restaurants near {location}"),
            Self::Eater => format!("eater 38 restaurants near {location}"),
        }
    }
}

const SIGHT_WHITELIST: &[&str] = &[
    "tourist_attraction",
    "point_of_interest",
    "park",
    "museum",
    "winery",
    "natural_feature",
    "amusement_park",
    "zoo",
    "aquarium",
    "art_gallery",
];

const SIGHT_BLACKLIST: &[&str] = &["restaurant", "food", "cafe", "bar"];

/// Whether a place counts as a sight: tagged with at least one
/// attraction type and none of the food types (every restaurant is also
/// a `point_of_interest`, so the blacklist does the real work).
pub fn is_sight(place: &GooglePlace) -> bool {
    let has = |list: &[&str]| place.types.iter().any(|t| list.contains(&t.as_str()));
    has(SIGHT_WHITELIST) && !has(SIGHT_BLACKLIST)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_with_types(types: &[&str]) -> GooglePlace {
        GooglePlace {
            types: types.iter().map(|t| t.to_string()).collect(),
            ..GooglePlace::default()
        }
    }

    #[test]
    fn source_labels_and_queries() {
        assert_eq!(RestaurantSource::GooglePlaces.to_string(), "GooglePlaces");
        assert_eq!(RestaurantSource::JamesBeard.to_string(), "JamesBeard");
        assert_eq!(
            RestaurantSource::Eater.query("Portland"),
            "eater 38 restaurants near Portland"
        );
    }

    #[test]
    fn sights_need_an_attraction_type_and_no_food_type() {
        assert!(is_sight(&place_with_types(&["museum"])));
        assert!(is_sight(&place_with_types(&[
            "tourist_attraction",
            "establishment"
        ])));
        // A restaurant is also a point_of_interest; still not a sight.
        assert!(!is_sight(&place_with_types(&[
            "restaurant",
            "point_of_interest"
        ])));
        assert!(!is_sight(&place_with_types(&["establishment"])));
    }
}
