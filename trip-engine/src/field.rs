//! Addressing metadata: the day/activity/field identifiers attached to
//! every rendered editable element so edit events can be routed back to
//! the correct slot of the document.

use std::fmt;
use std::str::FromStr;

/// A field that lives directly on a Day. Lodging fields use the
/// dot-separated paths the markup carries (`lodging.name` etc).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayField {
    WakeUpTime,
    Location,
    LodgingName,
    LodgingAddress,
    LodgingPhone,
    LodgingRoomType,
}

impl DayField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WakeUpTime => "wakeUpTime",
            Self::Location => "location",
            Self::LodgingName => "lodging.name",
            Self::LodgingAddress => "lodging.address",
            Self::LodgingPhone => "lodging.phone",
            Self::LodgingRoomType => "lodging.roomType",
        }
    }
}

impl FromStr for DayField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wakeUpTime" => Ok(Self::WakeUpTime),
            "location" => Ok(Self::Location),
            "lodging.name" => Ok(Self::LodgingName),
            "lodging.address" => Ok(Self::LodgingAddress),
            "lodging.phone" => Ok(Self::LodgingPhone),
            "lodging.roomType" => Ok(Self::LodgingRoomType),
            _ => Err(UnknownField(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityField {
    Name,
    Length,
    Location,
    Notes,
}

impl ActivityField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Length => "length",
            Self::Location => "location",
            Self::Notes => "notes",
        }
    }
}

impl FromStr for ActivityField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "length" => Ok(Self::Length),
            "location" => Ok(Self::Location),
            "notes" => Ok(Self::Notes),
            _ => Err(UnknownField(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field path: {0}")]
pub struct UnknownField(pub String);

/// What a field address points at within its day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldTarget {
    Day(DayField),
    Activity { index: usize, field: ActivityField },
}

/// Full address of one editable field in the rendered trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldAddress {
    pub day_index: usize,
    pub target: FieldTarget,
}

impl FieldAddress {
    pub fn day(day_index: usize, field: DayField) -> Self {
        Self {
            day_index,
            target: FieldTarget::Day(field),
        }
    }

    pub fn activity(day_index: usize, activity_index: usize, field: ActivityField) -> Self {
        Self {
            day_index,
            target: FieldTarget::Activity {
                index: activity_index,
                field,
            },
        }
    }

    /// Parse the addressing attributes an element carries: the
    /// `data-field` path plus the optional activity index that
    /// disambiguates day-level from activity-level fields.
    pub fn parse(
        day_index: usize,
        activity_index: Option<usize>,
        field: &str,
    ) -> Result<Self, UnknownField> {
        match activity_index {
            Some(index) => Ok(Self::activity(day_index, index, field.parse()?)),
            None => Ok(Self::day(day_index, field.parse()?)),
        }
    }
}

impl fmt::Display for FieldAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target {
            FieldTarget::Day(field) => write!(f, "day {} / {}", self.day_index, field.as_str()),
            FieldTarget::Activity { index, field } => write!(
                f,
                "day {} / activity {} / {}",
                self.day_index,
                index,
                field.as_str()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_day_and_activity_paths() {
        assert_eq!(
            FieldAddress::parse(1, None, "lodging.roomType").unwrap(),
            FieldAddress::day(1, DayField::LodgingRoomType)
        );
        assert_eq!(
            FieldAddress::parse(0, Some(2), "length").unwrap(),
            FieldAddress::activity(0, 2, ActivityField::Length)
        );
        // "location" resolves by whether an activity index is present.
        assert_eq!(
            FieldAddress::parse(3, None, "location").unwrap(),
            FieldAddress::day(3, DayField::Location)
        );
        assert!(FieldAddress::parse(0, None, "lodging.stars").is_err());
    }
}
