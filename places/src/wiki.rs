//! Wikipedia lookups for the location-history feature: find the best
//! matching article for a location, then fetch its summary extract.

use serde::{Deserialize, Serialize};

use crate::client::PlacesError;

const OPENSEARCH_URL: &str = "https://en.wikipedia.org/w/api.php";
const SUMMARY_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/summary";
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSummary {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub extract: String,
}

#[derive(Debug, Clone)]
pub struct WikiClient {
    http: reqwest::Client,
}

impl WikiClient {
    pub fn new() -> Result<Self, PlacesError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http })
    }

    /// Best-matching article title for a search term, if any.
    pub async fn search_title(&self, term: &str) -> Result<Option<String>, PlacesError> {
        tracing::debug!(term, "wikipedia article search");
        // Opensearch answers with a positional JSON array:
        // [term, [titles], [descriptions], [urls]].
        let body: (String, Vec<String>, serde_json::Value, serde_json::Value) = self
            .http
            .get(OPENSEARCH_URL)
            .query(&[
                ("action", "opensearch"),
                ("search", term),
                ("limit", "1"),
                ("format", "json"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(body.1.into_iter().next())
    }

    pub async fn page_summary(&self, title: &str) -> Result<PageSummary, PlacesError> {
        let url = format!("{}/{}", SUMMARY_URL, urlencode_path_segment(title));
        Ok(self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }
}

fn urlencode_path_segment(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            b' ' => encoded.push('_'),
            other => {
                encoded.push('%');
                encoded.push_str(&format!("{:02X}", other));
            }
        }
    }
    encoded
}

const STATE_ABBREVIATIONS: &[(&str, &str)] = &[
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
];

/// Clean a free-text location for article search: drop a trailing
/// ", USA" and expand a trailing two-letter state abbreviation, so
/// "Portland, OR" searches as "Portland, Oregon".
pub fn sanitize_for_wikipedia(location: &str) -> String {
    let mut cleaned = location.trim().to_string();
    if let Some(stripped) = cleaned.strip_suffix("USA") {
        if let Some(stripped) = stripped.trim_end().strip_suffix(',') {
            cleaned = stripped.trim_end().to_string();
        }
    }

    if let Some(comma) = cleaned.rfind(',') {
        let tail = cleaned[comma + 1..].trim();
        if tail.len() == 2 && tail.chars().all(|c| c.is_ascii_uppercase()) {
            if let Some((_, full)) = STATE_ABBREVIATIONS.iter().find(|(abbr, _)| *abbr == tail) {
                cleaned = format!("{}, {}", cleaned[..comma].trim_end(), full);
            }
        }
    }

    cleaned
}
