//! Trip persistence: one pretty-printed JSON file per trip, named from
//! the trip name and start date.

use std::path::{Path, PathBuf};

use trip_engine::TripDocument;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("trip not found: {0}")]
    NotFound(String),
    #[error("invalid trip name: {0}")]
    InvalidName(String),
    #[error("malformed trip file: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct TripRepository {
    trips_dir: PathBuf,
}

impl TripRepository {
    pub fn new(trips_dir: impl Into<PathBuf>) -> Self {
        Self {
            trips_dir: trips_dir.into(),
        }
    }

    pub fn trips_dir(&self) -> &Path {
        &self.trips_dir
    }

    /// Identifiers of every saved trip: the file stems, sorted.
    pub async fn list(&self) -> Result<Vec<String>, RepositoryError> {
        let mut entries = tokio::fs::read_dir(&self.trips_dir).await?;
        let mut trips = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if let Some(stem) = name.strip_suffix(".json") {
                trips.push(stem.to_string());
            }
        }
        trips.sort();
        Ok(trips)
    }

    pub async fn load(&self, trip_name: &str) -> Result<TripDocument, RepositoryError> {
        validate_name(trip_name)?;
        let path = self.trips_dir.join(format!("{trip_name}.json"));
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(RepositoryError::NotFound(trip_name.to_string()));
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write the whole document; per-day suggestions are display-only
    /// state and never reach the serialized form. Returns the trip's
    /// identifier (the file stem).
    pub async fn save(&self, doc: &TripDocument) -> Result<String, RepositoryError> {
        validate_name(&doc.trip_name)?;
        validate_name(&doc.start_date)?;
        let stem = format!("{}_{}", doc.trip_name, doc.start_date);
        let path = self.trips_dir.join(format!("{stem}.json"));
        let raw = serde_json::to_string_pretty(doc)?;
        tokio::fs::write(&path, raw).await?;
        Ok(stem)
    }
}

/// Trip names become file names; anything that could walk out of the
/// trips directory is rejected outright.
fn validate_name(name: &str) -> Result<(), RepositoryError> {
    if name.is_empty()
        || name.contains(['/', '\\', '\0'])
        || name.contains("..")
    {
        return Err(RepositoryError::InvalidName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use trip_engine::{Activity, Day, PlaceRef, Suggestions};

    fn sample_doc() -> TripDocument {
        let mut doc = TripDocument::new("Paris Trip", "2025-06-01");
        let mut day = Day::default();
        day.location = "Paris".into();
        day.activities.push(Activity {
            name: "Louvre".into(),
            length: 120,
            ..Activity::default()
        });
        day.suggestions = Some(Suggestions {
            restaurants: vec![PlaceRef {
                name: "Chez Testes".into(),
                ..PlaceRef::default()
            }],
            sights: Vec::new(),
            history: "A long one.".into(),
        });
        doc.days.push(day);
        doc
    }

    #[tokio::test]
    async fn save_then_load_round_trips_without_suggestions() {
        let dir = tempfile::tempdir().unwrap();
        let repo = TripRepository::new(dir.path());

        let doc = sample_doc();
        let stem = repo.save(&doc).await.unwrap();
        assert_eq!(stem, "Paris Trip_2025-06-01");

        let loaded = repo.load(&stem).await.unwrap();
        let mut expected = doc;
        expected.days[0].suggestions = None;
        assert_eq!(loaded, expected);

        assert_eq!(repo.list().await.unwrap(), vec![stem]);
    }

    #[tokio::test]
    async fn missing_trips_are_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let repo = TripRepository::new(dir.path());
        assert!(matches!(
            repo.load("Nowhere_2025-01-01").await,
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn traversal_names_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let repo = TripRepository::new(dir.path());
        assert!(matches!(
            repo.load("../etc/passwd").await,
            Err(RepositoryError::InvalidName(_))
        ));

        let mut doc = sample_doc();
        doc.trip_name = "evil/escape".into();
        assert!(matches!(
            repo.save(&doc).await,
            Err(RepositoryError::InvalidName(_))
        ));
    }
}
