use super::{RecordSource, RecordStore};
use crate::error::{ArtistlyError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads records from a JSON file on every `load`.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for FileSource {
    fn load(&self) -> Result<RecordStore> {
        if !self.path.exists() {
            return Err(ArtistlyError::Store(format!(
                "Record file not found: {}",
                self.path.display()
            )));
        }

        let content = fs::read_to_string(&self.path).map_err(ArtistlyError::Io)?;
        let store = RecordStore::from_json(&content)?;
        tracing::info!(
            path = %self.path.display(),
            artists = store.artists().len(),
            bookings = store.bookings().len(),
            "loaded records"
        );
        Ok(store)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"{
        "artists": [
            {
                "id": "1",
                "name": "A",
                "categories": ["Singer"],
                "bio": "Sings.",
                "location": "Paris",
                "rating": 4.2,
                "reviews": 3,
                "priceRange": "$500-1000"
            }
        ],
        "bookings": [
            {
                "id": "b1",
                "artistId": "1",
                "artistName": "A",
                "eventName": "Gala",
                "clientName": "Acme",
                "eventDate": "2025-03-01",
                "budget": "$800",
                "status": "pending"
            }
        ]
    }"#;

    #[test]
    fn loads_records_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.json");
        fs::write(&path, SAMPLE).unwrap();

        let store = FileSource::new(&path).load().unwrap();
        assert_eq!(store.artists()[0].name, "A");
        assert_eq!(store.bookings()[0].event_name, "Gala");
    }

    #[test]
    fn missing_file_is_a_store_error() {
        let dir = tempdir().unwrap();
        let source = FileSource::new(dir.path().join("nope.json"));
        assert!(matches!(source.load(), Err(ArtistlyError::Store(_))));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ \"artists\": [ { \"id\": 1 } ] }").unwrap();
        assert!(matches!(
            FileSource::new(&path).load(),
            Err(ArtistlyError::Serialization(_))
        ));
    }
}
