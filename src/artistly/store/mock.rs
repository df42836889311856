use super::{RecordSource, RecordStore};
use crate::error::Result;

const MOCK_DATA: &str = include_str!("mock-data.json");

/// The demo dataset shipped inside the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

impl RecordSource for BundledSource {
    fn load(&self) -> Result<RecordStore> {
        RecordStore::from_json(MOCK_DATA)
    }

    fn describe(&self) -> String {
        "bundled demo data".to_string()
    }
}
