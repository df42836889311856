use crate::api::ArtistlyApi;
use crate::config::ArtistlyConfig;
use crate::error::{ArtistlyError, Result};
use crate::store::fs::FileSource;
use crate::store::mock::BundledSource;
use crate::store::{RecordSource, RecordStore};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const HOME_ENV: &str = "ARTISTLY_HOME";

/// Where the records come from for this session.
pub enum SessionSource {
    Bundled(BundledSource),
    File(FileSource),
}

impl RecordSource for SessionSource {
    fn load(&self) -> Result<RecordStore> {
        match self {
            SessionSource::Bundled(source) => source.load(),
            SessionSource::File(source) => source.load(),
        }
    }

    fn describe(&self) -> String {
        match self {
            SessionSource::Bundled(source) => source.describe(),
            SessionSource::File(source) => source.describe(),
        }
    }
}

pub struct ArtistlyContext {
    pub api: ArtistlyApi<SessionSource>,
    pub config: ArtistlyConfig,
}

/// `ARTISTLY_HOME` when set, otherwise the platform config directory.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "artistly", "artistly")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ArtistlyError::Store("Could not determine config dir".to_string()))
}

/// An explicit `--data` file wins over the configured one; with neither, the
/// bundled demo data is used.
pub fn choose_source(data: Option<&Path>, config: &ArtistlyConfig) -> SessionSource {
    match data.map(Path::to_path_buf).or_else(|| config.data_file.clone()) {
        Some(path) => SessionSource::File(FileSource::new(path)),
        None => SessionSource::Bundled(BundledSource),
    }
}

pub fn initialize(config_dir: &Path, data: Option<&Path>) -> Result<ArtistlyContext> {
    let config = ArtistlyConfig::load(config_dir)?;
    let source = choose_source(data, &config);
    let api = ArtistlyApi::new(source, config_dir)?;
    Ok(ArtistlyContext { api, config })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_to_bundled_data() {
        let temp = TempDir::new().unwrap();
        let ctx = initialize(temp.path(), None).unwrap();
        assert!(matches!(ctx.api.source(), SessionSource::Bundled(_)));
        assert_eq!(ctx.api.store().artists().len(), 8);
    }

    #[test]
    fn configured_data_file_is_used() {
        let temp = TempDir::new().unwrap();
        let data = temp.path().join("records.json");
        fs::write(&data, r#"{ "artists": [], "bookings": [] }"#).unwrap();

        let mut config = ArtistlyConfig::default();
        config.data_file = Some(data.clone());
        config.save(temp.path()).unwrap();

        let ctx = initialize(temp.path(), None).unwrap();
        assert_eq!(ctx.api.source().describe(), data.display().to_string());
        assert!(ctx.api.store().artists().is_empty());
    }

    #[test]
    fn explicit_data_flag_wins() {
        let mut config = ArtistlyConfig::default();
        config.data_file = Some(PathBuf::from("configured.json"));
        match choose_source(Some(Path::new("flag.json")), &config) {
            SessionSource::File(source) => assert_eq!(source.path(), Path::new("flag.json")),
            SessionSource::Bundled(_) => panic!("expected a file source"),
        }
    }

    #[test]
    fn missing_data_file_fails_initialization() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.json");
        assert!(initialize(temp.path(), Some(missing.as_path())).is_err());
    }
}
