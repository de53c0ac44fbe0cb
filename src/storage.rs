use crate::errors::AppError;
use crate::preferences::Preferences;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub const DEFAULT_DATA_PATH: &str = "data/preferences.json";

pub fn resolve_data_path() -> PathBuf {
    match env::var("APP_DATA_PATH") {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_DATA_PATH),
    }
}

pub async fn load_data(path: &Path) -> Preferences {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse preferences file: {err}");
                Preferences::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Preferences::default(),
        Err(err) => {
            error!("failed to read preferences file: {err}");
            Preferences::default()
        }
    }
}

/// Replaces the preference file atomically through a sibling temp file.
pub async fn persist_data(path: &Path, data: &Preferences) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data)?;
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, payload).await?;
    fs::rename(&temp_path, path).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{DARK_MODE_KEY, PreferenceStore, write_flag};

    fn temp_path(name: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        env::temp_dir().join(format!("tap_counter_{name}_{}_{nanos}.json", std::process::id()))
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let prefs = load_data(&temp_path("missing")).await;
        assert_eq!(prefs, Preferences::default());
    }

    #[tokio::test]
    async fn corrupt_file_loads_empty() {
        let path = temp_path("corrupt");
        fs::write(&path, b"{ not json").await.unwrap();
        assert_eq!(load_data(&path).await, Preferences::default());
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn persisted_preferences_load_back() {
        let path = temp_path("roundtrip");
        let mut prefs = Preferences::default();
        write_flag(&mut prefs, DARK_MODE_KEY, true);

        persist_data(&path, &prefs).await.unwrap();
        let loaded = load_data(&path).await;
        assert_eq!(loaded.get(DARK_MODE_KEY).as_deref(), Some("true"));
        assert!(!path.with_extension("json.tmp").exists());
        let _ = fs::remove_file(&path).await;
    }
}
