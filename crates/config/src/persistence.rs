//! Config file discovery, reading, and writing.
//!
//! Files are JSON5 (comments and trailing commas allowed) or plain JSON.
//! Saving always writes pretty-printed JSON, which JSON5 readers accept.
//!
//! Discovery order:
//!
//! 1. `./tgi.json5`, then `./tgi.json`
//! 2. `<config dir>/tgi/config.json5`, then `<config dir>/tgi/config.json`

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

const LOCAL_FILE_NAMES: [&str; 2] = ["tgi.json5", "tgi.json"];

const USER_CONFIG_DIR: &str = "tgi";

const USER_FILE_NAMES: [&str; 2] = ["config.json5", "config.json"];

/// Lists every location a config file may live at, highest priority first.
///
/// `user_dir` is the platform config directory (e.g. `~/.config`), if known.
#[must_use]
pub fn candidate_paths(user_dir: Option<&Path>) -> Vec<PathBuf> {
    let local = LOCAL_FILE_NAMES.iter().map(PathBuf::from);
    let user = user_dir.into_iter().flat_map(|dir| {
        USER_FILE_NAMES
            .iter()
            .map(move |name| dir.join(USER_CONFIG_DIR).join(name))
    });
    local.chain(user).collect()
}

/// Returns the first existing config file, if any.
///
/// # Examples
///
/// ```no_run
/// use tgi_config::persistence::find_config_file;
///
/// match find_config_file() {
///     Some(path) => println!("using {}", path.display()),
///     None => println!("using defaults"),
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let user_dir = dirs::config_dir();
    candidate_paths(user_dir.as_deref())
        .into_iter()
        .find(|path| path.exists())
}

/// Reads and parses a JSON5 or JSON file into `T`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content cannot be parsed.
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json5::from_str(&content)?)
}

/// Serializes `value` as pretty JSON into `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(path, content).map_err(write_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        value: i32,
    }

    #[test]
    fn candidates_prefer_local_files() {
        let paths = candidate_paths(Some(Path::new("/home/u/.config")));
        assert_eq!(
            paths,
            [
                PathBuf::from("tgi.json5"),
                PathBuf::from("tgi.json"),
                PathBuf::from("/home/u/.config/tgi/config.json5"),
                PathBuf::from("/home/u/.config/tgi/config.json"),
            ]
        );
    }

    #[test]
    fn candidates_without_user_dir() {
        assert_eq!(candidate_paths(None).len(), 2);
    }

    #[test]
    fn read_json5_with_comments() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.json5");
        std::fs::write(
            &path,
            r#"
            {
                // comment
                name: "bar",
                value: 7,
            }
            "#,
        )
        .unwrap();

        let sample: Sample = read_config_file(&path).unwrap();
        assert_eq!(
            sample,
            Sample {
                name: "bar".to_string(),
                value: 7
            }
        );
    }

    #[test]
    fn read_missing_file_reports_path() {
        let err = read_config_file::<Sample>("/nonexistent/tgi.json").unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
        assert!(err.to_string().contains("/nonexistent/tgi.json"));
    }

    #[test]
    fn read_invalid_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ name: ").unwrap();

        let err = read_config_file::<Sample>(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseJson5(_)));
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a").join("b").join("config.json");
        let sample = Sample {
            name: "x".to_string(),
            value: 1,
        };

        write_config_file(&path, &sample).unwrap();
        let loaded: Sample = read_config_file(&path).unwrap();
        assert_eq!(loaded, sample);
    }
}
