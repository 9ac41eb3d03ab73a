//! Runtime path and level resolution for the CLI.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "todo";
const DB_FILE_NAME: &str = "todos.sqlite3";

/// Fully resolved settings, all paths absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl RuntimeConfig {
    /// Fills unset values from the platform data directory.
    pub fn resolve(
        db_path: Option<PathBuf>,
        log_dir: Option<PathBuf>,
        log_level: Option<String>,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Could not determine current directory")?;
        let app_dir = || -> Result<PathBuf> {
            let base = dirs::data_dir().context("Could not determine data directory")?;
            Ok(base.join(APP_DIR))
        };

        let db_path = match db_path {
            Some(path) => absolutize(&cwd, path),
            None => app_dir()?.join(DB_FILE_NAME),
        };
        let log_dir = match log_dir {
            Some(path) => absolutize(&cwd, path),
            None => app_dir()?.join("logs"),
        };
        let log_level =
            log_level.unwrap_or_else(|| todo_core::default_log_level().to_string());

        Ok(Self {
            db_path,
            log_dir,
            log_level,
        })
    }
}

fn absolutize(cwd: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::{absolutize, RuntimeConfig};
    use std::path::{Path, PathBuf};

    #[test]
    fn relative_paths_are_joined_to_cwd() {
        let cwd = Path::new("/work");
        assert_eq!(
            absolutize(cwd, PathBuf::from("data/todos.db")),
            PathBuf::from("/work/data/todos.db")
        );
        assert_eq!(
            absolutize(cwd, PathBuf::from("/abs/todos.db")),
            PathBuf::from("/abs/todos.db")
        );
    }

    #[test]
    fn explicit_values_win() {
        let config = RuntimeConfig::resolve(
            Some(PathBuf::from("/tmp/t.db")),
            Some(PathBuf::from("/tmp/logs")),
            Some("warn".to_string()),
        )
        .unwrap();

        assert_eq!(config.db_path, PathBuf::from("/tmp/t.db"));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/logs"));
        assert_eq!(config.log_level, "warn");
    }
}
