use anyhow::{anyhow, Result};
use crate::database::database_path;
use config::Config;
use std::collections::HashMap;
use std::path::Path;

pub struct GameshelfConfig {
    /// Path of the configuration file that was read (or created)
    pub config_file: String,

    /// Path to the directory to hold gameshelf's data
    pub data_dir: String,

    /// Connection string of the game database
    pub database: String,
}

const EMPTY_CONFIG: &str = r#"### gameshelf configuration file

### directory for data used by gameshelf
# data_dir = "~/.gameshelf"

### connection string of the game database, e.g. a file path,
### "sqlite:/path/to/games.db" or ":memory:"
# database = "~/.gameshelf/gameshelf.sqlite3"
"#;

/// File name of the default SQLite database inside the data directory
const DATABASE_FILE: &str = "gameshelf.sqlite3";

fn home_dir_string() -> Result<String> {
    dirs::home_dir()
        .ok_or_else(|| anyhow!("Could not find home directory"))?
        .to_str()
        .ok_or_else(|| anyhow!("Could not convert home directory path to string"))
        .map(|s| s.to_owned())
}

fn default_database(data_dir: &str) -> String {
    format!("{}/{}", data_dir.trim_end_matches('/'), DATABASE_FILE)
}

impl GameshelfConfig {
    /// Function to create and initialize a new configuration
    pub fn new(path: &Option<String>) -> Result<GameshelfConfig> {
        let mut builder = Config::builder();

        // By default use $HOME/.gameshelf/gameshelf.toml as the configuration file path
        let config_file = match path {
            Some(p) => p.clone(),
            None => {
                let gameshelf_dir = format!("{}/.gameshelf", home_dir_string()?);
                std::fs::create_dir_all(gameshelf_dir.as_str())
                    .map_err(|e| anyhow!("Unable to create gameshelf directory: {}", e))?;
                format!("{}/gameshelf.toml", gameshelf_dir)
            }
        };

        // Add in toml configuration file
        if Path::new(config_file.as_str()).exists() {
            builder = builder.add_source(config::File::with_name(config_file.as_str()));
        } else {
            std::fs::write(config_file.as_str(), EMPTY_CONFIG).map_err(|e| {
                anyhow!("Unable to create config file {}: {}", config_file.as_str(), e)
            })?;
        }

        // Add in settings from the environment (with a prefix of GAMESHELF)
        // E.g., `GAMESHELF_DATABASE=:memory: ./gameshelf` runs against an in-memory database
        builder = builder.add_source(config::Environment::with_prefix("GAMESHELF"));

        let settings = builder
            .build()
            .map_err(|e| anyhow!("Failed to build configuration: {}", e))?;

        let config = settings
            .try_deserialize::<HashMap<String, String>>()
            .map_err(|e| anyhow!("Failed to deserialize configuration: {}", e))?;

        Self::from_settings(config_file, &config)
    }

    /// Resolve a configuration from already-merged key/value settings
    fn from_settings(
        config_file: String,
        config: &HashMap<String, String>,
    ) -> Result<GameshelfConfig> {
        let data_dir = match config.get("data_dir") {
            Some(p) => p.clone(),
            None => format!("{}/.gameshelf", home_dir_string()?),
        };

        let database = match config.get("database") {
            Some(d) => d.clone(),
            None => default_database(&data_dir),
        };

        Ok(GameshelfConfig {
            config_file,
            data_dir,
            database,
        })
    }

    /// Whether the configured database lives in memory only
    pub fn is_in_memory(&self) -> bool {
        database_path(&self.database).is_none()
    }

    /// Display configuration summary
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Config File:        {}", self.config_file),
            format!("Data Directory:     {}", self.data_dir),
            format!("Database:           {}", self.database),
        ];
        if self.is_in_memory() {
            lines.push("Storage:            in-memory (discarded on exit)".to_string());
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_defaults_to_data_dir() {
        let mut settings = HashMap::new();
        settings.insert("data_dir".to_string(), "/tmp/shelf/".to_string());

        let config = GameshelfConfig::from_settings("shelf.toml".to_string(), &settings).unwrap();
        assert_eq!(config.data_dir, "/tmp/shelf/");
        assert_eq!(config.database, "/tmp/shelf/gameshelf.sqlite3");
        assert!(!config.is_in_memory());
    }

    #[test]
    fn test_explicit_database() {
        let mut settings = HashMap::new();
        settings.insert("data_dir".to_string(), "/tmp/shelf".to_string());
        settings.insert("database".to_string(), "sqlite::memory:".to_string());

        let config = GameshelfConfig::from_settings("shelf.toml".to_string(), &settings).unwrap();
        assert_eq!(config.database, "sqlite::memory:");
        assert!(config.is_in_memory());
    }

    #[test]
    fn test_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gameshelf.toml");
        std::fs::write(
            &path,
            "data_dir = \"/srv/games\"\ndatabase = \"sqlite:/srv/games/shelf.db\"\n",
        )
        .unwrap();

        let path_str = path.to_string_lossy().to_string();
        let config = GameshelfConfig::new(&Some(path_str.clone())).unwrap();
        assert_eq!(config.config_file, path_str);
        assert_eq!(config.data_dir, "/srv/games");
        assert_eq!(config.database, "sqlite:/srv/games/shelf.db");

        let summary = config.summary();
        assert!(summary.contains(&format!("Config File:        {}", path_str)));
        assert!(summary.contains("sqlite:/srv/games/shelf.db"));
    }

    #[test]
    fn test_missing_config_file_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.toml");
        let path_str = path.to_string_lossy().to_string();

        // Resolving the default data directory depends on $HOME, so only the
        // side effect is checked here
        let _ = GameshelfConfig::new(&Some(path_str));
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("### gameshelf configuration file"));
    }
}
