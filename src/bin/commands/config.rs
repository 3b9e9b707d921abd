use anyhow::Result;
use gameshelf::database::{DatabaseConn, SchemaManager, SchemaStatus, GAME_TABLE_NAME};
use gameshelf::{GameshelfConfig, OutputFormat};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ConfigInfo {
    config_file: String,
    data_dir: String,
    database: DatabaseInfo,
}

#[derive(Debug, Serialize)]
struct DatabaseInfo {
    connection: String,
    in_memory: bool,
    schema_initialized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    game_count: Option<u64>,
}

pub fn run(config: &GameshelfConfig, db: &DatabaseConn, output_format: OutputFormat) -> Result<()> {
    let status = SchemaManager::new(&db.conn).check_status()?;
    let game_count = match status {
        SchemaStatus::Ready => Some(db.table_count(GAME_TABLE_NAME)?),
        SchemaStatus::NotInitialized => None,
    };

    if output_format.is_json() {
        let info = ConfigInfo {
            config_file: config.config_file.clone(),
            data_dir: config.data_dir.clone(),
            database: DatabaseInfo {
                connection: config.database.clone(),
                in_memory: config.is_in_memory(),
                schema_initialized: status == SchemaStatus::Ready,
                game_count,
            },
        };
        let json = match output_format {
            OutputFormat::JsonPretty => serde_json::to_string_pretty(&info)?,
            _ => serde_json::to_string(&info)?,
        };
        println!("{}", json);
        return Ok(());
    }

    println!("{}", config.summary());
    println!("Schema:             {}", status);
    if let Some(count) = game_count {
        println!("Games:              {}", count);
    }
    Ok(())
}
