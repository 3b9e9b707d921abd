use anyhow::Result;
use clap::{Parser, Subcommand};
use gameshelf::database::{ensure_database_dir, DatabaseConn, SqliteGameManager};
use gameshelf::{GameshelfConfig, OutputFormat};
use tracing::Level;

mod commands;

use commands::game::{CreateArgs, UpdateArgs};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    /// configuration file path, by default $HOME/.gameshelf/gameshelf.toml is used
    #[clap(short, long)]
    config: Option<String>,

    /// Database connection string, overrides the configured one
    #[clap(long, global = true)]
    database: Option<String>,

    /// Output format: table, markdown, json, json-pretty, json-line, psv
    #[clap(short, long, global = true, default_value = "table")]
    format: OutputFormat,

    /// Print debug information
    #[clap(long)]
    debug: bool,

    /// Command to run; the demo client runs when omitted
    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the demo client: create, update, list and delete a few games.
    Demo,

    /// Create a new game.
    Create(CreateArgs),

    /// Show a single game by ID.
    Get {
        /// ID of the game
        id: i64,
    },

    /// Change name and release year of an existing game.
    Update(UpdateArgs),

    /// List all games.
    List,

    /// Delete a game by ID. Deleting a missing game is not an error.
    Delete {
        /// ID of the game
        id: i64,
    },

    /// Show the configuration and database status.
    Config,
}

fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            // filter spans/events with level DEBUG or higher.
            .with_max_level(Level::DEBUG)
            .init();
    }

    if let Err(e) = run(cli) {
        eprintln!("ERROR: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = GameshelfConfig::new(&cli.config)?;
    if let Some(database) = cli.database {
        config.database = database;
    }
    ensure_database_dir(&config.database)?;

    let db = DatabaseConn::from_connection_string(&config.database)?;
    let command = cli.command.unwrap_or(Commands::Demo);
    execute(command, &config, db, cli.format)
}

/// Run `command` against `db`, then close it
fn execute(
    command: Commands,
    config: &GameshelfConfig,
    db: DatabaseConn,
    output_format: OutputFormat,
) -> Result<()> {
    let result = dispatch(command, config, &db, output_format);

    // A failed command takes precedence over a failed close
    let closed = db.close();
    result.and(closed)
}

fn dispatch(
    command: Commands,
    config: &GameshelfConfig,
    db: &DatabaseConn,
    output_format: OutputFormat,
) -> Result<()> {
    // Building the manager creates the game table; `config` only inspects it
    let manager = || SqliteGameManager::new(&db.conn);

    match command {
        Commands::Config => commands::config::run(config, db, output_format),
        Commands::Demo => commands::demo::run(&manager()?),
        Commands::Create(args) => commands::game::create(&manager()?, args, output_format),
        Commands::Get { id } => commands::game::get(&manager()?, id, output_format),
        Commands::Update(args) => commands::game::update(&manager()?, args, output_format),
        Commands::List => commands::game::list(&manager()?, output_format),
        Commands::Delete { id } => commands::game::delete(&manager()?, id, output_format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gameshelf::{GameError, GameErrorKind};

    fn memory_config() -> GameshelfConfig {
        GameshelfConfig {
            config_file: "gameshelf.toml".to_string(),
            data_dir: ".".to_string(),
            database: ":memory:".to_string(),
        }
    }

    #[test]
    fn test_execute_reports_command_error() {
        let config = memory_config();
        let db = DatabaseConn::from_connection_string(&config.database).unwrap();

        let err = execute(Commands::Get { id: 5 }, &config, db, OutputFormat::Json).unwrap_err();
        let kind = err.downcast_ref::<GameError>().map(GameError::kind);
        assert_eq!(kind, Some(GameErrorKind::NoGameFound));
    }

    #[test]
    fn test_execute_demo_and_config() {
        let config = memory_config();

        let db = DatabaseConn::from_connection_string(&config.database).unwrap();
        execute(Commands::Demo, &config, db, OutputFormat::Table).unwrap();

        let db = DatabaseConn::from_connection_string(&config.database).unwrap();
        execute(Commands::Config, &config, db, OutputFormat::JsonPretty).unwrap();
    }
}
