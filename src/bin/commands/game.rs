use anyhow::Result;
use clap::Args;
use gameshelf::output::{display_id, game_psv_line, GAME_PSV_HEADER};
use gameshelf::{Game, GameManager, OutputFormat};
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Arguments for the Create command
#[derive(Args)]
pub struct CreateArgs {
    /// Name of the game
    #[clap(short, long)]
    pub name: String,

    /// Release year of the game
    #[clap(short, long)]
    pub year: i32,
}

/// Arguments for the Update command
#[derive(Args)]
pub struct UpdateArgs {
    /// ID of the game to update
    pub id: i64,

    /// New name of the game
    #[clap(short, long)]
    pub name: String,

    /// New release year of the game
    #[clap(short, long)]
    pub year: i32,
}

#[derive(Tabled)]
struct GameRow {
    id: String,
    name: String,
    release_year: i32,
}

impl From<&Game> for GameRow {
    fn from(game: &Game) -> Self {
        GameRow {
            id: display_id(&game.id),
            name: game.name.clone(),
            release_year: game.release_year,
        }
    }
}

pub fn create(manager: &dyn GameManager, args: CreateArgs, output_format: OutputFormat) -> Result<()> {
    let CreateArgs { name, year } = args;
    let game = manager.create(&Game::new(name, year))?;
    print_games(&[game], output_format)
}

pub fn get(manager: &dyn GameManager, id: i64, output_format: OutputFormat) -> Result<()> {
    let game = manager.get(id)?;
    print_games(&[game], output_format)
}

pub fn update(manager: &dyn GameManager, args: UpdateArgs, output_format: OutputFormat) -> Result<()> {
    let UpdateArgs { id, name, year } = args;
    let game = manager.update(&Game::new(name, year).with_id(id))?;
    print_games(&[game], output_format)
}

pub fn list(manager: &dyn GameManager, output_format: OutputFormat) -> Result<()> {
    let games = manager.find()?;
    print_games(&games, output_format)
}

pub fn delete(manager: &dyn GameManager, id: i64, output_format: OutputFormat) -> Result<()> {
    manager.delete(id)?;
    if output_format.is_json() {
        println!("{}", serde_json::json!({ "deleted": id }));
    } else {
        println!("Deleted game {}", id);
    }
    Ok(())
}

pub(crate) fn print_games(games: &[Game], output_format: OutputFormat) -> Result<()> {
    match output_format {
        OutputFormat::Table => {
            let rows: Vec<GameRow> = games.iter().map(GameRow::from).collect();
            println!("{}", Table::new(rows).with(Style::rounded()));
        }
        OutputFormat::Markdown => {
            let rows: Vec<GameRow> = games.iter().map(GameRow::from).collect();
            println!("{}", Table::new(rows).with(Style::markdown()));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(games)?),
        OutputFormat::JsonPretty => println!("{}", serde_json::to_string_pretty(games)?),
        OutputFormat::JsonLine => {
            for game in games {
                println!("{}", serde_json::to_string(game)?);
            }
        }
        OutputFormat::Psv => {
            println!("{}", GAME_PSV_HEADER);
            for game in games {
                println!("{}", game_psv_line(game));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gameshelf::database::{DatabaseConn, SqliteGameManager};
    use gameshelf::{GameError, GameErrorKind};

    fn error_kind(err: &anyhow::Error) -> Option<GameErrorKind> {
        err.downcast_ref::<GameError>().map(GameError::kind)
    }

    #[test]
    fn test_update_unknown_id_fails() {
        let db = DatabaseConn::open_in_memory().unwrap();
        let manager = SqliteGameManager::new(&db.conn).unwrap();

        let args = UpdateArgs {
            id: 404,
            name: "Fallout: New Vegas".to_string(),
            year: 2010,
        };
        let err = update(&manager, args, OutputFormat::Json).unwrap_err();
        assert_eq!(error_kind(&err), Some(GameErrorKind::NoGameFound));
    }

    #[test]
    fn test_get_unknown_id_fails() {
        let db = DatabaseConn::open_in_memory().unwrap();
        let manager = SqliteGameManager::new(&db.conn).unwrap();

        let err = get(&manager, 7, OutputFormat::Psv).unwrap_err();
        assert_eq!(error_kind(&err), Some(GameErrorKind::NoGameFound));
    }

    #[test]
    fn test_commands_round_trip() {
        let db = DatabaseConn::open_in_memory().unwrap();
        let manager = SqliteGameManager::new(&db.conn).unwrap();

        let args = CreateArgs {
            name: "Fallout".to_string(),
            year: 1997,
        };
        create(&manager, args, OutputFormat::Table).unwrap();
        let id = manager.find().unwrap()[0].id.unwrap();

        let args = UpdateArgs {
            id,
            name: "Fallout: New Vegas".to_string(),
            year: 2010,
        };
        update(&manager, args, OutputFormat::Markdown).unwrap();
        assert_eq!(manager.get(id).unwrap().name, "Fallout: New Vegas");

        list(&manager, OutputFormat::JsonLine).unwrap();
        delete(&manager, id, OutputFormat::Json).unwrap();
        delete(&manager, id, OutputFormat::Table).unwrap();
        assert!(manager.find().unwrap().is_empty());
    }
}
