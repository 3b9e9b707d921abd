use anyhow::{anyhow, Result};
use gameshelf::{Game, GameManager};
use tracing::info;

fn persisted_id(game: &Game) -> Result<i64> {
    game.id
        .ok_or_else(|| anyhow!("game '{}' has no id after saving", game.name))
}

fn print_found(manager: &dyn GameManager) -> Result<()> {
    println!("Searching for games:");
    for game in manager.find()? {
        println!("\tFound {}", game.name);
    }
    println!();
    Ok(())
}

/// Walk through every manager operation, printing what happens
pub fn run(manager: &dyn GameManager) -> Result<()> {
    info!("running demo client");

    let edna_and_harvey = manager.create(&Game::new("Edna & Harvey: The Breakout", 2008))?;
    let edna_and_harvey_id = persisted_id(&edna_and_harvey)?;
    println!(
        "Created {} with ID: {}\n",
        edna_and_harvey.name, edna_and_harvey_id
    );

    let mut fallout = manager.create(&Game::new("Fallout", 1997))?;
    println!("Created {} with ID: {}\n", fallout.name, persisted_id(&fallout)?);

    fallout.name = "Fallout: New Vegas".to_string();
    fallout.release_year = 2010;
    let fallout = manager.update(&fallout)?;
    let fallout_id = persisted_id(&fallout)?;
    println!("Updating to {} with ID: {}\n", fallout.name, fallout_id);

    print_found(manager)?;

    println!("Deleting games...\n");
    manager.delete(edna_and_harvey_id)?;
    manager.delete(fallout_id)?;

    print_found(manager)?;

    println!("Finished demo client!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gameshelf::database::{DatabaseConn, SqliteGameManager};

    #[test]
    fn test_demo_leaves_store_empty() {
        let db = DatabaseConn::open_in_memory().unwrap();
        let manager = SqliteGameManager::new(&db.conn).unwrap();

        assert!(run(&manager).is_ok());
        assert!(manager.find().unwrap().is_empty());
    }

    #[test]
    fn test_demo_keeps_existing_games() {
        let db = DatabaseConn::open_in_memory().unwrap();
        let manager = SqliteGameManager::new(&db.conn).unwrap();
        let kept = manager.create(&Game::new("Kept", 1990)).unwrap();

        run(&manager).unwrap();

        let games = manager.find().unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0], kept);
    }

    #[test]
    fn test_demo_fails_on_broken_store() {
        let db = DatabaseConn::open_in_memory().unwrap();
        let manager = SqliteGameManager::new(&db.conn).unwrap();
        db.conn.execute("DROP TABLE game", []).unwrap();

        assert!(run(&manager).is_err());
    }
}
