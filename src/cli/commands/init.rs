use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::sqlite::init_db;
use crate::ui::messages::success;
use rusqlite::Connection;

/// Handle the `init` command: config directory, config file (unless in
/// test mode) and database schema.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let cfg = Config::load()?;
    let db_path = cli.db.clone().unwrap_or(cfg.database);

    println!("⚙️  Initializing punchclock…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_path);

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    success(format!("Database initialized at {}", &db_path));
    Ok(())
}
