use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite store with its log and raw input tables
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let initialized = Config::init_all(cli.db.clone(), cli.test)?;
    let cfg = Config {
        database: initialized.database,
        ..cfg.clone()
    };

    println!("⚙️  Initializing infloor…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &cfg.database);

    let conn = Connection::open(&cfg.database)?;
    init_db(&conn, &cfg.input_table)?;

    if let Err(e) = log::ttlog(
        &conn,
        "init",
        &cfg.input_table,
        &format!("Store initialized at {}", &cfg.database),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    success(format!("Store initialized at {}", &cfg.database));
    Ok(())
}
