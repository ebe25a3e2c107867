use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::db_utils::count_rows;
use crate::db::log::log_run;
use crate::db::pool::DbPool;
use crate::db::raw::insert_raw_records;
use crate::errors::AppResult;
use crate::source::{CsvSource, EventSource};
use crate::ui::messages::{info, success};

/// Handle the `import` command: CSV export → store input table.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, replace } = cmd {
        let records = CsvSource::new(file).read_records()?;
        info(format!("{} rows read from {file}", records.len()));

        let mut pool = DbPool::new(&cfg.database)?;
        let inserted = insert_raw_records(&mut pool.conn, &cfg.input_table, &records, *replace)?;

        let mode = if *replace { "replaced" } else { "appended" };
        let total = count_rows(&pool.conn, &cfg.input_table)?;
        drop(pool);

        log_run(
            &cfg.database,
            "import",
            &cfg.input_table,
            &format!("{inserted} rows {mode} from {file}"),
        );

        success(format!(
            "{inserted} rows {mode} into '{}' ({total} rows stored)",
            cfg.input_table
        ));
    }
    Ok(())
}
