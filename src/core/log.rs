use crate::db::db_utils::table_exists;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

const MAX_OP_WIDTH: usize = 40;

/// Colour of an operation label in the printed log.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "init" => Colour::RGB(255, 153, 51),
        "import" => Colour::Blue,
        "report" => Colour::Green,
        "no_data" => Colour::Yellow,
        "report_failed" => Colour::Red,
        _ => Colour::White,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

struct LogEntry {
    id: i64,
    date: String,
    operation: String,
    target: String,
    message: String,
}

impl LogEntry {
    fn label(&self) -> String {
        if self.target.is_empty() {
            self.operation.clone()
        } else {
            format!("{} ({})", self.operation, self.target)
        }
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        if !table_exists(&pool.conn, "log")? {
            info("The internal log is empty.");
            return Ok(());
        }

        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let entries = stmt
            .query_map([], |row| {
                let raw_date: String = row.get(1)?;
                let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(raw_date);

                Ok(LogEntry {
                    id: row.get(0)?,
                    date,
                    operation: row.get(2)?,
                    target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                    message: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let id_w = entries.iter().map(|e| e.id.to_string().len()).max().unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.width()).max().unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|e| e.label().width())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);

        println!("📜 Internal log:\n");

        for e in &entries {
            let visible = truncate(&e.label(), MAX_OP_WIDTH);
            let padding = " ".repeat(op_w.saturating_sub(visible.width()));

            // only the operation word is coloured
            let painted = match visible.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color_for_operation(&e.operation).paint(op), rest),
                None => color_for_operation(&e.operation).paint(visible.as_str()).to_string(),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                painted,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
