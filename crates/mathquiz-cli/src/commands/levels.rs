//! The `mathquiz levels` command.

use anyhow::Result;
use serde::Serialize;

use mathquiz_core::level::{Level, LevelConfig};

#[derive(Serialize)]
struct LevelRow {
    level: Level,
    #[serde(flatten)]
    config: LevelConfig,
}

pub fn execute(format: String) -> Result<()> {
    let rows: Vec<LevelRow> = Level::all()
        .map(|level| LevelRow {
            level,
            config: level.config(),
        })
        .collect();

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        "text" => print_table(&rows),
        other => anyhow::bail!("unknown format '{other}', expected text or json"),
    }

    Ok(())
}

fn print_table(rows: &[LevelRow]) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Level", "Numbers", "Operators"]);

    for row in rows {
        let operators = row
            .config
            .operators()
            .iter()
            .map(|op| op.symbol())
            .collect::<Vec<_>>()
            .join(" ");
        table.add_row(vec![
            Cell::new(row.level),
            Cell::new(row.config.pool()),
            Cell::new(operators),
        ]);
    }

    println!("{table}");
}
