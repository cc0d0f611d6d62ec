use anyhow::Result;
use log::{debug, info};
use serde_json::Value;

use super::print_json;
use super::session::Session;
use crate::cli::commands::{QueryCommands, QuerySubcommands};
use crate::query::{QueryExecutor, Row};

pub async fn query_command(args: QueryCommands, profile: Option<&str>) -> Result<()> {
    let mut session = Session::open(profile)?;

    match args.command {
        QuerySubcommands::Run {
            query,
            http_path,
            token,
            format,
        } => {
            info!("Executing query on {}", http_path);
            debug!("Output format: {}", format);

            // Without --token the statement runs on a short-lived directory
            // token; nothing is left behind in the workspace.
            let token = match token {
                Some(token) => token,
                None => session.client.fetch_directory_token().await?,
            };

            let rows = session
                .executor()
                .fetch_query(&http_path, &token, &query)
                .await?;
            print_rows(&rows, &format)?;
        }
    }

    Ok(())
}

pub(crate) fn print_rows(rows: &[Row], format: &str) -> Result<()> {
    match format {
        "json" => print_json(&rows),
        "table" => {
            println!("{}", format_as_table(rows));
            Ok(())
        }
        _ => anyhow::bail!("Unsupported format: {}", format),
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render rows as aligned columns
pub(crate) fn format_as_table(rows: &[Row]) -> String {
    if rows.is_empty() {
        return "No rows returned.".to_string();
    }

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(cell).collect())
        .collect();

    let columns = cells.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in &cells {
        for (i, value) in row.iter().enumerate() {
            widths[i] = widths[i].max(value.chars().count());
        }
    }

    let mut output = String::new();
    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, value)| format!("{:<width$}", value, width = widths[i]))
            .collect();
        output.push_str(line.join(" | ").trim_end());
        output.push('\n');
    }
    output.push_str(&format!("({} rows)", rows.len()));
    output
}
