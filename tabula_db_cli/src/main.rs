use std::io::{self, Write};

use anyhow::{Context, bail};
use tabula_db_core::format::{format_schema, format_table};
use tabula_db_core::types::cell::parse_cell;
use tabula_db_core::types::column_type::parse_column_type;
use tabula_db_core::{Cell, ColumnType, Table};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    tracing::info!("tabula_db_cli started");

    let mut table = Table::new();

    println!("tabula_db_cli (type 'help' or 'exit')");

    loop {
        print!("db> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            println!("Failed to read input");
            continue;
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        match execute(input, &mut table) {
            Ok(out) => println!("{out}"),
            Err(err) => println!("{err:#}"),
        }
    }
}

fn execute(input: &str, table: &mut Table) -> anyhow::Result<String> {
    let tokens = tokenize(input)?;
    let keyword = tokens[0].to_lowercase();

    match keyword.as_str() {
        "help" => Ok(help_text()),
        "addcol" => cmd_addcol(&tokens, table),
        "addrow" => cmd_addrow(&tokens, table),
        "rename" => cmd_rename(&tokens, table),
        "settype" => cmd_settype(&tokens, table),
        "setcell" => cmd_setcell(&tokens, table),
        "show" => Ok(format_table(table)),
        "schema" => Ok(format_schema(table)),
        "dump" => serde_json::to_string_pretty(table).context("failed to serialize table"),
        "demo" => Ok(run_demo()),
        _ => bail!("Unknown command '{}'; type 'help'", tokens[0]),
    }
}

fn help_text() -> String {
    [
        "Commands:",
        "  addcol <name> <type>        -> append a column (types: int64 text float64 bool uint64 byte rune)",
        "  addrow <v1> <v2> ...        -> append a row, one value per column",
        "  rename <index> <name>       -> rename a column",
        "  settype <index> <type>      -> change a column's type (all-or-nothing)",
        "  setcell <row> <col> <value> -> overwrite one cell",
        "  show                        -> print the table",
        "  schema                      -> print the schema",
        "  dump                        -> print the table as JSON",
        "  demo                        -> run the scripted walkthrough",
        "  exit|quit                   -> quit",
    ]
    .join("\n")
}

fn cmd_addcol(tokens: &[String], table: &mut Table) -> anyhow::Result<String> {
    if tokens.len() != 3 {
        bail!("Usage: addcol <name> <type>");
    }
    let ctype = parse_column_type(&tokens[2])?;
    table.add_column(tokens[1].clone(), ctype);
    Ok(format!("added column {} ({})", tokens[1], ctype))
}

fn cmd_addrow(tokens: &[String], table: &mut Table) -> anyhow::Result<String> {
    let values = &tokens[1..];
    if table.column_count() == 0 {
        bail!("No columns yet; use addcol first");
    }
    if values.len() != table.column_count() {
        bail!(
            "Expected {} values but got {}",
            table.column_count(),
            values.len()
        );
    }
    let row: Vec<Cell> = table
        .column_types()
        .to_vec()
        .into_iter()
        .zip(values)
        .map(|(ctype, token)| parse_cell(ctype, token))
        .collect::<Result<_, _>>()?;
    table.add_row(row)?;
    Ok("inserted 1 row".to_string())
}

fn cmd_rename(tokens: &[String], table: &mut Table) -> anyhow::Result<String> {
    if tokens.len() != 3 {
        bail!("Usage: rename <index> <name>");
    }
    let index = parse_index(&tokens[1])?;
    table.rename_column(index, tokens[2].clone())?;
    Ok(format!("renamed column {} to {}", index, tokens[2]))
}

fn cmd_settype(tokens: &[String], table: &mut Table) -> anyhow::Result<String> {
    if tokens.len() != 3 {
        bail!("Usage: settype <index> <type>");
    }
    let index = parse_index(&tokens[1])?;
    let ctype = parse_column_type(&tokens[2])?;
    table.change_column_type(index, ctype)?;
    Ok(format!("column {} is now {}", index, ctype))
}

fn cmd_setcell(tokens: &[String], table: &mut Table) -> anyhow::Result<String> {
    if tokens.len() != 4 {
        bail!("Usage: setcell <row> <col> <value>");
    }
    let row = parse_index(&tokens[1])?;
    let col = parse_index(&tokens[2])?;
    let ctype = *table
        .column_types()
        .get(col)
        .context("column index out of range")?;
    table.update_cell(row, col, parse_cell(ctype, &tokens[3])?)?;
    Ok(format!("updated cell ({row}, {col})"))
}

fn parse_index(token: &str) -> anyhow::Result<usize> {
    token
        .parse()
        .with_context(|| format!("Expected index but got '{token}'"))
}

/// Scripted walkthrough of the engine: a type-mismatched row is rejected,
/// a migration over incompatible data rolls back, and a migration over an
/// empty column commits.
fn run_demo() -> String {
    let mut out = Vec::new();
    let mut table = Table::new();
    table.add_column("name", ColumnType::Text);
    table.add_column("age", ColumnType::Int64);
    table.add_column("email", ColumnType::Text);
    out.push(format!("columns: {:?}", table.column_names()));

    let row = vec![
        Cell::Text("John".to_string()),
        Cell::Int64(30),
        Cell::Text("email@example.com".to_string()),
    ];
    match table.add_row(row) {
        Ok(()) => out.push("row accepted".to_string()),
        Err(err) => out.push(format!("unexpected: {err}")),
    }

    // Email cell tagged as an integer; the gate rejects it.
    let bad_row = vec![
        Cell::Text("John2".to_string()),
        Cell::Int64(41),
        Cell::Int64(2),
    ];
    match table.add_row(bad_row) {
        Ok(()) => out.push("unexpected: bad row accepted".to_string()),
        Err(err) => out.push(format!("row rejected: {err}")),
    }

    match table.rename_column(2, "contact") {
        Ok(()) => out.push(format!("columns: {:?}", table.column_names())),
        Err(err) => out.push(format!("unexpected: {err}")),
    }

    // The stored email is text, so retyping the column to int64 rolls back.
    match table.change_column_type(2, ColumnType::Int64) {
        Ok(()) => out.push("unexpected: migration committed".to_string()),
        Err(err) => out.push(format!("migration rolled back: {err}")),
    }
    out.push(format_table(&table));

    // On a table whose contact column holds no data yet, the same migration
    // commits, and the integer row is now welcome.
    let mut fresh = Table::new();
    fresh.add_column("name", ColumnType::Text);
    fresh.add_column("age", ColumnType::Int64);
    fresh.add_column("contact", ColumnType::Text);
    match fresh.change_column_type(2, ColumnType::Int64) {
        Ok(()) => out.push("fresh table: migration committed".to_string()),
        Err(err) => out.push(format!("unexpected: {err}")),
    }
    let retry = vec![
        Cell::Text("John2".to_string()),
        Cell::Int64(41),
        Cell::Int64(2),
    ];
    match fresh.add_row(retry) {
        Ok(()) => out.push("fresh table: integer contact accepted".to_string()),
        Err(err) => out.push(format!("unexpected: {err}")),
    }
    out.push(format_table(&fresh));

    out.join("\n")
}

fn tokenize(input: &str) -> anyhow::Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in input.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
            }
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    tokens.push(current.clone());
                    current.clear();
                }
            }
            _ => current.push(ch),
        }
    }

    if in_quotes {
        bail!("Unclosed quote (\") in input");
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    if tokens.is_empty() {
        bail!("Empty command");
    }

    Ok(tokens)
}
