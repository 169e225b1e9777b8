use crate::table::Table;
use crate::types::cell::cell_to_string;

/// Formats a table as tab-separated text: one header line of column names,
/// then one line per data row. The template row is not rendered.
pub fn format_table(table: &Table) -> String {
    let header = table.column_names().join("\t");

    let rows = table.data_rows();
    if rows.is_empty() {
        return header;
    }

    let row_lines = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(cell_to_string)
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n{}", header, row_lines)
}

/// Formats the schema as one `index name type` line per column.
pub fn format_schema(table: &Table) -> String {
    table
        .column_names()
        .iter()
        .zip(table.column_types())
        .enumerate()
        .map(|(i, (name, ctype))| format!("{}\t{}\t{}", i, name, ctype))
        .collect::<Vec<_>>()
        .join("\n")
}
