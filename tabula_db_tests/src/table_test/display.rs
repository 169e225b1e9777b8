use super::*;

#[test]
fn test_format_table_skips_template_row() {
    let table = seeded_contact_table();
    assert_eq!(
        format_table(&table),
        "name\tage\temail\nJohn\t30\temail@example.com"
    );
}

#[test]
fn test_format_table_without_data_is_just_the_header() {
    let table = contact_table();
    assert_eq!(format_table(&table), "name\tage\temail");
}

#[test]
fn test_format_schema_lists_indexed_columns() {
    let table = contact_table();
    assert_eq!(
        format_schema(&table),
        "0\tname\ttext\n1\tage\tint64\n2\temail\ttext"
    );
}

#[test]
fn test_table_json_round_trip() -> anyhow::Result<()> {
    let table = seeded_contact_table();

    let json = serde_json::to_string(&table)?;
    let restored: Table = serde_json::from_str(&json)?;

    assert_eq!(restored, table);
    Ok(())
}

#[test]
fn test_parse_cell_round_trips_each_type() -> anyhow::Result<()> {
    for (ctype, token, cell) in [
        (ColumnType::Int64, "-42", Cell::Int64(-42)),
        (ColumnType::Text, "hello", Cell::Text("hello".to_string())),
        (ColumnType::Float64, "2.5", Cell::Float64(2.5)),
        (ColumnType::Bool, "true", Cell::Bool(true)),
        (ColumnType::Uint64, "42", Cell::Uint64(42)),
        (ColumnType::Byte, "255", Cell::Byte(255)),
        (ColumnType::Rune, "q", Cell::Rune('q')),
    ] {
        assert_eq!(parse_cell(ctype, token)?, cell);
    }
    Ok(())
}

#[test]
fn test_parse_cell_rejects_bad_tokens() {
    assert!(parse_cell(ColumnType::Int64, "abc").is_err());
    assert!(parse_cell(ColumnType::Uint64, "-1").is_err());
    assert!(parse_cell(ColumnType::Byte, "256").is_err());
    assert!(parse_cell(ColumnType::Bool, "maybe").is_err());
    assert!(parse_cell(ColumnType::Rune, "ab").is_err());
}
