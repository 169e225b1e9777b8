use super::*;

#[test]
fn test_matching_row_is_appended() {
    let mut table = contact_table();

    table.add_row(john_row()).unwrap();

    assert_eq!(table.row_count(), 1);
    assert_eq!(table.data_rows()[0], john_row());
}

#[test]
fn test_mismatched_cell_is_rejected_and_nothing_appended() {
    let mut table = seeded_contact_table();

    // Email cell tagged as an integer.
    let err = table
        .add_row(vec![
            Cell::Text("John2".to_string()),
            Cell::Int64(41),
            Cell::Int64(2),
        ])
        .unwrap_err();

    assert_eq!(
        err,
        SchemaError::TypeMismatch {
            column: 2,
            expected: ColumnType::Text,
            actual: ColumnType::Int64,
            value: "2".to_string(),
        }
    );
    assert_eq!(table.row_count(), 1);
}

#[test]
fn test_mismatch_reports_first_offending_column() {
    let mut table = seeded_contact_table();

    let err = table
        .add_row(vec![
            Cell::Int64(1),
            Cell::Text("oops".to_string()),
            Cell::Int64(2),
        ])
        .unwrap_err();

    // Column 0 fails first even though later cells are wrong too.
    assert_eq!(
        err,
        SchemaError::TypeMismatch {
            column: 0,
            expected: ColumnType::Text,
            actual: ColumnType::Int64,
            value: "1".to_string(),
        }
    );
}

#[test]
fn test_first_row_on_rowless_table_is_never_type_checked() {
    // A table that has never seen add_column has no template row, so the
    // very first row is accepted without any check and becomes the
    // reference for every row after it.
    let mut table = Table::new();
    let first = vec![Cell::Int64(1), Cell::Text("x".to_string())];

    table.add_row(first.clone()).unwrap();
    assert_eq!(table.rows().to_vec(), vec![first]);

    let err = table
        .add_row(vec![Cell::Text("y".to_string()), Cell::Text("z".to_string())])
        .unwrap_err();
    assert_eq!(
        err,
        SchemaError::TypeMismatch {
            column: 0,
            expected: ColumnType::Int64,
            actual: ColumnType::Text,
            value: "y".to_string(),
        }
    );
}

#[test]
fn test_row_arity_must_match_template() {
    let mut table = contact_table();

    let short = table.add_row(vec![Cell::Text("John".to_string())]);
    assert_eq!(
        short.unwrap_err(),
        SchemaError::IndexOutOfRange { index: 1, len: 3 }
    );

    let mut long = john_row();
    long.push(Cell::Bool(true));
    assert_eq!(
        table.add_row(long).unwrap_err(),
        SchemaError::IndexOutOfRange { index: 4, len: 3 }
    );

    assert_eq!(table.row_count(), 0);
}

#[test]
fn test_update_cell_overwrites_in_place() {
    let mut table = seeded_contact_table();

    table.update_cell(1, 1, Cell::Int64(31)).unwrap();

    assert_eq!(table.data_rows()[0][1], Cell::Int64(31));
    assert_eq!(table.data_rows()[0][0], Cell::Text("John".to_string()));
}

#[test]
fn test_update_cell_rejects_wrong_tag() {
    let mut table = seeded_contact_table();

    let err = table
        .update_cell(1, 1, Cell::Text("thirty".to_string()))
        .unwrap_err();

    assert_eq!(
        err,
        SchemaError::TypeMismatch {
            column: 1,
            expected: ColumnType::Int64,
            actual: ColumnType::Text,
            value: "thirty".to_string(),
        }
    );
    assert_eq!(table.data_rows()[0][1], Cell::Int64(30));
}

#[test]
fn test_update_cell_checks_both_indices() {
    let mut table = seeded_contact_table();

    assert_eq!(
        table.update_cell(1, 9, Cell::Int64(0)).unwrap_err(),
        SchemaError::IndexOutOfRange { index: 9, len: 3 }
    );
    assert_eq!(
        table.update_cell(9, 1, Cell::Int64(0)).unwrap_err(),
        SchemaError::IndexOutOfRange { index: 9, len: 2 }
    );
}
