use crate::adapters::tabular::{Cell, Table, TableRow};
use crate::domain::model::{CompanyName, Item, MissingCellPolicy};
use crate::utils::error::{ExportError, Result};
use std::collections::HashSet;

fn cell_text(
    table: &Table,
    row: &TableRow,
    index: usize,
    column: &str,
    policy: MissingCellPolicy,
) -> Result<String> {
    match row.cell(index) {
        Cell::Text(value) => Ok(value.clone()),
        Cell::Invalid(value) => Err(ExportError::source_read(
            table.path(),
            format!("error value {} at row {}, column '{}'", value, row.line, column),
        )),
        Cell::Empty => match policy {
            MissingCellPolicy::Empty => Ok(String::new()),
            MissingCellPolicy::Error => Err(ExportError::MissingValueError {
                path: table.path().to_string(),
                row: row.line,
                column: column.to_string(),
            }),
        },
    }
}

/// Distinct values of `column`, in order of first appearance.
pub fn load_companies(
    table: &Table,
    column: &str,
    policy: MissingCellPolicy,
) -> Result<Vec<CompanyName>> {
    let index = table.column_index(column)?;

    let mut seen = HashSet::new();
    let mut companies = Vec::new();
    for row in table.rows() {
        let name = cell_text(table, row, index, column, policy)?;
        if seen.insert(name.clone()) {
            companies.push(name);
        }
    }

    tracing::debug!(
        "{} rows in '{}' -> {} distinct companies",
        table.rows().len(),
        table.path(),
        companies.len()
    );
    Ok(companies)
}

/// One item per data row, in row order. Duplicate ids are kept.
pub fn load_items(
    table: &Table,
    id_column: &str,
    name_column: &str,
    policy: MissingCellPolicy,
) -> Result<Vec<Item>> {
    let id_index = table.column_index(id_column)?;
    let name_index = table.column_index(name_column)?;

    table
        .rows()
        .iter()
        .map(|row| {
            Ok(Item {
                item_id: cell_text(table, row, id_index, id_column, policy)?,
                item_name: cell_text(table, row, name_index, name_column, policy)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::tabular::read_table;

    fn csv_table(path: &str, content: &str) -> Table {
        read_table(path, content.as_bytes().to_vec()).unwrap()
    }

    #[test]
    fn test_companies_deduplicated_in_first_seen_order() {
        let table = csv_table("constructions.csv", "업체명\nAcme\nAcme\nBeta\nAcme\n대림건설\nBeta\n");

        let companies = load_companies(&table, "업체명", MissingCellPolicy::Error).unwrap();

        assert_eq!(companies, vec!["Acme", "Beta", "대림건설"]);
    }

    #[test]
    fn test_items_keep_row_order_and_duplicates() {
        let table = csv_table(
            "items.csv",
            "item_name,item_id\nBolt,B-1\nNut,N-1\nBolt again,B-1\n",
        );

        let items = load_items(&table, "item_id", "item_name", MissingCellPolicy::Error).unwrap();

        assert_eq!(
            items,
            vec![
                Item::new("B-1", "Bolt"),
                Item::new("N-1", "Nut"),
                Item::new("B-1", "Bolt again"),
            ]
        );
    }

    #[test]
    fn test_missing_column() {
        let table = csv_table("items.csv", "item_id,name\n1,a\n");

        let err = load_items(&table, "item_id", "item_name", MissingCellPolicy::Error).unwrap_err();

        assert!(matches!(
            err,
            ExportError::MissingColumnError { ref column, .. } if column == "item_name"
        ));
    }

    #[test]
    fn test_missing_cell_policy() {
        let table = csv_table("items.csv", "item_id,item_name\nA-1,Bolt\nA-2,\n");

        let err = load_items(&table, "item_id", "item_name", MissingCellPolicy::Error).unwrap_err();
        match err {
            ExportError::MissingValueError { row, column, .. } => {
                assert_eq!(row, 3);
                assert_eq!(column, "item_name");
            }
            other => panic!("expected MissingValueError, got {:?}", other),
        }

        let items = load_items(&table, "item_id", "item_name", MissingCellPolicy::Empty).unwrap();
        assert_eq!(items[1], Item::new("A-2", ""));
    }

    #[test]
    fn test_empty_company_cells_collapse_to_one_entry() {
        let table = csv_table("constructions.csv", "업체명,비고\n,x\nAcme,\n,y\n");

        let companies = load_companies(&table, "업체명", MissingCellPolicy::Empty).unwrap();

        assert_eq!(companies, vec!["", "Acme"]);
    }
}
