use crate::domain::model::{CompanyName, ExportBundle, ExportTargets, Item};
use std::borrow::Cow;

/// A row that can be rendered as a tuple of SQL text literals.
pub trait SqlRow {
    fn sql_values(&self) -> Vec<&str>;
}

impl SqlRow for CompanyName {
    fn sql_values(&self) -> Vec<&str> {
        vec![self.as_str()]
    }
}

impl SqlRow for Item {
    fn sql_values(&self) -> Vec<&str> {
        vec![self.item_id.as_str(), self.item_name.as_str()]
    }
}

/// Doubles embedded single quotes so the value can sit inside `'...'`.
pub fn escape_sql_literal(value: &str) -> Cow<'_, str> {
    if value.contains('\'') {
        Cow::Owned(value.replace('\'', "''"))
    } else {
        Cow::Borrowed(value)
    }
}

/// Same as [`render_sql_insert_with`] using [`escape_sql_literal`].
pub fn render_sql_insert<R: SqlRow>(table: &str, columns: &[&str], rows: &[R]) -> Option<String> {
    render_sql_insert_with(table, columns, rows, escape_sql_literal)
}

/// Renders one `INSERT ... ON CONFLICT (<first column>) DO NOTHING;`
/// statement covering all rows, one value tuple per line.
///
/// Returns `None` when there are no rows or no columns, since an empty
/// `VALUES` list is not valid SQL.
pub fn render_sql_insert_with<R, F>(
    table: &str,
    columns: &[&str],
    rows: &[R],
    escape: F,
) -> Option<String>
where
    R: SqlRow,
    F: for<'a> Fn(&'a str) -> Cow<'a, str>,
{
    let conflict_column = columns.first()?;
    if rows.is_empty() {
        return None;
    }

    let tuples: Vec<String> = rows
        .iter()
        .map(|row| {
            let literals: Vec<String> = row
                .sql_values()
                .into_iter()
                .map(|value| format!("'{}'", escape(value)))
                .collect();
            format!("({})", literals.join(", "))
        })
        .collect();

    Some(format!(
        "INSERT INTO {} ({}) VALUES\n{}\nON CONFLICT ({}) DO NOTHING;",
        table,
        columns.join(", "),
        tuples.join(",\n"),
        conflict_column
    ))
}

fn section(table: &str, statement: Option<String>) -> String {
    match statement {
        Some(sql) => format!("-- {} table\n{}", table, sql),
        None => format!("-- {} table\n-- no rows", table),
    }
}

/// Both statements with their comment lines, separated by a blank line.
pub fn render_sql_script(bundle: &ExportBundle, targets: &ExportTargets) -> String {
    let companies = render_sql_insert(
        &targets.companies_table,
        &[targets.company_column.as_str()],
        &bundle.constructions,
    );
    let items = render_sql_insert(
        &targets.items_table,
        &[
            targets.item_id_column.as_str(),
            targets.item_name_column.as_str(),
        ],
        &bundle.items,
    );

    format!(
        "{}\n\n{}\n",
        section(&targets.companies_table, companies),
        section(&targets.items_table, items)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_sql_literal() {
        assert_eq!(escape_sql_literal("Acme"), "Acme");
        assert!(matches!(escape_sql_literal("Acme"), Cow::Borrowed(_)));
        assert_eq!(escape_sql_literal("O'Brien Supplies"), "O''Brien Supplies");
        assert_eq!(escape_sql_literal("''"), "''''");
    }

    #[test]
    fn test_render_company_insert() {
        let companies = vec!["Acme".to_string(), "Beta".to_string()];

        let sql = render_sql_insert("constructions", &["company_name"], &companies).unwrap();

        assert_eq!(
            sql,
            "INSERT INTO constructions (company_name) VALUES\n\
             ('Acme'),\n\
             ('Beta')\n\
             ON CONFLICT (company_name) DO NOTHING;"
        );
    }

    #[test]
    fn test_render_item_insert_escapes_quotes() {
        let items = vec![Item::new("S-1", "O'Brien Supplies")];

        let sql = render_sql_insert("items", &["item_id", "item_name"], &items).unwrap();

        assert!(sql.contains("('S-1', 'O''Brien Supplies')"));
        assert!(sql.ends_with("ON CONFLICT (item_id) DO NOTHING;"));
    }

    #[test]
    fn test_custom_escape_function() {
        let companies = vec!["a\\b".to_string()];

        let sql = render_sql_insert_with("t", &["c"], &companies, |v| Cow::Owned(v.replace('\\', "\\\\")))
            .unwrap();

        assert!(sql.contains("('a\\\\b')"));
    }

    #[test]
    fn test_empty_rows_render_nothing() {
        let none: Vec<Item> = Vec::new();
        assert!(render_sql_insert("items", &["item_id", "item_name"], &none).is_none());
        assert!(render_sql_insert::<CompanyName>("t", &[], &["x".to_string()]).is_none());
    }

    #[test]
    fn test_render_sql_script() {
        let bundle = ExportBundle {
            constructions: vec!["Acme".to_string()],
            items: Vec::new(),
        };

        let script = render_sql_script(&bundle, &ExportTargets::default());

        assert_eq!(
            script,
            "-- constructions table\n\
             INSERT INTO constructions (company_name) VALUES\n\
             ('Acme')\n\
             ON CONFLICT (company_name) DO NOTHING;\n\
             \n\
             -- items table\n\
             -- no rows\n"
        );
    }
}
