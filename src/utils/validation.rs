use crate::utils::error::{ExportError, Result};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Extensions the tabular reader understands.
pub const SUPPORTED_SOURCE_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods", "csv"];

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ExportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ExportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extensions(
    field_name: &str,
    files: &[&str],
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    for file in files {
        match std::path::Path::new(file)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            Some(extension) if allowed_set.contains(extension.to_lowercase().as_str()) => {}
            Some(extension) => {
                return Err(ExportError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.to_string(),
                    reason: format!(
                        "Unsupported file extension: {}. Allowed extensions: {}",
                        extension,
                        allowed_extensions.join(", ")
                    ),
                });
            }
            None => {
                return Err(ExportError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.to_string(),
                    reason: "File has no extension or invalid filename".to_string(),
                });
            }
        }
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ExportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid identifier regex"))
}

/// Table and column names are spliced into SQL unquoted, so only plain
/// identifiers are accepted.
pub fn validate_sql_identifier(field_name: &str, value: &str) -> Result<()> {
    if !identifier_pattern().is_match(value) {
        return Err(ExportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Must be a plain SQL identifier ([A-Za-z_][A-Za-z0-9_]*)".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_json", "excel_data.json").is_ok());
        assert!(validate_path("output_json", "").is_err());
        assert!(validate_path("output_json", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_file_extensions() {
        let files = ["constructions.xlsx", "items.CSV"];
        assert!(validate_file_extensions("sources", &files, SUPPORTED_SOURCE_EXTENSIONS).is_ok());

        assert!(validate_file_extensions("sources", &["data.txt"], SUPPORTED_SOURCE_EXTENSIONS).is_err());
        assert!(validate_file_extensions("sources", &["Makefile"], SUPPORTED_SOURCE_EXTENSIONS).is_err());
    }

    #[test]
    fn test_validate_sql_identifier() {
        assert!(validate_sql_identifier("target.items_table", "items").is_ok());
        assert!(validate_sql_identifier("target.items_table", "_staging2").is_ok());
        assert!(validate_sql_identifier("target.items_table", "2items").is_err());
        assert!(validate_sql_identifier("target.items_table", "items; DROP TABLE x").is_err());
        assert!(validate_sql_identifier("target.items_table", "").is_err());
    }
}
