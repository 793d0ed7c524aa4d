use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to read source '{path}': {message}")]
    SourceReadError { path: String, message: String },

    #[error("Column '{column}' not found in '{path}' (available: {})", .available.join(", "))]
    MissingColumnError {
        path: String,
        column: String,
        available: Vec<String>,
    },

    #[error("Missing value in '{path}' at row {row}, column '{column}'")]
    MissingValueError {
        path: String,
        row: usize,
        column: String,
    },

    #[error("JSON encoding error: {0}")]
    EncodingError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ExportError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Source,
    Schema,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ExportError {
    pub fn source_read(path: impl Into<String>, message: impl std::fmt::Display) -> Self {
        ExportError::SourceReadError {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ExportError::SourceReadError { .. } => ErrorCategory::Source,
            ExportError::MissingColumnError { .. } | ExportError::MissingValueError { .. } => {
                ErrorCategory::Schema
            }
            ExportError::EncodingError(_) | ExportError::IoError(_) => ErrorCategory::Output,
            ExportError::ConfigValidationError { .. }
            | ExportError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // Fixing the spreadsheet and re-running is enough
            ErrorCategory::Schema => ErrorSeverity::Medium,
            ErrorCategory::Source | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ExportError::SourceReadError { path, .. } => format!(
                "Check that '{}' exists and is a readable .xlsx/.xls/.ods/.csv file",
                path
            ),
            ExportError::MissingColumnError { column, .. } => format!(
                "Add a '{}' header to the first row of the sheet, or pass the correct column name",
                column
            ),
            ExportError::MissingValueError { .. } => {
                "Fill in the empty cell, or re-run with --missing-cells empty".to_string()
            }
            ExportError::EncodingError(_) => "Report this as a bug".to_string(),
            ExportError::IoError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            ExportError::ConfigValidationError { field, .. }
            | ExportError::InvalidConfigValueError { field, .. } => {
                format!("Review the '{}' setting", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Source => format!("Could not read input: {}", self),
            ErrorCategory::Schema => format!("Unexpected spreadsheet layout: {}", self),
            ErrorCategory::Output => format!("Could not write output: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_message_lists_available_headers() {
        let err = ExportError::MissingColumnError {
            path: "items.xlsx".to_string(),
            column: "item_id".to_string(),
            available: vec!["id".to_string(), "name".to_string()],
        };

        assert_eq!(
            err.to_string(),
            "Column 'item_id' not found in 'items.xlsx' (available: id, name)"
        );
        assert_eq!(err.category(), ErrorCategory::Schema);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_severity_by_category() {
        let read = ExportError::source_read("constructions.xlsx", "bad zip");
        assert_eq!(read.severity(), ErrorSeverity::High);
        assert!(read.recovery_suggestion().contains("constructions.xlsx"));

        let io = ExportError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(io.severity(), ErrorSeverity::Critical);
        assert_eq!(io.exit_code(), 3);
    }
}
