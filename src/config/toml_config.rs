use crate::core::ConfigProvider;
use crate::domain::model::{ExportTargets, MissingCellPolicy};
use crate::utils::error::{ExportError, Result};
use crate::utils::validation::{
    validate_file_extensions, validate_non_empty_string, validate_path, validate_sql_identifier,
    Validate, SUPPORTED_SOURCE_EXTENSIONS,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based configuration. Every section is optional and falls back to
/// the same defaults as the command line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub columns: ColumnConfig,
    pub output: OutputConfig,
    pub target: ExportTargets,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub base_dir: String,
    pub companies_path: String,
    pub items_path: String,
    pub missing_cells: MissingCellPolicy,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_dir: ".".to_string(),
            companies_path: "constructions.xlsx".to_string(),
            items_path: "items.xlsx".to_string(),
            missing_cells: MissingCellPolicy::Error,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    pub company: String,
    pub item_id: String,
    pub item_name: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            company: "업체명".to_string(),
            item_id: "item_id".to_string(),
            item_name: "item_name".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub json_path: String,
    pub sql_path: String,
    pub write_sql: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json_path: "excel_data.json".to_string(),
            sql_path: "initial_data.sql".to_string(),
            write_sql: true,
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ExportError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left untouched.
    fn substitute_env_vars(content: &str) -> String {
        let re = match Regex::new(r"\$\{([^}]+)\}") {
            Ok(re) => re,
            Err(_) => return content.to_string(),
        };

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn base_dir(&self) -> &str {
        &self.source.base_dir
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("source.base_dir", &self.source.base_dir)?;
        validate_path("source.companies_path", &self.source.companies_path)?;
        validate_path("source.items_path", &self.source.items_path)?;
        validate_file_extensions(
            "source.companies_path",
            &[self.source.companies_path.as_str()],
            SUPPORTED_SOURCE_EXTENSIONS,
        )?;
        validate_file_extensions(
            "source.items_path",
            &[self.source.items_path.as_str()],
            SUPPORTED_SOURCE_EXTENSIONS,
        )?;

        validate_non_empty_string("columns.company", &self.columns.company)?;
        validate_non_empty_string("columns.item_id", &self.columns.item_id)?;
        validate_non_empty_string("columns.item_name", &self.columns.item_name)?;

        validate_path("output.json_path", &self.output.json_path)?;
        if self.output.write_sql {
            validate_path("output.sql_path", &self.output.sql_path)?;
        }

        validate_sql_identifier("target.companies_table", &self.target.companies_table)?;
        validate_sql_identifier("target.company_column", &self.target.company_column)?;
        validate_sql_identifier("target.items_table", &self.target.items_table)?;
        validate_sql_identifier("target.item_id_column", &self.target.item_id_column)?;
        validate_sql_identifier("target.item_name_column", &self.target.item_name_column)?;

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn companies_path(&self) -> &str {
        &self.source.companies_path
    }

    fn items_path(&self) -> &str {
        &self.source.items_path
    }

    fn company_column(&self) -> &str {
        &self.columns.company
    }

    fn item_id_column(&self) -> &str {
        &self.columns.item_id
    }

    fn item_name_column(&self) -> &str {
        &self.columns.item_name
    }

    fn output_json_path(&self) -> &str {
        &self.output.json_path
    }

    fn output_sql_path(&self) -> Option<&str> {
        if self.output.write_sql {
            Some(&self.output.sql_path)
        } else {
            None
        }
    }

    fn missing_cells(&self) -> MissingCellPolicy {
        self.source.missing_cells
    }

    fn targets(&self) -> ExportTargets {
        self.target.clone()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
