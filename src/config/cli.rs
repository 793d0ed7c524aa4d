use crate::core::ConfigProvider;
use crate::domain::model::MissingCellPolicy;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extensions, validate_non_empty_string, validate_path, Validate,
    SUPPORTED_SOURCE_EXTENSIONS,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "excel-sql-export")]
#[command(about = "Export company names and items from spreadsheets as SQL and JSON")]
pub struct CliConfig {
    /// Directory relative paths are resolved against
    #[arg(long, default_value = ".")]
    pub base_dir: String,

    #[arg(long, default_value = "constructions.xlsx")]
    pub companies_path: String,

    #[arg(long, default_value = "items.xlsx")]
    pub items_path: String,

    #[arg(long, default_value = "excel_data.json")]
    pub output_json: String,

    #[arg(long, default_value = "initial_data.sql")]
    pub output_sql: String,

    /// Do not write the SQL script to a file
    #[arg(long)]
    pub no_sql_file: bool,

    #[arg(long, default_value = "업체명")]
    pub company_column: String,

    #[arg(long, default_value = "item_id")]
    pub item_id_column: String,

    #[arg(long, default_value = "item_name")]
    pub item_name_column: String,

    /// What to do with empty cells in the columns above
    #[arg(long, value_enum, default_value_t = MissingCellPolicy::Error)]
    pub missing_cells: MissingCellPolicy,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit log lines as JSON")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn companies_path(&self) -> &str {
        &self.companies_path
    }

    fn items_path(&self) -> &str {
        &self.items_path
    }

    fn company_column(&self) -> &str {
        &self.company_column
    }

    fn item_id_column(&self) -> &str {
        &self.item_id_column
    }

    fn item_name_column(&self) -> &str {
        &self.item_name_column
    }

    fn output_json_path(&self) -> &str {
        &self.output_json
    }

    fn output_sql_path(&self) -> Option<&str> {
        if self.no_sql_file {
            None
        } else {
            Some(&self.output_sql)
        }
    }

    fn missing_cells(&self) -> MissingCellPolicy {
        self.missing_cells
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("base_dir", &self.base_dir)?;
        validate_path("companies_path", &self.companies_path)?;
        validate_path("items_path", &self.items_path)?;
        validate_path("output_json", &self.output_json)?;
        if !self.no_sql_file {
            validate_path("output_sql", &self.output_sql)?;
        }

        validate_file_extensions(
            "companies_path",
            &[self.companies_path.as_str()],
            SUPPORTED_SOURCE_EXTENSIONS,
        )?;
        validate_file_extensions(
            "items_path",
            &[self.items_path.as_str()],
            SUPPORTED_SOURCE_EXTENSIONS,
        )?;

        validate_non_empty_string("company_column", &self.company_column)?;
        validate_non_empty_string("item_id_column", &self.item_id_column)?;
        validate_non_empty_string("item_name_column", &self.item_name_column)?;
        Ok(())
    }
}
