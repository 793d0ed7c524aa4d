use serde::{Deserialize, Serialize};

pub type CompanyName = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub item_id: String,
    pub item_name: String,
}

impl Item {
    pub fn new(item_id: impl Into<String>, item_name: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            item_name: item_name.into(),
        }
    }
}

/// Everything extracted in one run; this is the shape of the JSON output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportBundle {
    pub constructions: Vec<CompanyName>,
    pub items: Vec<Item>,
}

/// Destination tables the INSERT statements are rendered for. The first
/// column of each table is the one carrying the unique constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportTargets {
    pub companies_table: String,
    pub company_column: String,
    pub items_table: String,
    pub item_id_column: String,
    pub item_name_column: String,
}

impl Default for ExportTargets {
    fn default() -> Self {
        Self {
            companies_table: "constructions".to_string(),
            company_column: "company_name".to_string(),
            items_table: "items".to_string(),
            item_id_column: "item_id".to_string(),
            item_name_column: "item_name".to_string(),
        }
    }
}

/// How empty cells in a required column are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum MissingCellPolicy {
    #[default]
    Error,
    Empty,
}

#[derive(Debug, Clone)]
pub struct ExportOutput {
    pub bundle: ExportBundle,
    pub report: String,
    pub sql: String,
}

#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub report: String,
    pub json_path: String,
    pub sql_path: Option<String>,
    pub company_count: usize,
    pub item_count: usize,
}
