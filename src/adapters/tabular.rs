use crate::utils::error::{ExportError, Result};
use calamine::{Data, DataType, Ods, Reader, Xls, Xlsb, Xlsx};
use chrono::{NaiveDateTime, NaiveTime};
use std::io::Cursor;
use std::path::Path;

type Buffer = Cursor<Vec<u8>>;

/// A single cell after conversion from the source format.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    /// Spreadsheet error value such as `#N/A`.
    Invalid(String),
}

#[derive(Debug, Clone)]
pub struct TableRow {
    /// 1-based row number as shown by a spreadsheet program.
    pub line: usize,
    pub cells: Vec<Cell>,
}

impl TableRow {
    pub fn cell(&self, index: usize) -> &Cell {
        self.cells.get(index).unwrap_or(&Cell::Empty)
    }
}

/// First sheet of a tabular source: a header row and the data rows below it.
#[derive(Debug, Clone)]
pub struct Table {
    path: String,
    headers: Vec<String>,
    rows: Vec<TableRow>,
}

impl Table {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn column_index(&self, column: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| ExportError::MissingColumnError {
                path: self.path.clone(),
                column: column.to_string(),
                available: self
                    .headers
                    .iter()
                    .filter(|h| !h.is_empty())
                    .cloned()
                    .collect(),
            })
    }
}

/// Parses `bytes` according to the extension of `path`.
pub fn read_table(path: &str, bytes: Vec<u8>) -> Result<Table> {
    let extension = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    tracing::debug!("Parsing '{}' as {} ({} bytes)", path, extension, bytes.len());

    match extension.as_str() {
        "csv" => read_csv(path, &bytes),
        "xlsx" | "xlsm" => read_workbook::<Xlsx<Buffer>>(path, bytes),
        "xlsb" => read_workbook::<Xlsb<Buffer>>(path, bytes),
        "xls" => read_workbook::<Xls<Buffer>>(path, bytes),
        "ods" => read_workbook::<Ods<Buffer>>(path, bytes),
        other => Err(ExportError::source_read(
            path,
            format!("unsupported file format '{}'", other),
        )),
    }
}

fn read_workbook<R>(path: &str, bytes: Vec<u8>) -> Result<Table>
where
    R: Reader<Buffer>,
    R::Error: std::fmt::Display,
{
    let mut workbook = R::new(Cursor::new(bytes)).map_err(|e| ExportError::source_read(path, e))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ExportError::source_read(path, "workbook has no worksheets"))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| ExportError::source_read(path, e))?;

    let first_line = range.start().map(|(row, _)| row as usize + 1).unwrap_or(1);
    let mut rows = range.rows();

    let headers: Vec<String> = rows
        .next()
        .ok_or_else(|| ExportError::source_read(path, format!("sheet '{}' has no header row", sheet_name)))?
        .iter()
        .map(|cell| match convert_cell(cell) {
            Cell::Text(s) => s.trim().to_string(),
            _ => String::new(),
        })
        .collect();

    let data_rows = rows
        .enumerate()
        .map(|(offset, row)| TableRow {
            line: first_line + 1 + offset,
            cells: row.iter().map(convert_cell).collect(),
        })
        .filter(|row| !is_blank(row))
        .collect();

    Ok(Table {
        path: path.to_string(),
        headers,
        rows: data_rows,
    })
}

fn read_csv(path: &str, bytes: &[u8]) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ExportError::source_read(path, e))?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| ExportError::source_read(path, e))?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(index + 2);

        let row = TableRow {
            line,
            cells: record
                .iter()
                .map(|value| {
                    if value.is_empty() {
                        Cell::Empty
                    } else {
                        Cell::Text(value.to_string())
                    }
                })
                .collect(),
        };

        if !is_blank(&row) {
            rows.push(row);
        }
    }

    Ok(Table {
        path: path.to_string(),
        headers,
        rows,
    })
}

fn is_blank(row: &TableRow) -> bool {
    row.cells.iter().all(|c| *c == Cell::Empty)
}

fn convert_cell(cell: &Data) -> Cell {
    match cell {
        Data::Empty => Cell::Empty,
        Data::String(s) if s.is_empty() => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(i) => Cell::Text(i.to_string()),
        Data::Float(f) => Cell::Text(format_float(*f)),
        Data::Bool(b) => Cell::Text(b.to_string()),
        Data::Error(e) => Cell::Invalid(e.to_string()),
        Data::DateTime(_) | Data::DateTimeIso(_) => match cell.as_datetime() {
            Some(dt) => Cell::Text(format_datetime(dt)),
            None => Cell::Text(cell.to_string()),
        },
        other => Cell::Text(other.to_string()),
    }
}

fn format_datetime(dt: NaiveDateTime) -> String {
    if dt.time() == NaiveTime::MIN {
        dt.format("%Y-%m-%d").to_string()
    } else {
        dt.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

// Spreadsheets store every number as a float; ids like 1001 must not come out as "1001.0".
fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
