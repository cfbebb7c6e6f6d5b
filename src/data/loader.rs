use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, DataType as _, Reader};
use thiserror::Error;

use super::model::{CellValue, VehicleDataset, VehicleRecord};

// ---------------------------------------------------------------------------
// Column names as they appear in the source sheet
// ---------------------------------------------------------------------------

pub const COL_REG_NO: &str = "Reg No";
pub const COL_VEHICLE_TYPE: &str = "Vehicle Type";
pub const COL_STATUS: &str = "Onroad/Offroad";
pub const COL_ALLOTTED_TO: &str = "Allotted To";
pub const COL_ODOMETER: &str = "Odometer (Closing SPR)";
pub const COL_YEAR: &str = "Year of Manufacture";

/// The six columns the dashboard interprets, in table display order.
pub const CORE_COLUMNS: [&str; 6] = [
    COL_REG_NO,
    COL_VEHICLE_TYPE,
    COL_STATUS,
    COL_ALLOTTED_TO,
    COL_ODOMETER,
    COL_YEAR,
];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Fatal load failure. The dashboard has no fallback data, so any of these
/// aborts session startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open workbook {path}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },
    #[error("failed to read worksheet '{sheet}'")]
    Sheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },
    #[error("worksheet '{sheet}' is missing required column '{column}'")]
    MissingColumn { sheet: String, column: String },
    #[error("worksheet '{sheet}' has no data rows")]
    Empty { sheet: String },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the vehicle deployment table from one named sheet of a workbook.
///
/// The sheet's first row is the header. The first *data* row is a known
/// structural artifact (a duplicate header embedded as data) and is dropped
/// unconditionally. Odometer and year cells are coerced to numbers; a cell
/// that cannot be parsed becomes missing, never an error.
pub fn load_workbook(path: &Path, sheet: &str) -> Result<VehicleDataset, LoadError> {
    let mut workbook = open_workbook_auto(path).map_err(|source| LoadError::Workbook {
        path: path.to_path_buf(),
        source,
    })?;

    let range = workbook
        .worksheet_range(sheet)
        .map_err(|source| LoadError::Sheet {
            sheet: sheet.to_string(),
            source,
        })?;

    let mut rows = range.rows();
    let header = rows.next().ok_or_else(|| LoadError::Empty {
        sheet: sheet.to_string(),
    })?;
    let headers: Vec<String> = header
        .iter()
        .map(|c| c.as_string().unwrap_or_else(|| c.to_string()))
        .collect();
    let columns = ColumnIndex::resolve(&headers, sheet)?;

    let mut records: Vec<VehicleRecord> = rows
        .enumerate()
        .map(|(row_no, row)| parse_row(row_no, row, &columns, &headers))
        .collect();

    if records.is_empty() {
        return Err(LoadError::Empty {
            sheet: sheet.to_string(),
        });
    }
    // The artifact row carries no vehicle data; drop it regardless of content.
    records.remove(0);

    let extra_columns: Vec<String> = columns
        .extra
        .iter()
        .map(|&(_, ref name)| name.clone())
        .collect();

    Ok(VehicleDataset::from_records(records, extra_columns))
}

// ---------------------------------------------------------------------------
// Column resolution
// ---------------------------------------------------------------------------

/// Positions of the six interpreted columns plus the passthrough rest.
struct ColumnIndex {
    reg_no: usize,
    vehicle_type: usize,
    status: usize,
    allotted_to: usize,
    odometer: usize,
    year: usize,
    /// (cell index, column name) for every non-core column.
    extra: Vec<(usize, String)>,
}

impl ColumnIndex {
    fn resolve(headers: &[String], sheet: &str) -> Result<Self, LoadError> {
        let find = |column: &str| -> Result<usize, LoadError> {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| LoadError::MissingColumn {
                    sheet: sheet.to_string(),
                    column: column.to_string(),
                })
        };

        let index = ColumnIndex {
            reg_no: find(COL_REG_NO)?,
            vehicle_type: find(COL_VEHICLE_TYPE)?,
            status: find(COL_STATUS)?,
            allotted_to: find(COL_ALLOTTED_TO)?,
            odometer: find(COL_ODOMETER)?,
            year: find(COL_YEAR)?,
            extra: Vec::new(),
        };
        let core = [
            index.reg_no,
            index.vehicle_type,
            index.status,
            index.allotted_to,
            index.odometer,
            index.year,
        ];
        let extra = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| !core.contains(i))
            .map(|(i, name)| (i, name.clone()))
            .collect();

        Ok(ColumnIndex { extra, ..index })
    }
}

// ---------------------------------------------------------------------------
// Row parsing and coercion
// ---------------------------------------------------------------------------

fn parse_row(row_no: usize, row: &[Data], columns: &ColumnIndex, headers: &[String]) -> VehicleRecord {
    static EMPTY: Data = Data::Empty;
    let cell = |idx: usize| row.get(idx).unwrap_or(&EMPTY);

    let odometer = coerce_f64(cell(columns.odometer));
    if odometer.is_none() && !cell(columns.odometer).is_empty() {
        log::debug!(
            "row {row_no}: unparseable {} value {:?}, treating as missing",
            headers[columns.odometer],
            cell(columns.odometer)
        );
    }
    let year = coerce_year(cell(columns.year));
    if year.is_none() && !cell(columns.year).is_empty() {
        log::debug!(
            "row {row_no}: unparseable {} value {:?}, treating as missing",
            headers[columns.year],
            cell(columns.year)
        );
    }

    let extra = columns
        .extra
        .iter()
        .map(|&(idx, ref name)| (name.clone(), cell_value(cell(idx))))
        .collect();

    VehicleRecord {
        reg_no: cell_string(cell(columns.reg_no)),
        vehicle_type: cell_string(cell(columns.vehicle_type)),
        status: cell_string(cell(columns.status)),
        allotted_to: cell_string(cell(columns.allotted_to)),
        odometer_closing: odometer,
        year_of_manufacture: year,
        extra,
    }
}

/// A trimmed non-empty string, or `None` for blank cells.
fn cell_string(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty => return None,
        Data::String(s) => s.trim().to_string(),
        other => other.to_string(),
    };
    (!text.is_empty()).then_some(text)
}

/// Numeric coercion: numbers pass through, numeric-looking text parses,
/// everything else is missing.
fn coerce_f64(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().parse::<f64>().ok(),
        Data::DateTime(dt) => Some(dt.as_f64()),
        _ => None,
    }
}

/// Years are stored as whole numbers but often typed as floats by the
/// spreadsheet; truncate toward zero after the usual coercion.
fn coerce_year(cell: &Data) -> Option<i32> {
    coerce_f64(cell).map(|f| f as i32)
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Null,
        Data::String(s) => CellValue::String(s.clone()),
        Data::Float(f) => CellValue::Float(*f),
        Data::Int(i) => CellValue::Integer(*i),
        Data::Bool(b) => CellValue::Bool(*b),
        other => CellValue::String(other.to_string()),
    }
}
