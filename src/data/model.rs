use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single passthrough cell
// ---------------------------------------------------------------------------

/// A dynamically-typed value for spreadsheet columns the dashboard does not
/// interpret. Carried through unchanged and rendered as text in the table.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// VehicleRecord – one row of the source sheet
// ---------------------------------------------------------------------------

/// A single vehicle deployment record (one data row of the source sheet).
///
/// `status` is expected to be "Onroad" or "Offroad" but is never validated;
/// other values pass through and simply fall outside both named counters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleRecord {
    pub reg_no: Option<String>,
    pub vehicle_type: Option<String>,
    pub status: Option<String>,
    pub allotted_to: Option<String>,
    /// Closing SPR odometer reading; `None` when the cell was unparseable.
    pub odometer_closing: Option<f64>,
    pub year_of_manufacture: Option<i32>,
    /// Remaining columns, unchanged: column_name → value.
    pub extra: BTreeMap<String, CellValue>,
}

impl VehicleRecord {
    /// The record's value on a categorical filter dimension.
    pub fn facet_value(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::VehicleType => self.vehicle_type.as_deref(),
            Facet::Status => self.status.as_deref(),
            Facet::AllottedUnit => self.allotted_to.as_deref(),
        }
    }
}

// ---------------------------------------------------------------------------
// Facet – the three categorical filter dimensions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    VehicleType,
    Status,
    AllottedUnit,
}

impl Facet {
    pub const ALL: [Facet; 3] = [Facet::VehicleType, Facet::Status, Facet::AllottedUnit];

    /// Sidebar label for the facet.
    pub fn label(self) -> &'static str {
        match self {
            Facet::VehicleType => "Vehicle Type",
            Facet::Status => "Status (Onroad/Offroad)",
            Facet::AllottedUnit => "Department/Unit",
        }
    }
}

// ---------------------------------------------------------------------------
// FacetOptions – distinct selectable values per facet
// ---------------------------------------------------------------------------

/// For each facet, the sorted distinct non-missing values observed in the
/// full dataset. Always derived from the full dataset, never from a filtered
/// subset, so the selectors stay stable while the user narrows the view.
#[derive(Debug, Clone, Default)]
pub struct FacetOptions {
    pub vehicle_types: Vec<String>,
    pub statuses: Vec<String>,
    pub allotted_units: Vec<String>,
}

impl FacetOptions {
    fn collect(records: &[VehicleRecord]) -> Self {
        let distinct = |facet: Facet| -> Vec<String> {
            records
                .iter()
                .filter_map(|rec| rec.facet_value(facet))
                .map(str::to_string)
                .collect::<BTreeSet<String>>()
                .into_iter()
                .collect()
        };
        FacetOptions {
            vehicle_types: distinct(Facet::VehicleType),
            statuses: distinct(Facet::Status),
            allotted_units: distinct(Facet::AllottedUnit),
        }
    }

    pub fn values(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::VehicleType => &self.vehicle_types,
            Facet::Status => &self.statuses,
            Facet::AllottedUnit => &self.allotted_units,
        }
    }
}

// ---------------------------------------------------------------------------
// VehicleDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset. Loaded once at startup and read-only afterwards;
/// every filter evaluation borrows it.
#[derive(Debug, Clone, Default)]
pub struct VehicleDataset {
    /// All records (rows), in sheet order.
    pub records: Vec<VehicleRecord>,
    /// Ordered names of the passthrough columns (excludes the six core ones).
    pub extra_columns: Vec<String>,
    /// Distinct selectable values per categorical facet.
    pub facets: FacetOptions,
}

impl VehicleDataset {
    /// Build the dataset and its derived facet index from loaded records.
    pub fn from_records(records: Vec<VehicleRecord>, extra_columns: Vec<String>) -> Self {
        let facets = FacetOptions::collect(&records);
        VehicleDataset {
            records,
            extra_columns,
            facets,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
