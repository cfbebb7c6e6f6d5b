//! Data layer: core types, loading, filtering, and aggregation.
//!
//! Architecture:
//! ```text
//!  workbook (.xlsx, named sheet)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  read sheet → drop artifact row → coerce numerics
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────────┐
//!   │ VehicleDataset │  Vec<VehicleRecord>, facet options
//!   └───────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  apply FilterCriteria → matching indices
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  summary  │  counters + frequency tables → FilteredResult
//!   └──────────┘
//! ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;

use filter::FilterCriteria;
use model::VehicleDataset;
use summary::FilteredResult;

/// Run the whole pipeline once: match records against the criteria, then
/// aggregate the subset. Total over valid inputs; an empty subset is a
/// normal outcome.
pub fn apply(dataset: &VehicleDataset, criteria: &FilterCriteria) -> FilteredResult {
    let indices = filter::filtered_indices(dataset, criteria);
    FilteredResult::over(dataset, indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::VehicleRecord;

    fn dataset() -> VehicleDataset {
        let record = |reg: &str, vt: &str, status: &str, unit: &str| VehicleRecord {
            reg_no: Some(reg.to_string()),
            vehicle_type: Some(vt.to_string()),
            status: Some(status.to_string()),
            allotted_to: Some(unit.to_string()),
            ..Default::default()
        };
        VehicleDataset::from_records(
            vec![
                record("KL01BS4971", "Jeep", "Onroad", "Traffic"),
                record("KL01BS4972", "Jeep", "Offroad", "Traffic"),
                record("KL05AB1234", "Car", "Onroad", "HQ"),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn result_is_always_a_subset() {
        let ds = dataset();
        let criteria = FilterCriteria {
            registration_search: "KL".into(),
            ..Default::default()
        };
        let result = apply(&ds, &criteria);
        assert!(result.indices.iter().all(|&i| i < ds.len()));
    }

    #[test]
    fn empty_criteria_return_the_whole_dataset() {
        let ds = dataset();
        let result = apply(&ds, &FilterCriteria::default());
        assert_eq!(result.indices, vec![0, 1, 2]);
        assert_eq!(result.summary.total, 3);
    }

    #[test]
    fn vehicle_type_filter_with_counters() {
        let ds = dataset();
        let criteria = FilterCriteria {
            vehicle_types: ["Jeep".to_string()].into(),
            ..Default::default()
        };
        let result = apply(&ds, &criteria);

        assert_eq!(result.indices, vec![0, 1]);
        assert_eq!(result.summary.total, 2);
        assert_eq!(result.summary.onroad, 1);
        assert_eq!(result.summary.offroad, 1);
    }

    #[test]
    fn registration_search_finds_a_single_row() {
        let ds = dataset();
        let criteria = FilterCriteria {
            registration_search: "4972".into(),
            ..Default::default()
        };
        let result = apply(&ds, &criteria);
        assert_eq!(result.indices, vec![1]);
    }

    #[test]
    fn status_and_unit_filters_combine() {
        let ds = dataset();
        let criteria = FilterCriteria {
            statuses: ["Onroad".to_string()].into(),
            allotted_units: ["HQ".to_string()].into(),
            ..Default::default()
        };
        let result = apply(&ds, &criteria);
        assert_eq!(result.indices, vec![2]);
        assert_eq!(result.summary.total, 1);
        assert_eq!(result.summary.onroad, 1);
    }
}
