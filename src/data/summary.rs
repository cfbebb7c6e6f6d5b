use std::collections::BTreeMap;

use super::model::VehicleDataset;

/// Exact status strings the two named counters match on. Anything else,
/// including a blank cell, counts toward the total only.
pub const STATUS_ONROAD: &str = "Onroad";
pub const STATUS_OFFROAD: &str = "Offroad";

// ---------------------------------------------------------------------------
// Summary – the three scalar counters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub onroad: usize,
    pub offroad: usize,
}

impl Summary {
    /// Records whose status is neither "Onroad" nor "Offroad" (or missing).
    pub fn other(&self) -> usize {
        self.total - self.onroad - self.offroad
    }
}

// ---------------------------------------------------------------------------
// FilteredResult – everything derived from one filter evaluation
// ---------------------------------------------------------------------------

/// The outcome of one filter evaluation: the matching rows plus the derived
/// counters and frequency tables. Recomputed from scratch on every criteria
/// change and discarded with the render cycle; never persisted.
#[derive(Debug, Clone, Default)]
pub struct FilteredResult {
    /// Indices of the matching records, in dataset order.
    pub indices: Vec<usize>,
    pub summary: Summary,
    /// Counts per vehicle type, key-ordered. Missing values excluded.
    pub by_vehicle_type: Vec<(String, usize)>,
    /// Counts per status string, key-ordered. Missing values excluded.
    pub by_status: Vec<(String, usize)>,
    /// Counts per manufacture year, ascending. Missing years excluded.
    pub by_year: Vec<(i32, usize)>,
}

impl FilteredResult {
    /// Aggregate the given subset of the dataset.
    pub fn over(dataset: &VehicleDataset, indices: Vec<usize>) -> Self {
        let mut summary = Summary {
            total: indices.len(),
            ..Summary::default()
        };
        let mut by_type: BTreeMap<&str, usize> = BTreeMap::new();
        let mut by_status: BTreeMap<&str, usize> = BTreeMap::new();
        let mut by_year: BTreeMap<i32, usize> = BTreeMap::new();

        for &i in &indices {
            let rec = &dataset.records[i];
            match rec.status.as_deref() {
                Some(STATUS_ONROAD) => summary.onroad += 1,
                Some(STATUS_OFFROAD) => summary.offroad += 1,
                _ => {}
            }
            if let Some(vt) = rec.vehicle_type.as_deref() {
                *by_type.entry(vt).or_default() += 1;
            }
            if let Some(status) = rec.status.as_deref() {
                *by_status.entry(status).or_default() += 1;
            }
            if let Some(year) = rec.year_of_manufacture {
                *by_year.entry(year).or_default() += 1;
            }
        }

        FilteredResult {
            indices,
            summary,
            by_vehicle_type: by_type.into_iter().map(|(k, n)| (k.to_string(), n)).collect(),
            by_status: by_status.into_iter().map(|(k, n)| (k.to_string(), n)).collect(),
            by_year: by_year.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{VehicleDataset, VehicleRecord};

    fn dataset() -> VehicleDataset {
        let record = |status: Option<&str>, year: Option<i32>| VehicleRecord {
            vehicle_type: Some("Jeep".into()),
            status: status.map(str::to_string),
            year_of_manufacture: year,
            ..Default::default()
        };
        VehicleDataset::from_records(
            vec![
                record(Some("Onroad"), Some(2014)),
                record(Some("Offroad"), Some(2009)),
                record(Some("Condemned"), None),
                record(None, Some(2009)),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn counters_partition_the_subset() {
        let ds = dataset();
        let result = FilteredResult::over(&ds, vec![0, 1, 2, 3]);

        assert_eq!(result.summary.total, 4);
        assert_eq!(result.summary.onroad, 1);
        assert_eq!(result.summary.offroad, 1);
        // Off-domain and missing statuses count toward neither named counter.
        assert_eq!(result.summary.other(), 2);
        assert_eq!(
            result.summary.total,
            result.summary.onroad + result.summary.offroad + result.summary.other()
        );
    }

    #[test]
    fn aggregates_only_cover_the_given_subset() {
        let ds = dataset();
        let result = FilteredResult::over(&ds, vec![0]);

        assert_eq!(result.summary.total, 1);
        assert_eq!(result.by_vehicle_type, vec![("Jeep".to_string(), 1)]);
        assert_eq!(result.by_status, vec![("Onroad".to_string(), 1)]);
    }

    #[test]
    fn year_table_is_ascending_and_skips_missing() {
        let ds = dataset();
        let result = FilteredResult::over(&ds, vec![0, 1, 2, 3]);

        assert_eq!(result.by_year, vec![(2009, 2), (2014, 1)]);
    }

    #[test]
    fn status_table_counts_off_domain_values() {
        let ds = dataset();
        let result = FilteredResult::over(&ds, vec![0, 1, 2, 3]);

        assert_eq!(
            result.by_status,
            vec![
                ("Condemned".to_string(), 1),
                ("Offroad".to_string(), 1),
                ("Onroad".to_string(), 1),
            ]
        );
    }

    #[test]
    fn empty_subset_is_a_normal_value() {
        let ds = dataset();
        let result = FilteredResult::over(&ds, Vec::new());

        assert!(result.is_empty());
        assert_eq!(result.summary, Summary::default());
        assert!(result.by_year.is_empty());
    }
}
