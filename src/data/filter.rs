use std::collections::BTreeSet;

use super::model::{Facet, VehicleDataset};

// ---------------------------------------------------------------------------
// FilterCriteria – the user's current filter inputs
// ---------------------------------------------------------------------------

/// User-supplied filter criteria for one evaluation.
///
/// Every dimension is optional: an empty search string or an empty selection
/// set places no constraint on that dimension (it never means "exclude all").
/// The four constraints are conjunctive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against the registration number.
    pub registration_search: String,
    pub vehicle_types: BTreeSet<String>,
    pub statuses: BTreeSet<String>,
    pub allotted_units: BTreeSet<String>,
}

impl FilterCriteria {
    /// The search needle with edge whitespace stripped and case folded to
    /// uppercase, or `None` when the input is effectively empty.
    fn search_needle(&self) -> Option<String> {
        let needle = self.registration_search.trim();
        (!needle.is_empty()).then(|| needle.to_uppercase())
    }

    /// True when no dimension is constrained.
    pub fn is_empty(&self) -> bool {
        self.search_needle().is_none()
            && self.vehicle_types.is_empty()
            && self.statuses.is_empty()
            && self.allotted_units.is_empty()
    }

    pub fn selection(&self, facet: Facet) -> &BTreeSet<String> {
        match facet {
            Facet::VehicleType => &self.vehicle_types,
            Facet::Status => &self.statuses,
            Facet::AllottedUnit => &self.allotted_units,
        }
    }

    pub fn selection_mut(&mut self, facet: Facet) -> &mut BTreeSet<String> {
        match facet {
            Facet::VehicleType => &mut self.vehicle_types,
            Facet::Status => &mut self.statuses,
            Facet::AllottedUnit => &mut self.allotted_units,
        }
    }

    /// Drop every constraint.
    pub fn clear(&mut self) {
        *self = FilterCriteria::default();
    }
}

// ---------------------------------------------------------------------------
// Row matching
// ---------------------------------------------------------------------------

/// Indices of records passing every active criterion.
///
/// A record passes when:
/// * the search is empty, or its `reg_no` (uppercased) contains the needle —
///   a missing registration never matches a non-empty search;
/// * for each facet, the selection is empty or the record's value is a
///   member — a missing value is never a member.
pub fn filtered_indices(dataset: &VehicleDataset, criteria: &FilterCriteria) -> Vec<usize> {
    let needle = criteria.search_needle();

    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            if let Some(needle) = needle.as_deref() {
                match &rec.reg_no {
                    Some(reg) if reg.to_uppercase().contains(needle) => {}
                    _ => return false,
                }
            }
            for facet in Facet::ALL {
                let selected = criteria.selection(facet);
                if selected.is_empty() {
                    continue;
                }
                if !rec.facet_value(facet).map_or(false, |v| selected.contains(v)) {
                    return false;
                }
            }
            true
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{VehicleDataset, VehicleRecord};

    fn sample_dataset() -> VehicleDataset {
        let record = |reg: Option<&str>, vt: &str, status: &str, unit: &str| VehicleRecord {
            reg_no: reg.map(str::to_string),
            vehicle_type: Some(vt.to_string()),
            status: Some(status.to_string()),
            allotted_to: Some(unit.to_string()),
            ..Default::default()
        };
        VehicleDataset::from_records(
            vec![
                record(Some("KL01BS4971"), "Jeep", "Onroad", "Traffic"),
                record(Some("KL01BS4972"), "Jeep", "Offroad", "Traffic"),
                record(Some("KL05AB1234"), "Car", "Onroad", "HQ"),
                record(None, "Car", "Onroad", "HQ"),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn empty_criteria_keep_everything() {
        let ds = sample_dataset();
        let criteria = FilterCriteria::default();
        assert!(criteria.is_empty());
        assert_eq!(filtered_indices(&ds, &criteria), vec![0, 1, 2, 3]);
    }

    #[test]
    fn whitespace_only_search_is_no_constraint() {
        let ds = sample_dataset();
        let criteria = FilterCriteria {
            registration_search: "   ".into(),
            ..Default::default()
        };
        assert!(criteria.is_empty());
        assert_eq!(filtered_indices(&ds, &criteria).len(), ds.len());
    }

    #[test]
    fn search_is_case_insensitive_with_edge_whitespace_stripped() {
        let ds = VehicleDataset::from_records(
            vec![VehicleRecord {
                reg_no: Some("KL 01 BS 4971".into()),
                ..Default::default()
            }],
            Vec::new(),
        );
        let criteria = FilterCriteria {
            registration_search: " bs 4971 ".into(),
            ..Default::default()
        };
        // Inner spacing still matters, only the edges are stripped.
        assert_eq!(filtered_indices(&ds, &criteria), vec![0]);
    }

    #[test]
    fn missing_registration_never_matches_a_search() {
        let ds = sample_dataset();
        let criteria = FilterCriteria {
            registration_search: "KL".into(),
            ..Default::default()
        };
        assert_eq!(filtered_indices(&ds, &criteria), vec![0, 1, 2]);
    }

    #[test]
    fn facet_constraints_are_conjunctive() {
        let ds = sample_dataset();
        let criteria = FilterCriteria {
            statuses: ["Onroad".to_string()].into(),
            allotted_units: ["HQ".to_string()].into(),
            ..Default::default()
        };
        assert_eq!(filtered_indices(&ds, &criteria), vec![2, 3]);
    }

    #[test]
    fn search_narrows_facet_selection() {
        let ds = sample_dataset();
        let criteria = FilterCriteria {
            registration_search: "4972".into(),
            vehicle_types: ["Jeep".to_string()].into(),
            ..Default::default()
        };
        assert_eq!(filtered_indices(&ds, &criteria), vec![1]);
    }

    #[test]
    fn clear_removes_all_constraints() {
        let mut criteria = FilterCriteria {
            registration_search: "KL".into(),
            vehicle_types: ["Jeep".to_string()].into(),
            ..Default::default()
        };
        criteria.clear();
        assert!(criteria.is_empty());
    }
}
