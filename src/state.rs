use crate::config::Config;
use crate::data;
use crate::data::filter::FilterCriteria;
use crate::data::model::VehicleDataset;
use crate::data::summary::FilteredResult;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which chart the insights section shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    ByVehicleType,
    ByStatus,
    ByYear,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [
        ChartKind::ByVehicleType,
        ChartKind::ByStatus,
        ChartKind::ByYear,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChartKind::ByVehicleType => "By Vehicle Type",
            ChartKind::ByStatus => "By Status",
            ChartKind::ByYear => "By Year",
        }
    }
}

/// The full UI state, independent of rendering.
///
/// Owning `dataset` here is the process-wide load-once cache: it is filled
/// exactly once at startup and only ever borrowed afterwards.
pub struct AppState {
    pub dataset: VehicleDataset,

    /// The user's current filter inputs.
    pub criteria: FilterCriteria,

    /// Result of the last filter evaluation. `None` only in the
    /// show-only-when-filtered mode while no criterion is set.
    pub results: Option<FilteredResult>,

    /// Display-mode fork: show the full dataset when no filter is set
    /// (true), or prompt for a filter instead (false).
    pub always_show_unfiltered: bool,

    pub chart: ChartKind,
}

impl AppState {
    pub fn new(dataset: VehicleDataset, config: &Config) -> Self {
        let mut state = AppState {
            dataset,
            criteria: FilterCriteria::default(),
            results: None,
            always_show_unfiltered: config.always_show_unfiltered,
            chart: ChartKind::ByVehicleType,
        };
        state.refilter();
        state
    }

    /// Re-run the pipeline for the current criteria. The previous result is
    /// discarded whole; nothing is updated incrementally.
    pub fn refilter(&mut self) {
        self.results = if self.criteria.is_empty() && !self.always_show_unfiltered {
            None
        } else {
            Some(data::apply(&self.dataset, &self.criteria))
        };
    }

    pub fn set_always_show_unfiltered(&mut self, on: bool) {
        self.always_show_unfiltered = on;
        self.refilter();
    }

    pub fn clear_filters(&mut self) {
        self.criteria.clear();
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::VehicleRecord;

    fn dataset() -> VehicleDataset {
        let record = |reg: &str, status: &str| VehicleRecord {
            reg_no: Some(reg.to_string()),
            status: Some(status.to_string()),
            ..Default::default()
        };
        VehicleDataset::from_records(
            vec![record("KL01BS4971", "Onroad"), record("KL01BS4972", "Offroad")],
            Vec::new(),
        )
    }

    fn config(always_show: bool) -> Config {
        Config {
            always_show_unfiltered: always_show,
            ..Config::default()
        }
    }

    #[test]
    fn always_show_mode_exposes_the_full_dataset_at_startup() {
        let state = AppState::new(dataset(), &config(true));
        let results = state.results.expect("results should be computed");
        assert_eq!(results.summary.total, 2);
    }

    #[test]
    fn filter_required_mode_starts_in_the_prompt_state() {
        let state = AppState::new(dataset(), &config(false));
        assert!(state.results.is_none());
    }

    #[test]
    fn filter_required_mode_computes_once_a_criterion_is_set() {
        let mut state = AppState::new(dataset(), &config(false));
        state.criteria.registration_search = "4972".into();
        state.refilter();

        let results = state.results.expect("criterion set, results expected");
        assert_eq!(results.indices, vec![1]);
    }

    #[test]
    fn toggling_the_mode_reevaluates() {
        let mut state = AppState::new(dataset(), &config(false));
        assert!(state.results.is_none());

        state.set_always_show_unfiltered(true);
        assert!(state.results.is_some());

        state.set_always_show_unfiltered(false);
        assert!(state.results.is_none());
    }

    #[test]
    fn clearing_filters_returns_to_the_mode_default() {
        let mut state = AppState::new(dataset(), &config(false));
        state.criteria.registration_search = "4971".into();
        state.refilter();
        assert!(state.results.is_some());

        state.clear_filters();
        assert!(state.results.is_none());
    }
}
