use std::path::Path;

use crate::color::ColorMap;
use crate::config::DashConfig;
use crate::data::aggregate::ChartData;
use crate::data::loader;
use crate::data::model::{LaunchDataset, SiteSelection};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashConfig,

    /// Loaded dataset (None until a file loads successfully).
    pub dataset: Option<LaunchDataset>,

    /// Current site dropdown value.
    pub site: SiteSelection,

    /// Current payload slider positions, `payload_low <= payload_high`.
    pub payload_low: f64,
    pub payload_high: f64,

    /// Charts for the current selection (cached between frames).
    pub charts: Option<ChartData>,

    pub site_colors: Option<ColorMap>,
    pub booster_colors: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: DashConfig) -> Self {
        Self {
            config,
            dataset: None,
            site: SiteSelection::All,
            payload_low: 0.0,
            payload_high: 0.0,
            charts: None,
            site_colors: None,
            booster_colors: None,
            status_message: None,
        }
    }

    /// Load a dataset from disk, replacing the current one on success.
    pub fn load_path(&mut self, path: &Path) {
        match loader::load(path) {
            Ok(dataset) => self.set_dataset(dataset),
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Ingest a newly loaded dataset and reset the controls to their
    /// defaults: all sites, full payload range.
    pub fn set_dataset(&mut self, dataset: LaunchDataset) {
        self.site_colors = Some(ColorMap::new(dataset.sites().iter()));
        self.booster_colors = Some(ColorMap::new(
            dataset.booster_categories().iter().map(String::as_str),
        ));

        self.site = SiteSelection::All;
        self.payload_low = dataset.min_payload();
        self.payload_high = dataset.max_payload();

        self.dataset = Some(dataset);
        self.status_message = None;
        self.recompute();
    }

    /// Apply a site selector value. Unknown values are rejected and reported.
    pub fn select_site(&mut self, value: &str) {
        let Some(ds) = &self.dataset else {
            return;
        };
        match ds.resolve_site(value) {
            Ok(site) => {
                self.site = site;
                self.recompute();
            }
            Err(e) => {
                log::warn!("Rejected site selection: {e}");
                self.charts = None;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Move the low slider; the high end follows if it would be passed.
    pub fn set_payload_low(&mut self, low: f64) {
        self.payload_low = self.clamp_payload(low);
        if self.payload_high < self.payload_low {
            self.payload_high = self.payload_low;
        }
        self.recompute();
    }

    /// Move the high slider; the low end follows if it would be passed.
    pub fn set_payload_high(&mut self, high: f64) {
        self.payload_high = self.clamp_payload(high);
        if self.payload_low > self.payload_high {
            self.payload_low = self.payload_high;
        }
        self.recompute();
    }

    fn clamp_payload(&self, value: f64) -> f64 {
        match &self.dataset {
            Some(ds) => value.clamp(ds.min_payload(), ds.max_payload()),
            None => value,
        }
    }

    /// Recompute chart data for the current selection.
    pub fn recompute(&mut self) {
        let Some(ds) = &self.dataset else {
            return;
        };
        match ds.charts(self.site.value(), self.payload_low, self.payload_high) {
            Ok(charts) => {
                log::debug!(
                    "Charts for {} [{}, {}]: {} pie slices, {} scatter points",
                    self.site,
                    self.payload_low,
                    self.payload_high,
                    charts.pie.labeled_slices().len(),
                    charts.scatter.points.len()
                );
                self.charts = Some(charts);
                self.status_message = None;
            }
            Err(e) => {
                log::warn!("Chart update failed: {e}");
                self.charts = None;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn launch(site: &str, payload: f64, outcome: Outcome) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            booster_version_category: "FT".to_string(),
            outcome,
        }
    }

    fn loaded_state() -> AppState {
        let dataset = LaunchDataset::from_records(vec![
            launch("CCAFS LC-40", 500.0, Outcome::Failure),
            launch("KSC LC-39A", 3000.0, Outcome::Success),
            launch("KSC LC-39A", 6000.0, Outcome::Failure),
        ])
        .unwrap();
        let mut state = AppState::new(DashConfig::default());
        state.set_dataset(dataset);
        state
    }

    #[test]
    fn new_dataset_selects_all_sites_and_full_range() {
        let state = loaded_state();
        assert_eq!(state.site, SiteSelection::All);
        assert_eq!((state.payload_low, state.payload_high), (500.0, 6000.0));
        let charts = state.charts.as_ref().unwrap();
        assert_eq!(charts.scatter.points.len(), 3);
        assert_eq!(state.site_colors.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn selecting_a_site_updates_both_charts() {
        let mut state = loaded_state();
        state.select_site("KSC LC-39A");
        let charts = state.charts.as_ref().unwrap();
        assert_eq!(charts.pie.title, "Success vs Failed Launches for Site KSC LC-39A");
        assert_eq!(charts.pie.total(), 2);
        assert_eq!(charts.scatter.points.len(), 2);
    }

    #[test]
    fn unknown_site_is_reported_and_clears_charts() {
        let mut state = loaded_state();
        state.select_site("Boca Chica");
        assert!(state.charts.is_none());
        assert!(state.status_message.as_deref().unwrap().contains("Boca Chica"));
        assert_eq!(state.site, SiteSelection::All);

        state.select_site("ALL");
        assert!(state.charts.is_some());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn sliders_stay_ordered_and_clamped() {
        let mut state = loaded_state();
        state.set_payload_low(4000.0);
        state.set_payload_high(2000.0);
        assert_eq!((state.payload_low, state.payload_high), (2000.0, 2000.0));

        state.set_payload_high(1_000_000.0);
        assert_eq!(state.payload_high, 6000.0);
        state.set_payload_low(-10.0);
        assert_eq!(state.payload_low, 500.0);
    }

    #[test]
    fn failed_load_keeps_previous_dataset() {
        let mut state = loaded_state();
        state.load_path(Path::new("does/not/exist.csv"));
        assert!(state.dataset.is_some());
        assert!(state.status_message.as_deref().unwrap().starts_with("Error"));
    }
}
