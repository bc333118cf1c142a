use std::collections::BTreeMap;

use super::error::DashError;
use super::filter::{filter_by_site, within_range};
use super::model::{LaunchDataset, LaunchRecord, Outcome, PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// Slice values of the pie chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieSlices {
    /// All sites: number of successful launches per site. Sites without a
    /// success keep a zero-valued entry.
    SuccessesBySite(BTreeMap<String, usize>),
    /// One site: number of launches per outcome. Only outcomes that occur
    /// get an entry.
    OutcomeCounts(BTreeMap<Outcome, usize>),
}

/// Declarative pie chart: a title and category → value slices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieSpec {
    pub title: String,
    pub slices: PieSlices,
}

impl PieSpec {
    /// `(label, value)` pairs in display order.
    pub fn labeled_slices(&self) -> Vec<(String, usize)> {
        match &self.slices {
            PieSlices::SuccessesBySite(by_site) => by_site
                .iter()
                .map(|(site, n)| (site.clone(), *n))
                .collect(),
            PieSlices::OutcomeCounts(by_outcome) => by_outcome
                .iter()
                .map(|(outcome, n)| (outcome.label().to_string(), *n))
                .collect(),
        }
    }

    /// Sum of all slice values.
    pub fn total(&self) -> usize {
        match &self.slices {
            PieSlices::SuccessesBySite(m) => m.values().sum(),
            PieSlices::OutcomeCounts(m) => m.values().sum(),
        }
    }
}

pub fn pie_title(selection: &SiteSelection) -> String {
    match selection {
        SiteSelection::All => "Total Success Launches for All Sites".to_string(),
        SiteSelection::Site(site) => format!("Success vs Failed Launches for Site {site}"),
    }
}

/// Aggregate (already site-filtered) records for the pie chart.
///
/// With `All` the class indicator is summed per site, which is the success
/// count per site. With a single site the rows are counted per outcome.
pub fn pie_data(records: &[LaunchRecord], selection: &SiteSelection) -> PieSpec {
    let slices = match selection {
        SiteSelection::All => {
            let mut by_site: BTreeMap<String, usize> = BTreeMap::new();
            for r in records {
                let successes = by_site.entry(r.site.clone()).or_default();
                *successes += usize::from(r.outcome.class());
            }
            PieSlices::SuccessesBySite(by_site)
        }
        SiteSelection::Site(_) => {
            let mut by_outcome: BTreeMap<Outcome, usize> = BTreeMap::new();
            for r in records {
                *by_outcome.entry(r.outcome).or_default() += 1;
            }
            PieSlices::OutcomeCounts(by_outcome)
        }
    };

    PieSpec {
        title: pie_title(selection),
        slices,
    }
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

/// One scatter point: payload on x, class on y, coloured by booster.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version_category: String,
}

impl ScatterPoint {
    /// Plot coordinates `[payload, class]`.
    pub fn xy(&self) -> [f64; 2] {
        [self.payload_mass_kg, f64::from(self.outcome.class())]
    }
}

impl From<&LaunchRecord> for ScatterPoint {
    fn from(r: &LaunchRecord) -> Self {
        Self {
            payload_mass_kg: r.payload_mass_kg,
            outcome: r.outcome,
            booster_version_category: r.booster_version_category.clone(),
        }
    }
}

/// Declarative scatter chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSpec {
    pub title: String,
    pub points: Vec<ScatterPoint>,
}

impl ScatterSpec {
    /// Points grouped into one series per booster category, keyed by
    /// category name.
    pub fn series(&self) -> BTreeMap<&str, Vec<[f64; 2]>> {
        let mut series: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
        for p in &self.points {
            series
                .entry(p.booster_version_category.as_str())
                .or_default()
                .push(p.xy());
        }
        series
    }
}

pub fn scatter_title(selection: &SiteSelection) -> String {
    match selection {
        SiteSelection::All => "Correlation between Payload and Success for All Sites".to_string(),
        SiteSelection::Site(site) => {
            format!("Correlation between Payload and Success for Site {site}")
        }
    }
}

/// Payload-filtered records projected to the scatter chart's fields.
pub fn scatter_data(
    records: &[LaunchRecord],
    low: f64,
    high: f64,
) -> Result<Vec<ScatterPoint>, DashError> {
    let range = PayloadRange::new(low, high)?;
    Ok(scatter_points(records, &range))
}

fn scatter_points(records: &[LaunchRecord], range: &PayloadRange) -> Vec<ScatterPoint> {
    within_range(records, range)
        .map(ScatterPoint::from)
        .collect()
}

// ---------------------------------------------------------------------------
// Both charts for one interaction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub pie: PieSpec,
    pub scatter: ScatterSpec,
}

/// Run one `(site, payload range)` selection through the site filter and
/// the aggregator.
///
/// The pie only depends on the site, the scatter on both controls.
pub fn chart_data(
    records: &[LaunchRecord],
    selection: &SiteSelection,
    range: PayloadRange,
) -> ChartData {
    let site_records = filter_by_site(records, selection);
    ChartData {
        pie: pie_data(&site_records, selection),
        scatter: ScatterSpec {
            title: scatter_title(selection),
            points: scatter_points(&site_records, &range),
        },
    }
}

impl LaunchDataset {
    /// Chart data for plain selector values, as delivered by the UI.
    pub fn charts(&self, site: &str, low: f64, high: f64) -> Result<ChartData, DashError> {
        let selection = self.resolve_site(site)?;
        let range = PayloadRange::new(low, high)?;
        Ok(chart_data(self.records(), &selection, range))
    }
}
