use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;
use thiserror::Error;

use super::error::DashError;

// ---------------------------------------------------------------------------
// Column names of the launch table
// ---------------------------------------------------------------------------

pub const SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_COLUMN: &str = "Payload Mass (kg)";
pub const BOOSTER_CATEGORY_COLUMN: &str = "Booster Version Category";
pub const CLASS_COLUMN: &str = "class";

/// Columns every input file must provide. Anything else is ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    SITE_COLUMN,
    PAYLOAD_COLUMN,
    BOOSTER_CATEGORY_COLUMN,
    CLASS_COLUMN,
];

/// Selector value meaning "every site".
pub const ALL_SITES: &str = "ALL";

// ---------------------------------------------------------------------------
// Outcome – the 0/1 `class` column
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("class must be 0 or 1, got {0}")]
pub struct InvalidClass(pub f64);

/// Launch outcome. Ordered so that `Failure` (class 0) sorts first.
/// Read as a number so that `1` and `1.0` are both accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "f64")]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// The numeric class as stored in the data file.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }
}

/// Whole-valued floats only: a class column holding NaN anywhere comes out
/// of pandas as float.
impl TryFrom<f64> for Outcome {
    type Error = InvalidClass;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value == 0.0 {
            Ok(Outcome::Failure)
        } else if value == 1.0 {
            Ok(Outcome::Success)
        } else {
            Err(InvalidClass(value))
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the table
// ---------------------------------------------------------------------------

/// A single launch attempt.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Launch Site")]
    pub site: String,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    /// Only used to colour the scatter chart.
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
    #[serde(rename = "class")]
    pub outcome: Outcome,
}

// ---------------------------------------------------------------------------
// Site selection
// ---------------------------------------------------------------------------

/// A validated site selector value. Obtain one through
/// [`SiteCatalog::resolve`] so that `Site` always names a known pad.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// The plain value the selector carries (`"ALL"` or the site name).
    pub fn value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(name) => name,
        }
    }

    /// Human-readable label for the dropdown.
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::All => "All Sites",
            SiteSelection::Site(name) => name,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The set of launch sites present in a dataset, sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteCatalog {
    names: BTreeSet<String>,
}

impl SiteCatalog {
    pub fn from_records(records: &[LaunchRecord]) -> Self {
        Self {
            names: records.iter().map(|r| r.site.clone()).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Turn a plain selector value into a [`SiteSelection`].
    ///
    /// `"ALL"` selects every site, a catalog name selects that site, and
    /// anything else fails with [`DashError::UnknownSite`].
    pub fn resolve(&self, value: &str) -> Result<SiteSelection, DashError> {
        if value == ALL_SITES {
            return Ok(SiteSelection::All);
        }
        match self.names.get(value) {
            Some(name) => Ok(SiteSelection::Site(name.clone())),
            None => Err(DashError::UnknownSite {
                site: value.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// PayloadRange – inclusive slider interval
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    /// Fails with [`DashError::InvalidRange`] when `low > high` or either
    /// bound is NaN.
    pub fn new(low: f64, high: f64) -> Result<Self, DashError> {
        if low.is_nan() || high.is_nan() || low > high {
            return Err(DashError::InvalidRange { low, high });
        }
        Ok(Self { low, high })
    }

    /// Inclusive at both ends.
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// All launch records plus the indices computed once at load time.
///
/// The fields are private: after construction the dataset is read-only and
/// is handed to the filter/aggregate functions by shared reference.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    min_payload: f64,
    max_payload: f64,
    sites: SiteCatalog,
    booster_categories: BTreeSet<String>,
}

impl LaunchDataset {
    /// Build the dataset and its indices. An empty table has no payload
    /// bounds and is rejected with [`DashError::EmptyDataset`].
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, DashError> {
        if records.is_empty() {
            return Err(DashError::EmptyDataset);
        }

        let (min_payload, max_payload) = records.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), r| (lo.min(r.payload_mass_kg), hi.max(r.payload_mass_kg)),
        );
        let sites = SiteCatalog::from_records(&records);
        let booster_categories = records
            .iter()
            .map(|r| r.booster_version_category.clone())
            .collect();

        Ok(Self {
            records,
            min_payload,
            max_payload,
            sites,
            booster_categories,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    pub fn sites(&self) -> &SiteCatalog {
        &self.sites
    }

    pub fn booster_categories(&self) -> &BTreeSet<String> {
        &self.booster_categories
    }

    pub fn resolve_site(&self, value: &str) -> Result<SiteSelection, DashError> {
        self.sites.resolve(value)
    }

    /// Number of launch records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn record(site: &str, payload: f64, booster: &str, class: i64) -> LaunchRecord {
    LaunchRecord {
        site: site.to_string(),
        payload_mass_kg: payload,
        booster_version_category: booster.to_string(),
        outcome: Outcome::try_from(class as f64).expect("test class is 0 or 1"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<LaunchRecord> {
        vec![
            record("KSC LC-39A", 2500.0, "FT", 1),
            record("CCAFS LC-40", 0.0, "v1.0", 0),
            record("VAFB SLC-4E", 9600.0, "B4", 1),
            record("CCAFS LC-40", 500.0, "v1.1", 0),
        ]
    }

    #[test]
    fn outcome_from_class() {
        assert_eq!(Outcome::try_from(0.0), Ok(Outcome::Failure));
        assert_eq!(Outcome::try_from(1.0), Ok(Outcome::Success));
        assert_eq!(Outcome::try_from(2.0), Err(InvalidClass(2.0)));
        assert_eq!(Outcome::try_from(0.5), Err(InvalidClass(0.5)));
        assert!(Outcome::try_from(f64::NAN).is_err());
        assert!(Outcome::Failure < Outcome::Success);
    }

    #[test]
    fn dataset_computes_payload_bounds() {
        let ds = LaunchDataset::from_records(sample()).unwrap();
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.min_payload(), 0.0);
        assert_eq!(ds.max_payload(), 9600.0);
    }

    #[test]
    fn dataset_indexes_sites_and_boosters() {
        let ds = LaunchDataset::from_records(sample()).unwrap();
        let sites: Vec<&str> = ds.sites().iter().collect();
        assert_eq!(sites, vec!["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"]);
        assert_eq!(ds.booster_categories().len(), 4);
    }

    #[test]
    fn empty_dataset_is_rejected() {
        assert_eq!(
            LaunchDataset::from_records(Vec::new()).unwrap_err(),
            DashError::EmptyDataset
        );
    }

    #[test]
    fn resolve_known_and_unknown_sites() {
        let catalog = SiteCatalog::from_records(&sample());
        assert_eq!(catalog.resolve("ALL"), Ok(SiteSelection::All));
        assert_eq!(
            catalog.resolve("KSC LC-39A"),
            Ok(SiteSelection::Site("KSC LC-39A".into()))
        );
        assert_eq!(
            catalog.resolve("CCAFS SLC-40"),
            Err(DashError::UnknownSite {
                site: "CCAFS SLC-40".into()
            })
        );
        // The sentinel is case sensitive.
        assert!(catalog.resolve("all").is_err());
    }

    #[test]
    fn selection_value_and_label() {
        assert_eq!(SiteSelection::All.value(), "ALL");
        assert_eq!(SiteSelection::All.label(), "All Sites");
        let site = SiteSelection::Site("VAFB SLC-4E".into());
        assert_eq!(site.value(), "VAFB SLC-4E");
        assert_eq!(site.to_string(), "VAFB SLC-4E");
    }

    #[test]
    fn payload_range_validation() {
        assert!(PayloadRange::new(1000.0, 1000.0).is_ok());
        assert_eq!(
            PayloadRange::new(5000.0, 1000.0),
            Err(DashError::InvalidRange {
                low: 5000.0,
                high: 1000.0
            })
        );
        assert!(PayloadRange::new(f64::NAN, 1000.0).is_err());

        let range = PayloadRange::new(1000.0, 5000.0).unwrap();
        assert!(range.contains(1000.0));
        assert!(range.contains(5000.0));
        assert!(!range.contains(999.9));
        assert!(!range.contains(5000.1));
    }
}
