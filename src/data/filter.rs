use std::borrow::Cow;

use super::error::DashError;
use super::model::{LaunchDataset, LaunchRecord, PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// Site filter
// ---------------------------------------------------------------------------

/// Records belonging to the selected site, in their original order.
///
/// `All` hands back the input slice itself; a specific site yields a new
/// owned subset. The input is never modified.
pub fn filter_by_site<'a>(
    records: &'a [LaunchRecord],
    selection: &SiteSelection,
) -> Cow<'a, [LaunchRecord]> {
    match selection {
        SiteSelection::All => Cow::Borrowed(records),
        SiteSelection::Site(site) => Cow::Owned(
            records
                .iter()
                .filter(|r| r.site == *site)
                .cloned()
                .collect(),
        ),
    }
}

// ---------------------------------------------------------------------------
// Payload filter
// ---------------------------------------------------------------------------

/// Records with `low <= payload <= high`, in their original order.
pub fn filter_by_payload(
    records: &[LaunchRecord],
    low: f64,
    high: f64,
) -> Result<Vec<LaunchRecord>, DashError> {
    let range = PayloadRange::new(low, high)?;
    Ok(within_range(records, &range).cloned().collect())
}

/// Records inside an already validated range, borrowed.
pub(crate) fn within_range<'a>(
    records: &'a [LaunchRecord],
    range: &'a PayloadRange,
) -> impl Iterator<Item = &'a LaunchRecord> {
    records
        .iter()
        .filter(move |r| range.contains(r.payload_mass_kg))
}

impl LaunchDataset {
    /// Resolve a plain selector value and filter the full table by it.
    pub fn filter_by_site(&self, site: &str) -> Result<Cow<'_, [LaunchRecord]>, DashError> {
        let selection = self.resolve_site(site)?;
        Ok(filter_by_site(self.records(), &selection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::record;

    fn sample() -> Vec<LaunchRecord> {
        vec![
            record("A", 500.0, "v1.0", 1),
            record("B", 1500.0, "FT", 0),
            record("A", 3000.0, "FT", 0),
            record("C", 9000.0, "B5", 1),
            record("A", 1500.0, "B4", 1),
        ]
    }

    #[test]
    fn all_sites_is_identity_without_copy() {
        let records = sample();
        let filtered = filter_by_site(&records, &SiteSelection::All);
        assert!(matches!(filtered, Cow::Borrowed(_)));
        assert_eq!(filtered.as_ref(), records.as_slice());
    }

    #[test]
    fn site_filter_keeps_only_matching_rows_in_order() {
        let records = sample();
        let filtered = filter_by_site(&records, &SiteSelection::Site("A".into()));

        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|r| r.site == "A"));
        let payloads: Vec<f64> = filtered.iter().map(|r| r.payload_mass_kg).collect();
        assert_eq!(payloads, vec![500.0, 3000.0, 1500.0]);
    }

    #[test]
    fn site_filter_count_matches_source_for_every_site() {
        let records = sample();
        for site in ["A", "B", "C"] {
            let expected = records.iter().filter(|r| r.site == site).count();
            let filtered = filter_by_site(&records, &SiteSelection::Site(site.into()));
            assert_eq!(filtered.len(), expected, "site {site}");
        }
    }

    #[test]
    fn payload_filter_is_inclusive() {
        let records = vec![
            record("A", 500.0, "FT", 1),
            record("A", 1500.0, "FT", 1),
            record("A", 3000.0, "FT", 0),
            record("A", 9000.0, "FT", 1),
        ];
        let filtered = filter_by_payload(&records, 1000.0, 5000.0).unwrap();
        let payloads: Vec<f64> = filtered.iter().map(|r| r.payload_mass_kg).collect();
        assert_eq!(payloads, vec![1500.0, 3000.0]);

        let edges = filter_by_payload(&records, 1500.0, 3000.0).unwrap();
        assert_eq!(edges.len(), 2);
    }

    #[test]
    fn payload_filter_over_full_bounds_keeps_everything() {
        let records = sample();
        assert_eq!(filter_by_payload(&records, 500.0, 9000.0).unwrap(), records);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = filter_by_payload(&sample(), 5000.0, 1000.0).unwrap_err();
        assert_eq!(
            err,
            DashError::InvalidRange {
                low: 5000.0,
                high: 1000.0
            }
        );
    }

    #[test]
    fn dataset_filter_rejects_unknown_site() {
        let ds = LaunchDataset::from_records(sample()).unwrap();
        assert_eq!(ds.filter_by_site("ALL").unwrap().len(), 5);
        assert_eq!(ds.filter_by_site("C").unwrap().len(), 1);
        assert_eq!(
            ds.filter_by_site("Z").unwrap_err(),
            DashError::UnknownSite { site: "Z".into() }
        );
    }
}
