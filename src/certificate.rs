//! Completion certificates.

use jiff::Timestamp;
use jiff::tz::TimeZone;

use crate::catalog::Catalog;
use crate::model::ProgressRecord;
use crate::progress;

/// Whether every catalog unit is complete for this learner.
pub fn is_eligible(catalog: &Catalog, record: &ProgressRecord) -> bool {
    progress::completed_count(catalog, record) == catalog.count()
}

/// Certificate identifier: `CERT-` plus the first eight characters of the
/// learner id, uppercased, plus the year of issue.
pub fn certificate_id(learner: &str, year: i16) -> String {
    let prefix: String = learner.chars().take(8).collect();
    format!("CERT-{}-{year}", prefix.to_uppercase())
}

/// A certificate ready to present.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: String,
    pub learner: String,
    pub units: usize,
    pub xp: u64,
    pub issued_at: Timestamp,
}

/// Issues a certificate, or `None` if the learner is not yet eligible.
pub fn issue(
    catalog: &Catalog,
    learner: &str,
    record: &ProgressRecord,
    now: Timestamp,
) -> Option<Certificate> {
    if !is_eligible(catalog, record) {
        return None;
    }
    let year = now.to_zoned(TimeZone::UTC).year();
    Some(Certificate {
        id: certificate_id(learner, year),
        learner: learner.to_string(),
        units: catalog.count(),
        xp: record.xp,
        issued_at: now,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::catalog::tests::small_catalog;

    #[test]
    fn id_format() {
        assert_eq!(certificate_id("ab12cd34ef56", 2026), "CERT-AB12CD34-2026");
        assert_eq!(certificate_id("kim", 2025), "CERT-KIM-2025");
    }

    #[test]
    fn eligible_only_when_all_units_complete() {
        let catalog = small_catalog();
        let mut record = ProgressRecord::new("alpha");
        for key in ["alpha", "beta", "gamma"] {
            record.completions.insert(key.into(), true);
        }
        assert!(!is_eligible(&catalog, &record));

        record.completions.insert("delta".into(), false);
        assert!(!is_eligible(&catalog, &record));

        record.completions.insert("delta".into(), true);
        assert!(is_eligible(&catalog, &record));
    }

    #[test]
    fn issue_uses_year_of_now() {
        let catalog = small_catalog();
        let mut record = ProgressRecord::new("delta");
        let now: Timestamp = "2026-03-04T10:00:00Z".parse().unwrap();
        assert!(issue(&catalog, "learner-one", &record, now).is_none());

        for key in ["alpha", "beta", "gamma", "delta"] {
            record.completions.insert(key.into(), true);
        }
        record.xp = 300;
        let cert = issue(&catalog, "learner-one", &record, now).unwrap();
        assert_eq!(cert.id, "CERT-LEARNER--2026");
        assert_eq!(cert.units, 4);
        assert_eq!(cert.xp, 300);
    }
}
