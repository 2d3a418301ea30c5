//! Aggregate counts over stored registrations.

use serde::Serialize;
use std::collections::BTreeMap;

use super::RegistrationRecord;
use crate::domain::catalog::Gender;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationStats {
    pub total: usize,
    pub boys: usize,
    pub girls: usize,
    /// Count per offering name.
    pub by_sport: BTreeMap<String, usize>,
}

impl RegistrationStats {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a RegistrationRecord>) -> Self {
        records.into_iter().fold(Self::default(), |mut stats, record| {
            stats.total += 1;
            match record.gender() {
                Gender::Boys => stats.boys += 1,
                Gender::Girls => stats.girls += 1,
            }
            *stats
                .by_sport
                .entry(record.details.sport_name.clone())
                .or_insert(0) += 1;
            stats
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registration::test_support::record;

    #[test]
    fn empty_store_has_zero_counts() {
        let stats = RegistrationStats::from_records(std::iter::empty());
        assert_eq!(stats, RegistrationStats::default());
    }

    #[test]
    fn counts_by_gender_and_sport_name() {
        let records = vec![
            record("chess", Gender::Boys),
            record("chess", Gender::Girls),
            record("carrom", Gender::Boys),
        ];
        let stats = RegistrationStats::from_records(&records);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.boys, 2);
        assert_eq!(stats.girls, 1);
        assert_eq!(stats.by_sport["Sport chess"], 2);
        assert_eq!(stats.by_sport["Sport carrom"], 1);
    }
}
