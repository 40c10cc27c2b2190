//! Intersection of committed date sets.

use std::collections::BTreeSet;

use crate::domain::foundation::DateKey;

/// Outcome of a common-dates query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommonDates {
    /// Nobody has saved any dates yet. Distinct from an empty intersection.
    NoParticipants,
    /// Dates present in every participant's committed set; may be empty.
    Dates(BTreeSet<DateKey>),
}

impl CommonDates {
    /// Dates in ascending order; empty for `NoParticipants`.
    pub fn dates(&self) -> impl Iterator<Item = &DateKey> {
        match self {
            CommonDates::Dates(dates) => Some(dates.iter()),
            CommonDates::NoParticipants => None,
        }
        .into_iter()
        .flatten()
    }
}

/// Intersects every set in `sets`.
///
/// Zero sets yield `NoParticipants`; a single set is returned unchanged.
pub fn intersect_all<I>(sets: I) -> CommonDates
where
    I: IntoIterator<Item = BTreeSet<DateKey>>,
{
    let mut sets = sets.into_iter();
    let Some(first) = sets.next() else {
        return CommonDates::NoParticipants;
    };

    let common = sets.fold(first, |acc, next| {
        acc.intersection(&next).copied().collect()
    });
    CommonDates::Dates(common)
}
