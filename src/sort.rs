use std::cmp::Ordering;

use crate::version::{compare, Version};

/// Direction hint for sorting a sequence of versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Compare two versions in this direction. Descending is the reversed comparator.
    pub fn compare(self, a: &Version, b: &Version) -> Ordering {
        match self {
            SortOrder::Ascending => compare(a, b),
            SortOrder::Descending => compare(a, b).reverse(),
        }
    }
}

/// Stable in-place sort of `versions` in the given direction.
pub fn sort_versions(versions: &mut [Version], order: SortOrder) {
    versions.sort_by(|a, b| order.compare(a, b));
}

/// Collect `versions` into a vector sorted in the given direction.
pub fn sorted<I>(versions: I, order: SortOrder) -> Vec<Version>
where
    I: IntoIterator<Item = Version>,
{
    let mut out: Vec<Version> = versions.into_iter().collect();
    sort_versions(&mut out, order);
    out
}

/// The greatest version in `versions`, or `None` when it is empty.
pub fn latest<'a, I>(versions: I) -> Option<&'a Version>
where
    I: IntoIterator<Item = &'a Version>,
{
    versions.into_iter().max_by(|a, b| compare(a, b))
}
