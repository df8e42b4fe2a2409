//! Sets of flags and their conversion to and from raw masks.
//!
//! The free functions take `Option<&SzFlagSet>` and treat `None` as the
//! empty set, so "no flags given" never has to be special-cased by callers.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::{BitAnd, BitOr};

use serde::{Deserialize, Serialize};

use crate::bootstrap;
use crate::flag::SzFlag;
use crate::format;
use crate::group::SzFlagUsageGroup;

/// A set of flags, iterated in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SzFlagSet {
    flags: BTreeSet<SzFlag>,
}

impl SzFlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, flag: SzFlag) -> bool {
        self.flags.insert(flag)
    }

    pub fn remove(&mut self, flag: SzFlag) -> bool {
        self.flags.remove(&flag)
    }

    /// Builder-style insert.
    pub fn with(mut self, flag: SzFlag) -> Self {
        self.flags.insert(flag);
        self
    }

    pub fn contains(&self, flag: SzFlag) -> bool {
        self.flags.contains(&flag)
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = SzFlag> + '_ {
        self.flags.iter().copied()
    }

    /// OR of every member's value.
    pub fn mask(&self) -> u64 {
        self.flags.iter().fold(0, |mask, flag| mask | flag.value())
    }

    pub fn union(&self, other: &SzFlagSet) -> SzFlagSet {
        Self {
            flags: self.flags.union(&other.flags).copied().collect(),
        }
    }

    pub fn intersection(&self, other: &SzFlagSet) -> SzFlagSet {
        Self {
            flags: self.flags.intersection(&other.flags).copied().collect(),
        }
    }

    /// Whether the two sets share a flag.
    pub fn intersects(&self, other: &SzFlagSet) -> bool {
        !self.flags.is_disjoint(&other.flags)
    }

    /// Flags named by a raw mask.
    ///
    /// With a group, each set bit maps to that group's preferred flag.
    /// Without one, every flag whose bit is set is included, aliases too.
    /// Bits with no flag are dropped.
    pub fn from_mask(mask: u64, group: Option<SzFlagUsageGroup>) -> SzFlagSet {
        match group {
            Some(group) => (0..64u32)
                .filter(|bit| mask & (1u64 << bit) != 0)
                .filter_map(|bit| group.flag_for_bit(bit))
                .collect(),
            None => SzFlag::ALL
                .iter()
                .copied()
                .filter(|flag| mask & flag.value() == flag.value())
                .collect(),
        }
    }

    /// Render members by name, in declaration order.
    pub fn format(&self) -> String {
        format::format_names(
            self.flags.iter().map(|f| f.name()),
            self.mask(),
            bootstrap::NO_FLAGS_LABEL,
        )
    }
}

impl fmt::Display for SzFlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl FromIterator<SzFlag> for SzFlagSet {
    fn from_iter<I: IntoIterator<Item = SzFlag>>(iter: I) -> Self {
        Self {
            flags: iter.into_iter().collect(),
        }
    }
}

impl Extend<SzFlag> for SzFlagSet {
    fn extend<I: IntoIterator<Item = SzFlag>>(&mut self, iter: I) {
        self.flags.extend(iter);
    }
}

impl<const N: usize> From<[SzFlag; N]> for SzFlagSet {
    fn from(flags: [SzFlag; N]) -> Self {
        flags.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a SzFlagSet {
    type Item = SzFlag;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, SzFlag>>;

    fn into_iter(self) -> Self::IntoIter {
        self.flags.iter().copied()
    }
}

impl BitOr for &SzFlagSet {
    type Output = SzFlagSet;

    fn bitor(self, rhs: Self) -> SzFlagSet {
        self.union(rhs)
    }
}

impl BitAnd for &SzFlagSet {
    type Output = SzFlagSet;

    fn bitand(self, rhs: Self) -> SzFlagSet {
        self.intersection(rhs)
    }
}

/// Mask of a possibly absent set; `None` is 0.
pub fn to_mask(flags: Option<&SzFlagSet>) -> u64 {
    flags.map_or(0, SzFlagSet::mask)
}

/// Union where an absent operand counts as empty.
pub fn union(a: Option<&SzFlagSet>, b: Option<&SzFlagSet>) -> SzFlagSet {
    match (a, b) {
        (Some(a), Some(b)) => a.union(b),
        (Some(only), None) | (None, Some(only)) => only.clone(),
        (None, None) => SzFlagSet::new(),
    }
}

/// Intersection where an absent operand counts as empty.
pub fn intersect(a: Option<&SzFlagSet>, b: Option<&SzFlagSet>) -> SzFlagSet {
    match (a, b) {
        (Some(a), Some(b)) => a.intersection(b),
        _ => SzFlagSet::new(),
    }
}

/// Whether two possibly absent sets share a flag.
pub fn intersects(a: Option<&SzFlagSet>, b: Option<&SzFlagSet>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.intersects(b),
        _ => false,
    }
}

/// Render a possibly absent set by member name.
pub fn format_flags(flags: Option<&SzFlagSet>) -> String {
    match flags {
        Some(flags) => flags.format(),
        None => SzFlagSet::new().format(),
    }
}

/// Render a mask, with a group's preferred names when one is given.
pub fn format_mask(mask: u64, group: Option<SzFlagUsageGroup>) -> String {
    match group {
        Some(group) => group.format_mask(mask),
        None => bootstrap::format_ungrouped_mask(mask),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SzFlagSet {
        SzFlagSet::from([SzFlag::EntityIncludeEntityName, SzFlag::WithInfo])
    }

    #[test]
    fn mask_combines_values() {
        assert_eq!(
            sample().mask(),
            SzFlag::EntityIncludeEntityName.value() | SzFlag::WithInfo.value()
        );
        assert_eq!(to_mask(None), 0);
        assert_eq!(to_mask(Some(&sample())), sample().mask());
    }

    #[test]
    fn absent_sets_are_empty() {
        let s = sample();
        assert_eq!(union(None, Some(&s)), s);
        assert_eq!(union(Some(&s), None), s);
        assert_eq!(union(None, None), SzFlagSet::new());
        assert!(intersect(None, Some(&s)).is_empty());
        assert!(intersect(Some(&s), None).is_empty());
        assert!(!intersects(None, Some(&s)));
    }

    #[test]
    fn union_and_intersection_are_idempotent() {
        let s = sample();
        assert_eq!(union(Some(&s), Some(&s)), s);
        assert_eq!(intersect(Some(&s), Some(&s)), s);
    }

    #[test]
    fn set_algebra_leaves_inputs_alone() {
        let a = sample();
        let b = SzFlagSet::from([SzFlag::WithInfo, SzFlag::FindPathStrictAvoid]);
        let both = &a | &b;
        let common = &a & &b;
        assert_eq!(both.len(), 3);
        assert_eq!(common, SzFlagSet::from([SzFlag::WithInfo]));
        assert!(a.intersects(&b));
        assert_eq!(a, sample());
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn aliases_are_distinct_members() {
        let set = SzFlagSet::from([
            SzFlag::SearchIncludeResolved,
            SzFlag::ExportIncludeMultiRecordEntities,
        ]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.mask(), 0x1);
    }

    #[test]
    fn from_mask_with_group_prefers_group_names() {
        let set = SzFlagSet::from_mask(0x3, Some(SzFlagUsageGroup::Search));
        assert_eq!(
            set,
            SzFlagSet::from([
                SzFlag::SearchIncludeResolved,
                SzFlag::SearchIncludePossiblySame
            ])
        );
        let set = SzFlagSet::from_mask(0x3, Some(SzFlagUsageGroup::Export));
        assert!(set.contains(SzFlag::ExportIncludeMultiRecordEntities));
        assert!(!set.contains(SzFlag::SearchIncludeResolved));
    }

    #[test]
    fn from_mask_without_group_keeps_aliases() {
        let set = SzFlagSet::from_mask(0x1 | (1 << 63), None);
        assert_eq!(
            set,
            SzFlagSet::from([
                SzFlag::ExportIncludeMultiRecordEntities,
                SzFlag::SearchIncludeResolved
            ])
        );
    }

    #[test]
    fn format_lists_members_in_order() {
        assert_eq!(
            sample().format(),
            "SZ_ENTITY_INCLUDE_ENTITY_NAME | SZ_WITH_INFO [4000 0000 0000 1000]"
        );
        assert_eq!(format_flags(None), "SZ_NO_FLAGS [0000 0000 0000 0000]");
        assert_eq!(sample().to_string(), sample().format());
    }

    #[test]
    fn format_mask_ungrouped_uses_first_declared() {
        assert_eq!(
            format_mask(0x1, None),
            "SZ_EXPORT_INCLUDE_MULTI_RECORD_ENTITIES [0000 0000 0000 0001]"
        );
        assert_eq!(
            format_mask(0x1, Some(SzFlagUsageGroup::Search)),
            "SZ_SEARCH_INCLUDE_RESOLVED [0000 0000 0000 0001]"
        );
    }

    #[test]
    fn serde_as_name_list() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(json, r#"["SZ_ENTITY_INCLUDE_ENTITY_NAME","SZ_WITH_INFO"]"#);
        let back: SzFlagSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
