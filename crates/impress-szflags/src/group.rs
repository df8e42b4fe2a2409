//! Usage groups: the categories of engine operations that accept flags.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bootstrap;
use crate::catalog::GROUP_SUFFIX;
use crate::flag::SzFlag;
use crate::set::SzFlagSet;

/// A category of operations sharing a recognized subset of flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
pub enum SzFlagUsageGroup {
    AddRecord,
    DeleteRecord,
    ReevaluateRecord,
    ReevaluateEntity,
    Redo,
    Record,
    RecordPreview,
    Entity,
    Export,
    FindPath,
    FindNetwork,
    WhyRecordInEntity,
    WhyRecords,
    WhyEntities,
    WhySearch,
    How,
    VirtualEntity,
    Search,
}

impl SzFlagUsageGroup {
    /// Every group in declaration order.
    pub const ALL: [SzFlagUsageGroup; 18] = [
        SzFlagUsageGroup::AddRecord,
        SzFlagUsageGroup::DeleteRecord,
        SzFlagUsageGroup::ReevaluateRecord,
        SzFlagUsageGroup::ReevaluateEntity,
        SzFlagUsageGroup::Redo,
        SzFlagUsageGroup::Record,
        SzFlagUsageGroup::RecordPreview,
        SzFlagUsageGroup::Entity,
        SzFlagUsageGroup::Export,
        SzFlagUsageGroup::FindPath,
        SzFlagUsageGroup::FindNetwork,
        SzFlagUsageGroup::WhyRecordInEntity,
        SzFlagUsageGroup::WhyRecords,
        SzFlagUsageGroup::WhyEntities,
        SzFlagUsageGroup::WhySearch,
        SzFlagUsageGroup::How,
        SzFlagUsageGroup::VirtualEntity,
        SzFlagUsageGroup::Search,
    ];

    /// Symbolic name, e.g. `SZ_ENTITY_FLAGS`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AddRecord => "SZ_ADD_RECORD_FLAGS",
            Self::DeleteRecord => "SZ_DELETE_RECORD_FLAGS",
            Self::ReevaluateRecord => "SZ_REEVALUATE_RECORD_FLAGS",
            Self::ReevaluateEntity => "SZ_REEVALUATE_ENTITY_FLAGS",
            Self::Redo => "SZ_REDO_FLAGS",
            Self::Record => "SZ_RECORD_FLAGS",
            Self::RecordPreview => "SZ_RECORD_PREVIEW_FLAGS",
            Self::Entity => "SZ_ENTITY_FLAGS",
            Self::Export => "SZ_EXPORT_FLAGS",
            Self::FindPath => "SZ_FIND_PATH_FLAGS",
            Self::FindNetwork => "SZ_FIND_NETWORK_FLAGS",
            Self::WhyRecordInEntity => "SZ_WHY_RECORD_IN_ENTITY_FLAGS",
            Self::WhyRecords => "SZ_WHY_RECORDS_FLAGS",
            Self::WhyEntities => "SZ_WHY_ENTITIES_FLAGS",
            Self::WhySearch => "SZ_WHY_SEARCH_FLAGS",
            Self::How => "SZ_HOW_FLAGS",
            Self::VirtualEntity => "SZ_VIRTUAL_ENTITY_FLAGS",
            Self::Search => "SZ_SEARCH_FLAGS",
        }
    }

    /// Name without the `_FLAGS` suffix. Flags starting with this prefix
    /// are the group's preferred names for their bits.
    pub fn prefix(self) -> &'static str {
        let name = self.name();
        name.strip_suffix(GROUP_SUFFIX).unwrap_or(name)
    }

    /// Look up a group by its symbolic name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|group| group.name() == name)
    }

    /// Flags that declare membership in this group.
    pub fn flags(self) -> &'static SzFlagSet {
        bootstrap::group_members(self)
    }

    /// OR of every member's value.
    pub fn mask(self) -> u64 {
        self.flags().mask()
    }

    /// The group's preferred flag for a bit position.
    pub fn flag_for_bit(self, bit: u32) -> Option<SzFlag> {
        bootstrap::flag_for_bit(self, bit)
    }

    /// Keep only the bits this group recognizes.
    ///
    /// A bit is recognized when some member owns it, so a non-member that
    /// aliases a member's bit is kept.
    pub fn recognize(self, mask: u64) -> u64 {
        mask & self.mask()
    }

    /// Whether an operation in this group observes `flag`.
    pub fn recognizes(self, flag: SzFlag) -> bool {
        self.recognize(flag.value()) != 0
    }

    /// Label rendered for an empty mask.
    pub fn no_flags_label(self) -> &'static str {
        bootstrap::no_flags_label(self)
    }

    /// Render a mask with this group's preferred names.
    ///
    /// ```
    /// use impress_szflags::{SzFlag, SzFlagUsageGroup};
    /// let mask = SzFlag::EntityIncludeEntityName.value() | SzFlag::EntityIncludeRecordSummary.value();
    /// assert_eq!(
    ///     SzFlagUsageGroup::Entity.format_mask(mask),
    ///     "SZ_ENTITY_INCLUDE_ENTITY_NAME | SZ_ENTITY_INCLUDE_RECORD_SUMMARY [0000 0000 0000 3000]"
    /// );
    /// ```
    pub fn format_mask(self, mask: u64) -> String {
        bootstrap::format_group_mask(self, mask)
    }

    /// Recommended flags for operations in this group.
    pub fn default_flags(self) -> &'static SzFlagSet {
        use crate::presets::*;
        match self {
            Self::AddRecord => &*SZ_ADD_RECORD_DEFAULT_FLAGS,
            Self::DeleteRecord => &*SZ_DELETE_RECORD_DEFAULT_FLAGS,
            Self::ReevaluateRecord => &*SZ_REEVALUATE_RECORD_DEFAULT_FLAGS,
            Self::ReevaluateEntity => &*SZ_REEVALUATE_ENTITY_DEFAULT_FLAGS,
            Self::Redo => &*SZ_REDO_DEFAULT_FLAGS,
            Self::Record => &*SZ_RECORD_DEFAULT_FLAGS,
            Self::RecordPreview => &*SZ_RECORD_PREVIEW_DEFAULT_FLAGS,
            Self::Entity => &*SZ_ENTITY_DEFAULT_FLAGS,
            Self::Export => &*SZ_EXPORT_DEFAULT_FLAGS,
            Self::FindPath => &*SZ_FIND_PATH_DEFAULT_FLAGS,
            Self::FindNetwork => &*SZ_FIND_NETWORK_DEFAULT_FLAGS,
            Self::WhyRecordInEntity => &*SZ_WHY_RECORD_IN_ENTITY_DEFAULT_FLAGS,
            Self::WhyRecords => &*SZ_WHY_RECORDS_DEFAULT_FLAGS,
            Self::WhyEntities => &*SZ_WHY_ENTITIES_DEFAULT_FLAGS,
            Self::WhySearch => &*SZ_WHY_SEARCH_DEFAULT_FLAGS,
            Self::How => &*SZ_HOW_ENTITY_DEFAULT_FLAGS,
            Self::VirtualEntity => &*SZ_VIRTUAL_ENTITY_DEFAULT_FLAGS,
            Self::Search => &*SZ_SEARCH_BY_ATTRIBUTES_DEFAULT_FLAGS,
        }
    }
}

impl fmt::Display for SzFlagUsageGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<SzFlagUsageGroup> for &'static str {
    fn from(group: SzFlagUsageGroup) -> Self {
        group.name()
    }
}

impl TryFrom<String> for SzFlagUsageGroup {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        SzFlagUsageGroup::from_name(&name).ok_or_else(|| format!("unknown usage group: {}", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_strips_suffix() {
        assert_eq!(SzFlagUsageGroup::Search.prefix(), "SZ_SEARCH");
        assert_eq!(
            SzFlagUsageGroup::WhyRecordInEntity.prefix(),
            "SZ_WHY_RECORD_IN_ENTITY"
        );
    }

    #[test]
    fn names_round_trip() {
        for group in SzFlagUsageGroup::ALL {
            assert_eq!(SzFlagUsageGroup::from_name(group.name()), Some(group));
            assert!(group.name().ends_with(GROUP_SUFFIX));
        }
    }

    #[test]
    fn every_group_has_members() {
        for group in SzFlagUsageGroup::ALL {
            assert!(!group.flags().is_empty(), "{} has no flags", group);
        }
    }

    #[test]
    fn modify_groups_only_take_with_info() {
        for group in [
            SzFlagUsageGroup::AddRecord,
            SzFlagUsageGroup::DeleteRecord,
            SzFlagUsageGroup::ReevaluateRecord,
            SzFlagUsageGroup::ReevaluateEntity,
            SzFlagUsageGroup::Redo,
        ] {
            let flags: Vec<SzFlag> = group.flags().iter().collect();
            assert_eq!(flags, vec![SzFlag::WithInfo]);
        }
    }

    #[test]
    fn recognize_drops_foreign_bits() {
        let mask = SzFlag::WithInfo.value() | SzFlag::EntityIncludeEntityName.value();
        assert_eq!(
            SzFlagUsageGroup::AddRecord.recognize(mask),
            SzFlag::WithInfo.value()
        );
        assert!(!SzFlagUsageGroup::AddRecord.recognizes(SzFlag::EntityIncludeEntityName));
    }

    #[test]
    fn aliased_bit_is_recognized() {
        // Not a search member, but shares its bit with SZ_SEARCH_INCLUDE_RESOLVED.
        assert!(!SzFlag::ExportIncludeMultiRecordEntities.is_in(SzFlagUsageGroup::Search));
        assert!(SzFlagUsageGroup::Search.recognizes(SzFlag::ExportIncludeMultiRecordEntities));
    }

    #[test]
    fn search_names_its_own_alias() {
        assert_eq!(
            SzFlagUsageGroup::Search.flag_for_bit(0),
            Some(SzFlag::SearchIncludeResolved)
        );
        assert_eq!(
            SzFlagUsageGroup::Export.flag_for_bit(0),
            Some(SzFlag::ExportIncludeMultiRecordEntities)
        );
        assert_eq!(SzFlagUsageGroup::Record.flag_for_bit(0), None);
    }

    #[test]
    fn default_flags_are_recognized() {
        for group in SzFlagUsageGroup::ALL {
            let mask = group.default_flags().mask();
            assert_eq!(group.recognize(mask), mask, "{}", group);
        }
    }
}
