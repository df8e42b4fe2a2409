//! The atomic engine flags.
//!
//! Every flag is one bit of a 64-bit option mask. A few flags intentionally
//! share a bit with another flag (the `SZ_SEARCH_INCLUDE_*` entity filters
//! reuse the export filter bits), so the value alone does not identify a
//! flag. Each flag is authored against a [`Membership`] placeholder rather
//! than a list of usage groups; the bootstrap pass swaps the placeholder for
//! the finished group set.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bootstrap;
use crate::catalog::single_bit_index;
use crate::group::SzFlagUsageGroup;

/// Placeholder descriptors for the group combinations flags are authored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Membership {
    /// Operations that add, delete, or re-evaluate data.
    Modify,
    /// Anything that returns record-level detail.
    Record,
    /// Anything that returns entity-level detail.
    Entity,
    /// Anything that returns an entity with its relationships.
    Relation,
    Export,
    FindPath,
    FindNetwork,
    /// Operations that report match scores.
    Score,
    Search,
}

impl Membership {
    pub const ALL: [Membership; 9] = [
        Membership::Modify,
        Membership::Record,
        Membership::Entity,
        Membership::Relation,
        Membership::Export,
        Membership::FindPath,
        Membership::FindNetwork,
        Membership::Score,
        Membership::Search,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Modify => "SZ_MODIFY_SET",
            Self::Record => "SZ_RECORD_SET",
            Self::Entity => "SZ_ENTITY_SET",
            Self::Relation => "SZ_RELATION_SET",
            Self::Export => "SZ_EXPORT_SET",
            Self::FindPath => "SZ_FIND_PATH_SET",
            Self::FindNetwork => "SZ_FIND_NETWORK_SET",
            Self::Score => "SZ_SCORE_SET",
            Self::Search => "SZ_SEARCH_SET",
        }
    }
}

/// An atomic engine option flag.
///
/// Flags order by declaration, which is also the iteration order of
/// [`SzFlagSet`](crate::SzFlagSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
pub enum SzFlag {
    // Export entity filters
    ExportIncludeMultiRecordEntities,
    ExportIncludePossiblySame,
    ExportIncludePossiblyRelated,
    ExportIncludeNameOnly,
    ExportIncludeDisclosed,
    ExportIncludeSingleRecordEntities,

    // Relationship detail
    EntityIncludePossiblySameRelations,
    EntityIncludePossiblyRelatedRelations,
    EntityIncludeNameOnlyRelations,
    EntityIncludeDisclosedRelations,

    // Entity detail
    EntityIncludeAllFeatures,
    EntityIncludeRepresentativeFeatures,
    EntityIncludeEntityName,
    EntityIncludeRecordSummary,
    EntityIncludeRecordTypes,
    EntityIncludeRecordData,
    EntityIncludeRecordMatchingInfo,
    EntityIncludeRecordDates,

    // Record detail
    EntityIncludeRecordJsonData,
    EntityIncludeRecordUnmappedData,
    EntityIncludeRecordFeatures,
    EntityIncludeRecordFeatureDetails,
    EntityIncludeRecordFeatureStats,

    // Related entity detail
    EntityIncludeRelatedEntityName,
    EntityIncludeRelatedMatchingInfo,
    EntityIncludeRelatedRecordSummary,
    EntityIncludeRelatedRecordTypes,
    EntityIncludeRelatedRecordData,

    // Feature internals
    EntityIncludeInternalFeatures,
    EntityIncludeFeatureStats,

    // Path and network
    FindPathStrictAvoid,
    FindPathIncludeMatchingInfo,
    FindNetworkIncludeMatchingInfo,

    // Scoring detail
    IncludeFeatureScores,
    IncludeMatchKeyDetails,

    // Search results
    SearchIncludeStats,
    SearchIncludeAllCandidates,
    SearchIncludeRequest,
    SearchIncludeRequestDetails,
    SearchIncludeResolved,
    SearchIncludePossiblySame,
    SearchIncludePossiblyRelated,
    SearchIncludeNameOnly,

    // Modification responses
    WithInfo,
}

impl SzFlag {
    /// Every flag in declaration order.
    pub const ALL: [SzFlag; 44] = [
        SzFlag::ExportIncludeMultiRecordEntities,
        SzFlag::ExportIncludePossiblySame,
        SzFlag::ExportIncludePossiblyRelated,
        SzFlag::ExportIncludeNameOnly,
        SzFlag::ExportIncludeDisclosed,
        SzFlag::ExportIncludeSingleRecordEntities,
        SzFlag::EntityIncludePossiblySameRelations,
        SzFlag::EntityIncludePossiblyRelatedRelations,
        SzFlag::EntityIncludeNameOnlyRelations,
        SzFlag::EntityIncludeDisclosedRelations,
        SzFlag::EntityIncludeAllFeatures,
        SzFlag::EntityIncludeRepresentativeFeatures,
        SzFlag::EntityIncludeEntityName,
        SzFlag::EntityIncludeRecordSummary,
        SzFlag::EntityIncludeRecordTypes,
        SzFlag::EntityIncludeRecordData,
        SzFlag::EntityIncludeRecordMatchingInfo,
        SzFlag::EntityIncludeRecordDates,
        SzFlag::EntityIncludeRecordJsonData,
        SzFlag::EntityIncludeRecordUnmappedData,
        SzFlag::EntityIncludeRecordFeatures,
        SzFlag::EntityIncludeRecordFeatureDetails,
        SzFlag::EntityIncludeRecordFeatureStats,
        SzFlag::EntityIncludeRelatedEntityName,
        SzFlag::EntityIncludeRelatedMatchingInfo,
        SzFlag::EntityIncludeRelatedRecordSummary,
        SzFlag::EntityIncludeRelatedRecordTypes,
        SzFlag::EntityIncludeRelatedRecordData,
        SzFlag::EntityIncludeInternalFeatures,
        SzFlag::EntityIncludeFeatureStats,
        SzFlag::FindPathStrictAvoid,
        SzFlag::FindPathIncludeMatchingInfo,
        SzFlag::FindNetworkIncludeMatchingInfo,
        SzFlag::IncludeFeatureScores,
        SzFlag::IncludeMatchKeyDetails,
        SzFlag::SearchIncludeStats,
        SzFlag::SearchIncludeAllCandidates,
        SzFlag::SearchIncludeRequest,
        SzFlag::SearchIncludeRequestDetails,
        SzFlag::SearchIncludeResolved,
        SzFlag::SearchIncludePossiblySame,
        SzFlag::SearchIncludePossiblyRelated,
        SzFlag::SearchIncludeNameOnly,
        SzFlag::WithInfo,
    ];

    /// Symbolic name, e.g. `SZ_ENTITY_INCLUDE_ENTITY_NAME`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ExportIncludeMultiRecordEntities => "SZ_EXPORT_INCLUDE_MULTI_RECORD_ENTITIES",
            Self::ExportIncludePossiblySame => "SZ_EXPORT_INCLUDE_POSSIBLY_SAME",
            Self::ExportIncludePossiblyRelated => "SZ_EXPORT_INCLUDE_POSSIBLY_RELATED",
            Self::ExportIncludeNameOnly => "SZ_EXPORT_INCLUDE_NAME_ONLY",
            Self::ExportIncludeDisclosed => "SZ_EXPORT_INCLUDE_DISCLOSED",
            Self::ExportIncludeSingleRecordEntities => "SZ_EXPORT_INCLUDE_SINGLE_RECORD_ENTITIES",
            Self::EntityIncludePossiblySameRelations => "SZ_ENTITY_INCLUDE_POSSIBLY_SAME_RELATIONS",
            Self::EntityIncludePossiblyRelatedRelations => {
                "SZ_ENTITY_INCLUDE_POSSIBLY_RELATED_RELATIONS"
            }
            Self::EntityIncludeNameOnlyRelations => "SZ_ENTITY_INCLUDE_NAME_ONLY_RELATIONS",
            Self::EntityIncludeDisclosedRelations => "SZ_ENTITY_INCLUDE_DISCLOSED_RELATIONS",
            Self::EntityIncludeAllFeatures => "SZ_ENTITY_INCLUDE_ALL_FEATURES",
            Self::EntityIncludeRepresentativeFeatures => "SZ_ENTITY_INCLUDE_REPRESENTATIVE_FEATURES",
            Self::EntityIncludeEntityName => "SZ_ENTITY_INCLUDE_ENTITY_NAME",
            Self::EntityIncludeRecordSummary => "SZ_ENTITY_INCLUDE_RECORD_SUMMARY",
            Self::EntityIncludeRecordTypes => "SZ_ENTITY_INCLUDE_RECORD_TYPES",
            Self::EntityIncludeRecordData => "SZ_ENTITY_INCLUDE_RECORD_DATA",
            Self::EntityIncludeRecordMatchingInfo => "SZ_ENTITY_INCLUDE_RECORD_MATCHING_INFO",
            Self::EntityIncludeRecordDates => "SZ_ENTITY_INCLUDE_RECORD_DATES",
            Self::EntityIncludeRecordJsonData => "SZ_ENTITY_INCLUDE_RECORD_JSON_DATA",
            Self::EntityIncludeRecordUnmappedData => "SZ_ENTITY_INCLUDE_RECORD_UNMAPPED_DATA",
            Self::EntityIncludeRecordFeatures => "SZ_ENTITY_INCLUDE_RECORD_FEATURES",
            Self::EntityIncludeRecordFeatureDetails => "SZ_ENTITY_INCLUDE_RECORD_FEATURE_DETAILS",
            Self::EntityIncludeRecordFeatureStats => "SZ_ENTITY_INCLUDE_RECORD_FEATURE_STATS",
            Self::EntityIncludeRelatedEntityName => "SZ_ENTITY_INCLUDE_RELATED_ENTITY_NAME",
            Self::EntityIncludeRelatedMatchingInfo => "SZ_ENTITY_INCLUDE_RELATED_MATCHING_INFO",
            Self::EntityIncludeRelatedRecordSummary => "SZ_ENTITY_INCLUDE_RELATED_RECORD_SUMMARY",
            Self::EntityIncludeRelatedRecordTypes => "SZ_ENTITY_INCLUDE_RELATED_RECORD_TYPES",
            Self::EntityIncludeRelatedRecordData => "SZ_ENTITY_INCLUDE_RELATED_RECORD_DATA",
            Self::EntityIncludeInternalFeatures => "SZ_ENTITY_INCLUDE_INTERNAL_FEATURES",
            Self::EntityIncludeFeatureStats => "SZ_ENTITY_INCLUDE_FEATURE_STATS",
            Self::FindPathStrictAvoid => "SZ_FIND_PATH_STRICT_AVOID",
            Self::FindPathIncludeMatchingInfo => "SZ_FIND_PATH_INCLUDE_MATCHING_INFO",
            Self::FindNetworkIncludeMatchingInfo => "SZ_FIND_NETWORK_INCLUDE_MATCHING_INFO",
            Self::IncludeFeatureScores => "SZ_INCLUDE_FEATURE_SCORES",
            Self::IncludeMatchKeyDetails => "SZ_INCLUDE_MATCH_KEY_DETAILS",
            Self::SearchIncludeStats => "SZ_SEARCH_INCLUDE_STATS",
            Self::SearchIncludeAllCandidates => "SZ_SEARCH_INCLUDE_ALL_CANDIDATES",
            Self::SearchIncludeRequest => "SZ_SEARCH_INCLUDE_REQUEST",
            Self::SearchIncludeRequestDetails => "SZ_SEARCH_INCLUDE_REQUEST_DETAILS",
            Self::SearchIncludeResolved => "SZ_SEARCH_INCLUDE_RESOLVED",
            Self::SearchIncludePossiblySame => "SZ_SEARCH_INCLUDE_POSSIBLY_SAME",
            Self::SearchIncludePossiblyRelated => "SZ_SEARCH_INCLUDE_POSSIBLY_RELATED",
            Self::SearchIncludeNameOnly => "SZ_SEARCH_INCLUDE_NAME_ONLY",
            Self::WithInfo => "SZ_WITH_INFO",
        }
    }

    /// The flag's bit in the option mask.
    pub const fn value(self) -> u64 {
        match self {
            Self::ExportIncludeMultiRecordEntities => 1 << 0,
            Self::ExportIncludePossiblySame => 1 << 1,
            Self::ExportIncludePossiblyRelated => 1 << 2,
            Self::ExportIncludeNameOnly => 1 << 3,
            Self::ExportIncludeDisclosed => 1 << 4,
            Self::ExportIncludeSingleRecordEntities => 1 << 5,
            Self::EntityIncludePossiblySameRelations => 1 << 6,
            Self::EntityIncludePossiblyRelatedRelations => 1 << 7,
            Self::EntityIncludeNameOnlyRelations => 1 << 8,
            Self::EntityIncludeDisclosedRelations => 1 << 9,
            Self::EntityIncludeAllFeatures => 1 << 10,
            Self::EntityIncludeRepresentativeFeatures => 1 << 11,
            Self::EntityIncludeEntityName => 1 << 12,
            Self::EntityIncludeRecordSummary => 1 << 13,
            Self::EntityIncludeRecordTypes => 1 << 28,
            Self::EntityIncludeRecordData => 1 << 14,
            Self::EntityIncludeRecordMatchingInfo => 1 << 15,
            Self::EntityIncludeRecordDates => 1 << 39,
            Self::EntityIncludeRecordJsonData => 1 << 16,
            Self::EntityIncludeRecordUnmappedData => 1 << 31,
            Self::EntityIncludeRecordFeatures => 1 << 18,
            Self::EntityIncludeRecordFeatureDetails => 1 << 35,
            Self::EntityIncludeRecordFeatureStats => 1 << 36,
            Self::EntityIncludeRelatedEntityName => 1 << 19,
            Self::EntityIncludeRelatedMatchingInfo => 1 << 20,
            Self::EntityIncludeRelatedRecordSummary => 1 << 21,
            Self::EntityIncludeRelatedRecordTypes => 1 << 29,
            Self::EntityIncludeRelatedRecordData => 1 << 22,
            Self::EntityIncludeInternalFeatures => 1 << 23,
            Self::EntityIncludeFeatureStats => 1 << 24,
            Self::FindPathStrictAvoid => 1 << 25,
            Self::FindPathIncludeMatchingInfo => 1 << 30,
            Self::FindNetworkIncludeMatchingInfo => 1 << 33,
            Self::IncludeFeatureScores => 1 << 26,
            Self::IncludeMatchKeyDetails => 1 << 34,
            Self::SearchIncludeStats => 1 << 27,
            Self::SearchIncludeAllCandidates => 1 << 32,
            Self::SearchIncludeRequest => 1 << 37,
            Self::SearchIncludeRequestDetails => 1 << 38,
            // Same bits as the export entity filters
            Self::SearchIncludeResolved => Self::ExportIncludeMultiRecordEntities.value(),
            Self::SearchIncludePossiblySame => Self::ExportIncludePossiblySame.value(),
            Self::SearchIncludePossiblyRelated => Self::ExportIncludePossiblyRelated.value(),
            Self::SearchIncludeNameOnly => Self::ExportIncludeNameOnly.value(),
            Self::WithInfo => 1 << 62,
        }
    }

    /// The placeholder this flag is authored against.
    pub const fn membership(self) -> Membership {
        match self {
            Self::ExportIncludeMultiRecordEntities
            | Self::ExportIncludePossiblySame
            | Self::ExportIncludePossiblyRelated
            | Self::ExportIncludeNameOnly
            | Self::ExportIncludeDisclosed
            | Self::ExportIncludeSingleRecordEntities => Membership::Export,

            Self::EntityIncludePossiblySameRelations
            | Self::EntityIncludePossiblyRelatedRelations
            | Self::EntityIncludeNameOnlyRelations
            | Self::EntityIncludeDisclosedRelations
            | Self::EntityIncludeRelatedEntityName
            | Self::EntityIncludeRelatedMatchingInfo
            | Self::EntityIncludeRelatedRecordSummary
            | Self::EntityIncludeRelatedRecordTypes
            | Self::EntityIncludeRelatedRecordData => Membership::Relation,

            Self::EntityIncludeAllFeatures
            | Self::EntityIncludeRepresentativeFeatures
            | Self::EntityIncludeEntityName
            | Self::EntityIncludeRecordSummary
            | Self::EntityIncludeRecordTypes
            | Self::EntityIncludeRecordData
            | Self::EntityIncludeRecordMatchingInfo
            | Self::EntityIncludeRecordDates
            | Self::EntityIncludeInternalFeatures
            | Self::EntityIncludeFeatureStats => Membership::Entity,

            Self::EntityIncludeRecordJsonData
            | Self::EntityIncludeRecordUnmappedData
            | Self::EntityIncludeRecordFeatures
            | Self::EntityIncludeRecordFeatureDetails
            | Self::EntityIncludeRecordFeatureStats => Membership::Record,

            Self::FindPathStrictAvoid | Self::FindPathIncludeMatchingInfo => Membership::FindPath,

            Self::FindNetworkIncludeMatchingInfo => Membership::FindNetwork,

            Self::IncludeFeatureScores | Self::IncludeMatchKeyDetails => Membership::Score,

            Self::SearchIncludeStats
            | Self::SearchIncludeAllCandidates
            | Self::SearchIncludeRequest
            | Self::SearchIncludeRequestDetails
            | Self::SearchIncludeResolved
            | Self::SearchIncludePossiblySame
            | Self::SearchIncludePossiblyRelated
            | Self::SearchIncludeNameOnly => Membership::Search,

            Self::WithInfo => Membership::Modify,
        }
    }

    /// Bit position of this flag's value.
    pub fn bit_index(self) -> Option<u32> {
        single_bit_index(self.value())
    }

    /// The usage groups this flag belongs to.
    pub fn groups(self) -> &'static BTreeSet<SzFlagUsageGroup> {
        bootstrap::flag_groups(self)
    }

    /// Whether this flag belongs to `group`.
    pub fn is_in(self, group: SzFlagUsageGroup) -> bool {
        self.groups().contains(&group)
    }

    /// Look up a flag by its symbolic name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|flag| flag.name() == name)
    }
}

impl fmt::Display for SzFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<SzFlag> for &'static str {
    fn from(flag: SzFlag) -> Self {
        flag.name()
    }
}

impl TryFrom<String> for SzFlag {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        SzFlag::from_name(&name).ok_or_else(|| format!("unknown flag: {}", name))
    }
}
