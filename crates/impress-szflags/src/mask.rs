//! Composite raw masks.
//!
//! These are plain unions of flag values. They are not catalog entries and
//! have no usage groups of their own; the matching [`SzFlagSet`] presets
//! live in [`crate::presets`].
//!
//! [`SzFlagSet`]: crate::SzFlagSet

use crate::flag::SzFlag;

pub const NO_FLAGS: u64 = 0;

pub const ENTITY_INCLUDE_ALL_RELATIONS: u64 = SzFlag::EntityIncludePossiblySameRelations.value()
    | SzFlag::EntityIncludePossiblyRelatedRelations.value()
    | SzFlag::EntityIncludeNameOnlyRelations.value()
    | SzFlag::EntityIncludeDisclosedRelations.value();

pub const EXPORT_INCLUDE_ALL_ENTITIES: u64 = SzFlag::ExportIncludeMultiRecordEntities.value()
    | SzFlag::ExportIncludeSingleRecordEntities.value();

pub const EXPORT_INCLUDE_ALL_HAVING_RELATIONSHIPS: u64 = SzFlag::ExportIncludePossiblySame.value()
    | SzFlag::ExportIncludePossiblyRelated.value()
    | SzFlag::ExportIncludeNameOnly.value()
    | SzFlag::ExportIncludeDisclosed.value();

pub const SEARCH_INCLUDE_ALL_ENTITIES: u64 = SzFlag::SearchIncludeResolved.value()
    | SzFlag::SearchIncludePossiblySame.value()
    | SzFlag::SearchIncludePossiblyRelated.value()
    | SzFlag::SearchIncludeNameOnly.value();

pub const ENTITY_CORE_FLAGS: u64 = SzFlag::EntityIncludeRepresentativeFeatures.value()
    | SzFlag::EntityIncludeEntityName.value()
    | SzFlag::EntityIncludeRecordSummary.value()
    | SzFlag::EntityIncludeRecordData.value()
    | SzFlag::EntityIncludeRecordMatchingInfo.value();

pub const ENTITY_DEFAULT_FLAGS: u64 = ENTITY_CORE_FLAGS
    | ENTITY_INCLUDE_ALL_RELATIONS
    | SzFlag::EntityIncludeRelatedEntityName.value()
    | SzFlag::EntityIncludeRelatedRecordSummary.value()
    | SzFlag::EntityIncludeRelatedMatchingInfo.value();

pub const ENTITY_BRIEF_DEFAULT_FLAGS: u64 = SzFlag::EntityIncludeRecordMatchingInfo.value()
    | ENTITY_INCLUDE_ALL_RELATIONS
    | SzFlag::EntityIncludeRelatedMatchingInfo.value();

pub const EXPORT_DEFAULT_FLAGS: u64 = EXPORT_INCLUDE_ALL_ENTITIES | ENTITY_DEFAULT_FLAGS;

pub const SEARCH_BY_ATTRIBUTES_ALL: u64 = SEARCH_INCLUDE_ALL_ENTITIES
    | SzFlag::EntityIncludeRepresentativeFeatures.value()
    | SzFlag::EntityIncludeEntityName.value()
    | SzFlag::EntityIncludeRecordSummary.value()
    | SzFlag::IncludeFeatureScores.value();

pub const SEARCH_BY_ATTRIBUTES_STRONG: u64 = SzFlag::SearchIncludeResolved.value()
    | SzFlag::SearchIncludePossiblySame.value()
    | SzFlag::EntityIncludeRepresentativeFeatures.value()
    | SzFlag::EntityIncludeEntityName.value()
    | SzFlag::EntityIncludeRecordSummary.value()
    | SzFlag::IncludeFeatureScores.value();
