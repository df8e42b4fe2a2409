//! Named flag presets.
//!
//! Presets are the recommended flag sets for each operation, built once
//! from individual flags and other presets. Each one matches the mask of the
//! same name in [`crate::mask`] where such a mask exists.

use lazy_static::lazy_static;

use crate::flag::SzFlag;
use crate::group::SzFlagUsageGroup;
use crate::set::SzFlagSet;

lazy_static! {
    pub static ref SZ_NO_FLAGS: SzFlagSet = SzFlagSet::new();

    pub static ref SZ_WITH_INFO_FLAGS: SzFlagSet = SzFlagSet::from([SzFlag::WithInfo]);

    pub static ref SZ_ADD_RECORD_DEFAULT_FLAGS: SzFlagSet = SZ_NO_FLAGS.clone();
    pub static ref SZ_DELETE_RECORD_DEFAULT_FLAGS: SzFlagSet = SZ_NO_FLAGS.clone();
    pub static ref SZ_REEVALUATE_RECORD_DEFAULT_FLAGS: SzFlagSet = SZ_NO_FLAGS.clone();
    pub static ref SZ_REEVALUATE_ENTITY_DEFAULT_FLAGS: SzFlagSet = SZ_NO_FLAGS.clone();
    pub static ref SZ_REDO_DEFAULT_FLAGS: SzFlagSet = SZ_NO_FLAGS.clone();

    pub static ref SZ_RECORD_DEFAULT_FLAGS: SzFlagSet =
        SzFlagSet::from([SzFlag::EntityIncludeRecordJsonData]);

    pub static ref SZ_RECORD_PREVIEW_DEFAULT_FLAGS: SzFlagSet =
        SzFlagSet::from([SzFlag::EntityIncludeRecordFeatureDetails]);

    pub static ref SZ_ENTITY_INCLUDE_ALL_RELATIONS: SzFlagSet = SzFlagSet::from([
        SzFlag::EntityIncludePossiblySameRelations,
        SzFlag::EntityIncludePossiblyRelatedRelations,
        SzFlag::EntityIncludeNameOnlyRelations,
        SzFlag::EntityIncludeDisclosedRelations,
    ]);

    pub static ref SZ_ENTITY_CORE_FLAGS: SzFlagSet = SzFlagSet::from([
        SzFlag::EntityIncludeRepresentativeFeatures,
        SzFlag::EntityIncludeEntityName,
        SzFlag::EntityIncludeRecordSummary,
        SzFlag::EntityIncludeRecordData,
        SzFlag::EntityIncludeRecordMatchingInfo,
    ]);

    pub static ref SZ_ENTITY_DEFAULT_FLAGS: SzFlagSet = SZ_ENTITY_CORE_FLAGS
        .union(&SZ_ENTITY_INCLUDE_ALL_RELATIONS)
        .with(SzFlag::EntityIncludeRelatedEntityName)
        .with(SzFlag::EntityIncludeRelatedRecordSummary)
        .with(SzFlag::EntityIncludeRelatedMatchingInfo);

    pub static ref SZ_ENTITY_BRIEF_DEFAULT_FLAGS: SzFlagSet = SZ_ENTITY_INCLUDE_ALL_RELATIONS
        .clone()
        .with(SzFlag::EntityIncludeRecordMatchingInfo)
        .with(SzFlag::EntityIncludeRelatedMatchingInfo);

    pub static ref SZ_EXPORT_INCLUDE_ALL_ENTITIES: SzFlagSet = SzFlagSet::from([
        SzFlag::ExportIncludeMultiRecordEntities,
        SzFlag::ExportIncludeSingleRecordEntities,
    ]);

    pub static ref SZ_EXPORT_INCLUDE_ALL_HAVING_RELATIONSHIPS: SzFlagSet = SzFlagSet::from([
        SzFlag::ExportIncludePossiblySame,
        SzFlag::ExportIncludePossiblyRelated,
        SzFlag::ExportIncludeNameOnly,
        SzFlag::ExportIncludeDisclosed,
    ]);

    pub static ref SZ_EXPORT_DEFAULT_FLAGS: SzFlagSet =
        SZ_EXPORT_INCLUDE_ALL_ENTITIES.union(&SZ_ENTITY_DEFAULT_FLAGS);

    pub static ref SZ_FIND_PATH_DEFAULT_FLAGS: SzFlagSet = SzFlagSet::from([
        SzFlag::FindPathIncludeMatchingInfo,
        SzFlag::EntityIncludeEntityName,
        SzFlag::EntityIncludeRecordSummary,
    ]);

    pub static ref SZ_FIND_NETWORK_DEFAULT_FLAGS: SzFlagSet = SzFlagSet::from([
        SzFlag::FindNetworkIncludeMatchingInfo,
        SzFlag::EntityIncludeEntityName,
        SzFlag::EntityIncludeRecordSummary,
    ]);

    pub static ref SZ_WHY_ENTITIES_DEFAULT_FLAGS: SzFlagSet =
        SzFlagSet::from([SzFlag::IncludeFeatureScores]);
    pub static ref SZ_WHY_RECORDS_DEFAULT_FLAGS: SzFlagSet = SZ_WHY_ENTITIES_DEFAULT_FLAGS.clone();
    pub static ref SZ_WHY_RECORD_IN_ENTITY_DEFAULT_FLAGS: SzFlagSet =
        SZ_WHY_ENTITIES_DEFAULT_FLAGS.clone();
    pub static ref SZ_WHY_SEARCH_DEFAULT_FLAGS: SzFlagSet = SZ_WHY_ENTITIES_DEFAULT_FLAGS.clone();
    pub static ref SZ_HOW_ENTITY_DEFAULT_FLAGS: SzFlagSet = SZ_WHY_ENTITIES_DEFAULT_FLAGS.clone();

    // Virtual entities have no relationships to report.
    pub static ref SZ_VIRTUAL_ENTITY_DEFAULT_FLAGS: SzFlagSet = SZ_ENTITY_CORE_FLAGS.clone();

    pub static ref SZ_SEARCH_INCLUDE_ALL_ENTITIES: SzFlagSet = SzFlagSet::from([
        SzFlag::SearchIncludeResolved,
        SzFlag::SearchIncludePossiblySame,
        SzFlag::SearchIncludePossiblyRelated,
        SzFlag::SearchIncludeNameOnly,
    ]);

    pub static ref SZ_SEARCH_BY_ATTRIBUTES_MINIMAL_ALL: SzFlagSet =
        SZ_SEARCH_INCLUDE_ALL_ENTITIES.clone();

    pub static ref SZ_SEARCH_BY_ATTRIBUTES_MINIMAL_STRONG: SzFlagSet = SzFlagSet::from([
        SzFlag::SearchIncludeResolved,
        SzFlag::SearchIncludePossiblySame,
    ]);

    static ref SEARCH_RESULT_DETAIL: SzFlagSet = SzFlagSet::from([
        SzFlag::EntityIncludeRepresentativeFeatures,
        SzFlag::EntityIncludeEntityName,
        SzFlag::EntityIncludeRecordSummary,
        SzFlag::IncludeFeatureScores,
    ]);

    pub static ref SZ_SEARCH_BY_ATTRIBUTES_ALL: SzFlagSet =
        SZ_SEARCH_BY_ATTRIBUTES_MINIMAL_ALL.union(&SEARCH_RESULT_DETAIL);

    pub static ref SZ_SEARCH_BY_ATTRIBUTES_STRONG: SzFlagSet =
        SZ_SEARCH_BY_ATTRIBUTES_MINIMAL_STRONG.union(&SEARCH_RESULT_DETAIL);

    pub static ref SZ_SEARCH_BY_ATTRIBUTES_DEFAULT_FLAGS: SzFlagSet =
        SZ_SEARCH_BY_ATTRIBUTES_ALL.clone();

    // Every flag each group recognizes.
    pub static ref SZ_ADD_RECORD_ALL_FLAGS: SzFlagSet = SzFlagUsageGroup::AddRecord.flags().clone();
    pub static ref SZ_DELETE_RECORD_ALL_FLAGS: SzFlagSet =
        SzFlagUsageGroup::DeleteRecord.flags().clone();
    pub static ref SZ_REEVALUATE_RECORD_ALL_FLAGS: SzFlagSet =
        SzFlagUsageGroup::ReevaluateRecord.flags().clone();
    pub static ref SZ_REEVALUATE_ENTITY_ALL_FLAGS: SzFlagSet =
        SzFlagUsageGroup::ReevaluateEntity.flags().clone();
    pub static ref SZ_REDO_ALL_FLAGS: SzFlagSet = SzFlagUsageGroup::Redo.flags().clone();
    pub static ref SZ_RECORD_ALL_FLAGS: SzFlagSet = SzFlagUsageGroup::Record.flags().clone();
    pub static ref SZ_RECORD_PREVIEW_ALL_FLAGS: SzFlagSet =
        SzFlagUsageGroup::RecordPreview.flags().clone();
    pub static ref SZ_ENTITY_ALL_FLAGS: SzFlagSet = SzFlagUsageGroup::Entity.flags().clone();
    pub static ref SZ_EXPORT_ALL_FLAGS: SzFlagSet = SzFlagUsageGroup::Export.flags().clone();
    pub static ref SZ_FIND_PATH_ALL_FLAGS: SzFlagSet = SzFlagUsageGroup::FindPath.flags().clone();
    pub static ref SZ_FIND_NETWORK_ALL_FLAGS: SzFlagSet =
        SzFlagUsageGroup::FindNetwork.flags().clone();
    pub static ref SZ_WHY_RECORD_IN_ENTITY_ALL_FLAGS: SzFlagSet =
        SzFlagUsageGroup::WhyRecordInEntity.flags().clone();
    pub static ref SZ_WHY_RECORDS_ALL_FLAGS: SzFlagSet =
        SzFlagUsageGroup::WhyRecords.flags().clone();
    pub static ref SZ_WHY_ENTITIES_ALL_FLAGS: SzFlagSet =
        SzFlagUsageGroup::WhyEntities.flags().clone();
    pub static ref SZ_WHY_SEARCH_ALL_FLAGS: SzFlagSet = SzFlagUsageGroup::WhySearch.flags().clone();
    pub static ref SZ_HOW_ALL_FLAGS: SzFlagSet = SzFlagUsageGroup::How.flags().clone();
    pub static ref SZ_VIRTUAL_ENTITY_ALL_FLAGS: SzFlagSet =
        SzFlagUsageGroup::VirtualEntity.flags().clone();
    pub static ref SZ_SEARCH_ALL_FLAGS: SzFlagSet = SzFlagUsageGroup::Search.flags().clone();

    static ref REGISTRY: Vec<(&'static str, &'static SzFlagSet)> = vec![
        ("SZ_NO_FLAGS", &*SZ_NO_FLAGS),
        ("SZ_WITH_INFO_FLAGS", &*SZ_WITH_INFO_FLAGS),
        ("SZ_ADD_RECORD_DEFAULT_FLAGS", &*SZ_ADD_RECORD_DEFAULT_FLAGS),
        ("SZ_DELETE_RECORD_DEFAULT_FLAGS", &*SZ_DELETE_RECORD_DEFAULT_FLAGS),
        ("SZ_REEVALUATE_RECORD_DEFAULT_FLAGS", &*SZ_REEVALUATE_RECORD_DEFAULT_FLAGS),
        ("SZ_REEVALUATE_ENTITY_DEFAULT_FLAGS", &*SZ_REEVALUATE_ENTITY_DEFAULT_FLAGS),
        ("SZ_REDO_DEFAULT_FLAGS", &*SZ_REDO_DEFAULT_FLAGS),
        ("SZ_RECORD_DEFAULT_FLAGS", &*SZ_RECORD_DEFAULT_FLAGS),
        ("SZ_RECORD_PREVIEW_DEFAULT_FLAGS", &*SZ_RECORD_PREVIEW_DEFAULT_FLAGS),
        ("SZ_ENTITY_INCLUDE_ALL_RELATIONS", &*SZ_ENTITY_INCLUDE_ALL_RELATIONS),
        ("SZ_ENTITY_CORE_FLAGS", &*SZ_ENTITY_CORE_FLAGS),
        ("SZ_ENTITY_DEFAULT_FLAGS", &*SZ_ENTITY_DEFAULT_FLAGS),
        ("SZ_ENTITY_BRIEF_DEFAULT_FLAGS", &*SZ_ENTITY_BRIEF_DEFAULT_FLAGS),
        ("SZ_EXPORT_INCLUDE_ALL_ENTITIES", &*SZ_EXPORT_INCLUDE_ALL_ENTITIES),
        (
            "SZ_EXPORT_INCLUDE_ALL_HAVING_RELATIONSHIPS",
            &*SZ_EXPORT_INCLUDE_ALL_HAVING_RELATIONSHIPS,
        ),
        ("SZ_EXPORT_DEFAULT_FLAGS", &*SZ_EXPORT_DEFAULT_FLAGS),
        ("SZ_FIND_PATH_DEFAULT_FLAGS", &*SZ_FIND_PATH_DEFAULT_FLAGS),
        ("SZ_FIND_NETWORK_DEFAULT_FLAGS", &*SZ_FIND_NETWORK_DEFAULT_FLAGS),
        ("SZ_WHY_ENTITIES_DEFAULT_FLAGS", &*SZ_WHY_ENTITIES_DEFAULT_FLAGS),
        ("SZ_WHY_RECORDS_DEFAULT_FLAGS", &*SZ_WHY_RECORDS_DEFAULT_FLAGS),
        ("SZ_WHY_RECORD_IN_ENTITY_DEFAULT_FLAGS", &*SZ_WHY_RECORD_IN_ENTITY_DEFAULT_FLAGS),
        ("SZ_WHY_SEARCH_DEFAULT_FLAGS", &*SZ_WHY_SEARCH_DEFAULT_FLAGS),
        ("SZ_HOW_ENTITY_DEFAULT_FLAGS", &*SZ_HOW_ENTITY_DEFAULT_FLAGS),
        ("SZ_VIRTUAL_ENTITY_DEFAULT_FLAGS", &*SZ_VIRTUAL_ENTITY_DEFAULT_FLAGS),
        ("SZ_SEARCH_INCLUDE_ALL_ENTITIES", &*SZ_SEARCH_INCLUDE_ALL_ENTITIES),
        ("SZ_SEARCH_BY_ATTRIBUTES_ALL", &*SZ_SEARCH_BY_ATTRIBUTES_ALL),
        ("SZ_SEARCH_BY_ATTRIBUTES_STRONG", &*SZ_SEARCH_BY_ATTRIBUTES_STRONG),
        ("SZ_SEARCH_BY_ATTRIBUTES_MINIMAL_ALL", &*SZ_SEARCH_BY_ATTRIBUTES_MINIMAL_ALL),
        ("SZ_SEARCH_BY_ATTRIBUTES_MINIMAL_STRONG", &*SZ_SEARCH_BY_ATTRIBUTES_MINIMAL_STRONG),
        ("SZ_SEARCH_BY_ATTRIBUTES_DEFAULT_FLAGS", &*SZ_SEARCH_BY_ATTRIBUTES_DEFAULT_FLAGS),
        ("SZ_ADD_RECORD_ALL_FLAGS", &*SZ_ADD_RECORD_ALL_FLAGS),
        ("SZ_DELETE_RECORD_ALL_FLAGS", &*SZ_DELETE_RECORD_ALL_FLAGS),
        ("SZ_REEVALUATE_RECORD_ALL_FLAGS", &*SZ_REEVALUATE_RECORD_ALL_FLAGS),
        ("SZ_REEVALUATE_ENTITY_ALL_FLAGS", &*SZ_REEVALUATE_ENTITY_ALL_FLAGS),
        ("SZ_REDO_ALL_FLAGS", &*SZ_REDO_ALL_FLAGS),
        ("SZ_RECORD_ALL_FLAGS", &*SZ_RECORD_ALL_FLAGS),
        ("SZ_RECORD_PREVIEW_ALL_FLAGS", &*SZ_RECORD_PREVIEW_ALL_FLAGS),
        ("SZ_ENTITY_ALL_FLAGS", &*SZ_ENTITY_ALL_FLAGS),
        ("SZ_EXPORT_ALL_FLAGS", &*SZ_EXPORT_ALL_FLAGS),
        ("SZ_FIND_PATH_ALL_FLAGS", &*SZ_FIND_PATH_ALL_FLAGS),
        ("SZ_FIND_NETWORK_ALL_FLAGS", &*SZ_FIND_NETWORK_ALL_FLAGS),
        ("SZ_WHY_RECORD_IN_ENTITY_ALL_FLAGS", &*SZ_WHY_RECORD_IN_ENTITY_ALL_FLAGS),
        ("SZ_WHY_RECORDS_ALL_FLAGS", &*SZ_WHY_RECORDS_ALL_FLAGS),
        ("SZ_WHY_ENTITIES_ALL_FLAGS", &*SZ_WHY_ENTITIES_ALL_FLAGS),
        ("SZ_WHY_SEARCH_ALL_FLAGS", &*SZ_WHY_SEARCH_ALL_FLAGS),
        ("SZ_HOW_ALL_FLAGS", &*SZ_HOW_ALL_FLAGS),
        ("SZ_VIRTUAL_ENTITY_ALL_FLAGS", &*SZ_VIRTUAL_ENTITY_ALL_FLAGS),
        ("SZ_SEARCH_ALL_FLAGS", &*SZ_SEARCH_ALL_FLAGS),
    ];
}

/// Every named preset, in a fixed order.
pub fn all_presets() -> &'static [(&'static str, &'static SzFlagSet)] {
    &REGISTRY
}

/// Look up a preset by name.
pub fn preset_named(name: &str) -> Option<&'static SzFlagSet> {
    REGISTRY
        .iter()
        .find(|(preset, _)| *preset == name)
        .map(|(_, flags)| *flags)
}
