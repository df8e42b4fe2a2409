//! One-time construction of the built-in flag catalog.
//!
//! The catalog is built on first use and never changes afterwards. Every
//! flag is declared against a [`Membership`] placeholder, every placeholder
//! is then bound to its groups, and the builder derives group members and
//! bit tables. A failure at any step is an authoring error in this crate and
//! aborts with a panic; nothing reads a partially built catalog.

use std::collections::BTreeSet;

use lazy_static::lazy_static;

use crate::catalog::{Catalog, CatalogBuilder, GroupEntry};
use crate::error::BootstrapError;
use crate::flag::{Membership, SzFlag};
use crate::format;
use crate::group::SzFlagUsageGroup;
use crate::set::SzFlagSet;

/// Label rendered for an empty mask in every built-in group.
pub const NO_FLAGS_LABEL: &str = "SZ_NO_FLAGS";

const RELATION_GROUPS: &[SzFlagUsageGroup] = &[
    SzFlagUsageGroup::Entity,
    SzFlagUsageGroup::Export,
    SzFlagUsageGroup::FindPath,
    SzFlagUsageGroup::FindNetwork,
    SzFlagUsageGroup::WhyRecordInEntity,
    SzFlagUsageGroup::WhyRecords,
    SzFlagUsageGroup::WhyEntities,
    SzFlagUsageGroup::WhySearch,
];

const ENTITY_GROUPS: &[SzFlagUsageGroup] = &[
    SzFlagUsageGroup::Entity,
    SzFlagUsageGroup::Export,
    SzFlagUsageGroup::FindPath,
    SzFlagUsageGroup::FindNetwork,
    SzFlagUsageGroup::WhyRecordInEntity,
    SzFlagUsageGroup::WhyRecords,
    SzFlagUsageGroup::WhyEntities,
    SzFlagUsageGroup::WhySearch,
    SzFlagUsageGroup::VirtualEntity,
    SzFlagUsageGroup::Search,
];

const RECORD_GROUPS: &[SzFlagUsageGroup] = &[
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
    SzFlagUsageGroup::VirtualEntity,
    SzFlagUsageGroup::Search,
];

const MODIFY_GROUPS: &[SzFlagUsageGroup] = &[
    SzFlagUsageGroup::AddRecord,
    SzFlagUsageGroup::DeleteRecord,
    SzFlagUsageGroup::ReevaluateRecord,
    SzFlagUsageGroup::ReevaluateEntity,
    SzFlagUsageGroup::Redo,
];

const SCORE_GROUPS: &[SzFlagUsageGroup] = &[
    SzFlagUsageGroup::WhyRecordInEntity,
    SzFlagUsageGroup::WhyRecords,
    SzFlagUsageGroup::WhyEntities,
    SzFlagUsageGroup::WhySearch,
    SzFlagUsageGroup::How,
    SzFlagUsageGroup::Search,
];

/// The finished group set each placeholder stands for.
fn resolution(membership: Membership) -> &'static [SzFlagUsageGroup] {
    match membership {
        Membership::Modify => MODIFY_GROUPS,
        Membership::Record => RECORD_GROUPS,
        Membership::Entity => ENTITY_GROUPS,
        Membership::Relation => RELATION_GROUPS,
        Membership::Export => &[SzFlagUsageGroup::Export],
        Membership::FindPath => &[SzFlagUsageGroup::FindPath],
        Membership::FindNetwork => &[SzFlagUsageGroup::FindNetwork],
        Membership::Score => SCORE_GROUPS,
        Membership::Search => &[SzFlagUsageGroup::Search],
    }
}

/// Build a fresh copy of the built-in catalog.
///
/// Flag and group indices in the result match the positions in
/// [`SzFlag::ALL`] and [`SzFlagUsageGroup::ALL`].
pub fn try_build_catalog() -> Result<Catalog, BootstrapError> {
    let mut builder = CatalogBuilder::new();
    builder.no_flags_label(NO_FLAGS_LABEL);

    // Phase 1: identities, with placeholders standing in for group sets.
    let placeholders: Vec<_> = Membership::ALL
        .iter()
        .map(|membership| (*membership, builder.placeholder(membership.label())))
        .collect();

    for (i, flag) in SzFlag::ALL.iter().enumerate() {
        let membership = placeholders
            .iter()
            .find(|(m, _)| *m == flag.membership())
            .map(|(_, placeholder)| *placeholder)
            .unwrap_or_else(|| builder.placeholder(flag.membership().label()));
        let index = builder.flag(flag.name(), flag.value(), membership);
        debug_assert_eq!(index.get(), i);
    }

    for group in SzFlagUsageGroup::ALL {
        builder.group(group.name());
    }

    // Phase 2: bind placeholders, then derive.
    for (membership, placeholder) in &placeholders {
        let groups: Vec<&str> = resolution(*membership).iter().map(|g| g.name()).collect();
        builder.resolve(*placeholder, &groups);
    }

    builder.build()
}

struct BuiltinCatalog {
    catalog: Catalog,
    flag_groups: Vec<BTreeSet<SzFlagUsageGroup>>,
    group_members: Vec<SzFlagSet>,
}

impl BuiltinCatalog {
    fn load() -> Result<Self, BootstrapError> {
        let catalog = try_build_catalog()?;

        let flag_groups = catalog
            .flags()
            .iter()
            .map(|entry| {
                entry
                    .groups()
                    .iter()
                    .map(|g| SzFlagUsageGroup::ALL[g.get()])
                    .collect()
            })
            .collect();

        let group_members = catalog
            .groups()
            .iter()
            .map(|entry| {
                entry
                    .members()
                    .iter()
                    .map(|f| SzFlag::ALL[f.get()])
                    .collect()
            })
            .collect();

        Ok(Self {
            catalog,
            flag_groups,
            group_members,
        })
    }
}

lazy_static! {
    static ref BUILTIN: BuiltinCatalog = match BuiltinCatalog::load() {
        Ok(builtin) => builtin,
        Err(err) => {
            tracing::error!("Flag catalog bootstrap failed: {}", err);
            panic!("flag catalog bootstrap failed: {}", err);
        }
    };
}

/// Force the built-in catalog to initialize now.
pub fn init() {
    lazy_static::initialize(&BUILTIN);
}

/// The built-in catalog.
pub fn catalog() -> &'static Catalog {
    &BUILTIN.catalog
}

fn group_entry(group: SzFlagUsageGroup) -> &'static GroupEntry {
    // Every `SzFlagUsageGroup` is declared on the built-in builder.
    let catalog = &BUILTIN.catalog;
    catalog
        .group_named(group.name())
        .and_then(|index| catalog.group(index))
        .unwrap_or_else(|| unreachable!("group {} missing from catalog", group))
}

pub(crate) fn flag_groups(flag: SzFlag) -> &'static BTreeSet<SzFlagUsageGroup> {
    &BUILTIN.flag_groups[flag as usize]
}

pub(crate) fn group_members(group: SzFlagUsageGroup) -> &'static SzFlagSet {
    &BUILTIN.group_members[group as usize]
}

pub(crate) fn flag_for_bit(group: SzFlagUsageGroup, bit: u32) -> Option<SzFlag> {
    group_entry(group)
        .symbols()
        .get(bit)
        .map(|f| SzFlag::ALL[f.get()])
}

pub(crate) fn no_flags_label(group: SzFlagUsageGroup) -> &'static str {
    group_entry(group).symbols().no_flags_label()
}

pub(crate) fn format_group_mask(group: SzFlagUsageGroup, mask: u64) -> String {
    format::format_group_mask(&BUILTIN.catalog, group_entry(group), mask)
}

pub(crate) fn format_ungrouped_mask(mask: u64) -> String {
    format::format_ungrouped_mask(&BUILTIN.catalog, mask)
}
