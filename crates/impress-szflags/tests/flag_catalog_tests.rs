//! Flag catalog integration tests

use impress_szflags::catalog::CatalogBuilder;
use impress_szflags::{
    format_mask, intersect, mask, parse_flags_mask, to_mask, union, BootstrapError, SzFlag,
    SzFlagSet, SzFlagUsageGroup, SZ_ENTITY_DEFAULT_FLAGS, SZ_FIND_PATH_DEFAULT_FLAGS,
};
use rstest::rstest;

// === Catalog invariants ===

#[test]
fn test_every_flag_maps_back_through_its_groups() {
    for flag in SzFlag::ALL {
        let mask = to_mask(Some(&SzFlagSet::from([flag])));
        assert_eq!(mask.count_ones(), 1, "{}", flag);
        let bit = mask.trailing_zeros();

        for group in flag.groups() {
            let canonical = group
                .flag_for_bit(bit)
                .unwrap_or_else(|| panic!("{} has no name for bit {}", group, bit));
            if canonical != flag {
                assert_eq!(canonical.value(), flag.value());
                assert!(canonical.name().starts_with(group.prefix()));
                assert!(!flag.name().starts_with(group.prefix()));
            }
        }
    }
}

#[test]
fn test_at_most_one_name_per_bit() {
    for group in SzFlagUsageGroup::ALL {
        for bit in 0..64 {
            if let Some(flag) = group.flag_for_bit(bit) {
                assert_eq!(flag.bit_index(), Some(bit));
                assert!(group.flags().contains(flag));
            }
        }
    }
}

#[test]
fn test_conflicting_catalog_fails_bootstrap() {
    let mut builder = CatalogBuilder::new();
    let set = builder.placeholder("SZ_SHARED_SET");
    builder.flag("SZ_LEFT_INCLUDE_THING", 1 << 5, set);
    builder.flag("SZ_RIGHT_INCLUDE_THING", 1 << 5, set);
    builder.group("SZ_OTHER_FLAGS");
    builder.resolve(set, &["SZ_OTHER_FLAGS"]);

    let err = builder.build().unwrap_err();
    assert!(matches!(err, BootstrapError::BitConflict { bit: 5, .. }));
}

// === Formatting ===

#[test]
fn test_named_and_unregistered_bits() {
    let mut builder = CatalogBuilder::new();
    let set = builder.placeholder("SZ_TEST_SET");
    builder.flag("A", 0x1, set);
    builder.flag("B", 0x2, set);
    let group = builder.group("SZ_TEST_FLAGS");
    builder.resolve(set, &["SZ_TEST_FLAGS"]);
    let catalog = builder.build().unwrap();

    assert_eq!(
        catalog.format_mask(0x3, Some(group)).unwrap(),
        "A | B [0000 0000 0000 0003]"
    );
    assert_eq!(
        catalog.format_mask(0x4, Some(group)).unwrap(),
        "0000000000000004 [0000 0000 0000 0004]"
    );
}

#[test]
fn test_zero_mask_has_label_in_every_group() {
    for group in SzFlagUsageGroup::ALL {
        assert_eq!(group.format_mask(0), "SZ_NO_FLAGS [0000 0000 0000 0000]");
    }
}

#[test]
fn test_formatting_is_deterministic() {
    for group in SzFlagUsageGroup::ALL {
        let mask = group.mask() | (1 << 63);
        assert_eq!(group.format_mask(mask), group.format_mask(mask));
    }
}

#[rstest]
#[case(SzFlagUsageGroup::Search, "SZ_SEARCH_INCLUDE_RESOLVED [0000 0000 0000 0001]")]
#[case(SzFlagUsageGroup::Export, "SZ_EXPORT_INCLUDE_MULTI_RECORD_ENTITIES [0000 0000 0000 0001]")]
#[case(SzFlagUsageGroup::Entity, "0000000000000001 [0000 0000 0000 0001]")]
fn test_shared_bit_uses_group_name(#[case] group: SzFlagUsageGroup, #[case] expected: &str) {
    assert_eq!(group.format_mask(0x1), expected);
}

#[rstest]
#[case(
    SzFlagUsageGroup::AddRecord,
    mask::NO_FLAGS | SzFlag::WithInfo.value(),
    "SZ_WITH_INFO [4000 0000 0000 0000]"
)]
#[case(
    SzFlagUsageGroup::FindPath,
    SZ_FIND_PATH_DEFAULT_FLAGS.mask(),
    "SZ_ENTITY_INCLUDE_ENTITY_NAME | SZ_ENTITY_INCLUDE_RECORD_SUMMARY | \
     SZ_FIND_PATH_INCLUDE_MATCHING_INFO [0000 0000 4000 3000]"
)]
#[case(
    SzFlagUsageGroup::Export,
    mask::EXPORT_INCLUDE_ALL_ENTITIES,
    "SZ_EXPORT_INCLUDE_MULTI_RECORD_ENTITIES | SZ_EXPORT_INCLUDE_SINGLE_RECORD_ENTITIES \
     [0000 0000 0000 0021]"
)]
fn test_format_known_masks(
    #[case] group: SzFlagUsageGroup,
    #[case] value: u64,
    #[case] expected: &str,
) {
    assert_eq!(group.format_mask(value), expected);
}

#[test]
fn test_set_formatting_is_stable() {
    let first = SZ_ENTITY_DEFAULT_FLAGS.to_string();
    let mut reversed: Vec<SzFlag> = SZ_ENTITY_DEFAULT_FLAGS.iter().collect();
    reversed.reverse();
    let rebuilt: SzFlagSet = reversed.into_iter().collect();
    assert_eq!(rebuilt.to_string(), first);
    assert!(first.ends_with("[0000 0000 0038 FBC0]"));
}

#[test]
fn test_format_then_parse() {
    for group in SzFlagUsageGroup::ALL {
        let mask = group.default_flags().mask();
        assert_eq!(parse_flags_mask(&group.format_mask(mask)).unwrap(), mask);
    }
    assert_eq!(
        parse_flags_mask(&format_mask(1 << 50, None)).unwrap(),
        1 << 50
    );
}

#[test]
fn test_concurrent_reads_agree() {
    let value = mask::SEARCH_INCLUDE_ALL_ENTITIES | SzFlag::SearchIncludeStats.value() | (1 << 63);
    let results: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(move || SzFlagUsageGroup::Search.format_mask(value)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });
    assert!(results.iter().all(|result| *result == results[0]));
    assert_eq!(results[0], SzFlagUsageGroup::Search.format_mask(value));
    assert!(results[0].starts_with("SZ_SEARCH_INCLUDE_RESOLVED | "));
}

// === Set algebra ===

#[rstest]
#[case(None, None, 0)]
#[case(Some(SzFlagSet::from([SzFlag::WithInfo])), None, 1 << 62)]
#[case(None, Some(SzFlagSet::from([SzFlag::IncludeFeatureScores])), 1 << 26)]
fn test_union_with_absent_sets(
    #[case] a: Option<SzFlagSet>,
    #[case] b: Option<SzFlagSet>,
    #[case] expected: u64,
) {
    assert_eq!(union(a.as_ref(), b.as_ref()).mask(), expected);
    assert!(intersect(a.as_ref(), b.as_ref()).is_empty());
}

#[test]
fn test_group_defaults_stay_within_group() {
    let entity = SzFlagUsageGroup::Entity.flags();
    assert_eq!(
        intersect(Some(&*SZ_ENTITY_DEFAULT_FLAGS), Some(entity)),
        *SZ_ENTITY_DEFAULT_FLAGS
    );
}
