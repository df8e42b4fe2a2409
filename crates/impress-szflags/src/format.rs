//! Diagnostic rendering of flag masks.
//!
//! Output has the shape `NAME | NAME [XXXX XXXX XXXX XXXX]`: symbolic names
//! joined by [`SEPARATOR`], then the whole mask in bracketed hex. Bits with
//! no registered name are printed as 16-digit hex values in place of a name.

use crate::catalog::{Catalog, FlagEntry, GroupEntry, BIT_COUNT};

/// Separator between symbolic names.
pub const SEPARATOR: &str = " | ";

/// Render a mask as four space-separated groups of four hex digits.
///
/// ```
/// use impress_szflags::format::hex_mask;
/// assert_eq!(hex_mask(0x3), "0000 0000 0000 0003");
/// ```
pub fn hex_mask(mask: u64) -> String {
    format!(
        "{:04X} {:04X} {:04X} {:04X}",
        (mask >> 48) & 0xFFFF,
        (mask >> 32) & 0xFFFF,
        (mask >> 16) & 0xFFFF,
        mask & 0xFFFF
    )
}

/// Render a single unnamed value as 16 hex digits.
pub fn hex_bit(value: u64) -> String {
    format!("{:016X}", value)
}

/// Join names and append the bracketed mask. An empty name list renders
/// `no_flags_label` in place of the names.
pub fn format_names<'a, I>(names: I, mask: u64, no_flags_label: &str) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let joined = names.into_iter().collect::<Vec<_>>().join(SEPARATOR);
    let symbols = if joined.is_empty() {
        no_flags_label
    } else {
        joined.as_str()
    };
    format!("{} [{}]", symbols, hex_mask(mask))
}

/// Scan set bits in ascending order, naming each one with `lookup`.
fn scan_bits<'a, F>(mask: u64, lookup: F) -> Vec<String>
where
    F: Fn(u32) -> Option<&'a str>,
{
    (0..BIT_COUNT as u32)
        .filter(|bit| mask & (1u64 << bit) != 0)
        .map(|bit| match lookup(bit) {
            Some(name) => name.to_string(),
            None => hex_bit(1u64 << bit),
        })
        .collect()
}

pub(crate) fn format_group_mask(catalog: &Catalog, group: &GroupEntry, mask: u64) -> String {
    let symbols = group.symbols();
    if mask == 0 {
        return format_names(std::iter::empty(), 0, symbols.no_flags_label());
    }
    let names = scan_bits(mask, |bit| {
        symbols
            .get(bit)
            .and_then(|flag| catalog.flag(flag))
            .map(FlagEntry::name)
    });
    format_names(names.iter().map(String::as_str), mask, symbols.no_flags_label())
}

pub(crate) fn format_ungrouped_mask(catalog: &Catalog, mask: u64) -> String {
    if mask == 0 {
        return format_names(std::iter::empty(), 0, catalog.no_flags_label());
    }
    let names = scan_bits(mask, |bit| {
        catalog
            .first_flag_for_bit(bit)
            .and_then(|flag| catalog.flag(flag))
            .map(FlagEntry::name)
    });
    format_names(names.iter().map(String::as_str), mask, catalog.no_flags_label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogBuilder, FlagIndex, GroupIndex};

    fn catalog() -> (Catalog, GroupIndex) {
        let mut builder = CatalogBuilder::new();
        let set = builder.placeholder("TEST_SET");
        builder.flag("A", 0x1, set);
        builder.flag("B", 0x2, set);
        let group = builder.group("SZ_TEST_FLAGS");
        builder.resolve(set, &["SZ_TEST_FLAGS"]);
        (builder.build().unwrap(), group)
    }

    #[test]
    fn hex_mask_groups_of_four() {
        assert_eq!(hex_mask(0), "0000 0000 0000 0000");
        assert_eq!(hex_mask(1 << 62), "4000 0000 0000 0000");
        assert_eq!(hex_mask(0x0123_4567_89AB_CDEF), "0123 4567 89AB CDEF");
    }

    #[test]
    fn hex_bit_is_sixteen_digits() {
        assert_eq!(hex_bit(0x4), "0000000000000004");
        assert_eq!(hex_bit(1 << 63), "8000000000000000");
    }

    #[test]
    fn named_bits() {
        let (catalog, group) = catalog();
        assert_eq!(
            catalog.format_mask(0x3, Some(group)).unwrap(),
            "A | B [0000 0000 0000 0003]"
        );
    }

    #[test]
    fn unregistered_bit_is_hex() {
        let (catalog, group) = catalog();
        assert_eq!(
            catalog.format_mask(0x4, Some(group)).unwrap(),
            "0000000000000004 [0000 0000 0000 0004]"
        );
        assert_eq!(
            catalog.format_mask(0x5, Some(group)).unwrap(),
            "A | 0000000000000004 [0000 0000 0000 0005]"
        );
    }

    #[test]
    fn zero_mask_uses_label() {
        let (catalog, group) = catalog();
        assert_eq!(
            catalog.format_mask(0, Some(group)).unwrap(),
            "NONE [0000 0000 0000 0000]"
        );
        assert_eq!(
            catalog.format_mask(0, None).unwrap(),
            "NONE [0000 0000 0000 0000]"
        );
    }

    #[test]
    fn group_label_overrides_catalog_label() {
        let mut builder = CatalogBuilder::new();
        builder.no_flags_label("EMPTY");
        let quiet = builder.group_with_label("SZ_QUIET_FLAGS", "SZ_QUIET_NOTHING");
        let plain = builder.group("SZ_PLAIN_FLAGS");
        let catalog = builder.build().unwrap();
        assert_eq!(
            catalog.format_mask(0, Some(quiet)).unwrap(),
            "SZ_QUIET_NOTHING [0000 0000 0000 0000]"
        );
        assert_eq!(
            catalog.format_mask(0, Some(plain)).unwrap(),
            "EMPTY [0000 0000 0000 0000]"
        );
    }

    #[test]
    fn flags_render_in_given_order() {
        let (catalog, _) = catalog();
        let a = catalog.flag_named("A").unwrap();
        let b = catalog.flag_named("B").unwrap();
        assert_eq!(catalog.format_flags([b, a]).unwrap(), "B | A [0000 0000 0000 0003]");
        assert_eq!(
            catalog.format_flags(Vec::<FlagIndex>::new()).unwrap(),
            "NONE [0000 0000 0000 0000]"
        );
    }

    #[test]
    fn formatting_is_repeatable() {
        let (catalog, group) = catalog();
        let first = catalog.format_mask(0xFF, Some(group)).unwrap();
        let second = catalog.format_mask(0xFF, Some(group)).unwrap();
        assert_eq!(first, second);
    }
}
