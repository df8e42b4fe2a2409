//! Parsing of symbolic flag expressions.
//!
//! Accepts the formatter's own output (`A | B [0000 0000 0000 0003]`) as
//! well as hand-written expressions. Tokens are separated by `|` and may be
//! flag names, preset names, the empty-mask label, or hex values written as
//! `0x...` or as exactly 16 hex digits.

use crate::bootstrap::NO_FLAGS_LABEL;
use crate::catalog::DEFAULT_NO_FLAGS_LABEL;
use crate::error::ParseError;
use crate::flag::SzFlag;
use crate::presets::preset_named;
use crate::set::SzFlagSet;

/// Split `input` into its symbol list and optional bracketed mask suffix.
fn split_suffix(input: &str) -> Result<(&str, Option<u64>), ParseError> {
    let input = input.trim();
    let Some(open) = input.find('[') else {
        return Ok((input, None));
    };
    let inner = input[open + 1..]
        .strip_suffix(']')
        .ok_or_else(|| ParseError::InvalidHex(input[open..].to_string()))?;
    let digits: String = inner.chars().filter(|c| !c.is_whitespace()).collect();
    let suffix = u64::from_str_radix(&digits, 16)
        .map_err(|_| ParseError::InvalidHex(inner.to_string()))?;
    Ok((input[..open].trim(), Some(suffix)))
}

fn parse_hex_token(token: &str) -> Option<Result<u64, ParseError>> {
    let digits = match token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        Some(digits) => digits,
        None if token.len() == 16 && token.chars().all(|c| c.is_ascii_hexdigit()) => token,
        None => return None,
    };
    Some(u64::from_str_radix(digits, 16).map_err(|_| ParseError::InvalidHex(token.to_string())))
}

fn is_no_flags_label(token: &str) -> bool {
    token == NO_FLAGS_LABEL || token == DEFAULT_NO_FLAGS_LABEL
}

fn tokens(symbols: &str) -> impl Iterator<Item = &str> {
    symbols.split('|').map(str::trim)
}

fn check_suffix(symbols: u64, suffix: Option<u64>) -> Result<(), ParseError> {
    match suffix {
        Some(suffix) if suffix != symbols => Err(ParseError::MaskMismatch { symbols, suffix }),
        _ => Ok(()),
    }
}

/// Parse an expression into a raw mask.
///
/// ```
/// use impress_szflags::parse_flags_mask;
/// assert_eq!(parse_flags_mask("SZ_WITH_INFO").unwrap(), 1 << 62);
/// assert_eq!(parse_flags_mask("0000000000000004 [0000 0000 0000 0004]").unwrap(), 4);
/// ```
pub fn parse_flags_mask(input: &str) -> Result<u64, ParseError> {
    let (symbols, suffix) = split_suffix(input)?;
    if symbols.is_empty() {
        return suffix.ok_or(ParseError::Empty);
    }

    let mut mask = 0;
    for token in tokens(symbols) {
        if let Some(flag) = SzFlag::from_name(token) {
            mask |= flag.value();
        } else if let Some(preset) = preset_named(token) {
            mask |= preset.mask();
        } else if is_no_flags_label(token) {
            continue;
        } else if let Some(value) = parse_hex_token(token) {
            mask |= value?;
        } else {
            return Err(ParseError::UnknownToken(token.to_string()));
        }
    }

    check_suffix(mask, suffix)?;
    Ok(mask)
}

/// Parse an expression of flag and preset names into a set.
///
/// Hex tokens are rejected because a bare bit cannot say which of its
/// aliases is meant.
pub fn parse_flag_set(input: &str) -> Result<SzFlagSet, ParseError> {
    let (symbols, suffix) = split_suffix(input)?;
    if symbols.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut set = SzFlagSet::new();
    for token in tokens(symbols) {
        if let Some(flag) = SzFlag::from_name(token) {
            set.insert(flag);
        } else if let Some(preset) = preset_named(token) {
            set.extend(preset.iter());
        } else if is_no_flags_label(token) {
            continue;
        } else if parse_hex_token(token).is_some() {
            return Err(ParseError::NotAFlag(token.to_string()));
        } else {
            return Err(ParseError::UnknownToken(token.to_string()));
        }
    }

    check_suffix(set.mask(), suffix)?;
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::SzFlagUsageGroup;
    use crate::presets::SZ_ENTITY_DEFAULT_FLAGS;

    #[test]
    fn parse_single_name() {
        assert_eq!(
            parse_flags_mask("SZ_ENTITY_INCLUDE_ENTITY_NAME").unwrap(),
            SzFlag::EntityIncludeEntityName.value()
        );
    }

    #[test]
    fn parse_formatter_output() {
        let mask = SzFlag::SearchIncludeResolved.value() | SzFlag::SearchIncludeStats.value();
        let text = SzFlagUsageGroup::Search.format_mask(mask);
        assert_eq!(parse_flags_mask(&text).unwrap(), mask);
    }

    #[test]
    fn parse_mixed_tokens() {
        assert_eq!(
            parse_flags_mask("SZ_WITH_INFO | 0x4 |  0000000000000008").unwrap(),
            (1 << 62) | 0x4 | 0x8
        );
    }

    #[test]
    fn parse_preset_name() {
        assert_eq!(
            parse_flags_mask("SZ_ENTITY_DEFAULT_FLAGS").unwrap(),
            SZ_ENTITY_DEFAULT_FLAGS.mask()
        );
        assert_eq!(
            parse_flag_set("SZ_ENTITY_DEFAULT_FLAGS").unwrap(),
            *SZ_ENTITY_DEFAULT_FLAGS
        );
    }

    #[test]
    fn parse_no_flags() {
        assert_eq!(parse_flags_mask("SZ_NO_FLAGS [0000 0000 0000 0000]").unwrap(), 0);
        assert_eq!(parse_flags_mask("NONE").unwrap(), 0);
        assert!(parse_flag_set("SZ_NO_FLAGS").unwrap().is_empty());
    }

    #[test]
    fn suffix_only() {
        assert_eq!(parse_flags_mask("[0000 0000 0000 0030]").unwrap(), 0x30);
    }

    #[test]
    fn suffix_mismatch() {
        assert_eq!(
            parse_flags_mask("SZ_WITH_INFO [0000 0000 0000 0001]"),
            Err(ParseError::MaskMismatch {
                symbols: 1 << 62,
                suffix: 1
            })
        );
    }

    #[test]
    fn parse_invalid() {
        assert_eq!(parse_flags_mask(""), Err(ParseError::Empty));
        assert_eq!(parse_flags_mask("   "), Err(ParseError::Empty));
        assert_eq!(
            parse_flags_mask("SZ_BOGUS"),
            Err(ParseError::UnknownToken("SZ_BOGUS".to_string()))
        );
        assert!(matches!(
            parse_flags_mask("0xZZ"),
            Err(ParseError::InvalidHex(_))
        ));
        assert!(matches!(
            parse_flags_mask("SZ_WITH_INFO [12"),
            Err(ParseError::InvalidHex(_))
        ));
    }

    #[test]
    fn flag_set_rejects_hex() {
        assert_eq!(
            parse_flag_set("0x1"),
            Err(ParseError::NotAFlag("0x1".to_string()))
        );
    }

    #[test]
    fn flag_set_keeps_aliases_apart() {
        let set = parse_flag_set("SZ_SEARCH_INCLUDE_RESOLVED | SZ_SEARCH_INCLUDE_STATS").unwrap();
        assert!(set.contains(SzFlag::SearchIncludeResolved));
        assert!(!set.contains(SzFlag::ExportIncludeMultiRecordEntities));
        assert_eq!(set.len(), 2);
    }
}
