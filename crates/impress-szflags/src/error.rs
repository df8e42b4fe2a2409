//! Error types for catalog bootstrap, flag parsing, and configuration.

use thiserror::Error;

/// Authoring errors found while bootstrapping a flag catalog.
///
/// These are never caused by caller input. A catalog that produces one of
/// these is broken and must not be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BootstrapError {
    #[error("Duplicate flag name: {0}")]
    DuplicateFlag(String),

    #[error("Duplicate usage group name: {0}")]
    DuplicateGroup(String),

    #[error("Duplicate placeholder label: {0}")]
    DuplicatePlaceholder(String),

    #[error("Placeholder {placeholder} refers to unknown usage group {group}")]
    UnknownGroup { placeholder: String, group: String },

    #[error("Placeholder {0} was issued by a different builder")]
    UnknownPlaceholder(String),

    #[error("Placeholder {placeholder} used by flag {flag} was never resolved")]
    UnresolvedPlaceholder { placeholder: String, flag: String },

    #[error("Placeholder {0} was issued but never bound to usage groups")]
    UnmappedPlaceholder(String),

    #[error("Placeholder {0} resolves to an empty set of usage groups")]
    EmptyMembership(String),

    #[error(
        "Bit {bit} in usage group {group} is claimed by both {existing} and {incoming}, \
         and neither is the primary name for that group"
    )]
    BitConflict {
        group: String,
        bit: u32,
        existing: String,
        incoming: String,
    },
}

/// Errors from parsing a symbolic flag expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty flag expression")]
    Empty,

    #[error("Unknown flag token: {0}")]
    UnknownToken(String),

    #[error("Invalid hexadecimal value: {0}")]
    InvalidHex(String),

    #[error("Symbols give mask {symbols:#018x} but the bracketed suffix says {suffix:#018x}")]
    MaskMismatch { symbols: u64, suffix: u64 },

    #[error("Token {0} is not a flag name")]
    NotAFlag(String),
}

/// Errors from loading or validating a flags configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid flags configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Flag {flag} is not recognized by usage group {group}")]
    Unrecognized { group: String, flag: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_conflict_message_names_both_flags() {
        let err = BootstrapError::BitConflict {
            group: "SZ_X_FLAGS".to_string(),
            bit: 3,
            existing: "SZ_A".to_string(),
            incoming: "SZ_B".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("SZ_A"));
        assert!(msg.contains("SZ_B"));
        assert!(msg.contains("Bit 3"));
    }

    #[test]
    fn mask_mismatch_renders_hex() {
        let err = ParseError::MaskMismatch {
            symbols: 0x3,
            suffix: 0x4,
        };
        assert_eq!(
            err.to_string(),
            "Symbols give mask 0x0000000000000003 but the bracketed suffix says 0x0000000000000004"
        );
    }
}
