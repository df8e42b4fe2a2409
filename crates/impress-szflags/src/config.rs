//! Per-operation flag configuration.
//!
//! A configuration maps usage groups to the flags their operations should
//! be called with. Groups without an entry use their default preset.
//!
//! ```json
//! {
//!   "groups": {
//!     "SZ_ENTITY_FLAGS": ["SZ_ENTITY_INCLUDE_ENTITY_NAME", "SZ_ENTITY_INCLUDE_RECORD_DATA"]
//!   }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::group::SzFlagUsageGroup;
use crate::set::SzFlagSet;

/// Flag overrides keyed by usage group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagsConfig {
    #[serde(default)]
    pub groups: BTreeMap<SzFlagUsageGroup, SzFlagSet>,
}

impl FlagsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from JSON. Flags outside a group's recognized set are kept but
    /// logged, since operations ignore them.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        for (group, flags) in &config.groups {
            for flag in flags.iter().filter(|flag| !group.recognizes(*flag)) {
                tracing::warn!("{} is not recognized by {} and will be ignored", flag, group);
            }
        }
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Override the flags used for a group.
    pub fn set(&mut self, group: SzFlagUsageGroup, flags: SzFlagSet) {
        self.groups.insert(group, flags);
    }

    /// Flags configured for a group, or its default preset.
    pub fn flags_for(&self, group: SzFlagUsageGroup) -> &SzFlagSet {
        self.groups
            .get(&group)
            .unwrap_or_else(|| group.default_flags())
    }

    /// Mask an operation in `group` would observe.
    pub fn mask_for(&self, group: SzFlagUsageGroup) -> u64 {
        group.recognize(self.flags_for(group).mask())
    }

    /// Reject any configured flag its group does not recognize.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (group, flags) in &self.groups {
            if let Some(flag) = flags.iter().find(|flag| !group.recognizes(*flag)) {
                return Err(ConfigError::Unrecognized {
                    group: group.name().to_string(),
                    flag: flag.name().to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flag::SzFlag;
    use crate::presets::SZ_ENTITY_DEFAULT_FLAGS;

    #[test]
    fn missing_group_uses_default() {
        let config = FlagsConfig::new();
        assert_eq!(
            config.flags_for(SzFlagUsageGroup::Entity),
            &*SZ_ENTITY_DEFAULT_FLAGS
        );
        assert_eq!(config.mask_for(SzFlagUsageGroup::AddRecord), 0);
    }

    #[test]
    fn load_from_json() {
        let json = r#"{
            "groups": {
                "SZ_ADD_RECORD_FLAGS": ["SZ_WITH_INFO"],
                "SZ_ENTITY_FLAGS": ["SZ_ENTITY_INCLUDE_ENTITY_NAME"]
            }
        }"#;
        let config = FlagsConfig::from_json(json).unwrap();
        assert_eq!(
            config.mask_for(SzFlagUsageGroup::AddRecord),
            SzFlag::WithInfo.value()
        );
        assert_eq!(
            config.flags_for(SzFlagUsageGroup::Entity),
            &SzFlagSet::from([SzFlag::EntityIncludeEntityName])
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_document_is_valid() {
        let config = FlagsConfig::from_json("{}").unwrap();
        assert!(config.groups.is_empty());
    }

    #[test]
    fn unknown_names_fail_to_load() {
        assert!(matches!(
            FlagsConfig::from_json(r#"{"groups": {"SZ_BOGUS_FLAGS": []}}"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            FlagsConfig::from_json(r#"{"groups": {"SZ_ENTITY_FLAGS": ["SZ_BOGUS"]}}"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn unrecognized_flags_are_ignored_but_reported() {
        let mut config = FlagsConfig::new();
        config.set(
            SzFlagUsageGroup::AddRecord,
            SzFlagSet::from([SzFlag::WithInfo, SzFlag::EntityIncludeEntityName]),
        );
        assert_eq!(
            config.mask_for(SzFlagUsageGroup::AddRecord),
            SzFlag::WithInfo.value()
        );
        match config.validate() {
            Err(ConfigError::Unrecognized { group, flag }) => {
                assert_eq!(group, "SZ_ADD_RECORD_FLAGS");
                assert_eq!(flag, "SZ_ENTITY_INCLUDE_ENTITY_NAME");
            }
            other => panic!("expected Unrecognized, got {:?}", other),
        }
    }

    #[test]
    fn json_round_trip() {
        let mut config = FlagsConfig::new();
        config.set(SzFlagUsageGroup::Search, SzFlagSet::from([SzFlag::SearchIncludeStats]));
        let json = config.to_json().unwrap();
        assert!(json.contains("\"SZ_SEARCH_FLAGS\""));
        assert_eq!(FlagsConfig::from_json(&json).unwrap(), config);
    }
}
