//! Two-phase construction of a flag catalog.
//!
//! Flags are authored against usage groups, and usage groups derive their
//! members from the flags. Neither side can be finished first, so the
//! builder splits construction in two:
//!
//! 1. Flags are declared against [`Placeholder`] handles. A placeholder is
//!    an empty, identity-only stand-in for "the set of groups this flag
//!    belongs to". Groups are declared by name.
//! 2. [`CatalogBuilder::build`] maps every placeholder to its finished group
//!    set, swaps it into each flag, then derives per-group members and the
//!    per-bit symbol tables.
//!
//! The resulting [`Catalog`] is immutable.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::BootstrapError;
use crate::format;

/// Suffix stripped from a group name to get its primary-name prefix.
pub const GROUP_SUFFIX: &str = "_FLAGS";

/// Label used for an empty mask when neither the group nor the catalog sets one.
pub const DEFAULT_NO_FLAGS_LABEL: &str = "NONE";

/// Number of addressable bit positions in a mask.
pub const BIT_COUNT: usize = 64;

static NEXT_BUILDER_ID: AtomicU64 = AtomicU64::new(1);

/// Bit position of a single-bit value, `None` for zero or multi-bit values.
pub fn single_bit_index(value: u64) -> Option<u32> {
    if value.count_ones() == 1 {
        Some(value.trailing_zeros())
    } else {
        None
    }
}

/// Position of a flag within its catalog, in declaration order.
///
/// Stamped with the id of the catalog that issued it; lookups on any other
/// catalog return `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlagIndex {
    catalog: u64,
    slot: usize,
}

impl FlagIndex {
    pub fn get(self) -> usize {
        self.slot
    }
}

/// Position of a usage group within its catalog, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupIndex {
    catalog: u64,
    slot: usize,
}

impl GroupIndex {
    pub fn get(self) -> usize {
        self.slot
    }
}

/// Identity-only stand-in for a set of usage groups.
///
/// Carries no group data. Two placeholders are the same only if they were
/// handed out by the same call on the same builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placeholder {
    builder: u64,
    slot: usize,
}

#[derive(Debug)]
struct PendingFlag {
    name: String,
    value: u64,
    membership: Placeholder,
}

#[derive(Debug)]
struct PendingGroup {
    name: String,
    no_flags_label: Option<String>,
}

/// Collects flag, group, and placeholder definitions for a [`Catalog`].
#[derive(Debug)]
pub struct CatalogBuilder {
    id: u64,
    placeholders: Vec<String>,
    resolutions: HashMap<Placeholder, Vec<String>>,
    flags: Vec<PendingFlag>,
    groups: Vec<PendingGroup>,
    no_flags_label: String,
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self {
            id: NEXT_BUILDER_ID.fetch_add(1, Ordering::Relaxed),
            placeholders: Vec::new(),
            resolutions: HashMap::new(),
            flags: Vec::new(),
            groups: Vec::new(),
            no_flags_label: DEFAULT_NO_FLAGS_LABEL.to_string(),
        }
    }

    /// Set the catalog-wide label for an empty mask.
    pub fn no_flags_label(&mut self, label: &str) -> &mut Self {
        self.no_flags_label = label.to_string();
        self
    }

    /// Issue a new placeholder for a recurring group combination.
    pub fn placeholder(&mut self, label: &str) -> Placeholder {
        let slot = self.placeholders.len();
        self.placeholders.push(label.to_string());
        Placeholder {
            builder: self.id,
            slot,
        }
    }

    /// Declare a flag whose groups are described by `membership`.
    pub fn flag(&mut self, name: &str, value: u64, membership: Placeholder) -> FlagIndex {
        let index = FlagIndex {
            catalog: self.id,
            slot: self.flags.len(),
        };
        self.flags.push(PendingFlag {
            name: name.to_string(),
            value,
            membership,
        });
        index
    }

    /// Declare a usage group that uses the catalog-wide empty-mask label.
    pub fn group(&mut self, name: &str) -> GroupIndex {
        self.push_group(name, None)
    }

    /// Declare a usage group with its own empty-mask label.
    pub fn group_with_label(&mut self, name: &str, no_flags_label: &str) -> GroupIndex {
        self.push_group(name, Some(no_flags_label.to_string()))
    }

    fn push_group(&mut self, name: &str, no_flags_label: Option<String>) -> GroupIndex {
        let index = GroupIndex {
            catalog: self.id,
            slot: self.groups.len(),
        };
        self.groups.push(PendingGroup {
            name: name.to_string(),
            no_flags_label,
        });
        index
    }

    /// Bind a placeholder to the named usage groups. A later call for the
    /// same placeholder replaces the earlier binding.
    pub fn resolve(&mut self, placeholder: Placeholder, groups: &[&str]) -> &mut Self {
        self.resolutions
            .insert(placeholder, groups.iter().map(|g| g.to_string()).collect());
        self
    }

    fn flag_index(&self, slot: usize) -> FlagIndex {
        FlagIndex {
            catalog: self.id,
            slot,
        }
    }

    fn group_index(&self, slot: usize) -> GroupIndex {
        GroupIndex {
            catalog: self.id,
            slot,
        }
    }

    fn placeholder_label(&self, placeholder: Placeholder) -> String {
        if placeholder.builder == self.id {
            if let Some(label) = self.placeholders.get(placeholder.slot) {
                return label.clone();
            }
        }
        format!("<foreign placeholder {}:{}>", placeholder.builder, placeholder.slot)
    }

    /// Resolve every placeholder and derive group members and symbol tables.
    pub fn build(self) -> Result<Catalog, BootstrapError> {
        let mut group_names = HashMap::with_capacity(self.groups.len());
        for (i, group) in self.groups.iter().enumerate() {
            if group_names.insert(group.name.clone(), self.group_index(i)).is_some() {
                return Err(BootstrapError::DuplicateGroup(group.name.clone()));
            }
        }

        let mut flag_names = HashMap::with_capacity(self.flags.len());
        for (i, flag) in self.flags.iter().enumerate() {
            if flag_names.insert(flag.name.clone(), self.flag_index(i)).is_some() {
                return Err(BootstrapError::DuplicateFlag(flag.name.clone()));
            }
        }

        let mut labels = HashSet::with_capacity(self.placeholders.len());
        for label in &self.placeholders {
            if !labels.insert(label.as_str()) {
                return Err(BootstrapError::DuplicatePlaceholder(label.clone()));
            }
        }

        // Phase 2a: placeholder -> finished group set.
        if let Some(foreign) = self.resolutions.keys().find(|p| p.builder != self.id) {
            return Err(BootstrapError::UnknownPlaceholder(
                self.placeholder_label(*foreign),
            ));
        }
        let mut resolved: HashMap<Placeholder, Vec<GroupIndex>> =
            HashMap::with_capacity(self.resolutions.len());
        for slot in 0..self.placeholders.len() {
            let placeholder = Placeholder {
                builder: self.id,
                slot,
            };
            let label = self.placeholder_label(placeholder);
            let Some(names) = self.resolutions.get(&placeholder) else {
                return Err(match self.flags.iter().find(|f| f.membership == placeholder) {
                    Some(flag) => BootstrapError::UnresolvedPlaceholder {
                        placeholder: label,
                        flag: flag.name.clone(),
                    },
                    None => BootstrapError::UnmappedPlaceholder(label),
                });
            };
            let mut groups = BTreeSet::new();
            for name in names {
                let index = group_names.get(name).copied().ok_or_else(|| {
                    BootstrapError::UnknownGroup {
                        placeholder: label.clone(),
                        group: name.clone(),
                    }
                })?;
                groups.insert(index);
            }
            if groups.is_empty() {
                return Err(BootstrapError::EmptyMembership(label));
            }
            resolved.insert(placeholder, groups.into_iter().collect());
        }

        // Phase 2b: swap each flag's placeholder for its resolved groups.
        // Every placeholder this builder issued is bound by now.
        let mut flags = Vec::with_capacity(self.flags.len());
        for pending in &self.flags {
            let groups = resolved.get(&pending.membership).cloned().ok_or_else(|| {
                BootstrapError::UnknownPlaceholder(self.placeholder_label(pending.membership))
            })?;
            flags.push(FlagEntry {
                name: pending.name.clone(),
                value: pending.value,
                bit: single_bit_index(pending.value),
                groups,
            });
        }

        // Phase 2c: per-group members and bit tables.
        let mut groups: Vec<GroupEntry> = self
            .groups
            .iter()
            .map(|pending| GroupEntry::new(pending, &self.no_flags_label))
            .collect();

        let mut first_by_bit = [None; BIT_COUNT];
        for (i, flag) in flags.iter().enumerate() {
            let index = self.flag_index(i);
            if let Some(bit) = flag.bit {
                first_by_bit[bit as usize].get_or_insert(index);
            }
            for group_index in &flag.groups {
                let group = &mut groups[group_index.slot];
                group.members.push(index);
                group.mask |= flag.value;
                if let Some(bit) = flag.bit {
                    group.claim(bit, index, &flags)?;
                }
            }
        }

        tracing::debug!(
            "Built flag catalog: {} flags, {} usage groups, {} placeholders",
            flags.len(),
            groups.len(),
            self.placeholders.len()
        );

        Ok(Catalog {
            id: self.id,
            flags,
            groups,
            flag_names,
            group_names,
            first_by_bit,
            no_flags_label: self.no_flags_label,
        })
    }
}

/// A flag after bootstrap: its name, value, bit, and resolved groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagEntry {
    name: String,
    value: u64,
    bit: Option<u32>,
    groups: Vec<GroupIndex>,
}

impl FlagEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Bit position when the value has exactly one bit set.
    pub fn bit_index(&self) -> Option<u32> {
        self.bit
    }

    /// Groups in ascending declaration order.
    pub fn groups(&self) -> &[GroupIndex] {
        &self.groups
    }

    pub fn is_atomic(&self) -> bool {
        self.bit.is_some()
    }
}

/// Canonical flag per bit position for one group, plus the label shown for
/// an empty mask. Together these are the 65 formatting slots of a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    bits: [Option<FlagIndex>; BIT_COUNT],
    no_flags_label: String,
}

impl SymbolTable {
    pub fn get(&self, bit: u32) -> Option<FlagIndex> {
        self.bits.get(bit as usize).copied().flatten()
    }

    pub fn no_flags_label(&self) -> &str {
        &self.no_flags_label
    }

    /// Occupied bit slots in ascending bit order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, FlagIndex)> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(bit, slot)| slot.map(|flag| (bit as u32, flag)))
    }
}

/// A usage group after bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupEntry {
    name: String,
    prefix: String,
    members: Vec<FlagIndex>,
    mask: u64,
    symbols: SymbolTable,
}

impl GroupEntry {
    fn new(pending: &PendingGroup, catalog_label: &str) -> Self {
        let prefix = pending
            .name
            .strip_suffix(GROUP_SUFFIX)
            .unwrap_or(&pending.name)
            .to_string();
        let no_flags_label = pending
            .no_flags_label
            .clone()
            .unwrap_or_else(|| catalog_label.to_string());
        Self {
            name: pending.name.clone(),
            prefix,
            members: Vec::new(),
            mask: 0,
            symbols: SymbolTable {
                bits: [None; BIT_COUNT],
                no_flags_label,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Group name without the `_FLAGS` suffix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Member flags in ascending declaration order.
    pub fn members(&self) -> &[FlagIndex] {
        &self.members
    }

    /// OR of every member's value.
    pub fn mask(&self) -> u64 {
        self.mask
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Whether `name` is this group's own name for a bit.
    pub fn is_primary_name(&self, name: &str) -> bool {
        match name.strip_prefix(self.prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('_'),
            None => false,
        }
    }

    fn claim(
        &mut self,
        bit: u32,
        incoming: FlagIndex,
        flags: &[FlagEntry],
    ) -> Result<(), BootstrapError> {
        let slot = &mut self.symbols.bits[bit as usize];
        let existing = match *slot {
            None => {
                *slot = Some(incoming);
                return Ok(());
            }
            Some(existing) if existing == incoming => return Ok(()),
            Some(existing) => existing,
        };

        let existing_name = flags[existing.slot].name.as_str();
        let incoming_name = flags[incoming.slot].name.as_str();
        let existing_primary = self.is_primary_name(existing_name);
        let incoming_primary = self.is_primary_name(incoming_name);

        match (existing_primary, incoming_primary) {
            (false, true) => {
                tracing::debug!(
                    "{}: bit {} renamed from {} to {}",
                    self.name,
                    bit,
                    existing_name,
                    incoming_name
                );
                self.symbols.bits[bit as usize] = Some(incoming);
                Ok(())
            }
            // A primary name already holds the slot.
            (true, _) => Ok(()),
            (false, false) => Err(BootstrapError::BitConflict {
                group: self.name.clone(),
                bit,
                existing: existing_name.to_string(),
                incoming: incoming_name.to_string(),
            }),
        }
    }
}

/// A frozen flag catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    id: u64,
    flags: Vec<FlagEntry>,
    groups: Vec<GroupEntry>,
    flag_names: HashMap<String, FlagIndex>,
    group_names: HashMap<String, GroupIndex>,
    first_by_bit: [Option<FlagIndex>; BIT_COUNT],
    no_flags_label: String,
}

impl Catalog {
    /// The flag at `index`, or `None` if another catalog issued it.
    pub fn flag(&self, index: FlagIndex) -> Option<&FlagEntry> {
        if index.catalog != self.id {
            return None;
        }
        self.flags.get(index.slot)
    }

    /// The group at `index`, or `None` if another catalog issued it.
    pub fn group(&self, index: GroupIndex) -> Option<&GroupEntry> {
        if index.catalog != self.id {
            return None;
        }
        self.groups.get(index.slot)
    }

    pub fn flags(&self) -> &[FlagEntry] {
        &self.flags
    }

    pub fn groups(&self) -> &[GroupEntry] {
        &self.groups
    }

    pub fn flag_named(&self, name: &str) -> Option<FlagIndex> {
        self.flag_names.get(name).copied()
    }

    pub fn group_named(&self, name: &str) -> Option<GroupIndex> {
        self.group_names.get(name).copied()
    }

    pub fn no_flags_label(&self) -> &str {
        &self.no_flags_label
    }

    /// First declared flag for a bit, ignoring groups.
    pub fn first_flag_for_bit(&self, bit: u32) -> Option<FlagIndex> {
        self.first_by_bit.get(bit as usize).copied().flatten()
    }

    /// Canonical flag for a bit within a group.
    pub fn flag_for_bit(&self, group: GroupIndex, bit: u32) -> Option<FlagIndex> {
        self.group(group)?.symbols.get(bit)
    }

    /// OR of the values of the given flags, or `None` if any flag belongs
    /// to another catalog.
    pub fn mask_of<I>(&self, flags: I) -> Option<u64>
    where
        I: IntoIterator<Item = FlagIndex>,
    {
        flags
            .into_iter()
            .try_fold(0, |mask, flag| Some(mask | self.flag(flag)?.value))
    }

    /// Render a mask with the given group's symbols, or the catalog-wide
    /// first-declared symbols when no group is given. `None` if the group
    /// belongs to another catalog.
    pub fn format_mask(&self, mask: u64, group: Option<GroupIndex>) -> Option<String> {
        match group {
            Some(group) => {
                let entry = self.group(group)?;
                Some(format::format_group_mask(self, entry, mask))
            }
            None => Some(format::format_ungrouped_mask(self, mask)),
        }
    }

    /// Render flags by their declared names, in the order given. `None` if
    /// any flag belongs to another catalog.
    pub fn format_flags<I>(&self, flags: I) -> Option<String>
    where
        I: IntoIterator<Item = FlagIndex>,
    {
        let entries = flags
            .into_iter()
            .map(|flag| self.flag(flag))
            .collect::<Option<Vec<_>>>()?;
        let mask = entries.iter().fold(0, |mask, entry| mask | entry.value);
        Some(format::format_names(
            entries.iter().map(|entry| entry.name()),
            mask,
            &self.no_flags_label,
        ))
    }
}
