use serde::{Deserialize, Serialize};
use std::fmt;

/// Capacity a freshly initialized table starts with; callers may rely on at
/// least this many insertions before the first growth, not on the exact value.
pub const INITIAL_CAPACITY: usize = 5;

/// One label definition. The name is owned by the table; the address is the
/// byte address of the instruction the label precedes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEntry {
    pub label: String,
    pub address: u32,
}

/// Ordered table of label definitions with an explicit logical capacity.
///
/// `default()` is the bare state: no backing storage, capacity 0. `new()` is
/// the initialized state callers normally want. Capacity is tracked
/// separately from the entry count so growth and truncation stay observable.
#[derive(Debug, Clone, Default)]
pub struct LabelTable {
    entries: Vec<LabelEntry>,
    capacity: usize,
}

/// Result of an insertion attempt. A duplicate leaves the table unchanged
/// and is not fatal; the caller decides whether to report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Duplicate,
}

impl LabelTable {
    pub fn new() -> Self {
        let mut table = Self::default();
        table.resize(INITIAL_CAPACITY);
        table
    }

    /// Builds a table directly from caller-supplied entries, with capacity
    /// equal to the entry count. Uniqueness is the caller's responsibility.
    pub fn from_entries(entries: Vec<LabelEntry>) -> Self {
        let capacity = entries.len();
        Self { entries, capacity }
    }

    /// Address of the first entry named `label`, scanning in insertion order.
    pub fn find(&self, label: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.address)
    }

    /// Appends a new definition, growing the table first if it is full.
    /// Growth doubles the capacity, except that an empty-capacity table
    /// grows to 1. Re-adding an existing name leaves the table untouched.
    pub fn add(&mut self, label: &str, address: u32) -> AddOutcome {
        if self.find(label).is_some() {
            return AddOutcome::Duplicate;
        }

        if self.entries.len() >= self.capacity {
            let grown = if self.capacity == 0 {
                self.capacity + 1
            } else {
                self.capacity * 2
            };
            self.resize(grown);
        }

        self.entries.push(LabelEntry {
            label: label.to_owned(),
            address,
        });
        AddOutcome::Added
    }

    /// Replaces the backing storage with a fresh allocation of
    /// `new_capacity` slots, moving over the first `min(len, new_capacity)`
    /// entries. Shrinking below the current count silently truncates the
    /// table; entries past the new capacity are dropped.
    pub fn resize(&mut self, new_capacity: usize) {
        let keep = self.entries.len().min(new_capacity);
        let mut replacement = Vec::with_capacity(new_capacity);
        replacement.extend(self.entries.drain(..keep));
        self.entries = replacement;
        self.capacity = new_capacity;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LabelEntry> {
        self.entries.iter()
    }
}

impl fmt::Display for LabelTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            writeln!(f, "The table is currently empty.")?;
        } else {
            writeln!(f, "There are {} labels in the table.", self.entries.len())?;
        }
        for entry in &self.entries {
            writeln!(f, "Label: {}\tAddress: {}", entry.label, entry.address)?;
        }
        Ok(())
    }
}
