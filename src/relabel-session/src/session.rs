//! The rename session: per-item state, whole-list validation, commit plan.

use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{SessionError, SessionResult};
use crate::plan::{RenameCommand, RenamePlan, RenameSink};
use crate::record::DeviceRecord;
use crate::validate::{NameViolation, check_name};

/// One editable item of the batch-rename list.
///
/// The identity is the record's original name and never changes; the current
/// value is the operator's proposed name for it.
#[derive(Debug, Clone)]
pub struct ListEntry {
    record: DeviceRecord,
    current_value: String,
    violation: Option<NameViolation>,
}

impl ListEntry {
    fn new(record: DeviceRecord) -> Self {
        let current_value = record.name.clone();
        Self {
            record,
            current_value,
            violation: None,
        }
    }

    /// Stable key; the original name, immutable for the session's lifetime.
    pub fn identity(&self) -> &str {
        &self.record.name
    }

    /// The operator-edited proposed name.
    pub fn current_value(&self) -> &str {
        &self.current_value
    }

    /// The source record this entry was snapshotted from.
    pub fn record(&self) -> &DeviceRecord {
        &self.record
    }

    /// True when the current value passes every rule.
    pub fn is_valid(&self) -> bool {
        self.violation.is_none()
    }

    /// Why the current value is rejected, if it is.
    pub fn violation(&self) -> Option<NameViolation> {
        self.violation
    }

    /// True when the proposed name differs from the original.
    pub fn is_dirty(&self) -> bool {
        self.current_value != self.record.name
    }

    /// Full text the search query is matched against: descriptive metadata,
    /// then the proposed name, then the original name. Search visibility is
    /// independent of validity.
    pub fn searchable_text(&self) -> String {
        let descriptor = self.record.descriptor.text();
        let mut parts = Vec::with_capacity(3);
        if !descriptor.is_empty() {
            parts.push(descriptor.as_str());
        }
        parts.push(&self.current_value);
        parts.push(&self.record.name);
        parts.join(" ")
    }

    /// Snapshot handed to the display surface.
    pub fn state(&self) -> EntryState {
        EntryState {
            identity: self.record.name.clone(),
            current_value: self.current_value.clone(),
            is_valid: self.is_valid(),
            is_dirty: self.is_dirty(),
            violation: self.violation,
        }
    }
}

/// Immutable per-item snapshot for the display surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryState {
    /// Stable key (the original name).
    pub identity: String,
    /// Proposed name.
    pub current_value: String,
    /// Whether the proposed name passes every rule.
    pub is_valid: bool,
    /// Whether the proposed name differs from the original.
    pub is_dirty: bool,
    /// The first failing rule, if any.
    pub violation: Option<NameViolation>,
}

/// The aggregate of all list items plus global derived state.
///
/// Created when the dialog opens, destroyed (or [`reset`](Self::reset)) when
/// it closes; all edits are local to the session until
/// [`commit`](Self::commit).
#[derive(Debug, Clone)]
pub struct RenameSession {
    entries: IndexMap<String, ListEntry>,
    pending: IndexSet<String>,
    all_valid: bool,
}

impl RenameSession {
    /// Builds a session from the source store's records.
    ///
    /// Every entry starts at its original name with no dirty or invalid
    /// state. Identities must be unique; the source document guarantees
    /// this, but it is checked defensively.
    pub fn load(records: impl IntoIterator<Item = DeviceRecord>) -> SessionResult<Self> {
        let mut entries = IndexMap::new();
        for record in records {
            let identity = record.name.clone();
            if entries.insert(identity.clone(), ListEntry::new(record)).is_some() {
                return Err(SessionError::duplicate_identity(identity));
            }
        }

        let mut session = Self {
            entries,
            pending: IndexSet::new(),
            all_valid: true,
        };
        session.revalidate();
        debug!(items = session.entries.len(), "rename session loaded");
        Ok(session)
    }

    /// Updates one item's proposed value and revalidates the whole session.
    ///
    /// Membership in the pending set follows the dirty flag: added when the
    /// value differs from the original, removed when it is reverted.
    /// Returns the edited entry's resulting snapshot.
    pub fn set_current_value(
        &mut self,
        identity: &str,
        value: impl Into<String>,
    ) -> SessionResult<EntryState> {
        let value = value.into();
        let Some(entry) = self.entries.get_mut(identity) else {
            return Err(SessionError::unknown_identity(identity));
        };
        entry.current_value = value;

        if entry.is_dirty() {
            self.pending.insert(identity.to_string());
        } else {
            self.pending.shift_remove(identity);
        }

        // A collision is symmetric: this edit can change the validity of any
        // other entry holding the same value, so the whole list is rechecked.
        self.revalidate();

        let state = self.entries[identity].state();
        debug!(
            identity,
            value = state.current_value.as_str(),
            valid = state.is_valid,
            "proposed name updated"
        );
        Ok(state)
    }

    /// Re-derives every entry's validity and the global flag.
    fn revalidate(&mut self) {
        let mut counts: HashMap<String, usize> = HashMap::with_capacity(self.entries.len());
        for entry in self.entries.values() {
            *counts.entry(entry.current_value.clone()).or_insert(0) += 1;
        }

        let mut all_valid = true;
        for entry in self.entries.values_mut() {
            // Every value must be held by precisely the item proposing it;
            // any other count is a violation for every holder.
            let violation = check_name(&entry.current_value).err().or_else(|| {
                (counts.get(&entry.current_value).copied().unwrap_or(0) != 1)
                    .then_some(NameViolation::Duplicate)
            });
            all_valid &= violation.is_none();
            entry.violation = violation;
        }
        self.all_valid = all_valid;
    }

    /// Conjunction of every entry's validity.
    pub fn all_valid(&self) -> bool {
        self.all_valid
    }

    /// True iff at least one rename is pending and every entry is valid.
    pub fn is_committable(&self) -> bool {
        !self.pending.is_empty() && self.all_valid
    }

    /// Identities whose proposed name differs from the original, in the
    /// order they became dirty.
    pub fn pending_identities(&self) -> impl Iterator<Item = &str> {
        self.pending.iter().map(String::as_str)
    }

    /// Number of pending renames.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Looks up one entry.
    pub fn entry(&self, identity: &str) -> Option<&ListEntry> {
        self.entries.get(identity)
    }

    /// Iterates entries in load order.
    pub fn iter(&self) -> impl Iterator<Item = &ListEntry> {
        self.entries.values()
    }

    /// Number of items in the session.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the session holds no items.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The final (old name, new name) pairs, or `None` while the session is
    /// not committable. Commit is inert rather than an error.
    pub fn commit(&self) -> Option<RenamePlan> {
        if !self.is_committable() {
            return None;
        }

        let commands = self
            .pending
            .iter()
            .filter_map(|identity| {
                let entry = self.entries.get(identity)?;
                Some(RenameCommand::new(identity.clone(), entry.current_value.clone()))
            })
            .collect();

        let plan = RenamePlan::new(commands);
        info!(renames = plan.len(), "rename plan produced");
        Some(plan)
    }

    /// Issues the plan's commands to the sink iff the session is committable,
    /// fire-and-forget per command, and returns the dispatched plan.
    ///
    /// This is the only point external side effects occur; the caller is
    /// expected to discard or [`reset`](Self::reset) the session afterwards.
    pub fn dispatch<S: RenameSink>(&self, sink: &mut S) -> Option<RenamePlan> {
        let plan = self.commit()?;
        for command in plan.iter() {
            sink.rename(command);
        }
        Some(plan)
    }

    /// Reverts every entry to its original name and clears pending state,
    /// as when the dialog is reopened after an aborted session.
    pub fn reset(&mut self) {
        for entry in self.entries.values_mut() {
            entry.current_value = entry.record.name.clone();
            entry.violation = None;
        }
        self.pending.clear();
        self.revalidate();
        debug!("rename session reset");
    }
}
