//! The commit boundary: rename commands and the external sink.

use serde::{Deserialize, Serialize};

/// One rename to apply against the record identified by `old_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameCommand {
    /// The record's current name in the backing store.
    pub old_name: String,
    /// The name it should carry after the commit.
    pub new_name: String,
}

impl RenameCommand {
    /// Creates a rename command.
    pub fn new(old_name: impl Into<String>, new_name: impl Into<String>) -> Self {
        Self {
            old_name: old_name.into(),
            new_name: new_name.into(),
        }
    }

    /// Human-readable summary of the command.
    pub fn description(&self) -> String {
        format!("Rename {} -> {}", self.old_name, self.new_name)
    }
}

/// The full set of renames produced by a committable session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamePlan {
    /// Commands in pending order.
    pub commands: Vec<RenameCommand>,
}

impl RenamePlan {
    /// Creates a plan from a set of commands.
    pub fn new(commands: Vec<RenameCommand>) -> Self {
        Self { commands }
    }

    /// Number of renames in the plan.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True when the plan contains no renames.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterates the commands in pending order.
    pub fn iter(&self) -> impl Iterator<Item = &RenameCommand> {
        self.commands.iter()
    }

    /// Looks up the command for a given old name.
    pub fn get(&self, old_name: &str) -> Option<&RenameCommand> {
        self.commands.iter().find(|c| c.old_name == old_name)
    }
}

/// External rename command sink.
///
/// Receives each accepted command exactly once at commit time and is
/// responsible for applying it atomically against the backing store. The
/// session does not retry or verify application; sink failures are outside
/// its error model.
pub trait RenameSink {
    /// Applies one rename.
    fn rename(&mut self, command: &RenameCommand);
}

/// Recording sink; useful for hosts that forward commands elsewhere and in
/// tests.
impl RenameSink for Vec<RenameCommand> {
    fn rename(&mut self, command: &RenameCommand) {
        self.push(command.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_description() {
        let command = RenameCommand::new("IED1", "Bay1");
        assert_eq!(command.description(), "Rename IED1 -> Bay1");
    }

    #[test]
    fn test_plan_lookup() {
        let plan = RenamePlan::new(vec![
            RenameCommand::new("IED1", "Bay1"),
            RenameCommand::new("IED2", "Bay2"),
        ]);
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.get("IED2").map(|c| c.new_name.as_str()), Some("Bay2"));
        assert!(plan.get("IED3").is_none());
    }

    #[test]
    fn test_vec_sink_records_commands() {
        let mut sink: Vec<RenameCommand> = Vec::new();
        sink.rename(&RenameCommand::new("IED1", "Bay1"));
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].new_name, "Bay1");
    }
}
