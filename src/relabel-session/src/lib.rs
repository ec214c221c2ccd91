//! Relabel Session - list validation and change tracking for batch renames.
//!
//! This crate owns the in-memory state of one batch-rename dialog: the
//! snapshot of device records taken when the dialog opens, the operator's
//! proposed name per record, per-item validity, dirty tracking, and the
//! whole-list uniqueness check that gates the commit.
//!
//! The central correctness property is that local edits have global validity
//! consequences: renaming item A into a collision with item B invalidates
//! both A and B, so every edit re-derives validity across the entire list.
//!
//! External side effects happen only at commit time, when the final set of
//! (old name, new name) pairs is handed to a [`RenameSink`]; cancelling a
//! session at any earlier point discards all edits with no partial effects.
//!
//! # Example
//!
//! ```
//! use relabel_session::{DeviceRecord, RenameSession};
//!
//! let mut session = RenameSession::load(vec![
//!     DeviceRecord::new("IED1"),
//!     DeviceRecord::new("IED2"),
//! ])?;
//!
//! session.set_current_value("IED1", "Bay1_Protection")?;
//! assert!(session.is_committable());
//!
//! let plan = session.commit().expect("session is committable");
//! assert_eq!(plan.len(), 1);
//! # Ok::<(), relabel_session::SessionError>(())
//! ```

mod error;
mod plan;
mod record;
mod session;
mod validate;

pub use error::{SessionError, SessionResult};
pub use plan::{RenameCommand, RenamePlan, RenameSink};
pub use record::{DeviceDescriptor, DeviceRecord};
pub use session::{EntryState, ListEntry, RenameSession};
pub use validate::{MAX_NAME_LENGTH, NameViolation, check_name};
