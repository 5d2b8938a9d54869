mod entry;
mod raw_event;
mod severity;

pub use entry::{EntryId, LogicalEntry};
pub use raw_event::{RawEvent, SourceKind, StreamKind};
pub use severity::{Severity, UnknownSeverity};
