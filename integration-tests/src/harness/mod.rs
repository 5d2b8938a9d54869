pub mod fixtures;
pub mod tracing;

pub use fixtures::{container_event, events, file_event, wire_event, wire_snapshot};
pub use tracing::{CapturedEvent, captured_events, init_test_tracing};
