//! Live session state: connection status, pause buffer, raw ledger and the
//! grouped entries derived from it.

mod driver;
mod error;
mod message;
mod session;
mod state;
mod view;

#[cfg(test)]
mod tests;

pub use driver::{Command, DriverHandle, SessionDriver, TransportEvent};
pub use error::{DriverError, WireError};
pub use message::{WireMessage, decode};
pub use session::{Ingested, Session, SessionSettings};
pub use state::{ConnectionState, ConnectionStatus};
pub use view::View;
