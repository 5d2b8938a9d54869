use crate::model::Severity;
use crate::stream::{DriverError, Session, View};
use arc_swap::ArcSwap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};

const COMMAND_CHANNEL_CAPACITY: usize = 64;

/// Upper bound on how often streamed log lines rebuild the published view.
pub const PUBLISH_INTERVAL: Duration = Duration::from_millis(50);

/// What the transport reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    Connecting,
    Opened,
    /// One text frame, decoded by the session.
    Message(String),
    Closed,
    Error(String),
}

/// User operations, applied between transport inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Pause,
    Resume,
    Clear,
    SetSearch(String),
    SetSeverityFilter(Option<Severity>),
    SetGrouping(bool),
}

/// Cloneable handle for issuing commands and reading the latest view.
#[derive(Clone)]
pub struct DriverHandle {
    commands: mpsc::Sender<Command>,
    view: Arc<ArcSwap<View>>,
}

impl DriverHandle {
    pub async fn send(&self, command: Command) -> Result<(), DriverError> {
        self.commands
            .send(command)
            .await
            .map_err(|_| DriverError::Stopped)
    }

    /// Latest published view. Never partially updated.
    pub fn view(&self) -> Arc<View> {
        self.view.load_full()
    }
}

/// Single consumer of transport events and commands for one session.
///
/// Each input is handled to completion, then a fresh [`View`] is published,
/// so readers only ever observe state between two inputs.
pub struct SessionDriver {
    session: Session,
    commands: mpsc::Receiver<Command>,
    view: Arc<ArcSwap<View>>,
}

impl SessionDriver {
    pub fn new(session: Session) -> (Self, DriverHandle) {
        let (tx, rx) = mpsc::channel(COMMAND_CHANNEL_CAPACITY);
        let view = Arc::new(ArcSwap::from_pointee(session.view()));

        let handle = DriverHandle {
            commands: tx,
            view: view.clone(),
        };

        let driver = Self {
            session,
            commands: rx,
            view,
        };

        (driver, handle)
    }

    /// Run until the transport channel closes, then return the session.
    ///
    /// Log lines are coalesced: the view is rebuilt at most once per
    /// [`PUBLISH_INTERVAL`] while messages stream in. Commands and
    /// connection changes publish right away.
    pub async fn run(mut self, mut transport: mpsc::Receiver<TransportEvent>) -> Session {
        let mut commands_open = true;
        let mut dirty = false;

        let mut publish_tick = time::interval(PUBLISH_INTERVAL);
        publish_tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                event = transport.recv() => match event {
                    Some(event) => {
                        if self.handle_transport(event) {
                            self.publish();
                            dirty = false;
                        } else {
                            dirty = true;
                        }
                    }
                    None => break,
                },
                command = self.commands.recv(), if commands_open => match command {
                    Some(command) => {
                        self.handle_command(command);
                        self.publish();
                        dirty = false;
                    }
                    None => commands_open = false,
                },
                _ = publish_tick.tick(), if dirty => {
                    self.publish();
                    dirty = false;
                }
            }
        }

        tracing::debug!("transport closed, session driver stopping");
        self.publish();
        self.session
    }

    /// Returns true when the change should be published immediately.
    fn handle_transport(&mut self, event: TransportEvent) -> bool {
        match event {
            TransportEvent::Connecting => {
                self.session.on_connecting();
            }
            TransportEvent::Opened => {
                self.session.on_connected();
            }
            TransportEvent::Message(text) => {
                // Malformed frames are logged by the session and skipped.
                let _ = self.session.receive(&text);
                return false;
            }
            TransportEvent::Closed => {
                self.session.on_disconnected();
            }
            TransportEvent::Error(reason) => {
                tracing::warn!(%reason, "transport error");
                self.session.on_disconnected();
            }
        }
        true
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::Pause => {
                self.session.pause();
            }
            Command::Resume => {
                self.session.resume();
            }
            Command::Clear => self.session.clear(),
            Command::SetSearch(query) => self.session.set_search(query),
            Command::SetSeverityFilter(severity) => self.session.set_severity_filter(severity),
            Command::SetGrouping(enabled) => self.session.set_grouping_enabled(enabled),
        }
    }

    fn publish(&self) {
        self.view.store(Arc::new(self.session.view()));
    }
}
