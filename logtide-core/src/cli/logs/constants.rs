use std::time::Duration;

pub const RENDER_TICK: Duration = Duration::from_secs(1);
pub const LOOP_IDLE_SLEEP: Duration = Duration::from_millis(25);
pub const TRANSPORT_CHANNEL_CAPACITY: usize = 1024;
/// Widest severity bar in the stats view.
pub const BAR_WIDTH: usize = 20;
