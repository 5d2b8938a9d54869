//! Log Viewing Pipeline
//!
//! Reads a live stream from stdin and shows it as grouped, classified
//! entries. stdin plays the part of the transport: each line is either a
//! wire message (`{"type":"event",...}`) or, with `--input lines`, a raw
//! log line.
//!
//! There are three ways to view the stream:
//! - **Raw mode**: entries as plain text, continuations right under their header
//! - **Pretty mode**: severity-colored headers with continuations in a gutter
//! - **Stats mode**: a dashboard of severity counts, redrawn every second
//!
//! Raw and pretty write an entry once it can no longer grow, which is when
//! the next entry opens or the input ends. Search and severity filters apply
//! to what gets written.
//!
//! The overall data processing architecture is:
//!
//! stdin
//! Session (ledger, grouping)
//! Filter
//! render_entry / render_stats
//!

mod constants;
mod emit;
mod input;
mod render;
mod run;

#[cfg(test)]
mod tests;

pub use input::{InputFormat, line_event};
pub use run::{LogsOptions, run_logs};
