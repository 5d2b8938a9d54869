use crate::cli::logs::constants::BAR_WIDTH;
use crate::model::{LogicalEntry, Severity};
use crate::stream::View;
use chrono::{DateTime, Local};
use owo_colors::OwoColorize;
use std::fmt::Write as _;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub color: bool,
    pub timestamps: bool,
    /// Pretty-print headers that are a complete JSON document.
    pub expand_json: bool,
}

/// Local wall-clock time for RFC 3339 input, the input unchanged otherwise.
pub fn format_timestamp(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(ts) => ts
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => timestamp.to_string(),
    }
}

fn paint(text: &str, severity: Severity) -> String {
    match severity {
        Severity::Error => text.red().bold().to_string(),
        Severity::Warning => text.yellow().to_string(),
        Severity::Info => text.blue().to_string(),
        Severity::Debug => text.bright_black().to_string(),
        Severity::Success => text.green().to_string(),
        Severity::Default => text.to_string(),
    }
}

/// One entry, newline-terminated.
pub fn render_entry(entry: &LogicalEntry, opts: RenderOptions) -> String {
    let mut out = String::new();

    if opts.timestamps {
        let ts = format_timestamp(&entry.timestamp);
        if opts.color {
            let _ = write!(out, "{} ", ts.dimmed());
        } else {
            let _ = write!(out, "{ts} ");
        }
    }

    let severity = entry.severity();
    let payload = opts.expand_json.then(|| entry.payload()).flatten();

    match payload {
        Some(payload) => {
            let pretty = payload.to_pretty_string();
            for line in pretty.lines() {
                if opts.color {
                    out.push_str(&paint(line, severity));
                } else {
                    out.push_str(line);
                }
                out.push('\n');
            }
        }
        None => {
            if opts.color {
                out.push_str(&paint(&entry.header, severity));
            } else {
                out.push_str(&entry.header);
            }
            out.push('\n');
        }
    }

    for line in &entry.continuations {
        if opts.color {
            let _ = writeln!(out, "  {} {}", "│".dimmed(), line.dimmed());
        } else {
            let _ = writeln!(out, "{line}");
        }
    }

    out
}

pub fn render_snapshot_banner(events: usize, source: Option<&str>, color: bool) -> String {
    let text = match source {
        Some(name) => format!("── snapshot: {events} events from {name} ──"),
        None => format!("── snapshot: {events} events ──"),
    };
    if color {
        format!("{}\n", text.dimmed())
    } else {
        format!("{text}\n")
    }
}

pub fn render_stats(view: &View) -> String {
    let mut out = String::new();

    let title = view.source_name.as_deref().unwrap_or("stdin");
    let _ = write!(
        out,
        "Logtide Stats: {title} ({})\n\
         ==========================\n\
         entries: {} | shown: {} | rejected: {}\n",
        view.connection,
        view.total,
        view.entries.len(),
        view.rejected
    );

    if view.paused {
        let _ = writeln!(out, "PAUSED: {} events buffered", view.pending);
    }
    if !view.search.is_empty() {
        let _ = writeln!(out, "search: \"{}\"", view.search);
    }
    out.push('\n');

    let total = view.counts.total();
    if total == 0 {
        out.push_str("Severity: <no entries>\n");
        return out;
    }

    out.push_str("Severity:\n");
    for (severity, count) in view.counts.iter() {
        let pct = (count as f64 / total as f64) * 100.0;
        let bars = ((pct / 100.0) * BAR_WIDTH as f64).round() as usize;
        let marker = if view.severity == Some(severity) { "*" } else { " " };
        let _ = writeln!(
            out,
            " {marker}{:<8} {:<width$} {:>5.1}% ({count})",
            severity.as_str(),
            "█".repeat(bars),
            pct,
            width = BAR_WIDTH
        );
    }

    out
}

pub fn redraw(output: &str) {
    print!("\x1b[2J\x1b[H");
    println!("{output}");
    let _ = io::stdout().flush();
}
