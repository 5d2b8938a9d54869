use crate::cli::logs::constants::{LOOP_IDLE_SLEEP, RENDER_TICK, TRANSPORT_CHANNEL_CAPACITY};
use crate::cli::logs::emit::EntryEmitter;
use crate::cli::logs::input::{InputFormat, line_event, to_transport};
use crate::cli::logs::render::{
    RenderOptions, redraw, render_entry, render_snapshot_banner, render_stats,
};
use crate::logging::LogMode;
use crate::model::LogicalEntry;
use crate::stream::{
    Ingested, Session, SessionDriver, SessionSettings, TransportEvent, WireMessage,
};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub struct LogsOptions {
    pub mode: LogMode,
    pub input: InputFormat,
    pub settings: SessionSettings,
    pub timestamps: bool,
    pub expand_json: bool,
}

pub fn run_logs(opts: LogsOptions) -> Result<()> {
    match opts.mode {
        LogMode::Raw => run_streaming(&opts, false),
        LogMode::Pretty => run_streaming(&opts, true),
        LogMode::Stats => run_stats(opts),
    }
}

fn run_streaming(opts: &LogsOptions, color: bool) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    stream_entries(stdin.lock(), &mut stdout.lock(), opts, color)
}

/// Group `reader` line by line and write each entry once it is final.
pub(super) fn stream_entries(
    reader: impl BufRead,
    out: &mut impl Write,
    opts: &LogsOptions,
    color: bool,
) -> Result<()> {
    let render = RenderOptions {
        color,
        timestamps: opts.timestamps,
        expand_json: opts.expand_json,
    };

    let mut session = Session::new(opts.settings.clone());
    let mut emitter = EntryEmitter::default();
    session.on_connected();

    for line in reader.lines() {
        let line = line.context("failed to read input")?;

        let message = match opts.input {
            InputFormat::Lines => WireMessage::event(line_event(line)),
            InputFormat::Wire => match session.decode(&line) {
                Ok(message) => message,
                // Already counted and logged by the session.
                Err(_) => continue,
            },
        };

        // A snapshot replaces the ledger; the held-back entry goes out first.
        if matches!(message, WireMessage::Snapshot { .. }) {
            write_entries(out, emitter.finish(&session), &session, render)?;
        }

        if let Ingested::Replaced(count) = session.apply(message) {
            emitter.reset();
            out.write_all(
                render_snapshot_banner(count, session.display_name(), color).as_bytes(),
            )?;
        }

        write_entries(out, emitter.closed(&session), &session, render)?;
    }

    session.on_disconnected();
    write_entries(out, emitter.finish(&session), &session, render)?;
    out.flush()?;
    Ok(())
}

fn write_entries(
    out: &mut impl Write,
    entries: &[Arc<LogicalEntry>],
    session: &Session,
    render: RenderOptions,
) -> io::Result<()> {
    for entry in entries {
        if session.filter().matches(entry) {
            out.write_all(render_entry(entry, render).as_bytes())?;
        }
    }
    Ok(())
}

fn run_stats(opts: LogsOptions) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .thread_name("logtide-driver")
        .build()
        .context("failed to build tokio runtime")?;

    let (transport_tx, transport_rx) = mpsc::channel(TRANSPORT_CHANNEL_CAPACITY);
    let (driver, handle) = SessionDriver::new(Session::new(opts.settings));
    let driver_task = runtime.spawn(driver.run(transport_rx));

    // Reader thread: stdin -> transport frames.
    let input = opts.input;
    let reader_handle = thread::spawn(move || {
        if transport_tx.blocking_send(TransportEvent::Opened).is_err() {
            return;
        }
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let event = match line {
                Ok(line) => to_transport(line, input),
                Err(e) => TransportEvent::Error(e.to_string()),
            };
            let failed = matches!(event, TransportEvent::Error(_));
            if transport_tx.blocking_send(event).is_err() || failed {
                return;
            }
        }
        let _ = transport_tx.blocking_send(TransportEvent::Closed);
        // transport_tx is dropped here, which ends the driver.
    });

    ctrlc::set_handler(|| {
        print!("\x1b[?25h");
        let _ = io::stdout().flush();
        std::process::exit(130);
    })
    .context("failed to install Ctrl-C handler")?;

    print!("\x1b[?25l");
    let _ = io::stdout().flush();

    let mut last_render: Option<Instant> = None;
    loop {
        let finished = driver_task.is_finished();

        if finished || last_render.is_none_or(|at| at.elapsed() >= RENDER_TICK) {
            redraw(&render_stats(&handle.view()));
            last_render = Some(Instant::now());
        }

        if finished {
            break;
        }

        thread::sleep(LOOP_IDLE_SLEEP);
    }

    print!("\x1b[?25h");
    let _ = io::stdout().flush();

    let _ = reader_handle.join();
    runtime
        .block_on(driver_task)
        .context("session driver panicked")?;

    Ok(())
}
