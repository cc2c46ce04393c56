//! JSON-lines bridge for a UI host.
//!
//! Every stdin line is one request, either bare (`{"kind":"findItem",…}`) or
//! wrapped with a correlation id (`{"id":7,"kind":"findItem",…}`). Bare
//! requests get ids assigned by the worker, so a host should use one style.
//! Each notification is written to stdout as one line carrying the id of its
//! request.
//!
//! A storage error ends the bridge at once, even while stdin stays open: the
//! process exits non-zero instead of leaving the host waiting for replies.

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::messages::{Envelope, Request};
use crate::core::worker::RegisterWorker;
use crate::errors::AppResult;
use crate::ui::messages::error;
use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

enum Incoming {
    Tagged(Envelope),
    Bare(Request),
}

/// What the bridge loop waits on.
enum Event {
    Line(io::Result<String>),
    InputClosed,
    WorkerStopped,
}

fn parse_line(line: &str) -> Result<Incoming, serde_json::Error> {
    match serde_json::from_str::<Envelope>(line) {
        Ok(env) => Ok(Incoming::Tagged(env)),
        Err(_) => serde_json::from_str::<Request>(line).map(Incoming::Bare),
    }
}

/// Forward stdin lines as events; the thread is left blocked on read if the
/// bridge ends first.
fn spawn_stdin_reader(events: mpsc::Sender<Event>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            if events.send(Event::Line(line)).is_err() {
                return;
            }
        }
        events.send(Event::InputClosed).ok();
    });
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if !matches!(cmd, Commands::Serve) {
        return Ok(());
    }

    let (events_tx, events) = mpsc::channel::<Event>();

    let register = super::open_register(cfg)?;
    let stopped = events_tx.clone();
    let mut worker = RegisterWorker::spawn_watched(
        register,
        |reply| {
            let Ok(line) = serde_json::to_string(&reply) else {
                return false;
            };
            let mut out = io::stdout().lock();
            writeln!(out, "{line}").and_then(|_| out.flush()).is_ok()
        },
        move |_| {
            stopped.send(Event::WorkerStopped).ok();
        },
    );

    spawn_stdin_reader(events_tx);

    for event in events.iter() {
        let line = match event {
            Event::Line(line) => line?,
            Event::InputClosed | Event::WorkerStopped => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let sent = match parse_line(&line) {
            Ok(Incoming::Tagged(env)) => worker.send_with_id(env.id, env.request),
            Ok(Incoming::Bare(request)) => worker.send(request).map(|_| ()),
            Err(e) => {
                error(format!("Invalid request: {e}"));
                Ok(())
            }
        };

        // worker gone: its own error (if any) comes out of shutdown()
        if sent.is_err() {
            break;
        }
    }

    worker.shutdown()
}
