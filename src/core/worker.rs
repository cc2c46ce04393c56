//! Background worker: runs a [`Register`] on its own thread so callers never
//! wait on disk I/O while issuing a request.
//!
//! Requests are processed in submission order. Each one gets a correlation
//! id; a reply carries the id of the request that produced it. A storage
//! error stops the worker, closes the reply channel and is handed back by
//! [`RegisterWorker::shutdown`]. Hosts that cannot wait for their next send
//! to notice use [`RegisterWorker::spawn_watched`].

use crate::core::messages::{Envelope, Reply, Request};
use crate::core::register::Register;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::error;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub struct RegisterWorker {
    requests: Option<Sender<Envelope>>,
    replies: Option<Receiver<Reply>>,
    handle: Option<JoinHandle<AppResult<()>>>,
    next_id: u64,
}

impl RegisterWorker {
    /// Move `register` onto a dedicated thread; replies are read with
    /// [`recv`](Self::recv) / [`recv_timeout`](Self::recv_timeout).
    pub fn spawn(register: Register) -> Self {
        let (rep_tx, rep_rx) = mpsc::channel::<Reply>();
        let mut worker = Self::spawn_with(register, move |reply| rep_tx.send(reply).is_ok());
        worker.replies = Some(rep_rx);
        worker
    }

    /// Move `register` onto a dedicated thread and hand every reply to
    /// `on_reply`, on the worker thread. Returning `false` stops the worker.
    pub fn spawn_with<F>(register: Register, on_reply: F) -> Self
    where
        F: FnMut(Reply) -> bool + Send + 'static,
    {
        Self::spawn_watched(register, on_reply, |_| {})
    }

    /// Like [`spawn_with`](Self::spawn_with), and `on_stop` runs on the worker
    /// thread with its outcome as soon as it stops, whatever the reason.
    pub fn spawn_watched<F, S>(mut register: Register, mut on_reply: F, on_stop: S) -> Self
    where
        F: FnMut(Reply) -> bool + Send + 'static,
        S: FnOnce(&AppResult<()>) + Send + 'static,
    {
        let (req_tx, req_rx) = mpsc::channel::<Envelope>();

        let handle = thread::spawn(move || -> AppResult<()> {
            let outcome = process(&mut register, &req_rx, &mut on_reply);
            on_stop(&outcome);
            outcome
        });

        Self {
            requests: Some(req_tx),
            replies: None,
            handle: Some(handle),
            next_id: 1,
        }
    }

    /// Queue a request; returns its correlation id.
    pub fn send(&mut self, request: Request) -> AppResult<u64> {
        let id = self.next_id;
        self.next_id += 1;
        self.send_with_id(id, request)?;
        Ok(id)
    }

    /// Queue a request under a caller-chosen correlation id.
    pub fn send_with_id(&mut self, id: u64, request: Request) -> AppResult<()> {
        let tx = self.requests.as_ref().ok_or(AppError::WorkerStopped)?;
        tx.send(Envelope { id, request })
            .map_err(|_| AppError::WorkerStopped)
    }

    /// Block until the next reply. `None` once the worker has stopped.
    pub fn recv(&self) -> Option<Reply> {
        self.replies.as_ref()?.recv().ok()
    }

    /// Wait at most `timeout` for the next reply.
    pub fn recv_timeout(&self, timeout: Duration) -> AppResult<Option<Reply>> {
        let replies = self.replies.as_ref().ok_or(AppError::WorkerStopped)?;
        match replies.recv_timeout(timeout) {
            Ok(reply) => Ok(Some(reply)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(AppError::WorkerStopped),
        }
    }

    /// Stop accepting requests, drain the queue and return the worker's
    /// outcome (the first storage error, if any).
    pub fn shutdown(mut self) -> AppResult<()> {
        self.requests.take();
        match self.handle.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| AppError::Other("register worker panicked".into()))?,
            None => Ok(()),
        }
    }
}

/// Request loop; ends on the first storage error or when `on_reply` refuses.
fn process<F>(
    register: &mut Register,
    requests: &Receiver<Envelope>,
    on_reply: &mut F,
) -> AppResult<()>
where
    F: FnMut(Reply) -> bool,
{
    for Envelope { id, request } in requests {
        if let Some(notification) = register.handle(request)?
            && !on_reply(Reply { id, notification })
        {
            break;
        }
    }
    Ok(())
}

impl Drop for RegisterWorker {
    // shutdown() was never called: the outcome has no other way out
    fn drop(&mut self) {
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            match handle.join() {
                Ok(Ok(())) => {}
                Ok(Err(e)) => error(format!("Register worker stopped: {e}")),
                Err(_) => error("Register worker panicked"),
            }
        }
    }
}
