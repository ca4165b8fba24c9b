//! Background report loading.
//!
//! Loading is the only asynchronous step in the application: the workbook
//! is read on a worker thread while the UI shows a spinner, and the app
//! polls for the result once per frame. No store mutation happens until
//! the result arrives on the UI thread.

use std::path::PathBuf;
use std::thread;

use anyhow::anyhow;
use crossbeam_channel::{Receiver, TryRecvError, bounded};
use linkmon_ingest::{IngestError, load_report};
use linkmon_model::Record;

type LoadResult = Result<Vec<Record>, IngestError>;

#[derive(Default)]
pub struct ReportLoader {
    pending: Option<Pending>,
}

struct Pending {
    path: PathBuf,
    receiver: Receiver<LoadResult>,
}

impl ReportLoader {
    /// Start loading `path` on a worker thread. At most one load is in
    /// flight; a second request while pending is ignored.
    pub fn start(&mut self, path: PathBuf) {
        if self.pending.is_some() {
            tracing::warn!(path = %path.display(), "load already in flight, ignoring request");
            return;
        }

        tracing::info!(path = %path.display(), "loading report");
        let (sender, receiver) = bounded(1);
        let worker_path = path.clone();
        thread::spawn(move || {
            let result = load_report(&worker_path);
            // The app may have exited while we were reading; nothing to do.
            let _ = sender.send(result);
        });
        self.pending = Some(Pending { path, receiver });
    }

    pub fn in_flight(&self) -> bool {
        self.pending.is_some()
    }

    /// Poll for a finished load. Returns the path and outcome exactly once
    /// per started load.
    pub fn poll(&mut self) -> Option<(PathBuf, anyhow::Result<Vec<Record>>)> {
        let pending = self.pending.as_ref()?;
        match pending.receiver.try_recv() {
            Ok(result) => {
                let pending = self.pending.take().expect("pending load just observed");
                Some((pending.path, result.map_err(anyhow::Error::from)))
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                let pending = self.pending.take().expect("pending load just observed");
                Some((
                    pending.path,
                    Err(anyhow!("report loader thread terminated unexpectedly")),
                ))
            }
        }
    }
}
