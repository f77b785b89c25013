use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use super::orders::{OrderSummary, sample_orders};
use crate::app::infrastructure::error::{AppError, Result};

/// Called from the worker after a report is queued, to wake the UI loop.
pub type Waker = Arc<dyn Fn() + Send + Sync>;

const SLEEP_SLICE: Duration = Duration::from_millis(25);

/// Shared flag flipped when the result is no longer wanted.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Completed {
        term: String,
        results: Vec<OrderSummary>,
    },
    Failed {
        term: String,
        error: String,
    },
}

struct SearchReport {
    token: CancelToken,
    outcome: SearchOutcome,
}

/// Runs the simulated order search off the UI thread.
///
/// Results come back over a channel and are only handed out by [`poll`] on
/// the owning thread. Starting a new search or calling [`cancel`] marks the
/// previous one stale; stale reports are dropped.
///
/// [`poll`]: SearchRunner::poll
/// [`cancel`]: SearchRunner::cancel
pub struct SearchRunner {
    tx: Sender<SearchReport>,
    rx: Receiver<SearchReport>,
    current: Option<CancelToken>,
    delay: Duration,
    waker: Option<Waker>,
}

impl SearchRunner {
    pub fn new(delay: Duration, waker: Option<Waker>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx,
            current: None,
            delay,
            waker,
        }
    }

    pub fn is_running(&self) -> bool {
        self.current.is_some()
    }

    pub fn start(&mut self, term: &str) {
        self.cancel();

        let token = CancelToken::new();
        self.current = Some(token.clone());

        let term = term.to_string();
        let delay = self.delay;
        let tx = self.tx.clone();
        let waker = self.waker.clone();
        let worker_token = token.clone();

        debug!(%term, "search started");
        let spawned = thread::Builder::new()
            .name("order-search".to_string())
            .spawn({
                let term = term.clone();
                move || {
                    if !sleep_unless_cancelled(delay, &worker_token) {
                        return;
                    }
                    let outcome = match simulated_search(&term) {
                        Ok(results) => SearchOutcome::Completed { term, results },
                        Err(e) => SearchOutcome::Failed {
                            term,
                            error: e.to_string(),
                        },
                    };
                    // Receiver gone means the page was dropped.
                    if tx.send(SearchReport { token: worker_token, outcome }).is_ok() {
                        if let Some(wake) = waker {
                            wake();
                        }
                    }
                }
            });

        if let Err(e) = spawned {
            warn!("could not start search worker: {e}");
            let _ = self.tx.send(SearchReport {
                token,
                outcome: SearchOutcome::Failed {
                    term,
                    error: e.to_string(),
                },
            });
        }
    }

    pub fn cancel(&mut self) {
        if let Some(token) = self.current.take() {
            token.cancel();
            debug!("search cancelled");
        }
    }

    /// Latest report of the current search, if it has arrived.
    pub fn poll(&mut self) -> Option<SearchOutcome> {
        let mut latest = None;
        while let Ok(report) = self.rx.try_recv() {
            if report.token.is_cancelled() {
                debug!("discarding stale search result");
                continue;
            }
            latest = Some(report.outcome);
        }
        if latest.is_some() {
            self.current = None;
        }
        latest
    }
}

impl Drop for SearchRunner {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Sleeps `delay` in slices. Returns false if cancelled meanwhile.
fn sleep_unless_cancelled(delay: Duration, token: &CancelToken) -> bool {
    let started = Instant::now();
    while started.elapsed() < delay {
        if token.is_cancelled() {
            return false;
        }
        thread::sleep(SLEEP_SLICE.min(delay.saturating_sub(started.elapsed())));
    }
    !token.is_cancelled()
}

fn simulated_search(term: &str) -> Result<Vec<OrderSummary>> {
    if term.trim().is_empty() {
        return Err(AppError::Search("empty search term".to_string()));
    }
    Ok(sample_orders())
}
