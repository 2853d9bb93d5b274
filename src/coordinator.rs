//! Fan-out/fan-in fetch coordinator.
//!
//! [`FetchCoordinator::run`] spawns one task per configured URL. Every task
//! deposits exactly one summary line into a bounded channel whose capacity
//! matches the URL count, so no task ever waits on the consumer. Once all
//! tasks have been joined the channel is drained and printed in deposit order,
//! followed by the total elapsed time.
//!
//! There is no timeout or cancellation: a request that never completes keeps
//! the whole run from finishing.

use std::io::Write;
use std::time::{Duration, Instant};

use futures::future::join_all;
use tokio::sync::mpsc;

use crate::config::FetchConfig;
use crate::elapsed::format_duration;
use crate::errors::FetchError;
use crate::net::{self, Response};

/// What a run printed, minus the timing line.
#[derive(Debug, Clone)]
pub struct Report {
    /// Result lines in the order they were deposited.
    pub lines: Vec<String>,
    /// Time from launching the first task until every line was printed.
    pub elapsed: Duration,
    /// Writes to the output that failed, timing line included.
    pub failed_writes: usize,
}

impl Report {
    pub fn timing_line(&self) -> String {
        format!("Execution time: {}", format_duration(self.elapsed))
    }
}

pub struct FetchCoordinator {
    config: FetchConfig,
    client: reqwest::Client,
}

impl FetchCoordinator {
    /// Creates a coordinator together with the HTTP client its tasks share.
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = net::build_client(&config.user_agent)?;
        Ok(Self { config, client })
    }

    pub fn urls(&self) -> &[String] {
        &self.config.urls
    }

    /// Fetches every URL concurrently and writes one line per URL to `out`,
    /// then the `Execution time: ...` line.
    ///
    /// Write failures never cut the run short: they are logged and counted in
    /// [`Report::failed_writes`], and the remaining lines are still attempted.
    pub async fn run<W: Write>(&self, out: &mut W) -> Report {
        let urls = &self.config.urls;
        // tokio refuses a zero-capacity channel
        let (results_tx, mut results_rx) = mpsc::channel::<String>(urls.len().max(1));

        let start = Instant::now();

        let handles: Vec<_> = urls
            .iter()
            .map(|url| {
                log::debug!("spawning fetch task for {url}");
                tokio::spawn(fetch_url(self.client.clone(), url.clone(), results_tx.clone()))
            })
            .collect();

        // Only the tasks hold senders now, so the channel closes once they are done.
        drop(results_tx);

        for joined in join_all(handles).await {
            if let Err(e) = joined {
                log::error!("fetch task did not complete: {e}");
            }
        }

        let mut lines = Vec::with_capacity(urls.len());
        let mut failed_writes = 0;
        while let Some(line) = results_rx.recv().await {
            failed_writes += usize::from(!emit(out, &line));
            lines.push(line);
        }

        let mut report = Report {
            lines,
            elapsed: start.elapsed(),
            failed_writes,
        };
        let timing = report.timing_line();
        report.failed_writes += usize::from(!emit(out, &timing));
        if let Err(e) = out.flush() {
            log::warn!("cannot flush report output: {e}");
        }

        report
    }
}

// Writes one line, logging instead of propagating a failure.
fn emit<W: Write>(out: &mut W, line: &str) -> bool {
    match writeln!(out, "{line}") {
        Ok(()) => true,
        Err(e) => {
            log::warn!("cannot write report line {line:?}: {e}");
            false
        }
    }
}

/// Body of a single fetch task. Always deposits exactly one line.
pub async fn fetch_url(client: reqwest::Client, url: String, results: mpsc::Sender<String>) {
    let line = summarize(&url, net::fetch(&client, &url).await);

    if results.send(line).await.is_err() {
        log::error!("result channel closed before {url} could report");
    }
}

/// Formats the outcome of one fetch as its report line.
pub fn summarize(url: &str, outcome: Result<Response, FetchError>) -> String {
    match outcome {
        Ok(resp) => format!(
            "URL: {url} - Status Code: {} - Body Length: {}",
            resp.status,
            resp.body_len()
        ),
        Err(e) => {
            log::debug!("{e}");
            e.to_string()
        }
    }
}
