//! Fixed-size worker pool that checks URLs concurrently
//!
//! All tasks are queued on one channel before the workers start pulling from
//! it. Each task carries the index of its result slot; slots are write-once
//! and only read after every worker has been joined, so results always come
//! back aligned with the dispatch order regardless of completion order.

use futures::future::join_all;
use log::{debug, error, warn};
use std::sync::{Arc, Mutex, OnceLock};
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::core::constants::{defaults, messages};
use crate::core::types::{CheckResult, CheckTask};
use crate::reporting::logging::log_check_result;
use crate::ui::progress::ProgressSink;
use crate::validation::checker::CheckUrl;

type TaskQueue = Arc<Mutex<UnboundedReceiver<CheckTask>>>;
type ResultSlots = Arc<Vec<OnceLock<CheckResult>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerPool {
    worker_count: usize,
}

impl Default for WorkerPool {
    fn default() -> Self {
        Self {
            worker_count: default_worker_count(),
        }
    }
}

/// Twice the number of available CPU cores
pub fn default_worker_count() -> usize {
    (num_cpus::get() * defaults::WORKERS_PER_CPU).max(1)
}

impl WorkerPool {
    /// A zero count is raised to one worker.
    pub fn new(worker_count: usize) -> Self {
        Self {
            worker_count: worker_count.max(1),
        }
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Check every URL and return the results in the order of `urls`.
    ///
    /// Returns only once all workers have finished. A failing check never
    /// stops the others; it shows up as a non-success result.
    pub async fn run(
        &self,
        urls: &[String],
        checker: Arc<dyn CheckUrl>,
        progress: Arc<dyn ProgressSink>,
    ) -> Vec<CheckResult> {
        let total = urls.len();
        progress.start(total);
        if total == 0 {
            progress.finish();
            return Vec::new();
        }

        let slots: ResultSlots = Arc::new((0..total).map(|_| OnceLock::new()).collect());

        let (task_tx, task_rx) = mpsc::unbounded_channel();
        for (index, url) in urls.iter().enumerate() {
            if task_tx.send(CheckTask::new(index, url.as_str())).is_err() {
                error!("Task queue closed before {url} was queued");
            }
        }
        drop(task_tx);
        let queue: TaskQueue = Arc::new(Mutex::new(task_rx));

        let workers = self.worker_count.min(total);
        debug!("Checking {total} URL(s) with {workers} worker(s)");

        let handles: Vec<_> = (0..workers)
            .map(|worker_id| {
                let queue = Arc::clone(&queue);
                let slots = Arc::clone(&slots);
                let checker = Arc::clone(&checker);
                let progress = Arc::clone(&progress);
                tokio::spawn(async move {
                    let mut checked = 0usize;
                    while let Some(task) = next_task(&queue) {
                        let result = checker.check(&task.url).await;
                        log_check_result(&result);
                        progress.record(&result);
                        if slots[task.index].set(result).is_err() {
                            warn!("Result slot {} was already filled", task.index);
                        }
                        checked += 1;
                    }
                    debug!("Worker {worker_id} finished after {checked} check(s)");
                })
            })
            .collect();

        for (worker_id, joined) in join_all(handles).await.into_iter().enumerate() {
            if let Err(err) = joined {
                error!("Worker {worker_id} stopped unexpectedly: {err}");
            }
        }
        progress.finish();

        let slots = Arc::try_unwrap(slots).unwrap_or_else(|shared| (*shared).clone());
        slots
            .into_iter()
            .zip(urls)
            .map(|(slot, url)| {
                slot.into_inner()
                    .unwrap_or_else(|| CheckResult::failed(url.as_str(), messages::CHECK_NOT_COMPLETED))
            })
            .collect()
    }
}

/// Take the next queued task. The queue is filled and closed before any
/// worker starts, so an empty queue means the run is over.
fn next_task(queue: &Mutex<UnboundedReceiver<CheckTask>>) -> Option<CheckTask> {
    let mut receiver = match queue.lock() {
        Ok(receiver) => receiver,
        Err(poisoned) => poisoned.into_inner(),
    };
    receiver.try_recv().ok()
}
