//! Worker Pool Module
//!
//! Bounded set of concurrent executors shared by all in-flight requests.
//!
//! A small warm core of resident workers pulls jobs from a shared queue.
//! When a burst of work arrives, transient workers are spawned on demand up
//! to `max_threads` and exit again after an idle period. The hard bound is
//! enforced by an atomic live-worker count, so no more than `max_threads`
//! jobs ever execute simultaneously regardless of how many are queued.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot, Mutex};
use tokio::time::timeout;
use tracing::trace;

use crate::engine::chunker::Chunk;
use crate::engine::worker::{compute, Operation};
use crate::engine::POOL_IDLE_TIMEOUT_MS;
use crate::error::{AnalysisError, Result};

// == Work Item ==
/// One unit of chunk work. Immutable once submitted; owned by the pool
/// until its result is produced.
#[derive(Debug, Clone)]
pub struct WorkItem {
    /// The analysis to run
    pub operation: Operation,
    /// The chunk to run it over
    pub chunk: Chunk,
}

// == Partial Result ==
/// The outcome of one WorkItem, tagged with its originating chunk index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartialResult {
    /// Index of the chunk this result belongs to
    pub index: usize,
    /// The computed value
    pub value: u64,
}

type Task = Box<dyn FnOnce() -> Result<u64> + Send + 'static>;

/// Internal queue entry: a task plus the reply channel its submitter awaits.
struct Job {
    index: usize,
    task: Task,
    reply: oneshot::Sender<Result<PartialResult>>,
}

type SharedQueue = Arc<Mutex<mpsc::UnboundedReceiver<Job>>>;

// == Worker Pool ==
/// Bounded pool of concurrent workers with an idle-shutdown policy.
pub struct WorkerPool {
    queue_tx: mpsc::UnboundedSender<Job>,
    queue_rx: SharedQueue,
    /// Workers currently alive (resident + transient)
    live: Arc<AtomicUsize>,
    /// Workers currently executing a job
    busy: Arc<AtomicUsize>,
    /// Jobs queued but not yet picked up
    queued: Arc<AtomicUsize>,
    max_threads: usize,
    min_threads: usize,
    idle_timeout: Duration,
}

impl WorkerPool {
    // == Constructor ==
    /// Creates a pool with `max_threads` maximum concurrency and a warm
    /// core of `min(2, max_threads)` resident workers.
    ///
    /// Must be called within a Tokio runtime.
    pub fn new(max_threads: usize) -> Self {
        Self::with_idle_timeout(max_threads, Duration::from_millis(POOL_IDLE_TIMEOUT_MS))
    }

    /// Like [`WorkerPool::new`] but with a custom transient-worker idle
    /// timeout.
    pub fn with_idle_timeout(max_threads: usize, idle_timeout: Duration) -> Self {
        assert!(max_threads > 0, "max_threads must be positive");

        let (queue_tx, queue_rx) = mpsc::unbounded_channel();
        let pool = Self {
            queue_tx,
            queue_rx: Arc::new(Mutex::new(queue_rx)),
            live: Arc::new(AtomicUsize::new(0)),
            busy: Arc::new(AtomicUsize::new(0)),
            queued: Arc::new(AtomicUsize::new(0)),
            max_threads,
            min_threads: max_threads.min(2),
            idle_timeout,
        };

        for _ in 0..pool.min_threads {
            pool.live.fetch_add(1, Ordering::SeqCst);
            pool.spawn_worker(true);
        }

        pool
    }

    // == Submit ==
    /// Submits a task tagged with a chunk index.
    ///
    /// The task is queued until a worker is free; the returned receiver
    /// resolves with the task's [`PartialResult`] (or its error). Results
    /// are matched to submitters by channel identity, never by completion
    /// order.
    pub fn submit<F>(&self, index: usize, task: F) -> oneshot::Receiver<Result<PartialResult>>
    where
        F: FnOnce() -> Result<u64> + Send + 'static,
    {
        let (reply, rx) = oneshot::channel();
        let job = Job {
            index,
            task: Box::new(task),
            reply,
        };

        self.queued.fetch_add(1, Ordering::SeqCst);
        self.maybe_spawn_transient();

        // Send only fails if every worker is gone, which cannot happen
        // while the pool (and its resident workers) are alive.
        if self.queue_tx.send(job).is_err() {
            self.queued.fetch_sub(1, Ordering::SeqCst);
        }

        rx
    }

    /// Submits a typed [`WorkItem`]; the worker runs the matching analysis
    /// over the chunk content.
    pub fn submit_item(&self, item: WorkItem) -> oneshot::Receiver<Result<PartialResult>> {
        let WorkItem { operation, chunk } = item;
        self.submit(chunk.index, move || Ok(compute(operation, &chunk.content)))
    }

    // == Scaling ==
    /// Spawns a transient worker when demand exceeds the live worker count
    /// and the pool is under its cap. Best-effort: a missed spawn only
    /// means the job waits for an existing worker.
    fn maybe_spawn_transient(&self) {
        let live = self.live.load(Ordering::SeqCst);
        let demand = self.busy.load(Ordering::SeqCst) + self.queued.load(Ordering::SeqCst);
        if demand < live {
            return;
        }

        let grew = self.live.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| {
            (n < self.max_threads).then_some(n + 1)
        });
        if grew.is_ok() {
            self.spawn_worker(false);
        }
    }

    fn spawn_worker(&self, resident: bool) {
        tokio::spawn(worker_loop(
            self.queue_rx.clone(),
            self.live.clone(),
            self.busy.clone(),
            self.queued.clone(),
            self.idle_timeout,
            resident,
        ));
    }

    // == Introspection ==
    /// Maximum number of simultaneously executing workers.
    pub fn max_threads(&self) -> usize {
        self.max_threads
    }

    /// Size of the warm core that never idles out.
    pub fn min_threads(&self) -> usize {
        self.min_threads
    }

    /// Number of workers currently alive.
    pub fn live_workers(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    /// Number of workers currently executing a job.
    pub fn busy_workers(&self) -> usize {
        self.busy.load(Ordering::SeqCst)
    }
}

// == Worker Loop ==
/// Pulls jobs off the shared queue and executes them.
///
/// Resident workers wait for work indefinitely and exit only when the pool
/// is dropped. Transient workers exit after `idle_timeout` without work.
async fn worker_loop(
    queue: SharedQueue,
    live: Arc<AtomicUsize>,
    busy: Arc<AtomicUsize>,
    queued: Arc<AtomicUsize>,
    idle_timeout: Duration,
    resident: bool,
) {
    loop {
        let received = {
            let recv = async {
                let mut rx = queue.lock().await;
                rx.recv().await
            };
            if resident {
                Ok(recv.await)
            } else {
                timeout(idle_timeout, recv).await
            }
        };

        let job = match received {
            Ok(Some(job)) => job,
            // Queue closed: the pool was dropped
            Ok(None) => break,
            // Idled out
            Err(_) => {
                trace!("transient worker idling out");
                break;
            }
        };
        queued.fetch_sub(1, Ordering::SeqCst);

        busy.fetch_add(1, Ordering::SeqCst);
        let result = run_task(job.task, job.index);
        busy.fetch_sub(1, Ordering::SeqCst);

        // Submitter may have gone away; its result is simply discarded.
        let _ = job.reply.send(result);
    }

    live.fetch_sub(1, Ordering::SeqCst);
}

/// Executes one task, converting a panic into a `WorkerFailure` so a bad
/// task cannot take its worker down with it.
fn run_task(task: Task, index: usize) -> Result<PartialResult> {
    match catch_unwind(AssertUnwindSafe(task)) {
        Ok(result) => result.map(|value| PartialResult { index, value }),
        Err(_) => Err(AnalysisError::WorkerFailure(format!(
            "task for chunk {index} panicked"
        ))),
    }
}
