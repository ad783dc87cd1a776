use crate::error::{Error, Result};
use crossbeam::channel::{Receiver, Sender, bounded};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Progress callback: `(completed, total, worker_id)`
pub type ProgressFn<'a> = dyn Fn(usize, usize, usize) + Sync + 'a;

/// A fixed number of worker threads, spawned per [`WorkerPool::execute`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerPool {
    workers: usize,
    buffer_size: usize,
}

/// What a worker reports back for one item
enum TaskOutcome<R> {
    Completed(R),
    Failed(Error),
    Panicked(String),
}

/// Context for worker threads to avoid too many function parameters
struct WorkerContext<'scope, T, R, F> {
    worker_id: usize,
    work_rx: Receiver<(usize, T)>,
    result_tx: Sender<(usize, TaskOutcome<R>)>,
    progress_counter: &'scope AtomicUsize,
    total_items: usize,
    processor: &'scope F,
    progress_reporter: Option<&'scope ProgressFn<'scope>>,
}

impl WorkerPool {
    /// A pool of exactly `workers` threads (at least one)
    pub fn new(workers: usize) -> Self {
        let workers = workers.max(1);
        Self {
            workers,
            buffer_size: workers * 2,
        }
    }

    /// A pool sized to the hardware concurrency of this machine
    pub fn with_available_parallelism() -> Self {
        Self::new(num_cpus::get())
    }

    /// A pool sized from configuration limits, see [`WorkerPool::calculate_workers`]
    pub fn from_limits(max_threads: usize, thread_percentage: u8) -> Self {
        Self::new(Self::calculate_workers(max_threads, thread_percentage))
    }

    /// Calculate the worker count from available cores and configuration limits
    ///
    /// # Algorithm
    /// ```text
    /// 1. Detect available CPU cores: num_cpus::get()
    /// 2. Apply percentage: cores * thread_percentage / 100, at least 1
    /// 3. Apply config limit: min(max_threads, percentage_result) if max_threads > 0
    /// ```
    pub fn calculate_workers(max_threads: usize, thread_percentage: u8) -> usize {
        Self::workers_for_cores(num_cpus::get(), max_threads, thread_percentage)
    }

    fn workers_for_cores(cores: usize, max_threads: usize, thread_percentage: u8) -> usize {
        let by_percentage = std::cmp::max(1, (cores * thread_percentage as usize) / 100);

        if max_threads > 0 {
            std::cmp::min(max_threads, by_percentage)
        } else {
            by_percentage
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Apply `processor` to every item on the pool and return the results in
    /// item order
    ///
    /// The first item that fails (returns `Err` or panics) aborts the run:
    /// queued items are abandoned, workers finish what they hold, every
    /// thread is joined, and the failure is returned with the item's index.
    pub fn execute<T, R, F>(
        &self,
        work_items: Vec<T>,
        processor: F,
        progress_reporter: Option<&ProgressFn<'_>>,
    ) -> Result<Vec<R>>
    where
        T: Send,
        R: Send,
        F: Fn(&T, usize) -> Result<R> + Sync,
    {
        if work_items.is_empty() {
            return Ok(Vec::new());
        }

        let total_items = work_items.len();
        let actual_workers = std::cmp::min(self.workers, total_items);
        let (work_tx, work_rx) = bounded::<(usize, T)>(self.buffer_size);
        let (result_tx, result_rx) = bounded::<(usize, TaskOutcome<R>)>(self.buffer_size);
        let progress_counter = AtomicUsize::new(0);

        tracing::debug!(
            "Dispatching {} tasks to {} workers",
            total_items,
            actual_workers
        );

        crossbeam::thread::scope(|s| -> Result<Vec<R>> {
            for worker_id in 0..actual_workers {
                let ctx = WorkerContext {
                    worker_id,
                    work_rx: work_rx.clone(),
                    result_tx: result_tx.clone(),
                    progress_counter: &progress_counter,
                    total_items,
                    processor: &processor,
                    progress_reporter,
                };

                s.spawn(move |_| worker_thread(ctx));
            }

            // Producer thread: send work to workers
            s.spawn(move |_| {
                for indexed_item in work_items.into_iter().enumerate() {
                    if work_tx.send(indexed_item).is_err() {
                        break; // Workers dropped
                    }
                }
            });

            // Drop our handles so channel disconnects track the threads
            drop(work_rx);
            drop(result_tx);

            collect_results(result_rx, total_items)
        })
        .map_err(|_| Error::Pool("a worker thread panicked outside its task".to_string()))?
    }
}

impl Default for WorkerPool {
    fn default() -> Self {
        Self::with_available_parallelism()
    }
}

fn worker_thread<T, R, F>(ctx: WorkerContext<'_, T, R, F>)
where
    F: Fn(&T, usize) -> Result<R>,
{
    while let Ok((index, work_item)) = ctx.work_rx.recv() {
        let outcome =
            match panic::catch_unwind(AssertUnwindSafe(|| (ctx.processor)(&work_item, ctx.worker_id))) {
                Ok(Ok(result)) => TaskOutcome::Completed(result),
                Ok(Err(error)) => TaskOutcome::Failed(error),
                Err(payload) => TaskOutcome::Panicked(panic_message(payload.as_ref())),
            };

        if ctx.result_tx.send((index, outcome)).is_err() {
            break; // Collector gave up
        }

        let current = ctx.progress_counter.fetch_add(1, Ordering::Relaxed) + 1;
        if let Some(reporter) = ctx.progress_reporter {
            reporter(current, ctx.total_items, ctx.worker_id);
        }
    }
}

fn collect_results<R>(
    result_rx: Receiver<(usize, TaskOutcome<R>)>,
    total_items: usize,
) -> Result<Vec<R>> {
    let mut slots: Vec<Option<R>> = (0..total_items).map(|_| None).collect();
    let mut received = 0;

    while received < total_items {
        let Ok((index, outcome)) = result_rx.recv() else {
            break;
        };
        received += 1;

        match outcome {
            TaskOutcome::Completed(result) => slots[index] = Some(result),
            TaskOutcome::Failed(error) => {
                tracing::error!("Task {} failed: {}", index, error);
                return Err(Error::TaskFailed {
                    index,
                    source: Box::new(error),
                });
            }
            TaskOutcome::Panicked(message) => {
                tracing::error!("Task {} panicked: {}", index, message);
                return Err(Error::WorkerPanicked { index, message });
            }
        }
    }

    if received < total_items {
        return Err(Error::Pool(format!(
            "only {received} of {total_items} tasks reported a result"
        )));
    }

    Ok(slots.into_iter().flatten().collect())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
