//! Fixed-size worker pool
//!
//! This module owns the **system resource** side of parallel evaluation:
//! deciding how many worker threads to run and coordinating them. It knows
//! nothing about matrices; the determinant driver hands it a list of work
//! items and a function to apply to each.
//!
//! ## What This Module Does:
//! - **Resource Discovery**: Detects available CPU cores using `num_cpus::get()`
//! - **Resource Calculation**: Applies configuration (thread percentage, max threads)
//! - **Execution**: Runs work items on scoped worker threads fed by crossbeam channels
//! - **Failure Handling**: Stops at the first failed or panicked item and reports it
//!
//! ## Lifecycle
//!
//! A [`WorkerPool`] is a cheap description of the pool (its size). Threads
//! are spawned inside [`WorkerPool::execute`] with `crossbeam::thread::scope`
//! and are always joined before `execute` returns, on success and on
//! failure alike. Nothing outlives the call.
//!
//! ```text
//!   producer ──(index, item)──▶ [bounded] ──▶ worker 0..N ──(index, outcome)──▶ [bounded] ──▶ collector
//! ```
//!
//! # Example
//!
//! ```rust
//! use cofactor::parallel::WorkerPool;
//!
//! let pool = WorkerPool::new(2);
//! let squares = pool.execute(vec![1, 2, 3], |x, _worker_id| Ok(x * x), None).unwrap();
//! assert_eq!(squares, vec![1, 4, 9]);
//! ```

mod pool;

pub use pool::{ProgressFn, WorkerPool};
