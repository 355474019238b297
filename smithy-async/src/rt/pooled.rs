/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! A fixed-size pool of OS threads pulling tasks from a shared FIFO queue.

use crate::rt::executor::{Executor, SubmitError, Task};
use std::collections::VecDeque;
use std::fmt;
use std::num::NonZeroUsize;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use tracing::{error, trace, warn};

const DEFAULT_THREAD_NAME: &str = "aws-dispatch-worker";

/// What a [`PooledThreadExecutor`] does when work arrives faster than it is processed.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum OverflowPolicy {
    /// Queue the task until a worker is free, up to the configured `max_queued`.
    #[default]
    QueueTasks,
    /// Reject the task unless a worker is idle right now.
    RejectImmediately,
}

#[derive(Debug, Default)]
struct State {
    queue: VecDeque<Task>,
    idle: usize,
    shutdown: bool,
}

#[derive(Debug, Default)]
struct Shared {
    state: Mutex<State>,
    available: Condvar,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, State> {
        // Tasks run outside of the lock, so a poisoned lock still holds a consistent queue.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Builder for [`PooledThreadExecutor`].
#[derive(Clone, Debug, Default)]
pub struct Builder {
    pool_size: Option<NonZeroUsize>,
    max_queued: Option<usize>,
    overflow_policy: OverflowPolicy,
    thread_name: Option<String>,
}

impl Builder {
    /// Number of worker threads. Defaults to the available parallelism of the host.
    pub fn pool_size(mut self, pool_size: NonZeroUsize) -> Self {
        self.pool_size = Some(pool_size);
        self
    }

    /// Maximum number of tasks waiting for a worker. Unbounded by default.
    pub fn max_queued(mut self, max_queued: usize) -> Self {
        self.max_queued = Some(max_queued);
        self
    }

    /// Behavior when no worker is free.
    pub fn overflow_policy(mut self, overflow_policy: OverflowPolicy) -> Self {
        self.overflow_policy = overflow_policy;
        self
    }

    /// Name given to every worker thread.
    pub fn thread_name(mut self, thread_name: impl Into<String>) -> Self {
        self.thread_name = Some(thread_name.into());
        self
    }

    /// Spawn the worker threads and return the executor.
    ///
    /// Workers the operating system refuses to spawn are logged and left out of the pool. If no
    /// worker could be spawned, the executor starts shut down and rejects every task.
    pub fn build(self) -> PooledThreadExecutor {
        let pool_size = self
            .pool_size
            .or_else(|| thread::available_parallelism().ok())
            .map(NonZeroUsize::get)
            .unwrap_or(1);
        let thread_name = self
            .thread_name
            .unwrap_or_else(|| DEFAULT_THREAD_NAME.to_string());
        let shared = Arc::new(Shared::default());
        let workers: Vec<_> = (0..pool_size)
            .filter_map(|index| {
                let shared = shared.clone();
                thread::Builder::new()
                    .name(format!("{}-{}", thread_name, index))
                    .spawn(move || worker_loop(&shared))
                    .map_err(|err| error!(error = %err, index, "failed to spawn executor worker thread"))
                    .ok()
            })
            .collect();
        if workers.is_empty() {
            shared.lock().shutdown = true;
        }
        PooledThreadExecutor {
            shared,
            pool_size: workers.len(),
            workers: Mutex::new(workers),
            max_queued: self.max_queued,
            overflow_policy: self.overflow_policy,
        }
    }
}

/// An [`Executor`] backed by a fixed pool of OS threads.
///
/// Tasks are queued in submission order and picked up by the first idle worker. Once
/// [`shutdown`](PooledThreadExecutor::shutdown) is called (or the executor is dropped) no new
/// work is accepted, but tasks that were already accepted still run.
pub struct PooledThreadExecutor {
    shared: Arc<Shared>,
    workers: Mutex<Vec<JoinHandle<()>>>,
    pool_size: usize,
    max_queued: Option<usize>,
    overflow_policy: OverflowPolicy,
}

impl fmt::Debug for PooledThreadExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PooledThreadExecutor")
            .field("pool_size", &self.pool_size)
            .field("max_queued", &self.max_queued)
            .field("overflow_policy", &self.overflow_policy)
            .finish()
    }
}

impl PooledThreadExecutor {
    /// Returns a builder for a `PooledThreadExecutor`.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the number of worker threads.
    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// Returns the number of accepted tasks that have not started yet.
    pub fn pending(&self) -> usize {
        self.shared.lock().queue.len()
    }

    /// Stop accepting tasks, run the ones already accepted, and join the workers.
    ///
    /// When called from one of the pool's own workers, that worker is not joined; it exits once
    /// its current task returns.
    pub fn shutdown(&self) {
        {
            let mut state = self.shared.lock();
            if state.shutdown {
                return;
            }
            state.shutdown = true;
        }
        self.shared.available.notify_all();

        let workers: Vec<_> = self
            .workers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect();
        let current = thread::current().id();
        for worker in workers {
            if worker.thread().id() == current {
                continue;
            }
            if worker.join().is_err() {
                error!("executor worker exited with a panic");
            }
        }
    }
}

impl Executor for PooledThreadExecutor {
    fn submit(&self, task: Task) -> Result<(), SubmitError> {
        let mut state = self.shared.lock();
        if state.shutdown {
            warn!("rejected task: executor has been shut down");
            return Err(SubmitError::shut_down(task));
        }
        let capacity = match self.overflow_policy {
            OverflowPolicy::QueueTasks => self.max_queued,
            // every queued task will be claimed by one idle worker
            OverflowPolicy::RejectImmediately => Some(state.idle),
        };
        if let Some(capacity) = capacity {
            if state.queue.len() >= capacity {
                warn!(
                    capacity,
                    policy = ?self.overflow_policy,
                    "rejected task: executor is saturated"
                );
                return Err(SubmitError::queue_full(capacity, task));
            }
        }
        state.queue.push_back(task);
        trace!(pending = state.queue.len(), "task submitted");
        drop(state);
        self.shared.available.notify_one();
        Ok(())
    }
}

impl Drop for PooledThreadExecutor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn worker_loop(shared: &Shared) {
    loop {
        let task = {
            let mut state = shared.lock();
            loop {
                if let Some(task) = state.queue.pop_front() {
                    break task;
                }
                if state.shutdown {
                    return;
                }
                state.idle += 1;
                state = shared
                    .available
                    .wait(state)
                    .unwrap_or_else(PoisonError::into_inner);
                state.idle -= 1;
            }
        };
        if catch_unwind(AssertUnwindSafe(|| task.run())).is_err() {
            error!("task panicked; the worker thread keeps running");
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rt::executor::SubmitErrorKind;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc;
    use std::time::Duration;

    fn pool(size: usize) -> Builder {
        PooledThreadExecutor::builder().pool_size(NonZeroUsize::new(size).unwrap())
    }

    #[test]
    fn runs_every_accepted_task_once() {
        let executor = pool(4).build();
        let counter = Arc::new(AtomicUsize::new(0));
        for _ in 0..100 {
            let counter = counter.clone();
            executor
                .submit(Task::new(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                }))
                .expect("accepted");
        }
        executor.shutdown();
        assert_eq!(counter.load(Ordering::SeqCst), 100);
    }

    #[test]
    fn tasks_run_off_the_submitting_thread() {
        let executor = pool(1).thread_name("test-pool").build();
        let (tx, rx) = mpsc::channel();
        executor
            .submit(Task::new(move || {
                let name = thread::current().name().map(str::to_string);
                tx.send(name).unwrap();
            }))
            .unwrap();
        let name = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(name.as_deref(), Some("test-pool-0"));
    }

    #[test]
    fn rejects_after_shutdown() {
        let executor = pool(1).build();
        executor.shutdown();
        let err = executor.submit(Task::new(|| {})).expect_err("shut down");
        assert_eq!(err.kind(), &SubmitErrorKind::ShutDown);
    }

    #[test]
    fn bounded_queue_rejects_when_full() {
        let executor = pool(1).max_queued(1).build();
        let (started_tx, started_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel::<()>();
        executor
            .submit(Task::new(move || {
                started_tx.send(()).unwrap();
                let _ = release_rx.recv();
            }))
            .unwrap();
        // the single worker is now busy
        started_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        executor.submit(Task::new(|| {})).expect("fits in the queue");
        let err = executor.submit(Task::new(|| {})).expect_err("queue full");
        assert_eq!(err.kind(), &SubmitErrorKind::QueueFull { capacity: 1 });
        release_tx.send(()).unwrap();
    }

    #[test]
    fn reject_immediately_when_all_workers_are_busy() {
        let executor = pool(1)
            .overflow_policy(OverflowPolicy::RejectImmediately)
            .build();
        let (started_tx, started_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel::<()>();
        // wait for the worker to park before submitting
        while executor.shared.lock().idle == 0 {
            thread::yield_now();
        }
        executor
            .submit(Task::new(move || {
                started_tx.send(()).unwrap();
                let _ = release_rx.recv();
            }))
            .unwrap();
        started_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        let err = executor.submit(Task::new(|| {})).expect_err("no idle worker");
        assert_eq!(err.kind(), &SubmitErrorKind::QueueFull { capacity: 0 });
        release_tx.send(()).unwrap();
    }

    #[test]
    fn panicking_task_does_not_kill_the_worker() {
        let executor = pool(1).build();
        executor
            .submit(Task::new(|| panic!("boom")))
            .expect("accepted");
        let (tx, rx) = mpsc::channel();
        executor.submit(Task::new(move || tx.send(()).unwrap())).unwrap();
        rx.recv_timeout(Duration::from_secs(5))
            .expect("second task ran");
    }

    #[test]
    fn drop_from_a_worker_does_not_deadlock() {
        let executor = Arc::new(pool(2).build());
        let (tx, rx) = mpsc::channel();
        let handle = executor.clone();
        drop(executor);
        let inner = handle.clone();
        handle
            .submit(Task::new(move || {
                // the last reference to the executor is released on its own worker
                drop(inner);
                tx.send(()).unwrap();
            }))
            .unwrap();
        drop(handle);
        rx.recv_timeout(Duration::from_secs(5)).unwrap();
    }
}
