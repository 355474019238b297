/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Implementation of [`Executor`] for Tokio.

use crate::rt::executor::{Executor, SubmitError, Task};
use ::tokio::runtime::Handle;

/// Runs tasks on the blocking thread pool of a Tokio runtime.
///
/// The runtime is owned by the caller; this executor only holds a [`Handle`] to it. Once the
/// runtime shuts down, the tasks it had not started yet are dropped without running.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct TokioExecutor {
    handle: Handle,
}

impl TokioExecutor {
    /// Create an executor that spawns onto the runtime behind `handle`.
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Create an executor for the runtime the caller is currently running on.
    ///
    /// # Panics
    /// If called outside of a Tokio runtime.
    pub fn current() -> Self {
        Self::new(Handle::current())
    }
}

impl Executor for TokioExecutor {
    fn submit(&self, task: Task) -> Result<(), SubmitError> {
        // the JoinHandle is detached: the outcome is delivered by the task itself
        let _ = self.handle.spawn_blocking(move || task.run());
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::TokioExecutor;
    use crate::rt::executor::{Executor, Task};
    use ::tokio::sync::oneshot;

    #[tokio::test(flavor = "multi_thread")]
    async fn runs_tasks_on_the_blocking_pool() {
        let executor = TokioExecutor::current();
        let (tx, rx) = oneshot::channel();
        let caller = std::thread::current().id();
        executor
            .submit(Task::new(move || {
                let _ = tx.send(std::thread::current().id());
            }))
            .expect("tokio executor accepts tasks");
        let worker = rx.await.expect("task ran");
        assert_ne!(caller, worker);
    }
}
