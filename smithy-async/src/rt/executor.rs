/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Provides an [`Executor`] trait that runs [`Task`]s off the submitting thread, and a
//! shareable [`SharedExecutor`] handle.

use crate::rt::pooled::PooledThreadExecutor;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// A unit of work submitted to an [`Executor`].
///
/// A task owns everything it needs to run, so it can outlive the stack frame that created it.
#[must_use]
pub struct Task(Box<dyn FnOnce() + Send + 'static>);

impl Task {
    /// Create a new task from a closure.
    pub fn new(f: impl FnOnce() + Send + 'static) -> Self {
        Task(Box::new(f))
    }

    /// Run the task, consuming it.
    pub fn run(self) {
        (self.0)()
    }
}

impl Debug for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task")
    }
}

/// Why an executor refused a task.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmitErrorKind {
    /// The executor cannot queue more work.
    QueueFull {
        /// Number of tasks the executor accepts before rejecting.
        capacity: usize,
    },
    /// The executor no longer accepts work.
    ShutDown,
}

/// Error returned by [`Executor::submit`].
///
/// The rejected task is handed back to the caller, who decides what to do with it.
#[derive(Debug, thiserror::Error)]
#[error("{}", display_kind(.kind))]
pub struct SubmitError {
    kind: SubmitErrorKind,
    task: Task,
}

fn display_kind(kind: &SubmitErrorKind) -> String {
    match kind {
        SubmitErrorKind::QueueFull { capacity } => {
            format!("executor is saturated ({} tasks already pending)", capacity)
        }
        SubmitErrorKind::ShutDown => "executor has been shut down".to_string(),
    }
}

impl SubmitError {
    /// The executor's queue is full.
    pub fn queue_full(capacity: usize, task: Task) -> Self {
        Self {
            kind: SubmitErrorKind::QueueFull { capacity },
            task,
        }
    }

    /// The executor is shut down.
    pub fn shut_down(task: Task) -> Self {
        Self {
            kind: SubmitErrorKind::ShutDown,
            task,
        }
    }

    /// Returns the reason the task was rejected.
    pub fn kind(&self) -> &SubmitErrorKind {
        &self.kind
    }

    /// Recover the rejected task.
    pub fn into_task(self) -> Task {
        self.task
    }
}

/// Runs tasks asynchronously.
///
/// Implementations must run every accepted task exactly once. No ordering is guaranteed between
/// tasks, and a task may start before or after `submit` returns.
pub trait Executor: Debug + Send + Sync {
    /// Submit `task` for execution.
    fn submit(&self, task: Task) -> Result<(), SubmitError>;
}

impl<T> Executor for Box<T>
where
    T: Executor,
    T: ?Sized,
{
    fn submit(&self, task: Task) -> Result<(), SubmitError> {
        T::submit(self, task)
    }
}

impl<T> Executor for Arc<T>
where
    T: Executor,
    T: ?Sized,
{
    fn submit(&self, task: Task) -> Result<(), SubmitError> {
        T::submit(self, task)
    }
}

/// Wrapper type for sharable `Executor`
#[derive(Clone, Debug)]
pub struct SharedExecutor(Arc<dyn Executor>);

impl SharedExecutor {
    /// Create a new `SharedExecutor` from `Executor`
    pub fn new(executor: impl Executor + 'static) -> Self {
        Self(Arc::new(executor))
    }
}

impl AsRef<dyn Executor> for SharedExecutor {
    fn as_ref(&self) -> &(dyn Executor + 'static) {
        self.0.as_ref()
    }
}

impl From<Arc<dyn Executor>> for SharedExecutor {
    fn from(executor: Arc<dyn Executor>) -> Self {
        SharedExecutor(executor)
    }
}

impl Executor for SharedExecutor {
    fn submit(&self, task: Task) -> Result<(), SubmitError> {
        self.0.submit(task)
    }
}

/// Returns the default executor: a [`PooledThreadExecutor`] sized to the available parallelism.
pub fn default_executor() -> SharedExecutor {
    SharedExecutor::new(PooledThreadExecutor::builder().build())
}
