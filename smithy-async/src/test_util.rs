/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Executors that make task scheduling deterministic in tests.
//!
//! - [`InlineExecutor`]: runs every task on the submitting thread, before `submit` returns.
//! - [`ManualExecutor`]: queues tasks until the test runs them, in submission or reverse order.
//! - [`RejectingExecutor`]: refuses every task.
//! - [`DroppingExecutor`]: accepts every task and drops it without running it.

use crate::rt::executor::{Executor, SubmitError, SubmitErrorKind, Task};
use std::sync::{Arc, Mutex};

/// Runs each task immediately on the thread that submitted it.
#[derive(Clone, Debug, Default)]
pub struct InlineExecutor {
    submitted: Arc<Mutex<usize>>,
}

impl InlineExecutor {
    /// Creates a new `InlineExecutor`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks submitted so far.
    pub fn submitted(&self) -> usize {
        *self.submitted.lock().unwrap()
    }
}

impl Executor for InlineExecutor {
    fn submit(&self, task: Task) -> Result<(), SubmitError> {
        *self.submitted.lock().unwrap() += 1;
        task.run();
        Ok(())
    }
}

/// Holds submitted tasks until the test decides to run them.
#[derive(Clone, Debug, Default)]
pub struct ManualExecutor {
    queue: Arc<Mutex<Vec<Task>>>,
    submitted: Arc<Mutex<usize>>,
}

impl ManualExecutor {
    /// Creates a new `ManualExecutor`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks submitted so far, including the ones that already ran.
    pub fn submitted(&self) -> usize {
        *self.submitted.lock().unwrap()
    }

    /// Number of tasks waiting to run.
    pub fn pending(&self) -> usize {
        self.queue.lock().unwrap().len()
    }

    /// Run every queued task, in submission order, on the current thread.
    pub fn run_all(&self) -> usize {
        let tasks = self.take();
        let count = tasks.len();
        tasks.into_iter().for_each(Task::run);
        count
    }

    /// Run every queued task, in reverse submission order, on the current thread.
    pub fn run_all_reversed(&self) -> usize {
        let tasks = self.take();
        let count = tasks.len();
        tasks.into_iter().rev().for_each(Task::run);
        count
    }

    /// Run every queued task, in reverse submission order, on a freshly spawned thread.
    pub fn run_all_reversed_on_thread(&self) -> std::thread::JoinHandle<usize> {
        let this = self.clone();
        std::thread::spawn(move || this.run_all_reversed())
    }

    fn take(&self) -> Vec<Task> {
        std::mem::take(&mut *self.queue.lock().unwrap())
    }
}

impl Executor for ManualExecutor {
    fn submit(&self, task: Task) -> Result<(), SubmitError> {
        *self.submitted.lock().unwrap() += 1;
        self.queue.lock().unwrap().push(task);
        Ok(())
    }
}

/// Refuses every task with the configured reason.
#[derive(Clone, Debug)]
pub struct RejectingExecutor {
    kind: SubmitErrorKind,
}

impl RejectingExecutor {
    /// Reject tasks as if the executor had been shut down.
    pub fn shut_down() -> Self {
        Self {
            kind: SubmitErrorKind::ShutDown,
        }
    }

    /// Reject tasks as if the queue were full.
    pub fn queue_full(capacity: usize) -> Self {
        Self {
            kind: SubmitErrorKind::QueueFull { capacity },
        }
    }
}

impl Executor for RejectingExecutor {
    fn submit(&self, task: Task) -> Result<(), SubmitError> {
        Err(match self.kind {
            SubmitErrorKind::QueueFull { capacity } => SubmitError::queue_full(capacity, task),
            _ => SubmitError::shut_down(task),
        })
    }
}

/// Accepts every task, then drops it without running it.
#[derive(Clone, Debug, Default)]
pub struct DroppingExecutor;

impl Executor for DroppingExecutor {
    fn submit(&self, task: Task) -> Result<(), SubmitError> {
        drop(task);
        Ok(())
    }
}
