/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! A single-use handoff cell between the thread producing a value and the caller waiting for it.
//!
//! ```rust
//! use smithy_async::future::deferred;
//!
//! let (promise, result) = deferred::channel();
//! std::thread::spawn(move || {
//!     let _ = promise.complete(42);
//! });
//! assert_eq!(result.wait(), Ok(42));
//! ```

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

/// The producer side was dropped without completing the [`Promise`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
#[error("the deferred result was abandoned before it was completed")]
pub struct Abandoned;

/// Creates a connected [`Promise`] / [`DeferredResult`] pair.
pub fn channel<T>() -> (Promise<T>, DeferredResult<T>) {
    let (tx, rx) = oneshot::channel();
    (Promise { tx }, DeferredResult { rx })
}

/// Producer half: completes the paired [`DeferredResult`] exactly once.
#[derive(Debug)]
pub struct Promise<T> {
    tx: oneshot::Sender<T>,
}

impl<T> Promise<T> {
    /// Complete the deferred result with `value`.
    ///
    /// If the consumer was dropped, the value is handed back.
    pub fn complete(self, value: T) -> Result<(), T> {
        self.tx.send(value)
    }

    /// Returns true if the consumer has been dropped.
    pub fn is_abandoned(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Consumer half: a value that becomes available once the paired [`Promise`] completes.
///
/// It can be awaited, blocked on with [`wait`](DeferredResult::wait), or polled with
/// [`try_take`](DeferredResult::try_take). Dropping it does not cancel the producer.
#[derive(Debug)]
#[must_use]
pub struct DeferredResult<T> {
    rx: oneshot::Receiver<T>,
}

impl<T> DeferredResult<T> {
    /// Block the current thread until the value is available.
    ///
    /// # Panics
    /// If called from within an asynchronous execution context. Use `.await` there instead.
    pub fn wait(self) -> Result<T, Abandoned> {
        self.rx.blocking_recv().map_err(|_| Abandoned)
    }

    /// Take the value if it is available, without blocking.
    ///
    /// Returns `None` while the producer is still running. Once a value (or [`Abandoned`]) has been
    /// returned, later calls return `Some(Err(Abandoned))`.
    pub fn try_take(&mut self) -> Option<Result<T, Abandoned>> {
        match self.rx.try_recv() {
            Ok(value) => Some(Ok(value)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(Err(Abandoned)),
        }
    }
}

impl<T> Future for DeferredResult<T> {
    type Output = Result<T, Abandoned>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx).poll(cx).map(|r| r.map_err(|_| Abandoned))
    }
}
