/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#![allow(clippy::derive_partial_eq_without_eq)]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! Executors and deferred results used to run operations off the caller's thread.
//!
//! Work is handed to an [`Executor`](rt::executor::Executor) as a [`Task`](rt::executor::Task).
//! The default implementation is a pool of OS threads; a Tokio implementation is provided behind
//! the `rt-tokio` feature. Results flow back to the caller through a
//! [`DeferredResult`](future::deferred::DeferredResult).

pub mod future;
pub mod rt;

#[cfg(any(test, feature = "test-util"))]
pub mod test_util;
