/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! Operation dispatch for AWS service clients.
//!
//! Every operation is described once, as an implementation of [`Operation`](operation::Operation).
//! A [`Client`] then offers three ways to call it:
//!
//! - [`Client::call`] blocks the calling thread and returns the [`Outcome`].
//! - [`Client::call_callable`] returns an [`OutcomeFuture`] right away. The call runs on the
//!   client's executor.
//! - [`Client::call_async`] returns right away and hands the outcome to a completion handler on
//!   an executor thread.
//!
//! Service crates generate their facade methods with the [`operations!`] macro.

mod client;
mod config;
mod context;
mod dispatch;
mod invocation_id;
mod macros;
pub mod operation;

#[cfg(any(test, feature = "test-util"))]
pub mod test_util;

pub use client::{Client, OutcomeFuture};
pub use config::{Builder, Config};
pub use context::CallerContext;
pub use operation::{Operation, ServiceMetadata};
pub use smithy_types::{Error, ErrorKind, Outcome};
