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

//! Outcome and error types shared by every operation call form.
//!
//! Every operation, no matter if it was called synchronously, through a deferred result, or
//! with a completion handler, produces exactly one [`Outcome`].

pub mod error;

pub use error::{Error, ErrorKind};

/// The result of a single operation invocation.
///
/// `Ok` carries the typed response, `Err` carries an [`Error`] describing which stage of the
/// invocation failed.
pub type Outcome<T> = Result<T, Error>;
