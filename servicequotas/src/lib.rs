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

//! Client for Service Quotas.
//!
//! Service Quotas speaks AWS JSON 1.1: every operation is a `POST /` whose name travels in the
//! `X-Amz-Target` header. Each operation comes in a blocking, a callable, and a callback form.

mod client;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;

pub use aws_client::Config;
pub use aws_types::region::Region;
pub use client::{Client, SERVICE};
pub use smithy_types::{Error, ErrorKind, Outcome};
