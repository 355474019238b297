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

//! HTTP building blocks shared by every operation: the connector boundary, per-operation
//! metadata, and URI construction.

pub mod connector;
pub mod label;
pub mod operation;
pub mod path;
pub mod query;
pub mod result;
