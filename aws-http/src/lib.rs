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

//! HTTP specific AWS SDK behaviors: user agent headers, request IDs, and the AWS JSON error
//! format.

pub mod json_errors;
pub mod request_id;
pub mod retry;
pub mod user_agent;
