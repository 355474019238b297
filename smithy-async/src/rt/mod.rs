/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Executor trait and its implementations.

pub mod executor;
pub mod pooled;

#[cfg(feature = "rt-tokio")]
pub mod tokio;
