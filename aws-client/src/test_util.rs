/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Test connectors and log capture.

mod capture_test_logs;
mod connectors;

pub use capture_test_logs::{capture_test_logs, CapturedLogs, LogCaptureGuard};
pub use connectors::{infallible_connection_fn, CaptureConnector, FailingConnector};
