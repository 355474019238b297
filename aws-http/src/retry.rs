/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Classifies service errors as retryable.
//!
//! Only the classification lives here. Deciding whether and when to retry is left to the caller.

use http::StatusCode;

const TRANSIENT_ERROR_STATUS_CODES: [u16; 5] = [408, 500, 502, 503, 504];
const THROTTLING_ERRORS: &[&str] = &[
    "Throttling",
    "ThrottlingException",
    "ThrottledException",
    "RequestThrottledException",
    "TooManyRequestsException",
    "ProvisionedThroughputExceededException",
    "TransactionInProgressException",
    "RequestLimitExceeded",
    "BandwidthLimitExceeded",
    "LimitExceededException",
    "RequestThrottled",
    "SlowDown",
    "PriorRequestNotComplete",
    "EC2ThrottledException",
];
const TRANSIENT_ERRORS: &[&str] = &["RequestTimeout", "RequestTimeoutException"];

/// Returns true if `code` names a throttling error.
pub fn is_throttling_error(code: &str) -> bool {
    THROTTLING_ERRORS.contains(&code)
}

/// Returns true if an error response with `status` and `code` may succeed when retried.
///
/// In order of priority:
/// 1. The code is checked against a predetermined list of throttling and transient error codes
/// 2. `429 Too Many Requests` and the transient status codes are retryable
pub fn is_retryable(status: StatusCode, code: Option<&str>) -> bool {
    if let Some(code) = code {
        if is_throttling_error(code) || TRANSIENT_ERRORS.contains(&code) {
            return true;
        }
    }
    status == StatusCode::TOO_MANY_REQUESTS
        || TRANSIENT_ERROR_STATUS_CODES.contains(&status.as_u16())
}
