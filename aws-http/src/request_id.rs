/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request IDs returned by AWS services.

use http::HeaderMap;

/// Headers that carry the request ID, in order of preference.
///
/// JSON services answer with `x-amzn-requestid`; some older services use `x-amz-request-id`.
pub const REQUEST_ID_HEADERS: [&str; 2] = ["x-amzn-requestid", "x-amz-request-id"];

/// Returns the request ID of a response, if the service sent a readable one.
pub fn extract_request_id(headers: &HeaderMap) -> Option<&str> {
    REQUEST_ID_HEADERS
        .iter()
        .find_map(|name| headers.get(*name)?.to_str().ok())
}
