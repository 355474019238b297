/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Error responses of the JSON protocols (`restJson1`, `awsJson1_0`, `awsJson1_1`).

use crate::request_id::extract_request_id;
use crate::retry::is_retryable;
use smithy_http::connector::HttpResponse;
use smithy_types::{Error, ErrorKind};

fn sanitize_error_code(error_code: &str) -> &str {
    // Trim a trailing URL from the error code, beginning with a `:`
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };

    // Trim a prefixing namespace from the error code, beginning with a `#`
    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

fn body_string<'a>(body: &'a serde_json::Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .find_map(|key| body.get(*key).and_then(serde_json::Value::as_str))
}

/// Converts an error response into an [`Error`] of kind [`ErrorKind::Service`].
///
/// The code is read from the `x-amzn-errortype` header, falling back to the `__type` or `code`
/// body members. The message is read from `message` or `Message`.
pub fn parse_error(response: &HttpResponse) -> Error {
    let body = serde_json::from_slice::<serde_json::Value>(response.body())
        .unwrap_or(serde_json::Value::Null);
    let code = response
        .headers()
        .get("x-amzn-errortype")
        .and_then(|value| value.to_str().ok())
        .or_else(|| body_string(&body, &["__type", "code"]))
        .map(sanitize_error_code)
        .filter(|code| !code.is_empty());
    let message = body_string(&body, &["message", "Message", "errorMessage"]);

    let mut builder = Error::builder(ErrorKind::Service)
        .retryable(is_retryable(response.status(), code));
    if let Some(code) = code {
        builder = builder.code(code);
    }
    if let Some(message) = message {
        builder = builder.message(message);
    } else if code.is_none() {
        builder = builder.message(format!("unhandled error response (status {})", response.status()));
    }
    if let Some(request_id) = extract_request_id(response.headers()) {
        builder = builder.request_id(request_id);
    }
    let error = builder.build();
    tracing::debug!(error = %error, "parsed error response");
    error
}
