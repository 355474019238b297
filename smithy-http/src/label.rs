/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Formatting values as URI labels and query parameters

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except the RFC 3986 unreserved characters is percent-encoded.
pub(crate) const BASE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const GREEDY: &AsciiSet = &BASE_SET.remove(b'/');

/// Percent-encode `value` for use as a path label.
///
/// Greedy labels (`{key+}`) may span several path segments, so `/` is left as is.
pub fn fmt_string<T: AsRef<str>>(value: T, greedy: bool) -> String {
    let set = if greedy { GREEDY } else { BASE_SET };
    utf8_percent_encode(value.as_ref(), set).to_string()
}
