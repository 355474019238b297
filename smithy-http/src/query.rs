/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Utilities for writing query strings

use crate::label::BASE_SET;
use percent_encoding::utf8_percent_encode;

/// Percent-encode `value` for use as a query key or value.
pub fn fmt_string<T: AsRef<str>>(value: T) -> String {
    utf8_percent_encode(value.as_ref(), BASE_SET).to_string()
}

/// Appends query parameters to a path, in the order given.
#[derive(Debug)]
pub struct Writer {
    out: String,
    prefix: char,
}

impl Writer {
    /// Start writing parameters after `path`.
    pub fn new(path: impl Into<String>) -> Self {
        let out = path.into();
        let prefix = if out.contains('?') { '&' } else { '?' };
        Writer { out, prefix }
    }

    /// Append `key=value`, encoding both.
    pub fn push_kv(&mut self, key: &str, value: &str) {
        self.out.push(self.prefix);
        self.out.push_str(&fmt_string(key));
        self.out.push('=');
        self.out.push_str(&fmt_string(value));
        self.prefix = '&';
    }

    /// Returns the path and query.
    pub fn build(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod test {
    use super::Writer;

    #[test]
    fn writes_parameters_in_order() {
        let mut writer = Writer::new("/ledgers");
        writer.push_kv("max_results", "10");
        writer.push_kv("next_token", "a b/c");
        assert_eq!(
            writer.build(),
            "/ledgers?max_results=10&next_token=a%20b%2Fc"
        );
    }

    #[test]
    fn no_parameters_leaves_the_path_alone() {
        assert_eq!(Writer::new("/").build(), "/");
    }

    #[test]
    fn existing_query_is_extended() {
        let mut writer = Writer::new("/x?tagging");
        writer.push_kv("a", "1");
        assert_eq!(writer.build(), "/x?tagging&a=1");
    }
}
