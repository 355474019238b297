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

//! Checks for the requests a service client hands to its connector.
//!
//! Every check returns a [`ProtocolTestFailure`] describing the first mismatch. Wrap a check in
//! [`assert_ok`] to fail a test with the readable message.

use assert_json_diff::{assert_json_matches_no_panic, CompareMode, Config};
use http::{Method, Request};
use std::collections::HashSet;
use thiserror::Error;

/// A request did not match what the test expected.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ProtocolTestFailure {
    /// The request used another method.
    #[error("invalid method: expected `{expected}`, found `{found}`")]
    InvalidMethod {
        /// Expected method.
        expected: String,
        /// Actual method.
        found: String,
    },
    /// The request targeted another path.
    #[error("invalid path: expected `{expected}`, found `{found}`")]
    InvalidPath {
        /// Expected path.
        expected: String,
        /// Actual path.
        found: String,
    },
    /// An expected `key=value` pair is missing from the query string.
    #[error("missing query param: expected `{expected}`, found {found:?}")]
    MissingQueryParam {
        /// The expected pair.
        expected: String,
        /// Every pair in the query string.
        found: Vec<String>,
    },
    /// A query key that must be absent is present.
    #[error("forbidden query param present: `{expected}`")]
    ForbiddenQueryParam {
        /// The forbidden key.
        expected: String,
    },
    /// A query key that must be present is absent.
    #[error("required query param missing: `{expected}`")]
    RequiredQueryParam {
        /// The required key.
        expected: String,
    },
    /// A header has another value.
    #[error("invalid header value for key `{key}`: expected `{expected}`, found `{found}`")]
    InvalidHeader {
        /// Header name.
        key: String,
        /// Expected value.
        expected: String,
        /// Actual value, list members joined with `, `.
        found: String,
    },
    /// A header is missing.
    #[error("missing required header: `{expected}`")]
    MissingHeader {
        /// Header name.
        expected: String,
    },
    /// A header that must be absent is present.
    #[error("forbidden header present: `{forbidden}`")]
    ForbiddenHeader {
        /// Header name.
        forbidden: String,
    },
    /// The body differs from the expected one.
    #[error("body did not match:\n{comparison}")]
    BodyDidNotMatch {
        /// Description of the difference.
        comparison: String,
    },
    /// The body could not be parsed as the expected media type.
    #[error("expected body to be valid {expected} but it was not: {found}")]
    InvalidBody {
        /// Expected media type.
        expected: String,
        /// Parser error.
        found: String,
    },
}

/// How a request body should be compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    /// Structural JSON comparison: key order and whitespace are ignored.
    Json,
    /// Byte for byte comparison.
    Other,
}

impl<T: AsRef<str>> From<T> for MediaType {
    fn from(content_type: T) -> Self {
        let content_type = content_type.as_ref();
        if content_type.starts_with("application/json")
            || content_type.starts_with("application/x-amz-json-")
        {
            MediaType::Json
        } else {
            MediaType::Other
        }
    }
}

/// Panics with the failure's message if the check did not pass.
#[track_caller]
pub fn assert_ok(result: Result<(), ProtocolTestFailure>) {
    if let Err(failure) = result {
        panic!("protocol test failed: {}", failure);
    }
}

/// The request method must be `expected`.
pub fn validate_method<B>(request: &Request<B>, expected: Method) -> Result<(), ProtocolTestFailure> {
    if request.method() == expected {
        Ok(())
    } else {
        Err(ProtocolTestFailure::InvalidMethod {
            expected: expected.to_string(),
            found: request.method().to_string(),
        })
    }
}

/// The request path, without the query string, must be `expected`.
pub fn validate_path<B>(request: &Request<B>, expected: &str) -> Result<(), ProtocolTestFailure> {
    let found = request.uri().path();
    if found == expected {
        Ok(())
    } else {
        Err(ProtocolTestFailure::InvalidPath {
            expected: expected.to_string(),
            found: found.to_string(),
        })
    }
}

fn query_pairs<B>(request: &Request<B>) -> Vec<&str> {
    request
        .uri()
        .query()
        .map(|query| query.split('&').filter(|pair| !pair.is_empty()).collect())
        .unwrap_or_default()
}

fn query_keys<B>(request: &Request<B>) -> HashSet<&str> {
    query_pairs(request)
        .into_iter()
        .map(|pair| pair.split_once('=').map_or(pair, |(key, _)| key))
        .collect()
}

/// Every `key=value` (or bare `key`) in `expected` must appear, still encoded, in the query string.
pub fn validate_query_string<B>(
    request: &Request<B>,
    expected: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let pairs = query_pairs(request);
    match expected.iter().find(|param| !pairs.contains(*param)) {
        None => Ok(()),
        Some(missing) => Err(ProtocolTestFailure::MissingQueryParam {
            expected: missing.to_string(),
            found: pairs.iter().map(|pair| pair.to_string()).collect(),
        }),
    }
}

/// None of the keys in `forbidden` may appear in the query string.
pub fn forbid_query_params<B>(
    request: &Request<B>,
    forbidden: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let keys = query_keys(request);
    match forbidden.iter().find(|key| keys.contains(*key)) {
        None => Ok(()),
        Some(key) => Err(ProtocolTestFailure::ForbiddenQueryParam {
            expected: key.to_string(),
        }),
    }
}

/// Every key in `required` must appear in the query string, with any value.
pub fn require_query_params<B>(
    request: &Request<B>,
    required: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let keys = query_keys(request);
    match required.iter().find(|key| !keys.contains(*key)) {
        None => Ok(()),
        Some(key) => Err(ProtocolTestFailure::RequiredQueryParam {
            expected: key.to_string(),
        }),
    }
}

/// Each header must be present with exactly the given value.
///
/// Repeated headers are compared as a comma-delimited list.
pub fn validate_headers<B>(
    request: &Request<B>,
    expected: &[(&str, &str)],
) -> Result<(), ProtocolTestFailure> {
    for (key, expected_value) in expected {
        let values = request.headers().get_all(*key);
        if values.iter().next().is_none() {
            return Err(ProtocolTestFailure::MissingHeader {
                expected: key.to_string(),
            });
        }
        let found = values
            .iter()
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
            .collect::<Vec<_>>()
            .join(", ");
        if found != *expected_value {
            return Err(ProtocolTestFailure::InvalidHeader {
                key: key.to_string(),
                expected: expected_value.to_string(),
                found,
            });
        }
    }
    Ok(())
}

/// None of the headers in `forbidden` may be present.
pub fn forbid_headers<B>(
    request: &Request<B>,
    forbidden: &[&str],
) -> Result<(), ProtocolTestFailure> {
    match forbidden
        .iter()
        .find(|key| request.headers().contains_key(**key))
    {
        None => Ok(()),
        Some(key) => Err(ProtocolTestFailure::ForbiddenHeader {
            forbidden: key.to_string(),
        }),
    }
}

/// The body must match `expected` for the given media type.
///
/// An empty expected JSON body also matches an empty actual body.
pub fn validate_body(
    actual: impl AsRef<[u8]>,
    expected: &str,
    media_type: impl Into<MediaType>,
) -> Result<(), ProtocolTestFailure> {
    let actual = actual.as_ref();
    match media_type.into() {
        MediaType::Json if actual.is_empty() && expected.is_empty() => Ok(()),
        MediaType::Json => {
            let actual: serde_json::Value =
                serde_json::from_slice(actual).map_err(|err| ProtocolTestFailure::InvalidBody {
                    expected: "json".to_string(),
                    found: format!("{}: {}", err, String::from_utf8_lossy(actual)),
                })?;
            let expected: serde_json::Value =
                serde_json::from_str(expected).map_err(|err| ProtocolTestFailure::InvalidBody {
                    expected: "json".to_string(),
                    found: format!("expected body is not json: {}", err),
                })?;
            assert_json_matches_no_panic(&actual, &expected, Config::new(CompareMode::Strict))
                .map_err(|comparison| ProtocolTestFailure::BodyDidNotMatch { comparison })
        }
        MediaType::Other if actual == expected.as_bytes() => Ok(()),
        MediaType::Other => Err(ProtocolTestFailure::BodyDidNotMatch {
            comparison: format!(
                "expected `{}`, found `{}`",
                expected,
                String::from_utf8_lossy(actual)
            ),
        }),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn request(uri: &str) -> Request<()> {
        Request::builder().uri(uri).body(()).unwrap()
    }

    #[test]
    fn method_and_path() {
        let request = Request::builder()
            .method(Method::PATCH)
            .uri("https://qldb.us-east-1.amazonaws.com/ledgers/a?x=1")
            .body(())
            .unwrap();
        assert_ok(validate_method(&request, Method::PATCH));
        assert_ok(validate_path(&request, "/ledgers/a"));
        assert_eq!(
            validate_method(&request, Method::GET),
            Err(ProtocolTestFailure::InvalidMethod {
                expected: "GET".into(),
                found: "PATCH".into()
            })
        );
        validate_path(&request, "/ledgers").expect_err("path differs");
    }

    #[test]
    fn empty_query_string() {
        let request = request("/ledgers");
        validate_query_string(&request, &[]).expect("nothing is expected");
        validate_query_string(&request, &["max_results=1"]).expect_err("no params were sent");
        require_query_params(&request, &["next_token"]).expect_err("no params were sent");
    }

    #[test]
    fn query_pairs_are_compared_encoded() {
        let request = request("/ledgers?max_results=10&flag&next_token=a%20b");
        validate_query_string(&request, &["max_results=10", "flag", "next_token=a%20b"])
            .expect("all params are present");
        validate_query_string(&request, &["next_token=a b"]).expect_err("values stay encoded");
        validate_query_string(&request, &["max_results"]).expect_err("pairs match whole");
    }

    #[test]
    fn query_keys() {
        let request = request("/ledgers?max_results=10&flag");
        require_query_params(&request, &["max_results", "flag"]).expect("keys are present");
        require_query_params(&request, &["max_results=10"]).expect_err("keys, not pairs");
        forbid_query_params(&request, &["next_token"]).expect("key is absent");
        assert_eq!(
            forbid_query_params(&request, &["flag"]),
            Err(ProtocolTestFailure::ForbiddenQueryParam {
                expected: "flag".into()
            })
        );
    }

    #[test]
    fn headers() {
        let request = Request::builder()
            .uri("/")
            .header("Content-Type", "application/json")
            .header("X-Amz-Target", "Svc.Op")
            .header("X-List", "a")
            .header("X-List", "b")
            .body(())
            .unwrap();
        validate_headers(&request, &[("content-type", "application/json")])
            .expect("names are case insensitive");
        validate_headers(&request, &[("X-Amz-Target", "svc.op")]).expect_err("values are not");
        validate_headers(&request, &[("X-List", "a, b")]).expect("repeated headers are joined");
        validate_headers(&request, &[("X-List", "a")]).expect_err("every member is compared");
        assert_eq!(
            validate_headers(&request, &[("missing", "value")]),
            Err(ProtocolTestFailure::MissingHeader {
                expected: "missing".into()
            })
        );
        forbid_headers(&request, &["x-amz-user-agent"]).expect("header is absent");
        forbid_headers(&request, &["x-amz-target"]).expect_err("header is present");
    }

    #[test]
    fn json_bodies_compare_structurally() {
        validate_body(
            br#"{"Name":"l","Tags":{"a":"1"}}"#,
            r#"{ "Tags": { "a": "1" }, "Name": "l" }"#,
            "application/x-amz-json-1.1",
        )
        .expect("same document");
        validate_body(br#"{"Name":"l"}"#, r#"{"Name":"m"}"#, MediaType::Json)
            .expect_err("values differ");
        validate_body(br#"{"Name":"l","Extra":1}"#, r#"{"Name":"l"}"#, MediaType::Json)
            .expect_err("extra keys are a mismatch");
        validate_body(b"", "", MediaType::Json).expect("both empty");
        assert!(matches!(
            validate_body(b"not json", "{}", "application/json"),
            Err(ProtocolTestFailure::InvalidBody { .. })
        ));
    }

    #[test]
    fn other_bodies_compare_bytes() {
        validate_body(b"abc", "abc", "text/plain").expect("same bytes");
        validate_body(b"abc", "abd", MediaType::Other).expect_err("bytes differ");
    }

    #[test]
    #[should_panic(expected = "protocol test failed")]
    fn assert_ok_panics_with_the_failure() {
        assert_ok(validate_path(&request("/a"), "/b"));
    }
}
