/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Describing operations.
//!
//! An operation is a zero-sized type implementing [`Operation`]. It names the input and output
//! types and the static facts about the call (name, HTTP method, path template, signing scheme),
//! and supplies the input specific pieces: validation, path labels, query parameters, the body,
//! and response parsing.

use aws_endpoint::EndpointParams;
use bytes::Bytes;
use http::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use smithy_http::connector::HttpResponse;
use smithy_http::operation::{Protocol, SigningScheme};
use smithy_types::{Error, ErrorKind, Outcome};

/// Static description of a service.
#[derive(Debug)]
pub struct ServiceMetadata {
    /// Service name, e.g. `QLDB`.
    pub name: &'static str,
    /// First label of the regional endpoint host, e.g. `qldb`.
    pub endpoint_prefix: &'static str,
    /// Name used in the credential scope when signing.
    pub signing_name: &'static str,
    /// API version, reported in the user agent.
    pub api_version: &'static str,
    /// Wire protocol.
    pub protocol: Protocol,
    /// Prefix of the `X-Amz-Target` header for the AWS JSON protocols.
    pub target_prefix: Option<&'static str>,
}

/// A single API operation.
pub trait Operation: 'static {
    /// The request type. Cloned once per callable or callback invocation.
    type Input: Clone + Send + Sync + 'static;
    /// The response type.
    type Output: Send + 'static;

    /// Operation name, e.g. `DescribeLedger`.
    const NAME: &'static str;
    /// HTTP method.
    const METHOD: Method;
    /// Path template, e.g. `/ledgers/{name}`.
    const PATH: &'static str;
    /// How the request is signed.
    const SIGNING: SigningScheme = SigningScheme::SigV4;

    /// Checks the input before anything else happens.
    ///
    /// Required members are checked in declaration order and the first absent one is reported.
    fn validate(input: &Self::Input) -> Result<(), Error>;

    /// Input specific endpoint parameters. Unset values are filled from the client configuration.
    fn endpoint_params(_input: &Self::Input) -> EndpointParams {
        EndpointParams::new()
    }

    /// Value of the path label `name`.
    fn label(_input: &Self::Input, _name: &str) -> Option<String> {
        None
    }

    /// Query parameters, in the order they are written.
    fn query(_input: &Self::Input) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Request body.
    fn serialize_body(_input: &Self::Input) -> Result<Bytes, Error> {
        Ok(Bytes::new())
    }

    /// Converts the raw response into the outcome of the call.
    fn parse_response(response: &HttpResponse) -> Outcome<Self::Output>;
}

/// Fails with [`ErrorKind::MissingParameter`] if `value` is absent.
pub fn require<T: ?Sized>(field: &str, value: Option<&T>) -> Result<(), Error> {
    match value {
        Some(_) => Ok(()),
        None => Err(Error::missing_parameter(field)),
    }
}

/// Like [`require`], for members bound to a path label: the value must also be non-empty.
pub fn require_label(field: &str, value: Option<&str>) -> Result<(), Error> {
    match value {
        None => Err(Error::missing_parameter(field)),
        Some("") => Err(Error::builder(ErrorKind::MissingParameter)
            .code("MissingParameter")
            .message(format!("Input field [{}] must not be empty", field))
            .build()),
        Some(_) => Ok(()),
    }
}

/// Serializes `body` as JSON.
pub fn serialize_json<T: Serialize>(body: &T) -> Result<Bytes, Error> {
    serde_json::to_vec(body)
        .map(Bytes::from)
        .map_err(|err| Error::construction_failure(format!("failed to serialize request body: {}", err)))
}

/// Parses a JSON response.
///
/// Success statuses are decoded into `T`; an empty body decodes as `{}`. Error statuses are
/// parsed with [`aws_http::json_errors::parse_error`].
pub fn parse_json<T: DeserializeOwned>(response: &HttpResponse) -> Outcome<T> {
    if !response.status().is_success() {
        return Err(aws_http::json_errors::parse_error(response));
    }
    let body: &[u8] = match response.body().as_ref() {
        b"" => &b"{}"[..],
        body => body,
    };
    serde_json::from_slice(body).map_err(|err| {
        let mut builder = Error::builder(ErrorKind::Response)
            .code("ResponseParseError")
            .message(format!("failed to parse response body: {}", err));
        if let Some(request_id) = aws_http::request_id::extract_request_id(response.headers()) {
            builder = builder.request_id(request_id);
        }
        builder.build()
    })
}
