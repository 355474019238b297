/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Static, per-operation facts attached to every outgoing request.

use std::borrow::Cow;
use std::fmt;

/// How a request must be signed before it is sent.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SigningScheme {
    /// AWS Signature Version 4.
    SigV4,
    /// The request is sent unsigned.
    Anonymous,
}

impl SigningScheme {
    /// Returns the identifier of the signer that handles this scheme.
    pub fn as_str(&self) -> &'static str {
        match self {
            SigningScheme::SigV4 => "SignatureV4",
            SigningScheme::Anonymous => "NullSigner",
        }
    }
}

impl fmt::Display for SigningScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire protocol of a service. Decides the content type and how the operation is addressed.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Protocol {
    /// REST-style JSON: the operation is addressed by method and URI.
    RestJson1,
    /// AWS JSON 1.0: every operation is a `POST /` addressed by the `X-Amz-Target` header.
    AwsJson1_0,
    /// AWS JSON 1.1: like 1.0, with a different content type.
    AwsJson1_1,
}

impl Protocol {
    /// Content type of request bodies.
    pub fn content_type(&self) -> &'static str {
        match self {
            Protocol::RestJson1 => "application/json",
            Protocol::AwsJson1_0 => "application/x-amz-json-1.0",
            Protocol::AwsJson1_1 => "application/x-amz-json-1.1",
        }
    }

    /// Returns true if operations are addressed with the `X-Amz-Target` header.
    pub fn uses_target_header(&self) -> bool {
        matches!(self, Protocol::AwsJson1_0 | Protocol::AwsJson1_1)
    }
}

/// Operation metadata stored in the extensions of every request handed to a connector.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
    signing_name: Cow<'static, str>,
    signing_scheme: SigningScheme,
}

impl Metadata {
    /// Creates metadata for `operation` of `service`.
    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
        signing_name: impl Into<Cow<'static, str>>,
        signing_scheme: SigningScheme,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
            signing_name: signing_name.into(),
            signing_scheme,
        }
    }

    /// The operation name, e.g. `DescribeLedger`.
    pub fn name(&self) -> &str {
        &self.operation
    }

    /// The service name, e.g. `QLDB`.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// The name used in the credential scope when signing.
    pub fn signing_name(&self) -> &str {
        &self.signing_name
    }

    /// How the request must be signed.
    pub fn signing_scheme(&self) -> SigningScheme {
        self.signing_scheme
    }
}
