/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The boundary between operation dispatch and the HTTP stack.
//!
//! An [`HttpConnector`] receives a fully built request (method, URI, headers, body, and the
//! operation [`Metadata`](crate::operation::Metadata) in its extensions) and is responsible for
//! signing it according to the operation's [`SigningScheme`](crate::operation::SigningScheme),
//! transmitting it, and returning the raw response.

use crate::result::ConnectorError;
use bytes::Bytes;
use std::fmt::Debug;
use std::sync::Arc;

/// A request ready to be signed and sent.
pub type HttpRequest = http::Request<Bytes>;

/// A fully loaded response.
pub type HttpResponse = http::Response<Bytes>;

/// Signs and sends HTTP requests. Calls block until the response has been read.
pub trait HttpConnector: Debug + Send + Sync {
    /// Send `request` and return the response.
    fn call(&self, request: HttpRequest) -> Result<HttpResponse, ConnectorError>;
}

impl<T> HttpConnector for Box<T>
where
    T: HttpConnector + ?Sized,
{
    fn call(&self, request: HttpRequest) -> Result<HttpResponse, ConnectorError> {
        T::call(self, request)
    }
}

impl<T> HttpConnector for Arc<T>
where
    T: HttpConnector + ?Sized,
{
    fn call(&self, request: HttpRequest) -> Result<HttpResponse, ConnectorError> {
        T::call(self, request)
    }
}

/// Wrapper type for sharable `HttpConnector`
#[derive(Clone, Debug)]
pub struct SharedHttpConnector(Arc<dyn HttpConnector>);

impl SharedHttpConnector {
    /// Create a new `SharedHttpConnector` from `HttpConnector`
    pub fn new(connector: impl HttpConnector + 'static) -> Self {
        Self(Arc::new(connector))
    }
}

impl From<Arc<dyn HttpConnector>> for SharedHttpConnector {
    fn from(connector: Arc<dyn HttpConnector>) -> Self {
        Self(connector)
    }
}

impl HttpConnector for SharedHttpConnector {
    fn call(&self, request: HttpRequest) -> Result<HttpResponse, ConnectorError> {
        self.0.call(request)
    }
}

/// A connector that fails every request. Used when no connector was configured.
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct MissingConnector;

impl HttpConnector for MissingConnector {
    fn call(&self, _request: HttpRequest) -> Result<HttpResponse, ConnectorError> {
        Err(ConnectorError::other("no HTTP connector was configured"))
    }
}
