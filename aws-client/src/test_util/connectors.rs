/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use smithy_http::connector::{HttpConnector, HttpRequest, HttpResponse, SharedHttpConnector};
use smithy_http::result::ConnectorError;
use std::fmt;
use std::ops::Deref;
use std::sync::{Arc, Mutex};

type ResponseFn = dyn Fn(&HttpRequest) -> HttpResponse + Send + Sync;

/// Test connector that records every request and answers with a closure.
///
/// ```rust,ignore
/// use aws_client::test_util::CaptureConnector;
/// let connector = CaptureConnector::ok(r#"{"Name":"my-ledger"}"#);
/// assert_eq!(connector.calls(), 0);
/// ```
#[derive(Clone)]
pub struct CaptureConnector {
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    response: Arc<ResponseFn>,
}

impl fmt::Debug for CaptureConnector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureConnector")
            .field("calls", &self.calls())
            .finish()
    }
}

impl CaptureConnector {
    /// Answers every request with the response returned by `response`.
    pub fn new(response: impl Fn(&HttpRequest) -> HttpResponse + Send + Sync + 'static) -> Self {
        Self {
            requests: Default::default(),
            response: Arc::new(response),
        }
    }

    /// Answers every request with `200 OK` and `body`.
    pub fn ok(body: &'static str) -> Self {
        Self::new(move |_| {
            http::Response::builder()
                .status(200)
                .body(Bytes::from_static(body.as_bytes()))
                .expect("valid response")
        })
    }

    /// Answers every request with `status`, `x-amzn-requestid: <request_id>`, and `body`.
    pub fn with_status(status: u16, request_id: &'static str, body: &'static str) -> Self {
        Self::new(move |_| {
            http::Response::builder()
                .status(status)
                .header("x-amzn-requestid", request_id)
                .body(Bytes::from_static(body.as_bytes()))
                .expect("valid response")
        })
    }

    /// Number of requests received so far.
    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Requests received so far, in arrival order.
    pub fn requests(&self) -> impl Deref<Target = Vec<HttpRequest>> + '_ {
        self.requests.lock().unwrap()
    }

    /// The only request received.
    ///
    /// # Panics
    /// If the number of requests received is not exactly one.
    #[track_caller]
    pub fn expect_request(&self) -> HttpRequest {
        let mut requests = self.requests.lock().unwrap();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.remove(0)
    }
}

impl HttpConnector for CaptureConnector {
    fn call(&self, request: HttpRequest) -> Result<HttpResponse, ConnectorError> {
        let response = (self.response)(&request);
        self.requests.lock().unwrap().push(request);
        Ok(response)
    }
}

/// Create a [`SharedHttpConnector`] from `Fn(http:Request) -> http::Response`
///
/// # Examples
///
/// ```rust,ignore
/// use aws_client::test_util::infallible_connection_fn;
/// let connector = infallible_connection_fn(|_req| http::Response::builder().status(200).body("OK!").unwrap());
/// ```
pub fn infallible_connection_fn<B>(
    f: impl Fn(HttpRequest) -> http::Response<B> + Send + Sync + 'static,
) -> SharedHttpConnector
where
    B: Into<Bytes>,
{
    SharedHttpConnector::new(InfallibleConnectorFn {
        response: Arc::new(move |request| f(request).map(Into::into)),
    })
}

struct InfallibleConnectorFn {
    response: Arc<dyn Fn(HttpRequest) -> HttpResponse + Send + Sync>,
}

impl fmt::Debug for InfallibleConnectorFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfallibleConnectorFn").finish()
    }
}

impl HttpConnector for InfallibleConnectorFn {
    fn call(&self, request: HttpRequest) -> Result<HttpResponse, ConnectorError> {
        Ok((self.response)(request))
    }
}

/// Test connector that fails every request without a response.
#[derive(Debug, Clone, Copy)]
pub enum FailingConnector {
    /// Fail with a timeout.
    Timeout,
    /// Fail with an I/O error.
    Io,
}

impl HttpConnector for FailingConnector {
    fn call(&self, _request: HttpRequest) -> Result<HttpResponse, ConnectorError> {
        Err(match self {
            FailingConnector::Timeout => ConnectorError::timeout("request timed out"),
            FailingConnector::Io => ConnectorError::io(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "connection reset by peer",
            )),
        })
    }
}
