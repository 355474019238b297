/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation errors

use std::fmt;

/// The stage of an invocation that produced an [`Error`].
#[non_exhaustive]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// A required input member was not set. Detected locally, before any network activity.
    MissingParameter,

    /// The endpoint resolver could not produce an endpoint for the input.
    EndpointResolution,

    /// The HTTP request could not be built from the input.
    Construction,

    /// The executor refused the task, or dropped it before it ran.
    Dispatch,

    /// The request was not answered: connection failure, timeout, I/O error.
    Transport,

    /// A response was received but it could not be decoded.
    Response,

    /// The service answered with an error.
    Service,
}

impl ErrorKind {
    /// Returns true if this error was detected without contacting the service.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ErrorKind::MissingParameter
                | ErrorKind::EndpointResolution
                | ErrorKind::Construction
                | ErrorKind::Dispatch
        )
    }

    fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MissingParameter => "missing parameter",
            ErrorKind::EndpointResolution => "endpoint resolution failure",
            ErrorKind::Construction => "request construction failure",
            ErrorKind::Dispatch => "dispatch failure",
            ErrorKind::Transport => "transport error",
            ErrorKind::Response => "response error",
            ErrorKind::Service => "service error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure value of an [`Outcome`](crate::Outcome).
///
/// Errors are plain values: they can be cloned, compared, and sent across threads. This allows
/// the outcome delivered to a completion handler to be compared with the outcome of the
/// synchronous call form.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
    retryable: bool,
}

/// Builder for [`Error`].
#[derive(Debug)]
pub struct Builder {
    inner: Error,
}

impl Builder {
    /// Sets the error code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.inner.code = Some(code.into());
        self
    }

    /// Sets the error message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.inner.message = Some(message.into());
        self
    }

    /// Sets the request ID returned by the service.
    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    /// Marks the error as retryable (or not).
    pub fn retryable(mut self, retryable: bool) -> Self {
        self.inner.retryable = retryable;
        self
    }

    /// Creates the error.
    pub fn build(self) -> Error {
        self.inner
    }
}

impl Error {
    /// Returns a builder for an error of the given `kind`.
    ///
    /// The error is not retryable unless [`Builder::retryable`] is called.
    pub fn builder(kind: ErrorKind) -> Builder {
        Builder {
            inner: Error {
                kind,
                code: None,
                message: None,
                request_id: None,
                retryable: false,
            },
        }
    }

    /// A required input member named `field` was not set.
    pub fn missing_parameter(field: &str) -> Self {
        Self::builder(ErrorKind::MissingParameter)
            .code("MissingParameter")
            .message(format!("Missing required field [{}]", field))
            .build()
    }

    /// The endpoint resolver failed.
    pub fn endpoint_resolution(message: impl Into<String>) -> Self {
        Self::builder(ErrorKind::EndpointResolution)
            .code("EndpointResolutionFailure")
            .message(message)
            .build()
    }

    /// The request could not be built.
    pub fn construction_failure(message: impl Into<String>) -> Self {
        Self::builder(ErrorKind::Construction)
            .code("ConstructionFailure")
            .message(message)
            .build()
    }

    /// The executor did not run the operation.
    pub fn dispatch_failure(message: impl Into<String>) -> Self {
        Self::builder(ErrorKind::Dispatch)
            .code("DispatchFailure")
            .message(message)
            .build()
    }

    /// Returns the stage that produced this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error code.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Returns the error message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the request ID, if the service returned one.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Returns true if sending the same request again may succeed.
    pub fn is_retryable(&self) -> bool {
        self.retryable
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(code) = &self.code {
            write!(f, ": {}", code)?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
