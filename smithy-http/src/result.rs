/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Failures reported by an [`HttpConnector`](crate::connector::HttpConnector).

use smithy_types::{Error, ErrorKind};
use std::error::Error as StdError;

pub(crate) type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum ConnectorErrorKind {
    Timeout,
    Io,
    Other,
}

/// The request could not be completed: no HTTP response was received.
///
/// The request MAY have been sent.
#[derive(Debug, thiserror::Error)]
#[error("{}", display_error(.kind, .source))]
pub struct ConnectorError {
    kind: ConnectorErrorKind,
    #[source]
    source: BoxError,
}

fn display_error(kind: &ConnectorErrorKind, source: &BoxError) -> String {
    match kind {
        ConnectorErrorKind::Timeout => format!("timeout: {}", source),
        ConnectorErrorKind::Io => format!("io error: {}", source),
        ConnectorErrorKind::Other => source.to_string(),
    }
}

impl ConnectorError {
    /// The connection timed out.
    pub fn timeout(source: impl Into<BoxError>) -> Self {
        Self {
            kind: ConnectorErrorKind::Timeout,
            source: source.into(),
        }
    }

    /// An I/O error occurred while sending the request or reading the response.
    pub fn io(source: impl Into<BoxError>) -> Self {
        Self {
            kind: ConnectorErrorKind::Io,
            source: source.into(),
        }
    }

    /// Any other failure. These are not considered retryable.
    pub fn other(source: impl Into<BoxError>) -> Self {
        Self {
            kind: ConnectorErrorKind::Other,
            source: source.into(),
        }
    }

    /// Returns true if the connection timed out.
    pub fn is_timeout(&self) -> bool {
        self.kind == ConnectorErrorKind::Timeout
    }

    /// Returns true if the failure was an I/O error.
    pub fn is_io(&self) -> bool {
        self.kind == ConnectorErrorKind::Io
    }
}

impl From<ConnectorError> for Error {
    fn from(err: ConnectorError) -> Self {
        Error::builder(ErrorKind::Transport)
            .code(match err.kind {
                ConnectorErrorKind::Timeout => "RequestTimeout",
                ConnectorErrorKind::Io => "ConnectionError",
                ConnectorErrorKind::Other => "TransportError",
            })
            .message(err.to_string())
            .retryable(err.kind != ConnectorErrorKind::Other)
            .build()
    }
}

#[cfg(test)]
mod test {
    use super::ConnectorError;
    use smithy_types::{Error, ErrorKind};
    use std::error::Error as _;

    #[test]
    fn timeouts_and_io_errors_are_retryable() {
        let err: Error = ConnectorError::timeout("read timed out").into();
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.code(), Some("RequestTimeout"));
        assert_eq!(err.message(), Some("timeout: read timed out"));
        assert!(err.is_retryable());

        let err: Error = ConnectorError::io("connection reset").into();
        assert!(err.is_retryable());

        let err: Error = ConnectorError::other("no connector").into();
        assert_eq!(err.message(), Some("no connector"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn source_is_the_underlying_failure() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset");
        let err = ConnectorError::io(io);
        assert!(err.is_io());
        assert_eq!(err.to_string(), "io error: connection reset");
        let source = err.source().expect("source");
        assert_eq!(source.to_string(), "connection reset");
        assert!(source.downcast_ref::<std::io::Error>().is_some());
    }
}
