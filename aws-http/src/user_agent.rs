/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The `User-Agent` and `x-amz-user-agent` headers.

use aws_types::build_metadata::{OsFamily, BUILD_METADATA};
use aws_types::env::Env;
use http::header::{HeaderName, InvalidHeaderValue, USER_AGENT};
use http::{HeaderMap, HeaderValue};
use std::borrow::Cow;
use std::fmt;
use std::fmt::{Display, Formatter};

const X_AMZ_USER_AGENT: HeaderName = HeaderName::from_static("x-amz-user-agent");

/// AWS User Agent
///
/// Built once per client and applied to every request with [`AwsUserAgent::apply`].
#[derive(Clone, Debug)]
pub struct AwsUserAgent {
    sdk_version: &'static str,
    api_metadata: ApiMetadata,
    os_family: OsFamily,
    rust_version: &'static str,
    exec_env: Option<String>,
    app_name: Option<Cow<'static, str>>,
}

/// Name and version of the service API a client was generated for.
#[derive(Clone, Debug)]
pub struct ApiMetadata {
    service_id: Cow<'static, str>,
    version: &'static str,
}

impl ApiMetadata {
    /// Metadata for `service_id` at API `version`.
    pub const fn new(service_id: &'static str, version: &'static str) -> Self {
        Self {
            service_id: Cow::Borrowed(service_id),
            version,
        }
    }
}

impl Display for ApiMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "api/{}/{}", self.service_id, self.version)
    }
}

/// The user agent could not be written to the request.
#[derive(Debug, thiserror::Error)]
#[error("Provided user agent header was invalid")]
pub struct UserAgentError(#[from] InvalidHeaderValue);

impl AwsUserAgent {
    /// Load a User Agent configuration from the environment
    ///
    /// `AWS_EXECUTION_ENV` is reported when set.
    pub fn new_from_environment(env: &Env, api_metadata: ApiMetadata) -> Self {
        AwsUserAgent {
            sdk_version: BUILD_METADATA.core_pkg_version,
            api_metadata,
            os_family: BUILD_METADATA.os_family,
            rust_version: BUILD_METADATA.rust_version,
            exec_env: env.var("AWS_EXECUTION_ENV"),
            app_name: None,
        }
    }

    /// Sets the application name reported with `app/`.
    pub fn with_app_name(mut self, app_name: impl Into<Cow<'static, str>>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// Generate a new-style user agent style header
    ///
    /// This header should be set at `x-amz-user-agent`
    pub fn aws_ua_header(&self) -> String {
        let mut parts = vec![
            format!("aws-sdk-rust/{}", self.sdk_version),
            self.api_metadata.to_string(),
            format!("os/{}", self.os_family.as_str()),
            format!("lang/rust/{}", self.rust_version),
        ];
        if let Some(exec_env) = &self.exec_env {
            parts.push(format!("exec-env/{}", exec_env));
        }
        if let Some(app_name) = &self.app_name {
            parts.push(format!("app/{}", app_name));
        }
        parts.join(" ")
    }

    /// Generate an old-style User-Agent header for backward compatibility
    ///
    /// This header is intended to be set at `User-Agent`
    pub fn ua_header(&self) -> String {
        format!(
            "aws-sdk-rust/{} os/{} lang/rust/{}",
            self.sdk_version,
            self.os_family.as_str(),
            self.rust_version
        )
    }

    /// Sets both user agent headers.
    pub fn apply(&self, headers: &mut HeaderMap) -> Result<(), UserAgentError> {
        headers.append(USER_AGENT, HeaderValue::try_from(self.ua_header())?);
        headers.append(X_AMZ_USER_AGENT, HeaderValue::try_from(self.aws_ua_header())?);
        Ok(())
    }
}
