/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation inputs and their builders. Inputs serialize to the request body as is.

use serde::Serialize;

/// Input of `GetServiceQuota`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetServiceQuotaInput {
    /// Service identifier, e.g. `ec2`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_code: Option<String>,
    /// Quota identifier, e.g. `L-1216C47A`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_code: Option<String>,
}

impl GetServiceQuotaInput {
    /// Creates a new builder for [`GetServiceQuotaInput`].
    pub fn builder() -> get_service_quota_input::Builder {
        get_service_quota_input::Builder::default()
    }
}

/// See [`GetServiceQuotaInput`].
pub mod get_service_quota_input {
    /// Builder for [`GetServiceQuotaInput`](super::GetServiceQuotaInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        service_code: Option<String>,
        quota_code: Option<String>,
    }

    impl Builder {
        #[allow(missing_docs)]
        pub fn service_code(mut self, inp: impl Into<String>) -> Self {
            self.service_code = Some(inp.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_service_code(mut self, inp: Option<String>) -> Self {
            self.service_code = inp;
            self
        }
        #[allow(missing_docs)]
        pub fn quota_code(mut self, inp: impl Into<String>) -> Self {
            self.quota_code = Some(inp.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_quota_code(mut self, inp: Option<String>) -> Self {
            self.quota_code = inp;
            self
        }
        /// Consumes the builder and constructs a [`GetServiceQuotaInput`](super::GetServiceQuotaInput).
        pub fn build(self) -> super::GetServiceQuotaInput {
            super::GetServiceQuotaInput {
                service_code: self.service_code,
                quota_code: self.quota_code,
            }
        }
    }
}

/// Input of `GetAWSDefaultServiceQuota`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetAwsDefaultServiceQuotaInput {
    /// Service identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_code: Option<String>,
    /// Quota identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_code: Option<String>,
}

impl GetAwsDefaultServiceQuotaInput {
    /// Creates a new builder for [`GetAwsDefaultServiceQuotaInput`].
    pub fn builder() -> get_aws_default_service_quota_input::Builder {
        get_aws_default_service_quota_input::Builder::default()
    }
}

/// See [`GetAwsDefaultServiceQuotaInput`].
pub mod get_aws_default_service_quota_input {
    /// Builder for [`GetAwsDefaultServiceQuotaInput`](super::GetAwsDefaultServiceQuotaInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        service_code: Option<String>,
        quota_code: Option<String>,
    }

    impl Builder {
        #[allow(missing_docs)]
        pub fn service_code(mut self, inp: impl Into<String>) -> Self {
            self.service_code = Some(inp.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_service_code(mut self, inp: Option<String>) -> Self {
            self.service_code = inp;
            self
        }
        #[allow(missing_docs)]
        pub fn quota_code(mut self, inp: impl Into<String>) -> Self {
            self.quota_code = Some(inp.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_quota_code(mut self, inp: Option<String>) -> Self {
            self.quota_code = inp;
            self
        }
        /// Consumes the builder and constructs a
        /// [`GetAwsDefaultServiceQuotaInput`](super::GetAwsDefaultServiceQuotaInput).
        pub fn build(self) -> super::GetAwsDefaultServiceQuotaInput {
            super::GetAwsDefaultServiceQuotaInput {
                service_code: self.service_code,
                quota_code: self.quota_code,
            }
        }
    }
}

/// Input of `ListServices`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListServicesInput {
    /// Token returned by the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Maximum number of services in one page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl ListServicesInput {
    /// Creates a new builder for [`ListServicesInput`].
    pub fn builder() -> list_services_input::Builder {
        list_services_input::Builder::default()
    }
}

/// See [`ListServicesInput`].
pub mod list_services_input {
    /// Builder for [`ListServicesInput`](super::ListServicesInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        next_token: Option<String>,
        max_results: Option<i32>,
    }

    impl Builder {
        #[allow(missing_docs)]
        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.next_token = inp;
            self
        }
        #[allow(missing_docs)]
        pub fn max_results(mut self, inp: i32) -> Self {
            self.max_results = Some(inp);
            self
        }
        #[allow(missing_docs)]
        pub fn set_max_results(mut self, inp: Option<i32>) -> Self {
            self.max_results = inp;
            self
        }
        /// Consumes the builder and constructs a [`ListServicesInput`](super::ListServicesInput).
        pub fn build(self) -> super::ListServicesInput {
            super::ListServicesInput {
                next_token: self.next_token,
                max_results: self.max_results,
            }
        }
    }
}

/// Input of `RequestServiceQuotaIncrease`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RequestServiceQuotaIncreaseInput {
    /// Service identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_code: Option<String>,
    /// Quota identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_code: Option<String>,
    /// The new value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_value: Option<f64>,
}

impl RequestServiceQuotaIncreaseInput {
    /// Creates a new builder for [`RequestServiceQuotaIncreaseInput`].
    pub fn builder() -> request_service_quota_increase_input::Builder {
        request_service_quota_increase_input::Builder::default()
    }
}

/// See [`RequestServiceQuotaIncreaseInput`].
pub mod request_service_quota_increase_input {
    /// Builder for [`RequestServiceQuotaIncreaseInput`](super::RequestServiceQuotaIncreaseInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        service_code: Option<String>,
        quota_code: Option<String>,
        desired_value: Option<f64>,
    }

    impl Builder {
        #[allow(missing_docs)]
        pub fn service_code(mut self, inp: impl Into<String>) -> Self {
            self.service_code = Some(inp.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_service_code(mut self, inp: Option<String>) -> Self {
            self.service_code = inp;
            self
        }
        #[allow(missing_docs)]
        pub fn quota_code(mut self, inp: impl Into<String>) -> Self {
            self.quota_code = Some(inp.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_quota_code(mut self, inp: Option<String>) -> Self {
            self.quota_code = inp;
            self
        }
        #[allow(missing_docs)]
        pub fn desired_value(mut self, inp: f64) -> Self {
            self.desired_value = Some(inp);
            self
        }
        #[allow(missing_docs)]
        pub fn set_desired_value(mut self, inp: Option<f64>) -> Self {
            self.desired_value = inp;
            self
        }
        /// Consumes the builder and constructs a
        /// [`RequestServiceQuotaIncreaseInput`](super::RequestServiceQuotaIncreaseInput).
        pub fn build(self) -> super::RequestServiceQuotaIncreaseInput {
            super::RequestServiceQuotaIncreaseInput {
                service_code: self.service_code,
                quota_code: self.quota_code,
                desired_value: self.desired_value,
            }
        }
    }
}
