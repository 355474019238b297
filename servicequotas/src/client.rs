/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::operation::{
    GetAwsDefaultServiceQuota, GetServiceQuota, ListServices, RequestServiceQuotaIncrease,
};
use aws_client::{Config, ServiceMetadata};
use smithy_http::operation::Protocol;

/// Static description of the Service Quotas service.
pub static SERVICE: ServiceMetadata = ServiceMetadata {
    name: "ServiceQuotas",
    endpoint_prefix: "servicequotas",
    signing_name: "servicequotas",
    api_version: "2019-06-24",
    protocol: Protocol::AwsJson1_1,
    target_prefix: Some("ServiceQuotasV20190624"),
};

/// Client for Service Quotas.
#[derive(Clone, Debug)]
pub struct Client {
    inner: aws_client::Client,
}

impl Client {
    /// Creates a client from `conf`.
    pub fn from_conf(conf: Config) -> Self {
        Client {
            inner: aws_client::Client::from_conf(&SERVICE, conf),
        }
    }

    /// Creates a client configured from the environment.
    pub fn from_env() -> Self {
        Self::from_conf(Config::from_env().build())
    }

    /// The configuration of this client.
    pub fn conf(&self) -> &Config {
        self.inner.conf()
    }
}

aws_client::operations! {
    Client {
        /// Returns the applied value of a quota.
        get_service_quota, get_service_quota_callable, get_service_quota_async => GetServiceQuota;
        /// Returns the default value of a quota.
        get_aws_default_service_quota, get_aws_default_service_quota_callable, get_aws_default_service_quota_async => GetAwsDefaultServiceQuota;
        /// Lists the services that have quotas.
        list_services, list_services_callable, list_services_async => ListServices;
        /// Requests a new value for a quota.
        request_service_quota_increase, request_service_quota_increase_callable, request_service_quota_increase_async => RequestServiceQuotaIncrease;
    }
}
