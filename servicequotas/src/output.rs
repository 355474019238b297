/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation outputs.

use crate::model::{RequestedServiceQuotaChange, ServiceInfo, ServiceQuota};
use serde::Deserialize;

/// Output of `GetServiceQuota`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetServiceQuotaOutput {
    /// The quota, with its applied value.
    pub quota: Option<ServiceQuota>,
}

/// Output of `GetAWSDefaultServiceQuota`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetAwsDefaultServiceQuotaOutput {
    /// The quota, with its default value.
    pub quota: Option<ServiceQuota>,
}

/// Output of `ListServices`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListServicesOutput {
    /// Present if more services are available.
    pub next_token: Option<String>,
    /// Services in this page.
    pub services: Option<Vec<ServiceInfo>>,
}

/// Output of `RequestServiceQuotaIncrease`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RequestServiceQuotaIncreaseOutput {
    /// The request that was created.
    pub requested_quota: Option<RequestedServiceQuotaChange>,
}
