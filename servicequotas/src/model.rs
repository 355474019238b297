/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Shapes shared by several Service Quotas operations.

use serde::{Deserialize, Deserializer};

/// Status of a quota increase request.
#[non_exhaustive]
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum RequestStatus {
    #[allow(missing_docs)]
    Pending,
    /// A support case was opened for the request.
    CaseOpened,
    #[allow(missing_docs)]
    Approved,
    #[allow(missing_docs)]
    Denied,
    #[allow(missing_docs)]
    CaseClosed,
    /// A value this version of the client does not know about.
    Unknown(String),
}

impl RequestStatus {
    /// Returns the wire value.
    pub fn as_str(&self) -> &str {
        match self {
            RequestStatus::Pending => "PENDING",
            RequestStatus::CaseOpened => "CASE_OPENED",
            RequestStatus::Approved => "APPROVED",
            RequestStatus::Denied => "DENIED",
            RequestStatus::CaseClosed => "CASE_CLOSED",
            RequestStatus::Unknown(value) => value,
        }
    }

    /// Returns true once the request can no longer change.
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            RequestStatus::Approved | RequestStatus::Denied | RequestStatus::CaseClosed
        )
    }
}

impl From<&str> for RequestStatus {
    fn from(value: &str) -> Self {
        match value {
            "PENDING" => RequestStatus::Pending,
            "CASE_OPENED" => RequestStatus::CaseOpened,
            "APPROVED" => RequestStatus::Approved,
            "DENIED" => RequestStatus::Denied,
            "CASE_CLOSED" => RequestStatus::CaseClosed,
            other => RequestStatus::Unknown(other.to_owned()),
        }
    }
}

impl<'de> Deserialize<'de> for RequestStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(RequestStatus::from(value.as_str()))
    }
}

/// A quota and its value.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ServiceQuota {
    /// Service identifier, e.g. `ec2`.
    pub service_code: Option<String>,
    /// Service name.
    pub service_name: Option<String>,
    /// ARN of the quota.
    pub quota_arn: Option<String>,
    /// Quota identifier, e.g. `L-1216C47A`.
    pub quota_code: Option<String>,
    /// Quota name.
    pub quota_name: Option<String>,
    /// Quota value.
    pub value: Option<f64>,
    /// Unit of the value.
    pub unit: Option<String>,
    /// Whether the quota can be increased.
    pub adjustable: Option<bool>,
    /// Whether the quota applies to every region.
    pub global_quota: Option<bool>,
}

/// A service that has quotas.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ServiceInfo {
    /// Service identifier.
    pub service_code: Option<String>,
    /// Service name.
    pub service_name: Option<String>,
}

/// A quota increase request.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RequestedServiceQuotaChange {
    /// Request identifier.
    pub id: Option<String>,
    /// Support case identifier, once a case is opened.
    pub case_id: Option<String>,
    /// Service identifier.
    pub service_code: Option<String>,
    /// Quota identifier.
    pub quota_code: Option<String>,
    /// Requested value.
    pub desired_value: Option<f64>,
    /// Status of the request.
    pub status: Option<RequestStatus>,
    /// Creation time, in seconds since the Unix epoch.
    pub created: Option<f64>,
    /// ARN of the quota.
    pub quota_arn: Option<String>,
}
