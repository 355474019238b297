/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation outputs. Members the service leaves out are `None`.

use crate::model::{LedgerEncryptionDescription, LedgerState, LedgerSummary, PermissionsMode};
use serde::Deserialize;
use std::collections::HashMap;

/// Output of `CreateLedger`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateLedgerOutput {
    /// Name of the ledger.
    pub name: Option<String>,
    /// ARN of the ledger.
    pub arn: Option<String>,
    /// State of the ledger, normally `CREATING`.
    pub state: Option<LedgerState>,
    /// Creation time, in seconds since the Unix epoch.
    pub creation_date_time: Option<f64>,
    /// Permissions mode of the ledger.
    pub permissions_mode: Option<PermissionsMode>,
    /// Whether deletion protection is enabled.
    pub deletion_protection: Option<bool>,
    /// ARN of the customer managed key, if one is used.
    pub kms_key_arn: Option<String>,
}

/// Output of `DescribeLedger`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeLedgerOutput {
    /// Name of the ledger.
    pub name: Option<String>,
    /// ARN of the ledger.
    pub arn: Option<String>,
    /// Current state of the ledger.
    pub state: Option<LedgerState>,
    /// Creation time, in seconds since the Unix epoch.
    pub creation_date_time: Option<f64>,
    /// Permissions mode of the ledger.
    pub permissions_mode: Option<PermissionsMode>,
    /// Whether deletion protection is enabled.
    pub deletion_protection: Option<bool>,
    /// Encryption at rest settings.
    pub encryption_description: Option<LedgerEncryptionDescription>,
}

/// Output of `UpdateLedger`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateLedgerOutput {
    /// Name of the ledger.
    pub name: Option<String>,
    /// ARN of the ledger.
    pub arn: Option<String>,
    /// Current state of the ledger.
    pub state: Option<LedgerState>,
    /// Creation time, in seconds since the Unix epoch.
    pub creation_date_time: Option<f64>,
    /// Whether deletion protection is enabled.
    pub deletion_protection: Option<bool>,
    /// Encryption at rest settings.
    pub encryption_description: Option<LedgerEncryptionDescription>,
}

/// Output of `DeleteLedger`. The service returns no members.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeleteLedgerOutput {}

/// Output of `ListLedgers`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListLedgersOutput {
    /// Ledgers in this page.
    pub ledgers: Option<Vec<LedgerSummary>>,
    /// Present if more ledgers are available.
    pub next_token: Option<String>,
}

/// Output of `TagResource`. The service returns no members.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TagResourceOutput {}

/// Output of `ListTagsForResource`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListTagsForResourceOutput {
    /// Tags of the ledger.
    pub tags: Option<HashMap<String, String>>,
}
