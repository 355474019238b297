/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request bodies. Members bound to the URI are left out; unset members are omitted.

use crate::input::{CreateLedgerInput, TagResourceInput, UpdateLedgerInput};
use crate::model::PermissionsMode;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct CreateLedgerBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<&'a HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    permissions_mode: Option<&'a PermissionsMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deletion_protection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kms_key: Option<&'a str>,
}

impl<'a> From<&'a CreateLedgerInput> for CreateLedgerBody<'a> {
    fn from(input: &'a CreateLedgerInput) -> Self {
        CreateLedgerBody {
            name: input.name.as_deref(),
            tags: input.tags.as_ref(),
            permissions_mode: input.permissions_mode.as_ref(),
            deletion_protection: input.deletion_protection,
            kms_key: input.kms_key.as_deref(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct UpdateLedgerBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    deletion_protection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kms_key: Option<&'a str>,
}

impl<'a> From<&'a UpdateLedgerInput> for UpdateLedgerBody<'a> {
    fn from(input: &'a UpdateLedgerInput) -> Self {
        UpdateLedgerBody {
            deletion_protection: input.deletion_protection,
            kms_key: input.kms_key.as_deref(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct TagResourceBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<&'a HashMap<String, String>>,
}

impl<'a> From<&'a TagResourceInput> for TagResourceBody<'a> {
    fn from(input: &'a TagResourceInput) -> Self {
        TagResourceBody {
            tags: input.tags.as_ref(),
        }
    }
}
