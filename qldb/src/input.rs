/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation inputs and their builders.
//!
//! Builders never fail: required members are checked when the operation is called, so a
//! missing member surfaces as a [`MissingParameter`](smithy_types::ErrorKind::MissingParameter)
//! outcome.

use crate::model::PermissionsMode;
use std::collections::HashMap;

/// Input of `CreateLedger`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateLedgerInput {
    /// Name of the ledger. Must be unique within the account and region.
    pub name: Option<String>,
    /// Tags to attach to the ledger.
    pub tags: Option<HashMap<String, String>>,
    /// Permissions mode of the ledger.
    pub permissions_mode: Option<PermissionsMode>,
    /// Prevents the ledger from being deleted. Defaults to enabled on the service side.
    pub deletion_protection: Option<bool>,
    /// Key used for encryption at rest: `AWS_OWNED_KMS_KEY` or the ARN of a customer managed key.
    pub kms_key: Option<String>,
}

impl CreateLedgerInput {
    /// Creates a new builder for [`CreateLedgerInput`].
    pub fn builder() -> create_ledger_input::Builder {
        create_ledger_input::Builder::default()
    }
}

/// See [`CreateLedgerInput`].
pub mod create_ledger_input {
    use super::*;

    /// Builder for [`CreateLedgerInput`].
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        name: Option<String>,
        tags: Option<HashMap<String, String>>,
        permissions_mode: Option<PermissionsMode>,
        deletion_protection: Option<bool>,
        kms_key: Option<String>,
    }

    impl Builder {
        #[allow(missing_docs)]
        pub fn name(mut self, inp: impl Into<String>) -> Self {
            self.name = Some(inp.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_name(mut self, inp: Option<String>) -> Self {
            self.name = inp;
            self
        }
        /// Adds one tag.
        pub fn tags(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
            self.tags
                .get_or_insert_with(HashMap::new)
                .insert(k.into(), v.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_tags(mut self, inp: Option<HashMap<String, String>>) -> Self {
            self.tags = inp;
            self
        }
        #[allow(missing_docs)]
        pub fn permissions_mode(mut self, inp: PermissionsMode) -> Self {
            self.permissions_mode = Some(inp);
            self
        }
        #[allow(missing_docs)]
        pub fn set_permissions_mode(mut self, inp: Option<PermissionsMode>) -> Self {
            self.permissions_mode = inp;
            self
        }
        #[allow(missing_docs)]
        pub fn deletion_protection(mut self, inp: bool) -> Self {
            self.deletion_protection = Some(inp);
            self
        }
        #[allow(missing_docs)]
        pub fn set_deletion_protection(mut self, inp: Option<bool>) -> Self {
            self.deletion_protection = inp;
            self
        }
        #[allow(missing_docs)]
        pub fn kms_key(mut self, inp: impl Into<String>) -> Self {
            self.kms_key = Some(inp.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_kms_key(mut self, inp: Option<String>) -> Self {
            self.kms_key = inp;
            self
        }
        /// Consumes the builder and constructs a [`CreateLedgerInput`].
        pub fn build(self) -> CreateLedgerInput {
            CreateLedgerInput {
                name: self.name,
                tags: self.tags,
                permissions_mode: self.permissions_mode,
                deletion_protection: self.deletion_protection,
                kms_key: self.kms_key,
            }
        }
    }
}

/// Input of `DescribeLedger`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeLedgerInput {
    /// Name of the ledger.
    pub name: Option<String>,
}

impl DescribeLedgerInput {
    /// Creates a new builder for [`DescribeLedgerInput`].
    pub fn builder() -> describe_ledger_input::Builder {
        describe_ledger_input::Builder::default()
    }
}

/// See [`DescribeLedgerInput`].
pub mod describe_ledger_input {
    use super::*;

    /// Builder for [`DescribeLedgerInput`].
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        name: Option<String>,
    }

    impl Builder {
        #[allow(missing_docs)]
        pub fn name(mut self, inp: impl Into<String>) -> Self {
            self.name = Some(inp.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_name(mut self, inp: Option<String>) -> Self {
            self.name = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeLedgerInput`].
        pub fn build(self) -> DescribeLedgerInput {
            DescribeLedgerInput { name: self.name }
        }
    }
}

/// Input of `UpdateLedger`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateLedgerInput {
    /// Name of the ledger.
    pub name: Option<String>,
    /// New deletion protection setting.
    pub deletion_protection: Option<bool>,
    /// New key for encryption at rest.
    pub kms_key: Option<String>,
}

impl UpdateLedgerInput {
    /// Creates a new builder for [`UpdateLedgerInput`].
    pub fn builder() -> update_ledger_input::Builder {
        update_ledger_input::Builder::default()
    }
}

/// See [`UpdateLedgerInput`].
pub mod update_ledger_input {
    use super::*;

    /// Builder for [`UpdateLedgerInput`].
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        name: Option<String>,
        deletion_protection: Option<bool>,
        kms_key: Option<String>,
    }

    impl Builder {
        #[allow(missing_docs)]
        pub fn name(mut self, inp: impl Into<String>) -> Self {
            self.name = Some(inp.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_name(mut self, inp: Option<String>) -> Self {
            self.name = inp;
            self
        }
        #[allow(missing_docs)]
        pub fn deletion_protection(mut self, inp: bool) -> Self {
            self.deletion_protection = Some(inp);
            self
        }
        #[allow(missing_docs)]
        pub fn set_deletion_protection(mut self, inp: Option<bool>) -> Self {
            self.deletion_protection = inp;
            self
        }
        #[allow(missing_docs)]
        pub fn kms_key(mut self, inp: impl Into<String>) -> Self {
            self.kms_key = Some(inp.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_kms_key(mut self, inp: Option<String>) -> Self {
            self.kms_key = inp;
            self
        }
        /// Consumes the builder and constructs an [`UpdateLedgerInput`].
        pub fn build(self) -> UpdateLedgerInput {
            UpdateLedgerInput {
                name: self.name,
                deletion_protection: self.deletion_protection,
                kms_key: self.kms_key,
            }
        }
    }
}

/// Input of `DeleteLedger`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteLedgerInput {
    /// Name of the ledger.
    pub name: Option<String>,
}

impl DeleteLedgerInput {
    /// Creates a new builder for [`DeleteLedgerInput`].
    pub fn builder() -> delete_ledger_input::Builder {
        delete_ledger_input::Builder::default()
    }
}

/// See [`DeleteLedgerInput`].
pub mod delete_ledger_input {
    use super::*;

    /// Builder for [`DeleteLedgerInput`].
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        name: Option<String>,
    }

    impl Builder {
        #[allow(missing_docs)]
        pub fn name(mut self, inp: impl Into<String>) -> Self {
            self.name = Some(inp.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_name(mut self, inp: Option<String>) -> Self {
            self.name = inp;
            self
        }
        /// Consumes the builder and constructs a [`DeleteLedgerInput`].
        pub fn build(self) -> DeleteLedgerInput {
            DeleteLedgerInput { name: self.name }
        }
    }
}

/// Input of `ListLedgers`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListLedgersInput {
    /// Maximum number of ledgers in one page.
    pub max_results: Option<i32>,
    /// Token returned by the previous page.
    pub next_token: Option<String>,
}

impl ListLedgersInput {
    /// Creates a new builder for [`ListLedgersInput`].
    pub fn builder() -> list_ledgers_input::Builder {
        list_ledgers_input::Builder::default()
    }
}

/// See [`ListLedgersInput`].
pub mod list_ledgers_input {
    use super::*;

    /// Builder for [`ListLedgersInput`].
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        max_results: Option<i32>,
        next_token: Option<String>,
    }

    impl Builder {
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
        /// Consumes the builder and constructs a [`ListLedgersInput`].
        pub fn build(self) -> ListLedgersInput {
            ListLedgersInput {
                max_results: self.max_results,
                next_token: self.next_token,
            }
        }
    }
}

/// Input of `TagResource`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagResourceInput {
    /// ARN of the ledger to tag.
    pub resource_arn: Option<String>,
    /// Tags to add. Existing tags with the same key are overwritten.
    pub tags: Option<HashMap<String, String>>,
}

impl TagResourceInput {
    /// Creates a new builder for [`TagResourceInput`].
    pub fn builder() -> tag_resource_input::Builder {
        tag_resource_input::Builder::default()
    }
}

/// See [`TagResourceInput`].
pub mod tag_resource_input {
    use super::*;

    /// Builder for [`TagResourceInput`].
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        resource_arn: Option<String>,
        tags: Option<HashMap<String, String>>,
    }

    impl Builder {
        #[allow(missing_docs)]
        pub fn resource_arn(mut self, inp: impl Into<String>) -> Self {
            self.resource_arn = Some(inp.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_resource_arn(mut self, inp: Option<String>) -> Self {
            self.resource_arn = inp;
            self
        }
        /// Adds one tag.
        pub fn tags(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
            self.tags
                .get_or_insert_with(HashMap::new)
                .insert(k.into(), v.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_tags(mut self, inp: Option<HashMap<String, String>>) -> Self {
            self.tags = inp;
            self
        }
        /// Consumes the builder and constructs a [`TagResourceInput`].
        pub fn build(self) -> TagResourceInput {
            TagResourceInput {
                resource_arn: self.resource_arn,
                tags: self.tags,
            }
        }
    }
}

/// Input of `ListTagsForResource`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListTagsForResourceInput {
    /// ARN of the ledger.
    pub resource_arn: Option<String>,
}

impl ListTagsForResourceInput {
    /// Creates a new builder for [`ListTagsForResourceInput`].
    pub fn builder() -> list_tags_for_resource_input::Builder {
        list_tags_for_resource_input::Builder::default()
    }
}

/// See [`ListTagsForResourceInput`].
pub mod list_tags_for_resource_input {
    /// Builder for [`ListTagsForResourceInput`](super::ListTagsForResourceInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        resource_arn: Option<String>,
    }

    impl Builder {
        #[allow(missing_docs)]
        pub fn resource_arn(mut self, inp: impl Into<String>) -> Self {
            self.resource_arn = Some(inp.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_resource_arn(mut self, inp: Option<String>) -> Self {
            self.resource_arn = inp;
            self
        }
        /// Consumes the builder and constructs a [`ListTagsForResourceInput`](super::ListTagsForResourceInput).
        pub fn build(self) -> super::ListTagsForResourceInput {
            super::ListTagsForResourceInput {
                resource_arn: self.resource_arn,
            }
        }
    }
}
